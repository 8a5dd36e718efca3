use crate::core::models::site::BridgeRecord;
use std::fmt::{self, Write};

pub const NO_BRIDGES_MESSAGE: &str = "No potential disulfide bridges found in this file.";

/// Writes the human-readable report for `bridges`, in the order given.
///
/// Each bridge takes two lines: the residue pair, then distance and signed
/// dihedral with two decimals. An empty slice yields [`NO_BRIDGES_MESSAGE`].
pub fn write_report<W: Write>(out: &mut W, bridges: &[BridgeRecord]) -> fmt::Result {
    if bridges.is_empty() {
        return writeln!(out, "{}", NO_BRIDGES_MESSAGE);
    }
    for bridge in bridges {
        writeln!(
            out,
            "Potential disulfide bridge between CYS {} in chain {} and CYS {} in chain {}",
            bridge.first.residue_number,
            bridge.first.chain_id,
            bridge.second.residue_number,
            bridge.second.chain_id
        )?;
        writeln!(
            out,
            "Distance: {:.2} Å, Dihedral angle: {:.2}°",
            bridge.distance, bridge.dihedral
        )?;
    }
    Ok(())
}

pub fn format_report(bridges: &[BridgeRecord]) -> String {
    let mut report = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut report, bridges);
    report
}
