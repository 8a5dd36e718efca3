use crate::core::io::traits::StructureFile;
use crate::core::models::atom::Atom;
use crate::core::models::builder::StructureBuilder;
use crate::core::models::ids::ResidueId;
use crate::core::models::structure::Structure;
use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RawLine {
    pub line_number: usize,
    pub content: String,
}

/// Non-coordinate records kept alongside the parsed structure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdbMetadata {
    /// Four-character ID code from the `HEADER` record, if present.
    pub id_code: Option<String>,
    /// Every record that is neither a coordinate nor a model delimiter.
    pub header_lines: Vec<RawLine>,
}

impl PdbMetadata {
    /// Header records joined back into text, one record per line.
    pub fn header_text(&self) -> String {
        self.header_lines
            .iter()
            .map(|line| line.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PdbParseErrorKind,
    },
    #[error("Inconsistent data on line {line}: {message}")]
    Inconsistency { line: usize, message: String },
    #[error("Missing required record: {0}")]
    MissingRecord(String),
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Required field in columns {columns} is empty")]
    MissingRequiredField { columns: String },
    #[error("Line is too short for ATOM/HETATM record ({length} chars, need at least 54)")]
    LineTooShort { length: usize },
}

const MIN_ATOM_RECORD_LENGTH: usize = 54;

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end.min(line.len())).unwrap_or("").trim()
}

fn column_char(line: &str, index: usize) -> Option<char> {
    line.get(index..index + 1)
        .and_then(|s| s.chars().next())
        .filter(|c| !c.is_whitespace())
}

fn parse_float(line: &str, line_num: usize, start: usize, end: usize) -> Result<f64, PdbError> {
    let value = slice_and_trim(line, start, end);
    value.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidFloat {
            columns: format!("{}-{}", start + 1, end),
            value: value.into(),
        },
    })
}

fn parse_optional_float(
    line: &str,
    line_num: usize,
    start: usize,
    end: usize,
    default: f64,
) -> Result<f64, PdbError> {
    if slice_and_trim(line, start, end).is_empty() {
        Ok(default)
    } else {
        parse_float(line, line_num, start, end)
    }
}

struct AtomRecord {
    chain_id: char,
    residue_number: isize,
    insertion_code: Option<char>,
    residue_name: String,
    atom: Atom,
}

fn parse_atom_record(line: &str, line_num: usize, is_hetero: bool) -> Result<AtomRecord, PdbError> {
    if line.len() < MIN_ATOM_RECORD_LENGTH {
        return Err(PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::LineTooShort { length: line.len() },
        });
    }

    let name = slice_and_trim(line, 12, 16);
    if name.is_empty() {
        return Err(PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::MissingRequiredField {
                columns: "13-16".into(),
            },
        });
    }

    // Hybrid-36 serials in very large files are not decimal; they are informational only.
    let serial = slice_and_trim(line, 6, 11).parse::<usize>().unwrap_or(0);

    let res_seq_str = slice_and_trim(line, 22, 26);
    let residue_number: isize = res_seq_str.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidInt {
            columns: "23-26".into(),
            value: res_seq_str.into(),
        },
    })?;

    let x = parse_float(line, line_num, 30, 38)?;
    let y = parse_float(line, line_num, 38, 46)?;
    let z = parse_float(line, line_num, 46, 54)?;
    let occupancy = parse_optional_float(line, line_num, 54, 60, 1.0)?;
    let b_factor = parse_optional_float(line, line_num, 60, 66, 0.0)?;

    let atom = Atom {
        serial,
        name: name.to_string(),
        residue_id: ResidueId::default(),
        position: Point3::new(x, y, z),
        occupancy,
        b_factor,
        alt_loc: column_char(line, 16),
        is_hetero,
    };

    Ok(AtomRecord {
        chain_id: column_char(line, 21).unwrap_or(' '),
        residue_number,
        insertion_code: column_char(line, 26),
        residue_name: slice_and_trim(line, 17, 20).to_string(),
        atom,
    })
}

/// Reader for the fixed-column PDB coordinate format.
///
/// All `MODEL` blocks are kept. Records other than coordinates and model
/// delimiters are stored verbatim in [`PdbMetadata::header_lines`].
pub struct PdbFile;

impl StructureFile for PdbFile {
    type Metadata = PdbMetadata;
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<(Structure, Self::Metadata), Self::Error> {
        let mut builder = StructureBuilder::new();
        let mut metadata = PdbMetadata::default();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            let record_type = slice_and_trim(&line, 0, 6);
            match record_type {
                "" => continue,
                "ATOM" | "HETATM" => {
                    let record = parse_atom_record(&line, line_num, record_type == "HETATM")?;
                    builder
                        .add_atom(
                            record.chain_id,
                            record.residue_number,
                            record.insertion_code,
                            &record.residue_name,
                            record.atom,
                        )
                        .ok_or_else(|| PdbError::Inconsistency {
                            line: line_num,
                            message: "atom could not be attached to its residue".into(),
                        })?;
                }
                "MODEL" => {
                    let serial = line
                        .split_whitespace()
                        .nth(1)
                        .and_then(|s| s.parse().ok())
                        .unwrap_or(builder.model_count() + 1);
                    builder.start_model(serial);
                }
                "ENDMDL" => {
                    builder.end_model();
                }
                "END" => break,
                "TER" | "ANISOU" | "SIGATM" | "SIGUIJ" | "CONECT" | "MASTER" => {}
                _ => {
                    if record_type == "HEADER" {
                        let id_code = slice_and_trim(&line, 62, 66);
                        if !id_code.is_empty() {
                            metadata.id_code = Some(id_code.to_string());
                        }
                    }
                    metadata.header_lines.push(RawLine {
                        line_number: line_num,
                        content: line.clone(),
                    });
                }
            }
        }

        if builder.atom_count() == 0 {
            return Err(PdbError::MissingRecord("ATOM/HETATM records".into()));
        }
        Ok((builder.build(), metadata))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[allow(clippy::too_many_arguments)]
    fn atom_line(
        serial: usize,
        name: &str,
        alt_loc: char,
        res_name: &str,
        chain: char,
        res_seq: isize,
        pos: (f64, f64, f64),
        occupancy: f64,
        b_factor: f64,
    ) -> String {
        format!(
            "ATOM  {:>5} {:<4}{}{:>3} {}{:>4}    {:>8.3}{:>8.3}{:>8.3}{:>6.2}{:>6.2}           {}",
            serial,
            name,
            alt_loc,
            res_name,
            chain,
            res_seq,
            pos.0,
            pos.1,
            pos.2,
            occupancy,
            b_factor,
            &name[..1]
        )
    }

    fn minimal_pdb() -> String {
        [
            "HEADER    OXIDOREDUCTASE                          12-MAR-04   1XYZ".to_string(),
            "EXPDTA    X-RAY DIFFRACTION".to_string(),
            atom_line(1, "CB", ' ', "CYS", 'A', 3, (0.0, 0.0, 0.0), 1.0, 12.5),
            atom_line(2, "SG", ' ', "CYS", 'A', 3, (1.8, 0.0, 0.0), 1.0, 14.0),
            atom_line(3, "CA", ' ', "GLY", 'A', 4, (3.0, 1.0, 0.0), 1.0, 20.0),
            "TER       4      GLY A   4".to_string(),
            atom_line(5, "SG", ' ', "CYS", 'B', 40, (5.0, 2.0, 1.0), 1.0, 33.3),
            "END".to_string(),
        ]
        .join("\n")
    }

    #[test]
    fn reads_chains_residues_and_atoms() {
        let (structure, metadata) = PdbFile::read_from_str(&minimal_pdb()).unwrap();

        assert_eq!(structure.models().len(), 1);
        assert_eq!(structure.chains_iter().count(), 2);
        assert_eq!(structure.residues_iter().count(), 3);
        assert_eq!(structure.atoms_iter().count(), 4);
        assert_eq!(metadata.id_code.as_deref(), Some("1XYZ"));

        let chain_a = structure.find_chain_by_id(0, 'A').unwrap();
        let cys = structure.find_residue_by_id(chain_a, 3, None).unwrap();
        let sg = structure.residue_atom(cys, "SG").unwrap();
        assert_eq!(sg.position, Point3::new(1.8, 0.0, 0.0));
        assert_eq!(sg.b_factor, 14.0);
        assert_eq!(sg.serial, 2);
        assert!(structure.residue(cys).unwrap().is_cysteine());
    }

    #[test]
    fn header_records_are_kept_in_metadata() {
        let (_, metadata) = PdbFile::read_from_str(&minimal_pdb()).unwrap();
        assert_eq!(metadata.header_lines.len(), 2);
        assert_eq!(metadata.header_lines[1].line_number, 2);
        assert!(metadata.header_text().contains("X-RAY DIFFRACTION"));
    }

    #[test]
    fn multiple_models_are_all_read() {
        let text = [
            "MODEL        1".to_string(),
            atom_line(1, "SG", ' ', "CYS", 'A', 1, (0.0, 0.0, 0.0), 1.0, 90.0),
            "ENDMDL".to_string(),
            "MODEL        2".to_string(),
            atom_line(1, "SG", ' ', "CYS", 'A', 1, (0.5, 0.0, 0.0), 1.0, 90.0),
            "ENDMDL".to_string(),
            "END".to_string(),
        ]
        .join("\n");

        let (structure, _) = PdbFile::read_from_str(&text).unwrap();
        let serials: Vec<usize> = structure.models().iter().map(|m| m.serial).collect();
        assert_eq!(serials, vec![1, 2]);
        assert_eq!(structure.residues_iter().count(), 2);
    }

    #[test]
    fn alternate_locations_keep_highest_occupancy() {
        let text = [
            atom_line(1, "SG", 'A', "CYS", 'A', 7, (1.0, 0.0, 0.0), 0.35, 10.0),
            atom_line(2, "SG", 'B', "CYS", 'A', 7, (2.0, 0.0, 0.0), 0.65, 11.0),
        ]
        .join("\n");

        let (structure, _) = PdbFile::read_from_str(&text).unwrap();
        let chain = structure.find_chain_by_id(0, 'A').unwrap();
        let cys = structure.find_residue_by_id(chain, 7, None).unwrap();
        let sg = structure.residue_atom(cys, "SG").unwrap();
        assert_eq!(sg.alt_loc, Some('B'));
        assert_eq!(sg.position, Point3::new(2.0, 0.0, 0.0));
        assert_eq!(structure.atoms_iter().count(), 1);
    }

    #[test]
    fn missing_occupancy_and_b_factor_use_defaults() {
        let full = atom_line(1, "SG", ' ', "CYS", 'A', 1, (1.0, 2.0, 3.0), 1.0, 55.0);
        let truncated = &full[..54];

        let (structure, _) = PdbFile::read_from_str(truncated).unwrap();
        let (_, atom) = structure.atoms_iter().next().unwrap();
        assert_eq!(atom.occupancy, 1.0);
        assert_eq!(atom.b_factor, 0.0);
    }

    #[test]
    fn insertion_codes_split_residues() {
        let mut with_code = atom_line(2, "SG", ' ', "CYS", 'A', 52, (0.0, 0.0, 0.0), 1.0, 5.0);
        with_code.replace_range(26..27, "A");
        let text = [
            atom_line(1, "SG", ' ', "CYS", 'A', 52, (3.0, 0.0, 0.0), 1.0, 5.0),
            with_code,
        ]
        .join("\n");

        let (structure, _) = PdbFile::read_from_str(&text).unwrap();
        let chain = structure.find_chain_by_id(0, 'A').unwrap();
        assert!(structure.find_residue_by_id(chain, 52, None).is_some());
        assert!(structure.find_residue_by_id(chain, 52, Some('A')).is_some());
    }

    #[test]
    fn hetatm_records_are_flagged() {
        let line = atom_line(1, "O", ' ', "HOH", 'W', 501, (0.0, 0.0, 0.0), 1.0, 30.0)
            .replacen("ATOM  ", "HETATM", 1);
        let (structure, _) = PdbFile::read_from_str(&line).unwrap();
        let (_, atom) = structure.atoms_iter().next().unwrap();
        assert!(atom.is_hetero);
    }

    #[test]
    fn file_without_atoms_is_rejected() {
        let result = PdbFile::read_from_str("HEADER    EMPTY\nEND\n");
        assert!(matches!(result, Err(PdbError::MissingRecord(_))));
    }

    #[test]
    fn short_atom_record_is_rejected_with_line_number() {
        let text = format!("REMARK   1\n{}", "ATOM      1  SG  CYS A   1      1.000");
        let result = PdbFile::read_from_str(&text);
        assert!(matches!(
            result,
            Err(PdbError::Parse {
                line: 2,
                kind: PdbParseErrorKind::LineTooShort { .. }
            })
        ));
    }

    #[test]
    fn malformed_coordinate_is_rejected() {
        let mut line = atom_line(1, "SG", ' ', "CYS", 'A', 1, (1.0, 2.0, 3.0), 1.0, 5.0);
        line.replace_range(30..38, "   abcde");
        let result = PdbFile::read_from_str(&line);
        match result {
            Err(PdbError::Parse {
                line: 1,
                kind: PdbParseErrorKind::InvalidFloat { columns, value },
            }) => {
                assert_eq!(columns, "31-38");
                assert_eq!(value, "abcde");
            }
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn malformed_residue_number_is_rejected() {
        let mut line = atom_line(1, "SG", ' ', "CYS", 'A', 1, (1.0, 2.0, 3.0), 1.0, 5.0);
        line.replace_range(22..26, "  x1");
        let result = PdbFile::read_from_str(&line);
        assert!(matches!(
            result,
            Err(PdbError::Parse {
                kind: PdbParseErrorKind::InvalidInt { .. },
                ..
            })
        ));
    }

    #[test]
    fn read_from_path_reads_file_on_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", minimal_pdb()).unwrap();

        let (structure, _) = PdbFile::read_from_path(file.path()).unwrap();
        assert_eq!(structure.atoms_iter().count(), 4);
    }

    #[test]
    fn read_from_missing_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = PdbFile::read_from_path(dir.path().join("absent.pdb"));
        assert!(matches!(result, Err(PdbError::Io(_))));
    }
}
