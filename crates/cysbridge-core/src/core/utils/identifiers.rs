use phf::{Set, phf_set};

pub const CYSTEINE_SULFUR_GAMMA_ATOM_NAME: &str = "SG";
pub const CYSTEINE_BETA_CARBON_ATOM_NAME: &str = "CB";

// Force-field variants: disulfide-bonded (CYX) and deprotonated (CYM) cysteine.
static CYSTEINE_NAMES: Set<&'static str> = phf_set! {
    "CYS", "CYX", "CYM",
};

/// Whether `residue_name` is a cysteine code, after trimming. Case-sensitive.
pub fn is_cysteine_name(residue_name: &str) -> bool {
    CYSTEINE_NAMES.contains(residue_name.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_cysteine_name_accepts_force_field_variants() {
        assert!(is_cysteine_name("CYS"));
        assert!(is_cysteine_name("CYX"));
        assert!(is_cysteine_name("CYM"));
        assert!(!is_cysteine_name("SER"));
        assert!(!is_cysteine_name("MET"));
    }

    #[test]
    fn is_cysteine_name_trims_whitespace_and_is_case_sensitive() {
        assert!(is_cysteine_name(" CYS "));
        assert!(!is_cysteine_name("cys"));
    }

    #[test]
    fn non_amino_acid_names_are_not_cysteine() {
        assert!(!is_cysteine_name("HOH"));
        assert!(!is_cysteine_name("NAG"));
        assert!(!is_cysteine_name(""));
    }
}
