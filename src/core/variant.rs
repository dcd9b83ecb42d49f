use serde::{Deserialize, Serialize};

use crate::core::chromosome::normalize_chromosome;

/// Assembly used when the caller does not name one
pub const DEFAULT_ASSEMBLY: &str = "GRCh38";

/// Allele value that marks a variant as special (spanning deletion / no-call)
pub const WILDCARD_ALLELE: &str = "*";

fn default_assembly() -> String {
    DEFAULT_ASSEMBLY.to_string()
}

/// A variant position as supplied by the caller.
///
/// Positions are rendered verbatim into the canonical record, so `12345` and
/// `"12345"` hash identically while `"012345"` does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Position {
    Integer(u64),
    Text(String),
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(pos) => write!(f, "{pos}"),
            Self::Text(pos) => write!(f, "{pos}"),
        }
    }
}

impl From<u64> for Position {
    fn from(pos: u64) -> Self {
        Self::Integer(pos)
    }
}

impl From<u32> for Position {
    fn from(pos: u32) -> Self {
        Self::Integer(u64::from(pos))
    }
}

impl From<&str> for Position {
    fn from(pos: &str) -> Self {
        Self::Text(pos.to_string())
    }
}

impl From<String> for Position {
    fn from(pos: String) -> Self {
        Self::Text(pos)
    }
}

/// A single variant to be identified
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantDescriptor {
    /// Chromosome as supplied (UCSC or NCBI spelling)
    pub chromosome: String,

    /// Position on the chromosome
    pub position: Position,

    /// Reference allele; may be empty for insertions
    pub reference_allele: String,

    /// Alternate allele; may be empty for deletions
    pub alternate_allele: String,

    /// Genome assembly (e.g. `GRCh38`, `GRCh37`)
    #[serde(default = "default_assembly")]
    pub assembly: String,
}

impl VariantDescriptor {
    pub fn new(
        chromosome: impl Into<String>,
        position: impl Into<Position>,
        reference_allele: impl Into<String>,
        alternate_allele: impl Into<String>,
    ) -> Self {
        Self {
            chromosome: chromosome.into(),
            position: position.into(),
            reference_allele: reference_allele.into(),
            alternate_allele: alternate_allele.into(),
            assembly: default_assembly(),
        }
    }

    #[must_use]
    pub fn with_assembly(mut self, assembly: impl Into<String>) -> Self {
        self.assembly = assembly.into();
        self
    }

    /// Chromosome after `chr` stripping and `M`/`Un` remapping
    #[must_use]
    pub fn normalized_chromosome(&self) -> String {
        normalize_chromosome(&self.chromosome)
    }

    /// True when either allele is the `*` wildcard
    #[must_use]
    pub fn is_special(&self) -> bool {
        self.reference_allele == WILDCARD_ALLELE || self.alternate_allele == WILDCARD_ALLELE
    }

    /// The `{assembly}-{chrom}-{pos}-{ref}-{alt}` string that is hashed.
    ///
    /// Fields are joined as-is; no escaping is applied, so a dash inside a field
    /// is indistinguishable from a separator.
    #[must_use]
    pub fn canonical_record(&self) -> String {
        format!(
            "{}-{}-{}-{}-{}",
            self.assembly,
            self.normalized_chromosome(),
            self.position,
            self.reference_allele,
            self.alternate_allele
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_assembly() {
        let variant = VariantDescriptor::new("chr1", 12345u64, "A", "T");
        assert_eq!(variant.assembly, "GRCh38");

        let variant = variant.with_assembly("GRCh37");
        assert_eq!(variant.assembly, "GRCh37");
    }

    #[test]
    fn test_canonical_record() {
        let variant = VariantDescriptor::new("chr1", 12345u64, "A", "T");
        assert_eq!(variant.canonical_record(), "GRCh38-1-12345-A-T");

        let variant = VariantDescriptor::new("chrM", "73", "A", "G").with_assembly("GRCh37");
        assert_eq!(variant.canonical_record(), "GRCh37-MT-73-A-G");

        // Empty alleles are kept as empty fields
        let variant = VariantDescriptor::new("7", 55_174_772u64, "GGAATTAAGAGAAGC", "");
        assert_eq!(
            variant.canonical_record(),
            "GRCh38-7-55174772-GGAATTAAGAGAAGC-"
        );
    }

    #[test]
    fn test_position_renders_verbatim() {
        assert_eq!(Position::from(100u64).to_string(), "100");
        assert_eq!(Position::from("100").to_string(), "100");
        assert_eq!(Position::from("0100").to_string(), "0100");
        assert_eq!(Position::from(String::from("abc")).to_string(), "abc");
    }

    #[test]
    fn test_is_special() {
        assert!(VariantDescriptor::new("1", 100u64, "*", "A").is_special());
        assert!(VariantDescriptor::new("1", 100u64, "A", "*").is_special());
        assert!(!VariantDescriptor::new("1", 100u64, "A", "T").is_special());
        // Only an exact wildcard counts
        assert!(!VariantDescriptor::new("1", 100u64, "A*", "T").is_special());
        assert!(!VariantDescriptor::new("1", 100u64, "<*>", "T").is_special());
    }

    #[test]
    fn test_deserialize_position_forms() {
        let json = r#"{"chromosome":"chr1","position":12345,"reference_allele":"A","alternate_allele":"T"}"#;
        let variant: VariantDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(variant.position, Position::Integer(12345));
        assert_eq!(variant.assembly, "GRCh38");

        let json = r#"{"chromosome":"chr1","position":"12345","reference_allele":"A","alternate_allele":"T","assembly":"GRCh37"}"#;
        let variant: VariantDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(variant.position, Position::Text("12345".to_string()));
        assert_eq!(variant.assembly, "GRCh37");
    }
}
