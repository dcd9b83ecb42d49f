use serde::{Deserialize, Serialize};

/// Scheme tag prefixed to every identifier
pub const VRS_PREFIX: &str = "ga4gh:VA:";

/// Chromosome segment used by special-form identifiers
pub const SPECIAL_SEGMENT: &str = "SPECIAL";

/// Identifier type carried in the scheme tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentifierType {
    /// Variation allele
    #[serde(rename = "VA")]
    VariationAllele,
}

impl std::fmt::Display for IdentifierType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VariationAllele => write!(f, "VA"),
        }
    }
}

/// A generated variant identifier.
///
/// The two forms carry different guarantees: `Hashed` is one-way and
/// collision-resistant, `Special` is plaintext and reversible.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VrsId {
    /// `ga4gh:VA:{chromosome}:{digest}`
    Hashed { chromosome: String, digest: String },

    /// `ga4gh:VA:SPECIAL:{chromosome}-{position}-{ref}-{alt}`
    Special {
        chromosome: String,
        position: String,
        reference_allele: String,
        alternate_allele: String,
    },
}

impl VrsId {
    /// True for identifiers produced by the wildcard-allele bypass
    #[must_use]
    pub fn is_special(&self) -> bool {
        matches!(self, Self::Special { .. })
    }

    /// The chromosome carried by this identifier (always normalized)
    #[must_use]
    pub fn chromosome(&self) -> &str {
        match self {
            Self::Hashed { chromosome, .. } | Self::Special { chromosome, .. } => {
                chromosome.as_str()
            }
        }
    }
}

impl std::fmt::Display for VrsId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hashed { chromosome, digest } => write!(f, "{VRS_PREFIX}{chromosome}:{digest}"),
            Self::Special {
                chromosome,
                position,
                reference_allele,
                alternate_allele,
            } => write!(
                f,
                "{VRS_PREFIX}{SPECIAL_SEGMENT}:{chromosome}-{position}-{reference_allele}-{alternate_allele}"
            ),
        }
    }
}

/// Components recovered from an identifier string.
///
/// For special-form identifiers `chromosome` is `SPECIAL` and `digest` holds the
/// plaintext `chrom-pos-ref-alt` payload; the parser does not tell the two apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedVrsId {
    pub chromosome: String,
    pub digest: String,
    #[serde(rename = "type")]
    pub id_type: IdentifierType,
}

/// Result for one identifier in a multi-identifier request.
///
/// Serializes as `{"vrs_id": ..., <fields of T>}` on success and
/// `{"vrs_id": ..., "error": ...}` on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdOutcome<T> {
    pub vrs_id: String,
    #[serde(flatten)]
    pub value: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> IdOutcome<T> {
    pub fn from_result<E: std::fmt::Display>(vrs_id: &str, result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self {
                vrs_id: vrs_id.to_string(),
                value: Some(value),
                error: None,
            },
            Err(e) => Self {
                vrs_id: vrs_id.to_string(),
                value: None,
                error: Some(e.to_string()),
            },
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashed_display() {
        let id = VrsId::Hashed {
            chromosome: "1".to_string(),
            digest: "abc".to_string(),
        };
        assert_eq!(id.to_string(), "ga4gh:VA:1:abc");
        assert!(!id.is_special());
        assert_eq!(id.chromosome(), "1");
    }

    #[test]
    fn test_special_display() {
        let id = VrsId::Special {
            chromosome: "MT".to_string(),
            position: "100".to_string(),
            reference_allele: "*".to_string(),
            alternate_allele: "A".to_string(),
        };
        assert_eq!(id.to_string(), "ga4gh:VA:SPECIAL:MT-100-*-A");
        assert!(id.is_special());
        assert_eq!(id.chromosome(), "MT");
    }

    #[test]
    fn test_parsed_serializes_type_key() {
        let parsed = ParsedVrsId {
            chromosome: "7".to_string(),
            digest: "xyz".to_string(),
            id_type: IdentifierType::VariationAllele,
        };
        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"chromosome": "7", "digest": "xyz", "type": "VA"})
        );
    }

    #[test]
    fn test_id_outcome_serialization() {
        let parsed = ParsedVrsId {
            chromosome: "7".to_string(),
            digest: "xyz".to_string(),
            id_type: IdentifierType::VariationAllele,
        };
        let ok = IdOutcome::from_result::<String>("ga4gh:VA:7:xyz", Ok(parsed));
        assert!(ok.is_ok());
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            serde_json::json!({
                "vrs_id": "ga4gh:VA:7:xyz",
                "chromosome": "7",
                "digest": "xyz",
                "type": "VA",
            })
        );

        let failed = IdOutcome::<ParsedVrsId>::from_result("bogus", Err("no match"));
        assert!(!failed.is_ok());
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            serde_json::json!({"vrs_id": "bogus", "error": "no match"})
        );
    }
}
