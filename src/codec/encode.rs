use rayon::prelude::*;
use sha2::{Digest, Sha512};
use thiserror::Error;
use tracing::debug;

use crate::codec::decode::parse_vrs_id;
use crate::codec::pattern::DIGEST_SEGMENT_PATTERN;
use crate::core::types::{VrsId, SPECIAL_SEGMENT};
use crate::core::variant::{Position, VariantDescriptor};

/// Number of leading SHA-512 bytes kept in the digest segment
pub const DIGEST_BYTES: usize = 21;

/// Length of the encoded digest segment (21 bytes in unpadded base64)
pub const DIGEST_SEGMENT_LEN: usize = 28;

#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("Failed to encode digest for '{canonical}': {reason}")]
    Digest { canonical: String, reason: String },

    /// The variant cannot be written as an identifier that parses back to itself,
    /// e.g. an empty chromosome, a chromosome containing `:`, or control characters.
    #[error("Variant '{canonical}' has no parseable identifier: {reason}")]
    Unrepresentable { canonical: String, reason: String },
}

/// Compute the alphabet-safe digest segment for a canonical record.
///
/// SHA-512 over the bytes, truncated to [`DIGEST_BYTES`], then base64 with the
/// padding stripped, `/` mapped to `_` and `+` mapped to `-`.
#[must_use]
pub fn digest_segment(canonical: &[u8]) -> String {
    let mut hasher = Sha512::new();
    hasher.update(canonical);
    let hash = hasher.finalize();
    base64_url::encode(&hash[..DIGEST_BYTES])
}

/// Encode a variant into its identifier.
///
/// Every identifier returned parses back with [`parse_vrs_id`] to the segments it
/// was built from.
///
/// # Errors
///
/// Returns `EncodingError::Unrepresentable` if the identifier would not parse
/// back (empty or `:`-bearing chromosome, control characters in a field that
/// appears in the identifier). Returns `EncodingError::Digest` if the computed
/// digest segment is not [`DIGEST_SEGMENT_LEN`] characters of the URL-safe
/// alphabet, which signals an internal fault.
pub fn encode(variant: &VariantDescriptor) -> Result<VrsId, EncodingError> {
    let chromosome = variant.normalized_chromosome();

    let id = if variant.is_special() {
        debug!(
            "Wildcard allele at {}:{}, emitting special identifier",
            chromosome, variant.position
        );
        VrsId::Special {
            chromosome,
            position: variant.position.to_string(),
            reference_allele: variant.reference_allele.clone(),
            alternate_allele: variant.alternate_allele.clone(),
        }
    } else {
        let canonical = variant.canonical_record();
        let digest = digest_segment(canonical.as_bytes());

        if digest.len() != DIGEST_SEGMENT_LEN {
            return Err(EncodingError::Digest {
                canonical,
                reason: format!(
                    "digest segment has {} characters, expected {DIGEST_SEGMENT_LEN}",
                    digest.len()
                ),
            });
        }
        if !DIGEST_SEGMENT_PATTERN.is_match(&digest) {
            return Err(EncodingError::Digest {
                canonical,
                reason: format!("digest segment '{digest}' contains unsafe characters"),
            });
        }
        VrsId::Hashed { chromosome, digest }
    };

    check_round_trip(variant, &id)?;
    Ok(id)
}

/// Confirm the rendered identifier decodes to the segments it was built from.
fn check_round_trip(variant: &VariantDescriptor, id: &VrsId) -> Result<(), EncodingError> {
    let token = id.to_string();
    let unrepresentable = |reason: String| EncodingError::Unrepresentable {
        canonical: variant.canonical_record(),
        reason,
    };

    let parsed = parse_vrs_id(&token).map_err(|e| unrepresentable(e.to_string()))?;

    let (segment, payload) = match id {
        VrsId::Hashed { chromosome, digest } => (chromosome.as_str(), digest.clone()),
        VrsId::Special {
            chromosome,
            position,
            reference_allele,
            alternate_allele,
        } => (
            SPECIAL_SEGMENT,
            format!("{chromosome}-{position}-{reference_allele}-{alternate_allele}"),
        ),
    };

    if parsed.chromosome != segment || parsed.digest != payload {
        return Err(unrepresentable(format!(
            "'{token}' parses as chromosome '{}'",
            parsed.chromosome
        )));
    }
    Ok(())
}

/// Generate the identifier string for a variant.
///
/// # Examples
///
/// ```
/// use aiva_vrs::generate_vrs_id;
///
/// let id = generate_vrs_id("chr1", 12345u64, "A", "T", "GRCh38").unwrap();
/// assert_eq!(id, "ga4gh:VA:1:-Lei2LuvWoB18NBkXBO6zbjiFCFb");
///
/// let special = generate_vrs_id("1", 100u64, "*", "A", "GRCh38").unwrap();
/// assert_eq!(special, "ga4gh:VA:SPECIAL:1-100-*-A");
/// ```
///
/// # Errors
///
/// Returns `EncodingError` when the variant has no parseable identifier or on an
/// internal digest fault (see [`encode`]).
pub fn generate_vrs_id(
    chromosome: &str,
    position: impl Into<Position>,
    reference_allele: &str,
    alternate_allele: &str,
    assembly: &str,
) -> Result<String, EncodingError> {
    let variant = VariantDescriptor::new(chromosome, position, reference_allele, alternate_allele)
        .with_assembly(assembly);
    encode(&variant).map(|id| id.to_string())
}

/// Encode many variants in parallel. Results keep the input order.
#[must_use]
pub fn generate_vrs_ids(variants: &[VariantDescriptor]) -> Vec<Result<VrsId, EncodingError>> {
    variants.par_iter().map(encode).collect()
}
