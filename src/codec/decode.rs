use thiserror::Error;

use crate::codec::pattern::VRS_ID_PATTERN;
use crate::core::types::{IdentifierType, ParsedVrsId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidIdentifierError {
    #[error("VRS identifier is empty")]
    Empty,

    #[error("VRS identifier is not valid UTF-8")]
    NotUtf8,

    #[error("VRS identifier contains non-printable characters")]
    NonPrintable,

    #[error("Invalid VRS identifier format: {0}")]
    PatternMismatch(String),
}

/// Split an identifier into its chromosome and digest segments.
///
/// Only the structure is checked: the digest is not recomputed and special-form
/// payloads are returned unsplit in `digest`.
///
/// # Examples
///
/// ```
/// use aiva_vrs::parse_vrs_id;
///
/// let parsed = parse_vrs_id("ga4gh:VA:7:EByCs2w8wDg4HTJ7WD6DnXA9Gmzk").unwrap();
/// assert_eq!(parsed.chromosome, "7");
/// assert_eq!(parsed.digest, "EByCs2w8wDg4HTJ7WD6DnXA9Gmzk");
/// ```
///
/// # Errors
///
/// Returns `InvalidIdentifierError::Empty` for an empty string,
/// `InvalidIdentifierError::NonPrintable` if it contains control characters, or
/// `InvalidIdentifierError::PatternMismatch` if it is not `ga4gh:VA:{chrom}:{digest}`.
pub fn parse_vrs_id(vrs_id: &str) -> Result<ParsedVrsId, InvalidIdentifierError> {
    if vrs_id.is_empty() {
        return Err(InvalidIdentifierError::Empty);
    }
    if vrs_id.chars().any(char::is_control) {
        return Err(InvalidIdentifierError::NonPrintable);
    }

    let caps = VRS_ID_PATTERN
        .captures(vrs_id)
        .ok_or_else(|| InvalidIdentifierError::PatternMismatch(vrs_id.to_string()))?;

    Ok(ParsedVrsId {
        chromosome: caps[1].to_string(),
        digest: caps[2].to_string(),
        id_type: IdentifierType::VariationAllele,
    })
}

/// Parse an identifier from raw bytes.
///
/// # Errors
///
/// Returns `InvalidIdentifierError::NotUtf8` if the bytes are not UTF-8, otherwise
/// the same errors as [`parse_vrs_id`].
pub fn parse_vrs_id_bytes(bytes: &[u8]) -> Result<ParsedVrsId, InvalidIdentifierError> {
    let text = std::str::from_utf8(bytes).map_err(|_| InvalidIdentifierError::NotUtf8)?;
    parse_vrs_id(text)
}

/// Check whether a string is a structurally valid identifier. Never fails.
#[must_use]
pub fn is_valid_vrs_id(vrs_id: &str) -> bool {
    parse_vrs_id(vrs_id).is_ok()
}

/// Extract the chromosome segment of an identifier
///
/// # Errors
///
/// Returns `InvalidIdentifierError` if the identifier cannot be parsed.
pub fn chromosome_from_vrs_id(vrs_id: &str) -> Result<String, InvalidIdentifierError> {
    parse_vrs_id(vrs_id).map(|parsed| parsed.chromosome)
}
