use once_cell::sync::Lazy;
use regex::Regex;

/// Structural pattern every identifier matches.
/// Group 1 is the chromosome segment, group 2 the digest or special payload.
pub static VRS_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ga4gh:VA:([^:]+):(.+)$").expect("VRS identifier pattern is valid"));

/// Alphabet of a hashed digest segment (URL-safe base64, no padding)
pub static DIGEST_SEGMENT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("digest segment pattern is valid"));
