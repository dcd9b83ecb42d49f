/// Prefix used by UCSC-style chromosome names (chr1, chrX, chrM)
pub const UCSC_PREFIX: &str = "chr";

/// Canonicalize a chromosome label to the NCBI-style spelling used when hashing.
///
/// A leading `chr` is removed (case-sensitive), then the bare label is mapped
/// `M` -> `MT` and `Un` -> `UN`. Everything else passes through unchanged, so the
/// function is total: the empty string normalizes to the empty string.
///
/// # Examples
///
/// ```
/// use aiva_vrs::core::chromosome::normalize_chromosome;
///
/// assert_eq!(normalize_chromosome("chr7"), "7");
/// assert_eq!(normalize_chromosome("chrM"), "MT");
/// assert_eq!(normalize_chromosome("chrUn"), "UN");
/// assert_eq!(normalize_chromosome("X"), "X");
/// ```
#[must_use]
pub fn normalize_chromosome(chrom: &str) -> String {
    let bare = chrom.strip_prefix(UCSC_PREFIX).unwrap_or(chrom);

    match bare {
        "M" => "MT".to_string(),
        "Un" => "UN".to_string(),
        other => other.to_string(),
    }
}
