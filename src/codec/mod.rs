//! The variant identifier codec.
//!
//! An identifier is built from the canonical record
//! `{assembly}-{chromosome}-{position}-{ref}-{alt}` (chromosome normalized):
//!
//! 1. SHA-512 over the UTF-8 bytes of the record
//! 2. Keep the first 21 bytes
//! 3. Base64 without padding, `/` -> `_`, `+` -> `-` (28 characters)
//! 4. Prefix with `ga4gh:VA:{chromosome}:`
//!
//! Variants with a `*` allele skip hashing and produce a plaintext
//! `ga4gh:VA:SPECIAL:{chromosome}-{position}-{ref}-{alt}` identifier.
//!
//! The encoder only returns identifiers that parse back to their own segments;
//! variants that cannot be written that way are an `EncodingError`.
//!
//! ## Example
//!
//! ```rust
//! use aiva_vrs::codec::{generate_vrs_id, is_valid_vrs_id, parse_vrs_id};
//!
//! let id = generate_vrs_id("chr17", 31_350_290u64, "C", "T", "GRCh38").unwrap();
//! assert!(is_valid_vrs_id(&id));
//! assert_eq!(parse_vrs_id(&id).unwrap().chromosome, "17");
//! ```

pub mod decode;
pub mod encode;
pub mod pattern;

pub use decode::{
    chromosome_from_vrs_id, is_valid_vrs_id, parse_vrs_id, parse_vrs_id_bytes,
    InvalidIdentifierError,
};
pub use encode::{digest_segment, encode, generate_vrs_id, generate_vrs_ids, EncodingError};
