//! # aiva-vrs
//!
//! Deterministic, content-addressed identifiers for genomic variants.
//!
//! A variant (assembly, chromosome, position, reference and alternate allele) is
//! reduced to an identifier such as `ga4gh:VA:1:-Lei2LuvWoB18NBkXBO6zbjiFCFb`.
//! The identifier is derived only from the variant itself, so two pipelines that
//! see the same variant produce the same identifier without sharing a registry.
//! `chr1` and `1` (and `chrM`/`MT`) are treated as the same chromosome.
//!
//! ## Features
//!
//! - **Stable**: a truncated SHA-512 digest of a canonical record
//! - **URL and SQL safe**: digests use only `[A-Za-z0-9_-]`
//! - **Round-trippable structure**: identifiers parse back to chromosome and digest
//! - **Special variants**: `*` alleles produce a readable `ga4gh:VA:SPECIAL:` identifier
//! - **Storage helpers**: per-chromosome table names and lookup queries
//!
//! ## Example
//!
//! ```rust
//! use aiva_vrs::{generate_vrs_id, is_valid_vrs_id, parse_vrs_id};
//!
//! let id = generate_vrs_id("chr1", 12345u64, "A", "T", "GRCh38").unwrap();
//! assert!(is_valid_vrs_id(&id));
//!
//! let parsed = parse_vrs_id(&id).unwrap();
//! assert_eq!(parsed.chromosome, "1");
//! ```
//!
//! ## Modules
//!
//! - [`codec`]: Identifier generation, parsing and validation
//! - [`core`](crate::core): Variant descriptors, identifier types, chromosome normalization
//! - [`storage`]: Table name and query derivation
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: JSON HTTP API

pub mod cli;
pub mod codec;
pub mod core;
pub mod storage;
pub mod utils;
pub mod web;

// Re-export commonly used types for convenience
pub use crate::codec::{
    chromosome_from_vrs_id, encode, generate_vrs_id, generate_vrs_ids, is_valid_vrs_id,
    parse_vrs_id, EncodingError, InvalidIdentifierError,
};
pub use crate::core::chromosome::normalize_chromosome;
pub use crate::core::types::{IdOutcome, IdentifierType, ParsedVrsId, VrsId};
pub use crate::core::variant::{Position, VariantDescriptor, DEFAULT_ASSEMBLY};
pub use crate::storage::{build_variant_query, table_name_for, VariantQuery};
