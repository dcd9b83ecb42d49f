//! Core data types for variant identifiers.
//!
//! - [`VariantDescriptor`](variant::VariantDescriptor): the fields that identify a variant
//! - [`VrsId`](types::VrsId): a generated identifier, hashed or special
//! - [`ParsedVrsId`](types::ParsedVrsId): the components recovered from an identifier
//!
//! ## Chromosome Naming
//!
//! Callers may supply either naming convention; both hash identically:
//!
//! | Source | Chromosome 1 | Mitochondrial | Unplaced |
//! |--------|--------------|---------------|----------|
//! | UCSC   | chr1         | chrM          | chrUn    |
//! | NCBI   | 1            | MT            | UN       |

pub mod chromosome;
pub mod types;
pub mod variant;
