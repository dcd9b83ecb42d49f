//! Helpers for storing variants in per-chromosome tables.
//!
//! Nothing here touches a database. These functions only format the table name
//! and lookup query a storage layer needs, keyed on the chromosome segment of an
//! identifier:
//!
//! | Identifier | Table |
//! |------------|-------|
//! | `ga4gh:VA:7:...` | `public.variants_chr7` |
//! | `ga4gh:VA:X:...` | `public.variants_chrx` |

pub mod query;

pub use query::{
    build_variant_query, table_name_for, table_name_for_chromosome, QueryParams, VariantQuery,
};
