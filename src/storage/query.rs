use serde::{Deserialize, Serialize};

use crate::codec::decode::{parse_vrs_id, InvalidIdentifierError};

/// Prefix of the per-chromosome variant tables
pub const TABLE_PREFIX: &str = "variants_chr";

/// Schema holding the variant tables
pub const SCHEMA: &str = "public";

/// Named parameters bound into [`VariantQuery::sql`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    pub vrs_id: String,
    pub chromosome: String,
}

/// A parameterized lookup of one variant by identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantQuery {
    pub table: String,
    pub sql: String,
    pub params: QueryParams,
}

/// Name of the table that stores a variant, e.g. `variants_chrx` for chromosome `X`.
///
/// # Errors
///
/// Returns `InvalidIdentifierError` if the identifier cannot be parsed.
pub fn table_name_for(vrs_id: &str) -> Result<String, InvalidIdentifierError> {
    let parsed = parse_vrs_id(vrs_id)?;
    Ok(table_name_for_chromosome(&parsed.chromosome))
}

/// Table name for an already-extracted chromosome segment
#[must_use]
pub fn table_name_for_chromosome(chromosome: &str) -> String {
    format!("{TABLE_PREFIX}{}", chromosome.to_lowercase())
}

/// Build the lookup query for a variant.
///
/// The table name is interpolated; the identifier and chromosome are left as
/// `:vrs_id` and `:chromosome` placeholders for the driver to bind.
///
/// # Examples
///
/// ```
/// use aiva_vrs::storage::build_variant_query;
///
/// let query = build_variant_query("ga4gh:VA:7:v9TQXvNOQeG1vNRVJCWlD_a1tRf_m2AP").unwrap();
/// assert_eq!(
///     query.sql,
///     "SELECT * FROM public.variants_chr7 WHERE id = :vrs_id AND chromosome = :chromosome"
/// );
/// assert_eq!(query.params.chromosome, "7");
/// ```
///
/// # Errors
///
/// Returns `InvalidIdentifierError` if the identifier cannot be parsed.
pub fn build_variant_query(vrs_id: &str) -> Result<VariantQuery, InvalidIdentifierError> {
    let parsed = parse_vrs_id(vrs_id)?;
    let table = table_name_for_chromosome(&parsed.chromosome);
    let sql = format!(
        "SELECT * FROM {SCHEMA}.{table} WHERE id = :vrs_id AND chromosome = :chromosome"
    );

    Ok(VariantQuery {
        table,
        sql,
        params: QueryParams {
            vrs_id: vrs_id.to_string(),
            chromosome: parsed.chromosome,
        },
    })
}
