//! Centralized request-size validation.

use crate::core::variant::VariantDescriptor;

/// Maximum number of variants accepted in one batch request (DOS protection)
pub const MAX_BATCH_SIZE: usize = 1000;

/// Maximum identifier length accepted for parsing
pub const MAX_ID_LENGTH: usize = 1024;

/// Maximum length of any single descriptor field
pub const MAX_FIELD_LENGTH: usize = 10_000;

/// Request validation error types
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Empty batch: at least one entry is required")]
    EmptyBatch,
    #[error("Batch too large: {0} entries exceeds maximum of {MAX_BATCH_SIZE}")]
    BatchTooLarge(usize),
    #[error("Identifier too long: {0} bytes exceeds maximum of {MAX_ID_LENGTH}")]
    IdTooLong(usize),
    #[error("Field '{field}' too long: {length} bytes exceeds maximum of {MAX_FIELD_LENGTH}")]
    FieldTooLong { field: &'static str, length: usize },
}

/// Check the number of variants in a batch request.
///
/// # Errors
///
/// Returns `ValidationError::EmptyBatch` for zero variants or
/// `ValidationError::BatchTooLarge` above [`MAX_BATCH_SIZE`].
pub fn validate_batch_size(count: usize) -> Result<(), ValidationError> {
    if count == 0 {
        return Err(ValidationError::EmptyBatch);
    }
    if count > MAX_BATCH_SIZE {
        return Err(ValidationError::BatchTooLarge(count));
    }
    Ok(())
}

/// Check an identifier before parsing it.
///
/// # Errors
///
/// Returns `ValidationError::IdTooLong` above [`MAX_ID_LENGTH`] bytes.
pub fn validate_id_length(vrs_id: &str) -> Result<(), ValidationError> {
    if vrs_id.len() > MAX_ID_LENGTH {
        return Err(ValidationError::IdTooLong(vrs_id.len()));
    }
    Ok(())
}

/// Check every string field of a descriptor against [`MAX_FIELD_LENGTH`].
///
/// # Errors
///
/// Returns `ValidationError::FieldTooLong` naming the first oversized field.
pub fn validate_descriptor(variant: &VariantDescriptor) -> Result<(), ValidationError> {
    let position = variant.position.to_string();
    let fields = [
        ("chromosome", variant.chromosome.as_str()),
        ("position", position.as_str()),
        ("reference_allele", variant.reference_allele.as_str()),
        ("alternate_allele", variant.alternate_allele.as_str()),
        ("assembly", variant.assembly.as_str()),
    ];

    for (field, value) in fields {
        if value.len() > MAX_FIELD_LENGTH {
            return Err(ValidationError::FieldTooLong {
                field,
                length: value.len(),
            });
        }
    }
    Ok(())
}
