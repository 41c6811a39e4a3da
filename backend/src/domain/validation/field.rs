//! Single-field validators.

use crate::domain::{Field, FieldKind};

/// Reason reported when a required key is absent.
pub(crate) fn required(name: &str) -> String {
    format!("{name} is required")
}

/// Validate one decoded field.
///
/// Absence fails with "`<name>` is required" unless `partial_update_mode` is
/// set; a value of the wrong kind always fails with
/// "`<name>` must be of type `<kind>`". On success the accepted value is
/// returned, or `None` when it was absent in partial mode.
///
/// # Examples
/// ```
/// use customers::domain::Field;
/// use customers::domain::validation::validate_field;
///
/// let missing: Field<bool> = Field::Missing;
/// assert_eq!(
///     validate_field("active", missing.clone(), false),
///     Err("active is required".to_owned())
/// );
/// assert_eq!(validate_field("active", missing, true), Ok(None));
/// assert_eq!(
///     validate_field::<String>("fullName", Field::Mismatched, true),
///     Err("fullName must be of type string".to_owned())
/// );
/// ```
pub fn validate_field<T>(
    name: &str,
    field: Field<T>,
    partial_update_mode: bool,
) -> Result<Option<T>, String>
where
    T: FieldKind,
{
    match field {
        Field::Present(value) => Ok(Some(value)),
        Field::Mismatched => Err(format!("{name} must be of type {}", T::KIND)),
        Field::Missing if partial_update_mode => Ok(None),
        Field::Missing => Err(required(name)),
    }
}
