//! Server application models.
//!
//! Application state plus the validated parameter structs that sit between
//! the API payload DTOs and the repositories.

pub mod app;
pub mod character;
pub mod planet;
pub mod user;

/// Track a required payload field, recording its name when absent.
pub(crate) fn require<T>(
    field: Option<T>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<T> {
    if field.is_none() {
        missing.push(name);
    }

    field
}
