//! Pure state transitions over [`CvForm`].
//!
//! Every reducer borrows the previous snapshot and returns a new one. The
//! previous snapshot is never touched, and experience entries that a reducer
//! does not change stay shared (`Arc::ptr_eq`) between the two snapshots.

use std::sync::Arc;

use crate::errors::FormError;
use crate::models::{CvForm, ExperienceEntry, ExperienceField, ScalarField};

/// Replaces one top-level field. No validation.
pub fn edit_field(form: &CvForm, field: ScalarField, value: impl Into<String>) -> CvForm {
    let mut next = form.clone();
    let value = value.into();
    match field {
        ScalarField::Name => next.name = value,
        ScalarField::Contact => next.contact = value,
        ScalarField::Skills => next.skills = value,
    }
    next
}

/// Replaces one field of the entry at `index`.
///
/// An index past the end is rejected with [`FormError::InvalidArgument`].
pub fn edit_experience_field(
    form: &CvForm,
    index: usize,
    field: ExperienceField,
    value: impl Into<String>,
) -> Result<CvForm, FormError> {
    let len = form.experience.len();
    let current = form
        .experience
        .get(index)
        .ok_or(FormError::InvalidArgument { index, len })?;

    let mut entry = ExperienceEntry::clone(current);
    entry.set(field, value.into());

    let mut next = form.clone();
    next.experience[index] = Arc::new(entry);
    Ok(next)
}

/// Appends a blank entry at the end.
pub fn add_experience(form: &CvForm) -> CvForm {
    let mut next = form.clone();
    next.experience.push(Arc::new(ExperienceEntry::default()));
    next
}
