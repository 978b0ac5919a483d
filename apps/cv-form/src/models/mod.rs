pub mod cv;

pub use cv::{CvForm, ExperienceEntry, ExperienceField, ScalarField};
