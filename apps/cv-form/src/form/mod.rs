// Form state: copy-on-write reducers, input constraints, and the controller
// that owns the session snapshot and the submission side effect.

pub mod controller;
pub mod reducers;
pub mod validation;

pub use controller::{EditOutcome, FormController, SubmitOutcome, SubmitStatus};
