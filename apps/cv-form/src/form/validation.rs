use std::fmt;

use crate::models::{CvForm, ExperienceField, ScalarField};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Missing,
    InvalidEmail,
    NotANumber,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// `name`, `contact`, `skills` or `experience[i].<field>`.
    pub field: String,
    pub problem: Violation,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let problem = match self.problem {
            Violation::Missing => "is required",
            Violation::InvalidEmail => "must be an email address",
            Violation::NotANumber => "must be a number",
        };
        write!(f, "{} {}", self.field, problem)
    }
}

/// Checks the input constraints the form declares: every field required,
/// `contact` shaped like an email, both years numeric.
///
/// Runs before submission; the controller itself never calls it.
pub fn validate(form: &CvForm) -> Result<(), Vec<FieldViolation>> {
    let mut violations = Vec::new();

    for field in ScalarField::ALL {
        let value = form.get(field).trim();
        let problem = if value.is_empty() {
            Some(Violation::Missing)
        } else if field == ScalarField::Contact && !is_email(value) {
            Some(Violation::InvalidEmail)
        } else {
            None
        };
        if let Some(problem) = problem {
            violations.push(FieldViolation {
                field: field.to_string(),
                problem,
            });
        }
    }

    for (index, entry) in form.experience().iter().enumerate() {
        for field in ExperienceField::ALL {
            let value = entry.get(field).trim();
            let numeric = matches!(field, ExperienceField::StartYear | ExperienceField::EndYear);
            let problem = if value.is_empty() {
                Some(Violation::Missing)
            } else if numeric && value.parse::<i64>().is_err() {
                Some(Violation::NotANumber)
            } else {
                None
            };
            if let Some(problem) = problem {
                violations.push(FieldViolation {
                    field: format!("experience[{index}].{field}"),
                    problem,
                });
            }
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || value.contains(char::is_whitespace) {
        return false;
    }
    match domain.find('.') {
        Some(_) => !domain.starts_with('.') && !domain.ends_with('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::reducers::{add_experience, edit_experience_field, edit_field};

    fn complete_form() -> CvForm {
        let mut form = CvForm::new();
        form = edit_field(&form, ScalarField::Name, "Ana Silva");
        form = edit_field(&form, ScalarField::Contact, "ana@example.com");
        form = edit_field(&form, ScalarField::Skills, "Python, SQL");
        for (field, value) in [
            (ExperienceField::Position, "Engenheira"),
            (ExperienceField::Company, "Acme"),
            (ExperienceField::StartYear, "2020"),
            (ExperienceField::EndYear, "2023"),
            (ExperienceField::Description, "Built things"),
        ] {
            form = edit_experience_field(&form, 0, field, value).unwrap();
        }
        form
    }

    #[test]
    fn test_complete_form_passes() {
        assert_eq!(validate(&complete_form()), Ok(()));
    }

    #[test]
    fn test_blank_form_reports_every_field() {
        let violations = validate(&CvForm::new()).unwrap_err();
        assert_eq!(violations.len(), 8);
        assert!(violations.iter().all(|v| v.problem == Violation::Missing));
        assert_eq!(violations[3].field, "experience[0].position");
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let form = edit_field(&complete_form(), ScalarField::Name, "   ");
        let violations = validate(&form).unwrap_err();
        assert_eq!(
            violations,
            vec![FieldViolation {
                field: "name".to_string(),
                problem: Violation::Missing
            }]
        );
    }

    #[test]
    fn test_contact_must_be_email() {
        for bad in ["ana", "ana@", "@example.com", "ana@example", "ana@.com", "a b@x.io"] {
            let form = edit_field(&complete_form(), ScalarField::Contact, bad);
            let violations = validate(&form).unwrap_err();
            assert_eq!(violations[0].problem, Violation::InvalidEmail, "{bad}");
        }
    }

    #[test]
    fn test_years_must_be_numeric() {
        let form =
            edit_experience_field(&complete_form(), 0, ExperienceField::EndYear, "now").unwrap();
        let violations = validate(&form).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "experience[0].end_year");
        assert_eq!(violations[0].to_string(), "experience[0].end_year must be a number");
    }

    #[test]
    fn test_added_blank_entry_is_reported() {
        let form = add_experience(&complete_form());
        let violations = validate(&form).unwrap_err();
        assert_eq!(violations.len(), 5);
        assert!(violations
            .iter()
            .all(|v| v.field.starts_with("experience[1].")));
    }
}
