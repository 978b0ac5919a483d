use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;

use crate::errors::FormError;

/// One work-history record. Years are kept as text exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExperienceEntry {
    pub position: String,
    pub company: String,
    pub start_year: String,
    pub end_year: String,
    pub description: String,
}

impl ExperienceEntry {
    pub fn get(&self, field: ExperienceField) -> &str {
        match field {
            ExperienceField::Position => &self.position,
            ExperienceField::Company => &self.company,
            ExperienceField::StartYear => &self.start_year,
            ExperienceField::EndYear => &self.end_year,
            ExperienceField::Description => &self.description,
        }
    }

    pub(crate) fn set(&mut self, field: ExperienceField, value: String) {
        let slot = match field {
            ExperienceField::Position => &mut self.position,
            ExperienceField::Company => &mut self.company,
            ExperienceField::StartYear => &mut self.start_year,
            ExperienceField::EndYear => &mut self.end_year,
            ExperienceField::Description => &mut self.description,
        };
        *slot = value;
    }
}

/// The full curriculum being authored in one session.
///
/// `experience` always holds at least one entry: construction seeds one blank
/// entry and nothing removes entries. Entries sit behind `Arc` so a new snapshot
/// shares every entry it did not touch with the snapshot it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CvForm {
    pub(crate) name: String,
    pub(crate) contact: String,
    pub(crate) experience: Vec<Arc<ExperienceEntry>>,
    pub(crate) skills: String,
}

impl CvForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            contact: String::new(),
            experience: vec![Arc::new(ExperienceEntry::default())],
            skills: String::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn skills(&self) -> &str {
        &self.skills
    }

    pub fn experience(&self) -> &[Arc<ExperienceEntry>] {
        &self.experience
    }

    pub fn get(&self, field: ScalarField) -> &str {
        match field {
            ScalarField::Name => &self.name,
            ScalarField::Contact => &self.contact,
            ScalarField::Skills => &self.skills,
        }
    }
}

impl Default for CvForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level text fields of a [`CvForm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarField {
    Name,
    Contact,
    Skills,
}

impl ScalarField {
    pub const ALL: [ScalarField; 3] = [ScalarField::Name, ScalarField::Contact, ScalarField::Skills];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarField::Name => "name",
            ScalarField::Contact => "contact",
            ScalarField::Skills => "skills",
        }
    }
}

impl FromStr for ScalarField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(ScalarField::Name),
            "contact" => Ok(ScalarField::Contact),
            "skills" => Ok(ScalarField::Skills),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for ScalarField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields of an [`ExperienceEntry`], named as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperienceField {
    Position,
    Company,
    StartYear,
    EndYear,
    Description,
}

impl ExperienceField {
    pub const ALL: [ExperienceField; 5] = [
        ExperienceField::Position,
        ExperienceField::Company,
        ExperienceField::StartYear,
        ExperienceField::EndYear,
        ExperienceField::Description,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceField::Position => "position",
            ExperienceField::Company => "company",
            ExperienceField::StartYear => "start_year",
            ExperienceField::EndYear => "end_year",
            ExperienceField::Description => "description",
        }
    }
}

impl FromStr for ExperienceField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExperienceField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for ExperienceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
