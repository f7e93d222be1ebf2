//! Logical fields collected during the certificate dialogue.
//!
//! A logical field is a named piece of information collected from the
//! participant, independent of where it is written in the template.

use serde::{Deserialize, Serialize};

/// The fixed set of fields the dialogue collects, in no particular order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    PatientName,
    PatientAge,
    Gender,
    TestDate,
    ReportDate,
    ReferringDoctor,
    SigningDoctor,
}

impl Field {
    /// Every collectable field.
    pub const ALL: [Field; 7] = [
        Field::PatientName,
        Field::PatientAge,
        Field::Gender,
        Field::TestDate,
        Field::ReportDate,
        Field::ReferringDoctor,
        Field::SigningDoctor,
    ];

    /// Stable key used in logs.
    pub fn key(self) -> &'static str {
        match self {
            Field::PatientName => "patient_name",
            Field::PatientAge => "patient_age",
            Field::Gender => "gender",
            Field::TestDate => "test_date",
            Field::ReportDate => "report_date",
            Field::ReferringDoctor => "referring_doctor",
            Field::SigningDoctor => "signing_doctor",
        }
    }
}

/// Per-session accumulator for collected answers.
///
/// Named optional fields rather than a string-keyed bag, so every consumer
/// names a real field at compile time. `set` overwrites unconditionally and
/// no history is kept. Values are raw UTF-8 text, accepted verbatim; the
/// cancellation token is intercepted by the engine and never reaches the
/// store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldStore {
    pub patient_name: Option<String>,
    pub patient_age: Option<String>,
    pub gender: Option<String>,
    pub test_date: Option<String>,
    pub report_date: Option<String>,
    pub referring_doctor: Option<String>,
    pub signing_doctor: Option<String>,
}

impl FieldStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a value, last write wins.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = Some(value.into());
        match field {
            Field::PatientName => self.patient_name = value,
            Field::PatientAge => self.patient_age = value,
            Field::Gender => self.gender = value,
            Field::TestDate => self.test_date = value,
            Field::ReportDate => self.report_date = value,
            Field::ReferringDoctor => self.referring_doctor = value,
            Field::SigningDoctor => self.signing_doctor = value,
        }
    }

    /// Returns the captured value, or `None` if the field's state has not
    /// been traversed yet.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::PatientName => self.patient_name.as_deref(),
            Field::PatientAge => self.patient_age.as_deref(),
            Field::Gender => self.gender.as_deref(),
            Field::TestDate => self.test_date.as_deref(),
            Field::ReportDate => self.report_date.as_deref(),
            Field::ReferringDoctor => self.referring_doctor.as_deref(),
            Field::SigningDoctor => self.signing_doctor.as_deref(),
        }
    }

    /// Immutable copy taken at generation time, decoupling the filler from
    /// any later mutation of the live session state.
    pub fn snapshot(&self) -> FieldStore {
        self.clone()
    }

    /// Discards every collected answer.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when nothing has been collected.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_none())
    }
}
