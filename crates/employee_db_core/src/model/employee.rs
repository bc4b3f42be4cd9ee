//! Employee domain model.
//!
//! # Responsibility
//! - Define the fixed-shape employee record and its write-side draft.
//! - Enforce field presence before anything reaches storage.
//!
//! # Invariants
//! - `id` is assigned by the store and never reused after deletion.
//! - Text fields are non-blank; `salary` is finite.

use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned employee identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EmployeeId(pub i64);

impl EmployeeId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl Display for EmployeeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persisted employee record.
///
/// Serializes to `{id, first_name, last_name, email, salary}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub salary: f64,
}

impl Employee {
    /// Copies the mutable fields back out as a draft.
    pub fn to_draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            salary: self.salary,
        }
    }
}

/// Every employee field except the store-assigned id.
///
/// Used for both create and full-replace update.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub salary: f64,
}

impl EmployeeDraft {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        salary: f64,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            salary,
        }
    }

    /// Checks field presence.
    ///
    /// # Errors
    /// - `BlankField` when a text field is empty or whitespace only.
    /// - `NonFiniteSalary` when `salary` is NaN or infinite; SQLite cannot
    ///   store those as `REAL NOT NULL`.
    pub fn validate(&self) -> Result<(), EmployeeValidationError> {
        for (field, value) in [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
        ] {
            if value.trim().is_empty() {
                return Err(EmployeeValidationError::BlankField(field));
            }
        }

        if !self.salary.is_finite() {
            return Err(EmployeeValidationError::NonFiniteSalary);
        }

        Ok(())
    }

    /// Attaches a store-assigned id.
    pub fn into_employee(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            salary: self.salary,
        }
    }
}

/// Rejection reasons for an `EmployeeDraft`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeValidationError {
    BlankField(&'static str),
    NonFiniteSalary,
}

impl Display for EmployeeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankField(field) => write!(f, "employee field `{field}` must not be blank"),
            Self::NonFiniteSalary => write!(f, "employee salary must be a finite number"),
        }
    }
}

impl Error for EmployeeValidationError {}

#[cfg(test)]
mod tests {
    use super::{EmployeeDraft, EmployeeId, EmployeeValidationError};

    fn draft() -> EmployeeDraft {
        EmployeeDraft::new("Osvaldo", "Rios", "osvaldo.rios1@hey.in", 22000.0)
    }

    #[test]
    fn valid_draft_passes() {
        assert_eq!(draft().validate(), Ok(()));
    }

    #[test]
    fn blank_fields_are_rejected_by_name() {
        let mut blank_last = draft();
        blank_last.last_name = "   ".to_string();
        assert_eq!(
            blank_last.validate(),
            Err(EmployeeValidationError::BlankField("last_name"))
        );

        let mut blank_email = draft();
        blank_email.email.clear();
        assert_eq!(
            blank_email.validate(),
            Err(EmployeeValidationError::BlankField("email"))
        );
    }

    #[test]
    fn non_finite_salary_is_rejected() {
        let mut nan = draft();
        nan.salary = f64::NAN;
        assert_eq!(nan.validate(), Err(EmployeeValidationError::NonFiniteSalary));

        let mut inf = draft();
        inf.salary = f64::INFINITY;
        assert_eq!(inf.validate(), Err(EmployeeValidationError::NonFiniteSalary));
    }

    #[test]
    fn zero_and_negative_salary_are_accepted() {
        let mut zero = draft();
        zero.salary = 0.0;
        assert!(zero.validate().is_ok());

        let mut negative = draft();
        negative.salary = -1.5;
        assert!(negative.validate().is_ok());
    }

    #[test]
    fn draft_roundtrips_through_employee() {
        let employee = draft().into_employee(EmployeeId(9));
        assert_eq!(employee.id.get(), 9);
        assert_eq!(employee.to_draft(), draft());
    }
}
