use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;

/// Lower bound of the plausible working-age range accepted at construction.
pub const AGE_MIN: u32 = 14;
/// Upper bound of the plausible age range accepted at construction.
pub const AGE_MAX: u32 = 120;

/// Type-safe identifier for persons.
///
/// Identifiers are assigned exclusively by the registry: strictly increasing
/// from 1 and never reused, so a stale id can never resolve to a different
/// person later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PersonId(pub u32);

impl From<u32> for PersonId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "person_{}", self.0)
    }
}

/// Role discriminator for a [`Person`].
///
/// `Display` yields exactly the label the boundary serializes ("Employee" or
/// "Manager").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Employee,
    Manager,
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Employee => write!(f, "Employee"),
            Role::Manager => write!(f, "Manager"),
        }
    }
}

/// A regular employee: job title plus monthly salary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub age: u32,
    pub title: String,
    pub monthly_salary: f64,
}

/// A manager: department, monthly salary, and an annual bonus on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manager {
    pub name: String,
    pub age: u32,
    pub department: String,
    pub monthly_salary: f64,
    pub annual_bonus: f64,
}

/// A registered person, polymorphic over role identification.
///
/// Serializes internally tagged, so the transfer shape carries
/// `"type": "Employee" | "Manager"` alongside the variant's own fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Person {
    Employee(Employee),
    Manager(Manager),
}

/// Payload for creating a new employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub name: String,
    pub title: String,
    pub age: u32,
    pub monthly_salary: f64,
}

/// Payload for creating a new manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerCreate {
    pub name: String,
    pub department: String,
    pub age: u32,
    pub monthly_salary: f64,
    pub annual_bonus: f64,
}

/// Sum of both creation payloads; the registry's Add request carries this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PersonCreate {
    Employee(EmployeeCreate),
    Manager(ManagerCreate),
}

/// Rejected construction input. Carries the offending field so callers can
/// correct it and retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("{field} must be a non-negative amount, got {value}")]
    InvalidAmount { field: &'static str, value: f64 },

    #[error("age {value} is outside the plausible range {min}..={max}", min = AGE_MIN, max = AGE_MAX)]
    AgeOutOfRange { value: u32 },
}

fn non_empty(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::EmptyField { field })
    } else {
        Ok(trimmed.to_string())
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    // `is_finite` keeps NaN and infinities out of the store.
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::InvalidAmount { field, value })
    }
}

fn plausible_age(value: u32) -> Result<u32, ValidationError> {
    if (AGE_MIN..=AGE_MAX).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::AgeOutOfRange { value })
    }
}

impl Employee {
    /// Validated factory. Text fields are trimmed before being stored.
    pub fn from_create(params: EmployeeCreate) -> Result<Self, ValidationError> {
        Ok(Self {
            name: non_empty("name", &params.name)?,
            title: non_empty("title", &params.title)?,
            age: plausible_age(params.age)?,
            monthly_salary: non_negative("monthly_salary", params.monthly_salary)?,
        })
    }
}

impl Manager {
    /// Validated factory. Text fields are trimmed before being stored.
    pub fn from_create(params: ManagerCreate) -> Result<Self, ValidationError> {
        Ok(Self {
            name: non_empty("name", &params.name)?,
            department: non_empty("department", &params.department)?,
            age: plausible_age(params.age)?,
            monthly_salary: non_negative("monthly_salary", params.monthly_salary)?,
            annual_bonus: non_negative("annual_bonus", params.annual_bonus)?,
        })
    }
}

impl Person {
    /// Builds an unattached record from a creation payload.
    ///
    /// On success the record has no identifier yet; the registry assigns one
    /// on insert. On failure no record exists at all.
    pub fn from_create(params: PersonCreate) -> Result<Self, ValidationError> {
        match params {
            PersonCreate::Employee(p) => Employee::from_create(p).map(Person::Employee),
            PersonCreate::Manager(p) => Manager::from_create(p).map(Person::Manager),
        }
    }

    /// Role identification: a pure match over the variant tag.
    pub fn role(&self) -> Role {
        match self {
            Person::Employee(_) => Role::Employee,
            Person::Manager(_) => Role::Manager,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Person::Employee(e) => &e.name,
            Person::Manager(m) => &m.name,
        }
    }

    pub fn age(&self) -> u32 {
        match self {
            Person::Employee(e) => e.age,
            Person::Manager(m) => m.age,
        }
    }

    /// Both variants expose a monthly salary; statistics aggregate over it.
    pub fn monthly_salary(&self) -> f64 {
        match self {
            Person::Employee(e) => e.monthly_salary,
            Person::Manager(m) => m.monthly_salary,
        }
    }
}
