use serde::{Deserialize, Serialize};

/// The five checked fields of a roster record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Id,
    Salary,
    HireDate,
    Email,
    Phone,
}

impl Field {
    /// All fields in validation order.
    pub const ALL: [Field; 5] = [
        Field::Id,
        Field::Salary,
        Field::HireDate,
        Field::Email,
        Field::Phone,
    ];

    /// Stable wire name, matching the CSV column header.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Salary => "salary",
            Field::HireDate => "hire_date",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One employee row as read from the source file, all values raw.
///
/// A column missing from the source yields an empty string for that field;
/// validation is what decides whether an empty value is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub id: String,
    pub salary: String,
    pub hire_date: String,
    pub email: String,
    pub phone: String,
}

impl RawRecord {
    /// Raw value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Id => &self.id,
            Field::Salary => &self.salary,
            Field::HireDate => &self.hire_date,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }
}

/// An accepted record, as handed to the persistence store.
///
/// `salary` carries the normalized numeric value; every other field is kept
/// exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRecord {
    pub id: String,
    pub salary: f64,
    pub hire_date: String,
    pub email: String,
    pub phone: String,
}
