use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Date format used for `date_born` on the wire and in `<input type="date">`
pub const DATE_BORN_FORMAT: &str = "%Y-%m-%d";

/// Represents a child registered in the daycare
///
/// An empty `id` marks a record that has not been saved yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Kid {
    pub id: String,
    pub identification: String,
    pub name: String,
    pub lastname: String,
    /// ISO 8601 date format (YYYY-MM-DD)
    pub date_born: String,
    pub parent_name: String,
    pub parent_lastname: String,
    pub parent_email: String,
    pub parent_phone: String,
}

impl Kid {
    /// Copy of `kid`, or an all-empty record when there is none
    pub fn seeded_from(kid: Option<&Kid>) -> Self {
        kid.cloned().unwrap_or_default()
    }

    /// True when the record already exists on the server
    pub fn is_existing(&self) -> bool {
        !self.id.trim().is_empty()
    }

    pub fn field(&self, field: KidField) -> &str {
        match field {
            KidField::Identification => &self.identification,
            KidField::Name => &self.name,
            KidField::Lastname => &self.lastname,
            KidField::DateBorn => &self.date_born,
            KidField::ParentName => &self.parent_name,
            KidField::ParentLastname => &self.parent_lastname,
            KidField::ParentEmail => &self.parent_email,
            KidField::ParentPhone => &self.parent_phone,
        }
    }

    pub fn set_field(&mut self, field: KidField, value: String) {
        let slot = match field {
            KidField::Identification => &mut self.identification,
            KidField::Name => &mut self.name,
            KidField::Lastname => &mut self.lastname,
            KidField::DateBorn => &mut self.date_born,
            KidField::ParentName => &mut self.parent_name,
            KidField::ParentLastname => &mut self.parent_lastname,
            KidField::ParentEmail => &mut self.parent_email,
            KidField::ParentPhone => &mut self.parent_phone,
        };
        *slot = value;
    }

    pub fn full_name(&self) -> String {
        join_names(&self.name, &self.lastname)
    }

    pub fn parent_full_name(&self) -> String {
        join_names(&self.parent_name, &self.parent_lastname)
    }

    /// Parsed `date_born`, if it holds a valid YYYY-MM-DD date
    pub fn birth_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date_born.trim(), DATE_BORN_FORMAT).ok()
    }

    /// Age in whole years on `today`. None for unparseable or future birth dates.
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        let born = self.birth_date()?;
        if born > today {
            return None;
        }

        let mut years = today.year() - born.year();
        if (today.month(), today.day()) < (born.month(), born.day()) {
            years -= 1;
        }
        u32::try_from(years).ok()
    }
}

fn join_names(first: &str, last: &str) -> String {
    let first = first.trim();
    let last = last.trim();
    match (first.is_empty(), last.is_empty()) {
        (true, _) => last.to_string(),
        (_, true) => first.to_string(),
        _ => format!("{} {}", first, last),
    }
}

/// The editable fields of a [`Kid`], in the order the form renders them
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KidField {
    Identification,
    Name,
    Lastname,
    DateBorn,
    ParentName,
    ParentLastname,
    ParentEmail,
    ParentPhone,
}

impl KidField {
    pub const ALL: [KidField; 8] = [
        KidField::Identification,
        KidField::Name,
        KidField::Lastname,
        KidField::DateBorn,
        KidField::ParentName,
        KidField::ParentLastname,
        KidField::ParentEmail,
        KidField::ParentPhone,
    ];

    /// HTML `name` attribute and JSON key of the field
    pub fn name(self) -> &'static str {
        match self {
            KidField::Identification => "identification",
            KidField::Name => "name",
            KidField::Lastname => "lastname",
            KidField::DateBorn => "date_born",
            KidField::ParentName => "parent_name",
            KidField::ParentLastname => "parent_lastname",
            KidField::ParentEmail => "parent_email",
            KidField::ParentPhone => "parent_phone",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            KidField::Identification => "Identificación del niño(a)",
            KidField::Name => "Nombres del niño(a)",
            KidField::Lastname => "Apellidos del niño(a)",
            KidField::DateBorn => "Fecha de nacimiento",
            KidField::ParentName => "Nombres del padre o madre",
            KidField::ParentLastname => "Apellidos del padre o madre",
            KidField::ParentEmail => "Email del padre o madre",
            KidField::ParentPhone => "Teléfono del padre o madre",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            KidField::DateBorn => "date",
            _ => "text",
        }
    }
}

impl fmt::Display for KidField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown kid field: {0}")]
pub struct UnknownKidField(pub String);

impl FromStr for KidField {
    type Err = UnknownKidField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KidField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownKidField(s.to_string()))
    }
}

/// Per-field validation messages produced by the backend
///
/// On the wire this is a JSON object keyed by field name. Keys that do not
/// name a [`KidField`] and null/empty messages are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Option<String>>", into = "BTreeMap<String, String>")]
pub struct KidFormErrors {
    messages: BTreeMap<KidField, String>,
}

impl KidFormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: KidField, message: impl Into<String>) {
        self.messages.insert(field, message.into());
    }

    pub fn get(&self, field: KidField) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }
}

impl From<BTreeMap<String, Option<String>>> for KidFormErrors {
    fn from(raw: BTreeMap<String, Option<String>>) -> Self {
        let messages = raw
            .into_iter()
            .filter_map(|(key, message)| {
                let field = key.parse::<KidField>().ok()?;
                let message = message.filter(|m| !m.trim().is_empty())?;
                Some((field, message))
            })
            .collect();
        Self { messages }
    }
}

impl From<KidFormErrors> for BTreeMap<String, String> {
    fn from(errors: KidFormErrors) -> Self {
        errors
            .messages
            .into_iter()
            .map(|(field, message)| (field.name().to_string(), message))
            .collect()
    }
}

/// Request body for creating or updating a kid. The id travels in the URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveKidRequest {
    pub identification: String,
    pub name: String,
    pub lastname: String,
    pub date_born: String,
    pub parent_name: String,
    pub parent_lastname: String,
    pub parent_email: String,
    pub parent_phone: String,
}

impl From<&Kid> for SaveKidRequest {
    fn from(kid: &Kid) -> Self {
        Self {
            identification: kid.identification.clone(),
            name: kid.name.clone(),
            lastname: kid.lastname.clone(),
            date_born: kid.date_born.clone(),
            parent_name: kid.parent_name.clone(),
            parent_lastname: kid.parent_lastname.clone(),
            parent_email: kid.parent_email.clone(),
            parent_phone: kid.parent_phone.clone(),
        }
    }
}

/// Response after creating or updating a kid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KidResponse {
    pub kid: Kid,
}

/// Response containing the registered kids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KidListResponse {
    pub kids: Vec<Kid>,
}

/// Body returned by the backend when a kid fails validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub errors: KidFormErrors,
    #[serde(default)]
    pub message: Option<String>,
}

/// Why saving or loading kids failed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KidRegisterError {
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(KidFormErrors),
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Result of a create or update call
pub type SaveOutcome = Result<Kid, KidRegisterError>;
