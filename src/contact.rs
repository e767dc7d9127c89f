use std::{collections::BTreeMap, fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

pub const REQUIRED: &str = "This field is required";
pub const INVALID_EMAIL: &str = "Please enter a valid email";

static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]*$").expect("digits pattern should compile"));
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    Web,
    Mobile,
    Other,
}

impl Service {
    pub fn all() -> [Service; 3] {
        [Service::Web, Service::Mobile, Service::Other]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Web => "web",
            Service::Mobile => "mobile",
            Service::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Service::Web => "Web Development",
            Service::Mobile => "Mobile App",
            Service::Other => "Other",
        }
    }

    pub fn from_value(s: &str) -> Option<Service> {
        match s {
            "web" => Some(Service::Web),
            "mobile" => Some(Service::Mobile),
            "other" => Some(Service::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Service,
    Budget,
    Idea,
}

impl Field {
    pub fn all() -> [Field; 5] {
        [
            Field::Name,
            Field::Email,
            Field::Service,
            Field::Budget,
            Field::Idea,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Service => "service",
            Field::Budget => "budget",
            Field::Idea => "idea",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub service: Option<Service>,
    pub budget: String,
    pub idea: String,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Service => self.service.map(|s| s.as_str()).unwrap_or(""),
            Field::Budget => &self.budget,
            Field::Idea => &self.idea,
        }
    }

    /// Applies user input, returning false when the input is rejected.
    pub fn set(&mut self, field: Field, value: &str) -> bool {
        match field {
            Field::Name => self.name = value.to_string(),
            Field::Email => self.email = value.to_string(),
            Field::Service => self.service = Service::from_value(value),
            Field::Budget => {
                if !DIGITS.is_match(value) {
                    return false;
                }
                self.budget = value.to_string();
            }
            Field::Idea => self.idea = value.to_string(),
        }
        true
    }

    /// The budget input is only shown once a service other than "other" is picked.
    pub fn needs_budget(&self) -> bool {
        matches!(self.service, Some(s) if s != Service::Other)
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        for field in [Field::Name, Field::Email, Field::Service, Field::Idea] {
            if self.value(field).trim().is_empty() {
                errors.insert(field, REQUIRED);
            }
        }
        if self.needs_budget() && self.budget.trim().is_empty() {
            errors.insert(Field::Budget, REQUIRED);
        }
        if errors.get(Field::Email).is_none() && !EMAIL.is_match(self.email.trim()) {
            errors.insert(Field::Email, INVALID_EMAIL);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = self
            .0
            .iter()
            .map(|(field, msg)| format!("{}: {msg}", field.as_str()))
            .collect::<Vec<_>>();
        write!(f, "{}", parts.join(", "))
    }
}

/// Form values plus the errors currently shown next to them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub form: ContactForm,
    pub errors: FieldErrors,
}

impl FormState {
    /// Editing a field clears its error.
    pub fn edit(&mut self, field: Field, value: &str) -> bool {
        if !self.form.set(field, value) {
            return false;
        }
        self.errors.clear(field);
        true
    }

    /// Validates and returns the form to send, or records the errors.
    pub fn submit(&mut self) -> Option<ContactForm> {
        match self.form.validate() {
            Ok(()) => {
                self.errors = FieldErrors::default();
                Some(self.form.clone())
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl SubmitStatus {
    pub fn from_outcome<E>(pending: bool, outcome: Option<&Result<(), E>>) -> Self {
        if pending {
            return Self::Sending;
        }
        match outcome {
            None => Self::Idle,
            Some(Ok(())) => Self::Success,
            Some(Err(_)) => Self::Error,
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Sending => Some("Sending..."),
            Self::Success => Some("Message sent successfully ✅"),
            Self::Error => Some("Something went wrong.❌"),
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Self::Idle | Self::Sending => "text-yellow-400",
            Self::Success => "text-green-400",
            Self::Error => "text-red-500",
        }
    }
}
