use serde::{Deserialize, Serialize};

use super::domain::QualificationAnswers;

/// Validation errors raised before a lead is scored or routed.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LeadIntakeError {
    #[error("contact name is required")]
    MissingName,
    #[error("'{0}' is not a deliverable email address")]
    InvalidEmail(String),
    #[error("phone number '{0}' must contain 10 or 11 digits")]
    InvalidPhone(String),
}

/// Lead-capture form payload: contact details plus questionnaire answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_page: Option<String>,
    pub answers: QualificationAnswers,
}

/// Contact block retained after validation, with normalized fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadContact {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl LeadSubmission {
    pub fn validated_contact(&self) -> Result<LeadContact, LeadIntakeError> {
        let name = self.name.split_whitespace().collect::<Vec<_>>().join(" ");
        if name.is_empty() {
            return Err(LeadIntakeError::MissingName);
        }

        let email = self.email.trim().to_ascii_lowercase();
        if !is_plausible_email(&email) {
            return Err(LeadIntakeError::InvalidEmail(self.email.trim().to_string()));
        }

        let phone = match self.phone.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(normalize_phone(raw)?),
            _ => None,
        };

        Ok(LeadContact { name, email, phone })
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .map(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
            .unwrap_or(false)
}

/// Keeps the ten national digits, dropping a leading US country code.
fn normalize_phone(raw: &str) -> Result<String, LeadIntakeError> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    match digits.len() {
        10 => Ok(digits),
        11 if digits.starts_with('1') => Ok(digits[1..].to_string()),
        _ => Err(LeadIntakeError::InvalidPhone(raw.to_string())),
    }
}
