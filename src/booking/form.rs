//! Personal-details form of the booking flow.
//!
//! Errors are only shown for fields the user has left at least once: a field
//! is validated on blur, and from then on after every change. Submitting
//! marks every field as touched so all errors surface at once.

use crate::i18n::LanguageStrings;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

const MIN_NAME_CHARS: usize = 2;
const MIN_PHONE_CHARS: usize = 9;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Phone,
    Experience,
    Notes,
    Consent,
    MarketingConsent,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Experience,
        Field::Notes,
        Field::Consent,
        Field::MarketingConsent,
    ];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    pub fn label(&self, strings: &LanguageStrings) -> &'static str {
        match self {
            ExperienceLevel::Beginner => strings.experience_beginner,
            ExperienceLevel::Intermediate => strings.experience_intermediate,
            ExperienceLevel::Advanced => strings.experience_advanced,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    NameRequired,
    NameTooShort,
    EmailRequired,
    EmailInvalid,
    PhoneTooShort,
    ConsentRequired,
}

impl FieldError {
    pub fn message(&self, strings: &LanguageStrings) -> &'static str {
        match self {
            FieldError::NameRequired => strings.error_name_required,
            FieldError::NameTooShort => strings.error_name_too_short,
            FieldError::EmailRequired => strings.error_email_required,
            FieldError::EmailInvalid => strings.error_email_invalid,
            FieldError::PhoneTooShort => strings.error_phone_too_short,
            FieldError::ConsentRequired => strings.error_consent_required,
        }
    }
}

/// Field errors keyed by field, in field order.
pub type FieldErrors = BTreeMap<Field, FieldError>;

/// Render errors as localized messages, e.g. for a JSON response.
pub fn localize_errors(errors: &FieldErrors, strings: &LanguageStrings) -> BTreeMap<Field, String> {
    errors
        .iter()
        .map(|(&field, error)| (field, error.message(strings).to_string()))
        .collect()
}

/// Values collected by the details form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub experience: ExperienceLevel,
    pub notes: String,
    /// Required privacy-policy consent
    pub consent: bool,
    /// Optional, informational only
    pub marketing_consent: bool,
}

impl BookingDetails {
    /// Validate a single field. Fields without rules always pass.
    pub fn validate_field(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Name => {
                let name = self.name.trim();
                if name.is_empty() {
                    Some(FieldError::NameRequired)
                } else if name.chars().count() < MIN_NAME_CHARS {
                    Some(FieldError::NameTooShort)
                } else {
                    None
                }
            }
            Field::Email => {
                let email = self.email.trim();
                let regex = EMAIL_REGEX
                    .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
                if email.is_empty() {
                    Some(FieldError::EmailRequired)
                } else if !regex.is_match(email) {
                    Some(FieldError::EmailInvalid)
                } else {
                    None
                }
            }
            Field::Phone => {
                let phone = self.phone.trim();
                if !phone.is_empty() && phone.chars().count() < MIN_PHONE_CHARS {
                    Some(FieldError::PhoneTooShort)
                } else {
                    None
                }
            }
            Field::Consent if !self.consent => Some(FieldError::ConsentRequired),
            Field::Consent | Field::Experience | Field::Notes | Field::MarketingConsent => None,
        }
    }

    /// Validate every field.
    pub fn validate(&self) -> FieldErrors {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.validate_field(field).map(|error| (field, error)))
            .collect()
    }
}

/// A single edit to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Name(String),
    Email(String),
    Phone(String),
    Experience(ExperienceLevel),
    Notes(String),
    Consent(bool),
    MarketingConsent(bool),
}

impl FieldInput {
    pub fn field(&self) -> Field {
        match self {
            FieldInput::Name(_) => Field::Name,
            FieldInput::Email(_) => Field::Email,
            FieldInput::Phone(_) => Field::Phone,
            FieldInput::Experience(_) => Field::Experience,
            FieldInput::Notes(_) => Field::Notes,
            FieldInput::Consent(_) => Field::Consent,
            FieldInput::MarketingConsent(_) => Field::MarketingConsent,
        }
    }
}

/// Form state: values, touched fields and the errors currently displayed.
#[derive(Debug, Clone, Default)]
pub struct DetailsForm {
    details: BookingDetails,
    touched: BTreeSet<Field>,
    errors: FieldErrors,
}

impl DetailsForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from pre-filled values. Nothing is touched yet.
    pub fn with_details(details: BookingDetails) -> Self {
        Self {
            details,
            ..Self::default()
        }
    }

    pub fn details(&self) -> &BookingDetails {
        &self.details
    }

    /// Errors currently displayed.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Apply an edit. Revalidates only if the field was already blurred.
    pub fn change(&mut self, input: FieldInput) {
        let field = input.field();
        match input {
            FieldInput::Name(value) => self.details.name = value,
            FieldInput::Email(value) => self.details.email = value,
            FieldInput::Phone(value) => self.details.phone = value,
            FieldInput::Experience(level) => self.details.experience = level,
            FieldInput::Notes(value) => self.details.notes = value,
            FieldInput::Consent(checked) => self.details.consent = checked,
            FieldInput::MarketingConsent(checked) => self.details.marketing_consent = checked,
        }

        if self.is_touched(field) {
            self.revalidate(field);
        }
    }

    /// The user left `field`: mark it touched and validate it.
    pub fn blur(&mut self, field: Field) {
        self.touched.insert(field);
        self.revalidate(field);
    }

    /// Touch and validate every field. Returns `true` when there are no errors.
    pub fn validate_all(&mut self) -> bool {
        self.touched.extend(Field::ALL);
        self.errors = self.details.validate();
        self.errors.is_empty()
    }

    fn revalidate(&mut self, field: Field) {
        match self.details.validate_field(field) {
            Some(error) => {
                self.errors.insert(field, error);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    fn valid_details() -> BookingDetails {
        BookingDetails {
            name: "Al".to_string(),
            email: "a@b.co".to_string(),
            consent: true,
            ..BookingDetails::default()
        }
    }

    // ==================== Rule Tests ====================

    #[test]
    fn test_minimal_valid_details() {
        assert!(valid_details().validate().is_empty());
    }

    #[test]
    fn test_name_rules() {
        let mut details = valid_details();

        details.name = "   ".to_string();
        assert_eq!(details.validate_field(Field::Name), Some(FieldError::NameRequired));

        details.name = " A ".to_string();
        assert_eq!(details.validate_field(Field::Name), Some(FieldError::NameTooShort));

        details.name = "Ñu".to_string();
        assert_eq!(details.validate_field(Field::Name), None);
    }

    #[test]
    fn test_email_rules() {
        let mut details = valid_details();

        details.email = String::new();
        assert_eq!(details.validate_field(Field::Email), Some(FieldError::EmailRequired));

        for invalid in ["plainaddress", "a@b", "a b@c.de", "@b.co", "a@@b.co"] {
            details.email = invalid.to_string();
            assert_eq!(
                details.validate_field(Field::Email),
                Some(FieldError::EmailInvalid),
                "{invalid}"
            );
        }

        details.email = "  coach@example.com ".to_string();
        assert_eq!(details.validate_field(Field::Email), None);
    }

    #[test]
    fn test_phone_is_optional_but_checked_when_present() {
        let mut details = valid_details();
        assert_eq!(details.validate_field(Field::Phone), None);

        details.phone = "1234".to_string();
        assert_eq!(details.validate_field(Field::Phone), Some(FieldError::PhoneTooShort));

        details.phone = "+34600111".to_string();
        assert_eq!(details.validate_field(Field::Phone), None);
    }

    #[test]
    fn test_consent_required_marketing_optional() {
        let mut details = valid_details();
        details.consent = false;
        details.marketing_consent = false;

        let errors = details.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(&Field::Consent), Some(&FieldError::ConsentRequired));
    }

    // ==================== Touch/Blur Tests ====================

    #[test]
    fn test_no_errors_before_blur() {
        let mut form = DetailsForm::new();
        form.change(FieldInput::Name("A".to_string()));
        assert!(form.errors().is_empty());
        assert!(!form.is_touched(Field::Name));
    }

    #[test]
    fn test_blur_validates() {
        let mut form = DetailsForm::new();
        form.change(FieldInput::Name("A".to_string()));
        form.blur(Field::Name);
        assert_eq!(form.error(Field::Name), Some(FieldError::NameTooShort));
    }

    #[test]
    fn test_change_after_blur_revalidates() {
        let mut form = DetailsForm::new();
        form.blur(Field::Email);
        assert_eq!(form.error(Field::Email), Some(FieldError::EmailRequired));

        form.change(FieldInput::Email("a@".to_string()));
        assert_eq!(form.error(Field::Email), Some(FieldError::EmailInvalid));

        form.change(FieldInput::Email("a@b.co".to_string()));
        assert_eq!(form.error(Field::Email), None);
    }

    #[test]
    fn test_blur_one_field_leaves_others_quiet() {
        let mut form = DetailsForm::new();
        form.blur(Field::Name);
        assert_eq!(form.errors().len(), 1);
        assert!(form.error(Field::Email).is_none());
    }

    #[test]
    fn test_validate_all_surfaces_every_error() {
        let mut form = DetailsForm::new();
        assert!(!form.validate_all());

        let errors = form.errors();
        assert_eq!(errors.get(&Field::Name), Some(&FieldError::NameRequired));
        assert_eq!(errors.get(&Field::Email), Some(&FieldError::EmailRequired));
        assert_eq!(errors.get(&Field::Consent), Some(&FieldError::ConsentRequired));
        assert!(errors.get(&Field::Phone).is_none());
        assert!(Field::ALL.iter().all(|&field| form.is_touched(field)));
    }

    #[test]
    fn test_with_details_keeps_values() {
        let form = DetailsForm::with_details(valid_details());
        assert_eq!(form.details().name, "Al");
        assert!(form.errors().is_empty());
    }

    // ==================== Serialization Tests ====================

    #[test]
    fn test_details_deserialize_with_defaults() {
        let details: BookingDetails =
            serde_json::from_str(r#"{"name": "Ana", "email": "ana@x.es", "consent": true}"#)
                .unwrap();
        assert_eq!(details.experience, ExperienceLevel::Beginner);
        assert!(details.phone.is_empty());
        assert!(!details.marketing_consent);
    }

    #[test]
    fn test_localized_errors_serialize_by_field_name() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Name, FieldError::NameRequired);

        let localized = localize_errors(&errors, Language::ENGLISH.strings());
        let json = serde_json::to_value(&localized).unwrap();
        assert_eq!(json["name"], "Name is required");
    }
}
