use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;
use validator::ValidationError;

use crate::config::FormConfig;
use crate::models::field::{Field, FieldKind, FieldResult};

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

pub mod codes {
    pub const REQUIRED: &str = "required";
    pub const INVALID_LOGIN_FORMAT: &str = "invalid_login_format";
    pub const TOO_SHORT: &str = "too_short";
    pub const MUST_CHOOSE_CATEGORY: &str = "must_choose_category";
    pub const MUST_ACCEPT: &str = "must_accept";
}

pub mod reasons {
    pub const REQUIRED: &str = "required";
    pub const INVALID_LOGIN_FORMAT: &str = "invalid login format";
    pub const TOO_SHORT: &str = "too short";
    pub const MUST_CHOOSE_CATEGORY: &str = "must choose a category";
    pub const MUST_ACCEPT: &str = "must accept";
}

// Digits and hyphens only, e.g. a student card number like 123-45.
static LOGIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9-]+$").expect("login pattern is a valid regex"));

fn rule_error(code: &'static str, reason: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(reason))
}

/// Human reason for a rule error, keyed by its code. Unknown codes fall back to the message, then the code.
pub fn reason_for(err: &ValidationError) -> String {
    let reason = match err.code.as_ref() {
        codes::REQUIRED => reasons::REQUIRED,
        codes::INVALID_LOGIN_FORMAT => reasons::INVALID_LOGIN_FORMAT,
        codes::TOO_SHORT => reasons::TOO_SHORT,
        codes::MUST_CHOOSE_CATEGORY => reasons::MUST_CHOOSE_CATEGORY,
        codes::MUST_ACCEPT => reasons::MUST_ACCEPT,
        other => err.message.as_deref().unwrap_or(other),
    };
    reason.to_string()
}

pub fn check_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(rule_error(codes::REQUIRED, reasons::REQUIRED));
    }
    Ok(())
}

pub fn check_login_format(login: &str) -> Result<(), ValidationError> {
    let login = login.trim();
    if !login.is_empty() && !LOGIN_PATTERN.is_match(login) {
        return Err(rule_error(codes::INVALID_LOGIN_FORMAT, reasons::INVALID_LOGIN_FORMAT));
    }
    Ok(())
}

pub fn check_password_length(password: &str, min_length: usize) -> Result<(), ValidationError> {
    let password = password.trim();
    if !password.is_empty() && password.chars().count() < min_length {
        return Err(rule_error(codes::TOO_SHORT, reasons::TOO_SHORT));
    }
    Ok(())
}

pub fn check_category(category: &str) -> Result<(), ValidationError> {
    if category.trim().is_empty() {
        return Err(rule_error(codes::MUST_CHOOSE_CATEGORY, reasons::MUST_CHOOSE_CATEGORY));
    }
    Ok(())
}

pub fn check_agreement(checked: bool) -> Result<(), ValidationError> {
    if !checked {
        return Err(rule_error(codes::MUST_ACCEPT, reasons::MUST_ACCEPT));
    }
    Ok(())
}

#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
pub struct FieldReport {
    pub name: String,
    pub required: bool,
    pub result: FieldResult,
}

/// Per-field results of one form check, in field order.
#[derive(Serialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct FormReport {
    fields: Vec<FieldReport>,
}

impl FormReport {
    /// True when every required field passed. Optional fields never fail the form.
    pub fn is_valid(&self) -> bool {
        self.fields.iter().filter(|f| f.required).all(|f| f.result.valid)
    }

    pub fn fields(&self) -> &[FieldReport] {
        &self.fields
    }

    pub fn errors(&self) -> Vec<(&str, &str)> {
        self.fields
            .iter()
            .filter_map(|f| f.result.reason.as_deref().map(|reason| (f.name.as_str(), reason)))
            .collect()
    }

    pub fn error_count(&self) -> usize {
        self.fields.iter().filter(|f| f.required && !f.result.valid).count()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Validator {
    min_password_length: usize,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

impl Validator {
    pub fn new(config: &FormConfig) -> Self {
        Self {
            min_password_length: config.min_password_length,
        }
    }

    pub fn validate_field(&self, field: &Field) -> FieldResult {
        let result = match self.check(field) {
            Ok(()) => FieldResult::ok(),
            Err(err) => FieldResult::invalid(reason_for(&err)),
        };
        debug!(field = %field.name, kind = ?field.kind, valid = result.valid, "field checked");
        result
    }

    /// Evaluates every field; a failure does not stop the remaining checks.
    pub fn validate_form(&self, fields: &[Field]) -> FormReport {
        let fields = fields
            .iter()
            .map(|field| FieldReport {
                name: field.name.clone(),
                required: field.required,
                result: self.validate_field(field),
            })
            .collect();
        FormReport { fields }
    }

    fn check(&self, field: &Field) -> Result<(), ValidationError> {
        let raw = field.value.raw();
        if field.required {
            check_required(raw)?;
        }

        match field.kind {
            FieldKind::Login => check_login_format(raw),
            FieldKind::Password => check_password_length(raw, self.min_password_length),
            FieldKind::Category => check_category(raw),
            FieldKind::Agreement if field.required => check_agreement(field.value.is_checked()),
            FieldKind::Agreement | FieldKind::Text => Ok(()),
        }
    }
}

pub fn validate_field(field: &Field) -> FieldResult {
    Validator::default().validate_field(field)
}

pub fn validate_form(fields: &[Field]) -> FormReport {
    Validator::default().validate_form(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::field::FieldValue;
    use proptest::prelude::*;

    fn reason(result: &FieldResult) -> Option<&str> {
        result.reason.as_deref()
    }

    #[test]
    fn login_with_digits_and_hyphens_passes() {
        assert_eq!(validate_field(&Field::login("123-45")), FieldResult::ok());
    }

    #[test]
    fn login_with_letters_fails_format() {
        let result = validate_field(&Field::login("abc"));
        assert!(!result.valid);
        assert_eq!(reason(&result), Some(reasons::INVALID_LOGIN_FORMAT));
    }

    #[test]
    fn login_is_trimmed_before_matching() {
        assert!(validate_field(&Field::login("  123-45  ")).valid);
    }

    #[test]
    fn password_length_threshold() {
        let short = validate_field(&Field::password("12345"));
        assert_eq!(reason(&short), Some(reasons::TOO_SHORT));
        assert!(validate_field(&Field::password("123456")).valid);
    }

    #[test]
    fn password_length_counts_characters_not_bytes() {
        assert!(validate_field(&Field::password("пароль")).valid);
        assert!(!validate_field(&Field::password("ключ")).valid);
    }

    #[test]
    fn configured_minimum_password_length() {
        let config = FormConfig {
            min_password_length: 8,
            ..FormConfig::default()
        };
        let validator = Validator::new(&config);
        assert!(!validator.validate_field(&Field::password("1234567")).valid);
        assert!(validator.validate_field(&Field::password("12345678")).valid);
    }

    #[test]
    fn required_category_reports_required_first() {
        let result = validate_field(&Field::category(""));
        assert_eq!(reason(&result), Some(reasons::REQUIRED));
    }

    #[test]
    fn optional_category_must_still_be_chosen() {
        let result = validate_field(&Field::category("   ").optional());
        assert_eq!(reason(&result), Some(reasons::MUST_CHOOSE_CATEGORY));
        assert!(validate_field(&Field::category("teacher").optional()).valid);
    }

    #[test]
    fn unchecked_agreement_must_be_accepted() {
        let result = validate_field(&Field::agreement(false));
        assert_eq!(reason(&result), Some(reasons::MUST_ACCEPT));
        assert!(validate_field(&Field::agreement(true)).valid);
        assert!(validate_field(&Field::agreement(false).optional()).valid);
    }

    #[test]
    fn agreement_with_empty_value_is_required() {
        let field = Field::new(
            "agreement",
            FieldKind::Agreement,
            true,
            FieldValue::Checkbox {
                value: String::new(),
                checked: true,
            },
        );
        assert_eq!(reason(&validate_field(&field)), Some(reasons::REQUIRED));
    }

    #[test]
    fn optional_empty_text_passes() {
        assert!(validate_field(&Field::text("nickname", "", false)).valid);
        assert!(validate_field(&Field::login("").optional()).valid);
        assert!(validate_field(&Field::password("").optional()).valid);
    }

    #[test]
    fn form_reports_every_failure() {
        let fields = vec![Field::login("abc"), Field::password("123"), Field::category(""), Field::agreement(false)];
        let report = validate_form(&fields);

        assert!(!report.is_valid());
        assert_eq!(report.fields().len(), 4);
        assert_eq!(report.error_count(), 4);
        assert_eq!(
            report.errors(),
            vec![
                ("login", reasons::INVALID_LOGIN_FORMAT),
                ("password", reasons::TOO_SHORT),
                ("category", reasons::REQUIRED),
                ("agreement", reasons::MUST_ACCEPT),
            ]
        );
    }

    #[test]
    fn form_ignores_optional_failures() {
        let fields = vec![
            Field::login("123-45"),
            Field::password("secret1"),
            Field::category("student"),
            Field::agreement(true),
            Field::login("abc").optional(),
        ];
        let report = validate_form(&fields);
        assert!(report.is_valid());
        assert_eq!(report.errors(), vec![("login", reasons::INVALID_LOGIN_FORMAT)]);
        assert_eq!(report.error_count(), 0);
    }

    #[test]
    fn reason_comes_from_code_not_message() {
        assert_eq!(reason_for(&ValidationError::new(codes::TOO_SHORT)), reasons::TOO_SHORT);
        assert_eq!(reason_for(&ValidationError::new(codes::MUST_ACCEPT)), reasons::MUST_ACCEPT);
        assert_eq!(reason_for(&ValidationError::new("no_digits")), "no_digits");
        assert_eq!(
            reason_for(&ValidationError::new("no_digits").with_message(Cow::Borrowed("needs a digit"))),
            "needs a digit"
        );
    }

    #[test]
    fn empty_form_is_valid() {
        assert!(validate_form(&[]).is_valid());
    }

    fn field_kind() -> impl Strategy<Value = FieldKind> {
        prop_oneof![
            Just(FieldKind::Login),
            Just(FieldKind::Password),
            Just(FieldKind::Category),
            Just(FieldKind::Text),
        ]
    }

    proptest! {
        #[test]
        fn required_blank_field_always_fails_with_required(kind in field_kind(), blank in "[ \t\n]*") {
            let field = Field::new("field", kind, true, FieldValue::Text(blank));
            let result = validate_field(&field);
            prop_assert!(!result.valid);
            prop_assert_eq!(result.reason.as_deref(), Some(reasons::REQUIRED));
        }

        #[test]
        fn form_is_valid_iff_every_required_field_is(
            values in proptest::collection::vec(("[0-9a-z-]{0,8}", any::<bool>()), 0..6)
        ) {
            let fields: Vec<Field> = values
                .into_iter()
                .map(|(value, required)| Field::new("login", FieldKind::Login, required, FieldValue::Text(value)))
                .collect();
            let report = validate_form(&fields);
            let expected = fields.iter().filter(|f| f.required).all(|f| validate_field(f).valid);
            prop_assert_eq!(report.is_valid(), expected);
        }
    }
}
