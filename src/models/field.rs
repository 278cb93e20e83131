use serde::Serialize;

/// Value a checkbox submits when the form does not set one explicitly.
pub const DEFAULT_CHECKBOX_VALUE: &str = "on";

#[derive(Serialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Login,
    Password,
    Category,
    Agreement,
    Text,
}

#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Checkbox { value: String, checked: bool },
}

impl FieldValue {
    /// The raw string the control submits. For checkboxes this is the control's value, not its state.
    pub fn raw(&self) -> &str {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Checkbox { value, .. } => value,
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, FieldValue::Checkbox { checked: true, .. })
    }
}

/// One named input control of the form.
#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
    pub value: FieldValue,
}

impl Field {
    pub fn new(name: impl Into<String>, kind: FieldKind, required: bool, value: FieldValue) -> Self {
        Self {
            name: name.into(),
            kind,
            required,
            value,
        }
    }

    pub fn text(name: impl Into<String>, value: impl Into<String>, required: bool) -> Self {
        Self::new(name, FieldKind::Text, required, FieldValue::Text(value.into()))
    }

    pub fn login(value: impl Into<String>) -> Self {
        Self::new("login", FieldKind::Login, true, FieldValue::Text(value.into()))
    }

    pub fn password(value: impl Into<String>) -> Self {
        Self::new("password", FieldKind::Password, true, FieldValue::Text(value.into()))
    }

    pub fn category(value: impl Into<String>) -> Self {
        Self::new("category", FieldKind::Category, true, FieldValue::Text(value.into()))
    }

    pub fn agreement(checked: bool) -> Self {
        Self::new(
            "agreement",
            FieldKind::Agreement,
            true,
            FieldValue::Checkbox {
                value: DEFAULT_CHECKBOX_VALUE.to_string(),
                checked,
            },
        )
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
pub struct FieldResult {
    pub valid: bool,
    pub reason: Option<String>,
}

impl FieldResult {
    pub fn ok() -> Self {
        Self { valid: true, reason: None }
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: Some(reason.into()),
        }
    }
}
