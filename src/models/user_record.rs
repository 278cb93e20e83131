use chrono::{DateTime, Utc};
use serde::Serialize;

/// Display summary of a submitted sign-in form.
///
/// Built once by `RecordBuilder` and read-only afterwards. Holds the masked
/// password only; the secret itself is never stored.
#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
pub struct UserRecord {
    login: String,
    masked_password: String,
    category_code: String,
    category_label: String,
    remember: bool,
    agreement: bool,
    created_at: DateTime<Utc>,
    created_at_display: String,
    session_token: String,
}

pub(crate) struct NewUserRecord {
    pub login: String,
    pub masked_password: String,
    pub category_code: String,
    pub category_label: String,
    pub remember: bool,
    pub agreement: bool,
    pub created_at: DateTime<Utc>,
    pub created_at_display: String,
    pub session_token: String,
}

impl From<NewUserRecord> for UserRecord {
    fn from(new: NewUserRecord) -> Self {
        Self {
            login: new.login,
            masked_password: new.masked_password,
            category_code: new.category_code,
            category_label: new.category_label,
            remember: new.remember,
            agreement: new.agreement,
            created_at: new.created_at,
            created_at_display: new.created_at_display,
            session_token: new.session_token,
        }
    }
}

impl UserRecord {
    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn masked_password(&self) -> &str {
        &self.masked_password
    }

    pub fn category_code(&self) -> &str {
        &self.category_code
    }

    pub fn category_label(&self) -> &str {
        &self.category_label
    }

    pub fn remember(&self) -> bool {
        self.remember
    }

    pub fn agreement(&self) -> bool {
        self.agreement
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn created_at_display(&self) -> &str {
        &self.created_at_display
    }

    pub fn session_token(&self) -> &str {
        &self.session_token
    }
}
