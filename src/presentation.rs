pub mod console;

use serde::Serialize;

use crate::error::app_error::AppError;
use crate::models::field::FieldResult;
use crate::models::user_record::UserRecord;

#[derive(Serialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Toast-style one-line summary of a submit.
#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Whatever renders the form: marks fields, shows notices and the built record.
pub trait Presenter {
    fn show_field(&mut self, name: &str, result: &FieldResult) -> Result<(), AppError>;

    fn show_record(&mut self, record: &UserRecord) -> Result<(), AppError>;

    fn notify(&mut self, notice: &Notice) -> Result<(), AppError>;
}
