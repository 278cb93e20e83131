use std::cell::Cell;

use chrono::{DateTime, Duration, Utc};

use crate::error::app_error::AppError;
use crate::models::field::FieldResult;
use crate::models::user_record::UserRecord;
use crate::presentation::{Notice, Presenter};
use crate::service::clock::Clock;

/// 2023-11-14T22:13:20Z
pub fn fixed_instant() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Advances one millisecond per reading.
pub struct SteppingClock {
    next: Cell<DateTime<Utc>>,
}

impl SteppingClock {
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self { next: Cell::new(start) }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let now = self.next.get();
        self.next.set(now + Duration::milliseconds(1));
        now
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shown {
    Field(String, FieldResult),
    Record(UserRecord),
    Notice(Notice),
}

#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub shown: Vec<Shown>,
}

impl Presenter for RecordingPresenter {
    fn show_field(&mut self, name: &str, result: &FieldResult) -> Result<(), AppError> {
        self.shown.push(Shown::Field(name.to_string(), result.clone()));
        Ok(())
    }

    fn show_record(&mut self, record: &UserRecord) -> Result<(), AppError> {
        self.shown.push(Shown::Record(record.clone()));
        Ok(())
    }

    fn notify(&mut self, notice: &Notice) -> Result<(), AppError> {
        self.shown.push(Shown::Notice(notice.clone()));
        Ok(())
    }
}
