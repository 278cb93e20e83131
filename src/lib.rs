pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod presentation;
pub mod service;

#[cfg(test)]
pub mod test_utils;

pub use config::Config;
pub use controller::{FormController, SubmitOutcome};
pub use error::app_error::AppError;
pub use models::category::{Category, category_label};
pub use models::field::{Field, FieldKind, FieldResult, FieldValue};
pub use models::sign_in::SignInRequest;
pub use models::user_record::UserRecord;
pub use service::record_builder::{RecordBuilder, mask_password};
pub use service::validation::{FormReport, Validator, validate_field, validate_form};

use crate::presentation::console::ConsolePresenter;
use crate::service::clock::SystemClock;
use std::io::{Read, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub fn init_tracing(log_level: &str, json_format: bool) {
    // RUST_LOG takes precedence over the configured level, e.g.
    //   RUST_LOG=signin_form=debug
    //   RUST_LOG=info,signin_form::service::validation=trace
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // Logs go to stderr so stdout stays reserved for the rendered form.
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr);

    if json_format {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

/// Controller rendering to `out` with the wall clock, handlers already registered.
pub fn console_form<W: Write>(config: &Config, out: W) -> Result<FormController<ConsolePresenter<W>, SystemClock>, AppError> {
    let mut controller = FormController::new(&config.form, ConsolePresenter::new(out), SystemClock)?;
    controller.setup();
    Ok(controller)
}

/// Reads one JSON submission from `input` and renders the outcome to `output`.
///
/// A rejected form comes back as `AppError::Rejected`, so every outcome maps to an exit status.
pub fn run<R: Read, W: Write>(config: &Config, mut input: R, output: W) -> Result<UserRecord, AppError> {
    let mut raw = String::new();
    input
        .read_to_string(&mut raw)
        .map_err(|e| AppError::io("Could not read the submission", e))?;
    let request: SignInRequest = serde_json::from_str(&raw)?;

    let mut form = console_form(config, output)?;
    match form.submit(&request)? {
        SubmitOutcome::Accepted(record) => {
            info!(session_token = %record.session_token(), "sign-in complete");
            Ok(record)
        }
        SubmitOutcome::Rejected(report) => Err(AppError::Rejected(report)),
        SubmitOutcome::Ignored => unreachable!("console_form registers the form handlers"),
    }
}
