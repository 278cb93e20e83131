use tracing::{debug, info, warn};

use crate::config::FormConfig;
use crate::error::app_error::AppError;
use crate::models::field::{Field, FieldResult};
use crate::models::sign_in::SignInRequest;
use crate::models::user_record::UserRecord;
use crate::presentation::{Notice, Presenter};
use crate::service::clock::Clock;
use crate::service::record_builder::RecordBuilder;
use crate::service::validation::{FormReport, Validator};

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SubmitOutcome {
    Accepted(UserRecord),
    Rejected(FormReport),
    /// The form was submitted before `setup`; nothing was checked or shown.
    Ignored,
}

/// Wires the validator and the record builder to a presenter for one page lifecycle.
pub struct FormController<P: Presenter, C: Clock> {
    presenter: P,
    validator: Validator,
    builder: RecordBuilder<C>,
    ready: bool,
    last_record: Option<UserRecord>,
}

impl<P: Presenter, C: Clock> FormController<P, C> {
    pub fn new(config: &FormConfig, presenter: P, clock: C) -> Result<Self, AppError> {
        Ok(Self {
            presenter,
            validator: Validator::new(config),
            builder: RecordBuilder::new(config, clock)?,
            ready: false,
            last_record: None,
        })
    }

    /// Registers the form handlers. Returns `false` if they were already registered.
    pub fn setup(&mut self) -> bool {
        if self.ready {
            debug!("form handlers already registered");
            return false;
        }
        self.ready = true;
        debug!("form handlers registered");
        true
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Live check of a single field, e.g. when it loses focus. `None` before `setup`.
    pub fn check_field(&mut self, field: &Field) -> Result<Option<FieldResult>, AppError> {
        if !self.ready {
            debug!(field = %field.name, "field check ignored, form handlers not registered");
            return Ok(None);
        }

        let result = self.validator.validate_field(field);
        self.presenter.show_field(&field.name, &result)?;
        Ok(Some(result))
    }

    pub fn submit(&mut self, request: &SignInRequest) -> Result<SubmitOutcome, AppError> {
        if !self.ready {
            warn!("submit ignored, form handlers not registered");
            return Ok(SubmitOutcome::Ignored);
        }

        let report = self.validator.validate_form(&request.fields());
        for field in report.fields() {
            self.presenter.show_field(&field.name, &field.result)?;
        }

        if !report.is_valid() {
            warn!(errors = report.error_count(), "sign-in form rejected");
            self.presenter
                .notify(&Notice::error(format!("Please fix {} field(s)", report.error_count())))?;
            return Ok(SubmitOutcome::Rejected(report));
        }

        let request = request.trimmed();
        let record = self
            .builder
            .build(&request.login, &request.password, &request.category, request.remember, request.agreement);

        info!(login = %record.login(), category = %record.category_code(), "sign-in form accepted");
        self.presenter.notify(&Notice::success(format!("Signed in as {}", record.login())))?;
        self.presenter.show_record(&record)?;
        self.last_record = Some(record.clone());

        Ok(SubmitOutcome::Accepted(record))
    }

    pub fn last_record(&self) -> Option<&UserRecord> {
        self.last_record.as_ref()
    }

    /// Navigation away from the page: the record is dropped, nothing is kept.
    pub fn reset(&mut self) {
        self.last_record = None;
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }
}
