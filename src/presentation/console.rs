use std::io::Write;

use tracing::info;

use crate::error::app_error::AppError;
use crate::models::field::FieldResult;
use crate::models::user_record::UserRecord;
use crate::presentation::{Notice, NoticeLevel, Presenter};

/// Renders the form to a text stream, stdout in the binary.
pub struct ConsolePresenter<W: Write> {
    out: W,
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn show_field(&mut self, name: &str, result: &FieldResult) -> Result<(), AppError> {
        match result.reason.as_deref() {
            Some(reason) if !result.valid => writeln!(self.out, "  ✗ {}: {}", name, reason)?,
            _ => writeln!(self.out, "  ✓ {}", name)?,
        }
        Ok(())
    }

    fn show_record(&mut self, record: &UserRecord) -> Result<(), AppError> {
        writeln!(self.out, "Login:       {}", record.login())?;
        writeln!(self.out, "Password:    {}", record.masked_password())?;
        writeln!(self.out, "Category:    {}", record.category_label())?;
        writeln!(self.out, "Remember me: {}", yes_no(record.remember()))?;
        writeln!(self.out, "Agreement:   {}", yes_no(record.agreement()))?;
        writeln!(self.out, "Signed in:   {}", record.created_at_display())?;
        writeln!(self.out, "Session:     {}", record.session_token())?;

        let json = serde_json::to_string_pretty(record).map_err(|e| AppError::malformed("Could not render user record", e))?;
        writeln!(self.out, "{}", json)?;
        self.out.flush()?;

        info!(
            login = %record.login(),
            category = %record.category_code(),
            session_token = %record.session_token(),
            created_at = %record.created_at(),
            "user record rendered"
        );
        Ok(())
    }

    fn notify(&mut self, notice: &Notice) -> Result<(), AppError> {
        let marker = match notice.level {
            NoticeLevel::Success => "[ok]",
            NoticeLevel::Error => "[error]",
        };
        writeln!(self.out, "{} {}", marker, notice.message)?;
        Ok(())
    }
}
