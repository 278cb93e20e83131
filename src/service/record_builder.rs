use std::fmt::Write;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use rand::Rng;
use tracing::debug;

use crate::config::FormConfig;
use crate::error::app_error::AppError;
use crate::models::category::category_label;
use crate::models::user_record::{NewUserRecord, UserRecord};
use crate::service::clock::Clock;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const TOKEN_RANDOM_LEN: usize = 9;

pub fn mask_password(secret: &str, mask_char: char) -> String {
    secret.chars().map(|_| mask_char).collect()
}

pub fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.iter().rev().map(|&d| d as char).collect()
}

/// `<prefix><9 random base-36 chars>_<unix millis in base 36>`.
///
/// Cosmetic identifier only: the random part comes from a non-cryptographic
/// choice of generator and collisions are possible.
pub fn generate_session_token<R: Rng>(prefix: &str, now: DateTime<Utc>, rng: &mut R) -> String {
    let random: String = (0..TOKEN_RANDOM_LEN)
        .map(|_| BASE36_DIGITS[rng.random_range(0..BASE36_DIGITS.len())] as char)
        .collect();
    let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
    format!("{}{}_{}", prefix, random, to_base36(millis))
}

#[derive(Debug, Clone)]
pub struct RecordBuilder<C: Clock> {
    clock: C,
    mask_char: char,
    token_prefix: String,
    date_format: String,
    timezone: Tz,
}

impl<C: Clock> RecordBuilder<C> {
    pub fn new(config: &FormConfig, clock: C) -> Result<Self, AppError> {
        Ok(Self {
            clock,
            mask_char: config.mask_char,
            token_prefix: config.token_prefix.clone(),
            date_format: config.date_format.clone(),
            timezone: config.tz()?,
        })
    }

    pub fn build(&self, login: &str, secret: &str, category_code: &str, remember: bool, agreement: bool) -> UserRecord {
        self.build_with_rng(login, secret, category_code, remember, agreement, &mut rand::rng())
    }

    pub fn build_with_rng<R: Rng>(
        &self,
        login: &str,
        secret: &str,
        category_code: &str,
        remember: bool,
        agreement: bool,
        rng: &mut R,
    ) -> UserRecord {
        let created_at = self.clock.now();
        let session_token = generate_session_token(&self.token_prefix, created_at, rng);

        debug!(login = %login, category = %category_code, session_token = %session_token, "user record built");

        NewUserRecord {
            login: login.to_string(),
            masked_password: mask_password(secret, self.mask_char),
            category_code: category_code.to_string(),
            category_label: category_label(category_code),
            remember,
            agreement,
            created_at,
            created_at_display: self.format_timestamp(created_at),
            session_token,
        }
        .into()
    }

    pub fn format_timestamp(&self, at: DateTime<Utc>) -> String {
        let local = at.with_timezone(&self.timezone);
        let mut display = String::new();
        if write!(display, "{}", local.format(&self.date_format)).is_err() {
            return local.to_rfc3339();
        }
        display
    }
}
