use chrono::format::{Item, StrftimeItems};
use chrono_tz::Tz;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::app_error::AppError;

pub const CONFIG_FILE: &str = "SignIn.toml";
pub const ENV_PREFIX: &str = "SIGNIN_";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub form: FormConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub json_format: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FormConfig {
    pub min_password_length: usize,
    pub mask_char: char,
    pub token_prefix: String,
    /// `chrono` strftime pattern used for `UserRecord::created_at_display`.
    pub date_format: String,
    /// IANA zone name, e.g. `Europe/Moscow`.
    pub timezone: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            min_password_length: 6,
            mask_char: '*',
            token_prefix: "session_".to_string(),
            date_format: "%d.%m.%Y, %H:%M:%S".to_string(),
            timezone: "UTC".to_string(),
        }
    }
}

impl FormConfig {
    pub fn tz(&self) -> Result<Tz, AppError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| AppError::InvalidConfig(format!("unknown timezone '{}'", self.timezone)))
    }

    pub fn check_date_format(&self) -> Result<(), AppError> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(AppError::InvalidConfig(format!("invalid date format '{}'", self.date_format)));
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from multiple sources in priority order:
    /// 1. Built-in defaults
    /// 2. SignIn.toml (if it exists)
    /// 3. Environment variables (prefixed with SIGNIN_, e.g. SIGNIN_FORM__TIMEZONE)
    pub fn load() -> Result<Self, AppError> {
        Self::from_figment(
            Figment::from(Serialized::defaults(Config::default()))
                .merge(Toml::file(CONFIG_FILE))
                .merge(Env::prefixed(ENV_PREFIX).split("__")),
        )
    }

    fn from_figment(figment: Figment) -> Result<Self, AppError> {
        let config: Config = figment.extract()?;
        config.form.tz()?;
        config.form.check_date_format()?;
        Ok(config)
    }
}
