//! Demo login settings loaded from environment variables.
//!
//! There is no account backend. The login form is checked against one
//! configured email/password pair, after an optional artificial delay that
//! stands in for a network round trip. Values come from the environment (a
//! `.env` file is loaded by the binary) and fall back to built-in defaults.

use crate::errors::{Error, Result};
use std::{env, time::Duration};

/// Email accepted when `PETLIFE_DEMO_EMAIL` is not set.
pub const DEFAULT_DEMO_EMAIL: &str = "admin@pet.cl";

/// Password accepted when `PETLIFE_DEMO_PASSWORD` is not set.
pub const DEFAULT_DEMO_PASSWORD: &str = "123456";

/// Delay used when `PETLIFE_LOGIN_LATENCY_MS` is not set.
pub const DEFAULT_LATENCY_MS: u64 = 250;

/// Credentials and simulated latency for the demo authenticator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSettings {
    /// The one email address that logs in
    pub email: String,
    /// Its password
    pub password: String,
    /// How long a login attempt takes
    pub latency: Duration,
}

impl Default for LoginSettings {
    fn default() -> Self {
        Self {
            email: DEFAULT_DEMO_EMAIL.to_string(),
            password: DEFAULT_DEMO_PASSWORD.to_string(),
            latency: Duration::from_millis(DEFAULT_LATENCY_MS),
        }
    }
}

impl LoginSettings {
    /// Reads `PETLIFE_DEMO_EMAIL`, `PETLIFE_DEMO_PASSWORD` and
    /// `PETLIFE_LOGIN_LATENCY_MS`, using the defaults for unset variables.
    ///
    /// # Errors
    /// Returns an error if a variable is set but not valid Unicode, or if the
    /// latency is not a whole number of milliseconds.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key))
    }

    /// Builds settings from an arbitrary variable lookup.
    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> std::result::Result<String, env::VarError>,
    {
        let defaults = Self::default();

        let email = optional(&lookup, "PETLIFE_DEMO_EMAIL")?.unwrap_or(defaults.email);
        let password = optional(&lookup, "PETLIFE_DEMO_PASSWORD")?.unwrap_or(defaults.password);
        let latency = match optional(&lookup, "PETLIFE_LOGIN_LATENCY_MS")? {
            Some(raw) => {
                let millis = raw.trim().parse::<u64>().map_err(|e| Error::Config {
                    message: format!("PETLIFE_LOGIN_LATENCY_MS must be milliseconds, got {raw:?}: {e}"),
                })?;
                Duration::from_millis(millis)
            }
            None => defaults.latency,
        };

        Ok(Self {
            email,
            password,
            latency,
        })
    }
}

fn optional<F>(lookup: &F, key: &str) -> Result<Option<String>>
where
    F: Fn(&str) -> std::result::Result<String, env::VarError>,
{
    match lookup(key) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
