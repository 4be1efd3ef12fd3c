//! Basic-auth credential resolution from multiple sources

use log::debug;
use std::fmt;

use crate::config::auth;
use crate::error::{AapError, Result};
use crate::ui::{prompt_password, prompt_username};

/// Username/password pair sent with every request
#[derive(Clone)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

impl BasicAuth {
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Login resolution with fallback logic
pub struct LoginResolver {
    batch_mode: bool,
}

impl LoginResolver {
    /// Create a resolver; in batch mode it never prompts
    pub fn new(batch_mode: bool) -> Self {
        Self { batch_mode }
    }

    /// Resolve username and password, each independently, from:
    /// 1. CLI argument (if provided)
    /// 2. Environment variable (AAP_USERNAME / AAP_PASSWORD)
    /// 3. Interactive prompt (password without echo), unless in batch mode
    pub fn resolve(&self, cli_username: Option<&str>, cli_password: Option<&str>) -> Result<BasicAuth> {
        let username = match Self::from_cli_or_env(cli_username, auth::USERNAME_ENV_VAR) {
            Some(username) => username,
            None => self.prompt_or_fail("username", prompt_username)?,
        };

        let password = match Self::from_cli_or_env(cli_password, auth::PASSWORD_ENV_VAR) {
            Some(password) => password,
            None => self.prompt_or_fail("password", prompt_password)?,
        };

        Ok(BasicAuth::new(username, password))
    }

    fn from_cli_or_env(cli_value: Option<&str>, env_var: &str) -> Option<String> {
        if let Some(value) = cli_value {
            debug!("Using value from CLI argument for {}", env_var);
            return Some(value.to_string());
        }

        match std::env::var(env_var) {
            Ok(value) if !value.is_empty() => {
                debug!("Using value from {} environment variable", env_var);
                Some(value)
            }
            _ => None,
        }
    }

    fn prompt_or_fail(&self, what: &str, prompt: fn() -> Result<String>) -> Result<String> {
        if self.batch_mode {
            return Err(AapError::Config(Self::missing_message(what)));
        }
        debug!("Prompting for {}", what);
        prompt()
    }

    /// Generate helpful error message when a credential is missing in batch mode
    fn missing_message(what: &str) -> String {
        let (flag, env_var) = match what {
            "username" => ("--username", auth::USERNAME_ENV_VAR),
            _ => ("--password", auth::PASSWORD_ENV_VAR),
        };
        format!(
            "No {} provided and prompting is disabled in batch mode. Provide one of:\n\
             \n\
             1. CLI argument:      aap-inspect {} <VALUE>\n\
             2. Environment var:   export {}=<VALUE>",
            what, flag, env_var
        )
    }
}
