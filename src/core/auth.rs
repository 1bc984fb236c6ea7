use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Password gate in front of every data command.
///
/// With no `app_password` configured the gate is open.
pub struct AuthGate<'a> {
    expected: Option<&'a str>,
}

impl<'a> AuthGate<'a> {
    pub fn new(cfg: &'a Config) -> Self {
        Self {
            expected: cfg
                .app_password
                .as_deref()
                .filter(|p| !p.is_empty()),
        }
    }

    pub fn is_open(&self) -> bool {
        self.expected.is_none()
    }

    pub fn check(&self, supplied: Option<&str>) -> AppResult<()> {
        match self.expected {
            None => Ok(()),
            Some(expected) if supplied == Some(expected) => Ok(()),
            Some(_) => Err(AppError::AuthenticationFailed),
        }
    }
}
