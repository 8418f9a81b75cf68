//! Console stand-in that validates the password and logs.

use gatelink_app::ports::RemoteConsole;
use gatelink_domain::error::GatelinkError;

use crate::error::VirtualError;

/// Stand-in for the on-device maintenance console.
#[derive(Debug, Default)]
pub struct LogConsole {
    started: bool,
}

impl LogConsole {
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }
}

impl RemoteConsole for LogConsole {
    fn start(&mut self, password: &str) -> Result<(), GatelinkError> {
        let len = password.chars().count();
        if !(4..=9).contains(&len) {
            return Err(VirtualError::PasswordLength(len).into());
        }
        self.started = true;
        tracing::debug!("console accepting connections");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_with_valid_password() {
        let mut console = LogConsole::default();
        console.start("gate1234").unwrap();
        assert!(console.is_started());
    }

    #[test]
    fn should_reject_short_password() {
        let mut console = LogConsole::default();
        assert!(console.start("abc").is_err());
        assert!(!console.is_started());
    }
}
