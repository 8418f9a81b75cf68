//! Virtual adapter error types.

use gatelink_domain::error::GatelinkError;

/// Errors specific to the simulated devices.
#[derive(Debug, thiserror::Error)]
pub enum VirtualError {
    /// Console passwords must be 4 to 9 characters long.
    #[error("console password must be 4 to 9 characters, got {0}")]
    PasswordLength(usize),
}

impl From<VirtualError> for GatelinkError {
    fn from(err: VirtualError) -> Self {
        Self::Transport(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_password_length() {
        let err = VirtualError::PasswordLength(2);
        assert_eq!(
            err.to_string(),
            "console password must be 4 to 9 characters, got 2"
        );
    }
}
