//! Error types for nativewifi-core

use std::fmt;

use thiserror::Error;
use wlan_sys::status::{self, Status};

use crate::config::ConfigError;
use crate::decode::DecodeError;
use crate::logging::LogError;

/// Result type alias using the library's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Reason the native subsystem gave for rejecting a profile document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReasonCode {
    pub code: u32,
    pub text: Option<String>,
}

/// A native call failed with a code the caller cannot continue past.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeFailure {
    /// Native entry point that failed.
    pub operation: &'static str,
    pub code: Status,
    /// System message text for `code`.
    pub message: String,
    /// Only set for profile writes.
    pub reason: Option<ReasonCode>,
}

impl fmt::Display for NativeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed with status {}", self.operation, self.code)?;
        if let Some(name) = status::name(self.code) {
            write!(f, " ({name})")?;
        }
        let message = self.message.trim();
        if !message.is_empty() {
            write!(f, ": {message}")?;
        }
        if let Some(reason) = &self.reason {
            write!(f, "; reason {}", reason.code)?;
            if let Some(text) = &reason.text {
                write!(f, " ({})", text.trim())?;
            }
        }
        Ok(())
    }
}

/// Main error type for nativewifi-core
#[derive(Error, Debug)]
pub enum Error {
    /// The caller lacks the privilege for the operation.
    #[error("{operation} was denied: insufficient privilege")]
    Unauthorized { operation: &'static str },

    /// The native subsystem ran out of memory or sessions.
    #[error("{operation} failed: out of resources")]
    OutOfResources { operation: &'static str },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A native block did not match its declared layout.
    #[error("Malformed native data: {0}")]
    Malformed(#[from] DecodeError),

    #[error("Native error: {0}")]
    Native(NativeFailure),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Logging error: {0}")]
    Logging(#[from] LogError),
}

impl Error {
    /// Native status code behind this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<Status> {
        match self {
            Self::Unauthorized { .. } => Some(status::ERROR_ACCESS_DENIED),
            Self::OutOfResources { .. } => Some(status::ERROR_NOT_ENOUGH_MEMORY),
            Self::Native(failure) => Some(failure.code),
            _ => None,
        }
    }

    /// One-line remediation for the error, when there is an obvious one.
    #[must_use]
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Unauthorized { .. } => {
                Some("Run the process elevated or from an interactive user session.")
            }
            Self::OutOfResources { .. } => {
                Some("Close unused Native Wifi sessions and retry.")
            }
            Self::InvalidArgument(_) => Some("Check the arguments passed to the call."),
            Self::Malformed(_) => {
                Some("The native subsystem returned an unexpected layout; report the platform build.")
            }
            Self::Native(failure) => match failure.code {
                status::ERROR_SERVICE_NOT_ACTIVE => {
                    Some("Start the WLAN AutoConfig service (wlansvc) and retry.")
                }
                status::ERROR_NDIS_DOT11_POWER_STATE_INVALID => {
                    Some("Turn the wireless radio on and retry.")
                }
                status::ERROR_BAD_PROFILE | status::ERROR_ALREADY_EXISTS => {
                    Some("Fix the profile document or allow overwriting the existing profile.")
                }
                _ => None,
            },
            Self::Config(_) => Some("Fix the configuration file and retry."),
            Self::Logging(_) => None,
        }
    }
}
