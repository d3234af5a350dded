//! Native status → outcome taxonomy.
//!
//! Every native call returns a numeric status.  A handful of codes describe
//! expected alternative paths (the interface is not connected, the profile
//! does not exist, the radio is off).  A call site declares which of those
//! it tolerates; tolerated codes come back as an [`ActionOutcome`] value,
//! everything else becomes an [`Error`].
//!
//! Two codes are fatal no matter what the call site says: access denied and
//! out of memory.  Unrecognized codes are fatal too.  Strict mode (either
//! [`WifiConfig::strict`](crate::config::WifiConfig::strict) or the
//! process-wide toggle) escalates tolerated codes as well.
//!
//! ## Process-wide toggle
//!
//! [`set_throw_on_any_failure`] flips strict mode for every mapper in the
//! process.  It is plain process state: it is never reset implicitly, and
//! [`throws_on_any_failure`] reads it back.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use wlan_sys::StatusText;
use wlan_sys::status::{self, Status};

use crate::error::{Error, NativeFailure, ReasonCode, Result};

/// Result of a native call whose failure is an expected alternative path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ActionOutcome {
    Success,
    NotConnected,
    NotFound,
    NotSupported,
    ServiceInactive,
    RadioOff,
    Busy,
    /// Generic driver failure.
    OtherError,
}

impl ActionOutcome {
    /// Classify a status.  `None` means the status is always fatal.
    pub const fn from_status(code: Status) -> Option<Self> {
        Some(match code {
            status::ERROR_SUCCESS => Self::Success,
            status::ERROR_INVALID_STATE => Self::NotConnected,
            status::ERROR_NOT_FOUND => Self::NotFound,
            status::ERROR_NOT_SUPPORTED => Self::NotSupported,
            status::ERROR_SERVICE_NOT_ACTIVE => Self::ServiceInactive,
            status::ERROR_NDIS_DOT11_POWER_STATE_INVALID => Self::RadioOff,
            status::ERROR_BUSY | status::ERROR_NDIS_DOT11_MEDIA_IN_USE => Self::Busy,
            status::ERROR_GEN_FAILURE => Self::OtherError,
            _ => return None,
        })
    }

    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Every non-success outcome.
pub const ALL_BENIGN: &[ActionOutcome] = &[
    ActionOutcome::NotConnected,
    ActionOutcome::NotFound,
    ActionOutcome::NotSupported,
    ActionOutcome::ServiceInactive,
    ActionOutcome::RadioOff,
    ActionOutcome::Busy,
    ActionOutcome::OtherError,
];

/// A native call site and the outcomes it tolerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub operation: &'static str,
    pub benign: &'static [ActionOutcome],
}

impl CallSite {
    /// Every non-success status raises.
    pub const fn fatal(operation: &'static str) -> Self {
        Self {
            operation,
            benign: &[],
        }
    }

    /// Tolerate the listed outcomes.
    pub const fn tolerant(operation: &'static str, benign: &'static [ActionOutcome]) -> Self {
        Self { operation, benign }
    }

    /// Tolerate every outcome in the benign taxonomy.
    pub const fn tolerating_all(operation: &'static str) -> Self {
        Self::tolerant(operation, ALL_BENIGN)
    }

    fn tolerates(&self, outcome: ActionOutcome) -> bool {
        self.benign.contains(&outcome)
    }
}

static THROW_ON_ANY_FAILURE: AtomicBool = AtomicBool::new(false);

/// Escalate every non-success outcome in the process.
pub fn set_throw_on_any_failure(enabled: bool) {
    THROW_ON_ANY_FAILURE.store(enabled, Ordering::SeqCst);
}

/// Current value of the process-wide toggle.
pub fn throws_on_any_failure() -> bool {
    THROW_ON_ANY_FAILURE.load(Ordering::SeqCst)
}

/// Maps native statuses to outcomes or errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeMapper {
    strict: bool,
}

impl OutcomeMapper {
    pub const fn new(strict: bool) -> Self {
        Self { strict }
    }

    /// Strict mode as configured, ignoring the process-wide toggle.
    pub const fn configured_strict(&self) -> bool {
        self.strict
    }

    /// Effective strict mode.
    pub fn is_strict(&self) -> bool {
        self.strict || throws_on_any_failure()
    }

    pub fn check<T>(&self, site: &CallSite, code: Status, text: &T) -> Result<ActionOutcome>
    where
        T: StatusText + ?Sized,
    {
        self.classify(site, code, None, text)
    }

    /// Like [`check`](Self::check), attaching the profile rejection reason
    /// to a fatal error.
    pub fn check_profile<T>(
        &self,
        site: &CallSite,
        code: Status,
        reason: u32,
        text: &T,
    ) -> Result<ActionOutcome>
    where
        T: StatusText + ?Sized,
    {
        self.classify(site, code, Some(reason), text)
    }

    /// Mutation calls: `true` on success, `false` for a tolerated outcome.
    pub fn check_bool<T>(&self, site: &CallSite, code: Status, text: &T) -> Result<bool>
    where
        T: StatusText + ?Sized,
    {
        Ok(self.check(site, code, text)?.is_success())
    }

    fn classify<T>(
        &self,
        site: &CallSite,
        code: Status,
        reason: Option<u32>,
        text: &T,
    ) -> Result<ActionOutcome>
    where
        T: StatusText + ?Sized,
    {
        match code {
            status::ERROR_SUCCESS => return Ok(ActionOutcome::Success),
            status::ERROR_ACCESS_DENIED => {
                return Err(Error::Unauthorized {
                    operation: site.operation,
                });
            }
            status::ERROR_NOT_ENOUGH_MEMORY => {
                return Err(Error::OutOfResources {
                    operation: site.operation,
                });
            }
            _ => {}
        }

        if let Some(outcome) = ActionOutcome::from_status(code) {
            if site.tolerates(outcome) && !self.is_strict() {
                tracing::debug!(
                    op = site.operation,
                    status = code,
                    outcome = ?outcome,
                    "native call returned a tolerated outcome"
                );
                return Ok(outcome);
            }
        }

        Err(Error::Native(NativeFailure {
            operation: site.operation,
            code,
            message: text.status_message(code),
            reason: reason.map(|code| ReasonCode {
                code,
                text: text.reason_text(code),
            }),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Text;
    impl StatusText for Text {
        fn status_message(&self, code: Status) -> String {
            format!("message {code}")
        }

        fn reason_text(&self, reason: u32) -> Option<String> {
            Some(format!("reason {reason}"))
        }
    }

    const QUERY: CallSite = CallSite::tolerant("WlanQueryInterface", &[ActionOutcome::NotFound]);

    #[test]
    fn success_is_success_everywhere() {
        let mapper = OutcomeMapper::new(true);
        let outcome = mapper
            .check(&CallSite::fatal("op"), status::ERROR_SUCCESS, &Text)
            .unwrap();
        assert_eq!(outcome, ActionOutcome::Success);
    }

    #[test]
    fn declared_benign_code_is_returned() {
        let mapper = OutcomeMapper::new(false);
        let outcome = mapper.check(&QUERY, status::ERROR_NOT_FOUND, &Text).unwrap();
        assert_eq!(outcome, ActionOutcome::NotFound);
    }

    #[test]
    fn undeclared_benign_code_raises() {
        let mapper = OutcomeMapper::new(false);
        let err = mapper
            .check(&QUERY, status::ERROR_INVALID_STATE, &Text)
            .unwrap_err();
        match err {
            Error::Native(failure) => {
                assert_eq!(failure.code, status::ERROR_INVALID_STATE);
                assert_eq!(failure.operation, "WlanQueryInterface");
                assert_eq!(failure.message, "message 5023");
                assert!(failure.reason.is_none());
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn configured_strict_escalates_benign_code() {
        let mapper = OutcomeMapper::new(true);
        let err = mapper.check(&QUERY, status::ERROR_NOT_FOUND, &Text).unwrap_err();
        assert_eq!(err.status(), Some(status::ERROR_NOT_FOUND));
    }

    #[test]
    fn always_fatal_codes_ignore_declarations() {
        let mapper = OutcomeMapper::new(false);
        let site = CallSite::tolerating_all("op");
        assert!(matches!(
            mapper.check(&site, status::ERROR_ACCESS_DENIED, &Text),
            Err(Error::Unauthorized { operation: "op" })
        ));
        assert!(matches!(
            mapper.check(&site, status::ERROR_NOT_ENOUGH_MEMORY, &Text),
            Err(Error::OutOfResources { operation: "op" })
        ));
        assert!(matches!(
            mapper.check(&site, 0xdead, &Text),
            Err(Error::Native(NativeFailure { code: 0xdead, .. }))
        ));
    }

    #[test]
    fn profile_reason_is_attached() {
        let mapper = OutcomeMapper::new(false);
        let err = mapper
            .check_profile(
                &CallSite::fatal("WlanSetProfile"),
                status::ERROR_BAD_PROFILE,
                42,
                &Text,
            )
            .unwrap_err();
        match err {
            Error::Native(failure) => {
                let reason = failure.reason.unwrap();
                assert_eq!(reason.code, 42);
                assert_eq!(reason.text.as_deref(), Some("reason 42"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn check_bool_maps_tolerated_to_false() {
        let mapper = OutcomeMapper::new(false);
        let site = CallSite::tolerating_all("WlanDeleteProfile");
        assert!(mapper.check_bool(&site, status::ERROR_SUCCESS, &Text).unwrap());
        assert!(!mapper.check_bool(&site, status::ERROR_NOT_FOUND, &Text).unwrap());
        assert!(!mapper.check_bool(&site, status::ERROR_BUSY, &Text).unwrap());
    }

    #[test]
    fn classification_table() {
        assert_eq!(
            ActionOutcome::from_status(status::ERROR_NDIS_DOT11_MEDIA_IN_USE),
            Some(ActionOutcome::Busy)
        );
        assert_eq!(
            ActionOutcome::from_status(status::ERROR_NDIS_DOT11_POWER_STATE_INVALID),
            Some(ActionOutcome::RadioOff)
        );
        assert_eq!(
            ActionOutcome::from_status(status::ERROR_GEN_FAILURE),
            Some(ActionOutcome::OtherError)
        );
        assert_eq!(ActionOutcome::from_status(status::ERROR_ACCESS_DENIED), None);
        assert_eq!(ActionOutcome::from_status(status::ERROR_INVALID_PARAMETER), None);
    }
}
