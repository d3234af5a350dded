//! Scans correlated across several interfaces.
//!
//! Every target interface is asked to scan; the operation completes once
//! each target has reported completion or failure, or when the timeout or
//! the cancel signal fires first.  In every case the result is the set of
//! interfaces that reported a completed scan so far.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use crate::cancel::CancelSignal;
use crate::convert::InterfaceState;
use crate::correlator::{Countdown, Settled, ensure_timeout, settle};
use crate::error::{Error, Result};
use crate::interfaces::enumerate_interfaces;
use crate::model::NetworkIdentifier;
use crate::notification::{AcmEvent, Notification, NotificationSource};
use crate::session::Session;
use crate::surface::Surface;

/// Which interfaces a scan targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanMode {
    All,
    /// Interfaces not currently connected.
    OnlyDisconnected,
    /// An explicit, non-empty set of interfaces.  Ids that are not present
    /// interfaces are skipped.
    Only(Vec<Uuid>),
}

impl ScanMode {
    fn targets(&self, session: &Session) -> Result<Vec<Uuid>> {
        let ids: Vec<Uuid> = match self {
            Self::Only(ids) if ids.is_empty() => {
                return Err(Error::InvalidArgument(
                    "explicit scan target set is empty".to_string(),
                ));
            }
            Self::Only(ids) => {
                let present: HashSet<Uuid> = enumerate_interfaces(session)?
                    .into_iter()
                    .map(|interface| interface.id)
                    .collect();
                ids.iter()
                    .copied()
                    .filter(|id| {
                        let known = present.contains(id);
                        if !known {
                            tracing::debug!(interface_id = %id, "skipping absent scan target");
                        }
                        known
                    })
                    .collect()
            }
            Self::All => enumerate_interfaces(session)?
                .into_iter()
                .map(|interface| interface.id)
                .collect(),
            Self::OnlyDisconnected => enumerate_interfaces(session)?
                .into_iter()
                .filter(|interface| interface.state != InterfaceState::Connected)
                .map(|interface| interface.id)
                .collect(),
        };
        let mut seen = HashSet::new();
        Ok(ids.into_iter().filter(|id| seen.insert(*id)).collect())
    }
}

/// Scan the interfaces selected by `mode` and wait for them to report.
///
/// Returns the interfaces whose scan completed, in completion order.  A
/// timeout or cancellation is not an error: whatever completed by then is
/// returned.
pub async fn scan_networks_async(
    session: &Session,
    mode: &ScanMode,
    ssid: Option<&NetworkIdentifier>,
    timeout: Duration,
    cancel: &CancelSignal,
) -> Result<Vec<Uuid>> {
    ensure_timeout(timeout)?;
    let targets = mode.targets(session)?;
    if targets.is_empty() {
        tracing::debug!(?mode, "no interfaces to scan");
        return Ok(Vec::new());
    }

    let bridge = session.notifications();
    bridge.register(NotificationSource::ACM)?;

    let (countdown, future) = Countdown::new(targets.iter().copied());
    let _subscription = bridge.subscribe(NotificationSource::ACM, scan_handler(Arc::clone(&countdown)));

    let surface = Surface::new(session);
    for id in &targets {
        if !surface.scan(id, ssid)? {
            tracing::debug!(interface_id = %id, "scan request refused");
            countdown.report(*id, false);
        }
    }

    match settle(future, timeout, cancel).await {
        Settled::Resolved(()) | Settled::Abandoned => {}
        Settled::TimedOut => tracing::debug!(
            outstanding = countdown.outstanding(),
            "scan timed out"
        ),
        Settled::Cancelled => tracing::debug!(
            outstanding = countdown.outstanding(),
            "scan cancelled"
        ),
    }
    let succeeded = countdown.succeeded();
    tracing::info!(
        targets = targets.len(),
        succeeded = succeeded.len(),
        "scan finished"
    );
    Ok(succeeded)
}

fn scan_handler(countdown: Arc<Countdown>) -> impl Fn(&Notification) + Send + Sync + 'static {
    move |notification| {
        let success = match notification.acm() {
            Some(AcmEvent::ScanComplete) => true,
            Some(AcmEvent::ScanFail) => false,
            _ => return,
        };
        if countdown.report(notification.interface_id, success) && !success {
            tracing::debug!(
                interface_id = %notification.interface_id,
                reason_code = ?notification.reason_code(),
                "scan failed"
            );
        }
    }
}
