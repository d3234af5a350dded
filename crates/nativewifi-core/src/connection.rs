//! Connect and disconnect, synchronous and correlated with their completion
//! notifications.
//!
//! The awaitable variants register for auto configuration events, subscribe
//! a handler filtered on the target interface, issue the native action and
//! race the handler's verdict against the timeout and the cancel signal.  A
//! timed out or cancelled operation returns `false`; the native action may
//! still complete later, and its notification is then ignored.

use std::time::Duration;

use uuid::Uuid;
use wlan_sys::codes::REASON_CODE_SUCCESS;

use crate::cancel::CancelSignal;
use crate::convert::ConnectionMode;
use crate::correlator::{Pending, Settled, ensure_timeout, settle};
use crate::error::{Error, Result};
use crate::model::ConnectRequest;
use crate::notification::{AcmEvent, Notification, NotificationSource};
use crate::session::Session;
use crate::surface::Surface;

fn validate(request: &ConnectRequest) -> Result<()> {
    if request.mode == ConnectionMode::Profile && request.profile_name.is_empty() {
        return Err(Error::InvalidArgument(
            "profile connections need a profile name".to_string(),
        ));
    }
    Ok(())
}

pub fn connect_network(session: &Session, request: &ConnectRequest) -> Result<bool> {
    validate(request)?;
    let accepted = Surface::new(session).connect(request)?;
    tracing::info!(
        interface_id = %request.interface_id,
        profile = %request.profile_name,
        accepted,
        "connect requested"
    );
    Ok(accepted)
}

pub fn disconnect_network(session: &Session, interface_id: &Uuid) -> Result<bool> {
    let accepted = Surface::new(session).disconnect(interface_id)?;
    tracing::info!(%interface_id, accepted, "disconnect requested");
    Ok(accepted)
}

/// Connect and wait for the matching completion.  `true` only when the
/// connection completed with a success reason code.
pub async fn connect_network_async(
    session: &Session,
    request: &ConnectRequest,
    timeout: Duration,
    cancel: &CancelSignal,
) -> Result<bool> {
    ensure_timeout(timeout)?;
    validate(request)?;

    let bridge = session.notifications();
    bridge.register(NotificationSource::ACM)?;

    let (pending, future) = Pending::pair();
    let _subscription = bridge.subscribe(
        NotificationSource::ACM,
        connect_handler(pending.clone(), request.interface_id, request.profile_name.clone()),
    );

    if !Surface::new(session).connect(request)? {
        pending.resolve(false);
    }
    let settled = settle(future, timeout, cancel).await;
    Ok(verdict("connect", &request.interface_id, settled))
}

/// Disconnect and wait for the matching disconnected notification.
pub async fn disconnect_network_async(
    session: &Session,
    interface_id: &Uuid,
    timeout: Duration,
    cancel: &CancelSignal,
) -> Result<bool> {
    ensure_timeout(timeout)?;

    let bridge = session.notifications();
    bridge.register(NotificationSource::ACM)?;

    let (pending, future) = Pending::pair();
    let _subscription = bridge.subscribe(
        NotificationSource::ACM,
        disconnect_handler(pending.clone(), *interface_id),
    );

    if !Surface::new(session).disconnect(interface_id)? {
        pending.resolve(false);
    }
    let settled = settle(future, timeout, cancel).await;
    Ok(verdict("disconnect", interface_id, settled))
}

fn connect_handler(
    pending: Pending<bool>,
    target: Uuid,
    profile_name: String,
) -> impl Fn(&Notification) + Send + Sync + 'static {
    move |notification| {
        if notification.interface_id != target {
            return;
        }
        let completed = match notification.acm() {
            Some(AcmEvent::ConnectionComplete) => true,
            Some(AcmEvent::ConnectionAttemptFail) => false,
            _ => return,
        };
        let data = match notification.connection_data() {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!(interface_id = %target, error = %err, "unreadable connection notification");
                pending.resolve(false);
                return;
            }
        };
        if !profile_name.is_empty() && data.profile_name != profile_name {
            return;
        }
        let success = completed && data.reason_code == REASON_CODE_SUCCESS;
        if pending.resolve(success) {
            tracing::debug!(
                interface_id = %target,
                profile = %data.profile_name,
                reason_code = data.reason_code,
                success,
                "connect correlated"
            );
        }
    }
}

fn disconnect_handler(
    pending: Pending<bool>,
    target: Uuid,
) -> impl Fn(&Notification) + Send + Sync + 'static {
    move |notification| {
        if notification.interface_id == target
            && notification.acm() == Some(AcmEvent::Disconnected)
            && pending.resolve(true)
        {
            tracing::debug!(interface_id = %target, "disconnect correlated");
        }
    }
}

fn verdict(action: &'static str, interface_id: &Uuid, settled: Settled<bool>) -> bool {
    match settled {
        Settled::Resolved(success) => success,
        Settled::TimedOut => {
            tracing::debug!(action, %interface_id, "timed out waiting for notification");
            false
        }
        Settled::Cancelled => {
            tracing::debug!(action, %interface_id, "cancelled");
            false
        }
        Settled::Abandoned => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wlan_sys::codes::{acm, source};
    use wlan_sys::layout::CONNECTION_NOTIFICATION_SIZE;

    fn connection_payload(profile: &str, reason: u32) -> Vec<u8> {
        let mut payload = vec![0u8; CONNECTION_NOTIFICATION_SIZE];
        for (i, unit) in profile.encode_utf16().enumerate() {
            payload[4 + i * 2..6 + i * 2].copy_from_slice(&unit.to_le_bytes());
        }
        payload[560..564].copy_from_slice(&reason.to_le_bytes());
        payload
    }

    fn event(code: u32, interface_id: Uuid, payload: Vec<u8>) -> Notification {
        Notification {
            source: source::ACM,
            code,
            interface_id,
            payload,
        }
    }

    #[test]
    fn connect_handler_filters_interface_and_profile() {
        let target = Uuid::from_u128(7);
        let (pending, _future) = Pending::pair();
        let handler = connect_handler(pending.clone(), target, "home".into());

        handler(&event(acm::CONNECTION_COMPLETE, Uuid::from_u128(8), connection_payload("home", 0)));
        handler(&event(acm::CONNECTION_COMPLETE, target, connection_payload("work", 0)));
        handler(&event(acm::SCAN_COMPLETE, target, Vec::new()));
        assert!(!pending.is_resolved());

        handler(&event(acm::CONNECTION_COMPLETE, target, connection_payload("home", 0)));
        assert!(pending.is_resolved());
    }

    #[tokio::test]
    async fn nonzero_reason_code_is_failure() {
        let target = Uuid::from_u128(7);
        let (pending, future) = Pending::pair();
        let handler = connect_handler(pending, target, "home".into());
        handler(&event(acm::CONNECTION_COMPLETE, target, connection_payload("home", 0x0002_8011)));
        let settled = settle(future, Duration::from_secs(1), &CancelSignal::never()).await;
        assert_eq!(settled, Settled::Resolved(false));
    }

    #[tokio::test]
    async fn malformed_payload_resolves_to_failure() {
        let target = Uuid::from_u128(7);
        let (pending, future) = Pending::pair();
        let handler = connect_handler(pending, target, "home".into());
        handler(&event(acm::CONNECTION_COMPLETE, target, vec![0; 12]));
        let settled = settle(future, Duration::from_secs(1), &CancelSignal::never()).await;
        assert_eq!(settled, Settled::Resolved(false));
    }

    #[test]
    fn disconnect_handler_waits_for_disconnected() {
        let target = Uuid::from_u128(3);
        let (pending, _future) = Pending::pair();
        let handler = disconnect_handler(pending.clone(), target);
        handler(&event(acm::DISCONNECTING, target, Vec::new()));
        handler(&event(acm::DISCONNECTED, Uuid::from_u128(4), Vec::new()));
        assert!(!pending.is_resolved());
        handler(&event(acm::DISCONNECTED, target, Vec::new()));
        assert!(pending.is_resolved());
    }

    #[test]
    fn profile_mode_requires_name() {
        let request = ConnectRequest::profile(Uuid::nil(), "");
        assert!(matches!(validate(&request), Err(Error::InvalidArgument(_))));
    }
}
