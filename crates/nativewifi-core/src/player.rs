//! Long-lived client.
//!
//! A [`WifiPlayer`] keeps one notification-capable session for its whole
//! lifetime, listens to auto configuration and media specific events, and
//! republishes them as [`PlayerEvent`]s on a broadcast channel.  Every
//! operation runs over that same session, so correlated operations share the
//! player's notification bridge and its handle is never closed mid-flight.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::broadcast;
use uuid::Uuid;
use wlan_sys::{ClientHandle, WlanApi};

use crate::config::WifiConfig;
use crate::error::Result;
use crate::notification::{AcmEvent, MsmEvent, Notification, NotificationSource, Subscription};
use crate::operations::{SessionLease, wifi_operations};
use crate::outcome::OutcomeMapper;
use crate::session::Session;

const EVENT_CAPACITY: usize = 64;

/// Something changed on an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlayerEvent {
    /// A scan finished or the scan list was refreshed.
    NetworkRefreshed(Uuid),
    AvailabilityChanged(Uuid),
    /// The interface arrived or went away.
    InterfaceChanged(Uuid),
    ConnectionChanged(Uuid),
    ProfileChanged(Uuid),
    SignalQualityChanged(Uuid),
    RadioChanged(Uuid),
}

impl PlayerEvent {
    pub fn from_notification(notification: &Notification) -> Option<Self> {
        let id = notification.interface_id;
        if let Some(event) = notification.acm() {
            return match event {
                AcmEvent::ScanComplete | AcmEvent::ScanListRefresh => {
                    Some(Self::NetworkRefreshed(id))
                }
                AcmEvent::NetworkAvailable | AcmEvent::NetworkNotAvailable => {
                    Some(Self::AvailabilityChanged(id))
                }
                AcmEvent::InterfaceArrival | AcmEvent::InterfaceRemoval => {
                    Some(Self::InterfaceChanged(id))
                }
                AcmEvent::ConnectionComplete | AcmEvent::Disconnected => {
                    Some(Self::ConnectionChanged(id))
                }
                AcmEvent::ProfileChange | AcmEvent::ProfileNameChange => {
                    Some(Self::ProfileChanged(id))
                }
                _ => None,
            };
        }
        match notification.msm()? {
            MsmEvent::SignalQualityChange => Some(Self::SignalQualityChanged(id)),
            MsmEvent::RadioStateChange => Some(Self::RadioChanged(id)),
            MsmEvent::AdapterRemoval => Some(Self::InterfaceChanged(id)),
            _ => None,
        }
    }

    pub const fn interface_id(&self) -> Uuid {
        match *self {
            Self::NetworkRefreshed(id)
            | Self::AvailabilityChanged(id)
            | Self::InterfaceChanged(id)
            | Self::ConnectionChanged(id)
            | Self::ProfileChanged(id)
            | Self::SignalQualityChanged(id)
            | Self::RadioChanged(id) => id,
        }
    }
}

pub struct WifiPlayer {
    _subscription: Subscription,
    events: broadcast::Sender<PlayerEvent>,
    session: Session,
    config: WifiConfig,
}

impl std::fmt::Debug for WifiPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WifiPlayer")
            .field("session", &self.session)
            .field("listeners", &self.events.receiver_count())
            .finish_non_exhaustive()
    }
}

impl WifiPlayer {
    /// Open a session owned by the player; it is closed when the player is
    /// dropped.
    pub fn open(api: Arc<dyn WlanApi>, config: WifiConfig) -> Result<Self> {
        config.validate()?;
        let session = Session::open(api, OutcomeMapper::new(config.strict))?;
        Self::start(session, config)
    }

    /// Run on a handle owned elsewhere.  The player never closes it.
    pub fn attach(api: Arc<dyn WlanApi>, handle: ClientHandle, config: WifiConfig) -> Result<Self> {
        config.validate()?;
        let session = Session::wrap(api, handle, OutcomeMapper::new(config.strict));
        Self::start(session, config)
    }

    fn start(session: Session, config: WifiConfig) -> Result<Self> {
        let sources = NotificationSource::ACM | NotificationSource::MSM;
        let bridge = session.notifications();
        bridge.register(sources)?;

        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let sender = events.clone();
        let subscription = bridge.subscribe(sources, move |notification| {
            if let Some(event) = PlayerEvent::from_notification(notification) {
                // No listener is not an error.
                let _ = sender.send(event);
            }
        });
        tracing::debug!(handle = session.handle().as_raw(), "player started");
        Ok(Self {
            _subscription: subscription,
            events,
            session,
            config,
        })
    }

    /// Receive events published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<PlayerEvent> {
        self.events.subscribe()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &WifiConfig {
        &self.config
    }

    #[allow(clippy::unnecessary_wraps)]
    fn lease(&self) -> Result<SessionLease<'_>> {
        Ok(SessionLease::Shared(&self.session))
    }
}

wifi_operations!(WifiPlayer);

#[cfg(test)]
mod tests {
    use super::*;
    use wlan_sys::codes::{acm, msm, source};

    fn notification(source: u32, code: u32) -> Notification {
        Notification {
            source,
            code,
            interface_id: Uuid::from_u128(9),
            payload: Vec::new(),
        }
    }

    #[test]
    fn translates_acm_events() {
        let id = Uuid::from_u128(9);
        assert_eq!(
            PlayerEvent::from_notification(&notification(source::ACM, acm::SCAN_LIST_REFRESH)),
            Some(PlayerEvent::NetworkRefreshed(id))
        );
        assert_eq!(
            PlayerEvent::from_notification(&notification(source::ACM, acm::DISCONNECTED)),
            Some(PlayerEvent::ConnectionChanged(id))
        );
        assert_eq!(
            PlayerEvent::from_notification(&notification(source::ACM, acm::PROFILE_NAME_CHANGE)),
            Some(PlayerEvent::ProfileChanged(id))
        );
        assert_eq!(
            PlayerEvent::from_notification(&notification(source::ACM, acm::CONNECTION_START)),
            None
        );
    }

    #[test]
    fn translates_msm_events() {
        let id = Uuid::from_u128(9);
        assert_eq!(
            PlayerEvent::from_notification(&notification(source::MSM, msm::RADIO_STATE_CHANGE)),
            Some(PlayerEvent::RadioChanged(id))
        );
        assert_eq!(
            PlayerEvent::from_notification(&notification(source::MSM, msm::ADAPTER_REMOVAL)),
            Some(PlayerEvent::InterfaceChanged(id))
        );
        assert_eq!(
            PlayerEvent::from_notification(&notification(source::ONEX, 1)),
            None
        );
        assert_eq!(PlayerEvent::RadioChanged(id).interface_id(), id);
    }
}
