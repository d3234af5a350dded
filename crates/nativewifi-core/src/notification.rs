//! Notification bridge.
//!
//! One bridge per session owns a single callback installed with the native
//! subsystem (the trampoline).  The trampoline runs on native-owned threads,
//! possibly concurrently, copies the envelope and payload into an owned
//! [`Notification`], and hands it to every subscriber interested in the
//! notification's source.  Subscribers run synchronously on that thread and
//! must not block.
//!
//! Registration is cumulative: the registered source set only grows, and the
//! native registration call is skipped when a request adds nothing new.
//! Teardown installs no callback and clears the set; closing the handle
//! revokes delivery anyway.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use bitflags::bitflags;
use parking_lot::{Mutex, RwLock};
use uuid::Uuid;
use wlan_sys::codes::{acm, msm, source};
use wlan_sys::status::{ERROR_SUCCESS, Status};
use wlan_sys::{ClientHandle, NotificationCallback, RawNotification, WlanApi};

use crate::decode::{DecodeError, decode_single};
use crate::error::Result;
use crate::outcome::{CallSite, OutcomeMapper};
use crate::records::ConnectionNotification;

bitflags! {
    /// Notification source categories.
    #[derive(Default)]
    pub struct NotificationSource: u32 {
        const ONEX = source::ONEX;
        const ACM = source::ACM;
        const MSM = source::MSM;
        const SECURITY = source::SECURITY;
        const IHV = source::IHV;
        const HNWK = source::HNWK;
    }
}

/// Auto configuration module events the core reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AcmEvent {
    ScanComplete,
    ScanFail,
    ConnectionStart,
    ConnectionComplete,
    ConnectionAttemptFail,
    InterfaceArrival,
    InterfaceRemoval,
    ProfileChange,
    ProfileNameChange,
    NetworkNotAvailable,
    NetworkAvailable,
    Disconnecting,
    Disconnected,
    ScanListRefresh,
    Other(u32),
}

impl AcmEvent {
    pub const fn from_code(code: u32) -> Self {
        match code {
            acm::SCAN_COMPLETE => Self::ScanComplete,
            acm::SCAN_FAIL => Self::ScanFail,
            acm::CONNECTION_START => Self::ConnectionStart,
            acm::CONNECTION_COMPLETE => Self::ConnectionComplete,
            acm::CONNECTION_ATTEMPT_FAIL => Self::ConnectionAttemptFail,
            acm::INTERFACE_ARRIVAL => Self::InterfaceArrival,
            acm::INTERFACE_REMOVAL => Self::InterfaceRemoval,
            acm::PROFILE_CHANGE => Self::ProfileChange,
            acm::PROFILE_NAME_CHANGE => Self::ProfileNameChange,
            acm::NETWORK_NOT_AVAILABLE => Self::NetworkNotAvailable,
            acm::NETWORK_AVAILABLE => Self::NetworkAvailable,
            acm::DISCONNECTING => Self::Disconnecting,
            acm::DISCONNECTED => Self::Disconnected,
            acm::SCAN_LIST_REFRESH => Self::ScanListRefresh,
            other => Self::Other(other),
        }
    }
}

/// Media specific module events the core reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MsmEvent {
    Connected,
    RadioStateChange,
    SignalQualityChange,
    Disconnected,
    AdapterRemoval,
    Other(u32),
}

impl MsmEvent {
    pub const fn from_code(code: u32) -> Self {
        match code {
            msm::CONNECTED => Self::Connected,
            msm::RADIO_STATE_CHANGE => Self::RadioStateChange,
            msm::SIGNAL_QUALITY_CHANGE => Self::SignalQualityChange,
            msm::DISCONNECTED => Self::Disconnected,
            msm::ADAPTER_REMOVAL => Self::AdapterRemoval,
            other => Self::Other(other),
        }
    }
}

/// An owned copy of one native notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub source: u32,
    pub code: u32,
    pub interface_id: Uuid,
    pub payload: Vec<u8>,
}

impl Notification {
    pub fn from_raw(raw: &RawNotification<'_>) -> Self {
        Self {
            source: raw.source,
            code: raw.code,
            interface_id: Uuid::from_bytes_le(raw.interface_guid),
            payload: raw.payload.to_vec(),
        }
    }

    pub fn acm(&self) -> Option<AcmEvent> {
        (self.source == source::ACM).then(|| AcmEvent::from_code(self.code))
    }

    pub fn msm(&self) -> Option<MsmEvent> {
        (self.source == source::MSM).then(|| MsmEvent::from_code(self.code))
    }

    /// Payload of connection-related events.
    pub fn connection_data(&self) -> std::result::Result<ConnectionNotification, DecodeError> {
        decode_single(&self.payload)
    }

    /// Reason code carried by a scan failure payload.
    pub fn reason_code(&self) -> Option<u32> {
        let bytes: [u8; 4] = self.payload.get(..4)?.try_into().ok()?;
        Some(u32::from_le_bytes(bytes))
    }
}

type Handler = Arc<dyn Fn(&Notification) + Send + Sync>;

fn callback<F>(f: F) -> NotificationCallback
where
    F: Fn(&RawNotification<'_>) + Send + Sync + 'static,
{
    Arc::new(f)
}

struct Subscriber {
    id: u64,
    sources: NotificationSource,
    handler: Handler,
}

/// Demultiplexes native notifications of one session to subscribers.
pub struct NotificationBridge {
    api: Arc<dyn WlanApi>,
    handle: ClientHandle,
    mapper: OutcomeMapper,
    registered: Mutex<NotificationSource>,
    subscribers: RwLock<Vec<Subscriber>>,
    next_id: AtomicU64,
    trampoline: NotificationCallback,
}

impl std::fmt::Debug for NotificationBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationBridge")
            .field("handle", &self.handle)
            .field("registered", &*self.registered.lock())
            .field("subscribers", &self.subscribers.read().len())
            .finish_non_exhaustive()
    }
}

impl NotificationBridge {
    pub fn new(api: Arc<dyn WlanApi>, handle: ClientHandle, mapper: OutcomeMapper) -> Arc<Self> {
        Arc::new_cyclic(|weak: &Weak<Self>| {
            let weak = weak.clone();
            let trampoline = callback(move |raw| {
                if let Some(bridge) = weak.upgrade() {
                    bridge.dispatch(raw);
                }
            });
            Self {
                api,
                handle,
                mapper,
                registered: Mutex::new(NotificationSource::empty()),
                subscribers: RwLock::new(Vec::new()),
                next_id: AtomicU64::new(1),
                trampoline,
            }
        })
    }

    /// Source set currently registered with the native subsystem.
    pub fn registered(&self) -> NotificationSource {
        *self.registered.lock()
    }

    /// Add `sources` to the registered set.  Returns `true` when the native
    /// registration call was issued.
    pub fn register(&self, sources: NotificationSource) -> Result<bool> {
        let mut registered = self.registered.lock();
        let wanted = *registered | sources;
        if wanted == *registered {
            return Ok(false);
        }
        let code = self.api.register_notification(
            self.handle,
            wanted.bits(),
            Some(Arc::clone(&self.trampoline)),
        );
        self.mapper.check(
            &CallSite::fatal("WlanRegisterNotification"),
            code,
            &*self.api,
        )?;
        tracing::debug!(sources = wanted.bits(), "registered notification sources");
        *registered = wanted;
        Ok(true)
    }

    /// Subscribe to notifications from `sources`.  The handler stays
    /// installed until the returned guard is dropped.
    pub fn subscribe<F>(self: &Arc<Self>, sources: NotificationSource, handler: F) -> Subscription
    where
        F: Fn(&Notification) + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.subscribers.write().push(Subscriber {
            id,
            sources,
            handler: Arc::new(handler),
        });
        Subscription {
            bridge: Arc::downgrade(self),
            id,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }

    fn unsubscribe(&self, id: u64) {
        self.subscribers.write().retain(|s| s.id != id);
    }

    /// Best-effort teardown of native delivery.
    pub fn teardown(&self) -> Status {
        let mut registered = self.registered.lock();
        if registered.is_empty() {
            return ERROR_SUCCESS;
        }
        let code = self
            .api
            .register_notification(self.handle, source::NONE, None);
        if code != ERROR_SUCCESS {
            tracing::warn!(status = code, "failed to unregister notifications");
        }
        *registered = NotificationSource::empty();
        code
    }

    /// Entry point of the trampoline.
    pub fn dispatch(&self, raw: &RawNotification<'_>) {
        let origin = NotificationSource::from_bits_truncate(raw.source);
        let handlers: Vec<Handler> = self
            .subscribers
            .read()
            .iter()
            .filter(|s| s.sources.intersects(origin))
            .map(|s| Arc::clone(&s.handler))
            .collect();
        if handlers.is_empty() {
            return;
        }

        let notification = Notification::from_raw(raw);
        tracing::trace!(
            source = notification.source,
            code = notification.code,
            interface_id = %notification.interface_id,
            handlers = handlers.len(),
            "dispatching notification"
        );
        for handler in handlers {
            if catch_unwind(AssertUnwindSafe(|| handler(&notification))).is_err() {
                tracing::warn!(
                    source = notification.source,
                    code = notification.code,
                    "notification handler panicked"
                );
            }
        }
    }
}

/// Removes its handler from the bridge when dropped.
#[derive(Debug)]
#[must_use = "the handler is removed when the subscription is dropped"]
pub struct Subscription {
    bridge: Weak<NotificationBridge>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(bridge) = self.bridge.upgrade() {
            bridge.unsubscribe(self.id);
        }
    }
}
