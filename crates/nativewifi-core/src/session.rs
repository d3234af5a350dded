//! Scoped native sessions.
//!
//! A [`Session`] either owns its client handle (opened with
//! [`Session::open`], closed exactly once on [`Session::release`] or drop) or
//! wraps a handle owned elsewhere ([`Session::wrap`]), in which case it never
//! closes it.  Either way the session lazily carries the notification bridge
//! for its handle and tears native delivery down on release.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use wlan_sys::status::ERROR_SUCCESS;
use wlan_sys::{ClientHandle, WlanApi};

use crate::error::Result;
use crate::notification::NotificationBridge;
use crate::outcome::{CallSite, OutcomeMapper};

pub struct Session {
    api: Arc<dyn WlanApi>,
    handle: ClientHandle,
    owned: bool,
    mapper: OutcomeMapper,
    released: AtomicBool,
    bridge: Mutex<Option<Arc<NotificationBridge>>>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("handle", &self.handle)
            .field("owned", &self.owned)
            .field("released", &self.is_released())
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Open a new owned session.  Any failure is raised.
    pub fn open(api: Arc<dyn WlanApi>, mapper: OutcomeMapper) -> Result<Self> {
        let handle = match api.open_handle() {
            Ok(handle) => handle,
            Err(code) => {
                mapper.check(&CallSite::fatal("WlanOpenHandle"), code, &*api)?;
                // A success status without a handle is not something the
                // native side produces; treat it as a generic failure.
                return Err(crate::Error::Native(crate::NativeFailure {
                    operation: "WlanOpenHandle",
                    code,
                    message: api.status_message(code),
                    reason: None,
                }));
            }
        };
        tracing::trace!(handle = handle.as_raw(), "opened session");
        Ok(Self::new(api, handle, true, mapper))
    }

    /// Use a handle owned elsewhere; it is never closed by this session.
    pub fn wrap(api: Arc<dyn WlanApi>, handle: ClientHandle, mapper: OutcomeMapper) -> Self {
        Self::new(api, handle, false, mapper)
    }

    fn new(api: Arc<dyn WlanApi>, handle: ClientHandle, owned: bool, mapper: OutcomeMapper) -> Self {
        Self {
            api,
            handle,
            owned,
            mapper,
            released: AtomicBool::new(false),
            bridge: Mutex::new(None),
        }
    }

    pub fn handle(&self) -> ClientHandle {
        self.handle
    }

    pub fn api(&self) -> &dyn WlanApi {
        &*self.api
    }

    pub fn mapper(&self) -> &OutcomeMapper {
        &self.mapper
    }

    pub fn is_owned(&self) -> bool {
        self.owned
    }

    pub fn is_released(&self) -> bool {
        self.released.load(Ordering::Acquire)
    }

    /// Notification bridge of this session, created on first use.
    pub fn notifications(&self) -> Arc<NotificationBridge> {
        let mut bridge = self.bridge.lock();
        Arc::clone(bridge.get_or_insert_with(|| {
            NotificationBridge::new(Arc::clone(&self.api), self.handle, self.mapper)
        }))
    }

    /// Tear down notifications and, for owned sessions, close the handle.
    /// Only the first call has an effect; returns whether this call did it.
    pub fn release(&self) -> bool {
        if self.released.swap(true, Ordering::AcqRel) {
            return false;
        }
        if let Some(bridge) = self.bridge.lock().take() {
            bridge.teardown();
        }
        if self.owned {
            let code = self.api.close_handle(self.handle);
            if code != ERROR_SUCCESS {
                tracing::warn!(
                    handle = self.handle.as_raw(),
                    status = code,
                    "failed to close session"
                );
            }
        }
        true
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.release();
    }
}
