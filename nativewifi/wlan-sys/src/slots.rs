//! Per-handle callback storage for native notification registration.
//!
//! The context pointer handed to the native registration call points at a
//! [`CallbackSlot`], so a slot must outlive every delivery on its handle.
//! Unregistering only clears the callback: a delivery already in flight may
//! still read the slot.  The slot itself is freed when the handle is closed,
//! since closing blocks until in-flight callbacks return.  A handle this
//! process never closes (one it only borrowed) keeps a single empty slot,
//! reused if the handle registers again.

use std::collections::HashMap;

use parking_lot::{Mutex, RwLock};

use crate::{ClientHandle, NotificationCallback};

pub(crate) struct CallbackSlot {
    callback: RwLock<Option<NotificationCallback>>,
}

impl CallbackSlot {
    pub(crate) fn callback(&self) -> Option<NotificationCallback> {
        self.callback.read().clone()
    }
}

#[derive(Default)]
pub(crate) struct CallbackSlots {
    slots: Mutex<HashMap<usize, Box<CallbackSlot>>>,
}

impl CallbackSlots {
    /// Store `callback` for `client` and return the slot's address, stable
    /// until [`remove`](Self::remove).
    pub(crate) fn install(
        &self,
        client: ClientHandle,
        callback: NotificationCallback,
    ) -> *const CallbackSlot {
        let mut slots = self.slots.lock();
        let slot = slots.entry(client.as_raw()).or_insert_with(|| {
            Box::new(CallbackSlot {
                callback: RwLock::new(None),
            })
        });
        *slot.callback.write() = Some(callback);
        &**slot as *const CallbackSlot
    }

    /// Drop the callback but keep the slot reachable for late deliveries.
    pub(crate) fn clear(&self, client: ClientHandle) {
        if let Some(slot) = self.slots.lock().get(&client.as_raw()) {
            *slot.callback.write() = None;
        }
    }

    /// Free the slot.  Only valid once the native side can no longer call in.
    pub(crate) fn remove(&self, client: ClientHandle) {
        self.slots.lock().remove(&client.as_raw());
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.slots.lock().len()
    }
}
