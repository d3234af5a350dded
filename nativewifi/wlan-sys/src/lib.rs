//! The purpose of this crate is to give the rest of the workspace a single,
//! narrow seam over the platform Native Wifi API (`wlanapi.dll` on Windows).
//!
//! Everything that touches raw native memory lives here.  The safe layers
//! above only ever see:
//!
//! * [`WlanApi`]: one method per native entry point, returning a raw numeric
//!   [`Status`](status::Status) exactly as the platform reported it.  No
//!   status interpretation happens in this crate.
//! * [`NativeBuffer`]: a borrowed view of a block of memory allocated by the
//!   native subsystem.  The block is released when the owning box is
//!   dropped, so a caller borrows the bytes, copies out what it needs, and
//!   lets the owner free it on every exit path.
//! * [`RawNotification`]: the notification envelope delivered to a
//!   [`NotificationCallback`] on a thread owned by the native subsystem.  The
//!   payload slice is only valid for the duration of the callback.
//! * [`layout`], [`status`] and [`codes`]: the fixed record layouts, status
//!   codes and numeric constants of the native surface.
//!
//! ## Buffers
//!
//! A `Vec<u8>` is a valid [`NativeBuffer`], which is how synthetic
//! implementations of [`WlanApi`] hand out list blocks:
//!
//! ```
//! use wlan_sys::NativeBuffer;
//!
//! let block: Box<dyn NativeBuffer> = Box::new(vec![0u8; 8]);
//! assert_eq!(block.bytes().len(), 8);
//! ```
//!
//! ## Windows
//!
//! On Windows, [`Win32Wlan`] implements [`WlanApi`] on top of `winapi`'s
//! `wlanapi` bindings.  Lists returned by the native subsystem are wrapped in
//! a buffer that calls `WlanFreeMemory` on drop, and the notification
//! callback is a single stable trampoline per client handle.

pub mod codes;
pub mod layout;
pub mod status;

#[cfg(any(windows, test))]
mod slots;
#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub use crate::windows::Win32Wlan;

use std::sync::Arc;

use crate::status::Status;

/// Native GUID in its in-memory byte order (`Data1..Data3` little-endian,
/// `Data4` as-is).
pub type RawGuid = [u8; 16];

/// Opaque client session handle returned by the native open call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientHandle(usize);

impl ClientHandle {
    /// Wrap a raw handle value.
    pub const fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    /// The raw handle value.
    pub const fn as_raw(self) -> usize {
        self.0
    }
}

/// A block of memory owned by the native subsystem.
///
/// Implementations release the memory when dropped.  The slice returned by
/// [`NativeBuffer::bytes`] must cover every byte the block legitimately
/// contains (header, records and any trailing variable-length data).
pub trait NativeBuffer: Send {
    fn bytes(&self) -> &[u8];
}

impl NativeBuffer for Vec<u8> {
    fn bytes(&self) -> &[u8] {
        self
    }
}

/// An owned native block.
pub type OwnedBuffer = Box<dyn NativeBuffer>;

/// Notification envelope as delivered by the native subsystem.
#[derive(Debug, Clone, Copy)]
pub struct RawNotification<'a> {
    pub source: u32,
    pub code: u32,
    pub interface_guid: RawGuid,
    /// Secondary payload; invalid once the callback returns.
    pub payload: &'a [u8],
}

/// Callback installed through [`WlanApi::register_notification`].
///
/// It runs on a thread owned by the native subsystem, possibly concurrently
/// with itself, and must not block.
pub type NotificationCallback = Arc<dyn Fn(&RawNotification<'_>) + Send + Sync>;

/// Profile document as returned by the native profile read call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawProfile {
    pub xml: String,
    pub flags: u32,
}

/// Arguments of the native connect call.
#[derive(Debug, Clone, Copy)]
pub struct ConnectParameters<'a> {
    pub mode: u32,
    pub profile: Option<&'a str>,
    pub ssid: Option<&'a [u8]>,
    pub bss_type: u32,
    pub flags: u32,
}

/// Text lookups for numeric codes.
pub trait StatusText {
    /// System message text for a status code.
    fn status_message(&self, status: Status) -> String {
        std::io::Error::from_raw_os_error(status as i32).to_string()
    }

    /// Text describing a Native Wifi reason code, if the platform knows it.
    fn reason_text(&self, _reason: u32) -> Option<String> {
        None
    }
}

/// One method per native entry point.
///
/// List-returning calls hand back the native block unmodified; decoding is
/// the caller's concern.  Every method returns the raw status reported by
/// the platform.
pub trait WlanApi: StatusText + Send + Sync {
    fn open_handle(&self) -> Result<ClientHandle, Status>;

    fn close_handle(&self, client: ClientHandle) -> Status;

    fn enum_interfaces(&self, client: ClientHandle) -> Result<OwnedBuffer, Status>;

    fn get_available_network_list(
        &self,
        client: ClientHandle,
        interface: &RawGuid,
        flags: u32,
    ) -> Result<OwnedBuffer, Status>;

    /// `ssid == None` asks for every BSS regardless of `bss_type` and
    /// `security_enabled`.
    fn get_network_bss_list(
        &self,
        client: ClientHandle,
        interface: &RawGuid,
        ssid: Option<&[u8]>,
        bss_type: u32,
        security_enabled: bool,
    ) -> Result<OwnedBuffer, Status>;

    fn query_interface(
        &self,
        client: ClientHandle,
        interface: &RawGuid,
        opcode: u32,
    ) -> Result<OwnedBuffer, Status>;

    fn set_interface(
        &self,
        client: ClientHandle,
        interface: &RawGuid,
        opcode: u32,
        data: &[u8],
    ) -> Status;

    fn get_profile_list(
        &self,
        client: ClientHandle,
        interface: &RawGuid,
    ) -> Result<OwnedBuffer, Status>;

    fn get_profile(
        &self,
        client: ClientHandle,
        interface: &RawGuid,
        name: &str,
    ) -> Result<RawProfile, Status>;

    /// Returns the status and the reason code the platform gave for
    /// rejecting the document (zero when accepted).
    fn set_profile(
        &self,
        client: ClientHandle,
        interface: &RawGuid,
        flags: u32,
        xml: &str,
        overwrite: bool,
    ) -> (Status, u32);

    fn set_profile_position(
        &self,
        client: ClientHandle,
        interface: &RawGuid,
        name: &str,
        position: u32,
    ) -> Status;

    fn rename_profile(
        &self,
        client: ClientHandle,
        interface: &RawGuid,
        old_name: &str,
        new_name: &str,
    ) -> Status;

    fn delete_profile(&self, client: ClientHandle, interface: &RawGuid, name: &str) -> Status;

    fn connect(
        &self,
        client: ClientHandle,
        interface: &RawGuid,
        parameters: &ConnectParameters<'_>,
    ) -> Status;

    fn disconnect(&self, client: ClientHandle, interface: &RawGuid) -> Status;

    fn scan(&self, client: ClientHandle, interface: &RawGuid, ssid: Option<&[u8]>) -> Status;

    /// Install `callback` for `sources`, replacing any previous callback.
    /// `sources == 0` with `None` tears delivery down.
    fn register_notification(
        &self,
        client: ClientHandle,
        sources: u32,
        callback: Option<NotificationCallback>,
    ) -> Status;
}
