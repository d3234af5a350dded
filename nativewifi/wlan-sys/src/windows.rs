use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;

use winapi::shared::guiddef::GUID;
use winapi::shared::minwindef::{DWORD, FALSE, TRUE};
use winapi::shared::wlantypes::{DOT11_SSID, DOT11_SSID_MAX_LENGTH};
use winapi::um::winnt::{HANDLE, PVOID};
use winapi::um::wlanapi::{
    WlanCloseHandle, WlanConnect, WlanDeleteProfile, WlanDisconnect, WlanEnumInterfaces,
    WlanFreeMemory, WlanGetAvailableNetworkList, WlanGetNetworkBssList, WlanGetProfile,
    WlanGetProfileList, WlanOpenHandle, WlanQueryInterface, WlanReasonCodeToString,
    WlanRegisterNotification, WlanRenameProfile, WlanScan, WlanSetInterface, WlanSetProfile,
    WlanSetProfilePosition, PWLAN_NOTIFICATION_DATA, WLAN_CONNECTION_PARAMETERS,
};

use crate::codes::{self, source};
use crate::layout::{self, ListLayout};
use crate::slots::{CallbackSlot, CallbackSlots};
use crate::status::{Status, ERROR_SUCCESS};
use crate::{
    ClientHandle, ConnectParameters, NativeBuffer, NotificationCallback, OwnedBuffer, RawGuid,
    RawNotification, RawProfile, StatusText, WlanApi,
};

/// Memory returned by a native call; released with `WlanFreeMemory`.
struct WlanMemory {
    ptr: *mut u8,
    len: usize,
}

// The block is exclusively owned and never aliased once handed out.
unsafe impl Send for WlanMemory {}

impl NativeBuffer for WlanMemory {
    fn bytes(&self) -> &[u8] {
        if self.ptr.is_null() || self.len == 0 {
            return &[];
        }
        unsafe { std::slice::from_raw_parts(self.ptr, self.len) }
    }
}

impl Drop for WlanMemory {
    fn drop(&mut self) {
        if !self.ptr.is_null() {
            unsafe { WlanFreeMemory(self.ptr as PVOID) };
        }
    }
}

impl WlanMemory {
    /// Adopt a counted list block, sizing the view from its header.
    unsafe fn counted(ptr: *mut u8, list: ListLayout) -> Self {
        if ptr.is_null() {
            return Self { ptr, len: 0 };
        }
        let count = ptr::read_unaligned(ptr.add(list.count_offset) as *const u32) as usize;
        let count = list.capacity.map_or(count, |cap| count.min(cap));
        let mut len = list.span(count);
        if list == layout::BSS_LIST {
            // IE blobs trail the entries; the header carries the full size.
            let total =
                ptr::read_unaligned(ptr.add(layout::BSS_LIST_TOTAL_SIZE_OFFSET) as *const u32);
            len = len.max(total as usize);
        }
        Self { ptr, len }
    }
}

unsafe extern "system" fn trampoline(data: PWLAN_NOTIFICATION_DATA, context: PVOID) {
    if data.is_null() || context.is_null() {
        return;
    }
    let slot = &*(context as *const CallbackSlot);
    let data = &*data;
    let payload: &[u8] = if data.pData.is_null() || data.dwDataSize == 0 {
        &[]
    } else {
        std::slice::from_raw_parts(data.pData as *const u8, data.dwDataSize as usize)
    };
    let raw = RawNotification {
        source: data.NotificationSource,
        code: data.NotificationCode,
        interface_guid: guid_to_bytes(&data.InterfaceGuid),
        payload,
    };
    if let Some(callback) = slot.callback() {
        // Unwinding across the native frame is not allowed.
        if catch_unwind(AssertUnwindSafe(|| callback(&raw))).is_err() {
            tracing::warn!(
                source = raw.source,
                code = raw.code,
                "notification callback panicked"
            );
        }
    }
}

fn guid_to_bytes(guid: &GUID) -> RawGuid {
    let mut out = [0u8; 16];
    out[0..4].copy_from_slice(&guid.Data1.to_le_bytes());
    out[4..6].copy_from_slice(&guid.Data2.to_le_bytes());
    out[6..8].copy_from_slice(&guid.Data3.to_le_bytes());
    out[8..16].copy_from_slice(&guid.Data4);
    out
}

fn bytes_to_guid(bytes: &RawGuid) -> GUID {
    let mut data4 = [0u8; 8];
    data4.copy_from_slice(&bytes[8..16]);
    GUID {
        Data1: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
        Data2: u16::from_le_bytes([bytes[4], bytes[5]]),
        Data3: u16::from_le_bytes([bytes[6], bytes[7]]),
        Data4: data4,
    }
}

fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

unsafe fn wide_ptr_to_string(ptr: *const u16) -> String {
    if ptr.is_null() {
        return String::new();
    }
    let mut len = 0;
    while *ptr.add(len) != 0 {
        len += 1;
    }
    String::from_utf16_lossy(std::slice::from_raw_parts(ptr, len))
}

fn to_ssid(bytes: &[u8]) -> DOT11_SSID {
    let len = bytes.len().min(DOT11_SSID_MAX_LENGTH as usize);
    let mut ssid = DOT11_SSID {
        uSSIDLength: len as u32,
        ucSSID: [0; DOT11_SSID_MAX_LENGTH as usize],
    };
    ssid.ucSSID[..len].copy_from_slice(&bytes[..len]);
    ssid
}

fn handle(client: ClientHandle) -> HANDLE {
    client.as_raw() as HANDLE
}

/// [`WlanApi`] over `wlanapi.dll`.
#[derive(Default)]
pub struct Win32Wlan {
    slots: CallbackSlots,
}

impl Win32Wlan {
    pub fn new() -> Self {
        Self::default()
    }

    fn list(
        &self,
        list: ListLayout,
        call: impl FnOnce(*mut *mut u8) -> DWORD,
    ) -> Result<OwnedBuffer, Status> {
        let mut ptr: *mut u8 = ptr::null_mut();
        let status = call(&mut ptr);
        let block = unsafe { WlanMemory::counted(ptr, list) };
        if status != ERROR_SUCCESS {
            return Err(status);
        }
        Ok(Box::new(block))
    }
}

impl StatusText for Win32Wlan {
    fn reason_text(&self, reason: u32) -> Option<String> {
        let mut buffer = [0u16; 1024];
        let status = unsafe {
            WlanReasonCodeToString(
                reason,
                buffer.len() as DWORD,
                buffer.as_mut_ptr(),
                ptr::null_mut(),
            )
        };
        if status != ERROR_SUCCESS {
            return None;
        }
        let len = buffer.iter().position(|&c| c == 0).unwrap_or(buffer.len());
        Some(String::from_utf16_lossy(&buffer[..len]))
    }
}

impl WlanApi for Win32Wlan {
    fn open_handle(&self) -> Result<ClientHandle, Status> {
        let mut negotiated: DWORD = 0;
        let mut raw: HANDLE = ptr::null_mut();
        let status = unsafe {
            WlanOpenHandle(
                codes::CLIENT_VERSION,
                ptr::null_mut(),
                &mut negotiated,
                &mut raw,
            )
        };
        if status != ERROR_SUCCESS {
            return Err(status);
        }
        tracing::trace!(negotiated, "opened native wifi session");
        Ok(ClientHandle::from_raw(raw as usize))
    }

    fn close_handle(&self, client: ClientHandle) -> Status {
        let status = unsafe { WlanCloseHandle(handle(client), ptr::null_mut()) };
        // Closing blocks until in-flight callbacks return, so the slot is
        // no longer reachable from the native side.
        self.slots.remove(client);
        status
    }

    fn enum_interfaces(&self, client: ClientHandle) -> Result<OwnedBuffer, Status> {
        self.list(layout::INTERFACE_LIST, |out| unsafe {
            WlanEnumInterfaces(handle(client), ptr::null_mut(), out.cast())
        })
    }

    fn get_available_network_list(
        &self,
        client: ClientHandle,
        interface: &RawGuid,
        flags: u32,
    ) -> Result<OwnedBuffer, Status> {
        let guid = bytes_to_guid(interface);
        self.list(layout::AVAILABLE_NETWORK_LIST, |out| unsafe {
            WlanGetAvailableNetworkList(
                handle(client),
                &guid,
                flags,
                ptr::null_mut(),
                out.cast(),
            )
        })
    }

    fn get_network_bss_list(
        &self,
        client: ClientHandle,
        interface: &RawGuid,
        ssid: Option<&[u8]>,
        bss_type: u32,
        security_enabled: bool,
    ) -> Result<OwnedBuffer, Status> {
        let guid = bytes_to_guid(interface);
        let ssid = ssid.map(to_ssid);
        let ssid_ptr = ssid.as_ref().map_or(ptr::null(), |s| s as *const DOT11_SSID);
        let bss_type = if ssid.is_some() {
            bss_type
        } else {
            codes::bss_type::ANY
        };
        self.list(layout::BSS_LIST, |out| unsafe {
            WlanGetNetworkBssList(
                handle(client),
                &guid,
                ssid_ptr,
                bss_type as _,
                if security_enabled { TRUE } else { FALSE },
                ptr::null_mut(),
                out.cast(),
            )
        })
    }

    fn query_interface(
        &self,
        client: ClientHandle,
        interface: &RawGuid,
        opcode: u32,
    ) -> Result<OwnedBuffer, Status> {
        let guid = bytes_to_guid(interface);
        let mut size: DWORD = 0;
        let mut data: PVOID = ptr::null_mut();
        let status = unsafe {
            WlanQueryInterface(
                handle(client),
                &guid,
                opcode as _,
                ptr::null_mut(),
                &mut size,
                &mut data,
                ptr::null_mut(),
            )
        };
        let block = WlanMemory {
            ptr: data as *mut u8,
            len: size as usize,
        };
        if status != ERROR_SUCCESS {
            return Err(status);
        }
        Ok(Box::new(block))
    }

    fn set_interface(
        &self,
        client: ClientHandle,
        interface: &RawGuid,
        opcode: u32,
        data: &[u8],
    ) -> Status {
        let guid = bytes_to_guid(interface);
        unsafe {
            WlanSetInterface(
                handle(client),
                &guid,
                opcode as _,
                data.len() as DWORD,
                data.as_ptr() as *const _,
                ptr::null_mut(),
            )
        }
    }

    fn get_profile_list(
        &self,
        client: ClientHandle,
        interface: &RawGuid,
    ) -> Result<OwnedBuffer, Status> {
        let guid = bytes_to_guid(interface);
        self.list(layout::PROFILE_INFO_LIST, |out| unsafe {
            WlanGetProfileList(
                handle(client),
                &guid,
                ptr::null_mut(),
                out.cast(),
            )
        })
    }

    fn get_profile(
        &self,
        client: ClientHandle,
        interface: &RawGuid,
        name: &str,
    ) -> Result<RawProfile, Status> {
        let guid = bytes_to_guid(interface);
        let name = wide(name);
        let mut xml: *mut u16 = ptr::null_mut();
        let mut flags: DWORD = 0;
        let mut access: DWORD = 0;
        let status = unsafe {
            WlanGetProfile(
                handle(client),
                &guid,
                name.as_ptr(),
                ptr::null_mut(),
                &mut xml,
                &mut flags,
                &mut access,
            )
        };
        let text = unsafe { wide_ptr_to_string(xml) };
        if !xml.is_null() {
            unsafe { WlanFreeMemory(xml as PVOID) };
        }
        if status != ERROR_SUCCESS {
            return Err(status);
        }
        Ok(RawProfile { xml: text, flags })
    }

    fn set_profile(
        &self,
        client: ClientHandle,
        interface: &RawGuid,
        flags: u32,
        xml: &str,
        overwrite: bool,
    ) -> (Status, u32) {
        let guid = bytes_to_guid(interface);
        let xml = wide(xml);
        let mut reason: DWORD = 0;
        let status = unsafe {
            WlanSetProfile(
                handle(client),
                &guid,
                flags,
                xml.as_ptr(),
                ptr::null(),
                if overwrite { TRUE } else { FALSE },
                ptr::null_mut(),
                &mut reason,
            )
        };
        (status, reason)
    }

    fn set_profile_position(
        &self,
        client: ClientHandle,
        interface: &RawGuid,
        name: &str,
        position: u32,
    ) -> Status {
        let guid = bytes_to_guid(interface);
        let name = wide(name);
        unsafe {
            WlanSetProfilePosition(
                handle(client),
                &guid,
                name.as_ptr(),
                position,
                ptr::null_mut(),
            )
        }
    }

    fn rename_profile(
        &self,
        client: ClientHandle,
        interface: &RawGuid,
        old_name: &str,
        new_name: &str,
    ) -> Status {
        let guid = bytes_to_guid(interface);
        let old_name = wide(old_name);
        let new_name = wide(new_name);
        unsafe {
            WlanRenameProfile(
                handle(client),
                &guid,
                old_name.as_ptr(),
                new_name.as_ptr(),
                ptr::null_mut(),
            )
        }
    }

    fn delete_profile(&self, client: ClientHandle, interface: &RawGuid, name: &str) -> Status {
        let guid = bytes_to_guid(interface);
        let name = wide(name);
        unsafe { WlanDeleteProfile(handle(client), &guid, name.as_ptr(), ptr::null_mut()) }
    }

    fn connect(
        &self,
        client: ClientHandle,
        interface: &RawGuid,
        parameters: &ConnectParameters<'_>,
    ) -> Status {
        let guid = bytes_to_guid(interface);
        let profile = parameters.profile.map(wide);
        let mut ssid = parameters.ssid.map(to_ssid);
        let native = WLAN_CONNECTION_PARAMETERS {
            wlanConnectionMode: parameters.mode as _,
            strProfile: profile.as_ref().map_or(ptr::null(), |p| p.as_ptr()),
            pDot11Ssid: ssid
                .as_mut()
                .map_or(ptr::null_mut(), |s| s as *mut DOT11_SSID),
            pDesiredBssidList: ptr::null_mut(),
            dot11BssType: parameters.bss_type as _,
            dwFlags: parameters.flags,
        };
        unsafe { WlanConnect(handle(client), &guid, &native, ptr::null_mut()) }
    }

    fn disconnect(&self, client: ClientHandle, interface: &RawGuid) -> Status {
        let guid = bytes_to_guid(interface);
        unsafe { WlanDisconnect(handle(client), &guid, ptr::null_mut()) }
    }

    fn scan(&self, client: ClientHandle, interface: &RawGuid, ssid: Option<&[u8]>) -> Status {
        let guid = bytes_to_guid(interface);
        let ssid = ssid.map(to_ssid);
        let ssid_ptr = ssid.as_ref().map_or(ptr::null(), |s| s as *const DOT11_SSID);
        unsafe {
            WlanScan(
                handle(client),
                &guid,
                ssid_ptr,
                ptr::null(),
                ptr::null_mut(),
            )
        }
    }

    fn register_notification(
        &self,
        client: ClientHandle,
        sources: u32,
        callback: Option<NotificationCallback>,
    ) -> Status {
        let mut previous: DWORD = 0;
        match callback {
            Some(callback) if sources != source::NONE => {
                let context = self.slots.install(client, callback) as PVOID;
                unsafe {
                    WlanRegisterNotification(
                        handle(client),
                        sources,
                        TRUE,
                        Some(trampoline),
                        context,
                        ptr::null_mut(),
                        &mut previous,
                    )
                }
            }
            _ => {
                let status = unsafe {
                    WlanRegisterNotification(
                        handle(client),
                        source::NONE,
                        TRUE,
                        None,
                        ptr::null_mut(),
                        ptr::null_mut(),
                        &mut previous,
                    )
                };
                // The slot stays allocated: a delivery may still be in flight.
                self.slots.clear(client);
                status
            }
        }
    }
}
