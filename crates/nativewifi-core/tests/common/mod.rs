//! Synthetic Native Wifi backend for integration tests.
//!
//! `FakeWlan` implements the native surface over in-memory interfaces and
//! hands out list blocks marshaled exactly like the platform does.  Native
//! actions (connect, disconnect, scan) can be configured to deliver
//! notifications synchronously from inside the call or later from a separate
//! thread, the way the platform delivers them.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use nativewifi_core::convert::{InterfaceState, RadioState};
use parking_lot::Mutex;
use uuid::Uuid;
use wlan_sys::codes::{acm, opcode, source};
use wlan_sys::layout::{self, NAME_CAPACITY};
use wlan_sys::status::{self, Status};
use wlan_sys::{
    ClientHandle, ConnectParameters, NotificationCallback, OwnedBuffer, RawGuid,
    RawNotification, RawProfile, StatusText, WlanApi,
};

// ---------------------------------------------------------------------------
// Fixture data
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct FakeNetwork {
    pub ssid: String,
    pub profile_name: String,
    pub signal_quality: u32,
    pub flags: u32,
}

#[derive(Debug, Clone)]
pub struct FakeBss {
    pub ssid: String,
    pub bssid: [u8; 6],
    pub link_quality: u32,
    pub rssi: i32,
    pub frequency_khz: u32,
}

#[derive(Debug, Clone)]
pub struct FakeProfile {
    pub name: String,
    pub xml: String,
    pub flags: u32,
}

#[derive(Debug, Clone)]
pub struct FakeInterface {
    pub id: Uuid,
    pub description: String,
    pub state: InterfaceState,
    pub networks: Vec<FakeNetwork>,
    pub bss: Vec<FakeBss>,
    /// Profile name of the current connection.
    pub connection: Option<String>,
    pub profiles: Vec<FakeProfile>,
    pub auto_config: bool,
    /// Software and hardware switch per PHY.
    pub radio: Vec<(RadioState, RadioState)>,
}

impl FakeInterface {
    pub fn new(n: u128, description: &str) -> Self {
        Self {
            id: Uuid::from_u128(n),
            description: description.to_string(),
            state: InterfaceState::Disconnected,
            networks: Vec::new(),
            bss: Vec::new(),
            connection: None,
            profiles: Vec::new(),
            auto_config: true,
            radio: vec![(RadioState::On, RadioState::On)],
        }
    }

    pub fn connected_to(mut self, profile: &str) -> Self {
        self.state = InterfaceState::Connected;
        self.connection = Some(profile.to_string());
        self
    }

    pub fn with_network(mut self, ssid: &str, profile_name: &str, signal_quality: u32, flags: u32) -> Self {
        self.networks.push(FakeNetwork {
            ssid: ssid.to_string(),
            profile_name: profile_name.to_string(),
            signal_quality,
            flags,
        });
        self
    }

    pub fn with_bss(mut self, ssid: &str, last_octet: u8, link_quality: u32, frequency_khz: u32) -> Self {
        self.bss.push(FakeBss {
            ssid: ssid.to_string(),
            bssid: [0x02, 0, 0, 0, 0, last_octet],
            link_quality,
            rssi: -100 + (link_quality as i32) / 2,
            frequency_khz,
        });
        self
    }

    pub fn with_profile(mut self, name: &str) -> Self {
        self.profiles.push(FakeProfile {
            name: name.to_string(),
            xml: profile_xml(name),
            flags: 0,
        });
        self
    }
}

pub fn profile_xml(name: &str) -> String {
    format!("<WLANProfile><name>{name}</name></WLANProfile>")
}

/// One notification to deliver.
#[derive(Debug, Clone)]
pub struct FakeEvent {
    pub source: u32,
    pub code: u32,
    pub interface: Uuid,
    pub payload: Vec<u8>,
}

impl FakeEvent {
    pub fn acm(code: u32, interface: Uuid) -> Self {
        Self {
            source: source::ACM,
            code,
            interface,
            payload: Vec::new(),
        }
    }

    pub fn connection(code: u32, interface: Uuid, profile: &str, reason: u32) -> Self {
        Self {
            payload: connection_payload(profile, reason),
            ..Self::acm(code, interface)
        }
    }

    pub fn scan_complete(interface: Uuid) -> Self {
        Self::acm(acm::SCAN_COMPLETE, interface)
    }

    pub fn scan_fail(interface: Uuid) -> Self {
        Self {
            payload: 0x0002_8001u32.to_le_bytes().to_vec(),
            ..Self::acm(acm::SCAN_FAIL, interface)
        }
    }
}

/// What a native action does besides returning its status.
#[derive(Debug, Clone, Default)]
pub enum Reaction {
    #[default]
    Silent,
    /// Deliver from inside the native call.
    Immediate(Vec<FakeEvent>),
    /// Deliver from another thread after a delay.
    Delayed(Duration, Vec<FakeEvent>),
}

// ---------------------------------------------------------------------------
// FakeWlan
// ---------------------------------------------------------------------------

#[derive(Default)]
struct State {
    next_handle: usize,
    open_handles: Vec<usize>,
    interfaces: Vec<FakeInterface>,
    callback: Option<NotificationCallback>,
    registered: u32,
    calls: Vec<String>,
    failures: HashMap<&'static str, Status>,
    scan_failures: HashMap<Uuid, Status>,
    connect_reaction: Reaction,
    disconnect_reaction: Reaction,
    scan_reactions: HashMap<Uuid, Reaction>,
}

#[derive(Default)]
pub struct FakeWlan {
    state: Mutex<State>,
}

impl FakeWlan {
    pub fn new(interfaces: Vec<FakeInterface>) -> Arc<Self> {
        let fake = Self::default();
        {
            let mut state = fake.state.lock();
            state.interfaces = interfaces;
            state.next_handle = 100;
        }
        Arc::new(fake)
    }

    /// Make every call of `operation` fail with `code`.
    pub fn fail(&self, operation: &'static str, code: Status) {
        self.state.lock().failures.insert(operation, code);
    }

    pub fn fail_scan(&self, interface: Uuid, code: Status) {
        self.state.lock().scan_failures.insert(interface, code);
    }

    pub fn on_connect(&self, reaction: Reaction) {
        self.state.lock().connect_reaction = reaction;
    }

    pub fn on_disconnect(&self, reaction: Reaction) {
        self.state.lock().disconnect_reaction = reaction;
    }

    pub fn on_scan(&self, interface: Uuid, reaction: Reaction) {
        self.state.lock().scan_reactions.insert(interface, reaction);
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().calls.clone()
    }

    pub fn count_calls(&self, prefix: &str) -> usize {
        self.state
            .lock()
            .calls
            .iter()
            .filter(|call| call.starts_with(prefix))
            .count()
    }

    pub fn open_handles(&self) -> usize {
        self.state.lock().open_handles.len()
    }

    pub fn registered_sources(&self) -> u32 {
        self.state.lock().registered
    }

    pub fn has_callback(&self) -> bool {
        self.state.lock().callback.is_some()
    }

    pub fn interface(&self, id: Uuid) -> Option<FakeInterface> {
        self.state.lock().interfaces.iter().find(|i| i.id == id).cloned()
    }

    /// Deliver notifications now, on the calling thread.
    pub fn emit(&self, events: &[FakeEvent]) {
        let callback = self.state.lock().callback.clone();
        if let Some(callback) = callback {
            deliver(&callback, events);
        }
    }

    fn react(&self, reaction: Reaction) {
        let callback = self.state.lock().callback.clone();
        let Some(callback) = callback else {
            return;
        };
        match reaction {
            Reaction::Silent => {}
            Reaction::Immediate(events) => deliver(&callback, &events),
            Reaction::Delayed(delay, events) => {
                std::thread::spawn(move || {
                    std::thread::sleep(delay);
                    deliver(&callback, &events);
                });
            }
        }
    }

    fn record(&self, call: String) -> Option<Status> {
        let mut state = self.state.lock();
        let name = call.split(':').next().unwrap_or_default().to_string();
        state.calls.push(call);
        state.failures.get(name.as_str()).copied()
    }

    fn with_interface<T>(
        &self,
        interface: &RawGuid,
        f: impl FnOnce(&mut FakeInterface) -> Result<T, Status>,
    ) -> Result<T, Status> {
        let id = Uuid::from_bytes_le(*interface);
        let mut state = self.state.lock();
        let found = state
            .interfaces
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(status::ERROR_NOT_FOUND)?;
        f(found)
    }
}

fn deliver(callback: &NotificationCallback, events: &[FakeEvent]) {
    for event in events {
        callback(&RawNotification {
            source: event.source,
            code: event.code,
            interface_guid: event.interface.to_bytes_le(),
            payload: &event.payload,
        });
    }
}

fn status_of(result: Result<(), Status>) -> Status {
    result.err().unwrap_or(status::ERROR_SUCCESS)
}

impl StatusText for FakeWlan {
    fn status_message(&self, code: Status) -> String {
        format!("status {code}")
    }

    fn reason_text(&self, reason: u32) -> Option<String> {
        Some(format!("reason {reason}"))
    }
}

impl WlanApi for FakeWlan {
    fn open_handle(&self) -> Result<ClientHandle, Status> {
        if let Some(code) = self.record("open".to_string()) {
            return Err(code);
        }
        let mut state = self.state.lock();
        state.next_handle += 1;
        let raw = state.next_handle;
        state.open_handles.push(raw);
        Ok(ClientHandle::from_raw(raw))
    }

    fn close_handle(&self, client: ClientHandle) -> Status {
        self.record(format!("close:{}", client.as_raw()));
        let mut state = self.state.lock();
        let before = state.open_handles.len();
        state.open_handles.retain(|h| *h != client.as_raw());
        if state.open_handles.len() == before {
            return status::ERROR_INVALID_HANDLE;
        }
        state.callback = None;
        state.registered = 0;
        status::ERROR_SUCCESS
    }

    fn enum_interfaces(&self, _client: ClientHandle) -> Result<OwnedBuffer, Status> {
        if let Some(code) = self.record("enum_interfaces".to_string()) {
            return Err(code);
        }
        let state = self.state.lock();
        Ok(Box::new(interface_list(&state.interfaces)))
    }

    fn get_available_network_list(
        &self,
        _client: ClientHandle,
        interface: &RawGuid,
        _flags: u32,
    ) -> Result<OwnedBuffer, Status> {
        if let Some(code) = self.record(format!("available:{}", Uuid::from_bytes_le(*interface))) {
            return Err(code);
        }
        self.with_interface(interface, |i| Ok(Box::new(network_list(&i.networks)) as OwnedBuffer))
    }

    fn get_network_bss_list(
        &self,
        _client: ClientHandle,
        interface: &RawGuid,
        ssid: Option<&[u8]>,
        _bss_type: u32,
        _security_enabled: bool,
    ) -> Result<OwnedBuffer, Status> {
        if let Some(code) = self.record(format!("bss:{}", Uuid::from_bytes_le(*interface))) {
            return Err(code);
        }
        self.with_interface(interface, |i| {
            let entries: Vec<FakeBss> = i
                .bss
                .iter()
                .filter(|b| ssid.is_none_or(|s| b.ssid.as_bytes() == s))
                .cloned()
                .collect();
            Ok(Box::new(bss_list(&entries)) as OwnedBuffer)
        })
    }

    fn query_interface(
        &self,
        _client: ClientHandle,
        interface: &RawGuid,
        code: u32,
    ) -> Result<OwnedBuffer, Status> {
        if let Some(failure) =
            self.record(format!("query:{}:{code}", Uuid::from_bytes_le(*interface)))
        {
            return Err(failure);
        }
        self.with_interface(interface, |i| {
            let block = match code {
                opcode::CURRENT_CONNECTION => {
                    let profile = i.connection.as_deref().ok_or(status::ERROR_INVALID_STATE)?;
                    let ssid = i
                        .networks
                        .iter()
                        .find(|n| n.profile_name == profile)
                        .map_or_else(|| profile.to_string(), |n| n.ssid.clone());
                    connection_attributes(profile, &ssid)
                }
                opcode::RSSI => {
                    if i.connection.is_none() {
                        return Err(status::ERROR_INVALID_STATE);
                    }
                    (-57i32).to_le_bytes().to_vec()
                }
                opcode::AUTOCONF_ENABLED => u32::from(i.auto_config).to_le_bytes().to_vec(),
                opcode::RADIO_STATE => radio_list(&i.radio),
                _ => return Err(status::ERROR_NOT_SUPPORTED),
            };
            Ok(Box::new(block) as OwnedBuffer)
        })
    }

    fn set_interface(
        &self,
        _client: ClientHandle,
        interface: &RawGuid,
        code: u32,
        data: &[u8],
    ) -> Status {
        if let Some(failure) =
            self.record(format!("set_interface:{}:{code}", Uuid::from_bytes_le(*interface)))
        {
            return failure;
        }
        status_of(self.with_interface(interface, |i| {
            let word = |offset: usize| {
                data.get(offset..offset + 4)
                    .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
                    .ok_or(status::ERROR_INVALID_PARAMETER)
            };
            match code {
                opcode::AUTOCONF_ENABLED => i.auto_config = word(0)? != 0,
                opcode::RADIO_STATE => {
                    let software = RadioState::from_native(word(4)?);
                    for phy in &mut i.radio {
                        phy.0 = software;
                    }
                }
                _ => return Err(status::ERROR_NOT_SUPPORTED),
            }
            Ok(())
        }))
    }

    fn get_profile_list(&self, _client: ClientHandle, interface: &RawGuid) -> Result<OwnedBuffer, Status> {
        if let Some(code) = self.record(format!("profiles:{}", Uuid::from_bytes_le(*interface))) {
            return Err(code);
        }
        self.with_interface(interface, |i| Ok(Box::new(profile_list(&i.profiles)) as OwnedBuffer))
    }

    fn get_profile(
        &self,
        _client: ClientHandle,
        interface: &RawGuid,
        name: &str,
    ) -> Result<RawProfile, Status> {
        if let Some(code) = self.record(format!("get_profile:{name}")) {
            return Err(code);
        }
        self.with_interface(interface, |i| {
            i.profiles
                .iter()
                .find(|p| p.name == name)
                .map(|p| RawProfile {
                    xml: p.xml.clone(),
                    flags: p.flags,
                })
                .ok_or(status::ERROR_NOT_FOUND)
        })
    }

    fn set_profile(
        &self,
        _client: ClientHandle,
        interface: &RawGuid,
        flags: u32,
        xml: &str,
        overwrite: bool,
    ) -> (Status, u32) {
        let name = xml
            .split_once("<name>")
            .and_then(|(_, rest)| rest.split_once("</name>"))
            .map(|(name, _)| name.to_string());
        if let Some(code) = self.record(format!("set_profile:{}", name.as_deref().unwrap_or(""))) {
            return (code, 0);
        }
        let Some(name) = name else {
            return (status::ERROR_BAD_PROFILE, 524_303);
        };
        let result = self.with_interface(interface, |i| {
            match i.profiles.iter_mut().find(|p| p.name == name) {
                Some(_) if !overwrite => return Err(status::ERROR_ALREADY_EXISTS),
                Some(existing) => {
                    existing.xml = xml.to_string();
                    existing.flags = flags;
                }
                None => i.profiles.push(FakeProfile {
                    name,
                    xml: xml.to_string(),
                    flags,
                }),
            }
            Ok(())
        });
        match result {
            Ok(()) => (status::ERROR_SUCCESS, 0),
            Err(status::ERROR_ALREADY_EXISTS) => (status::ERROR_ALREADY_EXISTS, 524_289),
            Err(code) => (code, 0),
        }
    }

    fn set_profile_position(
        &self,
        _client: ClientHandle,
        interface: &RawGuid,
        name: &str,
        position: u32,
    ) -> Status {
        if let Some(code) = self.record(format!("set_profile_position:{name}:{position}")) {
            return code;
        }
        status_of(self.with_interface(interface, |i| {
            let index = i
                .profiles
                .iter()
                .position(|p| p.name == name)
                .ok_or(status::ERROR_NOT_FOUND)?;
            let position = position as usize;
            if position >= i.profiles.len() {
                return Err(status::ERROR_INVALID_PARAMETER);
            }
            let profile = i.profiles.remove(index);
            i.profiles.insert(position, profile);
            Ok(())
        }))
    }

    fn rename_profile(
        &self,
        _client: ClientHandle,
        interface: &RawGuid,
        old_name: &str,
        new_name: &str,
    ) -> Status {
        if let Some(code) = self.record(format!("rename_profile:{old_name}:{new_name}")) {
            return code;
        }
        status_of(self.with_interface(interface, |i| {
            let profile = i
                .profiles
                .iter_mut()
                .find(|p| p.name == old_name)
                .ok_or(status::ERROR_NOT_FOUND)?;
            profile.name = new_name.to_string();
            Ok(())
        }))
    }

    fn delete_profile(&self, _client: ClientHandle, interface: &RawGuid, name: &str) -> Status {
        if let Some(code) = self.record(format!("delete_profile:{name}")) {
            return code;
        }
        status_of(self.with_interface(interface, |i| {
            let before = i.profiles.len();
            i.profiles.retain(|p| p.name != name);
            if i.profiles.len() == before {
                return Err(status::ERROR_NOT_FOUND);
            }
            Ok(())
        }))
    }

    fn connect(
        &self,
        _client: ClientHandle,
        interface: &RawGuid,
        parameters: &ConnectParameters<'_>,
    ) -> Status {
        let id = Uuid::from_bytes_le(*interface);
        if let Some(code) = self.record(format!("connect:{id}:{}", parameters.profile.unwrap_or(""))) {
            return code;
        }
        if let Err(code) = self.with_interface(interface, |_| Ok(())) {
            return code;
        }
        let reaction = self.state.lock().connect_reaction.clone();
        self.react(reaction);
        status::ERROR_SUCCESS
    }

    fn disconnect(&self, _client: ClientHandle, interface: &RawGuid) -> Status {
        let id = Uuid::from_bytes_le(*interface);
        if let Some(code) = self.record(format!("disconnect:{id}")) {
            return code;
        }
        let connected = self.with_interface(interface, |i| Ok(i.connection.is_some()));
        match connected {
            Ok(true) => {}
            Ok(false) => return status::ERROR_INVALID_STATE,
            Err(code) => return code,
        }
        let reaction = self.state.lock().disconnect_reaction.clone();
        self.react(reaction);
        status::ERROR_SUCCESS
    }

    fn scan(&self, _client: ClientHandle, interface: &RawGuid, _ssid: Option<&[u8]>) -> Status {
        let id = Uuid::from_bytes_le(*interface);
        if let Some(code) = self.record(format!("scan:{id}")) {
            return code;
        }
        let (failure, reaction) = {
            let state = self.state.lock();
            (
                state.scan_failures.get(&id).copied(),
                state.scan_reactions.get(&id).cloned().unwrap_or_default(),
            )
        };
        if let Some(code) = failure {
            return code;
        }
        self.react(reaction);
        status::ERROR_SUCCESS
    }

    fn register_notification(
        &self,
        _client: ClientHandle,
        sources: u32,
        callback: Option<NotificationCallback>,
    ) -> Status {
        let call = if sources == source::NONE && callback.is_none() {
            "unregister".to_string()
        } else {
            format!("register:{sources}")
        };
        if let Some(code) = self.record(call) {
            return code;
        }
        let mut state = self.state.lock();
        state.registered = sources;
        state.callback = callback;
        status::ERROR_SUCCESS
    }
}

// ---------------------------------------------------------------------------
// Block builders
// ---------------------------------------------------------------------------

fn put_u32(buf: &mut [u8], offset: usize, value: u32) {
    buf[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

fn put_utf16(buf: &mut [u8], offset: usize, text: &str) {
    for (i, unit) in text.encode_utf16().take(NAME_CAPACITY - 1).enumerate() {
        buf[offset + i * 2..offset + i * 2 + 2].copy_from_slice(&unit.to_le_bytes());
    }
}

fn put_ssid(buf: &mut [u8], offset: usize, ssid: &[u8]) {
    let len = ssid.len().min(layout::SSID_CAPACITY);
    put_u32(buf, offset, len as u32);
    buf[offset + 4..offset + 4 + len].copy_from_slice(&ssid[..len]);
}

pub fn interface_list(interfaces: &[FakeInterface]) -> Vec<u8> {
    let list = layout::INTERFACE_LIST;
    let mut block = vec![0u8; list.span(interfaces.len())];
    put_u32(&mut block, list.count_offset, interfaces.len() as u32);
    for (i, interface) in interfaces.iter().enumerate() {
        let base = list.span(i);
        block[base..base + 16].copy_from_slice(&interface.id.to_bytes_le());
        put_utf16(&mut block, base + 16, &interface.description);
        put_u32(&mut block, base + 528, interface.state.to_native());
    }
    block
}

pub fn network_list(networks: &[FakeNetwork]) -> Vec<u8> {
    let list = layout::AVAILABLE_NETWORK_LIST;
    let mut block = vec![0u8; list.span(networks.len())];
    put_u32(&mut block, list.count_offset, networks.len() as u32);
    for (i, network) in networks.iter().enumerate() {
        let base = list.span(i);
        put_utf16(&mut block, base, &network.profile_name);
        put_ssid(&mut block, base + 512, network.ssid.as_bytes());
        put_u32(&mut block, base + 548, 1);
        put_u32(&mut block, base + 552, 1);
        put_u32(&mut block, base + 556, 1);
        put_u32(&mut block, base + 564, 1);
        put_u32(&mut block, base + 568, 7);
        put_u32(&mut block, base + 604, network.signal_quality);
        put_u32(&mut block, base + 608, 1);
        put_u32(&mut block, base + 612, 7);
        put_u32(&mut block, base + 616, 4);
        put_u32(&mut block, base + 620, network.flags);
    }
    block
}

pub fn bss_list(entries: &[FakeBss]) -> Vec<u8> {
    let list = layout::BSS_LIST;
    let mut block = vec![0u8; list.span(entries.len())];
    let total = block.len() as u32;
    put_u32(&mut block, layout::BSS_LIST_TOTAL_SIZE_OFFSET, total);
    put_u32(&mut block, list.count_offset, entries.len() as u32);
    for (i, entry) in entries.iter().enumerate() {
        let base = list.span(i);
        put_ssid(&mut block, base, entry.ssid.as_bytes());
        block[base + 40..base + 46].copy_from_slice(&entry.bssid);
        put_u32(&mut block, base + 48, 1);
        put_u32(&mut block, base + 52, 7);
        put_u32(&mut block, base + 56, entry.rssi as u32);
        put_u32(&mut block, base + 60, entry.link_quality);
        block[base + 64] = 1;
        block[base + 66..base + 68].copy_from_slice(&100u16.to_le_bytes());
        put_u32(&mut block, base + 92, entry.frequency_khz);
    }
    block
}

pub fn profile_list(profiles: &[FakeProfile]) -> Vec<u8> {
    let list = layout::PROFILE_INFO_LIST;
    let mut block = vec![0u8; list.span(profiles.len())];
    put_u32(&mut block, list.count_offset, profiles.len() as u32);
    for (i, profile) in profiles.iter().enumerate() {
        let base = list.span(i);
        put_utf16(&mut block, base, &profile.name);
        put_u32(&mut block, base + 512, profile.flags);
    }
    block
}

pub fn radio_list(phys: &[(RadioState, RadioState)]) -> Vec<u8> {
    let list = layout::RADIO_STATE_LIST;
    let mut block = vec![0u8; list.span(layout::MAX_PHY_RADIO_STATES)];
    put_u32(&mut block, list.count_offset, phys.len() as u32);
    for (i, (software, hardware)) in phys.iter().enumerate() {
        let base = list.span(i);
        put_u32(&mut block, base, i as u32);
        put_u32(&mut block, base + 4, software.to_native());
        put_u32(&mut block, base + 8, hardware.to_native());
    }
    block
}

pub fn connection_attributes(profile: &str, ssid: &str) -> Vec<u8> {
    let mut block = vec![0u8; layout::CONNECTION_ATTRIBUTES_SIZE];
    put_u32(&mut block, 0, InterfaceState::Connected.to_native());
    put_utf16(&mut block, 8, profile);
    put_ssid(&mut block, 520, ssid.as_bytes());
    put_u32(&mut block, 556, 1);
    block[560..566].copy_from_slice(&[0x02, 0, 0, 0, 0, 1]);
    put_u32(&mut block, 568, 7);
    put_u32(&mut block, 576, 80);
    put_u32(&mut block, 580, 144_000);
    put_u32(&mut block, 584, 144_000);
    put_u32(&mut block, 588, 1);
    put_u32(&mut block, 596, 7);
    put_u32(&mut block, 600, 4);
    block
}

pub fn connection_payload(profile: &str, reason: u32) -> Vec<u8> {
    let mut payload = vec![0u8; layout::CONNECTION_NOTIFICATION_SIZE];
    put_utf16(&mut payload, 4, profile);
    put_ssid(&mut payload, 516, profile.as_bytes());
    put_u32(&mut payload, 552, 1);
    put_u32(&mut payload, 556, 1);
    put_u32(&mut payload, 560, reason);
    payload
}
