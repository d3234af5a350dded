//! Public records.  Everything here is plain owned data.

use std::fmt;

use serde::{Serialize, Serializer};
use uuid::Uuid;
use wlan_sys::codes::available_network;
use wlan_sys::layout::SSID_CAPACITY;

use crate::channel::Channel;
use crate::convert::{
    AuthAlgorithm, BssType, CipherAlgorithm, ConnectionMode, InterfaceState, PhyType, ProfileType,
    RadioState,
};
use crate::error::{Error, Result};

/// SSID bytes (at most 32, not necessarily UTF-8).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NetworkIdentifier(Vec<u8>);

impl NetworkIdentifier {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        if bytes.len() > SSID_CAPACITY {
            return Err(Error::InvalidArgument(format!(
                "SSID is {} bytes, at most {SSID_CAPACITY} allowed",
                bytes.len()
            )));
        }
        Ok(Self(bytes))
    }

    /// Decoder side: the length was already clamped.
    pub(crate) fn from_decoded(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NetworkIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl Serialize for NetworkIdentifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MacAddress(pub [u8; 6]);

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

impl Serialize for MacAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceInfo {
    pub id: Uuid,
    pub description: String,
    pub state: InterfaceState,
}

impl InterfaceInfo {
    pub fn is_connected(&self) -> bool {
        self.state == InterfaceState::Connected
    }
}

/// One entry of an interface's available network list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailableNetworkEntry {
    pub profile_name: String,
    pub ssid: NetworkIdentifier,
    pub bss_type: BssType,
    pub bssid_count: u32,
    pub connectable: bool,
    pub not_connectable_reason: u32,
    pub phy_types: Vec<PhyType>,
    pub more_phy_types: bool,
    /// 0..=100
    pub signal_quality: u32,
    pub security_enabled: bool,
    pub auth: AuthAlgorithm,
    pub cipher: CipherAlgorithm,
    pub flags: u32,
}

impl AvailableNetworkEntry {
    pub fn is_connected(&self) -> bool {
        self.flags & available_network::CONNECTED != 0
    }

    pub fn has_profile(&self) -> bool {
        self.flags & available_network::HAS_PROFILE != 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailableNetwork {
    pub interface: InterfaceInfo,
    pub network: AvailableNetworkEntry,
}

/// One BSS entry as reported by the driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BssEntry {
    pub ssid: NetworkIdentifier,
    pub phy_id: u32,
    pub bssid: MacAddress,
    pub bss_type: BssType,
    pub phy_type: PhyType,
    /// dBm
    pub rssi: i32,
    /// 0..=100
    pub link_quality: u32,
    pub in_regulatory_domain: bool,
    pub beacon_period: u16,
    pub timestamp: u64,
    pub host_timestamp: u64,
    pub capability: u16,
    pub center_frequency_khz: u32,
    /// Rates in 0.5 Mbps units; the high bit marks basic rates.
    pub rates: Vec<u16>,
    /// Raw information elements.
    pub information_elements: Vec<u8>,
}

impl BssEntry {
    pub fn channel(&self) -> Option<Channel> {
        crate::channel::detect(self.center_frequency_khz)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BssNetwork {
    pub interface: InterfaceInfo,
    pub bss: BssEntry,
    pub channel: Option<Channel>,
}

/// An available network together with the BSS entries that carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailableNetworkGroup {
    pub interface: InterfaceInfo,
    pub network: AvailableNetworkEntry,
    pub bss_entries: Vec<BssEntry>,
    /// Highest link quality among `bss_entries` (0 when empty).
    pub link_quality: u32,
    /// Center frequency of the strongest entry.
    pub frequency_khz: Option<u32>,
    pub channel: Option<Channel>,
}

/// Filter for BSS enumeration.  Without an SSID every entry is returned and
/// the type and security settings are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BssFilter {
    pub ssid: Option<NetworkIdentifier>,
    pub bss_type: BssType,
    pub security_enabled: bool,
}

impl Default for BssFilter {
    fn default() -> Self {
        Self {
            ssid: None,
            bss_type: BssType::Any,
            security_enabled: false,
        }
    }
}

/// Attributes of the connection an interface currently holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentConnection {
    pub state: InterfaceState,
    pub mode: ConnectionMode,
    pub profile_name: String,
    pub ssid: NetworkIdentifier,
    pub bss_type: BssType,
    pub bssid: MacAddress,
    pub phy_type: PhyType,
    pub phy_index: u32,
    pub signal_quality: u32,
    /// kbps
    pub rx_rate: u32,
    /// kbps
    pub tx_rate: u32,
    pub security_enabled: bool,
    pub onex_enabled: bool,
    pub auth: AuthAlgorithm,
    pub cipher: CipherAlgorithm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceConnection {
    pub interface: InterfaceInfo,
    pub connection: Option<CurrentConnection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileInfoEntry {
    pub name: String,
    pub flags: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileInfo {
    pub interface: InterfaceInfo,
    pub name: String,
    pub profile_type: ProfileType,
    pub xml: String,
    /// Position in the interface's preference list.
    pub position: u32,
    pub is_connected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileDocument {
    pub name: String,
    pub profile_type: ProfileType,
    pub xml: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhyRadioState {
    pub phy_index: u32,
    pub software: RadioState,
    pub hardware: RadioState,
}

impl PhyRadioState {
    pub fn is_on(&self) -> bool {
        self.software == RadioState::On && self.hardware == RadioState::On
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadioInfo {
    pub interface_id: Uuid,
    pub phys: Vec<PhyRadioState>,
}

impl RadioInfo {
    /// On when at least one PHY has both switches on.
    pub fn is_on(&self) -> bool {
        self.phys.iter().any(PhyRadioState::is_on)
    }
}

/// Arguments of a connect request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectRequest {
    pub interface_id: Uuid,
    pub mode: ConnectionMode,
    pub profile_name: String,
    pub ssid: Option<NetworkIdentifier>,
    pub bss_type: BssType,
    pub flags: u32,
}

impl ConnectRequest {
    /// Connect using a stored profile.
    pub fn profile(interface_id: Uuid, profile_name: impl Into<String>) -> Self {
        Self {
            interface_id,
            mode: ConnectionMode::Profile,
            profile_name: profile_name.into(),
            ssid: None,
            bss_type: BssType::Infrastructure,
            flags: 0,
        }
    }

    #[must_use]
    pub const fn with_bss_type(mut self, bss_type: BssType) -> Self {
        self.bss_type = bss_type;
        self
    }
}
