//! Fixed marshaled layouts of the native records.
//!
//! Offsets are those of the x64 structures; every field is converted through
//! [`crate::convert`] as it is read.

use serde::Serialize;
use wlan_sys::layout::{self, MAX_INLINE_PHY_TYPES, NAME_CAPACITY, RATE_SET_CAPACITY};

use crate::convert::{
    AuthAlgorithm, BssType, CipherAlgorithm, ConnectionMode, InterfaceState, PhyType, RadioState,
};
use crate::decode::{DecodeError, NativeRecord, RecordReader};
use crate::model::{
    AvailableNetworkEntry, BssEntry, CurrentConnection, InterfaceInfo, MacAddress,
    NetworkIdentifier, PhyRadioState, ProfileInfoEntry,
};

impl NativeRecord for InterfaceInfo {
    const SIZE: usize = layout::INTERFACE_INFO_SIZE;

    fn decode(r: &RecordReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            id: r.guid(0)?,
            description: r.utf16(16, NAME_CAPACITY)?,
            state: InterfaceState::from_native(r.u32(528)?),
        })
    }
}

impl NativeRecord for AvailableNetworkEntry {
    const SIZE: usize = layout::AVAILABLE_NETWORK_SIZE;

    fn decode(r: &RecordReader<'_>) -> Result<Self, DecodeError> {
        let phy_count = r.u32(564)? as usize;
        Ok(Self {
            profile_name: r.utf16(0, NAME_CAPACITY)?,
            ssid: NetworkIdentifier::from_decoded(r.ssid(512)?),
            bss_type: BssType::from_native(r.u32(548)?),
            bssid_count: r.u32(552)?,
            connectable: r.bool32(556)?,
            not_connectable_reason: r.u32(560)?,
            phy_types: r
                .u32_array(568, phy_count, MAX_INLINE_PHY_TYPES)?
                .into_iter()
                .map(PhyType::from_native)
                .collect(),
            more_phy_types: r.bool32(600)?,
            signal_quality: r.u32(604)?,
            security_enabled: r.bool32(608)?,
            auth: AuthAlgorithm::from_native(r.u32(612)?),
            cipher: CipherAlgorithm::from_native(r.u32(616)?),
            flags: r.u32(620)?,
        })
    }
}

impl NativeRecord for BssEntry {
    const SIZE: usize = layout::BSS_ENTRY_SIZE;

    fn decode(r: &RecordReader<'_>) -> Result<Self, DecodeError> {
        let rate_count = r.u32(96)? as usize;
        // Offset is relative to the entry; the blob trails the entry array.
        let ie_offset = r.u32(352)? as usize;
        let ie_size = r.u32(356)? as usize;
        Ok(Self {
            ssid: NetworkIdentifier::from_decoded(r.ssid(0)?),
            phy_id: r.u32(36)?,
            bssid: MacAddress(r.mac(40)?),
            bss_type: BssType::from_native(r.u32(48)?),
            phy_type: PhyType::from_native(r.u32(52)?),
            rssi: r.i32(56)?,
            link_quality: r.u32(60)?,
            in_regulatory_domain: r.u8(64)? != 0,
            beacon_period: r.u16(66)?,
            timestamp: r.u64(72)?,
            host_timestamp: r.u64(80)?,
            capability: r.u16(88)?,
            center_frequency_khz: r.u32(92)?,
            rates: r.u16_array(100, rate_count, RATE_SET_CAPACITY)?,
            information_elements: if ie_offset == 0 {
                Vec::new()
            } else {
                r.trailing(ie_offset, ie_size)
            },
        })
    }
}

impl NativeRecord for ProfileInfoEntry {
    const SIZE: usize = layout::PROFILE_INFO_SIZE;

    fn decode(r: &RecordReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            name: r.utf16(0, NAME_CAPACITY)?,
            flags: r.u32(512)?,
        })
    }
}

impl NativeRecord for PhyRadioState {
    const SIZE: usize = layout::PHY_RADIO_STATE_SIZE;

    fn decode(r: &RecordReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            phy_index: r.u32(0)?,
            software: RadioState::from_native(r.u32(4)?),
            hardware: RadioState::from_native(r.u32(8)?),
        })
    }
}

impl PhyRadioState {
    /// Marshaled form used to set the radio state.
    pub fn encode(&self) -> [u8; layout::PHY_RADIO_STATE_SIZE] {
        let mut out = [0u8; layout::PHY_RADIO_STATE_SIZE];
        out[0..4].copy_from_slice(&self.phy_index.to_le_bytes());
        out[4..8].copy_from_slice(&self.software.to_native().to_le_bytes());
        out[8..12].copy_from_slice(&self.hardware.to_native().to_le_bytes());
        out
    }
}

impl NativeRecord for CurrentConnection {
    const SIZE: usize = layout::CONNECTION_ATTRIBUTES_SIZE;

    fn decode(r: &RecordReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            state: InterfaceState::from_native(r.u32(0)?),
            mode: ConnectionMode::from_native(r.u32(4)?),
            profile_name: r.utf16(8, NAME_CAPACITY)?,
            ssid: NetworkIdentifier::from_decoded(r.ssid(520)?),
            bss_type: BssType::from_native(r.u32(556)?),
            bssid: MacAddress(r.mac(560)?),
            phy_type: PhyType::from_native(r.u32(568)?),
            phy_index: r.u32(572)?,
            signal_quality: r.u32(576)?,
            rx_rate: r.u32(580)?,
            tx_rate: r.u32(584)?,
            security_enabled: r.bool32(588)?,
            onex_enabled: r.bool32(592)?,
            auth: AuthAlgorithm::from_native(r.u32(596)?),
            cipher: CipherAlgorithm::from_native(r.u32(600)?),
        })
    }
}

/// Payload of connection-related notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionNotification {
    pub mode: ConnectionMode,
    pub profile_name: String,
    pub ssid: NetworkIdentifier,
    pub bss_type: BssType,
    pub security_enabled: bool,
    /// Zero on success.
    pub reason_code: u32,
    pub flags: u32,
}

impl NativeRecord for ConnectionNotification {
    const SIZE: usize = layout::CONNECTION_NOTIFICATION_SIZE;

    fn decode(r: &RecordReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            mode: ConnectionMode::from_native(r.u32(0)?),
            profile_name: r.utf16(4, NAME_CAPACITY)?,
            ssid: NetworkIdentifier::from_decoded(r.ssid(516)?),
            bss_type: BssType::from_native(r.u32(552)?),
            security_enabled: r.bool32(556)?,
            reason_code: r.u32(560)?,
            flags: r.u32(564)?,
        })
    }
}
