//! Numeric constants of the native surface: notification sources and codes,
//! interface opcodes, and the flag words passed to list and profile calls.

/// Client version requested when opening a session.
pub const CLIENT_VERSION: u32 = 2;

pub mod source {
    pub const NONE: u32 = 0;
    pub const ONEX: u32 = 0x0000_0004;
    pub const ACM: u32 = 0x0000_0008;
    pub const MSM: u32 = 0x0000_0010;
    pub const SECURITY: u32 = 0x0000_0020;
    pub const IHV: u32 = 0x0000_0040;
    pub const HNWK: u32 = 0x0000_0080;
    pub const ALL: u32 = 0x0000_ffff;
}

/// Auto configuration module notification codes.
pub mod acm {
    pub const AUTOCONF_ENABLED: u32 = 1;
    pub const AUTOCONF_DISABLED: u32 = 2;
    pub const BACKGROUND_SCAN_ENABLED: u32 = 3;
    pub const BACKGROUND_SCAN_DISABLED: u32 = 4;
    pub const BSS_TYPE_CHANGE: u32 = 5;
    pub const POWER_SETTING_CHANGE: u32 = 6;
    pub const SCAN_COMPLETE: u32 = 7;
    pub const SCAN_FAIL: u32 = 8;
    pub const CONNECTION_START: u32 = 9;
    pub const CONNECTION_COMPLETE: u32 = 10;
    pub const CONNECTION_ATTEMPT_FAIL: u32 = 11;
    pub const FILTER_LIST_CHANGE: u32 = 12;
    pub const INTERFACE_ARRIVAL: u32 = 13;
    pub const INTERFACE_REMOVAL: u32 = 14;
    pub const PROFILE_CHANGE: u32 = 15;
    pub const PROFILE_NAME_CHANGE: u32 = 16;
    pub const PROFILES_EXHAUSTED: u32 = 17;
    pub const NETWORK_NOT_AVAILABLE: u32 = 18;
    pub const NETWORK_AVAILABLE: u32 = 19;
    pub const DISCONNECTING: u32 = 20;
    pub const DISCONNECTED: u32 = 21;
    pub const ADHOC_NETWORK_STATE_CHANGE: u32 = 22;
    pub const PROFILE_UNBLOCKED: u32 = 23;
    pub const SCREEN_POWER_CHANGE: u32 = 24;
    pub const PROFILE_BLOCKED: u32 = 25;
    pub const SCAN_LIST_REFRESH: u32 = 26;
    pub const OPERATIONAL_STATE_CHANGE: u32 = 27;
}

/// Media specific module notification codes.
pub mod msm {
    pub const ASSOCIATING: u32 = 1;
    pub const ASSOCIATED: u32 = 2;
    pub const AUTHENTICATING: u32 = 3;
    pub const CONNECTED: u32 = 4;
    pub const ROAMING_START: u32 = 5;
    pub const ROAMING_END: u32 = 6;
    pub const RADIO_STATE_CHANGE: u32 = 7;
    pub const SIGNAL_QUALITY_CHANGE: u32 = 8;
    pub const DISASSOCIATING: u32 = 9;
    pub const DISCONNECTED: u32 = 10;
    pub const PEER_JOIN: u32 = 11;
    pub const PEER_LEAVE: u32 = 12;
    pub const ADAPTER_REMOVAL: u32 = 13;
    pub const ADAPTER_OPERATION_MODE_CHANGE: u32 = 14;
    pub const LINK_DEGRADED: u32 = 15;
    pub const LINK_IMPROVED: u32 = 16;
}

/// Interface parameter opcodes for query/set calls.
pub mod opcode {
    pub const AUTOCONF_ENABLED: u32 = 1;
    pub const BACKGROUND_SCAN_ENABLED: u32 = 2;
    pub const MEDIA_STREAMING_MODE: u32 = 3;
    pub const RADIO_STATE: u32 = 4;
    pub const BSS_TYPE: u32 = 5;
    pub const INTERFACE_STATE: u32 = 6;
    pub const CURRENT_CONNECTION: u32 = 7;
    pub const CHANNEL_NUMBER: u32 = 8;
    pub const CURRENT_OPERATION_MODE: u32 = 12;
    pub const STATISTICS: u32 = 0x1000_0101;
    pub const RSSI: u32 = 0x1000_0102;
}

/// Flags for the available network list call.
pub mod available_network_flags {
    pub const INCLUDE_ALL_ADHOC_PROFILES: u32 = 0x0000_0001;
    pub const INCLUDE_ALL_MANUAL_HIDDEN_PROFILES: u32 = 0x0000_0002;
}

/// Per-entry flags of an available network record.
pub mod available_network {
    pub const CONNECTED: u32 = 0x0000_0001;
    pub const HAS_PROFILE: u32 = 0x0000_0002;
}

/// Profile flags (both for profile info records and profile writes).
pub mod profile_flags {
    pub const ALL_USER: u32 = 0;
    pub const GROUP_POLICY: u32 = 0x0000_0001;
    pub const USER: u32 = 0x0000_0002;
}

/// Connection modes accepted by the connect call.
pub mod connection_mode {
    pub const PROFILE: u32 = 0;
    pub const TEMPORARY_PROFILE: u32 = 1;
    pub const DISCOVERY_SECURE: u32 = 2;
    pub const DISCOVERY_UNSECURE: u32 = 3;
    pub const AUTO: u32 = 4;
}

pub mod bss_type {
    pub const INFRASTRUCTURE: u32 = 1;
    pub const INDEPENDENT: u32 = 2;
    pub const ANY: u32 = 3;
}

pub mod radio_state {
    pub const UNKNOWN: u32 = 0;
    pub const ON: u32 = 1;
    pub const OFF: u32 = 2;
}

/// Reason code reported when an operation completed successfully.
pub const REASON_CODE_SUCCESS: u32 = 0;
