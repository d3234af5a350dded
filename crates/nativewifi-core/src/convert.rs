//! Native code ↔ friendly value tables.
//!
//! Each enum keeps unknown codes in an `Other` variant, so a conversion
//! never fails and `to_native(from_native(x)) == x` for every `x`.

use serde::Serialize;
use wlan_sys::codes::{profile_flags, radio_state};

macro_rules! native_enum {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident = $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// Code without a friendly name.
            Other(u32),
        }

        impl $name {
            pub const fn from_native(value: u32) -> Self {
                match value {
                    $($value => Self::$variant,)+
                    other => Self::Other(other),
                }
            }

            pub const fn to_native(self) -> u32 {
                match self {
                    $(Self::$variant => $value,)+
                    Self::Other(value) => value,
                }
            }
        }
    };
}

native_enum! {
    /// Interface state.
    InterfaceState {
        NotReady = 0,
        Connected = 1,
        AdHocNetworkFormed = 2,
        Disconnecting = 3,
        Disconnected = 4,
        Associating = 5,
        Discovering = 6,
        Authenticating = 7,
    }
}

native_enum! {
    /// BSS network type.
    BssType {
        Infrastructure = 1,
        Independent = 2,
        Any = 3,
    }
}

native_enum! {
    /// 802.11 PHY type.
    PhyType {
        Unknown = 0,
        Fhss = 1,
        Dsss = 2,
        IrBaseband = 3,
        /// 802.11a
        Ofdm = 4,
        /// 802.11b
        HrDsss = 5,
        /// 802.11g
        Erp = 6,
        /// 802.11n
        Ht = 7,
        /// 802.11ac
        Vht = 8,
        /// 802.11ad
        Dmg = 9,
        /// 802.11ax
        He = 10,
        /// 802.11be
        Eht = 11,
    }
}

native_enum! {
    /// Authentication algorithm.
    AuthAlgorithm {
        Open = 1,
        SharedKey = 2,
        Wpa = 3,
        WpaPsk = 4,
        WpaNone = 5,
        Rsna = 6,
        RsnaPsk = 7,
        Wpa3Enterprise192 = 8,
        Wpa3Sae = 9,
        Owe = 10,
        Wpa3Enterprise = 11,
    }
}

native_enum! {
    /// Cipher algorithm.
    CipherAlgorithm {
        None = 0x00,
        Wep40 = 0x01,
        Tkip = 0x02,
        Ccmp = 0x04,
        Wep104 = 0x05,
        Bip = 0x06,
        Gcmp = 0x08,
        Gcmp256 = 0x09,
        Ccmp256 = 0x0a,
        WpaUseGroup = 0x100,
        Wep = 0x101,
    }
}

native_enum! {
    /// Connection mode.
    ConnectionMode {
        Profile = 0,
        TemporaryProfile = 1,
        DiscoverySecure = 2,
        DiscoveryUnsecure = 3,
        Auto = 4,
        Invalid = 5,
    }
}

/// Software or hardware radio switch position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RadioState {
    Unknown,
    On,
    Off,
}

impl RadioState {
    pub const fn from_native(value: u32) -> Self {
        match value {
            radio_state::ON => Self::On,
            radio_state::OFF => Self::Off,
            _ => Self::Unknown,
        }
    }

    pub const fn to_native(self) -> u32 {
        match self {
            Self::Unknown => radio_state::UNKNOWN,
            Self::On => radio_state::ON,
            Self::Off => radio_state::OFF,
        }
    }
}

/// Profile scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProfileType {
    AllUser,
    GroupPolicy,
    PerUser,
}

impl ProfileType {
    pub const fn from_flags(flags: u32) -> Self {
        if flags & profile_flags::GROUP_POLICY != 0 {
            Self::GroupPolicy
        } else if flags & profile_flags::USER != 0 {
            Self::PerUser
        } else {
            Self::AllUser
        }
    }

    pub const fn to_flags(self) -> u32 {
        match self {
            Self::AllUser => profile_flags::ALL_USER,
            Self::GroupPolicy => profile_flags::GROUP_POLICY,
            Self::PerUser => profile_flags::USER,
        }
    }
}
