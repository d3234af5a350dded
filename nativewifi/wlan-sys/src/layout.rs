//! Fixed marshaled layouts of the native records.
//!
//! Every list block starts with a small header holding the record count,
//! followed by records of a fixed size packed contiguously.  The header
//! shape differs between list kinds, so each kind is described by a
//! [`ListLayout`].

/// Header shape of a counted native list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLayout {
    /// Byte offset of the `u32` record count.
    pub count_offset: usize,
    /// Byte offset of the first record.
    pub records_offset: usize,
    /// Size of one marshaled record.
    pub record_size: usize,
    /// Upper bound on the count for lists embedded in a fixed array.
    pub capacity: Option<usize>,
}

impl ListLayout {
    /// Number of bytes covered by the header and `count` records.
    pub const fn span(&self, count: usize) -> usize {
        self.records_offset + count * self.record_size
    }
}

/// Capacity (in UTF-16 units) of the fixed name fields.
pub const NAME_CAPACITY: usize = 256;
/// Capacity of the SSID byte array.
pub const SSID_CAPACITY: usize = 32;
/// Length prefix plus byte array.
pub const SSID_SIZE: usize = 4 + SSID_CAPACITY;
pub const MAC_SIZE: usize = 6;
pub const GUID_SIZE: usize = 16;

pub const INTERFACE_INFO_SIZE: usize = GUID_SIZE + NAME_CAPACITY * 2 + 4;
pub const AVAILABLE_NETWORK_SIZE: usize = 628;
pub const BSS_ENTRY_SIZE: usize = 360;
pub const PROFILE_INFO_SIZE: usize = NAME_CAPACITY * 2 + 4;
pub const PHY_RADIO_STATE_SIZE: usize = 12;
pub const MAX_PHY_RADIO_STATES: usize = 64;
pub const CONNECTION_ATTRIBUTES_SIZE: usize = 604;
/// Fixed part of the connection notification payload; the profile XML that
/// trails it is not part of the fixed layout.
pub const CONNECTION_NOTIFICATION_SIZE: usize = 568;
/// Maximum number of PHY types listed inline in an available network.
pub const MAX_INLINE_PHY_TYPES: usize = 8;
/// Capacity of the rate set embedded in a BSS entry.
pub const RATE_SET_CAPACITY: usize = 126;

pub const INTERFACE_LIST: ListLayout = ListLayout {
    count_offset: 0,
    records_offset: 8,
    record_size: INTERFACE_INFO_SIZE,
    capacity: None,
};

pub const AVAILABLE_NETWORK_LIST: ListLayout = ListLayout {
    count_offset: 0,
    records_offset: 8,
    record_size: AVAILABLE_NETWORK_SIZE,
    capacity: None,
};

/// `[total_size:u32][count:u32][entries...]`; IE blobs trail the entries.
pub const BSS_LIST: ListLayout = ListLayout {
    count_offset: 4,
    records_offset: 8,
    record_size: BSS_ENTRY_SIZE,
    capacity: None,
};

pub const PROFILE_INFO_LIST: ListLayout = ListLayout {
    count_offset: 0,
    records_offset: 8,
    record_size: PROFILE_INFO_SIZE,
    capacity: None,
};

/// `[count:u32][phy states; 64]`.
pub const RADIO_STATE_LIST: ListLayout = ListLayout {
    count_offset: 0,
    records_offset: 4,
    record_size: PHY_RADIO_STATE_SIZE,
    capacity: Some(MAX_PHY_RADIO_STATES),
};

/// Offset of the total-size field of a BSS list.
pub const BSS_LIST_TOTAL_SIZE_OFFSET: usize = 0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_sizes_match_native_structs() {
        assert_eq!(INTERFACE_INFO_SIZE, 532);
        assert_eq!(PROFILE_INFO_SIZE, 516);
        assert_eq!(RADIO_STATE_LIST.span(MAX_PHY_RADIO_STATES), 772);
    }

    #[test]
    fn span_of_empty_list_is_the_header() {
        assert_eq!(INTERFACE_LIST.span(0), 8);
        assert_eq!(BSS_LIST.span(2), 8 + 2 * 360);
    }
}
