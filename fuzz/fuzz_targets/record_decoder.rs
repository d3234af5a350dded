#![no_main]

use libfuzzer_sys::fuzz_target;
use nativewifi_core::decode::{decode_list, decode_single, declared_count};
use nativewifi_core::model::{
    AvailableNetworkEntry, BssEntry, CurrentConnection, InterfaceInfo, PhyRadioState,
    ProfileInfoEntry,
};
use nativewifi_core::records::ConnectionNotification;
use wlan_sys::layout;

fn lists(block: &[u8]) {
    if let Ok(interfaces) = decode_list::<InterfaceInfo>(block, layout::INTERFACE_LIST) {
        assert_eq!(
            Ok(interfaces.len()),
            declared_count(block, layout::INTERFACE_LIST)
        );
    }
    let _ = decode_list::<AvailableNetworkEntry>(block, layout::AVAILABLE_NETWORK_LIST);
    if let Ok(entries) = decode_list::<BssEntry>(block, layout::BSS_LIST) {
        for entry in &entries {
            let _ = entry.channel();
            assert!(entry.ssid.as_bytes().len() <= layout::SSID_CAPACITY);
        }
    }
    let _ = decode_list::<ProfileInfoEntry>(block, layout::PROFILE_INFO_LIST);
    if let Ok(phys) = decode_list::<PhyRadioState>(block, layout::RADIO_STATE_LIST) {
        assert!(phys.len() <= layout::MAX_PHY_RADIO_STATES);
    }
}

fn singles(block: &[u8]) {
    let _ = decode_single::<CurrentConnection>(block);
    if let Ok(notification) = decode_single::<ConnectionNotification>(block) {
        assert!(notification.ssid.as_bytes().len() <= layout::SSID_CAPACITY);
    }
}

fuzz_target!(|data: &[u8]| {
    lists(data);
    singles(data);
});
