//! Available network and BSS enumeration across every interface.
//!
//! Each interface contributes independently; an interface whose list cannot
//! be fetched for a benign reason contributes nothing.

use crate::convert::BssType;
use crate::error::Result;
use crate::interfaces::enumerate_interfaces;
use crate::model::{
    AvailableNetwork, AvailableNetworkEntry, AvailableNetworkGroup, BssEntry, BssFilter,
    BssNetwork, NetworkIdentifier,
};
use crate::session::Session;
use crate::surface::Surface;

pub fn enumerate_available_networks(session: &Session) -> Result<Vec<AvailableNetwork>> {
    let surface = Surface::new(session);
    let mut networks = Vec::new();
    for interface in enumerate_interfaces(session)? {
        let entries = surface.available_networks(&interface.id)?;
        tracing::trace!(interface_id = %interface.id, count = entries.len(), "available networks");
        networks.extend(entries.into_iter().map(|network| AvailableNetwork {
            interface: interface.clone(),
            network,
        }));
    }
    Ok(networks)
}

pub fn enumerate_bss_networks(session: &Session, filter: &BssFilter) -> Result<Vec<BssNetwork>> {
    let surface = Surface::new(session);
    let mut networks = Vec::new();
    for interface in enumerate_interfaces(session)? {
        let entries = surface.bss_entries(&interface.id, filter)?;
        tracing::trace!(interface_id = %interface.id, count = entries.len(), "bss entries");
        networks.extend(entries.into_iter().map(|bss| BssNetwork {
            interface: interface.clone(),
            channel: bss.channel(),
            bss,
        }));
    }
    Ok(networks)
}

/// Available networks joined with the BSS entries carrying them.
///
/// Networks are keyed by SSID and BSS type per interface; when the driver
/// lists one network several times (with and without a profile), the
/// connected entry represents the group, otherwise the first one.
pub fn enumerate_available_network_groups(
    session: &Session,
) -> Result<Vec<AvailableNetworkGroup>> {
    let surface = Surface::new(session);
    let mut groups = Vec::new();
    for interface in enumerate_interfaces(session)? {
        let networks = surface.available_networks(&interface.id)?;
        if networks.is_empty() {
            continue;
        }
        let bss = surface.bss_entries(&interface.id, &BssFilter::default())?;
        for network in representatives(networks) {
            let members: Vec<BssEntry> = bss
                .iter()
                .filter(|entry| carries(entry, &network.ssid, network.bss_type))
                .cloned()
                .collect();
            let strongest = members.iter().max_by_key(|entry| entry.link_quality);
            groups.push(AvailableNetworkGroup {
                interface: interface.clone(),
                link_quality: strongest.map_or(0, |entry| entry.link_quality),
                frequency_khz: strongest.map(|entry| entry.center_frequency_khz),
                channel: strongest.and_then(BssEntry::channel),
                network,
                bss_entries: members,
            });
        }
    }
    Ok(groups)
}

fn carries(entry: &BssEntry, ssid: &NetworkIdentifier, bss_type: BssType) -> bool {
    entry.ssid == *ssid && (bss_type == BssType::Any || entry.bss_type == bss_type)
}

fn representatives(networks: Vec<AvailableNetworkEntry>) -> Vec<AvailableNetworkEntry> {
    let mut picked: Vec<AvailableNetworkEntry> = Vec::new();
    for network in networks {
        match picked
            .iter_mut()
            .find(|p| p.ssid == network.ssid && p.bss_type == network.bss_type)
        {
            Some(existing) => {
                if network.is_connected() && !existing.is_connected() {
                    *existing = network;
                }
            }
            None => picked.push(network),
        }
    }
    picked
}
