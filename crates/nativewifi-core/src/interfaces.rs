//! Interface enumeration and per-interface parameters.

use uuid::Uuid;
use wlan_sys::codes::opcode;

use crate::decode::{DecodeError, NativeRecord, RecordReader};
use crate::error::Result;
use crate::model::{CurrentConnection, InterfaceConnection, InterfaceInfo};
use crate::outcome::ActionOutcome;
use crate::session::Session;
use crate::surface::Surface;

/// Signal strength in dBm as returned by the RSSI opcode.
struct Rssi(i32);

impl NativeRecord for Rssi {
    const SIZE: usize = 4;

    fn decode(r: &RecordReader<'_>) -> std::result::Result<Self, DecodeError> {
        Ok(Self(r.i32(0)?))
    }
}

/// A native 32-bit BOOL.
struct Flag(bool);

impl NativeRecord for Flag {
    const SIZE: usize = 4;

    fn decode(r: &RecordReader<'_>) -> std::result::Result<Self, DecodeError> {
        Ok(Self(r.bool32(0)?))
    }
}

pub fn enumerate_interfaces(session: &Session) -> Result<Vec<InterfaceInfo>> {
    let interfaces = Surface::new(session).interfaces()?;
    tracing::debug!(count = interfaces.len(), "enumerated interfaces");
    Ok(interfaces)
}

/// Every interface with its current connection, `None` when disconnected.
pub fn enumerate_interface_connections(session: &Session) -> Result<Vec<InterfaceConnection>> {
    enumerate_interfaces(session)?
        .into_iter()
        .map(|interface| {
            let (_, connection) = current_connection(session, &interface.id)?;
            Ok(InterfaceConnection {
                interface,
                connection,
            })
        })
        .collect()
}

pub fn current_connection(
    session: &Session,
    interface_id: &Uuid,
) -> Result<(ActionOutcome, Option<CurrentConnection>)> {
    Surface::new(session).query(interface_id, opcode::CURRENT_CONNECTION)
}

pub fn rssi(session: &Session, interface_id: &Uuid) -> Result<(ActionOutcome, Option<i32>)> {
    let (outcome, value) = Surface::new(session).query::<Rssi>(interface_id, opcode::RSSI)?;
    Ok((outcome, value.map(|Rssi(dbm)| dbm)))
}

pub fn is_auto_config(session: &Session, interface_id: &Uuid) -> Result<Option<bool>> {
    let (_, value) = Surface::new(session).query::<Flag>(interface_id, opcode::AUTOCONF_ENABLED)?;
    Ok(value.map(|Flag(enabled)| enabled))
}

pub fn set_auto_config(session: &Session, interface_id: &Uuid, enabled: bool) -> Result<bool> {
    let changed =
        Surface::new(session).set_interface_bool(interface_id, opcode::AUTOCONF_ENABLED, enabled)?;
    if changed {
        tracing::info!(%interface_id, enabled, "auto configuration updated");
    }
    Ok(changed)
}
