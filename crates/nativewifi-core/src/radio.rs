//! Radio state of an interface.

use uuid::Uuid;
use wlan_sys::codes::opcode;
use wlan_sys::layout;

use crate::convert::RadioState;
use crate::error::Result;
use crate::model::{PhyRadioState, RadioInfo};
use crate::session::Session;
use crate::surface::Surface;

/// Software and hardware switch positions of every PHY, `None` when the
/// interface cannot report them.
pub fn get_radio(session: &Session, interface_id: &Uuid) -> Result<Option<RadioInfo>> {
    let (outcome, phys) = Surface::new(session).query_list::<PhyRadioState>(
        interface_id,
        opcode::RADIO_STATE,
        layout::RADIO_STATE_LIST,
    )?;
    if phys.is_none() {
        tracing::debug!(%interface_id, ?outcome, "radio state unavailable");
    }
    Ok(phys.map(|phys| RadioInfo {
        interface_id: *interface_id,
        phys,
    }))
}

pub fn turn_on_radio(session: &Session, interface_id: &Uuid) -> Result<bool> {
    set_radio(session, interface_id, RadioState::On)
}

pub fn turn_off_radio(session: &Session, interface_id: &Uuid) -> Result<bool> {
    set_radio(session, interface_id, RadioState::Off)
}

/// Only the software switch can be set; the hardware field is ignored by the
/// platform.
fn set_radio(session: &Session, interface_id: &Uuid, state: RadioState) -> Result<bool> {
    let request = PhyRadioState {
        phy_index: 0,
        software: state,
        hardware: state,
    };
    let changed =
        Surface::new(session).set_interface(interface_id, opcode::RADIO_STATE, &request.encode())?;
    tracing::info!(%interface_id, ?state, changed, "radio switch requested");
    Ok(changed)
}
