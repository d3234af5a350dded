//! Stored profile catalogue and mutation.
//!
//! Profile documents are opaque XML text here; editing them is left to the
//! caller.

use uuid::Uuid;

use crate::convert::ProfileType;
use crate::error::{Error, Result};
use crate::interfaces::{current_connection, enumerate_interfaces};
use crate::model::{ProfileDocument, ProfileInfo};
use crate::outcome::ActionOutcome;
use crate::session::Session;
use crate::surface::Surface;

fn require_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidArgument("profile name is empty".to_string()));
    }
    Ok(())
}

/// Names of every stored profile, interface by interface in preference
/// order.
pub fn enumerate_profile_names(session: &Session) -> Result<Vec<String>> {
    let surface = Surface::new(session);
    let mut names = Vec::new();
    for interface in enumerate_interfaces(session)? {
        names.extend(
            surface
                .profile_infos(&interface.id)?
                .into_iter()
                .map(|info| info.name),
        );
    }
    Ok(names)
}

/// Every stored profile with its document.  Profiles whose document cannot
/// be read for a benign reason are skipped.
pub fn enumerate_profiles(session: &Session) -> Result<Vec<ProfileInfo>> {
    let surface = Surface::new(session);
    let mut profiles = Vec::new();
    for interface in enumerate_interfaces(session)? {
        let infos = surface.profile_infos(&interface.id)?;
        if infos.is_empty() {
            continue;
        }
        let connected = if interface.is_connected() {
            current_connection(session, &interface.id)?
                .1
                .map(|connection| connection.profile_name)
        } else {
            None
        };

        for (position, info) in (0u32..).zip(infos) {
            let (outcome, raw) = surface.profile(&interface.id, &info.name)?;
            let Some(raw) = raw else {
                tracing::debug!(
                    interface_id = %interface.id,
                    profile = %info.name,
                    ?outcome,
                    "skipping unreadable profile"
                );
                continue;
            };
            profiles.push(ProfileInfo {
                interface: interface.clone(),
                is_connected: connected.as_deref() == Some(info.name.as_str()),
                profile_type: ProfileType::from_flags(raw.flags),
                name: info.name,
                xml: raw.xml,
                position,
            });
        }
    }
    Ok(profiles)
}

pub fn get_profile(
    session: &Session,
    interface_id: &Uuid,
    name: &str,
) -> Result<(ActionOutcome, Option<ProfileDocument>)> {
    require_name(name)?;
    let (outcome, raw) = Surface::new(session).profile(interface_id, name)?;
    Ok((
        outcome,
        raw.map(|raw| ProfileDocument {
            name: name.to_string(),
            profile_type: ProfileType::from_flags(raw.flags),
            xml: raw.xml,
        }),
    ))
}

/// Store a profile document.  A rejected document raises with the reason
/// the platform gave.
pub fn set_profile(
    session: &Session,
    interface_id: &Uuid,
    profile_type: ProfileType,
    xml: &str,
    overwrite: bool,
) -> Result<bool> {
    if xml.trim().is_empty() {
        return Err(Error::InvalidArgument("profile document is empty".to_string()));
    }
    let stored = Surface::new(session).set_profile(interface_id, profile_type, xml, overwrite)?;
    if stored {
        tracing::info!(%interface_id, ?profile_type, overwrite, "profile stored");
    }
    Ok(stored)
}

pub fn set_profile_position(
    session: &Session,
    interface_id: &Uuid,
    name: &str,
    position: u32,
) -> Result<bool> {
    require_name(name)?;
    Surface::new(session).set_profile_position(interface_id, name, position)
}

pub fn rename_profile(
    session: &Session,
    interface_id: &Uuid,
    old_name: &str,
    new_name: &str,
) -> Result<bool> {
    require_name(old_name)?;
    require_name(new_name)?;
    Surface::new(session).rename_profile(interface_id, old_name, new_name)
}

pub fn delete_profile(session: &Session, interface_id: &Uuid, name: &str) -> Result<bool> {
    require_name(name)?;
    let deleted = Surface::new(session).delete_profile(interface_id, name)?;
    if deleted {
        tracing::info!(%interface_id, profile = name, "profile deleted");
    }
    Ok(deleted)
}
