//! The operation set shared by [`NativeWifi`](crate::NativeWifi) and
//! [`WifiPlayer`](crate::WifiPlayer).
//!
//! Both types expose the same methods and differ only in where the session
//! comes from: a fresh one per call, or the player's own.  Each provides a
//! `lease(&self) -> Result<SessionLease<'_>>` and a `config(&self)`, and
//! [`wifi_operations!`] generates the rest.

use std::ops::Deref;

use crate::session::Session;

/// Session for one operation.
pub(crate) enum SessionLease<'a> {
    /// Opened for this call and released when the lease drops.
    Fresh(Session),
    Shared(&'a Session),
}

impl Deref for SessionLease<'_> {
    type Target = Session;

    fn deref(&self) -> &Session {
        match self {
            Self::Fresh(session) => session,
            Self::Shared(session) => *session,
        }
    }
}

macro_rules! wifi_operations {
    ($ty:ty) => {
        const _: () = {
            use std::time::Duration;

            use uuid::Uuid;

            use $crate::cancel::CancelSignal;
            use $crate::convert::ProfileType;
            use $crate::error::Result;
            use $crate::model::{
                AvailableNetwork, AvailableNetworkGroup, BssFilter, BssNetwork, ConnectRequest,
                CurrentConnection, InterfaceConnection, InterfaceInfo, NetworkIdentifier,
                ProfileDocument, ProfileInfo, RadioInfo,
            };
            use $crate::outcome::ActionOutcome;
            use $crate::scan::ScanMode;
            use $crate::{connection, interfaces, networks, profiles, radio, scan};

            impl $ty {
                pub fn enumerate_interfaces(&self) -> Result<Vec<InterfaceInfo>> {
                    interfaces::enumerate_interfaces(&*self.lease()?)
                }

                pub fn enumerate_interface_connections(&self) -> Result<Vec<InterfaceConnection>> {
                    interfaces::enumerate_interface_connections(&*self.lease()?)
                }

                pub fn enumerate_available_networks(&self) -> Result<Vec<AvailableNetwork>> {
                    networks::enumerate_available_networks(&*self.lease()?)
                }

                pub fn enumerate_available_network_groups(&self) -> Result<Vec<AvailableNetworkGroup>> {
                    networks::enumerate_available_network_groups(&*self.lease()?)
                }

                pub fn enumerate_bss_networks(&self, filter: &BssFilter) -> Result<Vec<BssNetwork>> {
                    networks::enumerate_bss_networks(&*self.lease()?, filter)
                }

                pub fn get_current_connection(
                    &self,
                    interface_id: &Uuid,
                ) -> Result<(ActionOutcome, Option<CurrentConnection>)> {
                    interfaces::current_connection(&*self.lease()?, interface_id)
                }

                pub fn get_rssi(&self, interface_id: &Uuid) -> Result<(ActionOutcome, Option<i32>)> {
                    interfaces::rssi(&*self.lease()?, interface_id)
                }

                pub fn enumerate_profile_names(&self) -> Result<Vec<String>> {
                    profiles::enumerate_profile_names(&*self.lease()?)
                }

                pub fn enumerate_profiles(&self) -> Result<Vec<ProfileInfo>> {
                    profiles::enumerate_profiles(&*self.lease()?)
                }

                pub fn get_profile(
                    &self,
                    interface_id: &Uuid,
                    name: &str,
                ) -> Result<(ActionOutcome, Option<ProfileDocument>)> {
                    profiles::get_profile(&*self.lease()?, interface_id, name)
                }

                pub fn set_profile(
                    &self,
                    interface_id: &Uuid,
                    profile_type: ProfileType,
                    xml: &str,
                    overwrite: bool,
                ) -> Result<bool> {
                    profiles::set_profile(&*self.lease()?, interface_id, profile_type, xml, overwrite)
                }

                pub fn set_profile_position(
                    &self,
                    interface_id: &Uuid,
                    name: &str,
                    position: u32,
                ) -> Result<bool> {
                    profiles::set_profile_position(&*self.lease()?, interface_id, name, position)
                }

                pub fn rename_profile(
                    &self,
                    interface_id: &Uuid,
                    old_name: &str,
                    new_name: &str,
                ) -> Result<bool> {
                    profiles::rename_profile(&*self.lease()?, interface_id, old_name, new_name)
                }

                pub fn delete_profile(&self, interface_id: &Uuid, name: &str) -> Result<bool> {
                    profiles::delete_profile(&*self.lease()?, interface_id, name)
                }

                pub fn connect_network(&self, request: &ConnectRequest) -> Result<bool> {
                    connection::connect_network(&*self.lease()?, request)
                }

                pub async fn connect_network_async(
                    &self,
                    request: &ConnectRequest,
                    timeout: Duration,
                    cancel: &CancelSignal,
                ) -> Result<bool> {
                    let session = self.lease()?;
                    connection::connect_network_async(&session, request, timeout, cancel).await
                }

                pub async fn connect_network_with_defaults(&self, request: &ConnectRequest) -> Result<bool> {
                    let timeout = self.config().timeouts.connect();
                    self.connect_network_async(request, timeout, &CancelSignal::never())
                        .await
                }

                pub fn disconnect_network(&self, interface_id: &Uuid) -> Result<bool> {
                    connection::disconnect_network(&*self.lease()?, interface_id)
                }

                pub async fn disconnect_network_async(
                    &self,
                    interface_id: &Uuid,
                    timeout: Duration,
                    cancel: &CancelSignal,
                ) -> Result<bool> {
                    let session = self.lease()?;
                    connection::disconnect_network_async(&session, interface_id, timeout, cancel).await
                }

                pub async fn disconnect_network_with_defaults(&self, interface_id: &Uuid) -> Result<bool> {
                    let timeout = self.config().timeouts.disconnect();
                    self.disconnect_network_async(interface_id, timeout, &CancelSignal::never())
                        .await
                }

                pub async fn scan_networks_async(
                    &self,
                    mode: &ScanMode,
                    ssid: Option<&NetworkIdentifier>,
                    timeout: Duration,
                    cancel: &CancelSignal,
                ) -> Result<Vec<Uuid>> {
                    let session = self.lease()?;
                    scan::scan_networks_async(&session, mode, ssid, timeout, cancel).await
                }

                pub async fn scan_networks_with_defaults(&self, mode: &ScanMode) -> Result<Vec<Uuid>> {
                    let timeout = self.config().timeouts.scan();
                    self.scan_networks_async(mode, None, timeout, &CancelSignal::never())
                        .await
                }

                pub fn get_radio(&self, interface_id: &Uuid) -> Result<Option<RadioInfo>> {
                    radio::get_radio(&*self.lease()?, interface_id)
                }

                pub fn turn_on_radio(&self, interface_id: &Uuid) -> Result<bool> {
                    radio::turn_on_radio(&*self.lease()?, interface_id)
                }

                pub fn turn_off_radio(&self, interface_id: &Uuid) -> Result<bool> {
                    radio::turn_off_radio(&*self.lease()?, interface_id)
                }

                pub fn is_auto_config(&self, interface_id: &Uuid) -> Result<Option<bool>> {
                    interfaces::is_auto_config(&*self.lease()?, interface_id)
                }

                pub fn set_auto_config(&self, interface_id: &Uuid, enabled: bool) -> Result<bool> {
                    interfaces::set_auto_config(&*self.lease()?, interface_id, enabled)
                }
            }
        };
    };
}

pub(crate) use wifi_operations;
