//! Native surface adapter: one method per native entry point, each followed
//! by status interpretation through the session's [`OutcomeMapper`].
//!
//! List-returning calls decode the native block while it is borrowed and
//! drop it before returning, on success and on decode failure alike.  Per
//! interface lists treat every benign outcome as an empty contribution so a
//! single failing interface never hides the others.

use uuid::Uuid;
use wlan_sys::codes::bss_type;
use wlan_sys::layout::{self, ListLayout};
use wlan_sys::status::Status;
use wlan_sys::{ConnectParameters, OwnedBuffer, RawProfile};

use crate::convert::ProfileType;
use crate::decode::{NativeRecord, decode_list, decode_single};
use crate::error::Result;
use crate::model::{
    AvailableNetworkEntry, BssEntry, BssFilter, ConnectRequest, InterfaceInfo, NetworkIdentifier,
    ProfileInfoEntry,
};
use crate::outcome::{ActionOutcome, CallSite, OutcomeMapper};
use crate::session::Session;

const ENUM_INTERFACES: CallSite = CallSite::fatal("WlanEnumInterfaces");
const GET_AVAILABLE_NETWORK_LIST: CallSite =
    CallSite::tolerating_all("WlanGetAvailableNetworkList");
const GET_NETWORK_BSS_LIST: CallSite = CallSite::tolerating_all("WlanGetNetworkBssList");
const GET_PROFILE_LIST: CallSite = CallSite::tolerating_all("WlanGetProfileList");
const GET_PROFILE: CallSite = CallSite::tolerating_all("WlanGetProfile");
const SET_PROFILE: CallSite = CallSite::tolerating_all("WlanSetProfile");
const SET_PROFILE_POSITION: CallSite = CallSite::tolerating_all("WlanSetProfilePosition");
const RENAME_PROFILE: CallSite = CallSite::tolerating_all("WlanRenameProfile");
const DELETE_PROFILE: CallSite = CallSite::tolerating_all("WlanDeleteProfile");
const QUERY_INTERFACE: CallSite = CallSite::tolerating_all("WlanQueryInterface");
const SET_INTERFACE: CallSite = CallSite::tolerating_all("WlanSetInterface");
const CONNECT: CallSite = CallSite::tolerating_all("WlanConnect");
const DISCONNECT: CallSite = CallSite::tolerating_all("WlanDisconnect");
const SCAN: CallSite = CallSite::tolerating_all("WlanScan");

pub struct Surface<'a> {
    session: &'a Session,
}

impl<'a> Surface<'a> {
    pub const fn new(session: &'a Session) -> Self {
        Self { session }
    }

    fn mapper(&self) -> &OutcomeMapper {
        self.session.mapper()
    }

    fn check(&self, site: &CallSite, code: Status) -> Result<ActionOutcome> {
        self.mapper().check(site, code, self.session.api())
    }

    fn check_bool(&self, site: &CallSite, code: Status) -> Result<bool> {
        self.mapper().check_bool(site, code, self.session.api())
    }

    fn list<R: NativeRecord>(
        &self,
        site: &CallSite,
        fetched: std::result::Result<OwnedBuffer, Status>,
        list: ListLayout,
    ) -> Result<Vec<R>> {
        match fetched {
            Ok(block) => Ok(decode_list(block.bytes(), list)?),
            Err(code) => {
                self.check(site, code)?;
                Ok(Vec::new())
            }
        }
    }

    pub fn interfaces(&self) -> Result<Vec<InterfaceInfo>> {
        let api = self.session.api();
        self.list(
            &ENUM_INTERFACES,
            api.enum_interfaces(self.session.handle()),
            layout::INTERFACE_LIST,
        )
    }

    pub fn available_networks(&self, interface_id: &Uuid) -> Result<Vec<AvailableNetworkEntry>> {
        let api = self.session.api();
        self.list(
            &GET_AVAILABLE_NETWORK_LIST,
            api.get_available_network_list(
                self.session.handle(),
                &interface_id.to_bytes_le(),
                0,
            ),
            layout::AVAILABLE_NETWORK_LIST,
        )
    }

    pub fn bss_entries(&self, interface_id: &Uuid, filter: &BssFilter) -> Result<Vec<BssEntry>> {
        let api = self.session.api();
        let (ssid, kind) = match &filter.ssid {
            Some(ssid) => (Some(ssid.as_bytes()), filter.bss_type.to_native()),
            None => (None, bss_type::ANY),
        };
        self.list(
            &GET_NETWORK_BSS_LIST,
            api.get_network_bss_list(
                self.session.handle(),
                &interface_id.to_bytes_le(),
                ssid,
                kind,
                filter.security_enabled,
            ),
            layout::BSS_LIST,
        )
    }

    pub fn profile_infos(&self, interface_id: &Uuid) -> Result<Vec<ProfileInfoEntry>> {
        let api = self.session.api();
        self.list(
            &GET_PROFILE_LIST,
            api.get_profile_list(self.session.handle(), &interface_id.to_bytes_le()),
            layout::PROFILE_INFO_LIST,
        )
    }

    pub fn profile(
        &self,
        interface_id: &Uuid,
        name: &str,
    ) -> Result<(ActionOutcome, Option<RawProfile>)> {
        let api = self.session.api();
        match api.get_profile(self.session.handle(), &interface_id.to_bytes_le(), name) {
            Ok(profile) => Ok((ActionOutcome::Success, Some(profile))),
            Err(code) => Ok((self.check(&GET_PROFILE, code)?, None)),
        }
    }

    pub fn set_profile(
        &self,
        interface_id: &Uuid,
        profile_type: ProfileType,
        xml: &str,
        overwrite: bool,
    ) -> Result<bool> {
        let api = self.session.api();
        let (code, reason) = api.set_profile(
            self.session.handle(),
            &interface_id.to_bytes_le(),
            profile_type.to_flags(),
            xml,
            overwrite,
        );
        let outcome = self.mapper().check_profile(&SET_PROFILE, code, reason, api)?;
        Ok(outcome.is_success())
    }

    pub fn set_profile_position(
        &self,
        interface_id: &Uuid,
        name: &str,
        position: u32,
    ) -> Result<bool> {
        let code = self.session.api().set_profile_position(
            self.session.handle(),
            &interface_id.to_bytes_le(),
            name,
            position,
        );
        self.check_bool(&SET_PROFILE_POSITION, code)
    }

    pub fn rename_profile(&self, interface_id: &Uuid, old_name: &str, new_name: &str) -> Result<bool> {
        let code = self.session.api().rename_profile(
            self.session.handle(),
            &interface_id.to_bytes_le(),
            old_name,
            new_name,
        );
        self.check_bool(&RENAME_PROFILE, code)
    }

    pub fn delete_profile(&self, interface_id: &Uuid, name: &str) -> Result<bool> {
        let code = self.session.api().delete_profile(
            self.session.handle(),
            &interface_id.to_bytes_le(),
            name,
        );
        self.check_bool(&DELETE_PROFILE, code)
    }

    /// Query an interface parameter holding a single record.
    pub fn query<R: NativeRecord>(
        &self,
        interface_id: &Uuid,
        code: u32,
    ) -> Result<(ActionOutcome, Option<R>)> {
        let api = self.session.api();
        match api.query_interface(self.session.handle(), &interface_id.to_bytes_le(), code) {
            Ok(block) => Ok((ActionOutcome::Success, Some(decode_single(block.bytes())?))),
            Err(status) => Ok((self.check(&QUERY_INTERFACE, status)?, None)),
        }
    }

    /// Query an interface parameter holding a counted list.
    pub fn query_list<R: NativeRecord>(
        &self,
        interface_id: &Uuid,
        code: u32,
        list: ListLayout,
    ) -> Result<(ActionOutcome, Option<Vec<R>>)> {
        let api = self.session.api();
        match api.query_interface(self.session.handle(), &interface_id.to_bytes_le(), code) {
            Ok(block) => Ok((ActionOutcome::Success, Some(decode_list(block.bytes(), list)?))),
            Err(status) => Ok((self.check(&QUERY_INTERFACE, status)?, None)),
        }
    }

    pub fn set_interface(&self, interface_id: &Uuid, code: u32, data: &[u8]) -> Result<bool> {
        let status = self.session.api().set_interface(
            self.session.handle(),
            &interface_id.to_bytes_le(),
            code,
            data,
        );
        self.check_bool(&SET_INTERFACE, status)
    }

    pub fn set_interface_bool(&self, interface_id: &Uuid, code: u32, value: bool) -> Result<bool> {
        self.set_interface(interface_id, code, &u32::from(value).to_le_bytes())
    }

    pub fn connect(&self, request: &ConnectRequest) -> Result<bool> {
        let profile = (!request.profile_name.is_empty()).then_some(request.profile_name.as_str());
        let parameters = ConnectParameters {
            mode: request.mode.to_native(),
            profile,
            ssid: request.ssid.as_ref().map(NetworkIdentifier::as_bytes),
            bss_type: request.bss_type.to_native(),
            flags: request.flags,
        };
        let code = self.session.api().connect(
            self.session.handle(),
            &request.interface_id.to_bytes_le(),
            &parameters,
        );
        self.check_bool(&CONNECT, code)
    }

    pub fn disconnect(&self, interface_id: &Uuid) -> Result<bool> {
        let code = self
            .session
            .api()
            .disconnect(self.session.handle(), &interface_id.to_bytes_le());
        self.check_bool(&DISCONNECT, code)
    }

    pub fn scan(&self, interface_id: &Uuid, ssid: Option<&NetworkIdentifier>) -> Result<bool> {
        let code = self.session.api().scan(
            self.session.handle(),
            &interface_id.to_bytes_le(),
            ssid.map(NetworkIdentifier::as_bytes),
        );
        self.check_bool(&SCAN, code)
    }
}
