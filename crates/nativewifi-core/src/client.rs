//! Short-lived session client.
//!
//! [`NativeWifi`] opens a fresh session for every call and releases it when
//! the call returns, whichever way it returns.

use std::sync::Arc;

use wlan_sys::WlanApi;

use crate::config::WifiConfig;
use crate::error::Result;
use crate::operations::{SessionLease, wifi_operations};
use crate::outcome::OutcomeMapper;
use crate::session::Session;

#[derive(Clone)]
pub struct NativeWifi {
    api: Arc<dyn WlanApi>,
    config: WifiConfig,
    mapper: OutcomeMapper,
}

impl std::fmt::Debug for NativeWifi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeWifi")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl NativeWifi {
    /// Client over the platform's Native Wifi API.
    #[cfg(windows)]
    pub fn new(config: WifiConfig) -> Result<Self> {
        Self::with_api(Arc::new(wlan_sys::Win32Wlan::new()), config)
    }

    /// Client over any implementation of the native surface.
    pub fn with_api(api: Arc<dyn WlanApi>, config: WifiConfig) -> Result<Self> {
        config.validate()?;
        let mapper = OutcomeMapper::new(config.strict);
        Ok(Self {
            api,
            config,
            mapper,
        })
    }

    pub fn config(&self) -> &WifiConfig {
        &self.config
    }

    pub fn mapper(&self) -> &OutcomeMapper {
        &self.mapper
    }

    fn lease(&self) -> Result<SessionLease<'_>> {
        Session::open(Arc::clone(&self.api), self.mapper).map(SessionLease::Fresh)
    }
}

wifi_operations!(NativeWifi);
