//! Numeric status codes returned by the native entry points.

/// Raw status as returned by a native call.  Zero means success.
pub type Status = u32;

pub const ERROR_SUCCESS: Status = 0;
pub const ERROR_ACCESS_DENIED: Status = 5;
pub const ERROR_INVALID_HANDLE: Status = 6;
pub const ERROR_NOT_ENOUGH_MEMORY: Status = 8;
pub const ERROR_GEN_FAILURE: Status = 31;
pub const ERROR_NOT_SUPPORTED: Status = 50;
pub const ERROR_INVALID_PARAMETER: Status = 87;
pub const ERROR_BUSY: Status = 170;
pub const ERROR_ALREADY_EXISTS: Status = 183;
pub const ERROR_SERVICE_NOT_ACTIVE: Status = 1062;
pub const ERROR_NOT_FOUND: Status = 1168;
pub const ERROR_NO_MATCH: Status = 1169;
pub const ERROR_BAD_PROFILE: Status = 1206;
pub const ERROR_REMOTE_SESSION_LIMIT_EXCEEDED: Status = 1220;
pub const ERROR_INVALID_STATE: Status = 5023;
pub const ERROR_NDIS_DOT11_AUTO_CONFIG_ENABLED: Status = 0x8034_2000;
pub const ERROR_NDIS_DOT11_MEDIA_IN_USE: Status = 0x8034_2001;
pub const ERROR_NDIS_DOT11_POWER_STATE_INVALID: Status = 0x8034_2002;

/// Symbolic name of a known status code.
pub fn name(status: Status) -> Option<&'static str> {
    Some(match status {
        ERROR_SUCCESS => "ERROR_SUCCESS",
        ERROR_ACCESS_DENIED => "ERROR_ACCESS_DENIED",
        ERROR_INVALID_HANDLE => "ERROR_INVALID_HANDLE",
        ERROR_NOT_ENOUGH_MEMORY => "ERROR_NOT_ENOUGH_MEMORY",
        ERROR_GEN_FAILURE => "ERROR_GEN_FAILURE",
        ERROR_NOT_SUPPORTED => "ERROR_NOT_SUPPORTED",
        ERROR_INVALID_PARAMETER => "ERROR_INVALID_PARAMETER",
        ERROR_BUSY => "ERROR_BUSY",
        ERROR_ALREADY_EXISTS => "ERROR_ALREADY_EXISTS",
        ERROR_SERVICE_NOT_ACTIVE => "ERROR_SERVICE_NOT_ACTIVE",
        ERROR_NOT_FOUND => "ERROR_NOT_FOUND",
        ERROR_NO_MATCH => "ERROR_NO_MATCH",
        ERROR_BAD_PROFILE => "ERROR_BAD_PROFILE",
        ERROR_REMOTE_SESSION_LIMIT_EXCEEDED => "ERROR_REMOTE_SESSION_LIMIT_EXCEEDED",
        ERROR_INVALID_STATE => "ERROR_INVALID_STATE",
        ERROR_NDIS_DOT11_AUTO_CONFIG_ENABLED => "ERROR_NDIS_DOT11_AUTO_CONFIG_ENABLED",
        ERROR_NDIS_DOT11_MEDIA_IN_USE => "ERROR_NDIS_DOT11_MEDIA_IN_USE",
        ERROR_NDIS_DOT11_POWER_STATE_INVALID => "ERROR_NDIS_DOT11_POWER_STATE_INVALID",
        _ => return None,
    })
}
