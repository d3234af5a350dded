//! nativewifi-core: a safe, awaitable view of the Native Wifi subsystem.
//!
//! The native surface is handle based, hands out variable-length memory
//! blocks that the caller must free, and reports completion of long-running
//! actions (scan, connect, disconnect) through callbacks on threads the
//! caller does not own.  This crate turns that into:
//!
//! - structured, fully-owned records ([`model`]) decoded from native blocks
//!   ([`decode`], [`records`]);
//! - sessions with idempotent release ([`session`]);
//! - a thread-safe notification bus with one stable trampoline per session
//!   ([`notification`]);
//! - resolve-once correlators racing a notification against a timeout and a
//!   cancellation signal ([`correlator`], [`connection`], [`scan`]);
//! - a closed outcome taxonomy for native status codes ([`outcome`]).
//!
//! [`NativeWifi`] opens a short-lived session per call; [`WifiPlayer`] keeps
//! one session open and republishes native events as [`PlayerEvent`]s.
//!
//! Everything above the [`wlan_sys::WlanApi`] seam is platform independent,
//! so the whole stack can be driven by a synthetic implementation.

#![forbid(unsafe_code)]

pub mod cancel;
pub mod channel;
pub mod client;
pub mod config;
pub mod connection;
pub mod convert;
pub mod correlator;
pub mod decode;
pub mod error;
pub mod interfaces;
pub mod logging;
pub mod model;
pub mod networks;
pub mod notification;
mod operations;
pub mod outcome;
pub mod player;
pub mod profiles;
pub mod radio;
pub mod records;
pub mod scan;
pub mod session;
pub mod surface;

pub use cancel::{CancelHandle, CancelSignal};
pub use client::NativeWifi;
pub use config::WifiConfig;
pub use error::{Error, NativeFailure, Result};
pub use outcome::ActionOutcome;
pub use player::{PlayerEvent, WifiPlayer};
pub use scan::ScanMode;
pub use session::Session;

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
