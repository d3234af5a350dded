//! Band and channel detection from a center frequency.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Band {
    Ghz2_4,
    Ghz3_6,
    Ghz5,
    Ghz6,
}

impl Band {
    /// Band in GHz as usually written (2.4, 3.6, 5.0, 6.0).
    pub const fn ghz(self) -> f32 {
        match self {
            Self::Ghz2_4 => 2.4,
            Self::Ghz3_6 => 3.6,
            Self::Ghz5 => 5.0,
            Self::Ghz6 => 6.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Channel {
    pub band: Band,
    pub number: u32,
}

const STEP_KHZ: u32 = 5_000;

fn stepped(frequency_khz: u32, origin_khz: u32, first: u32, last: u32) -> Option<u32> {
    let offset = frequency_khz.checked_sub(origin_khz)?;
    if offset % STEP_KHZ != 0 {
        return None;
    }
    let number = offset / STEP_KHZ;
    (first..=last).contains(&number).then_some(number)
}

/// Channel for a center frequency in kHz, or `None` when the frequency is
/// not a channel center of a known band.
pub fn detect(frequency_khz: u32) -> Option<Channel> {
    let (band, number) = match frequency_khz {
        2_484_000 => (Band::Ghz2_4, 14),
        2_412_000..=2_472_000 => (Band::Ghz2_4, stepped(frequency_khz, 2_407_000, 1, 13)?),
        3_657_500..=3_692_500 => (Band::Ghz3_6, stepped(frequency_khz, 3_002_500, 131, 138)?),
        5_160_000..=5_885_000 => (Band::Ghz5, stepped(frequency_khz, 5_000_000, 32, 177)?),
        5_955_000..=7_115_000 => (Band::Ghz6, stepped(frequency_khz, 5_950_000, 1, 233)?),
        _ => return None,
    };
    Some(Channel { band, number })
}
