//! Sensor Profiles
//!
//! Static [`ChipProfile`] descriptions for the supported camera sensors.

mod gc05a2;
mod ov9734;
mod tables;

pub use gc05a2::GC05A2;
pub use ov9734::OV9734;

use sensor_control::ChipProfile;

/// Every known profile
pub static PROFILES: [&ChipProfile; 2] = [&OV9734, &GC05A2];

/// Look up a profile by chip name
pub fn by_name(name: &str) -> Option<&'static ChipProfile> {
    PROFILES
        .iter()
        .copied()
        .find(|profile| profile.name.eq_ignore_ascii_case(name))
}
