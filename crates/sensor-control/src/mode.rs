//! Sensor modes and best-fit selection

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::channel::RegVal;

/// Frame interval as a fraction of a second
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameInterval {
    pub numerator: u32,
    pub denominator: u32,
}

impl FrameInterval {
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Frames per second
    pub fn fps(&self) -> f64 {
        if self.numerator == 0 {
            return 0.0;
        }
        f64::from(self.denominator) / f64::from(self.numerator)
    }
}

/// One fixed sensor configuration
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Mode {
    pub width: u32,
    pub height: u32,
    pub frame_interval: FrameInterval,
    /// Default line length in pixel clocks
    pub hts_default: u32,
    /// Default frame length in lines
    pub vts_default: u32,
    pub exposure_default: u32,
    /// Registers that switch the chip into this mode
    pub register_sequence: &'static [RegVal],
}

impl Mode {
    /// Horizontal blanking implied by the default line length
    pub fn hblank(&self) -> u32 {
        self.hts_default.saturating_sub(self.width)
    }

    /// Manhattan distance to a requested resolution
    pub fn distance(&self, width: u32, height: u32) -> u32 {
        self.width.abs_diff(width) + self.height.abs_diff(height)
    }
}

impl fmt::Debug for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mode")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("frame_interval", &self.frame_interval)
            .field("hts_default", &self.hts_default)
            .field("vts_default", &self.vts_default)
            .field("exposure_default", &self.exposure_default)
            .field("register_sequence", &self.register_sequence.len())
            .finish()
    }
}

/// Pick the mode closest to `width` x `height`.
///
/// Closeness is `|w - width| + |h - height|`; on ties the earliest mode wins.
/// Returns `None` only for an empty catalogue.
pub fn find_best_fit(modes: &[Mode], width: u32, height: u32) -> Option<&Mode> {
    modes.iter().min_by_key(|mode| mode.distance(width, height))
}

/// Modes supported for one data-lane count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalogue {
    pub lanes: u32,
    pub modes: &'static [Mode],
}

/// Non-empty mode catalogue selected for a sensor instance
#[derive(Debug, Clone, Copy)]
pub struct ModeTable {
    modes: &'static [Mode],
    default: &'static Mode,
}

impl ModeTable {
    pub fn new(modes: &'static [Mode]) -> Option<Self> {
        let (default, _) = modes.split_first()?;
        Some(Self { modes, default })
    }

    /// Select the catalogue declared for `lanes` data lanes
    pub fn resolve(catalogues: &'static [Catalogue], lanes: u32) -> Option<Self> {
        catalogues
            .iter()
            .find(|catalogue| catalogue.lanes == lanes)
            .and_then(|catalogue| Self::new(catalogue.modes))
    }

    pub fn modes(&self) -> &'static [Mode] {
        self.modes
    }

    /// First catalogue entry, active after attach
    pub fn default_mode(&self) -> &'static Mode {
        self.default
    }

    pub fn find_best_fit(&self, width: u32, height: u32) -> &'static Mode {
        find_best_fit(self.modes, width, height).unwrap_or(self.default)
    }
}

/// Media bus pixel code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BusFormat {
    /// 10-bit Bayer, BGGR order
    Sbggr10_1x10,
    /// 10-bit Bayer, GRBG order
    Sgrbg10_1x10,
}

impl BusFormat {
    /// Numeric media bus code
    pub const fn code(self) -> u32 {
        match self {
            BusFormat::Sbggr10_1x10 => 0x3007,
            BusFormat::Sgrbg10_1x10 => 0x300a,
        }
    }

    pub const fn bits_per_sample(self) -> u32 {
        10
    }
}

/// Active frame format reported to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Format {
    pub width: u32,
    pub height: u32,
    pub code: BusFormat,
}

impl Format {
    pub fn from_mode(mode: &Mode, code: BusFormat) -> Self {
        Self {
            width: mode.width,
            height: mode.height,
            code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const fn mode(width: u32, height: u32) -> Mode {
        Mode {
            width,
            height,
            frame_interval: FrameInterval::new(10_000, 300_000),
            hts_default: width + 198,
            vts_default: height + 82,
            exposure_default: 0x131,
            register_sequence: &[],
        }
    }

    static MODES: [Mode; 3] = [mode(2592, 1944), mode(1280, 720), mode(640, 480)];
    static TIED: [Mode; 2] = [mode(1000, 1000), mode(1200, 1000)];

    #[test]
    fn test_exact_match_selected() {
        let table = ModeTable::new(&MODES).unwrap();
        assert_eq!(table.find_best_fit(1280, 720).width, 1280);
        assert_eq!(table.find_best_fit(640, 480).height, 480);
    }

    #[test]
    fn test_nearest_mode_selected() {
        let table = ModeTable::new(&MODES).unwrap();
        let fit = table.find_best_fit(1920, 1080);
        assert_eq!((fit.width, fit.height), (1280, 720));
    }

    #[test]
    fn test_single_mode_catalogue_always_wins() {
        let table = ModeTable::new(&MODES[1..2]).unwrap();
        let fit = table.find_best_fit(1920, 1080);
        assert_eq!((fit.width, fit.height), (1280, 720));
        assert_eq!(fit.distance(1920, 1080), 1000);
        assert_eq!(table.find_best_fit(1280, 720).distance(1280, 720), 0);
        assert_eq!(table.find_best_fit(0, 0).width, 1280);
    }

    #[test]
    fn test_tie_keeps_first_mode() {
        let table = ModeTable::new(&TIED).unwrap();
        assert_eq!(table.find_best_fit(1100, 1000).width, 1000);
    }

    #[test]
    fn test_empty_catalogue() {
        assert!(ModeTable::new(&[]).is_none());
        assert!(find_best_fit(&[], 640, 480).is_none());
    }

    #[test]
    fn test_resolve_by_lane_count() {
        static CATALOGUES: [Catalogue; 2] = [
            Catalogue {
                lanes: 1,
                modes: &[],
            },
            Catalogue {
                lanes: 2,
                modes: &MODES,
            },
        ];

        assert!(ModeTable::resolve(&CATALOGUES, 1).is_none());
        assert!(ModeTable::resolve(&CATALOGUES, 4).is_none());
        let table = ModeTable::resolve(&CATALOGUES, 2).unwrap();
        assert_eq!(table.default_mode().width, 2592);
        assert_eq!(table.modes().len(), 3);
    }

    #[test]
    fn test_mode_geometry() {
        let m = mode(1280, 720);
        assert_eq!(m.hblank(), 198);
        assert_eq!(m.distance(1300, 700), 40);
        assert!((m.frame_interval.fps() - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bus_codes() {
        assert_eq!(BusFormat::Sbggr10_1x10.code(), 0x3007);
        assert_eq!(BusFormat::Sgrbg10_1x10.code(), 0x300a);

        let format = Format::from_mode(&MODES[1], BusFormat::Sbggr10_1x10);
        assert_eq!((format.width, format.height), (1280, 720));
    }

    proptest! {
        #[test]
        fn prop_best_fit_is_minimal_and_earliest(
            sizes in prop::collection::vec((1u32..4096, 1u32..4096), 1..8),
            width in 0u32..8192,
            height in 0u32..8192,
        ) {
            let modes: Vec<Mode> = sizes.iter().map(|&(w, h)| mode(w, h)).collect();
            let fit = find_best_fit(&modes, width, height).unwrap();
            let best = fit.distance(width, height);
            let index = modes.iter().position(|m| std::ptr::eq(m, fit)).unwrap();

            for (i, m) in modes.iter().enumerate() {
                let d = m.distance(width, height);
                prop_assert!(d >= best);
                if i < index {
                    prop_assert!(d > best);
                }
            }
        }
    }
}
