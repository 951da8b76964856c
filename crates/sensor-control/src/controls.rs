//! Control graph
//!
//! Tracks the value and legal range of every exposed control and propagates
//! dependent updates. Changing vertical blanking moves the exposure ceiling
//! and clamps the current exposure into it.
//!
//! The graph itself does no register I/O. [`ControlGraph::set`] returns the
//! controls whose hardware value must be written, in write order.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PreconditionError, RangeError, SensorError};
use crate::mode::Mode;

/// Identifier of an exposed control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlId {
    Exposure,
    AnalogGain,
    DigitalGain,
    HorizontalBlank,
    VerticalBlank,
    TestPattern,
    HorizontalFlip,
    VerticalFlip,
}

impl ControlId {
    pub const ALL: [ControlId; 8] = [
        ControlId::Exposure,
        ControlId::AnalogGain,
        ControlId::DigitalGain,
        ControlId::HorizontalBlank,
        ControlId::VerticalBlank,
        ControlId::TestPattern,
        ControlId::HorizontalFlip,
        ControlId::VerticalFlip,
    ];

    const fn index(self) -> usize {
        match self {
            ControlId::Exposure => 0,
            ControlId::AnalogGain => 1,
            ControlId::DigitalGain => 2,
            ControlId::HorizontalBlank => 3,
            ControlId::VerticalBlank => 4,
            ControlId::TestPattern => 5,
            ControlId::HorizontalFlip => 6,
            ControlId::VerticalFlip => 7,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ControlId::Exposure => "exposure",
            ControlId::AnalogGain => "analog_gain",
            ControlId::DigitalGain => "digital_gain",
            ControlId::HorizontalBlank => "hblank",
            ControlId::VerticalBlank => "vblank",
            ControlId::TestPattern => "test_pattern",
            ControlId::HorizontalFlip => "hflip",
            ControlId::VerticalFlip => "vflip",
        }
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A control write request, or a hardware write produced by one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Control {
    /// Integration time in lines
    Exposure(u32),
    AnalogGain(u32),
    DigitalGain(u32),
    HorizontalBlank(u32),
    VerticalBlank(u32),
    /// Menu index, 0 disables the pattern
    TestPattern(u32),
    HorizontalFlip(bool),
    VerticalFlip(bool),
}

impl Control {
    pub const fn id(self) -> ControlId {
        match self {
            Control::Exposure(_) => ControlId::Exposure,
            Control::AnalogGain(_) => ControlId::AnalogGain,
            Control::DigitalGain(_) => ControlId::DigitalGain,
            Control::HorizontalBlank(_) => ControlId::HorizontalBlank,
            Control::VerticalBlank(_) => ControlId::VerticalBlank,
            Control::TestPattern(_) => ControlId::TestPattern,
            Control::HorizontalFlip(_) => ControlId::HorizontalFlip,
            Control::VerticalFlip(_) => ControlId::VerticalFlip,
        }
    }

    pub const fn raw(self) -> u32 {
        match self {
            Control::Exposure(v)
            | Control::AnalogGain(v)
            | Control::DigitalGain(v)
            | Control::HorizontalBlank(v)
            | Control::VerticalBlank(v)
            | Control::TestPattern(v) => v,
            Control::HorizontalFlip(on) | Control::VerticalFlip(on) => on as u32,
        }
    }

    pub const fn from_raw(id: ControlId, value: u32) -> Self {
        match id {
            ControlId::Exposure => Control::Exposure(value),
            ControlId::AnalogGain => Control::AnalogGain(value),
            ControlId::DigitalGain => Control::DigitalGain(value),
            ControlId::HorizontalBlank => Control::HorizontalBlank(value),
            ControlId::VerticalBlank => Control::VerticalBlank(value),
            ControlId::TestPattern => Control::TestPattern(value),
            ControlId::HorizontalFlip => Control::HorizontalFlip(value != 0),
            ControlId::VerticalFlip => Control::VerticalFlip(value != 0),
        }
    }
}

/// Legal values of a control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub default: u32,
}

impl ControlRange {
    pub const fn new(min: u32, max: u32, step: u32, default: u32) -> Self {
        Self {
            min,
            max,
            step,
            default,
        }
    }

    pub const fn fixed(value: u32) -> Self {
        Self::new(value, value, 1, value)
    }

    /// Whether `value` lies within `[min, max]`. `step` is advisory.
    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }

    fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }
}

/// Chip-declared control limits, independent of the active mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlLimits {
    pub exposure_min: u32,
    pub exposure_step: u32,
    /// Lines between the exposure ceiling and the frame length
    pub exposure_margin: u32,
    pub analog_gain: ControlRange,
    pub digital_gain: Option<ControlRange>,
    /// Minimum frame length; the mode's default frame length when `None`
    pub vts_min: Option<u32>,
    pub vts_max: u32,
    /// Test pattern menu entries, including "disabled"
    pub test_patterns: u32,
    pub flip: bool,
}

/// Mirror and flip state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlipBits(u8);

impl FlipBits {
    pub const MIRROR: u8 = 1 << 0;
    pub const FLIP: u8 = 1 << 1;

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & (Self::MIRROR | Self::FLIP))
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn mirror(self) -> bool {
        self.0 & Self::MIRROR != 0
    }

    pub const fn flip(self) -> bool {
        self.0 & Self::FLIP != 0
    }

    fn set(&mut self, bit: u8, on: bool) {
        if on {
            self.0 |= bit;
        } else {
            self.0 &= !bit;
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    range: ControlRange,
    value: u32,
    read_only: bool,
}

impl Slot {
    fn new(range: ControlRange) -> Self {
        Self {
            range,
            value: range.default,
            read_only: false,
        }
    }
}

/// Controls replayed to hardware when streaming starts, in write order
const SETUP_ORDER: [ControlId; 5] = [
    ControlId::VerticalBlank,
    ControlId::Exposure,
    ControlId::AnalogGain,
    ControlId::DigitalGain,
    ControlId::TestPattern,
];

/// Current values and ranges of every control a sensor exposes
#[derive(Debug, Clone)]
pub struct ControlGraph {
    slots: [Option<Slot>; ControlId::ALL.len()],
    limits: ControlLimits,
    frame_height: u32,
    flip: FlipBits,
}

impl ControlGraph {
    /// Build the graph for `limits` with ranges derived from `mode`
    pub fn new(limits: ControlLimits, mode: &Mode) -> Self {
        let mut slots = [None; ControlId::ALL.len()];

        let mut hblank = Slot::new(ControlRange::fixed(mode.hblank()));
        hblank.read_only = true;
        slots[ControlId::HorizontalBlank.index()] = Some(hblank);

        let vblank = vblank_range(&limits, mode);
        slots[ControlId::VerticalBlank.index()] = Some(Slot::new(vblank));

        let exposure_max = (mode.height + vblank.default).saturating_sub(limits.exposure_margin);
        slots[ControlId::Exposure.index()] = Some(Slot::new(exposure_range(
            &limits,
            exposure_max,
            mode.exposure_default,
        )));

        slots[ControlId::AnalogGain.index()] = Some(Slot::new(limits.analog_gain));
        if let Some(range) = limits.digital_gain {
            slots[ControlId::DigitalGain.index()] = Some(Slot::new(range));
        }
        if limits.test_patterns > 0 {
            slots[ControlId::TestPattern.index()] = Some(Slot::new(ControlRange::new(
                0,
                limits.test_patterns - 1,
                1,
                0,
            )));
        }
        if limits.flip {
            let range = ControlRange::new(0, 1, 1, 0);
            slots[ControlId::HorizontalFlip.index()] = Some(Slot::new(range));
            slots[ControlId::VerticalFlip.index()] = Some(Slot::new(range));
        }

        Self {
            slots,
            limits,
            frame_height: mode.height,
            flip: FlipBits::default(),
        }
    }

    /// Whether the sensor exposes `id`
    pub fn supports(&self, id: ControlId) -> bool {
        self.slots[id.index()].is_some()
    }

    pub fn value(&self, id: ControlId) -> Result<u32, SensorError> {
        Ok(self.slot(id)?.value)
    }

    pub fn range(&self, id: ControlId) -> Result<ControlRange, SensorError> {
        Ok(self.slot(id)?.range)
    }

    pub fn flip(&self) -> FlipBits {
        self.flip
    }

    pub fn frame_height(&self) -> u32 {
        self.frame_height
    }

    /// Validate and store `control`.
    ///
    /// Returns the hardware writes the change requires, in order. A rejected
    /// request leaves every stored value untouched.
    pub fn set(&mut self, control: Control) -> Result<Vec<Control>, SensorError> {
        let id = control.id();
        let value = control.raw();
        let slot = self.slot_mut(id)?;
        if slot.read_only {
            return Err(PreconditionError::ReadOnlyControl(id).into());
        }
        if !slot.range.contains(value) {
            return Err(RangeError {
                control: id,
                value,
                min: slot.range.min,
                max: slot.range.max,
            }
            .into());
        }
        slot.value = value;

        let mut effects = Vec::with_capacity(2);
        match control {
            Control::VerticalBlank(vblank) => {
                if let Some(exposure) = self.propagate_vblank(vblank) {
                    effects.push(Control::Exposure(exposure));
                }
                effects.push(control);
            }
            Control::HorizontalFlip(on) => self.flip.set(FlipBits::MIRROR, on),
            Control::VerticalFlip(on) => self.flip.set(FlipBits::FLIP, on),
            _ => effects.push(control),
        }
        Ok(effects)
    }

    /// Re-derive mode-dependent ranges after a mode switch.
    ///
    /// Vertical blanking keeps its value when still legal and is clamped
    /// otherwise; exposure follows the resulting frame length.
    pub fn retune(&mut self, mode: &Mode) {
        self.frame_height = mode.height;

        if let Some(hblank) = self.slots[ControlId::HorizontalBlank.index()].as_mut() {
            hblank.range = ControlRange::fixed(mode.hblank());
            hblank.value = hblank.range.default;
        }

        let vblank = match self.slots[ControlId::VerticalBlank.index()].as_mut() {
            Some(slot) => {
                slot.range = vblank_range(&self.limits, mode);
                slot.value = slot.range.clamp(slot.value);
                slot.value
            }
            None => return,
        };

        if let Some(exposure) = self.slots[ControlId::Exposure.index()].as_mut() {
            exposure.range.default = mode.exposure_default;
        }
        self.propagate_vblank(vblank);
    }

    /// Current values of the controls replayed when streaming starts
    pub fn setup_controls(&self) -> Vec<Control> {
        SETUP_ORDER
            .iter()
            .filter_map(|&id| {
                self.slots[id.index()]
                    .as_ref()
                    .map(|slot| Control::from_raw(id, slot.value))
            })
            .collect()
    }

    /// Move the exposure ceiling for a new frame length. Returns the new
    /// exposure when the current one had to be clamped.
    fn propagate_vblank(&mut self, vblank: u32) -> Option<u32> {
        let ceiling = (self.frame_height + vblank).saturating_sub(self.limits.exposure_margin);
        let exposure = self.slots[ControlId::Exposure.index()].as_mut()?;

        exposure.range = exposure_range(&self.limits, ceiling, exposure.range.default);
        if exposure.value > exposure.range.max {
            exposure.value = exposure.range.max;
            return Some(exposure.value);
        }
        None
    }

    fn slot(&self, id: ControlId) -> Result<&Slot, SensorError> {
        self.slots[id.index()]
            .as_ref()
            .ok_or_else(|| PreconditionError::UnsupportedControl(id).into())
    }

    fn slot_mut(&mut self, id: ControlId) -> Result<&mut Slot, SensorError> {
        self.slots[id.index()]
            .as_mut()
            .ok_or_else(|| PreconditionError::UnsupportedControl(id).into())
    }
}

fn vblank_range(limits: &ControlLimits, mode: &Mode) -> ControlRange {
    let vts_min = limits.vts_min.unwrap_or(mode.vts_default);
    let min = vts_min.saturating_sub(mode.height);
    let max = limits.vts_max.saturating_sub(mode.height).max(min);
    let default = mode.vts_default.saturating_sub(mode.height).clamp(min, max);
    ControlRange::new(min, max, 1, default)
}

fn exposure_range(limits: &ControlLimits, ceiling: u32, default: u32) -> ControlRange {
    let max = ceiling.max(limits.exposure_min);
    ControlRange::new(
        limits.exposure_min,
        max,
        limits.exposure_step,
        default.clamp(limits.exposure_min, max),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::FrameInterval;
    use proptest::prelude::*;

    const LIMITS: ControlLimits = ControlLimits {
        exposure_min: 4,
        exposure_step: 1,
        exposure_margin: 4,
        analog_gain: ControlRange::new(16, 248, 1, 16),
        digital_gain: Some(ControlRange::new(256, 1023, 1, 256)),
        vts_min: Some(0x322),
        vts_max: 0x7fff,
        test_patterns: 5,
        flip: false,
    };

    const MODE_720P: Mode = Mode {
        width: 1280,
        height: 720,
        frame_interval: FrameInterval::new(10_000, 300_000),
        hts_default: 0x5c6,
        vts_default: 0x322,
        exposure_default: 0x131,
        register_sequence: &[],
    };

    fn graph() -> ControlGraph {
        ControlGraph::new(LIMITS, &MODE_720P)
    }

    #[test]
    fn test_initial_ranges() {
        let g = graph();

        let hblank = g.range(ControlId::HorizontalBlank).unwrap();
        assert_eq!((hblank.min, hblank.max), (198, 198));

        let vblank = g.range(ControlId::VerticalBlank).unwrap();
        assert_eq!((vblank.min, vblank.max, vblank.default), (82, 0x7fff - 720, 82));

        let exposure = g.range(ControlId::Exposure).unwrap();
        assert_eq!((exposure.min, exposure.max), (4, 798));
        assert_eq!(g.value(ControlId::Exposure).unwrap(), 0x131);
        assert_eq!(g.value(ControlId::AnalogGain).unwrap(), 16);
        assert_eq!(g.value(ControlId::DigitalGain).unwrap(), 256);
        assert_eq!(g.range(ControlId::TestPattern).unwrap().max, 4);
        assert!(!g.supports(ControlId::HorizontalFlip));
    }

    #[test]
    fn test_plain_write_passes_through() {
        let mut g = graph();
        assert_eq!(
            g.set(Control::AnalogGain(64)).unwrap(),
            vec![Control::AnalogGain(64)]
        );
        assert_eq!(g.value(ControlId::AnalogGain).unwrap(), 64);
    }

    #[test]
    fn test_out_of_range_rejected_and_state_kept() {
        let mut g = graph();
        let err = g.set(Control::AnalogGain(249)).unwrap_err();
        assert!(matches!(
            err,
            SensorError::Range(RangeError {
                control: ControlId::AnalogGain,
                value: 249,
                min: 16,
                max: 248
            })
        ));
        assert_eq!(g.value(ControlId::AnalogGain).unwrap(), 16);

        assert!(g.set(Control::Exposure(799)).is_err());
        assert!(g.set(Control::Exposure(3)).is_err());
        assert_eq!(g.value(ControlId::Exposure).unwrap(), 0x131);
    }

    #[test]
    fn test_read_only_and_unsupported_rejected() {
        let mut g = graph();
        assert!(matches!(
            g.set(Control::HorizontalBlank(198)),
            Err(SensorError::Precondition(PreconditionError::ReadOnlyControl(
                ControlId::HorizontalBlank
            )))
        ));
        assert!(matches!(
            g.set(Control::VerticalFlip(true)),
            Err(SensorError::Precondition(PreconditionError::UnsupportedControl(
                ControlId::VerticalFlip
            )))
        ));
    }

    #[test]
    fn test_vblank_shrink_clamps_exposure_first() {
        let mut g = graph();
        g.set(Control::VerticalBlank(1000)).unwrap();
        g.set(Control::Exposure(1500)).unwrap();

        let effects = g.set(Control::VerticalBlank(82)).unwrap();
        assert_eq!(
            effects,
            vec![Control::Exposure(798), Control::VerticalBlank(82)]
        );
        assert_eq!(g.value(ControlId::Exposure).unwrap(), 798);
        assert_eq!(g.range(ControlId::Exposure).unwrap().max, 798);
    }

    #[test]
    fn test_vblank_growth_keeps_exposure() {
        let mut g = graph();
        let effects = g.set(Control::VerticalBlank(1000)).unwrap();
        assert_eq!(effects, vec![Control::VerticalBlank(1000)]);
        assert_eq!(g.value(ControlId::Exposure).unwrap(), 0x131);
        assert_eq!(g.range(ControlId::Exposure).unwrap().max, 720 + 1000 - 4);
    }

    #[test]
    fn test_flip_updates_bits_without_writes() {
        let mut g = ControlGraph::new(
            ControlLimits {
                flip: true,
                ..LIMITS
            },
            &MODE_720P,
        );

        assert!(g.set(Control::HorizontalFlip(true)).unwrap().is_empty());
        assert!(g.set(Control::VerticalFlip(true)).unwrap().is_empty());
        assert_eq!(g.flip().bits(), FlipBits::MIRROR | FlipBits::FLIP);

        g.set(Control::HorizontalFlip(false)).unwrap();
        assert!(!g.flip().mirror());
        assert!(g.flip().flip());
        assert_eq!(g.value(ControlId::HorizontalFlip).unwrap(), 0);
    }

    #[test]
    fn test_setup_controls_order() {
        let g = graph();
        assert_eq!(
            g.setup_controls(),
            vec![
                Control::VerticalBlank(82),
                Control::Exposure(0x131),
                Control::AnalogGain(16),
                Control::DigitalGain(256),
                Control::TestPattern(0),
            ]
        );
    }

    #[test]
    fn test_setup_controls_skip_absent() {
        let g = ControlGraph::new(
            ControlLimits {
                digital_gain: None,
                test_patterns: 0,
                ..LIMITS
            },
            &MODE_720P,
        );
        let ids: Vec<_> = g.setup_controls().iter().map(|c| c.id()).collect();
        assert_eq!(
            ids,
            vec![
                ControlId::VerticalBlank,
                ControlId::Exposure,
                ControlId::AnalogGain
            ]
        );
    }

    #[test]
    fn test_retune_to_taller_mode() {
        const TALL: Mode = Mode {
            width: 1280,
            height: 960,
            vts_default: 1000,
            exposure_default: 0x200,
            ..MODE_720P
        };
        let limits = ControlLimits {
            vts_min: None,
            ..LIMITS
        };
        let mut g = ControlGraph::new(limits, &MODE_720P);
        g.set(Control::Exposure(700)).unwrap();

        g.retune(&TALL);
        assert_eq!(g.frame_height(), 960);
        let vblank = g.range(ControlId::VerticalBlank).unwrap();
        assert_eq!((vblank.min, vblank.default), (40, 40));
        // previous vblank of 82 is still legal
        assert_eq!(g.value(ControlId::VerticalBlank).unwrap(), 82);
        assert_eq!(g.range(ControlId::Exposure).unwrap().max, 960 + 82 - 4);
        assert_eq!(g.range(ControlId::Exposure).unwrap().default, 0x200);
        assert_eq!(g.value(ControlId::Exposure).unwrap(), 700);
        assert_eq!(g.value(ControlId::HorizontalBlank).unwrap(), 198);
    }

    #[test]
    fn test_retune_clamps_vblank_and_exposure() {
        const SHORT: Mode = Mode {
            width: 640,
            height: 480,
            hts_default: 0x5c6,
            vts_default: 500,
            exposure_default: 0x100,
            ..MODE_720P
        };
        let limits = ControlLimits {
            vts_min: None,
            vts_max: 1000,
            ..LIMITS
        };
        let mut g = ControlGraph::new(limits, &MODE_720P);
        g.set(Control::VerticalBlank(280)).unwrap();
        g.set(Control::Exposure(990)).unwrap();

        g.retune(&SHORT);
        assert_eq!(g.value(ControlId::VerticalBlank).unwrap(), 280);
        assert_eq!(g.value(ControlId::Exposure).unwrap(), 480 + 280 - 4);
        assert_eq!(g.value(ControlId::HorizontalBlank).unwrap(), 0x5c6 - 640);
    }

    #[test]
    fn test_range_bounds_inclusive() {
        let range = ControlRange::new(4, 100, 4, 4);
        assert!(range.contains(4));
        assert!(range.contains(9));
        assert!(range.contains(100));
        assert!(!range.contains(3));
        assert!(!range.contains(101));
        assert!(ControlRange::fixed(7).contains(7));
    }

    #[test]
    fn test_raised_vts_min_moves_exposure_ceiling() {
        let limits = ControlLimits {
            vts_min: Some(1000),
            ..LIMITS
        };
        let g = ControlGraph::new(limits, &MODE_720P);

        let vblank = g.range(ControlId::VerticalBlank).unwrap();
        assert_eq!((vblank.min, vblank.default), (280, 280));
        assert_eq!(g.value(ControlId::VerticalBlank).unwrap(), 280);
        assert_eq!(g.range(ControlId::Exposure).unwrap().max, 720 + 280 - 4);
    }

    proptest! {
        #[test]
        fn prop_every_control_reads_back(seeds in prop::array::uniform8(any::<u32>())) {
            let mut g = ControlGraph::new(
                ControlLimits {
                    flip: true,
                    ..LIMITS
                },
                &MODE_720P,
            );

            for (id, seed) in ControlId::ALL.into_iter().zip(seeds) {
                if id == ControlId::HorizontalBlank {
                    continue;
                }
                let range = g.range(id).unwrap();
                let value = range.min + seed % (range.max - range.min + 1);
                g.set(Control::from_raw(id, value)).unwrap();
                prop_assert_eq!(g.value(id).unwrap(), value);

                // flips are booleans and cannot leave their range
                if matches!(id, ControlId::HorizontalFlip | ControlId::VerticalFlip) {
                    continue;
                }
                let rejected = g.set(Control::from_raw(id, range.max + 1));
                prop_assert!(matches!(rejected, Err(SensorError::Range(_))));
                if range.min > 0 {
                    let rejected = g.set(Control::from_raw(id, range.min - 1));
                    prop_assert!(matches!(rejected, Err(SensorError::Range(_))));
                }
                prop_assert_eq!(g.value(id).unwrap(), value);
            }
        }

        #[test]
        fn prop_exposure_never_exceeds_frame(
            writes in prop::collection::vec((any::<bool>(), 0u32..40_000), 1..32)
        ) {
            let mut g = graph();
            for (is_vblank, value) in writes {
                let request = if is_vblank {
                    Control::VerticalBlank(value)
                } else {
                    Control::Exposure(value)
                };
                let _ = g.set(request);

                let vblank = g.value(ControlId::VerticalBlank).unwrap();
                let exposure = g.value(ControlId::Exposure).unwrap();
                let range = g.range(ControlId::Exposure).unwrap();
                prop_assert!(exposure <= 720 + vblank - 4);
                prop_assert!(exposure >= range.min && exposure <= range.max);
            }
        }
    }
}
