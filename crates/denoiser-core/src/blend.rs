//! Noise/signal mixing per column.
//!
//! The noise weight `v` is threaded through the columns as an explicit
//! accumulator: it starts at 1, shrinks by the decay factor after each
//! decay-region column, and is held for the frozen region.

use crate::params::DecayFactor;
use crate::regions::{Region, RegionBounds};

/// Weight given to noise (vs. signal) in a blended column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixRatio(f64);

impl MixRatio {
    /// All noise, no signal.
    pub const START: MixRatio = MixRatio(1.0);

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn decayed(self, decay: DecayFactor) -> Self {
        Self(self.0 * decay.get())
    }
}

/// How a single column combines its stripe value with its noise samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnBlend {
    /// `noise + signal / 20`.
    Speckle,
    /// `signal · (1 − v) + noise · v`.
    Mix(MixRatio),
}

impl ColumnBlend {
    #[inline]
    pub fn apply(self, signal: f64, noise: f64) -> f64 {
        match self {
            ColumnBlend::Speckle => noise + signal / 20.0,
            ColumnBlend::Mix(v) => signal * (1.0 - v.get()) + noise * v.get(),
        }
    }
}

/// Advance the accumulator past one column.
///
/// Returns the blend to use for the column together with the ratio carried
/// into the next one. Only decay columns change the ratio, and they do so
/// after their own blend is fixed.
#[inline]
pub fn step(ratio: MixRatio, region: Region, decay: DecayFactor) -> (ColumnBlend, MixRatio) {
    match region {
        Region::Speckle => (ColumnBlend::Speckle, ratio),
        Region::Decay => (ColumnBlend::Mix(ratio), ratio.decayed(decay)),
        Region::Frozen => (ColumnBlend::Mix(ratio), ratio),
    }
}

/// The blend for every column, left to right.
pub fn blend_schedule(bounds: &RegionBounds, decay: DecayFactor) -> Vec<ColumnBlend> {
    (0..bounds.width)
        .scan(MixRatio::START, |ratio, col| {
            let (blend, next) = step(*ratio, bounds.region_of(col), decay);
            *ratio = next;
            Some(blend)
        })
        .collect()
}

/// Ratio left behind once the whole decay region has been traversed.
pub fn final_ratio(bounds: &RegionBounds, decay: DecayFactor) -> MixRatio {
    bounds
        .decay()
        .fold(MixRatio::START, |ratio, _| ratio.decayed(decay))
}
