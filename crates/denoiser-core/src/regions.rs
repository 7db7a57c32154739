//! Column regions of the texture.
//!
//! The width is split at `2W/5` and `4W/5` (floor division) into three
//! contiguous ranges:
//!   A. speckle: noise with a faint stripe added on top
//!   B. decay:   noise/stripe blend whose noise weight shrinks every column
//!   C. frozen:  blend held at whatever weight B finished with

use std::ops::Range;

/// Which blend rule applies to a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Speckle,
    Decay,
    Frozen,
}

/// Column boundaries for a texture of a given width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionBounds {
    pub width: usize,
    /// First column of the decay region.
    pub decay_start: usize,
    /// First column of the frozen region.
    pub frozen_start: usize,
}

impl RegionBounds {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            decay_start: 2 * width / 5,
            frozen_start: 4 * width / 5,
        }
    }

    pub fn speckle(&self) -> Range<usize> {
        0..self.decay_start
    }

    pub fn decay(&self) -> Range<usize> {
        self.decay_start..self.frozen_start
    }

    pub fn frozen(&self) -> Range<usize> {
        self.frozen_start..self.width
    }

    /// Ranges in column order.
    pub fn ranges(&self) -> [(Region, Range<usize>); 3] {
        [
            (Region::Speckle, self.speckle()),
            (Region::Decay, self.decay()),
            (Region::Frozen, self.frozen()),
        ]
    }

    #[inline]
    pub fn region_of(&self, col: usize) -> Region {
        if col < self.decay_start {
            Region::Speckle
        } else if col < self.frozen_start {
            Region::Decay
        } else {
            Region::Frozen
        }
    }
}
