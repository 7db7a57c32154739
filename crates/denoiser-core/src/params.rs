use std::fmt;

use crate::error::{Result, TextureError};

/// Default side length of the square texture, in pixels.
pub const DEFAULT_SIZE: usize = 1024;

/// Per-column shrink factor for the noise weight in the decay region.
/// Always strictly inside (0, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayFactor(f64);

impl DecayFactor {
    /// Used whenever no usable value is supplied.
    pub const DEFAULT: DecayFactor = DecayFactor(0.994);

    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value > 0.0 && value < 1.0 {
            Ok(Self(value))
        } else {
            Err(TextureError::InvalidDecay(value))
        }
    }

    /// Resolve an optional raw command-line value.
    ///
    /// Missing input gives the default silently. Text that does not parse as
    /// a float, or a float outside (0, 1), also gives the default, with a
    /// warning logged.
    pub fn from_arg(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::DEFAULT;
        };
        match raw.trim().parse::<f64>() {
            Ok(v) => Self::new(v).unwrap_or_else(|e| {
                tracing::warn!("{e}; using default {}", Self::DEFAULT);
                Self::DEFAULT
            }),
            Err(e) => {
                tracing::warn!("cannot parse decay factor {raw:?} ({e}); using default {}", Self::DEFAULT);
                Self::DEFAULT
            }
        }
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for DecayFactor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for DecayFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureParams {
    /// Side length in pixels (width = height). Default 1024.
    pub size: usize,
    /// Noise-weight decay per decay-region column. Default 0.994.
    pub decay: DecayFactor,
    /// Fixed RNG seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for TextureParams {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            decay: DecayFactor::DEFAULT,
            seed: None,
        }
    }
}

impl TextureParams {
    pub fn with_decay(decay: DecayFactor) -> Self {
        Self { decay, ..Self::default() }
    }

    /// Check the parameters once before generation.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(TextureError::EmptyImage);
        }
        if u32::try_from(self.size).is_err() {
            return Err(TextureError::TooLarge(self.size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_uses_default() {
        assert_eq!(DecayFactor::from_arg(None), DecayFactor::DEFAULT);
        assert_eq!(DecayFactor::DEFAULT.get(), 0.994);
    }

    #[test]
    fn malformed_argument_falls_back() {
        for raw in ["", "abc", "0.9x", "nan", "inf"] {
            assert_eq!(DecayFactor::from_arg(Some(raw)), DecayFactor::DEFAULT, "raw={raw:?}");
        }
    }

    #[test]
    fn out_of_range_argument_falls_back() {
        for raw in ["0", "1", "1.5", "-0.3"] {
            assert_eq!(DecayFactor::from_arg(Some(raw)), DecayFactor::DEFAULT, "raw={raw:?}");
        }
    }

    #[test]
    fn valid_argument_is_kept() {
        assert_eq!(DecayFactor::from_arg(Some("0.98")).get(), 0.98);
        assert_eq!(DecayFactor::from_arg(Some(" 0.5 ")).get(), 0.5);
    }

    #[test]
    fn explicit_construction_rejects_out_of_range() {
        assert!(matches!(DecayFactor::new(1.0), Err(TextureError::InvalidDecay(_))));
        assert!(matches!(DecayFactor::new(0.0), Err(TextureError::InvalidDecay(_))));
        assert!(DecayFactor::new(0.5).is_ok());
    }

    #[test]
    fn validate_rejects_zero_size() {
        let p = TextureParams { size: 0, ..TextureParams::default() };
        assert!(matches!(p.validate(), Err(TextureError::EmptyImage)));
        assert!(TextureParams::default().validate().is_ok());
    }
}
