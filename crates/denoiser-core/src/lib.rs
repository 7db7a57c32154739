//! Procedural "denoiser" icon texture: noisy speckle on the left blending
//! into clean vertical stripes on the right.

pub mod blend;
pub mod error;
pub mod export;
pub mod generator;
pub mod grid;
pub mod params;
pub mod regions;
pub mod signal;

pub use error::{Result, TextureError};
pub use export::{write_png, OUTPUT_FILE};
pub use generator::{Texture, TextureGenerator};
pub use params::{DecayFactor, TextureParams};
