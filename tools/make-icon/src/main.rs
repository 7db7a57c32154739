/// Icon generator: writes the denoiser texture to `denoiser.png` in the
/// working directory.
///
/// Usage: `make-icon [DECAY]`, where DECAY is the per-column noise decay in
/// (0, 1). Anything missing or unusable falls back to 0.994.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use denoiser_core::{write_png, DecayFactor, TextureGenerator, TextureParams, OUTPUT_FILE};

#[derive(Parser, Debug)]
#[command(name = "make-icon", about = "Render the denoiser icon texture to denoiser.png")]
struct Args {
    /// Noise decay per column across the blend region, in (0, 1). Default 0.994.
    ///
    /// Kept as raw text so a malformed value falls back instead of aborting.
    #[arg(allow_hyphen_values = true)]
    decay: Option<String>,
}

/// Generate the texture for `args` and write it into `out_dir`.
fn run(args: &Args, out_dir: &Path) -> Result<PathBuf> {
    let decay = DecayFactor::from_arg(args.decay.as_deref());
    let params = TextureParams::with_decay(decay);
    tracing::info!("Generating {0}×{0} texture, decay {1}", params.size, params.decay);

    let texture = TextureGenerator::new()
        .generate(&params)
        .context("texture generation failed")?;

    let path = out_dir.join(OUTPUT_FILE);
    write_png(&texture.grid, &path).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let path = run(&args, Path::new("."))?;
    tracing::info!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("make-icon").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn accepts_zero_or_one_positional() {
        assert_eq!(parse(&[]).decay, None);
        assert_eq!(parse(&["0.98"]).decay.as_deref(), Some("0.98"));
        assert_eq!(parse(&["-0.3"]).decay.as_deref(), Some("-0.3"));
        assert!(Args::try_parse_from(["make-icon", "0.9", "0.8"]).is_err());
    }

    #[test]
    fn malformed_decay_still_writes_icon() {
        let dir = tempfile::tempdir().unwrap();
        let path = run(&parse(&["not-a-number"]), dir.path()).unwrap();
        assert_eq!(path, dir.path().join("denoiser.png"));

        let img = image::open(&path).unwrap();
        assert_eq!(img.color(), image::ColorType::L8);
        assert_eq!((img.width(), img.height()), (1024, 1024));
    }
}
