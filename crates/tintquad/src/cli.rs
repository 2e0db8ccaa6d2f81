use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tintquad", author, version, about = "Hue-cycling quad demo")]
pub struct Cli {
    /// Override the window size (e.g. `640x480`).
    #[arg(long, value_name = "WIDTHxHEIGHT")]
    pub size: Option<String>,

    /// Optional FPS cap (0 = render every vsync callback).
    #[arg(long, value_name = "FPS")]
    pub fps: Option<f32>,

    /// Vertex shader path override.
    #[arg(long, value_name = "PATH")]
    pub vert: Option<PathBuf>,

    /// Fragment shader path override.
    #[arg(long, value_name = "PATH")]
    pub frag: Option<PathBuf>,
}

pub fn parse() -> Cli {
    Cli::parse()
}

pub fn parse_surface_size(spec: &str) -> Result<(u32, u32)> {
    let trimmed = spec.trim();
    let (width, height) = trimmed
        .split_once(['x', 'X', '×'])
        .ok_or_else(|| anyhow::anyhow!("expected WxH format, e.g. 640x480"))?;

    let width: u32 = width
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid width in size specification"))?;
    let height: u32 = height
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid height in size specification"))?;

    if width == 0 || height == 0 {
        anyhow::bail!("surface dimensions must be greater than zero");
    }

    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_surface_sizes() {
        assert_eq!(parse_surface_size("640x480").unwrap(), (640, 480));
        assert_eq!(parse_surface_size(" 1920 X 1080 ").unwrap(), (1920, 1080));
        assert!(parse_surface_size("640").is_err());
        assert!(parse_surface_size("0x480").is_err());
        assert!(parse_surface_size("640xabc").is_err());
    }
}
