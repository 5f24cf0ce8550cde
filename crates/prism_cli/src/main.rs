//! Prism command line renderer.
//!
//! Run with: cargo run --release --bin prism -- assets/triangles.json out.png

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use prism_core::load_json;
use prism_math::Vec3;
use prism_renderer::{render, render_buckets, Framebuffer, RenderConfig, DEFAULT_BUCKET_SIZE};

const USAGE: &str = "Usage: prism <scene.json> [output.png] [--width N] [--height N] \
[--eye x,y,z] [--light x,y,z] [--bucket-size N] [--serial]";

/// Parsed command line.
#[derive(Debug, Clone, PartialEq)]
struct Args {
    scene: PathBuf,
    output: PathBuf,
    config: RenderConfig,
    bucket_size: u32,
    serial: bool,
}

fn parse_vec3(text: &str) -> Result<Vec3> {
    let parts = text
        .split(',')
        .map(|p| p.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("invalid vector '{text}'"))?;

    match parts.as_slice() {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => bail!("expected three comma-separated values, got '{text}'"),
    }
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args> {
    let mut positional = Vec::new();
    let mut config = RenderConfig::default();
    let mut bucket_size = DEFAULT_BUCKET_SIZE;
    let mut serial = false;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let mut value = |flag: &str| args.next().with_context(|| format!("{flag} needs a value"));

        match arg.as_str() {
            "--width" => config.width = value("--width")?.parse().context("--width")?,
            "--height" => config.height = value("--height")?.parse().context("--height")?,
            "--eye" => config.eye = parse_vec3(&value("--eye")?)?,
            "--light" => config.light = parse_vec3(&value("--light")?)?,
            "--bucket-size" => bucket_size = value("--bucket-size")?.parse().context("--bucket-size")?,
            "--serial" => serial = true,
            flag if flag.starts_with("--") => bail!("unknown option {flag}\n{USAGE}"),
            _ => positional.push(PathBuf::from(&arg)),
        }
    }

    let mut positional = positional.into_iter();
    let Some(scene) = positional.next() else {
        bail!(USAGE);
    };
    let output = positional.next().unwrap_or_else(|| {
        log::warn!("No output path given, writing output.png");
        PathBuf::from("output.png")
    });
    if let Some(extra) = positional.next() {
        bail!("unexpected argument {}\n{USAGE}", extra.display());
    }

    Ok(Args {
        scene,
        output,
        config,
        bucket_size,
        serial,
    })
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = parse_args(env::args().skip(1))?;

    let start = Instant::now();
    let scene = load_json(&args.scene)
        .with_context(|| format!("failed to load scene {}", args.scene.display()))?;
    log::info!(
        "Loaded {} triangle sets, {} triangles in {:?}",
        scene.triangle_set_count(),
        scene.triangle_count(),
        start.elapsed()
    );

    let config = &args.config;
    let mut framebuffer = Framebuffer::new(config.width, config.height);
    if args.serial {
        render(&scene, config, &mut framebuffer)?;
    } else {
        render_buckets(&scene, config, &mut framebuffer, args.bucket_size)?;
    }

    let image = image::RgbaImage::from_raw(config.width, config.height, framebuffer.as_bytes().to_vec())
        .context("framebuffer does not match image dimensions")?;
    image
        .save(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    log::info!("Saved to {}", args.output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_defaults() {
        let parsed = args(&["scene.json"]).unwrap();

        assert_eq!(parsed.scene, PathBuf::from("scene.json"));
        assert_eq!(parsed.output, PathBuf::from("output.png"));
        assert_eq!(parsed.config, RenderConfig::default());
        assert_eq!(parsed.bucket_size, DEFAULT_BUCKET_SIZE);
        assert!(!parsed.serial);
    }

    #[test]
    fn test_all_options() {
        let parsed = args(&[
            "--width", "640", "scene.json", "--height", "480", "out.png", "--eye", "0, 1, -2",
            "--light", "1,2,3", "--bucket-size", "16", "--serial",
        ])
        .unwrap();

        assert_eq!(parsed.output, PathBuf::from("out.png"));
        assert_eq!(parsed.config.width, 640);
        assert_eq!(parsed.config.height, 480);
        assert_eq!(parsed.config.eye, Vec3::new(0.0, 1.0, -2.0));
        assert_eq!(parsed.config.light, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(parsed.bucket_size, 16);
        assert!(parsed.serial);
    }

    #[test]
    fn test_errors() {
        assert!(args(&[]).is_err());
        assert!(args(&["a.json", "b.png", "c.png"]).is_err());
        assert!(args(&["a.json", "--width"]).is_err());
        assert!(args(&["a.json", "--width", "wide"]).is_err());
        assert!(args(&["a.json", "--eye", "1,2"]).is_err());
        assert!(args(&["a.json", "--fast"]).is_err());
    }

    #[test]
    fn test_parse_vec3() {
        assert_eq!(parse_vec3("0.5,0.5,-0.5").unwrap(), Vec3::new(0.5, 0.5, -0.5));
        assert!(parse_vec3("x,1,2").is_err());
    }
}
