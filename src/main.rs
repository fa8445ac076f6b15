use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info, warn, Level};

use face_replacer::{
    config::Config,
    regions::FeatureKind,
    session::{EditorSession, GestureScript},
};

#[derive(Parser)]
#[command(
    name = "face-replacer",
    version,
    about = "Paste preset eyes and mouth onto a photo",
    long_about = "Face-Replacer places eye_left, eye_right and mouth regions over a photo, applies recorded pointer gestures to move and resize them, then alpha-blends the preset images into the regions and saves the result."
)]
struct Cli {
    /// Photo to edit (PNG, JPEG, BMP, GIF)
    #[arg(short, long)]
    input: PathBuf,

    /// Where to write the composited image [default: output.png]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory containing the preset images
    #[arg(short, long)]
    presets: Option<PathBuf>,

    /// Replace one preset for this run, e.g. `--preset mouth=smile.png` (repeatable)
    #[arg(long = "preset", value_name = "FEATURE=PATH", value_parser = parse_preset)]
    preset_overrides: Vec<(FeatureKind, PathBuf)>,

    /// TOML file of pointer gestures to apply before compositing
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Also write the photo with region outlines drawn on it
    #[arg(long)]
    overlay: Option<PathBuf>,

    /// Also write a downscaled preview of the result
    #[arg(long)]
    preview: Option<PathBuf>,

    /// Configuration file (optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_preset(arg: &str) -> std::result::Result<(FeatureKind, PathBuf), String> {
    let (kind, path) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected FEATURE=PATH, got '{}'", arg))?;
    Ok((kind.parse()?, PathBuf::from(path)))
}

/// Fatal errors stop the run; anything else is reported and the run goes on
fn report(step: &str, result: face_replacer::Result<()>) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(e) if e.is_fatal() => {
            error!("{}", e.user_message());
            Err(e.into())
        }
        Err(e) => {
            warn!("{} skipped: {}", step, e.user_message());
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .init();

    info!("Starting Face-Replacer v{}", env!("CARGO_PKG_VERSION"));
    info!("Input: {:?}", cli.input);

    // Load configuration
    let mut config = match &cli.config {
        Some(config_path) => {
            info!("Loading configuration from {:?}", config_path);
            Config::from_file(config_path)?
        }
        None => {
            info!("Using default configuration");
            Config::default()
        }
    };
    if let Some(dir) = cli.presets {
        config.presets.directory = dir;
    }
    if let Some(output) = cli.output {
        config.output.path = output;
    }
    config.validate()?;

    // Missing presets end the program here
    let mut session = match EditorSession::from_config(&config) {
        Ok(session) => session,
        Err(e) => {
            error!("{}", e.user_message());
            return Err(e.into());
        }
    };

    for (kind, path) in &cli.preset_overrides {
        report("Preset override", session.load_preset(*kind, path))?;
    }

    // Without a photo there is nothing to composite
    if let Err(e) = session.load_image(&cli.input) {
        error!("{}", e.user_message());
        return Err(e.into());
    }

    if let Some(script_path) = &cli.script {
        report(
            "Gesture script",
            GestureScript::from_file(script_path).map(|script| {
                info!("Applying {} pointer events from {:?}", script.len(), script_path);
                session.replay(&script);
            }),
        )?;
    }

    if let Some(regions) = session.regions() {
        for region in regions.iter() {
            info!("   {}: ({}, {}) {}x{}", region.name(), region.x, region.y, region.width, region.height);
        }
    }

    if let Some(overlay_path) = &cli.overlay {
        report(
            "Overlay",
            session.render_overlay().and_then(|overlay| overlay.save(overlay_path)).map(|()| {
                info!("Overlay saved to {:?}", overlay_path);
            }),
        )?;
    }

    session.save_result(&config.output.path)?;

    if let (Some(preview_path), Some(result)) = (&cli.preview, session.result()) {
        report(
            "Preview",
            result.thumbnail(config.output.preview_size).save(preview_path).map(|()| {
                info!("Preview saved to {:?}", preview_path);
            }),
        )?;
    }

    info!("Done! Output saved to: {:?}", config.output.path);
    Ok(())
}
