use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use illustra::assets::{ShapeDescription, StyleVars};
use illustra::illustrations::layered_house::HOUSE_DEFAULT_VIEW_BOX;
use illustra::illustrations::splash::SPLASH_DEFAULT_VIEW_BOX;
use illustra::{
    Clock, Container, Declaration, FrameRGBA, IllustrationKind, IllustrationRegistry,
    ManualClock, ShapeRef,
};
use tracing_subscriber::EnvFilter;

/// Style variable the CLI points `backgroundColor` at when a config names none.
const CLI_BACKGROUND_VAR: &str = "--illustra-bg";

#[derive(Parser, Debug)]
#[command(name = "illustra", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run an illustration on a simulated clock and write frames as PNGs.
    Render(RenderArgs),
    /// Parse a flat shape description and print it as JSON.
    Shape(ShapeArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Illustration type: sphere, layered-house or splash.
    kind: IllustrationKind,

    /// JSON configuration for the illustration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Shape description file (layered-house and splash).
    #[arg(long)]
    shape: Option<PathBuf>,

    /// Container side in CSS pixels.
    #[arg(long, default_value_t = 400.0)]
    size: f64,

    /// Device pixel ratio.
    #[arg(long, default_value_t = 1.0)]
    dpr: f64,

    /// Number of simulated display refreshes.
    #[arg(long, default_value_t = 60)]
    frames: u64,

    /// Simulated refresh rate.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Write every Nth frame.
    #[arg(long, default_value_t = 10)]
    every: u64,

    /// Output directory for PNGs.
    #[arg(long, default_value = "out")]
    out_dir: PathBuf,

    /// Container style property, repeatable: `--style '--ids__accent-RGB=0, 120, 255'`.
    #[arg(long = "style", value_parser = parse_style, allow_hyphen_values = true)]
    styles: Vec<(String, String)>,

    /// Split a splash across a back and a front surface.
    #[arg(long, default_value_t = false)]
    paired: bool,
}

#[derive(Parser, Debug)]
struct ShapeArgs {
    /// Shape description file.
    path: PathBuf,

    /// Which illustration's default viewBox applies when the file declares none.
    #[arg(long, default_value = "layered-house")]
    kind: IllustrationKind,
}

fn parse_style(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got \"{raw}\""))?;
    Ok((name.trim().to_owned(), value.trim().to_owned()))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("illustra=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Shape(args) => cmd_shape(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.fps > 0.0, "--fps must be positive");
    anyhow::ensure!(args.every > 0, "--every must be positive");

    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read config '{}'", path.display()))?;
            serde_json::from_str::<serde_json::Value>(&text)
                .with_context(|| format!("parse config '{}'", path.display()))?
        }
        None => serde_json::json!({}),
    };

    let mut styles = StyleVars::new()
        .with("--ids__accent-RGB", "255, 105, 105")
        .with(CLI_BACKGROUND_VAR, "255, 255, 255");
    for (name, value) in &args.styles {
        styles.set(name.clone(), value.clone());
    }
    if args.kind != IllustrationKind::Sphere
        && let Some(obj) = config.as_object_mut()
    {
        obj.entry("backgroundColor")
            .or_insert_with(|| CLI_BACKGROUND_VAR.into());
    }

    let container = Container::new(args.size, args.size)
        .with_dpr(args.dpr)
        .with_styles(styles);
    let mut decl = Declaration::new(args.kind, container.clone()).with_config(config);
    if let Some(shape) = &args.shape {
        decl = decl.with_shape(ShapeRef::File(shape.clone()));
    }
    if args.paired {
        decl = decl.with_paired(container);
    }

    let mut registry = IllustrationRegistry::with_cpu_defaults();
    let id = registry
        .create(&decl)
        .with_context(|| format!("create {} illustration", args.kind))?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let clock = ManualClock::new(0.0);
    let step = 1_000.0 / args.fps;
    let instance = registry
        .get_mut(id)
        .context("illustration vanished after creation")?;
    instance.start(clock.now_ms())?;

    let mut written = 0usize;
    for frame in 0..args.frames {
        let outcome = instance.tick(clock.now_ms())?;
        tracing::debug!(frame, ?outcome, "tick");
        if frame % args.every == 0 {
            for (surface, rgba) in instance.read_frames()?.iter().enumerate() {
                let path = args
                    .out_dir
                    .join(format!("{}_{frame:05}_{surface}.png", args.kind));
                write_png(&path, rgba)?;
                written += 1;
            }
        }
        clock.advance(step);
    }
    instance.stop();

    eprintln!("wrote {written} frame(s) to {}", args.out_dir.display());
    Ok(())
}

fn cmd_shape(args: ShapeArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.path)
        .with_context(|| format!("read shape '{}'", args.path.display()))?;
    let default_view_box = match args.kind {
        IllustrationKind::Splash => SPLASH_DEFAULT_VIEW_BOX,
        _ => HOUSE_DEFAULT_VIEW_BOX,
    };
    let shape = ShapeDescription::parse(&text, default_view_box)?;
    println!("{}", serde_json::to_string_pretty(&shape)?);
    Ok(())
}

fn write_png(path: &Path, frame: &FrameRGBA) -> anyhow::Result<()> {
    let straight = frame.to_straight_alpha();
    image::save_buffer_with_format(
        path,
        &straight.data,
        straight.width,
        straight.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}
