use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use flipbook::{
    AnimationConfig, Animator, CpuSurface, ManualScheduler, NullSurface, SheetImage,
    TracingFeedback,
};

#[derive(Parser, Debug)]
#[command(name = "flipbook", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play headlessly for N ticks and print the animation snapshot as JSON.
    Info(InfoArgs),
    /// Play a sprite sheet for N ticks, writing a PNG for every frame shown.
    Render(RenderArgs),
    /// Render a single frame of a sprite sheet as a PNG.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct InfoArgs {
    /// Animation config JSON.
    #[arg(long)]
    config: PathBuf,

    /// Sprite sheet width in pixels.
    #[arg(long)]
    sheet_width: u32,

    /// Sprite sheet height in pixels.
    #[arg(long)]
    sheet_height: u32,

    /// Ticks to play after loading.
    #[arg(long, default_value_t = 0)]
    ticks: u64,

    /// Play in slow motion.
    #[arg(long)]
    slomo: bool,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Sprite sheet PNG.
    #[arg(long)]
    sheet: PathBuf,

    /// Animation config JSON.
    #[arg(long)]
    config: PathBuf,

    /// Ticks to play.
    #[arg(long)]
    ticks: u64,

    /// Directory for output PNGs.
    #[arg(long)]
    out_dir: PathBuf,

    /// Play in slow motion.
    #[arg(long)]
    slomo: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Sprite sheet PNG.
    #[arg(long)]
    sheet: PathBuf,

    /// Animation config JSON.
    #[arg(long)]
    config: PathBuf,

    /// Frame index (0-based, clamped to the last frame).
    #[arg(long)]
    index: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Info(args) => cmd_info(args),
        Command::Render(args) => cmd_render(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn cmd_info(args: InfoArgs) -> anyhow::Result<()> {
    let config = AnimationConfig::from_path(&args.config)?;

    let mut animator: Animator<NullSurface, ManualScheduler> =
        Animator::new(ManualScheduler::new());
    animator.load(
        NullSurface::default(),
        (),
        args.sheet_width,
        args.sheet_height,
        config,
    )?;
    animator.on_image_ready()?;
    if args.slomo {
        animator.toggle_slomo()?;
    }
    animator.play()?;
    for _ in 0..args.ticks {
        animator.pump();
    }

    let info = animator.info().context("animator lost its sprite")?;
    println!("{}", info.to_json_pretty()?);
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let config = AnimationConfig::from_path(&args.config)?;
    let mut animator = load_cpu(&args.sheet, config)?;
    if args.slomo {
        animator.toggle_slomo()?;
    }

    write_current(&animator, &args.out_dir)?;
    animator.play()?;
    let mut written = 1u64;
    let mut last_frames = current_total_frames(&animator)?;
    for _ in 0..args.ticks {
        animator.pump();
        let frames = current_total_frames(&animator)?;
        if frames != last_frames {
            write_current(&animator, &args.out_dir)?;
            written += 1;
            last_frames = frames;
        }
    }

    tracing::info!(written, ticks = args.ticks, "render finished");
    eprintln!("wrote {written} frames to {}", args.out_dir.display());
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let config = AnimationConfig::from_path(&args.config)?;
    let mut animator = load_cpu(&args.sheet, config)?;
    animator.seek(args.index)?;

    let surface = animator.surface().context("animator lost its surface")?;
    surface.to_frame().save_png(&args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn load_cpu(
    sheet_path: &Path,
    config: AnimationConfig,
) -> anyhow::Result<Animator<CpuSurface, ManualScheduler>> {
    let image: SheetImage = flipbook::load_sheet(sheet_path)?;
    let (width, height) = (image.width, image.height);

    let mut animator = Animator::new(ManualScheduler::new()).with_feedback(TracingFeedback);
    let surface = CpuSurface::new(flipbook::Canvas { width, height });
    animator.load(surface, image, width, height, config)?;
    animator.on_image_ready()?;
    Ok(animator)
}

fn current_total_frames(animator: &Animator<CpuSurface, ManualScheduler>) -> anyhow::Result<i64> {
    Ok(animator
        .info()
        .context("animator lost its sprite")?
        .total_frames)
}

fn write_current(
    animator: &Animator<CpuSurface, ManualScheduler>,
    out_dir: &Path,
) -> anyhow::Result<()> {
    let info = animator.info().context("animator lost its sprite")?;
    let surface = animator.surface().context("animator lost its surface")?;
    let path = out_dir.join(format!(
        "tick_{:06}_frame_{:03}.png",
        info.total_ticks, info.frame_index
    ));
    surface.to_frame().save_png(&path)?;
    Ok(())
}
