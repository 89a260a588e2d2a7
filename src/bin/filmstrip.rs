use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "filmstrip", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose input images into a strip and write it to disk.
    Compose(ComposeArgs),
    /// Compose, then write a bounded-size PNG preview of the strip.
    Preview(PreviewArgs),
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Input images, pasted in the order given (PNG, JPEG or GIF).
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Arrangement axis.
    #[arg(long, value_enum, default_value_t = OrientationChoice::Horizontal)]
    orientation: OrientationChoice,

    /// Blank pixels between adjacent images (non-negative integer).
    #[arg(long, default_value = "0")]
    padding: String,

    /// Output path (.png or .jpg).
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Input images, pasted in the order given (PNG, JPEG or GIF).
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Arrangement axis.
    #[arg(long, value_enum, default_value_t = OrientationChoice::Horizontal)]
    orientation: OrientationChoice,

    /// Blank pixels between adjacent images (non-negative integer).
    #[arg(long, default_value = "0")]
    padding: String,

    /// Longest side of the preview in pixels.
    #[arg(long, default_value_t = 400)]
    max_side: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OrientationChoice {
    Horizontal,
    Vertical,
}

impl From<OrientationChoice> for filmstrip::Orientation {
    fn from(value: OrientationChoice) -> Self {
        match value {
            OrientationChoice::Horizontal => filmstrip::Orientation::Horizontal,
            OrientationChoice::Vertical => filmstrip::Orientation::Vertical,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Compose(args) => cmd_compose(args),
        Command::Preview(args) => cmd_preview(args),
    }
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    // Padding is validated before any image is decoded.
    let padding = filmstrip::parse_padding(&args.padding)?;
    let images = filmstrip::load_images(&args.inputs)?;
    eprintln!("{} images loaded", images.len());

    let composite = filmstrip::compose(&images, args.orientation.into(), padding)?;
    filmstrip::save_composite(&args.out, &composite)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let padding = filmstrip::parse_padding(&args.padding)?;
    let images = filmstrip::load_images(&args.inputs)?;

    let composite = filmstrip::compose(&images, args.orientation.into(), padding)?;
    let thumb = filmstrip::preview(&composite, args.max_side);

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        &args.out,
        thumb.as_raw(),
        thumb.width(),
        thumb.height(),
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write preview '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
