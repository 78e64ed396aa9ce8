use std::path::{Path, PathBuf};

use anyhow::Context as _;
use backdrop::{
    BackdropConfig, BackgroundRenderer, CpuSurface, FixedTheme, FrameRGBA, HeadlessHost,
    ThemeMode, Viewport,
};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "backdrop", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one frame at a scroll position as a PNG.
    Frame(FrameArgs),
    /// Scroll through the whole page, writing one PNG per step.
    Sweep(SweepArgs),
    /// Print the default configuration as JSON.
    Config,
}

#[derive(Args, Debug)]
struct PageArgs {
    /// Config JSON (defaults apply to missing fields).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 960)]
    width: u32,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 540)]
    height: u32,

    /// Scrollable document height in pixels.
    #[arg(long, default_value_t = 4000.0)]
    document_height: f64,

    /// Page offsets of the three section anchors, comma separated.
    #[arg(long, value_delimiter = ',', default_values_t = [1000.0, 2000.0, 3000.0])]
    anchors: Vec<f64>,

    /// Render with the dark color scheme.
    #[arg(long)]
    dark: bool,

    /// Override the config seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Frames to animate before capturing.
    #[arg(long, default_value_t = 1)]
    frames: u32,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    page: PageArgs,

    /// Vertical scroll offset.
    #[arg(long, default_value_t = 0.0)]
    scroll: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct SweepArgs {
    #[command(flatten)]
    page: PageArgs,

    /// Number of scroll positions, evenly spaced from top to bottom.
    #[arg(long, default_value_t = 8)]
    steps: u32,

    /// Output directory for `frame_NNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sweep(args) => cmd_sweep(args),
        Command::Config => cmd_config(),
    }
}

struct Page {
    host: HeadlessHost,
    renderer: BackgroundRenderer<CpuSurface>,
    frames: u32,
}

impl Page {
    fn open(args: &PageArgs) -> anyhow::Result<Self> {
        if args.anchors.len() != 3 {
            anyhow::bail!(
                "--anchors expects 3 offsets, got {}",
                args.anchors.len()
            );
        }

        let mut config = match &args.config {
            Some(path) => BackdropConfig::from_json_path(path)
                .with_context(|| format!("load config '{}'", path.display()))?,
            None => BackdropConfig::default(),
        };
        if args.seed.is_some() {
            config.seed = args.seed;
        }

        let mut host = HeadlessHost::cpu(Viewport::new(args.width, args.height));
        host.set_document_height(args.document_height);
        for (id, &offset) in config.anchors.iter().zip(&args.anchors) {
            host.set_anchor(id.clone(), offset);
        }

        let theme = FixedTheme(ThemeMode::from_prefers_dark(args.dark));
        let renderer =
            BackgroundRenderer::new(&mut host, &theme, config).context("start renderer")?;

        Ok(Self {
            host,
            renderer,
            frames: args.frames.max(1),
        })
    }

    fn capture_at(&mut self, scroll_y: f64) -> anyhow::Result<FrameRGBA> {
        if let Some(ev) = self.host.scroll_to(scroll_y) {
            self.renderer.handle(&mut self.host, ev);
        }
        for _ in 0..self.frames {
            let ev = self
                .host
                .take_frame()
                .context("renderer stopped scheduling frames")?;
            self.renderer.handle(&mut self.host, ev);
        }
        Ok(self.renderer.surface_mut().snapshot()?)
    }

    fn close(mut self) {
        self.renderer.destroy(&mut self.host);
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut page = Page::open(&args.page)?;
    let frame = page.capture_at(args.scroll)?;
    write_png(&args.out, &frame)?;
    page.close();

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut page = Page::open(&args.page)?;
    let steps = args.steps.max(1);
    for i in 0..steps {
        let t = if steps == 1 {
            0.0
        } else {
            f64::from(i) / f64::from(steps - 1)
        };
        let scroll = t * args.page.document_height;
        let frame = page.capture_at(scroll)?;
        let out = args.out_dir.join(format!("frame_{i:04}.png"));
        write_png(&out, &frame)?;
        eprintln!(
            "wrote {} (section {})",
            out.display(),
            page.renderer.section().index
        );
    }
    page.close();
    Ok(())
}

fn cmd_config() -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&BackdropConfig::default())?;
    println!("{json}");
    Ok(())
}

fn write_png(path: &Path, frame: &FrameRGBA) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}
