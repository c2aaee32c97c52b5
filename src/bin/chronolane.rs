use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

use chronolane::{
    Action, ApproxMeasure, EventSet, HoverTarget, InteractionController, ParleyMeasure,
    RawEvent, SvgSurface, TextMeasure, Timeline, TimelineConfig,
};

#[derive(Parser, Debug)]
#[command(name = "chronolane", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the computed layout as JSON.
    Layout(LayoutArgs),
    /// Render a static frame as SVG (and optionally PNG).
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Input events JSON (array, or object with an `events` array).
    #[arg(long = "in", required_unless_present = "demo")]
    in_path: Option<PathBuf>,

    /// Use the built-in sample events instead of `--in`.
    #[arg(long, conflicts_with = "in_path")]
    demo: bool,

    /// Timeline config JSON; unset keys keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Font file for text measurement (and SVG rasterization).
    #[arg(long)]
    font: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct LayoutArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Write JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    /// Also rasterize to this PNG path.
    #[arg(long)]
    png: Option<PathBuf>,

    /// Zoom factor applied around the chart centre.
    #[arg(long, default_value_t = 1.0)]
    zoom: f64,

    /// Horizontal pan in pixels, applied after zooming.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pan: f64,

    /// Render the first event of this year in its hovered state.
    #[arg(long)]
    hover: Option<i32>,
}

fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn load_input(args: &InputArgs) -> anyhow::Result<(Vec<RawEvent>, TimelineConfig)> {
    let events = match &args.in_path {
        Some(path) if !args.demo => EventSet::from_path(path)?.events,
        _ => chronolane::sample_events(),
    };
    let cfg = match &args.config {
        Some(path) => TimelineConfig::from_path(path)?,
        None => TimelineConfig::default(),
    };
    Ok((events, cfg))
}

fn make_measure(font: Option<&Path>) -> anyhow::Result<Box<dyn TextMeasure>> {
    Ok(match font {
        Some(path) => {
            let m = ParleyMeasure::from_path(path)?;
            tracing::info!(family = m.family_name(), "measuring text with font");
            Box::new(m)
        }
        None => Box::new(ApproxMeasure),
    })
}

fn write_output(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let (events, cfg) = load_input(&args.input)?;
    let mut measure = make_measure(args.input.font.as_deref())?;
    let layout = chronolane::compute_layout(&events, &cfg, measure.as_mut());
    let json = serde_json::to_string_pretty(&layout).context("serialize layout")?;

    match &args.out {
        Some(path) => {
            write_output(path, json.as_bytes())?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let (events, cfg) = load_input(&args.input)?;
    let mut measure = make_measure(args.input.font.as_deref())?;
    let hover_ms = cfg.hover_duration_ms;

    let Some(mut timeline) = Timeline::mount(
        Some(SvgSurface::new()),
        &events,
        cfg,
        measure.as_mut(),
        0.0,
    )?
    else {
        anyhow::bail!("no mount target");
    };
    if timeline.layout().is_none() {
        anyhow::bail!("no events with a recognizable date");
    }

    pose(&mut timeline, &args, hover_ms)?;

    let svg = timeline
        .surface()
        .document()
        .context("no frame was rendered")?
        .to_string();
    write_output(&args.out, svg.as_bytes())?;
    eprintln!("wrote {}", args.out.display());

    if let Some(png) = &args.png {
        let img = chronolane::rasterize_svg(&svg, args.input.font.as_deref())?;
        if let Some(parent) = png.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        image::save_buffer_with_format(
            png,
            &img.rgba,
            img.width,
            img.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", png.display()))?;
        eprintln!("wrote {}", png.display());
    }
    Ok(())
}

/// Drive the controller into the requested static view.
fn pose<M: TextMeasure>(
    timeline: &mut InteractionController<SvgSurface, M>,
    args: &RenderArgs,
    hover_ms: f64,
) -> anyhow::Result<()> {
    let Some(layout) = timeline.layout() else {
        return Ok(());
    };
    let cfg = timeline.config();
    let cx = cfg.margin.left + cfg.inner_width * 0.5;
    let cy = layout.timeline_axis_y;
    let hover = args.hover.map(|year| {
        layout
            .groups
            .iter()
            .position(|g| g.year == year)
            .map(|group| HoverTarget::Card { group, index: 0 })
            .with_context(|| format!("no events in year {year}"))
    });

    let mut actions = Vec::new();
    if args.zoom != 1.0 {
        actions.push(Action::Pinch {
            x: cx,
            y: cy,
            factor: args.zoom,
        });
    }
    if args.pan != 0.0 {
        actions.push(Action::DragStart { x: cx, y: cy });
        actions.push(Action::DragMove {
            x: cx + args.pan,
            y: cy,
        });
        actions.push(Action::DragEnd);
    }
    if let Some(target) = hover {
        actions.push(Action::HoverEnter(target?));
    }

    for action in actions {
        timeline.dispatch(action, 0.0)?;
    }
    timeline.tick(hover_ms)?;
    Ok(())
}
