use anyhow::{Context, Result};
use chartwire::{ChartDefaults, viz};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "chartwire",
    version,
    about = "Discover chart placeholders in HTML and render them"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every chart placeholder in a document to image files.
    Render(RenderArgs),
    /// List the placeholders a document declares, without rendering.
    Inspect(InspectArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Svg,
    Png,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// HTML document to scan.
    input: PathBuf,
    /// Directory for the rendered chart files.
    #[arg(long, default_value = "charts")]
    out_dir: PathBuf,
    /// Output image format.
    #[arg(long, value_enum, default_value_t = OutFormat::Svg)]
    format: OutFormat,
    /// JSON file with partial overrides for the chart defaults.
    #[arg(long)]
    theme: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct InspectArgs {
    /// HTML document to scan.
    input: PathBuf,
    /// Print the summary as JSON instead of text lines.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn load_defaults(theme: Option<&PathBuf>) -> Result<ChartDefaults> {
    match theme {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading theme {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing theme {}", path.display()))
        }
        None => Ok(ChartDefaults::default()),
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let html = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let defaults = load_defaults(args.theme.as_ref())?;

    let charts = chartwire::hydrate(&html, &defaults)
        .with_context(|| format!("hydrating {}", args.input.display()))?;

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;
    let ext = match args.format {
        OutFormat::Svg => "svg",
        OutFormat::Png => "png",
    };

    for (idx, chart) in charts.iter().enumerate() {
        let stem = chart
            .canvas
            .id
            .clone()
            .unwrap_or_else(|| format!("chart-{}", idx));
        let path = args.out_dir.join(format!("{}.{}", stem, ext));
        match args.format {
            // The instance already carries its SVG rendering
            OutFormat::Svg => fs::write(&path, &chart.svg)
                .with_context(|| format!("writing {}", path.display()))?,
            OutFormat::Png => {
                let size = chart.canvas.surface_size(&defaults);
                viz::render_to_file(&chart.data, &defaults, size, &path)?;
            }
        }
        eprintln!("Wrote {}", path.display());
    }

    eprintln!(
        "Rendered {} chart(s) from {}",
        charts.len(),
        args.input.display()
    );
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> Result<()> {
    let html = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let placeholders = chartwire::find_placeholders(&html);

    if args.json {
        let summary: Vec<serde_json::Value> = placeholders
            .iter()
            .map(|p| {
                serde_json::json!({
                    "id": p.id,
                    "type": p.raw_kind,
                    "kind": p.kind.as_str(),
                    "canvases": p.canvases.iter().map(|c| &c.id).collect::<Vec<_>>(),
                    "data_bytes": p.data.as_ref().map(|d| d.len()),
                    "labels": p.labels,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for (idx, p) in placeholders.iter().enumerate() {
            println!(
                "#{} id={} type={} kind={} canvases={} data={}",
                idx,
                p.id.as_deref().unwrap_or("-"),
                p.raw_kind.as_deref().unwrap_or("-"),
                p.kind.as_str(),
                p.canvases.len(),
                p.data
                    .as_ref()
                    .map(|d| format!("{} bytes", d.len()))
                    .unwrap_or_else(|| "missing".to_string()),
            );
        }
        eprintln!("{} placeholder(s)", placeholders.len());
    }
    Ok(())
}
