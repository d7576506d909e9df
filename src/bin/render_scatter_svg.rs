use std::fs;
use std::path::PathBuf;

use health_scatter::api::{ChartConfig, ChartController};
use health_scatter::core::Dimension;
use health_scatter::render::SvgRenderer;
use health_scatter::telemetry::init_default_tracing;

const USAGE: &str = "usage: render_scatter_svg --input <csv> [--x poverty|obesity] [--config <json>] [--output <svg>] [--snapshot <json>]";
const DEFAULT_OUTPUT: &str = "scatter.svg";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    dimension: Option<Dimension>,
    config: Option<PathBuf>,
    output: PathBuf,
    snapshot: Option<PathBuf>,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => ChartConfig::from_json_path(path).map_err(|err| err.to_string())?,
        None => ChartConfig::default(),
    };

    let mut controller = ChartController::from_csv_path(SvgRenderer::new(), config, &args.input)
        .map_err(|err| err.to_string())?;
    if let Some(dimension) = args.dimension {
        controller
            .click_label(dimension)
            .map_err(|err| err.to_string())?;
    }
    controller.advance(controller.config().transition_duration_ms);
    controller.render().map_err(|err| err.to_string())?;

    if let Some(path) = &args.snapshot {
        let json = controller
            .snapshot_json_contract_v1_pretty()
            .map_err(|err| err.to_string())?;
        fs::write(path, json)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?;
    }

    let renderer = controller.into_renderer();
    renderer
        .write_to(&args.output)
        .map_err(|err| err.to_string())?;
    println!(
        "wrote {} ({} marks)",
        args.output.display(),
        renderer.last_stats().circles_drawn
    );
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut dimension = None::<Dimension>;
    let mut config = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut snapshot = None::<PathBuf>;

    while let Some(flag) = args.next() {
        let mut value_for = |name: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match flag.as_str() {
            "--input" => input = Some(PathBuf::from(value_for("--input")?)),
            "--x" => {
                let raw = value_for("--x")?;
                dimension = Some(raw.parse().map_err(|err: health_scatter::ChartError| err.to_string())?);
            }
            "--config" => config = Some(PathBuf::from(value_for("--config")?)),
            "--output" => output = Some(PathBuf::from(value_for("--output")?)),
            "--snapshot" => snapshot = Some(PathBuf::from(value_for("--snapshot")?)),
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        input: input.ok_or_else(|| USAGE.to_owned())?,
        dimension,
        config,
        output: output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
        snapshot,
    })
}
