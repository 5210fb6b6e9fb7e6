use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use floorkit::{
    editor_from_config, init_logging, plan_summary, Config, MeasurementSystem, PlanEditor,
    BUILD_DATE, VERSION,
};

#[derive(Parser)]
#[command(name = "floorkit", version, about = "Headless tools for FloorKit floor plans")]
struct Cli {
    /// Config file (.toml or .json). Defaults to the platform config directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a summary of a plan file.
    Info {
        plan: PathBuf,
        /// Units for reported lengths (metric or imperial).
        #[arg(long)]
        units: Option<MeasurementSystem>,
    },
    /// Render a plan file to SVG.
    Svg {
        plan: PathBuf,
        /// Output file. Writes to stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long)]
        width: Option<f64>,
        #[arg(long)]
        height: Option<f64>,
        /// Leave out the grid.
        #[arg(long)]
        no_grid: bool,
    },
    /// Validate a plan file and write it back in canonical form.
    Normalize {
        plan: PathBuf,
        /// Output file. Writes to stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => match floorkit_settings::default_config_path() {
            Ok(path) => Ok(Config::load_or_default(&path)?),
            Err(e) => {
                tracing::warn!("{}; using default settings", e);
                Ok(Config::default())
            }
        },
    }
}

fn open_plan(config: &Config, plan: &Path) -> anyhow::Result<PlanEditor> {
    let mut editor = editor_from_config(config)?;
    editor
        .load_plan(plan)
        .with_context(|| format!("Failed to load plan {}", plan.display()))?;
    Ok(editor)
}

fn write_output(output: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging()?;
    tracing::debug!("floorkit {} (built {})", VERSION, BUILD_DATE);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Info { plan, units } => {
            let editor = open_plan(&config, &plan)?;
            let units = units.unwrap_or(config.editor.measurement_system);
            print!("{}", plan_summary(&editor, units));
        }
        Commands::Svg {
            plan,
            output,
            width,
            height,
            no_grid,
        } => {
            let mut editor = open_plan(&config, &plan)?;
            let (w, h) = editor.viewport_size();
            editor.set_viewport_size(width.unwrap_or(w), height.unwrap_or(h))?;
            if no_grid {
                editor.set_show_grid(false);
            }
            write_output(output.as_deref(), &editor.export_svg())?;
        }
        Commands::Normalize { plan, output } => {
            let editor = open_plan(&config, &plan)?;
            let mut json = editor.export_plan_json()?;
            json.push('\n');
            write_output(output.as_deref(), &json)?;
        }
    }

    Ok(())
}
