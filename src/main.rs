use clap::{Parser, ValueEnum};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use env_logger::Env;
use log::{info, warn};
use std::path::PathBuf;

use playergraph::config_loader::{self, ConfigOverrides};
use playergraph::diagnostics::Diagnostics;
use playergraph::export::{self, ExportDocument};
use playergraph::orchestrator::{self, BuildError, BuildInput};

/// Graph data set generator for networked multi-agent simulations
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the simulation configuration YAML file
    #[arg(short, long)]
    config: PathBuf,

    /// Output path for the graph document (.json, .yaml or .yml)
    #[arg(short, long, default_value = "state.json")]
    output: PathBuf,

    /// Override the number of players
    #[arg(long)]
    players: Option<usize>,

    /// Override the topology name
    #[arg(long)]
    topology: Option<String>,

    /// Turn per-range player settings on or off
    #[arg(long, value_enum)]
    settings: Option<SettingsSwitch>,

    /// Resolve and validate only, do not write the graph document
    #[arg(long)]
    check: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SettingsSwitch {
    On,
    Off,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            players: self.players,
            topology: self.topology.clone(),
            settings_enabled: self.settings.map(|switch| switch == SettingsSwitch::On),
        }
    }
}

/// Log collected diagnostics, alerts at warn level
fn report_diagnostics(diagnostics: &Diagnostics) {
    for diagnostic in &diagnostics.info {
        info!("{}", diagnostic);
    }
    for diagnostic in &diagnostics.alerts {
        warn!("{}", diagnostic);
    }
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Configuration file: {:?}", args.config);

    let mut config = config_loader::load_config(&args.config)?;
    config_loader::apply_overrides(&mut config, &args.overrides())?;

    let report = match orchestrator::build_graph(&BuildInput::from(&config)) {
        Ok(report) => report,
        Err(BuildError::Blocked { diagnostics }) => {
            report_diagnostics(&diagnostics);
            return Err(eyre!(
                "Player settings have {} blocking alert(s), fix the targets and retry",
                diagnostics.blocking_count()
            ));
        }
        Err(e) => return Err(e.into()),
    };
    report_diagnostics(&report.diagnostics);

    if args.check {
        info!(
            "Check passed: {} nodes, {} edges",
            report.model.nodes.len(),
            report.model.edges.len()
        );
        return Ok(());
    }

    let document = ExportDocument {
        environment: &config.environment,
        graph: &report.model,
    };
    export::write_document(&args.output, &document)?;

    info!("Graph generation completed successfully");
    Ok(())
}
