use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use investment_projector::{
    config::{load_config, write_config, ProjectorConfig},
    io,
    visualization::{print_projection_chart, print_projection_summary, print_projection_table},
    ParameterInputs, Projector,
};

#[derive(Parser)]
#[command(
    name = "invest-projector",
    about = "Investment Projector - present value of future investment calculator",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Projection inputs. Flags override values from `--config` and `--params`.
#[derive(Args, Debug)]
struct ParamArgs {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON file with projection inputs
    #[arg(long)]
    params: Option<PathBuf>,

    /// Initial investment ($)
    #[arg(long)]
    initial_amount: Option<f64>,

    /// Annual return rate (%)
    #[arg(long)]
    return_rate: Option<f64>,

    /// Annual contribution ($)
    #[arg(long)]
    contribution: Option<f64>,

    /// Contribution growth rate (%)
    #[arg(long)]
    contribution_growth: Option<f64>,

    /// Inflation rate (%)
    #[arg(long)]
    inflation: Option<f64>,

    /// Number of years to project
    #[arg(short, long)]
    years: Option<u32>,

    /// Starting age
    #[arg(long)]
    starting_age: Option<u32>,

    /// Starting year
    #[arg(long)]
    starting_year: Option<i32>,
}

impl ParamArgs {
    /// Resolve configuration and inputs: defaults, then config file, then
    /// params file, then individual flags.
    fn resolve(&self) -> Result<(ProjectorConfig, ParameterInputs)> {
        let config = match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => ProjectorConfig::default(),
        };

        let mut inputs = match &self.params {
            Some(path) => io::read_params_json(path)
                .with_context(|| format!("Failed to read params {}", path.display()))?,
            None => config.parameters.clone(),
        };

        if let Some(v) = self.initial_amount {
            inputs.initial_amount = v;
        }
        if let Some(v) = self.return_rate {
            inputs.annual_return_percent = v;
        }
        if let Some(v) = self.contribution {
            inputs.yearly_contribution = v;
        }
        if let Some(v) = self.contribution_growth {
            inputs.contribution_growth_percent = v;
        }
        if let Some(v) = self.inflation {
            inputs.inflation_percent = v;
        }
        if let Some(v) = self.years {
            inputs.years = v;
        }
        if let Some(v) = self.starting_age {
            inputs.starting_age = v;
        }
        if let Some(v) = self.starting_year {
            inputs.starting_year = v;
        }

        debug!(?inputs, "resolved inputs");
        Ok((config, inputs))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Project investment growth and display the results
    Project {
        #[command(flatten)]
        params: ParamArgs,

        /// Write the table to a file (.csv, .json, or .xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Show a line chart of the projection
        #[arg(long)]
        chart: bool,

        /// Chart width in characters
        #[arg(long, default_value = "72")]
        chart_width: usize,

        /// Chart height in characters
        #[arg(long, default_value = "16")]
        chart_height: usize,

        /// Hide the detailed year-by-year table
        #[arg(long)]
        no_table: bool,
    },

    /// Display only the headline summary
    Summary {
        #[command(flatten)]
        params: ParamArgs,
    },

    /// Write a default configuration file
    InitConfig {
        /// Output file path
        #[arg(short, long, default_value = "investment_projector.toml")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Start the web API server
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// TOML configuration file supplying default inputs
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn export(projector: &Projector, path: &Path, pretty: bool, decimals: u32) -> Result<()> {
    let format = io::write_records(projector.records(), path, pretty, decimals)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!(
        "{} Wrote {} rows ({}) -> {}",
        "Success:".green().bold(),
        projector.records().len(),
        format.extension(),
        path.display()
    );
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Project {
            params,
            output,
            pretty,
            chart,
            chart_width,
            chart_height,
            no_table,
        } => {
            let (config, inputs) = params.resolve()?;
            let projector = Projector::from_inputs(&inputs)?;

            println!(
                "\n{}",
                format!(
                    "Investment Projection: {} years from {} (age {})",
                    inputs.years, inputs.starting_year, inputs.starting_age
                )
                .bold()
                .cyan()
            );

            if chart {
                print_projection_chart(projector.records(), chart_width, chart_height);
            }
            if !no_table {
                print_projection_table(projector.records());
            }
            if let Some(summary) = projector.summary() {
                print_projection_summary(&summary);
            }
            if let Some(path) = output {
                export(&projector, &path, pretty, config.output.decimals)?;
            }
        }

        Commands::Summary { params } => {
            let (_, inputs) = params.resolve()?;
            let projector = Projector::from_inputs(&inputs)?;
            if let Some(summary) = projector.summary() {
                print_projection_summary(&summary);
            }
        }

        Commands::InitConfig { output, force } => {
            if output.exists() && !force {
                anyhow::bail!(
                    "{} already exists. Use --force to overwrite",
                    output.display()
                );
            }
            write_config(&ProjectorConfig::default(), &output)?;
            println!(
                "{} Wrote default config -> {}",
                "Success:".green().bold(),
                output.display()
            );
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, config } => {
            let config = match config {
                Some(path) => load_config(&path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => ProjectorConfig::default(),
            };
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(investment_projector::web::start_server(port, config))?;
        }
    }

    Ok(())
}
