use cf_app::{AppError, AppResult, Overrides, project_service, table_service};
use cf_project::TableProject;
use cf_tables::FlowRegime;
use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cf-cli")]
#[command(about = "compflow CLI - compressible-flow tables as LaTeX", long_about = None)]
struct Cli {
    /// Log skipped rows and other detail
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate table documents
    Generate(GenerateArgs),
    /// Write the default configuration file
    Init {
        /// Destination of the YAML configuration
        #[arg(default_value = "compflow.yaml")]
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Validate configuration file syntax and sweep bounds
    Validate {
        /// Path to the configuration file (YAML or JSON)
        config_path: PathBuf,
    },
    /// List flow regimes and their columns
    Regimes,
    /// Evaluate one regime at a single Mach number
    Point {
        /// Flow regime (isentropic, fanno, rayleigh, normal_shock)
        regime: FlowRegime,
        /// Mach number (upstream Mach for normal shocks)
        mach: f64,
        /// Specific-heat ratio
        #[arg(long, default_value_t = 1.4)]
        gamma: f64,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Configuration file; the built-in tables are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Only generate tables for this regime
    #[arg(long)]
    regime: Option<FlowRegime>,
    /// Specific-heat ratios, comma separated
    #[arg(long, value_delimiter = ',')]
    gamma: Option<Vec<f64>>,
    /// First Mach number of the sweep
    #[arg(long)]
    mach_start: Option<f64>,
    /// Last Mach number of the sweep (inclusive)
    #[arg(long)]
    mach_stop: Option<f64>,
    /// Mach number step
    #[arg(long)]
    mach_step: Option<f64>,
    /// Write every table into this single document
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Directory that relative output paths are resolved against
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// Print documents to stdout instead of writing files
    #[arg(long)]
    stdout: bool,
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate(args) => cmd_generate(args),
        Commands::Init { path, force } => cmd_init(&path, force),
        Commands::Validate { config_path } => cmd_validate(&config_path),
        Commands::Regimes => cmd_regimes(),
        Commands::Point {
            regime,
            mach,
            gamma,
        } => cmd_point(regime, mach, gamma),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .init();
}

fn cmd_generate(args: GenerateArgs) -> AppResult<()> {
    let project = match &args.config {
        Some(path) => project_service::load_project(path)?,
        None => TableProject::default(),
    };

    let overrides = Overrides {
        regime: args.regime,
        gamma_values: args.gamma,
        mach_start: args.mach_start,
        mach_stop: args.mach_stop,
        mach_step: args.mach_step,
        output: args.output,
    };
    let project = if overrides.is_empty() {
        project_service::validate_project(&project)?;
        project
    } else {
        project_service::apply_overrides(project, &overrides)?
    };

    if args.stdout {
        let docs = table_service::build_documents(&project)?;
        let mut out = io::stdout().lock();
        for doc in &docs {
            out.write_all(doc.content.as_bytes())?;
            out.write_all(b"\n")?;
        }
        out.flush()?;
        return Ok(());
    }

    let written = table_service::generate(&project, &args.out_dir)?;
    for w in &written {
        println!(
            "✓ LaTeX table successfully written to {} ({} tables, {} rows, {} skipped)",
            w.path.display(),
            w.tables,
            w.rows,
            w.skipped
        );
        println!("  sha256: {}", w.digest);
    }
    Ok(())
}

fn cmd_init(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::InvalidInput(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    project_service::save_project(path, &TableProject::default())?;
    println!("✓ Default configuration written to {}", path.display());
    Ok(())
}

fn cmd_validate(config_path: &Path) -> AppResult<()> {
    println!("Validating configuration: {}", config_path.display());
    let project = project_service::load_project(config_path)?;
    project_service::validate_project(&project)?;
    println!("✓ Configuration is valid");

    for set in project_service::list_table_sets(&project)? {
        let gammas: Vec<String> = set.gamma_values.iter().map(|g| g.to_string()).collect();
        println!(
            "  {} - gamma [{}], {} points per table -> {}",
            set.regime,
            gammas.join(", "),
            set.points_per_table,
            set.output.display()
        );
    }
    Ok(())
}

fn cmd_regimes() -> AppResult<()> {
    for regime in FlowRegime::ALL {
        let columns: Vec<&str> = regime.columns().iter().map(|c| c.name).collect();
        println!("  {:<13} {}", regime.key(), columns.join(", "));
    }
    Ok(())
}

fn cmd_point(regime: FlowRegime, mach: f64, gamma: f64) -> AppResult<()> {
    let point = table_service::evaluate_point(regime, mach, gamma)?;
    println!(
        "{} at M = {:.4}, gamma = {}",
        point.regime, point.mach, point.gamma
    );
    for (name, value) in &point.values {
        println!("  {:<10} {:.6}", name, value);
    }
    Ok(())
}
