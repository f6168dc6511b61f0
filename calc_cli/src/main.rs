//! # Steel Beam Calculator CLI
//!
//! Command-line front end for the beam analysis engine.
//!
//! ```text
//! calc_cli analyze --load 10 --span 6 --designation UB406x178x74
//! calc_cli analyze --load 60 --span 7 --load-type point --json
//! calc_cli beams --search UB406
//! calc_cli beam UB406x178x74
//! calc_cli health
//! ```
//!
//! Logs go to stderr; results go to stdout.

mod config;
mod http_catalog;
mod report;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use calc_core::calculations::analyze_with_settings;
use calc_core::catalog::SectionCatalog;
use calc_core::{AnalysisRequest, CalcError};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use crate::config::CatalogArgs;

#[derive(Parser, Debug)]
#[command(name = "calc_cli", version, about = "Steel beam analysis and section selection")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(flatten)]
    catalog: CatalogArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a beam, or select the lightest adequate one
    Analyze(AnalyzeArgs),
    /// List catalog sections
    Beams(BeamsArgs),
    /// Show one catalog section
    Beam(BeamArgs),
    /// Report catalog connectivity
    Health(HealthArgs),
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Section designation; omit to select the optimal section
    #[arg(short, long)]
    designation: Option<String>,

    /// Load magnitude (kN/m for uniform, kN for point)
    #[arg(long, required_unless_present = "request")]
    load: Option<f64>,

    /// Span length in metres
    #[arg(long, required_unless_present = "request")]
    span: Option<f64>,

    /// Load type: uniform or point
    #[arg(long, default_value = "uniform")]
    load_type: String,

    /// Factor dividing the yield strength
    #[arg(long)]
    safety_factor: Option<f64>,

    /// Steel grade (S235, S275, S355, S460)
    #[arg(long)]
    grade: Option<String>,

    /// Deflection limit as span divided by this ratio
    #[arg(long)]
    deflection_ratio: Option<f64>,

    /// Read a JSON analysis request from a file, or `-` for stdin
    #[arg(long, conflicts_with_all = ["load", "span"])]
    request: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct BeamsArgs {
    /// Only list designations starting with this prefix
    #[arg(short, long)]
    search: Option<String>,

    /// Print the sections as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct BeamArgs {
    /// Section designation
    designation: String,

    /// Print the section as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct HealthArgs {
    /// Print the status as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct HealthReport {
    status: &'static str,
    catalog_source: String,
    catalog_connection: String,
    available_beams: usize,
}

impl Commands {
    fn json(&self) -> bool {
        match self {
            Commands::Analyze(args) => args.json,
            Commands::Beams(args) => args.json,
            Commands::Beam(args) => args.json,
            Commands::Health(args) => args.json,
        }
    }
}

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet || cli.command.json() {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn read_request(path: &Path) -> Result<AnalysisRequest> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read request from stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?
    };
    let request = serde_json::from_str(&text).context("invalid analysis request")?;
    Ok(request)
}

fn build_request(args: &AnalyzeArgs) -> Result<AnalysisRequest> {
    if let Some(path) = &args.request {
        return read_request(path);
    }

    let (Some(load), Some(span)) = (args.load, args.span) else {
        bail!("--load and --span are required");
    };

    let mut request = AnalysisRequest::new(load, span).with_load_type(args.load_type.as_str());
    if let Some(designation) = &args.designation {
        request = request.with_designation(designation.as_str());
    }
    if let Some(factor) = args.safety_factor {
        request = request.with_safety_factor(factor);
    }
    if let Some(grade) = &args.grade {
        request = request.with_grade(grade.as_str());
    }
    if let Some(ratio) = args.deflection_ratio {
        request = request.with_deflection_limit_ratio(ratio);
    }
    Ok(request)
}

fn run_analyze(args: &AnalyzeArgs, catalog_args: &CatalogArgs) -> Result<()> {
    let request = build_request(args)?;
    let settings = catalog_args.design_settings()?;
    let catalog = catalog_args.open_catalog()?;

    let result = analyze_with_settings(&request, &settings, catalog.as_ref())?;
    if args.json {
        print_json(&result)
    } else {
        print!("{}", report::AnalysisReport(&result));
        Ok(())
    }
}

fn run_beams(args: &BeamsArgs, catalog: &dyn SectionCatalog) -> Result<()> {
    let mut sections = catalog.list_sections()?;
    if let Some(prefix) = &args.search {
        sections.retain(|s| s.has_prefix(prefix));
    }

    if args.json {
        print_json(&sections)
    } else {
        print!("{}", report::SectionTable(&sections));
        Ok(())
    }
}

fn run_beam(args: &BeamArgs, catalog: &dyn SectionCatalog) -> Result<()> {
    let section = catalog
        .get_section(&args.designation)?
        .ok_or_else(|| CalcError::section_not_found(&args.designation))?;

    if args.json {
        print_json(&section)
    } else {
        print!("{}", report::SectionDetail(&section));
        Ok(())
    }
}

fn run_health(args: &HealthArgs, catalog: &dyn SectionCatalog) -> Result<()> {
    let (catalog_connection, available_beams) = match catalog.list_sections() {
        Ok(sections) => ("connected".to_string(), sections.len()),
        Err(e) => (format!("disconnected: {}", e), 0),
    };
    let report = HealthReport {
        status: "healthy",
        catalog_source: catalog.source_name(),
        catalog_connection,
        available_beams,
    };

    if args.json {
        print_json(&report)
    } else {
        println!("Status:    {}", report.status);
        println!("Catalog:   {} ({})", report.catalog_source, report.catalog_connection);
        println!("Sections:  {}", report.available_beams);
        Ok(())
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Analyze(args) => run_analyze(args, &cli.catalog),
        Commands::Beams(args) => run_beams(args, cli.catalog.open_catalog()?.as_ref()),
        Commands::Beam(args) => run_beam(args, cli.catalog.open_catalog()?.as_ref()),
        Commands::Health(args) => run_health(args, cli.catalog.open_catalog()?.as_ref()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            if let Some(calc_error) = e.downcast_ref::<CalcError>() {
                if let Ok(details) = serde_json::to_string(calc_error) {
                    eprintln!("{}", details);
                }
            }
            ExitCode::FAILURE
        }
    }
}
