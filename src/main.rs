use clap::Parser;
use colored::Colorize;
use miette::{Result, WrapErr};
use std::path::{Path, PathBuf};
use tracing::info;

use studentxml::{
    sort_data, Column, Config, ReportFormat, Reporter, Session, Strategy, StudentFilter,
};

/// studentxml - Parse, filter and sort student XML rosters
#[derive(Parser, Debug)]
#[command(name = "studentxml")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// XML file containing <Student> elements
    file: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Parsing method
    #[arg(short, long, value_enum)]
    parser: Option<Strategy>,

    /// Column to sort the rows by
    #[arg(short, long, value_enum)]
    sort: Option<Column>,

    /// Keep students whose name contains this text (case-insensitive)
    #[arg(long)]
    name: Option<String>,

    /// Keep students of this faculty (case-insensitive, exact)
    #[arg(long)]
    faculty: Option<String>,

    /// Keep students whose room contains this text (case-insensitive)
    #[arg(long)]
    room: Option<String>,

    /// List the faculties found in the file and exit
    #[arg(long)]
    faculties: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<ReportFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip the Name/Faculty structure check
    #[arg(long)]
    no_validate: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only output results
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn filter(&self) -> StudentFilter {
        StudentFilter::new()
            .with_name(self.name.as_deref().unwrap_or_default())
            .with_faculty(self.faculty.as_deref().unwrap_or_default())
            .with_room(self.room.as_deref().unwrap_or_default())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    info!("studentxml v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;

    if cli.faculties {
        return list_faculties(&cli);
    }

    run(&config, &cli)
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path).wrap_err("Failed to load configuration")?
    } else {
        Config::from_default_locations(Path::new("."))
            .wrap_err("Failed to load configuration")?
    };

    // Override with CLI arguments
    if let Some(strategy) = cli.parser {
        config.strategy = strategy;
    }
    if cli.sort.is_some() {
        config.sort = cli.sort;
    }
    if let Some(format) = cli.format {
        config.report.format = format;
    }
    if cli.no_validate {
        config.validate = false;
    }

    Ok(config)
}

fn list_faculties(cli: &Cli) -> Result<()> {
    let faculties = studentxml::faculties(&cli.file)?;

    if faculties.is_empty() && !cli.quiet {
        eprintln!("{}", "No faculties found.".yellow());
    }
    for faculty in faculties {
        println!("{}", faculty);
    }

    Ok(())
}

fn run(config: &Config, cli: &Cli) -> Result<()> {
    let mut session = Session::new().with_validation(config.validate);

    let faculties = session.select_file(&cli.file)?;
    info!("Found {} faculties", faculties.len());

    session.select_strategy(config.strategy);
    let mut table = session.parse(config.sort)?;

    if !cli.quiet {
        eprintln!(
            "{}",
            format!(
                "Parsed {} students with the {} parser",
                table.len(),
                config.strategy
            )
            .dimmed()
        );
    }

    let filter = cli.filter();
    if !filter.is_empty() {
        table = session.search(&filter)?;
        if let Some(column) = config.sort {
            table = sort_data(table, column);
        }
        info!("{} students match {:?}", table.len(), filter);
    }

    let reporter = Reporter::new(config.report.format, cli.output.clone())
        .with_empty_message(config.report.empty_message.clone());
    reporter.report(&table)?;

    Ok(())
}
