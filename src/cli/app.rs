//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use crate::config::GlobalConfig;
use crate::core::models::{FundingStatus, ProjectStatus, SortColumn};
use crate::output::OutputMode;

/// fundtrack - Alumni donor and fundraising project tracking
#[derive(Parser, Debug)]
#[command(
    name = "fundtrack",
    version,
    about = "Track alumni donors and fundraising projects",
    long_about = "Track alumni donors and fundraising projects from the terminal.\n\n\
                  The registry is seeded with sample data for the session; views are\n\
                  computed fresh on every invocation and nothing is persisted."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the dashboard: metrics, recent activity, project progress
    Dashboard,

    /// List the alumni registry, or manage alumni records
    Alumni {
        /// Search by name or company (case-insensitive substring)
        #[arg(short, long)]
        search: Option<String>,

        /// Filter by funding status (or "all")
        #[arg(long)]
        status: Option<String>,

        /// Only graduation years >= this
        #[arg(long)]
        year_from: Option<i32>,

        /// Only graduation years <= this
        #[arg(long)]
        year_to: Option<i32>,

        /// Sort column: name, company, year, status, contributed, location
        #[arg(long)]
        sort: Option<SortColumn>,

        /// Sort descending instead of ascending
        #[arg(long, requires = "sort")]
        desc: bool,

        /// Management action (add, import)
        #[command(subcommand)]
        action: Option<AlumniAction>,
    },

    /// List fundraising projects, or manage project records
    Projects {
        /// Management action (add)
        #[command(subcommand)]
        action: Option<ProjectAction>,
    },

    /// Show version
    Version,
}

/// Management actions for alumni records
#[derive(Subcommand, Debug)]
pub enum AlumniAction {
    /// Add an alumni record (validated; session only)
    Add {
        /// Full name
        #[arg(long)]
        name: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Graduation year
        #[arg(long)]
        year: i32,

        /// Degree label
        #[arg(long)]
        degree: String,

        /// Current employer
        #[arg(long)]
        company: String,

        /// Current role
        #[arg(long)]
        role: String,

        /// Funding status
        #[arg(long, default_value = "potential")]
        status: FundingStatus,

        /// Location
        #[arg(long)]
        location: String,
    },

    /// Import alumni from a spreadsheet (.xlsx, .xls, .csv)
    Import {
        /// Spreadsheet file to import
        file: PathBuf,
    },
}

/// Management actions for project records
#[derive(Subcommand, Debug)]
pub enum ProjectAction {
    /// Add a fundraising project (validated; session only)
    Add {
        /// Project name
        #[arg(long)]
        name: String,

        /// Short description
        #[arg(long)]
        description: String,

        /// Fundraising goal in whole currency units
        #[arg(long)]
        target: u64,

        /// Project status
        #[arg(long, default_value = "planning")]
        status: ProjectStatus,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: String,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = GlobalConfig::load();

    match cli.command {
        Some(Command::Dashboard) => commands::dashboard(output_mode),
        Some(Command::Alumni {
            search,
            status,
            year_from,
            year_to,
            sort,
            desc,
            action: None,
        }) => {
            let options = commands::AlumniListOptions {
                search,
                status,
                year_from,
                year_to,
                sort,
                desc,
            };
            commands::alumni_list(options, &config, output_mode)
        },
        Some(Command::Alumni {
            action: Some(action),
            ..
        }) => commands::alumni_manage(action, output_mode),
        Some(Command::Projects { action: None }) => commands::projects_list(output_mode),
        Some(Command::Projects {
            action: Some(action),
        }) => commands::projects_manage(action, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("fundtrack v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("fundtrack v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'fundtrack --help' for usage");
                println!("Run 'fundtrack dashboard' to see the overview");
            }
            Ok(())
        },
    }
}
