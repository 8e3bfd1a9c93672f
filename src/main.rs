use clap::{Parser, Subcommand};
use std::path::PathBuf;

const EXIT_SUCCESS: i32 = 0;
const EXIT_IO: i32 = 1;
const EXIT_PARSE: i32 = 2;
const EXIT_VALIDATION: i32 = 3;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a profile and print the GC Score breakdown (default if no subcommand)
    Score {
        /// Print the report as JSON instead of the terminal table
        #[arg(long)]
        json: bool,

        /// Show the per-rule detail lines under each pillar
        #[arg(long)]
        details: bool,
    },
    /// Create a blank profile template interactively
    Init {
        /// Path to write the profile to (defaults to ~/.config/gc-score/profile.yaml)
        path: Option<String>,
    },
    /// List the onboarding wizard steps
    Steps,
}

#[derive(Parser, Debug)]
#[command(name = "gc-score")]
#[command(about = "Career clarity scoring CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to profile file (defaults to ~/.config/gc-score/profile.yaml)
    #[arg(short, long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Score {
        json: false,
        details: false,
    });

    match command {
        Commands::Init { path } => {
            let path = path.map(PathBuf::from);
            if let Err(e) = gc_score::profile::init::run_init_wizard(path) {
                eprintln!("Init error: {}", e);
                std::process::exit(EXIT_IO);
            }
        }
        Commands::Steps => {
            for (i, step) in gc_score::profile::steps::FORM_STEPS.iter().enumerate() {
                println!(
                    "{:>2}. [{}] {} - {}",
                    i + 1,
                    step.section,
                    step.title,
                    step.description
                );
            }
        }
        Commands::Score { json, details } => {
            let profile_path = cli
                .profile
                .map(PathBuf::from)
                .unwrap_or_else(gc_score::profile::get_profile_path);

            let content = match gc_score::profile::read_profile_file(&profile_path) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Profile error: {}", e);
                    std::process::exit(EXIT_IO);
                }
            };

            let profile = match gc_score::profile::parse_profile(&profile_path, &content) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Profile error: {}", e);
                    std::process::exit(EXIT_PARSE);
                }
            };

            if let Err(errors) = gc_score::profile::validate_profile(&profile) {
                eprintln!("Profile validation errors:");
                for error in errors {
                    eprintln!("  - {}", error);
                }
                std::process::exit(EXIT_VALIDATION);
            }

            if cli.verbose {
                eprintln!("Loaded profile from {}", profile_path.display());
            }

            let report = gc_score::scoring::calculate_score(&profile);

            if json {
                match serde_json::to_string_pretty(&report) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("Failed to serialize report: {}", e);
                        std::process::exit(EXIT_PARSE);
                    }
                }
            } else {
                let use_colors = gc_score::output::should_use_colors();
                let output = gc_score::output::format_report(&report, use_colors, details);
                print!("{}", output);
            }

            if cli.verbose {
                eprintln!();
                eprintln!(
                    "Total: {}/100 ({:?} band, {}th percentile)",
                    report.total_score, report.band, report.percentile
                );
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
