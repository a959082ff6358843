use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use release_kit::cli::orchestration::{self, BumpWorkflowArgs, REPOSITORY_ENV};
use release_kit::config;
use release_kit::fetch::SystemRunner;
use release_kit::ui;

#[derive(Parser)]
#[command(
    name = "release-kit",
    version,
    about = "Release automation: version bumps, manifest patching, installer scripts and pinned dependencies"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase log verbosity (-v info, -vv debug)"
    )]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the next version based on commits since the current release tag
    Bump {
        #[arg(help = "Currently released version, e.g. 1.2.3")]
        current_version: String,

        #[arg(long, help = "Revision to compare against: tag, branch or commit (default: <tag_prefix><CURRENT_VERSION>)")]
        since: Option<String>,

        #[arg(long, help = "Repository to read history from (default: current directory)")]
        repo: Option<PathBuf>,

        #[arg(long, help = "Force the bump type: major, minor or patch")]
        kind: Option<String>,
    },

    /// Rewrite the `version = "..."` line of a manifest
    SetVersion {
        #[arg(help = "Manifest file to update")]
        file: PathBuf,

        #[arg(help = "New semantic version")]
        version: String,
    },

    /// Generate installer scripts from templates (needs GITHUB_REPOSITORY)
    BuildScripts {
        #[arg(long, help = "Project root (default: current directory)")]
        root: Option<PathBuf>,
    },

    /// Clone pinned dependency repositories that are not present yet
    CloneDeps {
        #[arg(long, help = "Project root (default: current directory)")]
        root: Option<PathBuf>,
    },
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<()> {
    let cwd = std::env::current_dir().context("Cannot determine current directory")?;

    match args.command {
        Command::Bump {
            current_version,
            since,
            repo,
            kind,
        } => {
            let config = config::load_config(args.config.as_deref(), &cwd)?;
            let workflow = BumpWorkflowArgs {
                current_version,
                since,
                repo_path: repo.unwrap_or_else(|| cwd.clone()),
                kind,
            };

            let outcome = orchestration::run_bump(&workflow, &config)?;
            for warning in &outcome.warnings {
                ui::display_boundary_warning(warning);
            }
            if args.verbose > 0 {
                ui::display_commit_analysis(&outcome.subjects, &outcome.tag, outcome.kind);
            }
            ui::print_version(&outcome.next);
        }

        Command::SetVersion { file, version } => {
            let outcome = orchestration::run_set_version(&file, &version)?;
            for warning in &outcome.warnings {
                ui::display_boundary_warning(warning);
            }
            ui::display_success(&format!(
                "Updated {} to version {}",
                outcome.path.display(),
                outcome.version
            ));
        }

        Command::BuildScripts { root } => {
            let root = root.unwrap_or_else(|| cwd.clone());
            let config = config::load_config(args.config.as_deref(), &root)?;
            let repository = std::env::var(REPOSITORY_ENV).ok();

            let report =
                orchestration::run_build_scripts(&root, &config, repository.as_deref())?;
            ui::display_build_report(&report);
        }

        Command::CloneDeps { root } => {
            let root = root.unwrap_or_else(|| cwd.clone());
            let config = config::load_config(args.config.as_deref(), &root)?;

            ui::display_status("Setting up pinned dependencies...");
            let report = orchestration::run_clone_deps(&root, &config, &SystemRunner)?;
            ui::display_fetch_report(&report);
            ui::display_success("All dependencies are installed successfully!");
        }
    }

    Ok(())
}
