use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use boramon_core::{RuleSet, analyze, taxonomy};
use boramon_report::{Summary, assemble, io, load_report, suggest_keywords};

mod display;

#[derive(Parser)]
#[command(name = "boramon", version, about = "Monitor de fenómenos corruptivos sobre boletines oficiales")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify and score a collected-notice table, writing the enriched report.
    Analyze {
        /// Collected notices (.csv or .json).
        #[arg(long)]
        input: PathBuf,
        /// Enriched report destination (.csv or .json).
        #[arg(long)]
        output: PathBuf,
        /// Externalised rule table (JSON); defaults to the built-in taxonomy.
        #[arg(long)]
        rules: Option<PathBuf>,
    },
    /// Print headline metrics for an existing report (legacy schemas accepted).
    Summary {
        /// Report file (.csv or .json).
        #[arg(long)]
        report: PathBuf,
    },
    /// Suggest keyword candidates from the unidentified bucket of a report.
    Suggest {
        /// Report file (.csv or .json).
        #[arg(long)]
        report: PathBuf,
        /// How many candidates to list.
        #[arg(long, default_value_t = 20)]
        top: usize,
    },
    /// Print the active rule taxonomy in priority order.
    Rules {
        /// Externalised rule table (JSON); defaults to the built-in taxonomy.
        #[arg(long)]
        rules: Option<PathBuf>,
    },
}

fn load_rules(path: Option<&PathBuf>) -> anyhow::Result<RuleSet> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading rule table {}", path.display()))?;
            let rules = RuleSet::from_json(&json)
                .with_context(|| format!("parsing rule table {}", path.display()))?;
            info!(categories = rules.len(), path = %path.display(), "rule table loaded");
            Ok(rules)
        }
        None => Ok(taxonomy::builtin()),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze {
            input,
            output,
            rules,
        } => {
            let rules = load_rules(rules.as_ref())?;
            let notices = io::read_notices(&input)
                .with_context(|| format!("reading collected table {}", input.display()))?;
            let rows = assemble(&analyze(&rules, &notices));
            io::write_report(&output, &rows)
                .with_context(|| format!("writing report {}", output.display()))?;
            print!("{}", display::render_summary(&Summary::compute(&rows)));
        }
        Command::Summary { report } => {
            let rows = load_report(&report)
                .with_context(|| format!("loading report {}", report.display()))?;
            print!("{}", display::render_summary(&Summary::compute(&rows)));
        }
        Command::Suggest { report, top } => {
            let rows = load_report(&report)
                .with_context(|| format!("loading report {}", report.display()))?;
            let suggestions = suggest_keywords(&rows, top);
            print!("{}", display::render_suggestions(&suggestions));
        }
        Command::Rules { rules } => {
            let rules = load_rules(rules.as_ref())?;
            print!("{}", display::render_rules(&rules));
        }
    }

    Ok(())
}
