//! labelsim - Label Similarity CLI
//!
//! Scores short labels against each other from the command line.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use label_similarity::config::{self, Config};
use label_similarity::error::check_threshold;
use label_similarity::similarity::BigramSequence;
use label_similarity::utils::{find_first_similar, find_first_similar_near, Splitter};
use label_similarity::Metric;
use tracing::{debug, info};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Accept thresholds outside [0.0, 1.0]
    #[arg(long, global = true)]
    allow_any_threshold: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the similarity of two strings
    Score {
        a: String,
        b: String,
        #[arg(short, long, value_enum)]
        metric: Option<Metric>,
    },
    /// Exit 0 if two strings are similar, 1 otherwise
    Check {
        a: String,
        b: String,
        #[arg(short, long)]
        threshold: Option<f64>,
        #[arg(short, long, value_enum)]
        metric: Option<Metric>,
    },
    /// Find the first field of a delimited list similar to a term
    Find {
        term: String,
        list: String,
        #[arg(short, long)]
        delimiter: Option<char>,
        #[arg(short, long)]
        threshold: Option<f64>,
        /// Expected position; farther fields need a higher score
        #[arg(long)]
        near: Option<usize>,
        #[arg(short, long, value_enum)]
        metric: Option<Metric>,
    },
    /// Print the bigrams extracted from a string
    Bigrams { text: String },
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Setup logging ahead of config loading; results go to stdout, logs to stderr
    let explicit_filter = if args.verbose {
        Some(EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().ok()
    };
    let from_config = explicit_filter.is_none();
    let (filter, filter_handle) =
        reload::Layer::new(explicit_filter.unwrap_or_else(|| EnvFilter::new("info")));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    let (config_path, config) = match &args.config {
        Some(path) => (path.clone(), Config::load_from(path)?),
        None => (config::config_path(), Config::load()?),
    };
    if from_config {
        filter_handle.reload(EnvFilter::new(&config.log_level))?;
    }

    debug!("📄 Using config {:?}: {:?}", config_path, config);

    let resolve_threshold = |threshold: Option<f64>| -> Result<f64> {
        let threshold = threshold.unwrap_or(config.threshold);
        if args.allow_any_threshold {
            Ok(threshold)
        } else {
            Ok(check_threshold(threshold)?)
        }
    };

    match &args.command {
        Command::Score { a, b, metric } => {
            let metric = metric.unwrap_or(config.metric);
            let score = metric.score(a, b);
            info!("📏 {} score of '{}' vs '{}'", metric.name(), a, b);
            println!("{:.4}", score);
            Ok(ExitCode::SUCCESS)
        }
        Command::Check {
            a,
            b,
            threshold,
            metric,
        } => {
            let threshold = resolve_threshold(*threshold)?;
            let metric = metric.unwrap_or(config.metric);
            if metric.is_similar(a, b, threshold) {
                println!("similar");
                Ok(ExitCode::SUCCESS)
            } else {
                println!("different");
                Ok(ExitCode::from(1))
            }
        }
        Command::Find {
            term,
            list,
            delimiter,
            threshold,
            near,
            metric,
        } => {
            let threshold = resolve_threshold(*threshold)?;
            let metric = metric.unwrap_or(config.metric);
            let delim = config::parse_delimiter(delimiter.unwrap_or(config.delimiter))?;
            let candidates: Vec<&str> = Splitter::new(list, delim).collect();
            info!("🔍 Searching '{}' among {} fields", term, candidates.len());

            let found = match near {
                Some(expected) => {
                    find_first_similar_near(term, &candidates, threshold, *expected, metric)
                }
                None => find_first_similar(term, &candidates, threshold, metric),
            };

            match found {
                Some(m) => {
                    println!("{}\t{}\t{:.4}", m.index, m.value, m.score);
                    Ok(ExitCode::SUCCESS)
                }
                None => Ok(ExitCode::from(1)),
            }
        }
        Command::Bigrams { text } => {
            for bigram in &BigramSequence::extract(text) {
                println!("{}", bigram);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
