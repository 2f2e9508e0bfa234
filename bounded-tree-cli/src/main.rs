//! bounded-tree - run tree command scripts
//!
//! Usage:
//!   bounded-tree [--capacity <n>] [--policy strict|allow-overwrite] [--script <path>]
//!
//! Without `--script`, commands are read from stdin.

mod command;
mod session;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use bounded_tree::tree::{CapacityPolicy, TreeConfig};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::session::Session;

#[derive(Parser, Debug)]
#[command(name = "bounded-tree")]
#[command(about = "Run command scripts against a capacity-bounded ordered tree")]
struct Cli {
    /// Maximum number of entries the tree may hold
    #[arg(long, short = 'c', default_value_t = 10)]
    capacity: usize,

    /// What an insert does once the tree is full
    #[arg(long, short = 'p', value_enum, default_value_t = PolicyArg::Strict)]
    policy: PolicyArg,

    /// Script file to run (default: stdin)
    #[arg(long, short = 's')]
    script: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum PolicyArg {
    /// Reject every insert into a full tree
    Strict,
    /// Accept value updates of existing keys in a full tree
    AllowOverwrite,
}

impl From<PolicyArg> for CapacityPolicy {
    fn from(policy: PolicyArg) -> Self {
        match policy {
            PolicyArg::Strict => Self::Strict,
            PolicyArg::AllowOverwrite => Self::AllowOverwrite,
        }
    }
}

impl Cli {
    fn tree_config(&self) -> Result<TreeConfig> {
        let config = TreeConfig::new(self.capacity)
            .with_context(|| format!("invalid --capacity {}", self.capacity))?;
        Ok(config.with_policy(self.policy.into()))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.tree_config()?;
    tracing::debug!(
        capacity = config.capacity(),
        policy = ?config.policy(),
        "starting session"
    );

    let mut session = Session::new(config);
    let stdout = io::stdout();
    let mut output = stdout.lock();

    match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            session.run(BufReader::new(file), &mut output)?;
        }
        None => session.run(io::stdin().lock(), &mut output)?,
    }

    tracing::debug!(length = session.tree().len(), "script finished");
    Ok(())
}
