//! Script execution against a single tree
//!
//! A [`Session`] owns one [`BoundedTree`] and applies parsed commands to it,
//! writing one result line per command.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use bounded_tree::tree::{BoundedTree, KeyValuePair, TreeConfig, TreeError};

use crate::command::{Command, parse_line};

/// The tree type driven by scripts.
pub type ScriptTree = BoundedTree<i64, String>;

/// Applies script commands to one tree.
#[derive(Debug)]
pub struct Session {
    tree: ScriptTree,
}

impl Session {
    /// Creates a session over an empty tree.
    pub fn new(config: TreeConfig) -> Self {
        Self {
            tree: BoundedTree::with_config(bounded_tree::comparator::NaturalOrder, config),
        }
    }

    /// The tree as it stands after the commands applied so far.
    pub const fn tree(&self) -> &ScriptTree {
        &self.tree
    }

    /// Runs every line of `input`, writing results to `output`.
    ///
    /// Parse errors and tree errors are written as `error: ...` lines and the
    /// script continues. Only I/O failures stop the run.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<()> {
        for (index, line) in input.lines().enumerate() {
            let number = index + 1;
            let line = line.with_context(|| format!("failed to read script line {number}"))?;

            let outcome = match parse_line(&line) {
                Ok(None) => continue,
                Ok(Some(command)) => self.execute(&command).map_err(anyhow::Error::from),
                Err(error) => Err(anyhow::Error::from(error)),
            };

            let written = match outcome {
                Ok(text) => writeln!(output, "{text}"),
                Err(error) => {
                    tracing::warn!(line = number, %error, "command failed");
                    writeln!(output, "error: line {number}: {error}")
                }
            };
            written.with_context(|| format!("failed to write result of line {number}"))?;
        }

        output.flush().context("failed to flush output")
    }

    /// Applies one command and renders its result.
    pub fn execute(&mut self, command: &Command) -> Result<String, TreeError> {
        tracing::trace!(?command, length = self.tree.len(), "executing");

        let text = match command {
            Command::Add { key, value } => match self.tree.insert(*key, value.clone())? {
                None => "added".to_string(),
                Some(previous) => format!("replaced {previous}"),
            },
            Command::Find { key } => describe(self.tree.find(key)),
            Command::Delete { key } => match self.tree.remove(key)? {
                Some(removed) => format!("deleted {removed}"),
                None => "not found".to_string(),
            },
            Command::Min => self.tree.minimum_key_value()?.to_string(),
            Command::Max => self.tree.maximum_key_value()?.to_string(),
            Command::Size => self.tree.len().to_string(),
            Command::Full => self.tree.is_full().to_string(),
            Command::Print => self.tree.to_string(),
            Command::InOrder => {
                let mut keys = String::new();
                self.tree.process_inorder(|key, _| {
                    keys.push_str(&key.to_string());
                    keys.push(' ');
                });
                keys
            }
            Command::Leaves => self
                .tree
                .leaf_values()
                .into_iter()
                .collect::<Vec<_>>()
                .join(" "),
            Command::SubTree { lower, upper } => self.tree.sub_tree(lower, upper)?.to_string(),
            Command::Height => self.tree.height().to_string(),
        };

        Ok(text)
    }
}

fn describe(found: Option<KeyValuePair<i64, String>>) -> String {
    found.map_or_else(|| "not found".to_string(), |pair| pair.to_string())
}
