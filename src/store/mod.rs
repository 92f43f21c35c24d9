mod path;

use crate::model::Mapping;
use anyhow::{Context, Result};
use log::debug;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub use path::resolve_config_path;

const DEFAULT_HEADER: &str = "\
# qcmd config file
# Format: name=command
# Running `qcmd <name>` executes the matching command.
# Lines starting with '#' or ';' are comments and are ignored.
# Example:
#   qcmd shell
#   runs: sh
# shell=sh  # commented out, remove the leading '#' to enable
";

const WRITE_HEADER: &str = "\
# qcmd config file
# Format: name=command
# Lines starting with '#' or ';' are comments and are ignored.
# Running `qcmd <name>` executes the matching command.
# Mappings below are generated by `qcmd add` / `qcmd remove`:
";

/// Outcome of making sure the config file is present.
#[derive(Debug)]
pub enum Bootstrap {
    Existing,
    Created,
    Failed(anyhow::Error),
}

pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Reads every mapping in the file. A file that cannot be read is an
    /// empty mapping; later duplicates overwrite earlier ones.
    pub fn load(&self) -> BTreeMap<String, String> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) => {
                debug!("unable to read {}: {}", self.path.display(), err);
                return BTreeMap::new();
            }
        };
        // Invalid UTF-8 is replaced, not rejected, so one stray byte in a
        // hand-edited comment cannot hide every mapping.
        String::from_utf8_lossy(&bytes)
            .lines()
            .filter_map(Mapping::parse_line)
            .map(|mapping| (mapping.name, mapping.command))
            .collect()
    }

    pub fn create_default(&self) -> Result<()> {
        fs::write(&self.path, DEFAULT_HEADER)
            .with_context(|| format!("unable to create config {}", self.path.display()))
    }

    pub fn ensure_exists(&self) -> Bootstrap {
        if self.exists() {
            return Bootstrap::Existing;
        }
        match self.create_default() {
            Ok(()) => Bootstrap::Created,
            Err(err) => Bootstrap::Failed(err),
        }
    }

    pub fn write(&self, mappings: &BTreeMap<String, String>) -> Result<()> {
        let mut data = String::from(WRITE_HEADER);
        for (name, command) in mappings {
            data.push_str(name);
            data.push('=');
            data.push_str(command);
            data.push('\n');
        }
        fs::write(&self.path, data)
            .with_context(|| format!("unable to write config {}", self.path.display()))?;
        debug!(
            "wrote {} mapping(s) to {}",
            mappings.len(),
            self.path.display()
        );
        Ok(())
    }

    pub fn add_or_update(&self, name: &str, command: &str) -> Result<()> {
        let mut mappings = self.load();
        mappings.insert(name.to_string(), command.to_string());
        self.write(&mappings)
    }

    /// Returns `Ok(false)` without touching the file when `name` is absent.
    pub fn remove(&self, name: &str) -> Result<bool> {
        let mut mappings = self.load();
        if mappings.remove(name).is_none() {
            return Ok(false);
        }
        self.write(&mappings)?;
        Ok(true)
    }
}
