//! Package manager abstraction
//!
//! Builds install command lines for npm, yarn, pnpm, and bun and executes
//! them in the target project directory. Installation is the only subprocess
//! the pipeline spawns.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::process::Command;
use std::str::FromStr;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    /// Argv for installing everything already declared in package.json
    pub fn install_args(&self) -> Vec<&'static str> {
        vec!["install"]
    }

    /// Run `<pm> install` in the project directory
    pub fn install(&self, project_dir: &Path) -> Result<()> {
        let args = self.install_args();
        info!("Running: {} {}", self.command(), args.join(" "));

        let status = Command::new(self.command())
            .args(&args)
            .current_dir(project_dir)
            .status()
            .map_err(|e| {
                Error::PackageManagerError(format!("failed to spawn {}: {e}", self.command()))
            })?;

        if !status.success() {
            return Err(Error::PackageManagerError(format!(
                "{} install exited with {}",
                self.command(),
                status.code().map_or_else(|| "signal".to_string(), |c| c.to_string())
            )));
        }

        debug!("{} install completed", self.command());
        Ok(())
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

impl FromStr for PackageManager {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "npm" => Ok(PackageManager::Npm),
            "yarn" => Ok(PackageManager::Yarn),
            "pnpm" => Ok(PackageManager::Pnpm),
            "bun" => Ok(PackageManager::Bun),
            other => Err(format!("unknown package manager '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_managers() {
        assert_eq!("npm".parse::<PackageManager>(), Ok(PackageManager::Npm));
        assert_eq!("bun".parse::<PackageManager>(), Ok(PackageManager::Bun));
        assert!("cargo".parse::<PackageManager>().is_err());
    }

    #[test]
    fn default_is_npm() {
        assert_eq!(PackageManager::default(), PackageManager::Npm);
    }
}
