//! Configuration file support
//!
//! Loads analyzer settings from JSON files.
//!
//! Search order:
//! 1. Explicit path (--config CLI flag)
//! 2. `.funcproberc.json` in the working directory
//! 3. `funcprobe.config.json` in the working directory
//!
//! All fields are optional. CLI flags take precedence over config file
//! values.

use crate::bounds::DEFAULT_BRACE_FALLBACK_LINES;
use crate::language::Language;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Funcprobe configuration loaded from a JSON config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FuncprobeConfig {
    /// Lines assumed for a brace body that never balances (default: 10)
    #[serde(default)]
    pub brace_fallback_lines: Option<usize>,

    /// Language tag assumed when none is supplied or detectable
    #[serde(default)]
    pub default_language: Option<String>,
}

/// Resolved configuration with concrete values
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Fallback distance for unbalanced brace bodies
    pub brace_fallback_lines: usize,
    /// Language assumed when the request carries no recognizable tag
    pub default_language: Option<Language>,
    /// Path the config was loaded from (None if defaults)
    pub config_path: Option<PathBuf>,
}

impl FuncprobeConfig {
    /// Validate the configuration for logical errors
    pub fn validate(&self) -> Result<()> {
        if let Some(lines) = self.brace_fallback_lines {
            if lines == 0 {
                anyhow::bail!("brace_fallback_lines must be at least 1 (got 0)");
            }
        }

        if let Some(ref tag) = self.default_language {
            if Language::from_tag(tag).is_none() {
                anyhow::bail!(
                    "default_language must be one of python, javascript, java, cpp (got \"{}\")",
                    tag
                );
            }
        }

        Ok(())
    }

    /// Resolve config into concrete values ready for use
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        self.validate()?;

        Ok(ResolvedConfig {
            brace_fallback_lines: self
                .brace_fallback_lines
                .unwrap_or(DEFAULT_BRACE_FALLBACK_LINES),
            default_language: self.default_language.as_deref().and_then(Language::from_tag),
            config_path: None,
        })
    }
}

impl ResolvedConfig {
    /// Build a ResolvedConfig with all defaults (no config file)
    pub fn defaults() -> Self {
        ResolvedConfig {
            brace_fallback_lines: DEFAULT_BRACE_FALLBACK_LINES,
            default_language: None,
            config_path: None,
        }
    }
}

/// Discover and load a config file from a directory
///
/// Search order:
/// 1. `.funcproberc.json`
/// 2. `funcprobe.config.json`
///
/// Returns `None` if no config file is found (use defaults).
pub fn discover_config(dir: &Path) -> Result<Option<(FuncprobeConfig, PathBuf)>> {
    let rc_path = dir.join(".funcproberc.json");
    if rc_path.exists() {
        let config = load_config_file(&rc_path)?;
        return Ok(Some((config, rc_path)));
    }

    let config_path = dir.join("funcprobe.config.json");
    if config_path.exists() {
        let config = load_config_file(&config_path)?;
        return Ok(Some((config, config_path)));
    }

    Ok(None)
}

/// Load config from an explicit file path
pub fn load_config_file(path: &Path) -> Result<FuncprobeConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;

    let config: FuncprobeConfig = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse config file: {}", path.display()))?;

    config
        .validate()
        .with_context(|| format!("invalid config in: {}", path.display()))?;

    Ok(config)
}

/// Load and resolve config for a working directory
///
/// An explicit path wins over discovery; no config file at all resolves
/// to defaults.
pub fn load_and_resolve(dir: &Path, explicit: Option<&Path>) -> Result<ResolvedConfig> {
    if let Some(path) = explicit {
        let config = load_config_file(path)?;
        let mut resolved = config.resolve()?;
        resolved.config_path = Some(path.to_path_buf());
        return Ok(resolved);
    }

    match discover_config(dir)? {
        Some((config, path)) => {
            let mut resolved = config.resolve()?;
            resolved.config_path = Some(path);
            Ok(resolved)
        }
        None => Ok(ResolvedConfig::defaults()),
    }
}
