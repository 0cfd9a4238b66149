//! Demo settings, loaded from JSON and overridden from the command line.

use clap::Args;
use rl::registry;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("max_steps must be at least 1")]
    ZeroStepBudget,
}

/// Every knob the demo commands read. Missing JSON fields take the defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Reset seed of the report episode, and base seed of the quick demo.
    pub seed: u64,
    pub max_steps: usize,
    /// Random-policy episodes in the quick demo.
    pub demo_episodes: usize,
    /// Where figures are written.
    pub output_dir: PathBuf,
    pub preferred_env: String,
    /// Used when `preferred_env` is unavailable in this build.
    pub fallback_env: String,
    pub report_env: String,
    /// Seed of the synthetic training curves.
    pub synthetic_seed: u64,
    /// Write the report episode as JSON here, relative to `output_dir`.
    pub dump_trace: Option<PathBuf>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_steps: 500,
            demo_episodes: 3,
            output_dir: PathBuf::from("."),
            preferred_env: registry::BIPEDAL_WALKER.to_owned(),
            fallback_env: registry::CART_POLE.to_owned(),
            report_env: registry::CART_POLE.to_owned(),
            synthetic_seed: 7,
            dump_trace: None,
        }
    }
}

impl DemoConfig {
    /// # Errors
    ///
    /// Malformed JSON, unknown fields, or values rejected by [`Self::validate`].
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// [`ConfigError::Read`] when the file cannot be read, otherwise as
    /// [`Self::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// # Errors
    ///
    /// [`ConfigError::ZeroStepBudget`] when `max_steps` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_steps == 0 {
            return Err(ConfigError::ZeroStepBudget);
        }
        Ok(())
    }

    pub fn output_path(&self, file: impl AsRef<Path>) -> PathBuf {
        self.output_dir.join(file)
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Args, Clone, Debug, Default)]
pub struct Overrides {
    /// Directory figures are written to
    #[arg(long = "out")]
    pub output_dir: Option<PathBuf>,

    /// Seed for environment resets and the random policy
    #[arg(long)]
    pub seed: Option<u64>,

    /// Step budget per episode
    #[arg(long)]
    pub max_steps: Option<usize>,

    /// Number of quick-demo episodes
    #[arg(long = "episodes")]
    pub demo_episodes: Option<usize>,

    /// Also write the report episode trace as JSON to this file
    #[arg(long)]
    pub dump_trace: Option<PathBuf>,
}

impl Overrides {
    #[must_use]
    pub fn apply(self, mut config: DemoConfig) -> DemoConfig {
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(steps) = self.max_steps {
            config.max_steps = steps;
        }
        if let Some(episodes) = self.demo_episodes {
            config.demo_episodes = episodes;
        }
        if self.dump_trace.is_some() {
            config.dump_trace = self.dump_trace;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_course_scripts() {
        let config = DemoConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.max_steps, 500);
        assert_eq!(config.demo_episodes, 3);
        assert_eq!(config.preferred_env, "BipedalWalker-v3");
        assert_eq!(config.fallback_env, "CartPole-v1");
        assert_eq!(config.report_env, "CartPole-v1");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = DemoConfig::from_json_str(r#"{ "seed": 7, "output_dir": "figs" }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.output_dir, PathBuf::from("figs"));
        assert_eq!(config.max_steps, 500);
        assert_eq!(config.output_path("a.png"), PathBuf::from("figs").join("a.png"));
    }

    #[test]
    fn unknown_fields_and_zero_budget_are_rejected() {
        assert!(matches!(
            DemoConfig::from_json_str(r#"{ "seed": 1, "gamma": 0.99 }"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            DemoConfig::from_json_str(r#"{ "max_steps": 0 }"#),
            Err(ConfigError::ZeroStepBudget)
        ));
    }

    #[test]
    fn overrides_win_over_file_values() {
        let overrides = Overrides { seed: Some(9), max_steps: Some(50), ..Overrides::default() };
        let config = overrides.apply(DemoConfig { seed: 1, demo_episodes: 5, ..DemoConfig::default() });
        assert_eq!(config.seed, 9);
        assert_eq!(config.max_steps, 50);
        assert_eq!(config.demo_episodes, 5);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = DemoConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
