//! Rules configuration loader.

use std::path::Path;

use planner_core::RulesConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`RulesConfig`] from TOML files. Missing keys keep their
/// defaults.
pub struct RulesLoader;

impl RulesLoader {
    /// Load rules from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing RulesConfig
    pub fn load(path: &Path) -> LoadResult<RulesConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<RulesConfig> {
        let rules: RulesConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse rules TOML: {}", e))?;

        if rules.trickle_divisor <= 0 {
            anyhow::bail!("trickle_divisor must be positive, got {}", rules.trickle_divisor);
        }
        Ok(rules)
    }
}
