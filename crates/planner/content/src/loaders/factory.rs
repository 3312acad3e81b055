//! Content factory for building the planner catalogue from data files.

use std::path::{Path, PathBuf};

use planner_core::RulesConfig;

use crate::catalog::ContentCatalog;
use crate::loaders::{ItemLoader, LoadResult, PerkLoader, RulesLoader};

/// Content factory that loads all planner content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── rules.toml   (optional)
/// ├── items.ron
/// └── perks.ron    (optional)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load rules from `rules.toml`, or defaults when the file is absent.
    pub fn load_rules(&self) -> LoadResult<RulesConfig> {
        let path = self.data_dir.join("rules.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no rules file; using defaults");
            return Ok(RulesConfig::default());
        }
        RulesLoader::load(&path)
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<planner_core::Item>> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load(&path)
    }

    /// Load perk catalog from `perks.ron`; an absent file means no perks.
    pub fn load_perks(&self) -> LoadResult<Vec<planner_core::Item>> {
        let path = self.data_dir.join("perks.ron");
        if !path.exists() {
            return Ok(Vec::new());
        }
        PerkLoader::load(&path)
    }

    /// Load items and perks into one lookup catalogue.
    pub fn load_catalog(&self) -> LoadResult<ContentCatalog> {
        Ok(ContentCatalog::from_parts(
            self.load_items()?,
            self.load_perks()?,
        ))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::ItemId;
    use tempfile::TempDir;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn loads_directory_with_optional_files_missing() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("items.ron"),
            r#"(items: [(id: 5, name: "Nano", stats: [(stat: 75, value: 100)])])"#,
        )
        .unwrap();

        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_rules().unwrap(), RulesConfig::default());

        let catalog = factory.load_catalog().unwrap();
        assert_eq!(catalog.item_count(), 1);
        assert_eq!(catalog.perk_count(), 0);
        assert_eq!(catalog.nanos().count(), 1);
        assert!(catalog.item(ItemId(5)).is_some());
    }

    #[test]
    fn missing_items_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(ContentFactory::new(dir.path()).load_catalog().is_err());
    }
}
