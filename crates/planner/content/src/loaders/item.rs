//! Item and perk catalogue loaders.
//!
//! Requirements may be written either as structured [`Criterion`] nodes or
//! as the game's raw `(stat, operator, value)` triples; raw triples are
//! decoded and appended after the structured ones.

use std::path::Path;

use anyhow::Context;
use planner_core::{Criterion, Item, ItemId, SpellData, StatValue};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Raw requirement triple as exported by the game's item database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRequirement {
    pub stat: u16,
    pub operator: u32,
    pub value: i32,
}

/// One catalogue entry as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub stats: Vec<StatValue>,
    #[serde(default)]
    pub spell_data: Vec<SpellData>,
    #[serde(default)]
    pub requirements: Vec<Criterion>,
    #[serde(default)]
    pub raw_requirements: Vec<RawRequirement>,
}

impl ItemRecord {
    pub fn into_item(self) -> LoadResult<Item> {
        let mut requirements = self.requirements;
        for raw in &self.raw_requirements {
            let node = Criterion::from_raw(raw.stat, raw.operator, raw.value)
                .with_context(|| format!("item {} ({})", self.id, self.name))?;
            requirements.push(node);
        }
        Ok(Item {
            id: self.id,
            name: self.name,
            stats: self.stats,
            spell_data: self.spell_data,
            requirements,
        })
    }
}

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemRecord>,
}

/// Perk catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerkCatalog {
    pub perks: Vec<ItemRecord>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing ItemCatalog
    pub fn load(path: &Path) -> LoadResult<Vec<Item>> {
        let content = read_file(path)?;
        let catalog: ItemCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let items = decode(catalog.items)
            .with_context(|| format!("Invalid item in {}", path.display()))?;
        tracing::debug!(path = %path.display(), count = items.len(), "loaded item catalog");
        Ok(items)
    }
}

/// Loader for perk catalog from RON files.
pub struct PerkLoader;

impl PerkLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Item>> {
        let content = read_file(path)?;
        let catalog: PerkCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse perk catalog RON: {}", e))?;

        let perks = decode(catalog.perks)
            .with_context(|| format!("Invalid perk in {}", path.display()))?;
        tracing::debug!(path = %path.display(), count = perks.len(), "loaded perk catalog");
        Ok(perks)
    }
}

fn decode(records: Vec<ItemRecord>) -> LoadResult<Vec<Item>> {
    records.into_iter().map(ItemRecord::into_item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::{CompareOp, StatId, TriggerEvent};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_items_with_both_requirement_forms() {
        let file = write_temp(
            r#"(
    items: [
        (
            id: 246585,
            name: "Belt Component Platform",
            spell_data: [
                (event: Wield, effects: [Modify(stat: 181, amount: 1206)]),
            ],
            raw_requirements: [
                (stat: 60, operator: 0, value: 1),
                (stat: 60, operator: 0, value: 9),
                (stat: 0, operator: 3, value: 0),
            ],
        ),
        (
            id: 1,
            name: "Plain Ring",
            stats: [(stat: 17, value: 4)],
            requirements: [Stat(stat: 54, op: AtLeast, value: 10)],
        ),
    ],
)"#,
        );

        let items = ItemLoader::load(file.path()).unwrap();
        assert_eq!(items.len(), 2);

        let belt = &items[0];
        assert_eq!(belt.spell_data[0].event, TriggerEvent::Wield);
        assert_eq!(
            belt.requirements,
            vec![
                Criterion::equals(StatId::PROFESSION, 1),
                Criterion::equals(StatId::PROFESSION, 9),
                Criterion::Or,
            ]
        );

        let ring = &items[1];
        assert_eq!(ring.stat(StatId::AGILITY), Some(4));
        assert_eq!(
            ring.requirements,
            vec![Criterion::stat(StatId::LEVEL, CompareOp::AtLeast, 10)]
        );
    }

    #[test]
    fn unknown_operator_is_reported_with_item() {
        let file = write_temp(
            r#"(items: [(id: 7, name: "Odd", raw_requirements: [(stat: 1, operator: 999, value: 0)])])"#,
        );
        let err = ItemLoader::load(file.path()).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("#7"), "{message}");
        assert!(message.contains("999"), "{message}");
    }

    #[test]
    fn loads_perks() {
        let file = write_temp(
            r#"(perks: [(id: 3, name: "Acquisition", spell_data: [(event: Wear, effects: [Modify(stat: 160, amount: 5)])])])"#,
        );
        let perks = PerkLoader::load(file.path()).unwrap();
        assert_eq!(perks.len(), 1);
        assert_eq!(perks[0].name, "Acquisition");
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(ItemLoader::load(Path::new("/nonexistent/items.ron")).is_err());
    }
}
