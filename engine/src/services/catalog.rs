//! Food catalog and free-text label resolver

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use serde::Deserialize;
use shared::validation::validate_food_record;
use shared::{FoodCategory, FoodRecord};

use crate::error::{EngineError, EngineResult};

/// Bundled reference table: per-100g values, typical portion weights and
/// bilingual aliases for common foods.
static BUILTIN_CATALOG: LazyLock<Arc<FoodCatalog>> = LazyLock::new(|| {
    let data = include_str!("../../data/food_catalog.json");
    Arc::new(FoodCatalog::from_json(data).expect("bundled food catalog is valid"))
});

/// On-disk catalog format
#[derive(Deserialize)]
struct CatalogFile {
    foods: Vec<FoodRecord>,
}

/// Read-only table of known foods with a free-text resolver
///
/// A catalog is immutable once constructed and safe to share across any
/// number of concurrent readers. Records keep their declaration order, which
/// makes substring resolution deterministic.
#[derive(Debug, Clone)]
pub struct FoodCatalog {
    records: Vec<FoodRecord>,
}

impl FoodCatalog {
    /// Build a catalog from records, validating every entry
    pub fn new(records: Vec<FoodRecord>) -> EngineResult<Self> {
        if records.is_empty() {
            return Err(EngineError::EmptyCatalog);
        }

        let mut seen_keys = HashSet::new();
        for record in &records {
            validate_food_record(record).map_err(|reason| EngineError::InvalidRecord {
                key: record.key.clone(),
                reason: reason.to_string(),
            })?;
            if !seen_keys.insert(record.key.to_lowercase()) {
                return Err(EngineError::DuplicateKey(record.key.clone()));
            }
        }

        Ok(Self { records })
    }

    /// Build a catalog from its JSON representation
    pub fn from_json(data: &str) -> EngineResult<Self> {
        let file: CatalogFile = serde_json::from_str(data)?;
        Self::new(file.foods)
    }

    /// Shared handle to the bundled reference catalog
    pub fn builtin() -> Arc<FoodCatalog> {
        Arc::clone(&BUILTIN_CATALOG)
    }

    pub fn records(&self) -> &[FoodRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resolve a free-text name to a catalog record
    ///
    /// Input is trimmed and lowercased; empty input resolves to `None`.
    /// Matching tiers, first hit wins:
    /// 1. exact key match
    /// 2. exact alias match (case-insensitive)
    /// 3. bidirectional substring match against aliases, scanning records in
    ///    declaration order
    ///
    /// There is no fuzzy matching: an ambiguous substring resolves to the
    /// first record in declaration order, deterministically.
    pub fn resolve(&self, text: &str) -> Option<&FoodRecord> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        if let Some(record) = self.records.iter().find(|r| r.key.to_lowercase() == needle) {
            return Some(record);
        }

        if let Some(record) = self
            .records
            .iter()
            .find(|r| r.aliases.iter().any(|alias| alias.to_lowercase() == needle))
        {
            return Some(record);
        }

        self.records.iter().find(|r| {
            r.aliases.iter().any(|alias| {
                let alias = alias.to_lowercase();
                alias.contains(&needle) || needle.contains(&alias)
            })
        })
    }

    /// Deduplicated categories present in the catalog, in first-appearance order
    pub fn categories(&self) -> Vec<FoodCategory> {
        let mut categories = Vec::new();
        for record in &self.records {
            if !categories.contains(&record.category) {
                categories.push(record.category.clone());
            }
        }
        categories
    }

    /// All records of a category, empty if none
    pub fn foods_by_category(&self, category: &FoodCategory) -> Vec<&FoodRecord> {
        self.records
            .iter()
            .filter(|r| r.category == *category)
            .collect()
    }
}
