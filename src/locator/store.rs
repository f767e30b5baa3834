use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::element::element_model::UIElement;
use crate::error::HierarchyError;
use crate::locator::locator_model::{LocatorRecord, StoredLocator};

/// Name-keyed locator collection, serialized as one JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocatorStore {
    locators: BTreeMap<String, StoredLocator>,
}

impl LocatorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, HierarchyError> {
        if json.trim().is_empty() {
            return Ok(Self::new());
        }

        let locators = serde_json::from_str(json).map_err(|source| HierarchyError::Json {
            context: "locator store".into(),
            source,
        })?;
        Ok(Self { locators })
    }

    pub fn to_json_pretty(&self) -> Result<String, HierarchyError> {
        serde_json::to_string_pretty(&self.locators).map_err(|source| HierarchyError::Json {
            context: "locator store".into(),
            source,
        })
    }

    /// Names are never overwritten.
    pub fn insert(&mut self, name: &str, locator: StoredLocator) -> Result<(), HierarchyError> {
        if self.locators.contains_key(name) {
            return Err(HierarchyError::DuplicateLocator(name.to_string()));
        }
        self.locators.insert(name.to_string(), locator);
        Ok(())
    }

    pub fn save_element(
        &mut self,
        name: &str,
        element: &UIElement,
        added_at: DateTime<Utc>,
    ) -> Result<LocatorRecord, HierarchyError> {
        let record = LocatorRecord::from_element(element, added_at);
        self.insert(name, StoredLocator::Xml(record.clone()))?;
        Ok(record)
    }

    pub fn get(&self, name: &str) -> Option<&StoredLocator> {
        self.locators.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<StoredLocator> {
        self.locators.remove(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.locators.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.locators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locators.is_empty()
    }
}
