//! Catalog loading from YAML and read-only lookups

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use log::{debug, info, warn};
use serde::Deserialize;

use crate::domain::{Category, Tool};
use crate::error::{HubError, Result};

use super::BUILTIN_CATALOG;

/// YAML file structure
#[derive(Debug, Deserialize)]
struct YamlCatalog {
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    tools: Vec<Tool>,
}

/// Validated, immutable set of tools and categories
#[derive(Debug, Clone)]
pub struct Catalog {
    tools: Vec<Tool>,
    categories: Vec<Category>,
    tool_index: HashMap<String, usize>,
    category_index: HashMap<String, usize>,
}

impl Catalog {
    /// Load the embedded sample catalog
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_CATALOG)
    }

    /// Load catalog from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .inspect_err(|e| warn!("Failed to read catalog file {}: {}", path.display(), e))?;
        let catalog = Self::from_yaml(&content)?;
        info!("Loaded catalog from: {}", path.display());
        Ok(catalog)
    }

    /// Load catalog from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        let doc: YamlCatalog = serde_yaml::from_str(content)?;
        Self::new(doc.categories, doc.tools)
    }

    /// Build a catalog from records, enforcing unique ids and valid category references
    pub fn new(categories: Vec<Category>, tools: Vec<Tool>) -> Result<Self> {
        let mut category_index = HashMap::with_capacity(categories.len());
        for (i, category) in categories.iter().enumerate() {
            if category_index.insert(category.id.clone(), i).is_some() {
                return Err(HubError::DuplicateId {
                    kind: "category",
                    id: category.id.clone(),
                });
            }
        }

        let mut tool_index = HashMap::with_capacity(tools.len());
        for (i, tool) in tools.iter().enumerate() {
            if !category_index.contains_key(&tool.category) {
                return Err(HubError::UnknownCategory {
                    tool: tool.id.clone(),
                    category: tool.category.clone(),
                });
            }
            if tool_index.insert(tool.id.clone(), i).is_some() {
                return Err(HubError::DuplicateId {
                    kind: "tool",
                    id: tool.id.clone(),
                });
            }
        }

        debug!("Catalog validated: {} categories, {} tools", categories.len(), tools.len());

        Ok(Self {
            tools,
            categories,
            tool_index,
            category_index,
        })
    }

    /// All tools in load order
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// All categories in load order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Get a tool by id
    pub fn tool(&self, id: &str) -> Option<&Tool> {
        self.tool_index.get(id).map(|&i| &self.tools[i])
    }

    /// Get a tool by id, failing if it does not exist
    pub fn require_tool(&self, id: &str) -> Result<&Tool> {
        self.tool(id).ok_or_else(|| HubError::ToolNotFound(id.to_string()))
    }

    /// Get a category by id
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.category_index.get(id).map(|&i| &self.categories[i])
    }

    /// Check if a category exists
    pub fn has_category(&self, id: &str) -> bool {
        self.category_index.contains_key(id)
    }

    /// Tools belonging to a category
    pub fn tools_in_category(&self, category_id: &str) -> Vec<&Tool> {
        self.tools.iter().filter(|t| t.category == category_id).collect()
    }

    /// Tools flagged as featured
    pub fn featured(&self) -> Vec<&Tool> {
        self.tools.iter().filter(|t| t.featured).collect()
    }

    /// Every distinct tag in the catalog, sorted
    pub fn all_tags(&self) -> Vec<String> {
        self.tools
            .iter()
            .flat_map(|t| t.tags.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Get number of tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if catalog has no tools
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
