use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Color assigned when a category is created without one.
pub const DEFAULT_COLOR: &str = "#667eea";

/// A category record as stored and served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Sequential identifier, assigned by the store.
    pub id: u32,

    /// Display name, unique case-insensitively.
    pub name: String,

    /// Free-form description; empty when not provided.
    #[serde(default)]
    pub description: String,

    /// Hex color string.
    pub color: String,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last-modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a category.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCategory {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

/// Request body for updating a category; any subset of fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

/// Error type for category operations.
#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    /// The name was missing, empty, or whitespace-only.
    #[error("category name is required")]
    EmptyName,

    /// Another category already carries this name (case-insensitive).
    #[error("a category named \"{0}\" already exists")]
    DuplicateName(String),

    /// No category with this id.
    #[error("category {0} not found")]
    NotFound(u32),
}

/// On-disk shape of the store file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    categories: Vec<Category>,
    #[serde(rename = "nextId")]
    next_id: u32,
}

/// File-backed category collection.
///
/// The whole file is read once at open and rewritten on every mutation.
/// An unreadable or corrupt file is recovered by starting over with an
/// empty collection; a failed write is logged and otherwise swallowed,
/// keeping the in-memory state as the source of truth for the process
/// lifetime. Both are deliberate: this collaborator is non-critical.
#[derive(Debug)]
pub struct CategoryStore {
    path: PathBuf,
    categories: Vec<Category>,
    next_id: u32,
}

impl CategoryStore {
    /// Open the store backed by the given file, loading it if present.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (categories, next_id) = match fs::read_to_string(&path) {
            Ok(body) => match serde_json::from_str::<StoreFile>(&body) {
                Ok(file) => (file.categories, file.next_id.max(1)),
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "store file corrupt; starting with an empty collection"
                    );
                    (Vec::new(), 1)
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => (Vec::new(), 1),
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "store file unreadable; starting with an empty collection"
                );
                (Vec::new(), 1)
            }
        };
        Self {
            path,
            categories,
            next_id,
        }
    }

    /// All categories, in creation order.
    pub fn list(&self) -> &[Category] {
        &self.categories
    }

    /// Find a category by id.
    pub fn get(&self, id: u32) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Create a category, assigning the next sequential id.
    pub fn create(&mut self, new: NewCategory) -> Result<Category, CategoryError> {
        let name = valid_name(&new.name)?;
        if self.name_taken(&name, None) {
            return Err(CategoryError::DuplicateName(name));
        }

        let now = Utc::now();
        let category = Category {
            id: self.next_id,
            name,
            description: new.description.unwrap_or_default(),
            color: new.color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            created_at: now,
            updated_at: now,
        };
        self.next_id += 1;
        self.categories.push(category.clone());
        self.persist();
        Ok(category)
    }

    /// Apply a partial update to an existing category.
    pub fn update(&mut self, id: u32, patch: CategoryPatch) -> Result<Category, CategoryError> {
        let name = match &patch.name {
            Some(name) => {
                let name = valid_name(name)?;
                if self.name_taken(&name, Some(id)) {
                    return Err(CategoryError::DuplicateName(name));
                }
                Some(name)
            }
            None => None,
        };

        let category = self
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(CategoryError::NotFound(id))?;

        if let Some(name) = name {
            category.name = name;
        }
        if let Some(description) = patch.description {
            category.description = description;
        }
        if let Some(color) = patch.color {
            category.color = color;
        }
        category.updated_at = Utc::now();

        let updated = category.clone();
        self.persist();
        Ok(updated)
    }

    /// Remove a category, returning the deleted record.
    pub fn delete(&mut self, id: u32) -> Result<Category, CategoryError> {
        let position = self
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or(CategoryError::NotFound(id))?;
        let deleted = self.categories.remove(position);
        self.persist();
        Ok(deleted)
    }

    fn name_taken(&self, name: &str, exclude: Option<u32>) -> bool {
        self.categories.iter().any(|c| {
            Some(c.id) != exclude && c.name.eq_ignore_ascii_case(name)
        })
    }

    /// Rewrite the whole backing file. Failures are logged and swallowed;
    /// the in-memory state stays authoritative.
    fn persist(&self) {
        let file = StoreFile {
            categories: self.categories.clone(),
            next_id: self.next_id,
        };
        let result = serde_json::to_string_pretty(&file)
            .map_err(io::Error::other)
            .and_then(|body| fs::write(&self.path, body));
        if let Err(err) = result {
            tracing::warn!(
                path = %self.path.display(),
                error = %err,
                "failed to persist categories; keeping in-memory state"
            );
        }
    }
}

fn valid_name(name: &str) -> Result<String, CategoryError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CategoryError::EmptyName);
    }
    Ok(name.to_string())
}
