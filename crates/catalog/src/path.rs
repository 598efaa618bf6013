//! Slash-separated locations inside the catalog.
//!
//! A [`CatalogPath`] names a language, a category inside it, or a
//! subcategory inside that: `python`, `python/py_basics`,
//! `python/py_basics/py_variables`.

use std::fmt;
use std::str::FromStr;

use crate::error::{CatalogError, Level, Result};
use crate::model::{Catalog, Category, Example, Language, Subcategory};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CatalogPath {
    pub language: String,
    pub category: Option<String>,
    pub subcategory: Option<String>,
}

impl CatalogPath {
    pub fn language(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            category: None,
            subcategory: None,
        }
    }

    pub fn category(language: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::language(language)
        }
    }

    pub fn subcategory(
        language: impl Into<String>,
        category: impl Into<String>,
        subcategory: impl Into<String>,
    ) -> Self {
        Self {
            subcategory: Some(subcategory.into()),
            ..Self::category(language, category)
        }
    }

    /// Number of levels named by this path (1 to 3).
    pub fn depth(&self) -> usize {
        1 + usize::from(self.category.is_some()) + usize::from(self.subcategory.is_some())
    }
}

impl FromStr for CatalogPath {
    type Err = CatalogError;

    fn from_str(input: &str) -> Result<Self> {
        let trimmed = input.trim().trim_matches('/');
        if trimmed.is_empty() {
            return Err(CatalogError::EmptyPath);
        }

        let parts: Vec<&str> = trimmed.split('/').collect();
        if parts.iter().any(|p| p.is_empty()) {
            return Err(CatalogError::InvalidPath(input.to_string()));
        }

        match parts.as_slice() {
            [language] => Ok(Self::language(*language)),
            [language, category] => Ok(Self::category(*language, *category)),
            [language, category, subcategory] => {
                Ok(Self::subcategory(*language, *category, *subcategory))
            }
            _ => Err(CatalogError::InvalidPath(input.to_string())),
        }
    }
}

impl fmt::Display for CatalogPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if let Some(category) = &self.category {
            write!(f, "/{category}")?;
        }
        if let Some(subcategory) = &self.subcategory {
            write!(f, "/{subcategory}")?;
        }
        Ok(())
    }
}

/// The records a [`CatalogPath`] points at.
#[derive(Clone, Copy, Debug)]
pub enum Resolved<'a> {
    Language(&'a Language),
    Category {
        language: &'a Language,
        category: &'a Category,
    },
    Subcategory {
        language: &'a Language,
        category: &'a Category,
        subcategory: &'a Subcategory,
    },
}

impl<'a> Resolved<'a> {
    pub fn language(&self) -> &'a Language {
        match *self {
            Resolved::Language(language)
            | Resolved::Category { language, .. }
            | Resolved::Subcategory { language, .. } => language,
        }
    }

    /// Examples at this location, if it holds examples directly.
    ///
    /// A subcategory and a flat category hold examples. A language or a
    /// nested category only holds further levels.
    pub fn examples(&self) -> Option<&'a [Example]> {
        match *self {
            Resolved::Language(_) => None,
            Resolved::Category { category, .. } => category.flat_examples(),
            Resolved::Subcategory { subcategory, .. } => Some(&subcategory.examples),
        }
    }

    /// Display title for the location.
    pub fn title(&self) -> &'a str {
        match *self {
            Resolved::Language(language) => &language.name,
            Resolved::Category { category, .. } => &category.title,
            Resolved::Subcategory { subcategory, .. } => &subcategory.title,
        }
    }

    /// Display description for the location.
    pub fn description(&self) -> &'a str {
        match *self {
            Resolved::Language(language) => &language.description,
            Resolved::Category { category, .. } => &category.description,
            Resolved::Subcategory { subcategory, .. } => &subcategory.description,
        }
    }
}

impl Catalog {
    /// Walk `path` down the hierarchy.
    ///
    /// Fails with [`CatalogError::NotFound`] naming the first level whose id
    /// does not exist. A subcategory under a flat category is reported as a
    /// missing subcategory.
    pub fn resolve(&self, path: &CatalogPath) -> Result<Resolved<'_>> {
        let language = self
            .language(&path.language)
            .ok_or_else(|| CatalogError::not_found(Level::Language, &path.language))?;

        let Some(category_id) = &path.category else {
            return Ok(Resolved::Language(language));
        };
        let category = language
            .category(category_id)
            .ok_or_else(|| CatalogError::not_found(Level::Category, category_id))?;

        let Some(subcategory_id) = &path.subcategory else {
            return Ok(Resolved::Category { language, category });
        };
        let subcategory = category
            .subcategory(subcategory_id)
            .ok_or_else(|| CatalogError::not_found(Level::Subcategory, subcategory_id))?;

        Ok(Resolved::Subcategory {
            language,
            category,
            subcategory,
        })
    }
}
