//! Loading and validating catalogs.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{CatalogError, Result};
use crate::model::{Catalog, CategoryContent, Example};

/// Catalog compiled into the binary.
const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

impl Catalog {
    /// Parse and validate a catalog from JSON text.
    pub fn from_json_str(json: &str) -> Result<Catalog> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        log::debug!(
            "catalog loaded: {} languages, {} examples",
            catalog.languages.len(),
            catalog.example_count()
        );
        Ok(catalog)
    }

    /// Read, parse and validate a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Catalog> {
        let path = path.as_ref();
        log::info!("loading catalog from {}", path.display());
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// The catalog shipped with the binary.
    pub fn embedded() -> Result<Catalog> {
        Self::from_json_str(EMBEDDED_CATALOG)
    }

    /// Check structural rules the JSON schema cannot express.
    ///
    /// - ids are non-empty and unique among their siblings
    /// - table rows have as many cells as the table has headers
    pub fn validate(&self) -> Result<()> {
        check_ids("language", "catalog", self.languages.iter().map(|l| l.id.as_str()))?;

        for language in &self.languages {
            check_ids(
                "category",
                &language.id,
                language.categories.iter().map(|c| c.id.as_str()),
            )?;

            for category in &language.categories {
                let scope = format!("{}/{}", language.id, category.id);
                match &category.content {
                    CategoryContent::Flat { examples } => check_examples(&scope, examples)?,
                    CategoryContent::Nested { subcategories } => {
                        check_ids("subcategory", &scope, subcategories.iter().map(|s| s.id.as_str()))?;
                        for subcategory in subcategories {
                            let scope = format!("{scope}/{}", subcategory.id);
                            check_examples(&scope, &subcategory.examples)?;
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

/// Characters with a meaning in example references (`lang/cat/sub#3`).
const RESERVED_ID_CHARS: [char; 2] = ['/', '#'];

fn check_ids<'a>(what: &str, scope: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.is_empty() {
            return Err(CatalogError::Invalid(format!("empty {what} id in {scope}")));
        }
        if let Some(c) = id.chars().find(|c| RESERVED_ID_CHARS.contains(c)) {
            return Err(CatalogError::Invalid(format!(
                "{what} id '{id}' in {scope} contains '{c}'"
            )));
        }
        if !seen.insert(id) {
            return Err(CatalogError::Invalid(format!(
                "duplicate {what} id '{id}' in {scope}"
            )));
        }
    }
    Ok(())
}

fn check_examples(scope: &str, examples: &[Example]) -> Result<()> {
    check_ids("example", scope, examples.iter().map(|e| e.id.as_str()))?;
    for example in examples {
        let Some(table) = &example.table else {
            continue;
        };
        if table.headers.is_empty() {
            return Err(CatalogError::Invalid(format!(
                "table in {scope}/{} has no headers",
                example.id
            )));
        }
        if let Some((row, cells)) = table
            .rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != table.columns())
        {
            return Err(CatalogError::Invalid(format!(
                "table row {row} in {scope}/{} has {} cells, expected {}",
                example.id,
                cells.len(),
                table.columns()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_is_valid() {
        let catalog = Catalog::embedded().unwrap();
        assert!(catalog.language("python").is_some());
        assert!(catalog.example_count() > 0);
    }

    #[test]
    fn duplicate_language_ids_are_rejected() {
        let json = r##"{"languages": [
            {"id": "x", "name": "X", "description": "", "color": "#000"},
            {"id": "x", "name": "Y", "description": "", "color": "#000"}
        ]}"##;
        let err = Catalog::from_json_str(json).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid catalog: duplicate language id 'x' in catalog"
        );
    }

    #[test]
    fn slash_in_id_is_rejected() {
        let json = r##"{"languages": [
            {"id": "a/b", "name": "X", "description": "", "color": "#000"}
        ]}"##;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(CatalogError::Invalid(_))
        ));
    }

    #[test]
    fn hash_in_id_is_rejected() {
        let json = r##"{"languages": [{
            "id": "py", "name": "Python", "description": "", "color": "#3776AB",
            "categories": [{
                "id": "basics", "title": "Basics", "description": "", "kind": "flat",
                "examples": [{
                    "id": "ex#2", "title": "Ex", "description": "", "code": "",
                    "explanation": ""
                }]
            }]
        }]}"##;
        let err = Catalog::from_json_str(json).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid catalog: example id 'ex#2' in py/basics contains '#'"
        );
    }

    #[test]
    fn ragged_table_is_rejected() {
        let json = r##"{"languages": [{
            "id": "html", "name": "HTML", "description": "", "color": "#E34F26",
            "categories": [{
                "id": "basics", "title": "Basics", "description": "", "kind": "flat",
                "examples": [{
                    "id": "types", "title": "Types", "description": "", "code": "",
                    "explanation": "",
                    "table": {"headers": ["A", "B"], "rows": [["1", "2"], ["3"]]}
                }]
            }]
        }]}"##;
        let err = Catalog::from_json_str(json).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid catalog: table row 1 in html/basics/types has 1 cells, expected 2"
        );
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Catalog::load("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/catalog.json"));
    }
}
