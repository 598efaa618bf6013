//! Catalog records.
//!
//! All records are plain data. They deserialize from the JSON catalog format
//! where a category's shape is selected by its `"kind"` field:
//!
//! ```json
//! { "id": "html_basics", "title": "Basics", "description": "...",
//!   "kind": "flat", "examples": [ ... ] }
//! ```

use serde::{Deserialize, Serialize};

/// The whole cheat-sheet catalog.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub languages: Vec<Language>,
}

impl Catalog {
    pub fn new(languages: Vec<Language>) -> Self {
        Self { languages }
    }

    /// Look up a language by id.
    pub fn language(&self, id: &str) -> Option<&Language> {
        self.languages.iter().find(|l| l.id == id)
    }

    /// Total number of examples across all languages.
    pub fn example_count(&self) -> usize {
        self.languages.iter().map(Language::example_count).sum()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Accent color as written in the catalog, usually `#RRGGBB`.
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Empty for languages listed without content yet.
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Language {
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Returns true if the language has no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn example_count(&self) -> usize {
        self.categories.iter().map(Category::example_count).sum()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(flatten)]
    pub content: CategoryContent,
}

/// What a category holds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CategoryContent {
    /// Examples attached directly to the category.
    Flat { examples: Vec<Example> },
    /// Examples grouped under subcategories.
    Nested { subcategories: Vec<Subcategory> },
}

impl Category {
    pub fn subcategory(&self, id: &str) -> Option<&Subcategory> {
        match &self.content {
            CategoryContent::Nested { subcategories } => subcategories.iter().find(|s| s.id == id),
            CategoryContent::Flat { .. } => None,
        }
    }

    pub fn is_flat(&self) -> bool {
        matches!(self.content, CategoryContent::Flat { .. })
    }

    /// Subcategories, or an empty slice for a flat category.
    pub fn subcategories(&self) -> &[Subcategory] {
        match &self.content {
            CategoryContent::Nested { subcategories } => subcategories,
            CategoryContent::Flat { .. } => &[],
        }
    }

    /// Examples attached directly, or `None` for a nested category.
    pub fn flat_examples(&self) -> Option<&[Example]> {
        match &self.content {
            CategoryContent::Flat { examples } => Some(examples),
            CategoryContent::Nested { .. } => None,
        }
    }

    /// Entries shown on the next screen: subcategories for a nested
    /// category, examples for a flat one.
    pub fn section_count(&self) -> usize {
        match &self.content {
            CategoryContent::Flat { examples } => examples.len(),
            CategoryContent::Nested { subcategories } => subcategories.len(),
        }
    }

    pub fn example_count(&self) -> usize {
        match &self.content {
            CategoryContent::Flat { examples } => examples.len(),
            CategoryContent::Nested { subcategories } => {
                subcategories.iter().map(|s| s.examples.len()).sum()
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: String,
    pub title: String,
    pub description: String,
    pub examples: Vec<Example>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub id: String,
    pub title: String,
    pub description: String,
    /// May be empty when the example is carried by its table.
    #[serde(default)]
    pub code: String,
    /// Expected program output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<Table>,
    /// Explanation text with `**bold**` and `` `code` `` markers.
    pub explanation: String,
}

/// A small reference table shown under an example.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn columns(&self) -> usize {
        self.headers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example(id: &str) -> Example {
        Example {
            id: id.into(),
            title: id.into(),
            description: String::new(),
            code: String::new(),
            output: None,
            table: None,
            explanation: String::new(),
        }
    }

    #[test]
    fn flat_category_counts() {
        let category = Category {
            id: "c".into(),
            title: "C".into(),
            description: String::new(),
            icon: None,
            content: CategoryContent::Flat {
                examples: vec![example("a"), example("b")],
            },
        };
        assert!(category.is_flat());
        assert_eq!(category.section_count(), 2);
        assert_eq!(category.example_count(), 2);
        assert!(category.subcategories().is_empty());
        assert!(category.subcategory("a").is_none());
    }

    #[test]
    fn nested_category_counts() {
        let category = Category {
            id: "c".into(),
            title: "C".into(),
            description: String::new(),
            icon: None,
            content: CategoryContent::Nested {
                subcategories: vec![
                    Subcategory {
                        id: "s1".into(),
                        title: "S1".into(),
                        description: String::new(),
                        examples: vec![example("a"), example("b")],
                    },
                    Subcategory {
                        id: "s2".into(),
                        title: "S2".into(),
                        description: String::new(),
                        examples: vec![example("c")],
                    },
                ],
            },
        };
        assert!(!category.is_flat());
        assert_eq!(category.section_count(), 2);
        assert_eq!(category.example_count(), 3);
        assert!(category.flat_examples().is_none());
        assert_eq!(category.subcategory("s2").map(|s| s.examples.len()), Some(1));
    }

    #[test]
    fn category_kind_tag_round_trips_through_json() {
        let json = r#"{
            "id": "html_basics",
            "title": "Basics",
            "description": "d",
            "kind": "flat",
            "examples": []
        }"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert!(category.is_flat());
        assert!(category.icon.is_none());
    }
}
