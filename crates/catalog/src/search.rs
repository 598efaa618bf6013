//! Substring search over catalog lists.
//!
//! Matching is case-insensitive containment: an item matches when the
//! lower-cased query occurs in the lower-cased text of at least one of its
//! search fields. The empty query matches everything. Lists are small, so
//! every call scans the whole list without any index.

use crate::model::{Catalog, Category, CategoryContent, Example, Language, Subcategory};
use crate::path::CatalogPath;

/// Accessor for one searchable text field.
pub type Field<T> = fn(&T) -> &str;

/// Keep the items matching `query` on any of `fields`, in their original order.
///
/// With an empty query every item is kept, even when `fields` is empty. With
/// a non-empty query and no fields nothing matches.
pub fn filter<'a, T>(items: &'a [T], query: &str, fields: &[Field<T>]) -> Vec<&'a T> {
    if query.is_empty() {
        return items.iter().collect();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| matches_fields(*item, &needle, fields))
        .collect()
}

fn matches_fields<T>(item: &T, needle: &str, fields: &[Field<T>]) -> bool {
    fields
        .iter()
        .any(|field| field(item).to_lowercase().contains(needle))
}

/// A catalog record with default search fields.
pub trait Searchable: Sized + 'static {
    fn search_fields() -> &'static [Field<Self>];

    /// Check this item against `query` using its default fields.
    fn matches(&self, query: &str) -> bool {
        query.is_empty() || matches_fields(self, &query.to_lowercase(), Self::search_fields())
    }
}

/// [`filter`] with the item type's default fields.
pub fn filter_searchable<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    filter(items, query, T::search_fields())
}

fn language_name(language: &Language) -> &str {
    &language.name
}

fn category_title(category: &Category) -> &str {
    &category.title
}

fn category_description(category: &Category) -> &str {
    &category.description
}

fn subcategory_title(subcategory: &Subcategory) -> &str {
    &subcategory.title
}

fn subcategory_description(subcategory: &Subcategory) -> &str {
    &subcategory.description
}

fn example_title(example: &Example) -> &str {
    &example.title
}

fn example_description(example: &Example) -> &str {
    &example.description
}

const LANGUAGE_FIELDS: &[Field<Language>] = &[language_name];
const CATEGORY_FIELDS: &[Field<Category>] = &[category_title, category_description];
const SUBCATEGORY_FIELDS: &[Field<Subcategory>] = &[subcategory_title, subcategory_description];
const EXAMPLE_FIELDS: &[Field<Example>] = &[example_title, example_description];

impl Searchable for Language {
    fn search_fields() -> &'static [Field<Self>] {
        LANGUAGE_FIELDS
    }
}

impl Searchable for Category {
    fn search_fields() -> &'static [Field<Self>] {
        CATEGORY_FIELDS
    }
}

impl Searchable for Subcategory {
    fn search_fields() -> &'static [Field<Self>] {
        SUBCATEGORY_FIELDS
    }
}

impl Searchable for Example {
    fn search_fields() -> &'static [Field<Self>] {
        EXAMPLE_FIELDS
    }
}

/// An example found by [`search_examples`], with where it lives.
#[derive(Clone, Debug)]
pub struct ExampleHit<'a> {
    /// Location of the list holding the example.
    pub path: CatalogPath,
    /// Position of the example in that list.
    pub index: usize,
    pub example: &'a Example,
}

/// Search every example in the catalog by title and description.
///
/// Hits come back in catalog order. An empty query returns every example.
pub fn search_examples<'a>(catalog: &'a Catalog, query: &str) -> Vec<ExampleHit<'a>> {
    let mut hits = Vec::new();
    for language in &catalog.languages {
        for category in &language.categories {
            match &category.content {
                CategoryContent::Flat { examples } => {
                    let path = CatalogPath::category(&language.id, &category.id);
                    collect_hits(&mut hits, path, examples, query);
                }
                CategoryContent::Nested { subcategories } => {
                    for subcategory in subcategories {
                        let path =
                            CatalogPath::subcategory(&language.id, &category.id, &subcategory.id);
                        collect_hits(&mut hits, path, &subcategory.examples, query);
                    }
                }
            }
        }
    }
    log::debug!("search {:?}: {} hits", query, hits.len());
    hits
}

fn collect_hits<'a>(
    hits: &mut Vec<ExampleHit<'a>>,
    path: CatalogPath,
    examples: &'a [Example],
    query: &str,
) {
    for (index, example) in examples.iter().enumerate() {
        if example.matches(query) {
            hits.push(ExampleHit {
                path: path.clone(),
                index,
                example,
            });
        }
    }
}
