//! Tests against the embedded catalog.

use catalog::search::{filter, filter_searchable, search_examples};
use catalog::{Catalog, CatalogError, CatalogPath, ExamplePager, Level, Resolved};

fn catalog() -> Catalog {
    Catalog::embedded().expect("embedded catalog loads")
}

// ============================================================================
// Shape
// ============================================================================

#[test]
fn languages_in_listing_order() {
    let catalog = catalog();
    let ids: Vec<&str> = catalog.languages.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["python", "javascript", "cpp", "java", "html", "css"]);
}

#[test]
fn coming_soon_languages_have_no_categories() {
    let catalog = catalog();
    for id in ["cpp", "java", "css"] {
        let language = catalog.language(id).unwrap();
        assert!(language.is_empty(), "{id}");
        assert_eq!(language.example_count(), 0);
    }
}

#[test]
fn python_is_nested_and_html_is_flat() {
    let catalog = catalog();
    let python = catalog.language("python").unwrap();
    let basics = python.category("py_basics").unwrap();
    assert!(!basics.is_flat());
    assert_eq!(basics.section_count(), 6);

    let html = catalog.language("html").unwrap();
    let html_basics = html.category("html_basics").unwrap();
    assert!(html_basics.is_flat());
    assert_eq!(html_basics.section_count(), 5);
}

#[test]
fn html_data_types_carries_a_table() {
    let catalog = catalog();
    let path = CatalogPath::category("html", "html_basics");
    let examples = catalog.resolve(&path).unwrap().examples().unwrap();
    let table = examples[4].table.as_ref().unwrap();
    assert_eq!(table.headers, vec!["Data Type", "Example", "Description"]);
    assert_eq!(table.rows.len(), 5);
    assert!(examples[4].code.is_empty());
}

// ============================================================================
// Resolution
// ============================================================================

#[test]
fn resolve_subcategory() {
    let catalog = catalog();
    let path: CatalogPath = "python/py_basics/py_variables".parse().unwrap();
    let resolved = catalog.resolve(&path).unwrap();
    assert!(matches!(resolved, Resolved::Subcategory { .. }));
    assert_eq!(resolved.title(), "Variables & Data Types");
    assert_eq!(resolved.language().name, "Python");
    assert_eq!(resolved.examples().unwrap().len(), 7);
}

#[test]
fn resolve_nested_category_has_no_direct_examples() {
    let catalog = catalog();
    let resolved = catalog
        .resolve(&CatalogPath::category("python", "py_basics"))
        .unwrap();
    assert!(resolved.examples().is_none());
}

#[test]
fn resolve_reports_missing_level() {
    let catalog = catalog();

    let err = catalog.resolve(&CatalogPath::language("rust")).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::NotFound { level: Level::Language, ref id } if id == "rust"
    ));

    let err = catalog
        .resolve(&CatalogPath::subcategory("python", "py_basics", "nope"))
        .unwrap_err();
    assert_eq!(err.to_string(), "No subcategory with id 'nope'");

    // Flat categories have no subcategories at all.
    let err = catalog
        .resolve(&CatalogPath::subcategory("html", "html_basics", "x"))
        .unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { level: Level::Subcategory, .. }));
}

// ============================================================================
// Paging
// ============================================================================

#[test]
fn page_through_subcategory() {
    let catalog = catalog();
    let path = CatalogPath::subcategory("python", "py_control_flow", "py_ternary");
    let examples = catalog.resolve(&path).unwrap().examples().unwrap();
    let mut pager = ExamplePager::new(examples, 0);
    assert_eq!(pager.len(), 1);
    assert!(!pager.forward());
    assert_eq!(pager.current().unwrap().id, "py_ternary_1");
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn language_search_is_case_insensitive() {
    let catalog = catalog();
    let hits = filter_searchable(&catalog.languages, "JAVA");
    let names: Vec<&str> = hits.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["JavaScript", "Java"]);
}

#[test]
fn empty_search_returns_list_unchanged() {
    let catalog = catalog();
    let hits = filter_searchable(&catalog.languages, "");
    assert_eq!(hits.len(), catalog.languages.len());
    assert!(
        hits.iter()
            .zip(&catalog.languages)
            .all(|(hit, language)| std::ptr::eq(*hit, language))
    );
}

#[test]
fn category_search_covers_description() {
    let catalog = catalog();
    let python = catalog.language("python").unwrap();
    let hits = filter_searchable(&python.categories, "fundamentals");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "py_basics");
}

#[test]
fn filter_with_custom_field() {
    fn color(language: &catalog::Language) -> &str {
        &language.color
    }
    let catalog = catalog();
    let hits = filter(&catalog.languages, "#e34f26", &[color as fn(&catalog::Language) -> &str]);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "html");
}

#[test]
fn example_search_reports_locations() {
    let catalog = catalog();
    let hits = search_examples(&catalog, "comment");
    let locations: Vec<String> = hits
        .iter()
        .map(|hit| format!("{}#{}", hit.path, hit.index))
        .collect();
    assert_eq!(
        locations,
        vec![
            "python/py_basics/py_comments_docs#0",
            "javascript/js_basics/js_comments#0",
            "javascript/js_basics/js_comments#1",
            "html/html_basics#1",
        ]
    );
}

#[test]
fn example_search_snapshot() {
    let catalog = catalog();
    let hits = search_examples(&catalog, "Ternary");
    let listing: Vec<String> = hits
        .iter()
        .map(|hit| format!("{} #{} {}", hit.path, hit.index, hit.example.title))
        .collect();
    insta::assert_snapshot!(listing.join("\n"), @r"
    python/py_control_flow/py_ternary #0 Ternary Operator Basics
    javascript/js_control_flow/js_ternary #0 Basic Ternary Usage
    ");
}

#[test]
fn empty_example_search_returns_everything() {
    let catalog = catalog();
    assert_eq!(search_examples(&catalog, "").len(), catalog.example_count());
}
