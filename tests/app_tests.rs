//! Keyboard-driven tests for the interactive browser.

use catalog::Catalog;
use codesheets::testing::{Harness, key};
use codesheets::theme::Theme;
use codesheets::{App, CodeSheets, KeyCode, Route};
use crossterm::event::KeyModifiers;

fn catalog() -> Catalog {
    Catalog::embedded().unwrap()
}

fn harness(catalog: &Catalog) -> Harness<CodeSheets<'_>> {
    Harness::new(CodeSheets::new(catalog, Theme::monochrome()), 80, 24)
}

fn down(harness: &mut Harness<CodeSheets<'_>>, times: usize) {
    for _ in 0..times {
        harness.press(KeyCode::Down);
    }
}

#[test]
fn home_lists_every_language() {
    let catalog = catalog();
    let screen = harness(&catalog).render().to_text();

    assert!(screen.starts_with(" ≡ CodeSheets"));
    for name in ["Python", "JavaScript", "C++", "Java", "HTML"] {
        assert!(screen.contains(name), "missing {name}:\n{screen}");
    }
    assert!(screen.contains("3 categories"));
    assert!(screen.contains("coming soon"));
    assert!(screen.contains("/ search"));
}

#[test]
fn nested_category_leads_through_subcategories() {
    let catalog = catalog();
    let mut harness = harness(&catalog);

    harness.press(KeyCode::Enter);
    assert_eq!(
        harness.app().navigator().current(),
        &Route::CategoryList {
            language: "python".into()
        }
    );

    harness.press(KeyCode::Enter);
    assert_eq!(
        harness.app().navigator().current(),
        &Route::SubcategoryList {
            language: "python".into(),
            category: "py_basics".into()
        }
    );
    let screen = harness.render().to_text();
    assert!(screen.contains("Variables & Data Types"));
    assert!(screen.contains("7 examples"));

    harness.press(KeyCode::Enter);
    assert_eq!(
        harness.app().navigator().current(),
        &Route::Detail {
            language: "python".into(),
            category: "py_basics".into(),
            subcategory: Some("py_variables".into()),
            example_index: 0,
        }
    );
    let screen = harness.render().to_text();
    assert!(screen.contains("What is a Variable?"));
    assert!(screen.contains("1 / 7"));
    assert!(screen.contains("Code Example"));
}

#[test]
fn flat_category_opens_examples_directly() {
    let catalog = catalog();
    let mut harness = harness(&catalog);

    down(&mut harness, 4);
    harness.press(KeyCode::Enter);
    assert_eq!(
        harness.app().navigator().current(),
        &Route::CategoryList {
            language: "html".into()
        }
    );
    assert!(harness.render().to_text().contains("5 examples"));

    harness.press(KeyCode::Enter);
    assert!(matches!(
        harness.app().navigator().current(),
        Route::Detail { subcategory: None, example_index: 0, .. }
    ));
    let screen = harness.render().to_text();
    assert!(screen.contains("1.1 HTML Structure"));
    assert!(screen.contains("1 / 5"));
}

#[test]
fn paging_stops_at_both_ends() {
    let catalog = catalog();
    let mut harness = harness(&catalog);
    down(&mut harness, 4);
    harness.press(KeyCode::Enter).press(KeyCode::Enter);

    harness.press(key('p'));
    assert_eq!(harness.app().status(), Some("First example"));

    harness.press(key('n')).press(KeyCode::Right);
    let screen = harness.render().to_text();
    assert!(screen.contains("1.3 Common Text Elements"));
    assert!(screen.contains("3 / 5"));
    assert_eq!(harness.app().status(), None);

    harness.press(key('n')).press(key('n')).press(key('n'));
    assert_eq!(harness.app().status(), Some("Last example"));
    assert!(matches!(
        harness.app().navigator().current(),
        Route::Detail { example_index: 4, .. }
    ));
    assert!(harness.render().to_text().contains("Last example"));
}

#[test]
fn back_returns_to_the_list_with_its_selection() {
    let catalog = catalog();
    let mut harness = harness(&catalog);
    harness.press(KeyCode::Enter).press(KeyCode::Enter);
    down(&mut harness, 2);
    harness.press(KeyCode::Enter);
    assert_eq!(harness.app().navigator().depth(), 4);

    harness.press(KeyCode::Esc);
    assert_eq!(harness.app().navigator().depth(), 3);
    assert_eq!(harness.app().navigator().page().selected, 2);

    harness.press(KeyCode::Esc).press(KeyCode::Backspace).press(KeyCode::Esc);
    assert_eq!(harness.app().navigator().current(), &Route::Home);
    assert_eq!(harness.app().navigator().depth(), 1);
}

#[test]
fn search_filters_languages() {
    let catalog = catalog();
    let mut harness = harness(&catalog);

    harness.press(key('/'));
    assert!(harness.app().is_searching());
    harness.type_text("java");
    assert_eq!(harness.app().search_query(), "java");

    let screen = harness.render().to_text();
    assert!(screen.contains("JavaScript"));
    assert!(screen.contains("Java"));
    assert!(!screen.contains("Python"));

    harness.press(KeyCode::Enter);
    assert_eq!(
        harness.app().navigator().current(),
        &Route::CategoryList {
            language: "javascript".into()
        }
    );
}

#[test]
fn search_without_matches_says_so() {
    let catalog = catalog();
    let mut harness = harness(&catalog);
    harness.press(key('/')).type_text("cobol");
    assert!(harness.render().to_text().contains("No languages match \"cobol\""));

    harness.press(KeyCode::Esc);
    assert!(!harness.app().is_searching());
    harness.press(KeyCode::Esc);
    assert_eq!(harness.app().search_query(), "");
    assert!(harness.render().to_text().contains("Python"));
}

#[test]
fn typing_q_while_searching_does_not_quit() {
    let catalog = catalog();
    let mut harness = harness(&catalog);
    harness.press(key('/')).type_text("q");
    assert!(!harness.app().should_quit());
    assert_eq!(harness.app().search_query(), "q");
}

#[test]
fn empty_language_shows_coming_soon() {
    let catalog = catalog();
    let mut harness = harness(&catalog);
    down(&mut harness, 2);
    harness.press(KeyCode::Enter);

    assert_eq!(harness.app().navigator().current(), &Route::Home);
    assert_eq!(harness.app().status(), Some("C++ is coming soon"));
}

#[test]
fn drawer_opens_with_tab_and_any_key_closes_it() {
    let catalog = catalog();
    let mut harness = harness(&catalog);

    harness.press(KeyCode::Tab);
    assert!(harness.app().navigator().is_drawer_open());
    let screen = harness.render().to_text();
    assert!(screen.contains("About"));
    assert!(screen.contains("6 languages, 62 examples"));
    assert!(screen.contains("Any key closes the menu"));

    harness.press(KeyCode::Enter);
    assert!(!harness.app().navigator().is_drawer_open());
    assert_eq!(harness.app().navigator().current(), &Route::Home);
}

#[test]
fn quit_keys() {
    let catalog = catalog();
    let mut harness = harness(&catalog);
    harness.press(key('q'));
    assert!(harness.app().should_quit());

    let mut harness = self::harness(&catalog);
    harness.press_with(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(harness.app().should_quit());
}

#[test]
fn detail_scrolls_within_bounds() {
    let catalog = catalog();
    let mut harness = Harness::new(CodeSheets::new(&catalog, Theme::monochrome()), 60, 12);
    harness.press(KeyCode::Enter).press(KeyCode::Enter).press(KeyCode::Enter);

    harness.press(KeyCode::Up);
    assert_eq!(harness.app().navigator().page().scroll, 0);

    harness.press(KeyCode::Down);
    assert_eq!(harness.app().navigator().page().scroll, 1);

    harness.press(KeyCode::End);
    let bottom = harness.app().navigator().page().scroll;
    harness.press(KeyCode::Down);
    assert_eq!(harness.app().navigator().page().scroll, bottom);

    harness.press(key('g'));
    assert_eq!(harness.app().navigator().page().scroll, 0);
}

#[test]
fn paging_resets_scroll() {
    let catalog = catalog();
    let mut harness = Harness::new(CodeSheets::new(&catalog, Theme::monochrome()), 60, 12);
    harness.press(KeyCode::Enter).press(KeyCode::Enter).press(KeyCode::Enter);
    harness.press(KeyCode::Down).press(KeyCode::Down);
    harness.press(key('n'));
    assert_eq!(harness.app().navigator().page().scroll, 0);
}
