//! Stack navigation between screens, plus the side drawer.
//!
//! Routes carry catalog ids rather than references, so the navigator can be
//! held next to the catalog without borrowing it.

use catalog::{Catalog, Category, Example, Language};

pub const APP_TITLE: &str = "CodeSheets";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    CategoryList {
        language: String,
    },
    SubcategoryList {
        language: String,
        category: String,
    },
    /// `subcategory` is `None` for a flat category.
    Detail {
        language: String,
        category: String,
        subcategory: Option<String>,
        example_index: usize,
    },
}

impl Route {
    /// Header title for this route.
    ///
    /// Falls back to a generic title when the ids are not in the catalog.
    pub fn title<'a>(&self, catalog: &'a Catalog) -> &'a str {
        match self {
            Route::Home => APP_TITLE,
            Route::CategoryList { language } => catalog
                .language(language)
                .map_or("Categories", |l| l.name.as_str()),
            Route::SubcategoryList { language, category } => find_category(catalog, language, category)
                .map_or("Subcategories", |(_, c)| c.title.as_str()),
            Route::Detail {
                language,
                category,
                subcategory,
                ..
            } => {
                let Some((_, category)) = find_category(catalog, language, category) else {
                    return "Detail";
                };
                match subcategory {
                    Some(id) => category
                        .subcategory(id)
                        .map_or("Detail", |s| s.title.as_str()),
                    None => &category.title,
                }
            }
        }
    }
}

pub(crate) fn find_category<'a>(
    catalog: &'a Catalog,
    language: &str,
    category: &str,
) -> Option<(&'a Language, &'a Category)> {
    let language = catalog.language(language)?;
    let category = language.category(category)?;
    Some((language, category))
}

/// Examples shown by a `Detail` route.
pub(crate) fn detail_examples<'a>(
    catalog: &'a Catalog,
    language: &str,
    category: &str,
    subcategory: Option<&str>,
) -> Option<&'a [Example]> {
    let (_, category) = find_category(catalog, language, category)?;
    match subcategory {
        Some(id) => category.subcategory(id).map(|s| s.examples.as_slice()),
        None => category.flat_examples(),
    }
}

/// Route reached by selecting `category`: flat categories open their
/// examples directly, nested ones list their subcategories.
pub fn category_route(language: &Language, category: &Category) -> Route {
    if category.is_flat() {
        Route::Detail {
            language: language.id.clone(),
            category: category.id.clone(),
            subcategory: None,
            example_index: 0,
        }
    } else {
        Route::SubcategoryList {
            language: language.id.clone(),
            category: category.id.clone(),
        }
    }
}

/// A route on the stack with the view state that goes with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    pub route: Route,
    /// Highlighted row on list screens.
    pub selected: usize,
    /// First visible row (lists) or line (detail).
    pub scroll: usize,
}

impl Page {
    fn new(route: Route) -> Self {
        Self {
            route,
            selected: 0,
            scroll: 0,
        }
    }
}

/// The screen stack. Never empty; the bottom page is always `Home`.
#[derive(Debug)]
pub struct Navigator {
    stack: Vec<Page>,
    drawer_open: bool,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Page::new(Route::Home)],
            drawer_open: false,
        }
    }

    pub fn push(&mut self, route: Route) {
        log::debug!("navigate to {route:?}");
        self.stack.push(Page::new(route));
    }

    /// Leave the current screen. `Home` is never popped.
    pub fn pop(&mut self) -> Option<Route> {
        if self.stack.len() <= 1 {
            return None;
        }
        let page = self.stack.pop()?;
        log::debug!("back from {:?}", page.route);
        Some(page.route)
    }

    pub fn current(&self) -> &Route {
        &self.page().route
    }

    pub fn page(&self) -> &Page {
        // The stack always holds Home.
        &self.stack[self.stack.len() - 1]
    }

    pub fn page_mut(&mut self) -> &mut Page {
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn title<'a>(&self, catalog: &'a Catalog) -> &'a str {
        self.current().title(catalog)
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::embedded().unwrap()
    }

    #[test]
    fn home_is_never_popped() {
        let mut nav = Navigator::new();
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.pop(), None);
        assert_eq!(nav.current(), &Route::Home);
    }

    #[test]
    fn push_and_pop() {
        let mut nav = Navigator::new();
        nav.push(Route::CategoryList {
            language: "python".into(),
        });
        assert_eq!(nav.depth(), 2);
        assert_eq!(
            nav.pop(),
            Some(Route::CategoryList {
                language: "python".into()
            })
        );
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn titles_follow_routes() {
        let catalog = catalog();
        let mut nav = Navigator::new();
        assert_eq!(nav.title(&catalog), "CodeSheets");
        nav.push(Route::CategoryList {
            language: "python".into(),
        });
        assert_eq!(nav.title(&catalog), "Python");
        nav.push(Route::SubcategoryList {
            language: "python".into(),
            category: "py_basics".into(),
        });
        assert_eq!(nav.title(&catalog), "Basics & Syntax");
        nav.push(Route::Detail {
            language: "python".into(),
            category: "py_basics".into(),
            subcategory: Some("py_variables".into()),
            example_index: 0,
        });
        assert_eq!(nav.title(&catalog), "Variables & Data Types");
    }

    #[test]
    fn titles_fall_back_for_unknown_ids() {
        let catalog = catalog();
        let route = |r: Route| r.title(&catalog).to_string();
        assert_eq!(
            route(Route::CategoryList {
                language: "cobol".into()
            }),
            "Categories"
        );
        assert_eq!(
            route(Route::SubcategoryList {
                language: "python".into(),
                category: "nope".into()
            }),
            "Subcategories"
        );
        assert_eq!(
            route(Route::Detail {
                language: "python".into(),
                category: "py_basics".into(),
                subcategory: Some("nope".into()),
                example_index: 0,
            }),
            "Detail"
        );
    }

    #[test]
    fn flat_category_goes_straight_to_detail() {
        let catalog = catalog();
        let html = catalog.language("html").unwrap();
        let basics = html.category("html_basics").unwrap();
        assert_eq!(
            category_route(html, basics),
            Route::Detail {
                language: "html".into(),
                category: "html_basics".into(),
                subcategory: None,
                example_index: 0,
            }
        );

        let python = catalog.language("python").unwrap();
        let nested = python.category("py_basics").unwrap();
        assert!(matches!(
            category_route(python, nested),
            Route::SubcategoryList { .. }
        ));
    }

    #[test]
    fn drawer_toggles() {
        let mut nav = Navigator::new();
        assert!(!nav.is_drawer_open());
        nav.toggle_drawer();
        assert!(nav.is_drawer_open());
        nav.close_drawer();
        assert!(!nav.is_drawer_open());
    }
}
