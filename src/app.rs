//! The interactive cheat-sheet browser.

use catalog::{Catalog, ExamplePager, Language};
use catalog::search::filter_searchable;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::App;
use crate::canvas::{Canvas, Region, Size};
use crate::navigation::{Navigator, Route, category_route, find_category};
use crate::screens::{self, Context, category_list, detail, drawer, home, subcategory_list};
use crate::text::truncate;
use crate::theme::Theme;
use crate::widget::Widget;
use crate::widget::list_view::{ListItem, ListMessage};
use crate::widget::search_input::{InputMessage, SearchInput};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    Open(Route),
    Back,
    ToggleDrawer,
    Quit,
}

pub struct CodeSheets<'a> {
    catalog: &'a Catalog,
    theme: Theme,
    nav: Navigator,
    search: SearchInput,
    size: Size,
    /// One-line notice shown in the footer until the next key.
    status: Option<String>,
    quit: bool,
}

impl<'a> CodeSheets<'a> {
    pub fn new(catalog: &'a Catalog, theme: Theme) -> Self {
        Self {
            catalog,
            search: SearchInput::new(home::PLACEHOLDER, theme.clone()),
            theme,
            nav: Navigator::new(),
            size: Size::new(80, 24),
            status: None,
            quit: false,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    pub fn search_query(&self) -> &str {
        self.search.value()
    }

    pub fn is_searching(&self) -> bool {
        self.search.is_focused()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn ctx(&self) -> Context<'_> {
        Context {
            catalog: self.catalog,
            theme: &self.theme,
        }
    }

    /// Everything between the header and footer rows.
    fn body(area: Region) -> Region {
        Region::new(area.x, area.y + 1, area.width, area.height - 2)
    }

    fn area(&self) -> Region {
        Region::new(0, 0, self.size.width as i32, self.size.height as i32)
    }

    // === Keys ===

    fn global_key(&self, code: KeyCode) -> Option<Message> {
        match code {
            KeyCode::Char('q') => Some(Message::Quit),
            KeyCode::Esc | KeyCode::Backspace => Some(Message::Back),
            _ => None,
        }
    }

    /// Items and list region of the current screen, if it shows a list.
    fn current_list(&self) -> Option<(Vec<ListItem>, Region)> {
        let ctx = self.ctx();
        let body = Self::body(self.area());
        match self.nav.current() {
            Route::Home => {
                let languages = home::languages(ctx, self.search.value());
                Some((home::items(ctx, &languages), home::list_region(body)))
            }
            Route::CategoryList { language } => {
                let language = self.catalog.language(language)?;
                let header = category_list::header(ctx, language, body);
                Some((
                    category_list::items(ctx, language),
                    screens::list_region(body, header.len()),
                ))
            }
            Route::SubcategoryList { language, category } => {
                let (language, category) = find_category(self.catalog, language, category)?;
                let header = subcategory_list::header(ctx, language, category, body);
                Some((
                    subcategory_list::items(ctx, language, category),
                    screens::list_region(body, header.len()),
                ))
            }
            Route::Detail { .. } => None,
        }
    }

    /// Move the list selection; returns the index activated with Enter.
    fn list_key(&mut self, code: KeyCode) -> Option<usize> {
        let (items, region) = self.current_list()?;
        let mut list = screens::list_view(self.ctx(), items, self.nav.page(), region);
        let message = list.on_event(code);
        let page = self.nav.page_mut();
        page.selected = list.selected();
        page.scroll = list.offset();
        message.map(|ListMessage::Activated(index)| index)
    }

    fn reset_page(&mut self) {
        let page = self.nav.page_mut();
        page.selected = 0;
        page.scroll = 0;
    }

    fn open_language(&mut self, index: usize) -> Option<Message> {
        let catalog = self.catalog;
        let languages = filter_searchable(&catalog.languages, self.search.value());
        let language = languages.get(index)?;
        if language.is_empty() {
            log::info!("{} has no content yet", language.id);
            self.status = Some(format!("{} is coming soon", language.name));
            return None;
        }
        Some(Message::Open(Route::CategoryList {
            language: language.id.clone(),
        }))
    }

    fn search_key(&mut self, code: KeyCode) -> Option<Message> {
        if matches!(code, KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown) {
            self.list_key(code);
            return None;
        }
        match self.search.on_event(code)? {
            InputMessage::Changed(query) => {
                log::debug!("language filter {query:?}");
                self.reset_page();
                None
            }
            InputMessage::Submitted => {
                self.search.set_focus(false);
                self.open_language(self.nav.page().selected)
            }
            InputMessage::Cancelled => {
                self.search.set_focus(false);
                None
            }
        }
    }

    fn home_key(&mut self, code: KeyCode) -> Option<Message> {
        if self.search.is_focused() {
            return self.search_key(code);
        }
        match code {
            KeyCode::Char('/') => {
                self.search.set_focus(true);
                None
            }
            KeyCode::Esc if !self.search.value().is_empty() => {
                self.search.clear();
                self.reset_page();
                None
            }
            _ => match self.list_key(code) {
                Some(index) => self.open_language(index),
                None => self.global_key(code),
            },
        }
    }

    fn category_key(&mut self, language_id: &str, code: KeyCode) -> Option<Message> {
        let Some(index) = self.list_key(code) else {
            return self.global_key(code);
        };
        let language = self.catalog.language(language_id)?;
        let category = language.categories.get(index)?;
        if category.example_count() == 0 {
            self.status = Some(format!("{} has no examples yet", category.title));
            return None;
        }
        Some(Message::Open(category_route(language, category)))
    }

    fn subcategory_key(&mut self, language_id: &str, category_id: &str, code: KeyCode) -> Option<Message> {
        let Some(index) = self.list_key(code) else {
            return self.global_key(code);
        };
        let (language, category) = find_category(self.catalog, language_id, category_id)?;
        let subcategory = category.subcategories().get(index)?;
        if subcategory.examples.is_empty() {
            self.status = Some(format!("{} has no examples yet", subcategory.title));
            return None;
        }
        Some(Message::Open(Route::Detail {
            language: language.id.clone(),
            category: category.id.clone(),
            subcategory: Some(subcategory.id.clone()),
            example_index: 0,
        }))
    }

    fn set_example(&mut self, index: usize) {
        let page = self.nav.page_mut();
        if let Route::Detail { example_index, .. } = &mut page.route {
            log::debug!("example {index}");
            *example_index = index;
        }
        page.scroll = 0;
    }

    fn scroll_to(&mut self, scroll: usize, max: usize) {
        self.nav.page_mut().scroll = scroll.min(max);
    }

    fn detail_max_scroll(&self, language: &Language, pager: &ExamplePager<'_>, body: Region) -> usize {
        let lines = detail::lines(self.ctx(), language, pager, body);
        detail::max_scroll(lines.len(), body)
    }

    fn detail_key(&mut self, code: KeyCode) -> Option<Message> {
        let route = self.nav.current().clone();
        let Some((language, mut pager)) = detail::resolve(self.catalog, &route) else {
            return self.global_key(code);
        };
        let body = Self::body(self.area());
        let scroll = self.nav.page().scroll;
        let page_rows = detail::document_region(body).height.max(1) as usize;

        match code {
            KeyCode::Char('n') | KeyCode::Right => {
                if pager.forward() {
                    self.set_example(pager.index());
                } else {
                    self.status = Some("Last example".to_string());
                }
            }
            KeyCode::Char('p') | KeyCode::Left => {
                if pager.back() {
                    self.set_example(pager.index());
                } else {
                    self.status = Some("First example".to_string());
                }
            }
            KeyCode::Home | KeyCode::Char('g') => self.scroll_to(0, 0),
            KeyCode::Up
            | KeyCode::Char('k')
            | KeyCode::Down
            | KeyCode::Char('j')
            | KeyCode::PageUp
            | KeyCode::PageDown
            | KeyCode::Char(' ')
            | KeyCode::End
            | KeyCode::Char('G') => {
                let max = self.detail_max_scroll(language, &pager, body);
                let target = match code {
                    KeyCode::Up | KeyCode::Char('k') => scroll.saturating_sub(1),
                    KeyCode::Down | KeyCode::Char('j') => scroll + 1,
                    KeyCode::PageUp => scroll.saturating_sub(page_rows),
                    KeyCode::PageDown | KeyCode::Char(' ') => scroll + page_rows,
                    _ => max,
                };
                self.scroll_to(target, max);
            }
            _ => return self.global_key(code),
        }
        None
    }

    // === Drawing ===

    fn render_header(&self, canvas: &mut Canvas, area: Region) {
        let bar = area.take_rows(1);
        let style = self.theme.header();
        canvas.fill(bar, &style);
        let title = format!(" ≡ {}", self.nav.title(self.catalog));
        canvas.put_str(bar.x, bar.y, &truncate(&title, bar.width.max(0) as usize), &style);
    }

    fn footer_text(&self) -> &str {
        if let Some(status) = &self.status {
            return status;
        }
        if self.nav.is_drawer_open() {
            return " Any key closes the menu";
        }
        match self.nav.current() {
            Route::Home if self.search.is_focused() => " Type to filter · ↑↓ move · Enter open · Esc done",
            Route::Home => " / search · ↑↓ move · Enter open · Tab menu · q quit",
            Route::CategoryList { .. } | Route::SubcategoryList { .. } => {
                " ↑↓ move · Enter open · Esc back · Tab menu · q quit"
            }
            Route::Detail { .. } => " n/p page · ↑↓ scroll · Esc back · Tab menu · q quit",
        }
    }

    fn render_footer(&self, canvas: &mut Canvas, area: Region) {
        if area.height < 2 {
            return;
        }
        let y = area.bottom() - 1;
        let text = self.footer_text();
        let text = if self.status.is_some() {
            format!(" {text}")
        } else {
            text.to_string()
        };
        canvas.put_str(area.x, y, &truncate(&text, area.width.max(0) as usize), &self.theme.footer());
    }

    fn render_missing(&self, canvas: &mut Canvas, body: Region) {
        canvas.put_str(body.x + 1, body.y, "This page is no longer in the catalog.", &self.theme.muted());
    }

    fn render_body(&self, canvas: &mut Canvas, body: Region) {
        let ctx = self.ctx();
        let page = self.nav.page();
        match &page.route {
            Route::Home => home::render(ctx, canvas, body, &self.search, page),
            Route::CategoryList { language } => match self.catalog.language(language) {
                Some(language) => category_list::render(ctx, canvas, body, language, page),
                None => self.render_missing(canvas, body),
            },
            Route::SubcategoryList { language, category } => {
                match find_category(self.catalog, language, category) {
                    Some((language, category)) => {
                        subcategory_list::render(ctx, canvas, body, language, category, page)
                    }
                    None => self.render_missing(canvas, body),
                }
            }
            Route::Detail { .. } => match detail::resolve(self.catalog, &page.route) {
                Some((language, pager)) => {
                    detail::render(ctx, canvas, body, language, &pager, page.scroll)
                }
                None => self.render_missing(canvas, body),
            },
        }
    }
}

impl App for CodeSheets<'_> {
    type Message = Message;

    fn render(&self, canvas: &mut Canvas) {
        let area = canvas.area();
        let body = Self::body(area);
        self.render_header(canvas, area);
        canvas.push_clip(body);
        self.render_body(canvas, body);
        if self.nav.is_drawer_open() {
            drawer::render(self.ctx(), canvas, body);
        }
        canvas.pop_clip();
        self.render_footer(canvas, area);
    }

    fn on_key(&mut self, key: KeyEvent) -> Option<Message> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Message::Quit);
        }
        self.status = None;

        if self.nav.is_drawer_open() {
            self.nav.close_drawer();
            return None;
        }
        if key.code == KeyCode::Tab {
            return Some(Message::ToggleDrawer);
        }

        match self.nav.current().clone() {
            Route::Home => self.home_key(key.code),
            Route::CategoryList { language } => self.category_key(&language, key.code),
            Route::SubcategoryList { language, category } => {
                self.subcategory_key(&language, &category, key.code)
            }
            Route::Detail { .. } => self.detail_key(key.code),
        }
    }

    fn handle_message(&mut self, message: Message) {
        match message {
            Message::Open(route) => {
                self.search.set_focus(false);
                self.nav.push(route);
            }
            Message::Back => {
                self.nav.pop();
            }
            Message::ToggleDrawer => {
                self.search.set_focus(false);
                self.nav.toggle_drawer();
            }
            Message::Quit => {
                log::info!("quit");
                self.quit = true;
            }
        }
    }

    fn on_resize(&mut self, size: Size) {
        self.size = size;
    }

    fn should_quit(&self) -> bool {
        self.quit
    }
}
