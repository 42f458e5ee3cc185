//! TUI Application
//!
//! `App` owns the catalog and the UI state and turns key events into state
//! transitions. Every result list it shows comes from the query engine;
//! the app only decides when to ask.

use crossterm::event::KeyCode;
use log::{debug, info};

use crate::catalog::Catalog;
use crate::config::{SubmissionConfig, TuiConfig};
use crate::domain::{Category, LinkKind, Pricing, Tool};
use crate::error::Result;
use crate::query::{self, SortKey};
use crate::submission::{Acknowledgement, FormField, Notification};

use super::input::KeyEvent;
use super::state::{
    AppState, BrowseKind, FilterRow, HomeSection, InteractionMode, PendingAction, View,
};

/// How long a notification stays in the status line
const NOTIFICATION_MS: u64 = 4000;

/// Main TUI application
pub struct App {
    state: AppState,
    catalog: Catalog,
    tui: TuiConfig,
    submission: SubmissionConfig,
}

impl App {
    pub fn new(catalog: Catalog, tui: TuiConfig, submission: SubmissionConfig) -> Self {
        let mut app = Self {
            state: AppState::new(),
            catalog,
            tui,
            submission,
        };
        app.refresh_results();
        app
    }

    /// Create with default config
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self::new(catalog, TuiConfig::default(), SubmissionConfig::default())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn tui_config(&self) -> &TuiConfig {
        &self.tui
    }

    // === Derived data ===

    /// Re-run the query engine against the current filter state
    pub fn refresh_results(&mut self) {
        self.state.results = query::search(&self.catalog, &self.state.filter)
            .into_iter()
            .map(|t| t.id.clone())
            .collect();
        if self.state.selected_result >= self.state.results.len() {
            self.state.selected_result = self.state.results.len().saturating_sub(1);
        }
    }

    /// Tools in the current result list
    pub fn result_tools(&self) -> Vec<&Tool> {
        self.state.results.iter().filter_map(|id| self.catalog.tool(id)).collect()
    }

    pub fn selected_tool(&self) -> Option<&Tool> {
        match self.state.current_view {
            View::Home if self.state.home_section == HomeSection::Featured => {
                self.catalog.featured().get(self.state.home_selected).copied()
            }
            View::Home => None,
            View::Browse => self
                .state
                .results
                .get(self.state.selected_result)
                .and_then(|id| self.catalog.tool(id)),
        }
    }

    pub fn selected_category(&self) -> Option<&Category> {
        if self.state.current_view == View::Home && self.state.home_section == HomeSection::Categories {
            self.catalog.categories().get(self.state.home_selected)
        } else {
            None
        }
    }

    pub fn detail_tool(&self) -> Option<&Tool> {
        self.state.detail_tool.as_deref().and_then(|id| self.catalog.tool(id))
    }

    /// Tags offered as toggles in the filter panel
    pub fn available_tags(&self) -> Vec<String> {
        let mut tags = self.catalog.all_tags();
        tags.truncate(self.tui.tag_chip_limit);
        tags
    }

    /// Title of the results page
    pub fn browse_title(&self) -> String {
        match (self.state.browse_kind, &self.state.filter.category) {
            (BrowseKind::Category, Some(id)) => self
                .catalog
                .category(id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "Discover AI Tools".to_string()),
            _ => "Discover AI Tools".to_string(),
        }
    }

    fn notification_ticks(&self) -> u32 {
        (NOTIFICATION_MS / self.tui.tick_rate_ms.max(1)).max(1) as u32
    }

    fn notify(&mut self, notification: Notification) {
        let ttl = self.notification_ticks();
        self.state.notify(notification, ttl);
    }

    // === Navigation ===

    /// Open the results page scoped to a category, clearing the search text
    pub fn open_category(&mut self, category_id: &str) {
        info!("Browsing category: {}", category_id);
        self.state.filter.set_category(Some(category_id.to_string()));
        self.state.filter.search.clear();
        self.state.search_input.clear();
        self.state.browse_kind = BrowseKind::Category;
        self.state.current_view = View::Browse;
        self.state.selected_result = 0;
        self.refresh_results();
    }

    /// Open the results page without changing filters
    pub fn open_browse(&mut self) {
        self.state.browse_kind = BrowseKind::Search;
        self.state.current_view = View::Browse;
        self.state.selected_result = 0;
        self.refresh_results();
    }

    /// Navigation reset: back to the home page with a fresh filter state
    pub fn back_home(&mut self) {
        self.state.filter.reset();
        self.state.search_input.clear();
        self.state.current_view = View::Home;
        self.state.interaction_mode = InteractionMode::Normal;
        self.state.browse_kind = BrowseKind::Search;
        self.state.selected_result = 0;
        self.state.filter_panel = Default::default();
        self.refresh_results();
    }

    pub fn open_detail(&mut self, tool_id: &str) {
        if self.catalog.tool(tool_id).is_some() {
            debug!("Opening detail for tool {}", tool_id);
            self.state.detail_tool = Some(tool_id.to_string());
            self.state.interaction_mode = InteractionMode::Detail;
        }
    }

    pub fn close_overlay(&mut self) {
        self.state.detail_tool = None;
        self.state.interaction_mode = InteractionMode::Normal;
    }

    pub fn open_submit(&mut self) {
        self.state.interaction_mode = InteractionMode::Submit;
    }

    pub fn quit(&mut self) {
        self.state.should_quit = true;
    }

    fn move_selection(&mut self, forward: bool) {
        let (len, selected) = match self.state.current_view {
            View::Home => {
                let len = match self.state.home_section {
                    HomeSection::Featured => self.catalog.featured().len(),
                    HomeSection::Categories => self.catalog.categories().len(),
                };
                (len, &mut self.state.home_selected)
            }
            View::Browse => (self.state.results.len(), &mut self.state.selected_result),
        };
        if len == 0 {
            *selected = 0;
            return;
        }
        *selected = if forward {
            (*selected + 1) % len
        } else {
            (*selected + len - 1) % len
        };
    }

    // === Key handling ===

    /// Handle a key press. Returns true if the app should quit.
    pub fn handle_key(&mut self, key: impl Into<KeyEvent>) -> bool {
        let key = key.into();
        if key.is_interrupt() {
            self.quit();
            return true;
        }

        match self.state.interaction_mode {
            InteractionMode::Help => self.state.interaction_mode = InteractionMode::Normal,
            InteractionMode::Detail => self.handle_detail_key(&key),
            InteractionMode::Submit => self.handle_submit_key(&key),
            InteractionMode::Search => self.handle_search_key(&key),
            InteractionMode::Filters => self.handle_filters_key(&key),
            InteractionMode::Normal => self.handle_normal_key(&key),
        }

        self.state.should_quit
    }

    fn handle_normal_key(&mut self, key: &KeyEvent) {
        match key.char() {
            Some('q') => return self.quit(),
            Some('?') => {
                self.state.interaction_mode = InteractionMode::Help;
                return;
            }
            Some('s') => return self.open_submit(),
            Some('/') => {
                if self.state.current_view == View::Home {
                    self.open_browse();
                }
                self.state.interaction_mode = InteractionMode::Search;
                return;
            }
            _ => {}
        }

        match self.state.current_view {
            View::Home => self.handle_home_key(key),
            View::Browse => self.handle_browse_key(key),
        }
    }

    fn handle_home_key(&mut self, key: &KeyEvent) {
        if key.is_down() {
            self.move_selection(true);
        } else if key.is_up() {
            self.move_selection(false);
        } else if key.code == KeyCode::Tab || key.code == KeyCode::BackTab {
            self.state.home_section = self.state.home_section.toggle();
            self.state.home_selected = 0;
        } else if key.code == KeyCode::Enter {
            if let Some(id) = self.selected_category().map(|c| c.id.clone()) {
                self.open_category(&id);
            } else if let Some(id) = self.selected_tool().map(|t| t.id.clone()) {
                self.open_detail(&id);
            }
        } else if key.char() == Some('e') {
            self.open_browse();
        }
    }

    fn handle_browse_key(&mut self, key: &KeyEvent) {
        if key.is_down() {
            self.move_selection(true);
        } else if key.is_up() {
            self.move_selection(false);
        } else if key.code == KeyCode::Enter {
            if let Some(id) = self.selected_tool().map(|t| t.id.clone()) {
                self.open_detail(&id);
            }
        } else if matches!(key.code, KeyCode::Esc | KeyCode::Backspace) {
            self.back_home();
        } else {
            match key.char() {
                Some('f') => {
                    self.state.interaction_mode = InteractionMode::Filters;
                    self.state.filter_panel = Default::default();
                }
                Some('o') => {
                    self.state.filter.sort = self.state.filter.sort.next();
                    self.refresh_results();
                }
                Some('x') => {
                    self.state.filter.clear_filters();
                    self.refresh_results();
                }
                Some('c') => {
                    self.state.filter.clear_search_and_facets();
                    self.state.search_input.clear();
                    self.refresh_results();
                }
                _ => {}
            }
        }
    }

    fn handle_search_key(&mut self, key: &KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.state.interaction_mode = InteractionMode::Normal;
            }
            KeyCode::Up | KeyCode::Down => {
                self.state.interaction_mode = InteractionMode::Normal;
                self.move_selection(key.code == KeyCode::Down);
            }
            _ => {
                if self.state.search_input.handle_key(key) {
                    let text = self.state.search_input.content().to_string();
                    if !text.is_empty() {
                        self.state.browse_kind = BrowseKind::Search;
                    }
                    self.state.filter.search = text;
                    self.state.selected_result = 0;
                    self.refresh_results();
                }
            }
        }
    }

    fn filter_row_len(&self, row: FilterRow) -> usize {
        match row {
            FilterRow::Category => self.catalog.categories().len() + 1,
            FilterRow::Pricing => Pricing::ALL.len(),
            FilterRow::Tags => self.available_tags().len(),
            FilterRow::Sort => SortKey::ALL.len(),
            FilterRow::Chips => self.state.filter.chips().len(),
        }
    }

    fn handle_filters_key(&mut self, key: &KeyEvent) {
        let row = self.state.filter_panel.row;

        if key.code == KeyCode::Esc || key.char() == Some('f') {
            self.state.interaction_mode = InteractionMode::Normal;
            return;
        }
        if key.is_down() || key.code == KeyCode::Tab {
            self.state.filter_panel.row = row.next();
            self.state.filter_panel.column = 0;
            return;
        }
        if key.is_up() || key.code == KeyCode::BackTab {
            self.state.filter_panel.row = row.prev();
            self.state.filter_panel.column = 0;
            return;
        }

        let horizontal = if key.is_right() {
            Some(true)
        } else if key.is_left() {
            Some(false)
        } else {
            None
        };

        match row {
            FilterRow::Category => {
                if let Some(forward) = horizontal {
                    self.cycle_category(forward);
                }
            }
            FilterRow::Sort => {
                if let Some(forward) = horizontal {
                    self.cycle_sort(forward);
                }
            }
            FilterRow::Pricing | FilterRow::Tags | FilterRow::Chips => {
                let len = self.filter_row_len(row);
                if let Some(forward) = horizontal {
                    if len > 0 {
                        let col = self.state.filter_panel.column.min(len - 1);
                        self.state.filter_panel.column = if forward {
                            (col + 1) % len
                        } else {
                            (col + len - 1) % len
                        };
                    }
                } else if matches!(
                    key.code,
                    KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Delete | KeyCode::Backspace
                ) {
                    self.activate_filter_cell(row);
                }
            }
        }
    }

    fn cycle_category(&mut self, forward: bool) {
        let categories = self.catalog.categories();
        // Position 0 is "All categories"
        let len = categories.len() + 1;
        let current = self
            .state
            .filter
            .category
            .as_deref()
            .and_then(|id| categories.iter().position(|c| c.id == id))
            .map_or(0, |i| i + 1);
        let next = if forward { (current + 1) % len } else { (current + len - 1) % len };
        let category = (next > 0).then(|| categories[next - 1].id.clone());
        self.state.filter.set_category(category);
        self.refresh_results();
    }

    fn cycle_sort(&mut self, forward: bool) {
        let keys = SortKey::ALL;
        let current = keys.iter().position(|k| *k == self.state.filter.sort).unwrap_or(0);
        let next = if forward {
            (current + 1) % keys.len()
        } else {
            (current + keys.len() - 1) % keys.len()
        };
        self.state.filter.sort = keys[next];
        self.refresh_results();
    }

    fn activate_filter_cell(&mut self, row: FilterRow) {
        let col = self.state.filter_panel.column;
        match row {
            FilterRow::Pricing => {
                if let Some(pricing) = Pricing::ALL.get(col) {
                    self.state.filter.toggle_pricing(*pricing);
                }
            }
            FilterRow::Tags => {
                if let Some(tag) = self.available_tags().get(col) {
                    self.state.filter.toggle_tag(tag);
                }
            }
            FilterRow::Chips => {
                if let Some(chip) = self.state.filter.chips().get(col) {
                    self.state.filter.remove_chip(chip);
                }
                let len = self.state.filter.chips().len();
                self.state.filter_panel.column = col.min(len.saturating_sub(1));
            }
            FilterRow::Category | FilterRow::Sort => return,
        }
        self.refresh_results();
    }

    fn handle_detail_key(&mut self, key: &KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) || key.char() == Some('q') {
            self.close_overlay();
            return;
        }
        let kind = match key.char() {
            Some('w') => LinkKind::Website,
            Some('g') => LinkKind::Github,
            Some('d') => LinkKind::Docs,
            _ => return,
        };
        let Some(tool) = self.detail_tool() else {
            return;
        };
        let request = match tool.link(kind) {
            Some(_) => Ok(tool.id.clone()),
            None => Err(format!("{} has no {} link", tool.name, kind)),
        };
        match request {
            Ok(tool_id) => self.state.pending_action = Some(PendingAction::OpenLink { tool_id, kind }),
            Err(message) => self.notify(Notification::failure("No Link", message)),
        }
    }

    fn handle_submit_key(&mut self, key: &KeyEvent) {
        if self.state.submit.submitting {
            return;
        }
        if key.code == KeyCode::Esc {
            self.state.interaction_mode = InteractionMode::Normal;
            return;
        }
        if key.is_ctrl('s') {
            self.state.pending_action = Some(PendingAction::Submit);
            return;
        }

        let focus = self.state.submit.focus;
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.state.submit.focus = focus.next();
                return;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.state.submit.focus = focus.prev();
                return;
            }
            _ => {}
        }

        match focus {
            FormField::Category => {
                if matches!(key.code, KeyCode::Left | KeyCode::Right) {
                    self.cycle_form_category(key.code == KeyCode::Right);
                }
            }
            FormField::Pricing => {
                if matches!(key.code, KeyCode::Left | KeyCode::Right) {
                    self.cycle_form_pricing(key.code == KeyCode::Right);
                }
            }
            FormField::Tags => self.handle_tag_key(key),
            field => {
                if key.code == KeyCode::Enter {
                    self.state.submit.focus = field.next();
                } else if let Some(text) = self.state.submit.form.text_mut(field) {
                    edit_string(text, key);
                }
            }
        }
    }

    fn handle_tag_key(&mut self, key: &KeyEvent) {
        let submit = &mut self.state.submit;
        match key.code {
            KeyCode::Enter => {
                let raw = submit.tag_input.content().to_string();
                if submit.form.add_tag(&raw, self.submission.max_tags) {
                    submit.tag_input.clear();
                }
            }
            KeyCode::Backspace if submit.tag_input.is_empty() => {
                if let Some(last) = submit.form.tags.last().cloned() {
                    submit.form.remove_tag(&last);
                }
            }
            _ => {
                submit.tag_input.handle_key(key);
            }
        }
    }

    fn cycle_form_category(&mut self, forward: bool) {
        let ids: Vec<&str> = self.catalog.categories().iter().map(|c| c.id.as_str()).collect();
        if ids.is_empty() {
            return;
        }
        let form = &mut self.state.submit.form;
        let next = match ids.iter().position(|id| *id == form.category) {
            None => {
                if forward {
                    0
                } else {
                    ids.len() - 1
                }
            }
            Some(i) if forward => (i + 1) % ids.len(),
            Some(i) => (i + ids.len() - 1) % ids.len(),
        };
        form.category = ids[next].to_string();
    }

    fn cycle_form_pricing(&mut self, forward: bool) {
        let form = &mut self.state.submit.form;
        let len = Pricing::ALL.len();
        let next = match Pricing::parse(&form.pricing).and_then(|p| Pricing::ALL.iter().position(|x| *x == p)) {
            None => {
                if forward {
                    0
                } else {
                    len - 1
                }
            }
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
        };
        form.pricing = Pricing::ALL[next].as_str().to_string();
    }

    // === Results of runner actions ===

    /// Mark the submission as in flight
    pub fn begin_submission(&mut self) {
        self.state.submit.submitting = true;
    }

    /// Record a finished submission; the overlay closes on success
    pub fn finish_submission(&mut self, outcome: &Result<Acknowledgement>) {
        self.state.submit.submitting = false;
        if outcome.is_ok() {
            self.state.submit.focus = FormField::default();
            self.state.submit.tag_input.clear();
            self.state.interaction_mode = InteractionMode::Normal;
        }
        self.notify(Notification::from_outcome(outcome));
    }

    /// Record the result of opening a link
    pub fn finish_open_link(&mut self, outcome: Result<String>) {
        match outcome {
            Ok(url) => self.notify(Notification::success("Opened", url)),
            Err(e) => self.notify(Notification::failure("Could not open link", e.to_string())),
        }
    }

    /// Periodic housekeeping
    pub fn on_tick(&mut self) {
        self.state.tick_notification();
    }
}

/// Append-only editing for single-line form fields
fn edit_string(text: &mut String, key: &KeyEvent) {
    if let Some(c) = key.char() {
        text.push(c);
    } else if key.code == KeyCode::Backspace {
        text.pop();
    }
}
