//! Application state for the TUI.
//!
//! This module defines the core state types that drive the TUI:
//! - `AppState`: All mutable application state
//! - `View`: Which page is showing (home or results)
//! - `InteractionMode`: Current input mode (normal, search typing, filter panel, overlays)

use crate::domain::LinkKind;
use crate::query::FilterState;
use crate::submission::{FormField, Notification, SubmissionForm};

use super::input::TextInput;

/// The primary application state.
///
/// Owned by `App` and updated in response to key events. The result list
/// is derived from `filter` by the query engine and never edited directly.
#[derive(Debug, Default)]
pub struct AppState {
    // View state
    pub current_view: View,
    pub interaction_mode: InteractionMode,

    // Home state
    pub home_section: HomeSection,
    pub home_selected: usize,

    // Browse state
    /// How the results page was entered
    pub browse_kind: BrowseKind,
    pub filter: FilterState,
    /// Search box contents, mirrored into `filter.search`
    pub search_input: TextInput,
    /// Ids of the tools matching `filter`, in display order
    pub results: Vec<String>,
    pub selected_result: usize,
    pub filter_panel: FilterPanelState,

    // Overlays
    /// Tool shown in the detail overlay
    pub detail_tool: Option<String>,
    pub submit: SubmitState,

    // Status line
    pub notification: Option<Notification>,
    /// Ticks left before the notification is cleared
    pub notification_ttl: u32,

    /// Pending action (processed by runner)
    pub pending_action: Option<PendingAction>,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notification for a number of ticks
    pub fn notify(&mut self, notification: Notification, ttl_ticks: u32) {
        self.notification = Some(notification);
        self.notification_ttl = ttl_ticks;
    }

    /// Count down the notification timer; returns true when it expired
    pub fn tick_notification(&mut self) -> bool {
        if self.notification.is_none() {
            return false;
        }
        self.notification_ttl = self.notification_ttl.saturating_sub(1);
        if self.notification_ttl == 0 {
            self.notification = None;
            return true;
        }
        false
    }

    /// Header line for the results page
    pub fn results_summary(&self, catalog_len: usize) -> String {
        if self.filter.is_filtered() {
            format!("{} tools found", self.results.len())
        } else {
            format!("Browse {}+ AI tools", catalog_len)
        }
    }
}

/// Which page is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Featured tools and category tiles
    #[default]
    Home,
    /// Search and category results
    Browse,
}

/// How the results page was reached; decides its title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowseKind {
    #[default]
    Search,
    Category,
}

/// Which list on the home page has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeSection {
    #[default]
    Featured,
    Categories,
}

impl HomeSection {
    pub fn toggle(self) -> Self {
        match self {
            HomeSection::Featured => HomeSection::Categories,
            HomeSection::Categories => HomeSection::Featured,
        }
    }
}

/// Current interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Normal navigation
    #[default]
    Normal,
    /// Typing in the search box
    Search,
    /// Moving through the filter panel
    Filters,
    /// Tool detail overlay visible
    Detail,
    /// Submission form overlay visible
    Submit,
    /// Help overlay visible
    Help,
}

impl InteractionMode {
    pub fn is_overlay(&self) -> bool {
        matches!(self, Self::Detail | Self::Submit | Self::Help)
    }
}

/// Rows of the filter panel, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterRow {
    #[default]
    Category,
    Pricing,
    Tags,
    Sort,
    Chips,
}

impl FilterRow {
    pub fn next(self) -> Self {
        match self {
            Self::Category => Self::Pricing,
            Self::Pricing => Self::Tags,
            Self::Tags => Self::Sort,
            Self::Sort => Self::Chips,
            Self::Chips => Self::Category,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Category => Self::Chips,
            Self::Pricing => Self::Category,
            Self::Tags => Self::Pricing,
            Self::Sort => Self::Tags,
            Self::Chips => Self::Sort,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::Pricing => "Pricing",
            Self::Tags => "Popular Tags",
            Self::Sort => "Sort by",
            Self::Chips => "Active",
        }
    }
}

/// Cursor within the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterPanelState {
    pub row: FilterRow,
    /// Column within the row (toggle index or chip index)
    pub column: usize,
}

/// Submission overlay state.
#[derive(Debug, Clone, Default)]
pub struct SubmitState {
    pub form: SubmissionForm,
    pub focus: FormField,
    /// Pending text for the tags field
    pub tag_input: TextInput,
    /// True while the simulated submission is in flight
    pub submitting: bool,
}

/// Actions the runner performs outside the key handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    /// Submit the form in `SubmitState`
    Submit,
    /// Open a tool link in the browser
    OpenLink { tool_id: String, kind: LinkKind },
}
