//! TUI Views
//!
//! View components for rendering the TUI: the home page, the results page
//! with its filter panel, and the detail, submission and help overlays.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::domain::{LinkKind, Pricing, Tool};
use crate::query::Chip;
use crate::submission::{FormField, NotificationKind};

use super::app::App;
use super::colors;
use super::state::{FilterRow, HomeSection, InteractionMode, View};

/// Something that draws itself into an area of the frame
pub trait Panel {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App);

    fn title(&self) -> &'static str;
}

/// Render the whole application
pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5), Constraint::Length(1)])
        .split(frame.area());

    render_header(frame, chunks[0], app);
    match app.state().current_view {
        View::Home => HomeView.render(frame, chunks[1], app),
        View::Browse => BrowseView.render(frame, chunks[1], app),
    }
    render_status_line(frame, chunks[2], app);

    let overlay: Option<&dyn Panel> = match app.state().interaction_mode {
        InteractionMode::Detail => Some(&DetailOverlay),
        InteractionMode::Submit => Some(&SubmitOverlay),
        InteractionMode::Help => Some(&HelpOverlay),
        _ => None,
    };
    if let Some(panel) = overlay {
        let area = centered_rect(80, 85, frame.area());
        frame.render_widget(Clear, area);
        panel.render(frame, area, app);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.state();
    let line = Line::from(vec![
        Span::styled(" ⚡ AI Tools Hub ", Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD)),
        Span::styled("│ ", Style::default().fg(colors::DIM)),
        Span::raw(state.results_summary(app.catalog().len())),
    ]);
    let header = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.state();
    let line = match &state.notification {
        Some(n) => {
            let color = match n.kind {
                NotificationKind::Success => colors::SUCCESS,
                NotificationKind::Failure => colors::FAILURE,
            };
            Line::from(vec![
                Span::styled(format!(" {} ", n.title), Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::raw(n.body.clone()),
            ])
        }
        None => key_hints(hints_for(app)),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn hints_for(app: &App) -> &'static [(&'static str, &'static str)] {
    let state = app.state();
    match (state.interaction_mode, state.current_view) {
        (InteractionMode::Search, _) => &[("type", "search"), ("enter", "done"), ("esc", "done")],
        (InteractionMode::Filters, _) => &[("↑↓", "row"), ("←→", "move"), ("space", "toggle"), ("f", "close")],
        (InteractionMode::Detail, _) => &[("w", "website"), ("g", "github"), ("d", "docs"), ("esc", "close")],
        (InteractionMode::Submit, _) => &[("tab", "next"), ("ctrl+s", "submit"), ("esc", "close")],
        (InteractionMode::Help, _) => &[("any key", "close")],
        (InteractionMode::Normal, View::Home) => &[
            ("tab", "section"),
            ("enter", "open"),
            ("/", "search"),
            ("e", "explore"),
            ("s", "submit"),
            ("?", "help"),
            ("q", "quit"),
        ],
        (InteractionMode::Normal, View::Browse) => &[
            ("/", "search"),
            ("f", "filters"),
            ("o", "sort"),
            ("x", "clear filters"),
            ("enter", "details"),
            ("esc", "home"),
            ("?", "help"),
        ],
    }
}

fn key_hints(hints: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, action) in hints {
        spans.push(Span::styled(format!(" <{}>", key), Style::default().fg(colors::KEYBIND)));
        spans.push(Span::styled(format!(" {}", action), Style::default().fg(colors::DIM)));
    }
    Line::from(spans)
}

/// Featured tools and category tiles
pub struct HomeView;

impl Panel for HomeView {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let catalog = app.catalog();
        let state = app.state();
        let featured = catalog.featured();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length((featured.len() as u16) * 3 + 2),
                Constraint::Min(4),
            ])
            .split(area);

        let hero = Paragraph::new(vec![
            Line::from(Span::styled(
                "Discover the Best AI Tools",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(
                    "Browse {}+ AI tools across {} categories",
                    catalog.len(),
                    catalog.categories().len()
                ),
                Style::default().fg(colors::DIM),
            )),
        ]);
        frame.render_widget(hero, chunks[0]);

        let featured_focus = state.home_section == HomeSection::Featured;
        let cards: Vec<ListItem> = featured
            .iter()
            .map(|t| tool_card(t, app.tui_config().card_tag_limit))
            .collect();
        let list = List::new(cards)
            .block(section_block(" Featured Tools ", featured_focus))
            .highlight_style(highlight(featured_focus));
        let mut list_state = ListState::default();
        if featured_focus {
            list_state.select(Some(state.home_selected));
        }
        frame.render_stateful_widget(list, chunks[1], &mut list_state);

        let categories_focus = !featured_focus;
        let tiles: Vec<ListItem> = catalog
            .categories()
            .iter()
            .map(|c| {
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{} ", c.glyph())),
                    Span::styled(c.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(format!("  {}", c.description), Style::default().fg(colors::DIM)),
                    Span::styled(format!("  {} tools", c.tool_count), Style::default().fg(colors::KEYBIND)),
                ]))
            })
            .collect();
        let list = List::new(tiles)
            .block(section_block(" Browse by Category ", categories_focus))
            .highlight_style(highlight(categories_focus));
        let mut list_state = ListState::default();
        if categories_focus {
            list_state.select(Some(state.home_selected));
        }
        frame.render_stateful_widget(list, chunks[2], &mut list_state);
    }

    fn title(&self) -> &'static str {
        "Home"
    }
}

/// Search and category results with the filter panel
pub struct BrowseView;

impl BrowseView {
    fn render_search_box(frame: &mut Frame, area: Rect, app: &App) {
        let state = app.state();
        let typing = state.interaction_mode == InteractionMode::Search;
        let text = if state.search_input.is_empty() && !typing {
            Span::styled("Search AI tools...", Style::default().fg(colors::DIM))
        } else {
            Span::raw(state.search_input.content().to_string())
        };
        let search = Paragraph::new(Line::from(vec![Span::raw("🔍 "), text]))
            .block(section_block(" Search ", typing));
        frame.render_widget(search, area);

        if typing {
            let before = &state.search_input.content()[..state.search_input.cursor()];
            let x = area.x + 4 + before.chars().count() as u16;
            frame.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
        }
    }

    fn render_filter_panel(frame: &mut Frame, area: Rect, app: &App) {
        let state = app.state();
        let filter = &state.filter;
        let panel = state.filter_panel;

        let category_name = filter
            .category
            .as_deref()
            .and_then(|id| app.catalog().category(id))
            .map_or("All Categories".to_string(), |c| c.name.clone());

        let pricing: Vec<(String, bool)> = Pricing::ALL
            .iter()
            .map(|p| (p.label().to_string(), filter.pricing.contains(p)))
            .collect();
        let tags: Vec<(String, bool)> = app
            .available_tags()
            .into_iter()
            .map(|t| {
                let on = filter.tags.contains(&t);
                (t, on)
            })
            .collect();
        let chips: Vec<(String, bool)> = filter.chips().iter().map(|c| (chip_label(c, app), true)).collect();

        let rows = [
            (FilterRow::Category, vec![(format!("◀ {} ▶", category_name), false)]),
            (FilterRow::Pricing, pricing),
            (FilterRow::Tags, tags),
            (FilterRow::Sort, vec![(format!("◀ {} ▶", filter.sort.label()), false)]),
            (FilterRow::Chips, chips),
        ];

        let lines: Vec<Line> = rows
            .into_iter()
            .map(|(row, cells)| {
                let focused = row == panel.row;
                let mut spans = vec![Span::styled(
                    format!("{:>13}: ", row.label()),
                    if focused {
                        Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(colors::DIM)
                    },
                )];
                if cells.is_empty() {
                    spans.push(Span::styled("none", Style::default().fg(colors::DIM)));
                }
                let toggles = matches!(row, FilterRow::Pricing | FilterRow::Tags);
                for (i, (label, on)) in cells.into_iter().enumerate() {
                    let text = match (toggles, on) {
                        (true, true) => format!("[x] {}", label),
                        (true, false) => format!("[ ] {}", label),
                        (false, _) if row == FilterRow::Chips => format!("{} ✕", label),
                        (false, _) => label,
                    };
                    let mut style = Style::default();
                    if focused && (i == panel.column || matches!(row, FilterRow::Category | FilterRow::Sort)) {
                        style = style.bg(colors::SELECTED).add_modifier(Modifier::BOLD);
                    }
                    spans.push(Span::styled(text, style));
                    spans.push(Span::raw("  "));
                }
                Line::from(spans)
            })
            .collect();

        let block = section_block(" Filters ", true);
        // One line per row; long tag rows are cut at the panel edge
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_chips(frame: &mut Frame, area: Rect, app: &App) {
        let filter = &app.state().filter;
        let mut spans = vec![Span::styled(
            format!(" Sort: {}  ", filter.sort.label()),
            Style::default().fg(colors::DIM),
        )];
        for chip in filter.chips() {
            spans.push(Span::styled(
                format!("[{} ✕]", chip_label(&chip, app)),
                Style::default().fg(colors::KEYBIND),
            ));
            spans.push(Span::raw(" "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_results(frame: &mut Frame, area: Rect, app: &App) {
        let state = app.state();
        let tools = app.result_tools();
        let focused = state.interaction_mode == InteractionMode::Normal;

        if tools.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled("No tools found", Style::default().add_modifier(Modifier::BOLD))),
                Line::from(Span::styled(
                    "Try adjusting your search or filters",
                    Style::default().fg(colors::DIM),
                )),
                Line::from(key_hints(&[("c", "Clear Filters")])),
            ])
            .centered()
            .block(section_block(" Results ", focused));
            frame.render_widget(empty, area);
            return;
        }

        let cards: Vec<ListItem> = tools
            .iter()
            .map(|t| tool_card(t, app.tui_config().card_tag_limit))
            .collect();
        let list = List::new(cards)
            .block(section_block(" Results ", focused))
            .highlight_style(highlight(focused));
        let mut list_state = ListState::default();
        list_state.select(Some(state.selected_result));
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}

impl Panel for BrowseView {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let filters_open = app.state().interaction_mode == InteractionMode::Filters;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(if filters_open { 7 } else { 1 }),
                Constraint::Min(3),
            ])
            .split(area);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(app.browse_title(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  {}", app.state().results_summary(app.catalog().len())),
                Style::default().fg(colors::DIM),
            ),
        ]));
        frame.render_widget(title, chunks[0]);

        Self::render_search_box(frame, chunks[1], app);
        if filters_open {
            Self::render_filter_panel(frame, chunks[2], app);
        } else {
            Self::render_chips(frame, chunks[2], app);
        }
        Self::render_results(frame, chunks[3], app);
    }

    fn title(&self) -> &'static str {
        "Browse"
    }
}

/// Full record of one tool
pub struct DetailOverlay;

impl Panel for DetailOverlay {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let Some(tool) = app.detail_tool() else {
            return;
        };
        let category = app
            .catalog()
            .category(&tool.category)
            .map_or(tool.category.as_str(), |c| c.name.as_str());

        let mut lines = vec![
            Line::from(vec![
                Span::styled(category.to_string(), Style::default().fg(colors::KEYBIND)),
                Span::raw("  "),
                pricing_badge(tool.pricing),
                Span::raw("  "),
                Span::styled(stars(tool.rating), Style::default().fg(colors::FEATURED)),
                Span::raw(format!(" {:.1}", tool.rating)),
                Span::styled(
                    format!("  {} users  since {}", tool.users, tool.display_year()),
                    Style::default().fg(colors::DIM),
                ),
            ]),
            Line::from(""),
            Line::from(tool.long_description().to_string()),
        ];

        push_section(&mut lines, "Key Features", &tool.features);
        push_section(&mut lines, "Use Cases", &tool.use_cases);

        lines.push(Line::from(""));
        let mut tag_spans = vec![Span::styled("Tags: ", Style::default().add_modifier(Modifier::BOLD))];
        tag_spans.extend(tool.tags.iter().map(|t| Span::styled(format!("#{} ", t), Style::default().fg(colors::KEYBIND))));
        lines.push(Line::from(tag_spans));

        lines.push(Line::from(""));
        for kind in [LinkKind::Website, LinkKind::Github, LinkKind::Docs] {
            let key = match kind {
                LinkKind::Website => "w",
                LinkKind::Github => "g",
                LinkKind::Docs => "d",
            };
            let line = match tool.link(kind) {
                Some(url) => Line::from(vec![
                    Span::styled(format!("<{}> ", key), Style::default().fg(colors::KEYBIND)),
                    Span::styled(format!("{:<10}", kind.label()), Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(url.to_string()),
                ]),
                None => Line::from(Span::styled(
                    format!("    {:<10}not available", kind.label()),
                    Style::default().fg(colors::DIM),
                )),
            };
            lines.push(line);
        }

        let title = if tool.featured {
            format!(" {} ★ Featured ", tool.name)
        } else {
            format!(" {} ", tool.name)
        };
        let detail = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(section_block(&title, true));
        frame.render_widget(detail, area);
    }

    fn title(&self) -> &'static str {
        "Details"
    }
}

/// Tool submission form
pub struct SubmitOverlay;

impl Panel for SubmitOverlay {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let submit = &app.state().submit;
        let form = &submit.form;

        let mut lines = vec![
            Line::from(Span::styled(
                "Share an AI tool with the community. Fields marked * are required.",
                Style::default().fg(colors::DIM),
            )),
            Line::from(""),
        ];

        for field in FormField::ALL {
            let focused = field == submit.focus;
            let label = if field.is_required() {
                format!("{:>16} *: ", field.label())
            } else {
                format!("{:>16}  : ", field.label())
            };
            let label_style = if focused {
                Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let mut spans = vec![Span::styled(label, label_style)];
            match field {
                FormField::Category => {
                    let value = app
                        .catalog()
                        .category(&form.category)
                        .map(|c| c.name.clone())
                        .unwrap_or_else(|| "Select a category".to_string());
                    spans.push(select_span(value, focused));
                }
                FormField::Pricing => {
                    let value = Pricing::parse(&form.pricing)
                        .map(|p| p.label().to_string())
                        .unwrap_or_else(|| "Select pricing model".to_string());
                    spans.push(select_span(value, focused));
                }
                FormField::Tags => {
                    for tag in &form.tags {
                        spans.push(Span::styled(format!("[{}] ", tag), Style::default().fg(colors::KEYBIND)));
                    }
                    spans.push(Span::raw(submit.tag_input.content().to_string()));
                    if focused {
                        spans.push(Span::styled("▏ (enter to add)", Style::default().fg(colors::DIM)));
                    }
                }
                _ => {
                    spans.push(Span::raw(form.value(field)));
                    if focused {
                        spans.push(Span::styled("▏", Style::default().fg(colors::HEADER)));
                    }
                }
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(""));
        if submit.submitting {
            lines.push(Line::from(Span::styled(
                "Submitting...",
                Style::default().fg(colors::PENDING).add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(key_hints(&[
                ("tab", "next field"),
                ("←→", "choose"),
                ("ctrl+s", "Submit Tool"),
                ("esc", "cancel"),
            ]));
        }

        let form_widget = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(section_block(" Submit a New AI Tool ", true));
        frame.render_widget(form_widget, area);
    }

    fn title(&self) -> &'static str {
        "Submit"
    }
}

/// Key reference
pub struct HelpOverlay;

const HELP: &[(&str, &str)] = &[
    ("j/k ↑/↓", "Move selection"),
    ("tab", "Switch home section / next form field"),
    ("enter", "Open tool or category"),
    ("/", "Search by name, description or tag"),
    ("e", "Explore all tools"),
    ("f", "Open or close the filter panel"),
    ("o", "Cycle sort order"),
    ("x", "Clear category, pricing, tag and sort filters"),
    ("c", "Clear search and filters"),
    ("w/g/d", "Open website, GitHub or docs from details"),
    ("s", "Submit a new tool"),
    ("esc", "Back / close"),
    ("q", "Quit"),
];

impl Panel for HelpOverlay {
    fn render(&self, frame: &mut Frame, area: Rect, _app: &App) {
        let lines: Vec<Line> = HELP
            .iter()
            .map(|(key, action)| {
                Line::from(vec![
                    Span::styled(format!("{:>10}  ", key), Style::default().fg(colors::KEYBIND)),
                    Span::raw(*action),
                ])
            })
            .collect();
        let help = Paragraph::new(lines).block(section_block(" Help ", true));
        frame.render_widget(help, area);
    }

    fn title(&self) -> &'static str {
        "Help"
    }
}

// === Helpers ===

/// A tool as a three-line list entry
fn tool_card(tool: &Tool, tag_limit: usize) -> ListItem<'static> {
    let mut heading = vec![
        Span::styled(tool.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(format!("★ {:.1}", tool.rating), Style::default().fg(colors::FEATURED)),
        Span::raw("  "),
        pricing_badge(tool.pricing),
    ];
    if tool.featured {
        heading.push(Span::styled("  Featured", Style::default().fg(colors::FEATURED)));
    }

    let mut tags: Vec<Span> = tool
        .tags
        .iter()
        .take(tag_limit)
        .map(|t| Span::styled(format!("#{} ", t), Style::default().fg(colors::KEYBIND)))
        .collect();
    if tool.tags.len() > tag_limit {
        tags.push(Span::styled(
            format!("+{} ", tool.tags.len() - tag_limit),
            Style::default().fg(colors::DIM),
        ));
    }
    tags.push(Span::styled(format!(" {} users", tool.users), Style::default().fg(colors::DIM)));

    ListItem::new(vec![
        Line::from(heading),
        Line::from(Span::styled(format!("  {}", tool.description), Style::default().fg(Color::Gray))),
        Line::from(tags),
    ])
}

fn pricing_badge(pricing: Pricing) -> Span<'static> {
    let color = match pricing {
        Pricing::Free => colors::FREE,
        Pricing::Freemium => colors::FREEMIUM,
        Pricing::Paid => colors::PAID,
    };
    Span::styled(pricing.label(), Style::default().fg(color))
}

/// Five-star bar rounded to the nearest whole star
fn stars(rating: f64) -> String {
    let filled = rating.round().clamp(0.0, 5.0) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn chip_label(chip: &Chip, app: &App) -> String {
    match chip {
        Chip::Category(id) => app
            .catalog()
            .category(id)
            .map_or_else(|| id.clone(), |c| c.name.clone()),
        Chip::Pricing(p) => p.label().to_string(),
        Chip::Tag(t) => format!("#{}", t),
    }
}

fn push_section(lines: &mut Vec<Line<'static>>, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        heading.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for item in items {
        lines.push(Line::from(format!("  • {}", item)));
    }
}

fn select_span(value: String, focused: bool) -> Span<'static> {
    if focused {
        Span::styled(format!("◀ {} ▶", value), Style::default().bg(colors::SELECTED))
    } else {
        Span::raw(value)
    }
}

fn section_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused { colors::HEADER } else { colors::DIM };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title)
}

fn highlight(focused: bool) -> Style {
    if focused {
        Style::default().bg(colors::SELECTED).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

/// Rectangle of the given percentage size centered in `r`
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::tui::input::KeyEvent;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App {
        App::with_catalog(Catalog::builtin().unwrap())
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 60)).unwrap();
        terminal.draw(|f| render(app, f)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_panel_titles() {
        let panels: [&dyn Panel; 5] = [&HomeView, &BrowseView, &DetailOverlay, &SubmitOverlay, &HelpOverlay];
        let titles: Vec<_> = panels.iter().map(|p| p.title()).collect();
        assert_eq!(titles, vec!["Home", "Browse", "Details", "Submit", "Help"]);
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(4.8), "★★★★★");
        assert_eq!(stars(4.2), "★★★★☆");
        assert_eq!(stars(0.0), "☆☆☆☆☆");
        assert_eq!(stars(9.0), "★★★★★");
    }

    #[test]
    fn test_tool_card_tag_overflow() {
        let tool = Tool::new("x", "X", "desc", "c", Pricing::Free, 4.0).with_tags(["a", "b", "c", "d", "e"]);
        let item = tool_card(&tool, 3);
        assert_eq!(item.height(), 3);
    }

    #[test]
    fn test_render_home() {
        let text = draw(&app());
        assert!(text.contains("Featured Tools"));
        assert!(text.contains("ChatGPT"));
        assert!(text.contains("Browse by Category"));
        assert!(text.contains("Image Generation"));
    }

    #[test]
    fn test_render_empty_results() {
        let mut app = app();
        app.handle_key(KeyEvent::plain(KeyCode::Char('/')));
        for c in "zzzz".chars() {
            app.handle_key(KeyEvent::plain(KeyCode::Char(c)));
        }
        let text = draw(&app);
        assert!(text.contains("No tools found"));
        assert!(text.contains("0 tools found"));
    }

    #[test]
    fn test_render_filter_panel() {
        let mut app = app();
        app.open_browse();
        app.handle_key(KeyEvent::plain(KeyCode::Char('f')));
        let text = draw(&app);
        assert!(text.contains("All Categories"));
        assert!(text.contains("[ ] Freemium"));
        assert!(text.contains("Relevance"));
    }

    #[test]
    fn test_render_detail_overlay() {
        let mut app = app();
        app.open_detail("5");
        let text = draw(&app);
        assert!(text.contains("GitHub Copilot"));
        assert!(text.contains("Key Features"));
        assert!(text.contains("since 2021"));
        assert!(text.contains("https://github.com/github/copilot"));
        assert!(text.contains("not available"));
    }

    #[test]
    fn test_render_submit_overlay() {
        let mut app = app();
        app.open_submit();
        let text = draw(&app);
        assert!(text.contains("Submit a New AI Tool"));
        assert!(text.contains("Select a category"));
    }
}
