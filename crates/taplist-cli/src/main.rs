//! Taplist CLI — terminal brewery catalog browser
//!
//! Key map: Up/Down move the cursor, Tab switches between the catalog and
//! favorites panes, Enter activates a row (details + per-row control),
//! Space activates the row's favorite control, `/` edits the filter,
//! `q`/Esc exits.

use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use ratatui::widgets::*;
use tracing_subscriber::EnvFilter;

use taplist::app::{details_view, favorites_view, list_view, Controller, Region, UiAction};
use taplist::data::favorites::FAVORITES_FILE;
use taplist::data::storage;
use taplist::providers::{CatalogProvider, OpenBreweryProvider};

#[derive(Parser)]
#[command(name = "taplist", about = "Terminal brewery catalog browser", version)]
struct Cli {
    /// Catalog API base URL (defaults to the Open Brewery DB server)
    #[arg(long)]
    api: Option<String>,
}

/// Which pane owns the cursor
#[derive(Clone, Copy, PartialEq, Eq)]
enum Pane {
    Catalog,
    Favorites,
}

impl Pane {
    fn region(self) -> Region {
        match self {
            Pane::Catalog => Region::Catalog,
            Pane::Favorites => Region::Favorites,
        }
    }
}

/// Frontend-local transient state (cursor positions, input focus)
struct Ui {
    pane: Pane,
    catalog_cursor: usize,
    favorites_cursor: usize,
    editing_filter: bool,
    running: bool,
}

impl Ui {
    fn new() -> Self {
        Self {
            pane: Pane::Catalog,
            catalog_cursor: 0,
            favorites_cursor: 0,
            editing_filter: false,
            running: true,
        }
    }

    fn cursor(&self) -> usize {
        match self.pane {
            Pane::Catalog => self.catalog_cursor,
            Pane::Favorites => self.favorites_cursor,
        }
    }

    fn set_cursor(&mut self, value: usize) {
        match self.pane {
            Pane::Catalog => self.catalog_cursor = value,
            Pane::Favorites => self.favorites_cursor = value,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let provider = match &cli.api {
        Some(base_url) => OpenBreweryProvider::with_base_url(base_url),
        None => OpenBreweryProvider::new(),
    };
    let provider = match provider {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Favorites location is part of startup; not being able to resolve it
    // is fatal, like a missing mount point.
    let favorites_path = match storage::data_path(FAVORITES_FILE) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut controller = Controller::new(favorites_path);

    // The single catalog fetch, before any interaction. Failure is logged
    // and leaves the list empty.
    controller.load_catalog(&provider);

    // Enter TUI
    terminal::enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut term = Terminal::new(backend)?;

    let mut ui = Ui::new();
    let result = run(&mut term, &mut controller, &mut ui, &provider);

    // Restore terminal
    terminal::disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run(
    term: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut Controller,
    ui: &mut Ui,
    provider: &dyn CatalogProvider,
) -> Result<(), Box<dyn std::error::Error>> {
    while ui.running {
        term.draw(|f| draw_ui(f, controller, ui, provider))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if ui.editing_filter {
                        handle_filter_key(key.code, controller, ui);
                    } else {
                        handle_key(key.code, controller, ui);
                    }
                }
            }
        }
    }
    Ok(())
}

/// Keys while the filter field has focus. Every edit dispatches the new
/// text immediately, like an input event per keystroke.
fn handle_filter_key(code: KeyCode, controller: &mut Controller, ui: &mut Ui) {
    match code {
        KeyCode::Esc | KeyCode::Enter => {
            ui.editing_filter = false;
        }
        KeyCode::Char(c) => {
            let mut query = controller.state().filter().to_string();
            query.push(c);
            controller.dispatch(UiAction::FilterChanged(query));
            ui.catalog_cursor = 0;
        }
        KeyCode::Backspace => {
            let mut query = controller.state().filter().to_string();
            query.pop();
            controller.dispatch(UiAction::FilterChanged(query));
            ui.catalog_cursor = 0;
        }
        _ => {}
    }
}

fn handle_key(code: KeyCode, controller: &mut Controller, ui: &mut Ui) {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => {
            ui.running = false;
        }
        KeyCode::Char('/') => {
            ui.editing_filter = true;
        }
        KeyCode::Tab => {
            ui.pane = match ui.pane {
                Pane::Catalog => Pane::Favorites,
                Pane::Favorites => Pane::Catalog,
            };
        }
        KeyCode::Up => {
            ui.set_cursor(ui.cursor().saturating_sub(1));
        }
        KeyCode::Down => {
            let len = pane_len(controller, ui.pane);
            if len > 0 {
                ui.set_cursor((ui.cursor() + 1).min(len - 1));
            }
        }
        KeyCode::Enter => {
            if let Some(id) = cursor_row_id(controller, ui) {
                controller.dispatch(UiAction::RowActivated {
                    region: ui.pane.region(),
                    id,
                });
            }
        }
        // The control is a separate target from the row: Space only ever
        // activates the control, and only when one is visible.
        KeyCode::Char(' ') => {
            if let Some(id) = cursor_control_id(controller, ui) {
                controller.dispatch(UiAction::ControlActivated {
                    region: ui.pane.region(),
                    id,
                });
            }
        }
        _ => {}
    }
}

fn pane_len(controller: &Controller, pane: Pane) -> usize {
    match pane {
        Pane::Catalog => controller.state().visible().len(),
        Pane::Favorites => controller.state().favorites().len(),
    }
}

/// Id of the row under the cursor, if any
fn cursor_row_id(controller: &Controller, ui: &Ui) -> Option<String> {
    match ui.pane {
        Pane::Catalog => list_view(controller.state())
            .get(ui.catalog_cursor)
            .map(|r| r.id.clone()),
        Pane::Favorites => favorites_view(controller.state())
            .get(ui.favorites_cursor)
            .map(|r| r.id.clone()),
    }
}

/// Id of the row under the cursor, only if its control is visible
fn cursor_control_id(controller: &Controller, ui: &Ui) -> Option<String> {
    match ui.pane {
        Pane::Catalog => list_view(controller.state())
            .get(ui.catalog_cursor)
            .filter(|r| r.control.is_some())
            .map(|r| r.id.clone()),
        // Favorites controls are always visible
        Pane::Favorites => favorites_view(controller.state())
            .get(ui.favorites_cursor)
            .map(|r| r.id.clone()),
    }
}

fn draw_ui(f: &mut Frame, controller: &Controller, ui: &mut Ui, provider: &dyn CatalogProvider) {
    let area = f.area();

    let outer = Block::default()
        .title(format!(" Taplist v{} ", env!("CARGO_PKG_VERSION")))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = Layout::vertical([
        Constraint::Length(3), // filter input
        Constraint::Min(5),    // lists
        Constraint::Length(7), // details
        Constraint::Length(1), // help bar
    ])
    .split(inner);

    draw_filter(f, controller, ui, chunks[0]);

    let cols =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).split(chunks[1]);
    draw_catalog(f, controller, ui, provider, cols[0]);
    draw_favorites(f, controller, ui, cols[1]);

    draw_details(f, controller, chunks[2]);
    draw_help(f, chunks[3]);
}

fn draw_filter(f: &mut Frame, controller: &Controller, ui: &Ui, area: Rect) {
    let border_color = if ui.editing_filter {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(" Filter ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));
    let text = Paragraph::new(controller.state().filter()).block(block);
    f.render_widget(text, area);
}

fn draw_catalog(
    f: &mut Frame,
    controller: &Controller,
    ui: &mut Ui,
    provider: &dyn CatalogProvider,
    area: Rect,
) {
    let rows = list_view(controller.state());
    // Rows are rebuilt every frame; keep the cursor inside them.
    ui.catalog_cursor = ui.catalog_cursor.min(rows.len().saturating_sub(1));

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            let mut spans = vec![Span::styled(
                row.name.clone(),
                Style::default().fg(Color::White),
            )];
            if let Some(label) = row.control {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    format!("[{label}]"),
                    Style::default().fg(Color::Yellow),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let active = ui.pane == Pane::Catalog;
    let block = Block::default()
        .title(format!(" {} ", provider.name()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if active { Color::Cyan } else { Color::DarkGray }));

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray).bold());

    let mut list_state = ListState::default();
    if active && !rows.is_empty() {
        list_state.select(Some(ui.catalog_cursor));
    }
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_favorites(f: &mut Frame, controller: &Controller, ui: &mut Ui, area: Rect) {
    let rows = favorites_view(controller.state());
    ui.favorites_cursor = ui.favorites_cursor.min(rows.len().saturating_sub(1));

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            ListItem::new(Line::from(vec![
                Span::styled(row.name.clone(), Style::default().fg(Color::White)),
                Span::raw("  "),
                Span::styled(
                    format!("[{}]", row.control),
                    Style::default().fg(Color::Yellow),
                ),
            ]))
        })
        .collect();

    let active = ui.pane == Pane::Favorites;
    let block = Block::default()
        .title(" Favorites ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if active { Color::Cyan } else { Color::DarkGray }));

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray).bold());

    let mut list_state = ListState::default();
    if active && !rows.is_empty() {
        list_state.select(Some(ui.favorites_cursor));
    }
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_details(f: &mut Frame, controller: &Controller, area: Rect) {
    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let text = match details_view(controller.state()) {
        Some(details) => vec![
            Line::from(Span::styled(
                details.name,
                Style::default().fg(Color::White).bold(),
            )),
            Line::from(vec![
                Span::styled("Type: ", Style::default().fg(Color::DarkGray)),
                Span::styled(details.brewery_type, Style::default().fg(Color::White)),
            ]),
            Line::from(vec![
                Span::styled("Location: ", Style::default().fg(Color::DarkGray)),
                Span::styled(details.location, Style::default().fg(Color::White)),
            ]),
            Line::from(vec![
                Span::styled("Website: ", Style::default().fg(Color::DarkGray)),
                // Rendered as-is; empty when the entity has no URL
                Span::styled(details.website_url, Style::default().fg(Color::Cyan)),
            ]),
        ],
        None => vec![Line::from(Span::styled(
            "Select a brewery to see its details",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    f.render_widget(Paragraph::new(text).block(block), area);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let help = Line::from(vec![
        Span::styled("  '/' ", Style::default().fg(Color::Yellow)),
        Span::raw("filter  |  "),
        Span::styled("Tab ", Style::default().fg(Color::Yellow)),
        Span::raw("pane  |  "),
        Span::styled("Enter ", Style::default().fg(Color::Yellow)),
        Span::raw("details  |  "),
        Span::styled("Space ", Style::default().fg(Color::Yellow)),
        Span::raw("favorite  |  "),
        Span::styled("'q' ", Style::default().fg(Color::Yellow)),
        Span::raw("quit"),
    ]);

    f.render_widget(Paragraph::new(help).alignment(Alignment::Left), area);
}
