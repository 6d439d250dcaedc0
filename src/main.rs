mod api;
mod app;
mod ui;

use api::{Facet, MealDbClient};
use app::{App, DetailTab, FetchOp, InputMode, View};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

/// TUI explorer for recipes from TheMealDB API
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Run this meal name search on startup
    query: Option<String>,

    /// Endpoint root of the recipe API
    #[arg(long, default_value = api::DEFAULT_BASE_URL)]
    base_url: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let client = MealDbClient::new(cli.base_url)?;

    let mut app = App::new(client);
    app.init().await;

    if let Some(query) = cli.query {
        app.search_input = query;
        app.execute(FetchOp::Search).await;
    }

    // Init terminal
    let mut terminal = ratatui::init();

    // Initial page size setup
    let size = terminal.size()?;
    app.update_page_size(size.height);

    // Main loop
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    ratatui::restore();

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App<MealDbClient>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.prune_notices(Instant::now());
        terminal.draw(|frame| ui::render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        // Poll for events with a 250ms timeout; the tick also retires
        // expired notices.
        if crossterm::event::poll(std::time::Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if let Some(op) = handle_key(app, key) {
                        // One frame with the loading indicator up before
                        // the request blocks the loop.
                        app.loading = true;
                        terminal.draw(|frame| ui::render(app, frame))?;
                        app.execute(op).await;
                    }
                }
                Event::Resize(_, height) => {
                    app.update_page_size(height);
                }
                _ => {}
            }
        }
    }
}

fn handle_key(app: &mut App<MealDbClient>, key: KeyEvent) -> Option<FetchOp> {
    // Help toggle (global)
    if key.code == KeyCode::Char('?')
        && app.input_mode == InputMode::Normal
        && app.picker.is_none()
    {
        app.show_help = !app.show_help;
        return None;
    }

    // If help is showing, any key closes it
    if app.show_help {
        app.show_help = false;
        return None;
    }

    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return None;
    }

    // Handle based on input mode, overlay and view
    if app.input_mode == InputMode::Editing {
        return handle_search_input(app, key);
    }
    if app.picker.is_some() {
        return handle_picker_key(app, key);
    }
    match app.view {
        View::Browse => handle_browse_key(app, key),
        View::Detail => handle_detail_key(app, key),
    }
}

fn handle_search_input(app: &mut App<MealDbClient>, key: KeyEvent) -> Option<FetchOp> {
    match key.code {
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
            app.submit_search()
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            None
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            None
        }
        KeyCode::Char(c) => {
            app.search_input.push(c);
            None
        }
        _ => None,
    }
}

fn handle_browse_key(app: &mut App<MealDbClient>, key: KeyEvent) -> Option<FetchOp> {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Char('/') => {
            app.input_mode = InputMode::Editing;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.list_next();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.list_prev();
        }
        KeyCode::PageDown => {
            app.list_page_down();
        }
        KeyCode::PageUp => {
            app.list_page_up();
        }
        KeyCode::Enter => {
            return app.open_selected();
        }
        KeyCode::Char('c') => {
            app.open_picker(Facet::Category);
        }
        KeyCode::Char('a') => {
            app.open_picker(Facet::Area);
        }
        KeyCode::Char('i') => {
            app.open_picker(Facet::Ingredient);
        }
        KeyCode::Char('r') => {
            return Some(FetchOp::Random);
        }
        KeyCode::Char('x') => {
            app.dismiss_notice();
        }
        KeyCode::Char('g') => {
            // Jump to first page
            app.list_offset = 0;
            app.list_selected = 0;
            app.update_list_page();
        }
        KeyCode::Char('G') => {
            // Jump to last page
            if !app.results.is_empty() {
                let last_page_start =
                    (app.results.len().saturating_sub(1) / app.page_size) * app.page_size;
                app.list_offset = last_page_start;
                app.update_list_page();
                app.list_selected = app.page_items.len().saturating_sub(1);
            }
        }
        KeyCode::Esc => {
            // Clear a half-typed search
            if !app.search_input.is_empty() {
                app.search_input.clear();
            }
        }
        _ => {}
    }
    None
}

fn handle_detail_key(app: &mut App<MealDbClient>, key: KeyEvent) -> Option<FetchOp> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.view = View::Browse;
            app.detail = None;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_down();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_up();
        }
        KeyCode::PageDown => {
            app.scroll_page_down();
        }
        KeyCode::PageUp => {
            app.scroll_page_up();
        }
        KeyCode::Tab => {
            app.detail_tab = app.detail_tab.next();
            app.detail_scroll = 0;
        }
        KeyCode::BackTab => {
            app.detail_tab = app.detail_tab.prev();
            app.detail_scroll = 0;
        }
        KeyCode::Char('1') => {
            app.detail_tab = DetailTab::Ingredients;
            app.detail_scroll = 0;
        }
        KeyCode::Char('2') => {
            app.detail_tab = DetailTab::Instructions;
            app.detail_scroll = 0;
        }
        KeyCode::Char('r') => {
            return Some(FetchOp::Random);
        }
        KeyCode::Char('x') => {
            app.dismiss_notice();
        }
        _ => {}
    }
    None
}

fn handle_picker_key(app: &mut App<MealDbClient>, key: KeyEvent) -> Option<FetchOp> {
    match key.code {
        KeyCode::Esc => {
            app.picker = None;
        }
        KeyCode::Down => {
            app.picker_next();
        }
        KeyCode::Up => {
            app.picker_prev();
        }
        KeyCode::Enter => {
            return app.apply_picker();
        }
        KeyCode::Backspace => {
            app.picker_backspace();
        }
        KeyCode::Char(c) => {
            app.picker_input(c);
        }
        _ => {}
    }
    None
}
