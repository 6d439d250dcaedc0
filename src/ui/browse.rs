use crate::app::{App, InputMode};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn render<S>(app: &App<S>, frame: &mut Frame) {
    let area = frame.area();

    // Layout: header(3) + search(3) + facets(3) + list(min) + status(1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    // ── Header ──
    let header_text = format!(" Meal Explorer   [{} meals]", app.results.len());
    let header = Paragraph::new(header_text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(header, chunks[0]);

    // ── Search bar ──
    let search_style = match app.input_mode {
        InputMode::Editing => Style::default().fg(Color::Yellow),
        InputMode::Normal => Style::default().fg(Color::DarkGray),
    };
    let search_label = if app.input_mode == InputMode::Editing {
        " 🔍 Search (Enter to run, Esc to cancel): "
    } else {
        " 🔍 Search (/): "
    };
    let search_text = format!("{}{}", search_label, app.search_input);
    let search_bar = Paragraph::new(search_text).style(search_style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(search_style)
            .title(" Search meals "),
    );
    frame.render_widget(search_bar, chunks[1]);

    // Set cursor position when editing
    if app.input_mode == InputMode::Editing {
        let cursor_x =
            chunks[1].x + search_label.width() as u16 + app.search_input.width() as u16;
        let cursor_y = chunks[1].y + 1;
        frame.set_cursor_position((cursor_x, cursor_y));
    }

    // ── Facet bar ──
    let facet_line = Line::from(vec![
        Span::styled(" Category: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.picked_category.as_deref().unwrap_or("-"),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("   "),
        Span::styled("Area: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.picked_area.as_deref().unwrap_or("-"),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("   "),
        Span::styled("Ingredient: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.picked_ingredient.as_deref().unwrap_or("-"),
            Style::default().fg(Color::Cyan),
        ),
    ]);
    let facet_bar = Paragraph::new(facet_line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Filters (c/a/i) "),
    );
    frame.render_widget(facet_bar, chunks[2]);

    // ── Meal list ──
    let list_title = if app.results_label.is_empty() {
        " Meals ".to_string()
    } else {
        format!(" Meals ({}) ", app.results_label)
    };

    let page_info = format!(
        " {}-{} of {} ",
        if app.results.is_empty() {
            0
        } else {
            app.list_offset + 1
        },
        app.list_offset + app.page_items.len(),
        app.results.len()
    );

    let list_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(list_title)
        .title_bottom(Line::from(page_info).alignment(Alignment::Right));

    if app.page_items.is_empty() {
        let placeholder = if app.results_label.is_empty() {
            "Search (/) or pick a filter (c/a/i) to load meals."
        } else {
            "No meals found."
        };
        let empty = Paragraph::new(placeholder)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(list_block);
        frame.render_widget(empty, chunks[3]);
    } else {
        let items: Vec<ListItem> = app
            .page_items
            .iter()
            .map(|meal| {
                let thumb = meal.thumb.as_deref().unwrap_or("");
                let line = Line::from(vec![
                    Span::styled(
                        format!("{:>7} ", meal.id),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(format!("{:<40}", truncate_str(&meal.name, 38))),
                    Span::styled(
                        truncate_str(thumb, (area.width as usize).saturating_sub(52)),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]);
                ListItem::new(line)
            })
            .collect();

        let list_widget = List::new(items)
            .block(list_block)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▸ ");

        let mut list_state = ListState::default();
        list_state.select(Some(app.list_selected));
        frame.render_stateful_widget(list_widget, chunks[3], &mut list_state);
    }

    // ── Status bar ──
    let mut status_spans = vec![
        Span::styled(
            " ↑↓",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Navigate  "),
        Span::styled(
            "/",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Search  "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Details  "),
        Span::styled(
            "c/a/i",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Filter  "),
        Span::styled(
            "r",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Random  "),
        Span::styled(
            "?",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Help  "),
        Span::styled(
            "q",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Quit  "),
    ];
    if app.loading {
        status_spans.push(Span::styled(
            "⏳ Loading... ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }
    status_spans.push(Span::styled(
        app.status_msg.as_str(),
        Style::default().fg(Color::DarkGray),
    ));
    let status_bar = Paragraph::new(Line::from(status_spans));
    frame.render_widget(status_bar, chunks[4]);
}

/// Truncate a string to `max_width` display columns, adding "…" if
/// truncated. Column-aware so wide characters do not overflow the row.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        used += w;
    }
    result.push('…');
    result
}
