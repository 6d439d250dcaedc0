use crate::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};
use unicode_width::UnicodeWidthStr;

pub fn render<S>(app: &App<S>, frame: &mut Frame) {
    let Some(picker) = &app.picker else {
        return;
    };
    let options = app.picker_options();

    let area = centered_rect(40, 60, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" Select {} ", picker.facet.label()))
        .title_bottom(
            Line::from(" type to narrow | Enter apply | Esc close ")
                .style(Style::default().fg(Color::DarkGray)),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);

    // ── Narrowing query ──
    let query_label = " Narrow: ";
    let query_line = Line::from(vec![
        Span::styled(query_label, Style::default().fg(Color::DarkGray)),
        Span::styled(picker.query.as_str(), Style::default().fg(Color::Yellow)),
        Span::styled(
            format!("   ({} options)", options.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(query_line), chunks[0]);
    frame.set_cursor_position((
        chunks[0].x + query_label.width() as u16 + picker.query.width() as u16,
        chunks[0].y,
    ));

    // ── Option list ──
    if options.is_empty() {
        let empty = Paragraph::new(" No matching options")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = options
        .iter()
        .map(|option| ListItem::new(option.as_str()))
        .collect();

    let list_widget = List::new(items)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    let mut list_state = ListState::default();
    list_state.select(Some(picker.selected.min(options.len() - 1)));
    frame.render_stateful_widget(list_widget, chunks[1], &mut list_state);
}

/// Calculate a centered rectangle for the overlay
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
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
        .split(popup_layout[1])[1]
}
