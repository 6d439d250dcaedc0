use crate::app::{App, DetailTab};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
};

pub fn render<S>(app: &App<S>, frame: &mut Frame) {
    let area = frame.area();
    let detail = match &app.detail {
        Some(d) => d,
        None => return,
    };

    // Layout: header(4) + tabs(3) + content(min) + status(1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    // ── Metadata header ──
    let meta_lines = vec![
        Line::from(vec![
            Span::styled(" ID: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                detail.id.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("Category: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                detail.category.as_deref().unwrap_or("-"),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw("   "),
            Span::styled("Area: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                detail.area.as_deref().unwrap_or("-"),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Image: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                detail.thumb.as_deref().unwrap_or("-"),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]),
    ];

    let meta_block = Paragraph::new(meta_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", detail.name)),
    );
    frame.render_widget(meta_block, chunks[0]);

    // ── Tab strip ──
    let tab_titles: Vec<Line> = DetailTab::ALL
        .iter()
        .map(|t| {
            let style = if *t == app.detail_tab {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(t.label(), style))
        })
        .collect();

    let tab_index = DetailTab::ALL
        .iter()
        .position(|t| *t == app.detail_tab)
        .unwrap_or(0);

    let tabs = Tabs::new(tab_titles)
        .select(tab_index)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" [Tab/1-2] "),
        )
        .highlight_style(Style::default().fg(Color::Cyan));
    frame.render_widget(tabs, chunks[1]);

    // ── Content area ──
    let content_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {} ", app.detail_tab.label()))
        .title_bottom(
            Line::from(format!(" scroll: {} ", app.detail_scroll)).alignment(Alignment::Right),
        );

    let ingredients = detail.ingredients();
    let content_lines = match app.detail_tab {
        DetailTab::Ingredients => {
            if ingredients.is_empty() {
                vec![Line::from(Span::styled(
                    " No ingredients listed.",
                    Style::default().fg(Color::DarkGray),
                ))]
            } else {
                ingredients
                    .iter()
                    .map(|line| {
                        let mut spans = vec![
                            Span::styled("  • ", Style::default().fg(Color::DarkGray)),
                            Span::raw(line.name.clone()),
                        ];
                        if !line.measure.is_empty() {
                            spans.push(Span::styled(
                                format!("  -  {}", line.measure),
                                Style::default().fg(Color::Yellow),
                            ));
                        }
                        Line::from(spans)
                    })
                    .collect()
            }
        }
        DetailTab::Instructions => detail
            .instructions
            .as_deref()
            .unwrap_or("No instructions available.")
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect(),
    };

    let content = Paragraph::new(content_lines)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0))
        .block(content_block);
    frame.render_widget(content, chunks[2]);

    // ── Status bar ──
    let mut status_spans = vec![
        Span::styled(
            " ↑↓/PgUp/PgDn",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Scroll  "),
        Span::styled(
            "Tab/1-2",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Switch  "),
        Span::styled(
            "r",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Random  "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Back  "),
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
        format!("{} ingredients", ingredients.len()),
        Style::default().fg(Color::DarkGray),
    ));
    let status_bar = Paragraph::new(Line::from(status_spans));
    frame.render_widget(status_bar, chunks[3]);
}
