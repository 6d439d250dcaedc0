use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Stacked error notices in the top-right corner, oldest on top.
/// Drawn after everything else so they stay visible over overlays.
pub fn render<S>(app: &App<S>, frame: &mut Frame) {
    if app.notices.is_empty() {
        return;
    }
    let area = frame.area();
    let width = area.width.saturating_sub(2).min(44);
    if width < 10 {
        return;
    }
    let x = area.x + area.width.saturating_sub(width + 1);
    let max_visible = (area.height.saturating_sub(1) / 3) as usize;

    for (i, notice) in app.notices.iter().take(max_visible).enumerate() {
        let rect = Rect {
            x,
            y: area.y + 1 + (i as u16) * 3,
            width,
            height: 3,
        };
        frame.render_widget(Clear, rect);
        let alert = Paragraph::new(notice.text.as_str())
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::White))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title(" Error ")
                    .title_bottom(
                        Line::from(" x dismiss ")
                            .alignment(Alignment::Right)
                            .style(Style::default().fg(Color::DarkGray)),
                    ),
            );
        frame.render_widget(alert, rect);
    }
}
