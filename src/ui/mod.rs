mod browse;
mod detail;
mod help;
mod notices;
mod picker;

use crate::app::App;
use ratatui::Frame;

/// Top-level render dispatch. Overlays draw over the active view;
/// notices draw last so they stay visible everywhere.
pub fn render<S>(app: &App<S>, frame: &mut Frame) {
    match app.view {
        crate::app::View::Browse => browse::render(app, frame),
        crate::app::View::Detail => detail::render(app, frame),
    }

    if app.picker.is_some() {
        picker::render(app, frame);
    }
    if app.show_help {
        help::render(frame);
    }

    notices::render(app, frame);
}
