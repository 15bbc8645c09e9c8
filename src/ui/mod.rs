pub mod layout;
mod create;
mod menu;
mod quiz;
mod summary;

pub use create::draw_create;
pub use layout::{
    calculate_create_chunks, calculate_home_chunks, calculate_quiz_chunks,
    calculate_results_chunks,
};
pub use menu::draw_menu;
pub use quiz::{draw_quiz, CORRECT_MESSAGE, INCORRECT_MESSAGE};
pub use summary::draw_summary;

use crate::app::App;
use crate::models::ViewState;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// A highlighted key followed by its description, for the help bars.
pub(crate) fn key_hint(key: &'static str, label: &'static str) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            key,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(label),
    ]
}

pub fn draw(f: &mut Frame, app: &App) {
    match app.session.view() {
        ViewState::Home => draw_menu(f, app),
        ViewState::Create => draw_create(f, app),
        ViewState::Quiz => {
            if let Some(run) = app.session.run() {
                if run.complete {
                    draw_summary(f, run, app.session.questions().len());
                } else {
                    draw_quiz(f, app, run);
                }
            }
        }
    }
}
