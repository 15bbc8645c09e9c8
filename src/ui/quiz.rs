use crate::app::App;
use crate::models::QuizRun;
use crate::ui::key_hint;
use crate::ui::layout::calculate_quiz_chunks;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

pub const CORRECT_MESSAGE: &str = "Wonderful! That's Right!";
pub const INCORRECT_MESSAGE: &str = "Try again next time!";

pub fn draw_quiz(f: &mut Frame, app: &App, run: &QuizRun) {
    let layout = calculate_quiz_chunks(f.area());
    let Some(question) = app.session.current_question() else {
        return;
    };
    let total = app.session.questions().len();

    let progress = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Progress"))
        .gauge_style(Style::default().fg(Color::Magenta))
        .ratio((run.current_index + 1) as f64 / total as f64)
        .label("");
    f.render_widget(progress, layout.progress_area);

    let counter = Paragraph::new(format!("{} / {}", run.current_index + 1, total))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(counter, layout.counter_area);

    let question_text = Paragraph::new(Text::from(question.text.as_str()))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(question_text, layout.question_area);

    let width = layout.options_area.width.saturating_sub(8) as usize;
    let option_lines: Vec<Line> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, opt)| {
            let highlighted = i == app.highlighted_option;
            let marker = if highlighted { "> " } else { "  " };
            let style = match (run.feedback_visible, highlighted) {
                (true, true) if run.last_answer_correct => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                (true, true) => Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                (true, false) => Style::default().fg(Color::DarkGray),
                (false, true) => Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                (false, false) => Style::default(),
            };
            Line::from(Span::styled(
                format!(
                    "{}{}. {}",
                    marker,
                    i + 1,
                    crate::utils::truncate_string(opt, width)
                ),
                style,
            ))
        })
        .collect();
    let options = Paragraph::new(option_lines)
        .block(Block::default().borders(Borders::ALL).title("Answers"));
    f.render_widget(options, layout.options_area);

    let feedback = if run.feedback_visible {
        let (message, color) = if run.last_answer_correct {
            (CORRECT_MESSAGE, Color::Green)
        } else {
            (INCORRECT_MESSAGE, Color::Yellow)
        };
        Paragraph::new(message).style(Style::default().fg(color).add_modifier(Modifier::BOLD))
    } else {
        Paragraph::new("")
    };
    f.render_widget(
        feedback
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        layout.feedback_area,
    );

    let help_line = if run.feedback_visible {
        Line::from(
            [
                key_hint("Esc", " Back to Home  "),
                key_hint("Ctrl+C", " Exit App"),
            ]
            .concat(),
        )
    } else {
        Line::from(
            [
                key_hint("↑/↓", " Highlight  "),
                key_hint("Enter", " Answer  "),
                key_hint("1-4", " Answer Directly  "),
                key_hint("Esc", " Back to Home"),
            ]
            .concat(),
        )
    };
    let help = Paragraph::new(vec![help_line])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
