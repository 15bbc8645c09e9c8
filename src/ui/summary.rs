use crate::models::QuizRun;
use crate::ui::key_hint;
use crate::ui::layout::calculate_results_chunks;
use crate::utils::percent;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

pub fn draw_summary(f: &mut Frame, run: &QuizRun, total: usize) {
    let layout = calculate_results_chunks(f.area());

    let title = Paragraph::new("Amazing Job!")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let mut score_text = Text::default();
    score_text.push_line(Line::from(""));
    score_text.push_line(Line::from("You got"));
    score_text.push_line(Line::from(Span::styled(
        run.score.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    score_text.push_line(Line::from(format!("out of {}", total)));
    let score = Paragraph::new(score_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));
    f.render_widget(score, layout.score_area);

    let pct = percent(run.score, total);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green))
        .percent(pct)
        .label(format!("{}%", pct));
    f.render_widget(gauge, layout.gauge_area);

    let help_text = vec![Line::from(
        [
            key_hint("Enter/Esc/h", " Back to Home  "),
            key_hint("Ctrl+C", " Exit App"),
        ]
        .concat(),
    )];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
