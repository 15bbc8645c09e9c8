use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::key_hint;
use crate::app::App;
use crate::ui::layout::calculate_home_chunks;
use crate::utils::truncate_string;

pub fn draw_menu(f: &mut Frame, app: &App) {
    let layout = calculate_home_chunks(f.area());
    let questions = app.session.questions();

    let title = Paragraph::new("Fun Quiz Time!")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Create your own quiz or start playing"),
        );
    f.render_widget(title, layout.header_area);

    let (start_label, start_style) = if questions.is_empty() {
        (
            "Add some questions to start a quiz".to_string(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        (
            format!("Start Quiz ({} questions)", questions.len()),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    };
    let start = Paragraph::new(start_label)
        .style(start_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(start, layout.start_area);

    let width = layout.list_area.width.saturating_sub(8) as usize;
    let items: Vec<ListItem> = if questions.is_empty() {
        vec![ListItem::new("No questions yet").style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        questions
            .iter()
            .enumerate()
            .map(|(i, q)| {
                ListItem::new(format!("{}. {}", i + 1, truncate_string(&q.text, width)))
            })
            .collect()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Your Questions"),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if !questions.is_empty() {
        state.select(Some(app.home_selected));
    }
    f.render_stateful_widget(list, layout.list_area, &mut state);

    let help_text = vec![Line::from(
        [
            key_hint("c", " Create  "),
            key_hint("s/Enter", " Start  "),
            key_hint("↑/↓", " Select  "),
            key_hint("d", " Delete  "),
            key_hint("q/Esc", " Quit"),
        ]
        .concat(),
    )];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
