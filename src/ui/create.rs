use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::key_hint;
use crate::app::{App, DraftField};
use crate::models::{OPTION_COUNT, Question};
use crate::ui::layout::calculate_create_chunks;
use crate::utils::{truncate_string, visible_window};

fn field_block(title: String, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        })
}

/// Render one input box and, when focused, place the terminal cursor in it.
fn draw_input(
    f: &mut Frame,
    area: Rect,
    title: String,
    value: &str,
    app: &App,
    field: DraftField,
) {
    let focused = app.focused_field == field;
    let inner_width = area.width.saturating_sub(2) as usize;

    let (shown, cursor_col) = if focused {
        visible_window(value, app.cursor.position, inner_width)
    } else {
        visible_window(value, 0, inner_width)
    };

    let paragraph = Paragraph::new(shown).block(field_block(title, focused));
    f.render_widget(paragraph, area);

    if focused {
        f.set_cursor_position((area.x + 1 + cursor_col as u16, area.y + 1));
    }
}

/// Build a two-row card whose rows never exceed `width` columns, so the list can scroll by
/// a fixed two rows per card.
fn question_card(
    index: usize,
    question: &Question,
    selected: bool,
    width: usize,
) -> Vec<Line<'static>> {
    let number_style = if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let marker = if selected { "> " } else { "  " };
    let number = format!("{}Q{} ", marker, index + 1);
    let text_width = width.saturating_sub(number.chars().count());

    let mut lines = vec![Line::from(vec![
        Span::styled(number, number_style),
        Span::from(truncate_string(&question.text, text_width)),
    ])];

    // Each option takes "    [" + "]" around its text, and the correct one adds "✓ ".
    let chrome = OPTION_COUNT * 6 + 2;
    let option_width = (width.saturating_sub(chrome) / OPTION_COUNT).max(1);

    let options: Vec<Span> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, opt)| {
            if question.is_correct(i) {
                Span::styled(
                    format!("    [✓ {}]", truncate_string(opt, option_width)),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::from(format!("    [{}]", truncate_string(opt, option_width)))
            }
        })
        .collect();
    lines.push(Line::from(options));
    lines
}

pub fn draw_create(f: &mut Frame, app: &App) {
    let layout = calculate_create_chunks(f.area());
    let draft = app.session.draft();
    let questions = app.session.questions();

    let title = Paragraph::new("Create Your Questions")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    draw_input(
        f,
        layout.question_area,
        "Question".to_string(),
        &draft.text,
        app,
        DraftField::Text,
    );

    for (i, area) in layout.option_areas.iter().enumerate() {
        let title = if draft.correct_answer_index == i {
            format!("Option {} (correct)", i + 1)
        } else {
            format!("Option {}", i + 1)
        };
        draw_input(f, *area, title, &draft.options[i], app, DraftField::Option(i));
    }

    let width = layout.list_area.width.saturating_sub(2) as usize;
    let mut text = Text::default();
    if questions.is_empty() {
        text.push_line(Line::from(Span::styled(
            "No questions added yet",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
    }
    for (i, q) in questions.iter().enumerate() {
        for line in question_card(i, q, i == app.create_selected, width) {
            text.push_line(line);
        }
    }

    // Rows are never wider than the list, so each card is exactly two lines tall.
    let visible = layout.list_area.height.saturating_sub(2) as usize;
    let selected_bottom = (app.create_selected + 1) * 2;
    let scroll = selected_bottom.saturating_sub(visible) as u16;

    let list = Paragraph::new(text)
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Added Questions ({})", questions.len())),
        );
    f.render_widget(list, layout.list_area);

    let help_text = vec![
        Line::from(
            [
                key_hint("Tab/↑/↓", " Field  "),
                key_hint("Ctrl+T", " Mark Correct  "),
                key_hint("Enter", " Add Question  "),
                key_hint("Esc", " Back to Home"),
            ]
            .concat(),
        ),
        Line::from(
            [
                key_hint("PgUp/PgDn", " Select Added  "),
                key_hint("Ctrl+D", " Delete Selected  "),
                key_hint("Ctrl+C", " Exit App"),
            ]
            .concat(),
        ),
    ];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
