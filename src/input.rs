use crate::app::{App, DraftField};
use crate::logger;
use crate::models::{DraftEdit, OPTION_COUNT, QuizPhase, ViewState};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.session.view() {
        ViewState::Home => handle_home_input(app, key),
        ViewState::Create => handle_create_input(app, key),
        ViewState::Quiz => handle_quiz_input(app, key),
    }
}

fn handle_home_input(app: &mut App, key: KeyEvent) {
    let len = app.session.questions().len();
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('c') => app.open_create(),
        KeyCode::Char('s') | KeyCode::Enter => app.start_quiz(),
        KeyCode::Up => app.home_selected = app.home_selected.saturating_sub(1),
        KeyCode::Down => {
            if app.home_selected < len.saturating_sub(1) {
                app.home_selected += 1;
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Err(e) = app.session.delete_question(app.home_selected) {
                logger::log(&format!("Delete refused: {}", e));
            }
            app.clamp_selections();
        }
        _ => {}
    }
}

fn handle_create_input(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => app.exit_to_home(),
        KeyCode::Tab | KeyCode::Down => app.focus(app.focused_field.next()),
        KeyCode::BackTab | KeyCode::Up => app.focus(app.focused_field.previous()),
        KeyCode::Enter => {
            // Incomplete drafts are dropped silently; the form simply stays as it is.
            if app.session.add_question().is_ok() {
                app.create_selected = app.session.questions().len() - 1;
                app.focus(DraftField::Text);
            }
        }
        KeyCode::PageUp => app.create_selected = app.create_selected.saturating_sub(1),
        KeyCode::PageDown => {
            if app.create_selected < app.session.questions().len().saturating_sub(1) {
                app.create_selected += 1;
            }
        }
        KeyCode::Char('t') if ctrl => {
            match app.focused_field {
                DraftField::Option(index) => {
                    if let Err(e) = app.session.set_correct_answer(index) {
                        logger::log(&format!("Mark correct refused: {}", e));
                    }
                }
                DraftField::Text => logger::log("Mark correct ignored: question text is focused"),
            }
        }
        KeyCode::Char('d') if ctrl => {
            if let Err(e) = app.session.delete_question(app.create_selected) {
                logger::log(&format!("Delete refused: {}", e));
            }
            app.clamp_selections();
        }
        KeyCode::Left => app.cursor.left(),
        KeyCode::Right => {
            let text = app.focused_text().to_string();
            app.cursor.right(&text);
        }
        KeyCode::Home => app.cursor.home(),
        KeyCode::End => {
            let text = app.focused_text().to_string();
            app.cursor.end(&text);
        }
        KeyCode::Backspace => edit_focused(app, |cursor, text| cursor.backspace(text)),
        KeyCode::Delete => edit_focused(app, |cursor, text| cursor.delete(text)),
        KeyCode::Char(c) if !ctrl => edit_focused(app, |cursor, text| cursor.insert(text, c)),
        _ => {}
    }
}

/// Apply a cursor edit to the focused draft field and write the result back to the session.
fn edit_focused<F>(app: &mut App, edit: F)
where
    F: FnOnce(&mut crate::utils::TextCursor, &mut String),
{
    let mut text = app.focused_text().to_string();
    app.cursor.clamp(&text);
    edit(&mut app.cursor, &mut text);
    let change = match app.focused_field {
        DraftField::Text => DraftEdit::Text(text),
        DraftField::Option(index) => DraftEdit::Option { index, value: text },
    };
    if let Err(e) = app.session.update_draft(change) {
        logger::log(&format!("Draft edit refused: {}", e));
    }
}

fn handle_quiz_input(app: &mut App, key: KeyEvent) {
    if app.session.quiz_phase() == Some(QuizPhase::Complete) {
        if matches!(
            key.code,
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('h')
        ) {
            app.exit_to_home();
        }
        return;
    }

    if key.code == KeyCode::Esc {
        app.exit_to_home();
        return;
    }

    // Answer input stays disabled for the whole feedback window.
    let accepts = app.session.run().is_some_and(|run| run.accepts_answer());
    if !accepts {
        return;
    }

    match key.code {
        KeyCode::Up => app.highlighted_option = app.highlighted_option.saturating_sub(1),
        KeyCode::Down => {
            if app.highlighted_option + 1 < OPTION_COUNT {
                app.highlighted_option += 1;
            }
        }
        KeyCode::Enter => app.answer(app.highlighted_option),
        KeyCode::Char(c @ '1'..='4') => {
            if let Some(digit) = c.to_digit(10) {
                app.answer(digit as usize - 1);
            }
        }
        _ => {}
    }
}
