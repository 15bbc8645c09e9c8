use crate::feedback_timer::FeedbackTimer;
use crate::logger;
use crate::models::{FeedbackOutcome, FeedbackTicket, OPTION_COUNT, ViewState};
use crate::session::QuizSession;
use crate::utils::TextCursor;

/// Which input the create view is editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftField {
    #[default]
    Text,
    Option(usize),
}

impl DraftField {
    pub fn next(self) -> Self {
        match self {
            DraftField::Text => DraftField::Option(0),
            DraftField::Option(i) if i + 1 < OPTION_COUNT => DraftField::Option(i + 1),
            DraftField::Option(_) => DraftField::Text,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            DraftField::Text => DraftField::Option(OPTION_COUNT - 1),
            DraftField::Option(0) => DraftField::Text,
            DraftField::Option(i) => DraftField::Option(i - 1),
        }
    }
}

/// The terminal front-end: the quiz session plus the cursor and selection state that only
/// the UI cares about.
#[derive(Debug)]
pub struct App {
    pub session: QuizSession,
    pub timer: FeedbackTimer,
    /// Selected entry in the home question list.
    pub home_selected: usize,
    /// Selected entry in the create view's list of added questions.
    pub create_selected: usize,
    pub focused_field: DraftField,
    pub cursor: TextCursor,
    /// Highlighted answer in the quiz view.
    pub highlighted_option: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(timer: FeedbackTimer) -> Self {
        Self {
            session: QuizSession::new(),
            timer,
            home_selected: 0,
            create_selected: 0,
            focused_field: DraftField::default(),
            cursor: TextCursor::default(),
            highlighted_option: 0,
            should_quit: false,
        }
    }

    pub fn focused_text(&self) -> &str {
        let draft = self.session.draft();
        match self.focused_field {
            DraftField::Text => &draft.text,
            DraftField::Option(i) => &draft.options[i],
        }
    }

    pub fn focus(&mut self, field: DraftField) {
        self.focused_field = field;
        self.cursor = TextCursor::at_end(self.focused_text());
    }

    /// Keep list selections inside the bank after it shrinks.
    pub fn clamp_selections(&mut self) {
        let last = self.session.questions().len().saturating_sub(1);
        self.home_selected = self.home_selected.min(last);
        self.create_selected = self.create_selected.min(last);
    }

    pub fn open_create(&mut self) {
        match self.session.open_create() {
            Ok(()) => self.focus(self.focused_field),
            Err(e) => logger::log(&format!("Create refused: {}", e)),
        }
    }

    pub fn start_quiz(&mut self) {
        match self.session.start_quiz() {
            Ok(_) => self.highlighted_option = 0,
            Err(e) => logger::log(&format!("Start refused: {}", e)),
        }
    }

    pub fn answer(&mut self, selected: usize) {
        match self.session.submit_answer(selected) {
            Ok(ticket) => {
                self.highlighted_option = selected;
                self.timer.schedule(ticket);
            }
            Err(e) => logger::log(&format!("Answer refused: {}", e)),
        }
    }

    /// Leave the current view. Any pending feedback is cancelled with the run.
    pub fn exit_to_home(&mut self) {
        if self.session.view() == ViewState::Quiz {
            self.timer.cancel();
        }
        self.session.exit_to_home();
        self.clamp_selections();
    }

    pub fn on_feedback_elapsed(&mut self, ticket: FeedbackTicket) {
        match self.session.finish_feedback(ticket) {
            Ok(FeedbackOutcome::Advanced { .. }) => self.highlighted_option = 0,
            Ok(FeedbackOutcome::Completed { .. }) => {}
            Err(e) => logger::log(&format!("Feedback ignored: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DraftEdit, QuizPhase};
    use tokio::sync::mpsc;

    #[test]
    fn test_draft_field_cycle() {
        let mut field = DraftField::Text;
        let mut seen = vec![field];
        for _ in 0..OPTION_COUNT {
            field = field.next();
            seen.push(field);
        }
        assert_eq!(field.next(), DraftField::Text);
        assert_eq!(seen[1], DraftField::Option(0));
        assert_eq!(DraftField::Text.previous(), DraftField::Option(3));
        assert_eq!(DraftField::Option(0).previous(), DraftField::Text);
    }

    fn app_with_questions(count: usize) -> (App, mpsc::UnboundedReceiver<FeedbackTicket>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut app = App::new(FeedbackTimer::new(tx));
        app.open_create();
        for i in 0..count {
            let session = &mut app.session;
            session.update_draft(DraftEdit::Text(format!("Q{}", i + 1))).unwrap();
            for index in 0..OPTION_COUNT {
                session
                    .update_draft(DraftEdit::Option {
                        index,
                        value: format!("opt {}", index + 1),
                    })
                    .unwrap();
            }
            session.add_question().unwrap();
        }
        app.exit_to_home();
        (app, rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_feedback_flows_through_timer() {
        let (mut app, mut rx) = app_with_questions(2);
        app.start_quiz();
        app.answer(0);
        assert!(app.session.run().unwrap().feedback_visible);

        let ticket = rx.recv().await.unwrap();
        app.on_feedback_elapsed(ticket);

        let run = app.session.run().unwrap();
        assert_eq!(run.current_index, 1);
        assert!(!run.feedback_visible);
        assert_eq!(run.score, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exit_during_feedback_then_restart() {
        let (mut app, mut rx) = app_with_questions(2);
        app.start_quiz();
        app.answer(0);
        app.exit_to_home();
        assert!(!app.timer.is_pending());

        app.start_quiz();
        tokio::time::sleep(crate::models::FEEDBACK_WINDOW * 2).await;
        assert!(rx.try_recv().is_err());

        let run = app.session.run().unwrap();
        assert_eq!(run.current_index, 0);
        assert_eq!(run.score, 0);
        assert!(!run.feedback_visible);
        assert_eq!(app.session.quiz_phase(), Some(QuizPhase::Active));
    }

    #[test]
    fn test_open_create_during_quiz_is_refused_and_logged() {
        let capture = crate::logger::LogCapture::start();
        let (mut app, _rx) = app_with_questions(1);
        app.start_quiz();
        app.open_create();

        assert_eq!(app.session.view(), ViewState::Quiz);
        assert!(capture.contents().contains("Create refused"));
    }

    #[test]
    fn test_clamp_selection_after_delete() {
        let (mut app, _rx) = app_with_questions(3);
        app.home_selected = 2;
        app.session.delete_question(2).unwrap();
        app.clamp_selections();
        assert_eq!(app.home_selected, 1);
    }
}
