use crate::error::{QuizError, Result};
use crate::logger;
use crate::models::{
    DraftEdit, DraftQuestion, FeedbackOutcome, FeedbackTicket, OPTION_COUNT, Question, QuizPhase,
    QuizRun, RunId, ViewState,
};

/// Owns the question bank, the draft being authored and the current quiz run.
///
/// Every method is a single synchronous transition. A method that returns `Err` has left
/// the session untouched.
#[derive(Debug, Default)]
pub struct QuizSession {
    questions: Vec<Question>,
    draft: DraftQuestion,
    view: ViewState,
    run: Option<QuizRun>,
    next_run_id: u64,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn draft(&self) -> &DraftQuestion {
        &self.draft
    }

    pub fn run(&self) -> Option<&QuizRun> {
        self.run.as_ref()
    }

    pub fn quiz_phase(&self) -> Option<QuizPhase> {
        self.run.as_ref().map(|run| {
            if run.complete {
                QuizPhase::Complete
            } else {
                QuizPhase::Active
            }
        })
    }

    /// The question the run is currently on.
    pub fn current_question(&self) -> Option<&Question> {
        self.run
            .as_ref()
            .and_then(|run| self.questions.get(run.current_index))
    }

    /// `score / len(bank)` in `[0, 1]`, or `None` outside a quiz.
    pub fn score_ratio(&self) -> Option<f64> {
        let run = self.run.as_ref()?;
        if self.questions.is_empty() {
            return None;
        }
        Some((run.score as f64 / self.questions.len() as f64).clamp(0.0, 1.0))
    }

    fn require_view(&self, operation: &'static str, allowed: &[ViewState]) -> Result<()> {
        if allowed.contains(&self.view) {
            Ok(())
        } else {
            Err(QuizError::WrongView {
                operation,
                view: self.view,
            })
        }
    }

    pub fn open_create(&mut self) -> Result<()> {
        self.require_view("open_create", &[ViewState::Home])?;
        self.view = ViewState::Create;
        logger::log("View: Home -> Create");
        Ok(())
    }

    /// Leave Create or Quiz. Leaving a quiz discards the run; bank and draft are kept.
    pub fn exit_to_home(&mut self) {
        if let Some(run) = self.run.take() {
            logger::log(&format!(
                "Discarding run {} at question {} (score {})",
                run.id.0, run.current_index, run.score
            ));
        }
        if self.view != ViewState::Home {
            logger::log(&format!("View: {:?} -> Home", self.view));
        }
        self.view = ViewState::Home;
    }

    pub fn update_draft(&mut self, edit: DraftEdit) -> Result<()> {
        self.require_view("update_draft", &[ViewState::Create])?;
        match edit {
            DraftEdit::Text(text) => self.draft.text = text,
            DraftEdit::Option { index, value } => {
                let slot = self
                    .draft
                    .options
                    .get_mut(index)
                    .ok_or(QuizError::OptionOutOfRange(index))?;
                *slot = value;
            }
            DraftEdit::CorrectAnswer(index) => {
                if index >= OPTION_COUNT {
                    return Err(QuizError::OptionOutOfRange(index));
                }
                self.draft.correct_answer_index = index;
            }
        }
        Ok(())
    }

    pub fn set_correct_answer(&mut self, index: usize) -> Result<()> {
        self.update_draft(DraftEdit::CorrectAnswer(index))
    }

    /// Commit the draft to the bank and reset it. Returns the new question's index.
    pub fn add_question(&mut self) -> Result<usize> {
        self.require_view("add_question", &[ViewState::Create])?;
        if !self.draft.is_complete() {
            logger::log("Draft rejected: empty text or option");
            return Err(QuizError::DraftRejected);
        }
        self.questions.push(self.draft.to_question());
        self.draft = DraftQuestion::default();
        let index = self.questions.len() - 1;
        logger::log(&format!(
            "Added question {} (bank size {})",
            index + 1,
            self.questions.len()
        ));
        Ok(index)
    }

    pub fn delete_question(&mut self, index: usize) -> Result<Question> {
        self.require_view("delete_question", &[ViewState::Home, ViewState::Create])?;
        if index >= self.questions.len() {
            return Err(QuizError::QuestionOutOfRange {
                index,
                len: self.questions.len(),
            });
        }
        let removed = self.questions.remove(index);
        logger::log(&format!(
            "Deleted question {} (bank size {})",
            index + 1,
            self.questions.len()
        ));
        Ok(removed)
    }

    pub fn start_quiz(&mut self) -> Result<RunId> {
        self.require_view("start_quiz", &[ViewState::Home])?;
        if self.questions.is_empty() {
            return Err(QuizError::EmptyBank);
        }
        self.next_run_id += 1;
        let id = RunId(self.next_run_id);
        self.run = Some(QuizRun::new(id));
        self.view = ViewState::Quiz;
        logger::log(&format!(
            "Started run {} with {} questions",
            id.0,
            self.questions.len()
        ));
        Ok(id)
    }

    /// Score an answer for the current question and open the feedback window.
    ///
    /// The returned ticket must be passed to [`QuizSession::finish_feedback`] once
    /// [`crate::models::FEEDBACK_WINDOW`] has elapsed.
    pub fn submit_answer(&mut self, selected: usize) -> Result<FeedbackTicket> {
        if selected >= OPTION_COUNT {
            return Err(QuizError::OptionOutOfRange(selected));
        }
        self.require_view("submit_answer", &[ViewState::Quiz])?;
        let run = self.run.as_mut().ok_or(QuizError::NoActiveRun)?;
        if run.complete {
            return Err(QuizError::RunComplete);
        }
        if run.feedback_visible {
            return Err(QuizError::FeedbackPending);
        }
        let question = self
            .questions
            .get(run.current_index)
            .ok_or(QuizError::QuestionOutOfRange {
                index: run.current_index,
                len: self.questions.len(),
            })?;

        let correct = question.is_correct(selected);
        run.last_answer_correct = correct;
        run.feedback_visible = true;
        if correct {
            run.score += 1;
        }
        logger::log(&format!(
            "Run {} question {}: answered {} ({}), score {}",
            run.id.0,
            run.current_index + 1,
            selected + 1,
            if correct { "correct" } else { "incorrect" },
            run.score
        ));

        Ok(FeedbackTicket {
            run_id: run.id,
            question_index: run.current_index,
        })
    }

    /// Close the feedback window opened by `ticket`, then advance or complete the run.
    pub fn finish_feedback(&mut self, ticket: FeedbackTicket) -> Result<FeedbackOutcome> {
        let total = self.questions.len();
        let run = match self.run.as_mut() {
            Some(run)
                if run.id == ticket.run_id
                    && run.current_index == ticket.question_index
                    && run.feedback_visible =>
            {
                run
            }
            _ => {
                logger::log(&format!(
                    "Ignoring stale feedback ticket for run {}",
                    ticket.run_id.0
                ));
                return Err(QuizError::StaleTicket);
            }
        };

        run.feedback_visible = false;
        if run.current_index + 1 < total {
            run.current_index += 1;
            logger::log(&format!(
                "Run {} advanced to question {} / {}",
                run.id.0,
                run.current_index + 1,
                total
            ));
            Ok(FeedbackOutcome::Advanced {
                current_index: run.current_index,
            })
        } else {
            run.complete = true;
            logger::log(&format!(
                "Run {} complete: {} / {}",
                run.id.0, run.score, total
            ));
            Ok(FeedbackOutcome::Completed {
                score: run.score,
                total,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(text: &str, correct: usize) -> DraftQuestion {
        DraftQuestion {
            text: text.to_string(),
            options: ["3", "4", "5", "6"].map(String::from),
            correct_answer_index: correct,
        }
    }

    fn fill_draft(session: &mut QuizSession, draft: &DraftQuestion) {
        session.update_draft(DraftEdit::Text(draft.text.clone())).unwrap();
        for (index, value) in draft.options.iter().enumerate() {
            session
                .update_draft(DraftEdit::Option {
                    index,
                    value: value.clone(),
                })
                .unwrap();
        }
        session.set_correct_answer(draft.correct_answer_index).unwrap();
    }

    fn session_with(drafts: &[DraftQuestion]) -> QuizSession {
        let mut session = QuizSession::new();
        session.open_create().unwrap();
        for draft in drafts {
            fill_draft(&mut session, draft);
            session.add_question().unwrap();
        }
        session.exit_to_home();
        session
    }

    #[test]
    fn test_initial_state_is_home() {
        let session = QuizSession::new();
        assert_eq!(session.view(), ViewState::Home);
        assert!(session.questions().is_empty());
        assert!(session.run().is_none());
        assert!(session.quiz_phase().is_none());
    }

    #[test]
    fn test_add_valid_draft_appends_copy_and_resets() {
        let mut session = QuizSession::new();
        session.open_create().unwrap();
        let draft = question("2+2?", 1);
        fill_draft(&mut session, &draft);

        let index = session.add_question().unwrap();

        assert_eq!(index, 0);
        assert_eq!(session.questions(), &[draft.to_question()]);
        assert_eq!(session.draft(), &DraftQuestion::default());
    }

    #[test]
    fn test_invalid_draft_is_rejected_without_mutation() {
        let mut session = QuizSession::new();
        session.open_create().unwrap();
        session.update_draft(DraftEdit::Text("Q?".into())).unwrap();
        for index in 0..3 {
            session
                .update_draft(DraftEdit::Option {
                    index,
                    value: "x".into(),
                })
                .unwrap();
        }
        session
            .update_draft(DraftEdit::Option {
                index: 3,
                value: "   ".into(),
            })
            .unwrap();
        let before = session.draft().clone();

        assert_eq!(session.add_question(), Err(QuizError::DraftRejected));
        assert!(session.questions().is_empty());
        assert_eq!(session.draft(), &before);

        session.update_draft(DraftEdit::Text("  ".into())).unwrap();
        session
            .update_draft(DraftEdit::Option {
                index: 3,
                value: "y".into(),
            })
            .unwrap();
        assert_eq!(session.add_question(), Err(QuizError::DraftRejected));
        assert!(session.questions().is_empty());
    }

    #[test]
    fn test_draft_edits_are_bounded() {
        let mut session = QuizSession::new();
        session.open_create().unwrap();
        assert_eq!(
            session.set_correct_answer(4),
            Err(QuizError::OptionOutOfRange(4))
        );
        assert_eq!(
            session.update_draft(DraftEdit::Option {
                index: 9,
                value: "x".into()
            }),
            Err(QuizError::OptionOutOfRange(9))
        );
        assert_eq!(session.draft(), &DraftQuestion::default());
    }

    #[test]
    fn test_draft_survives_leaving_create() {
        let mut session = QuizSession::new();
        session.open_create().unwrap();
        session.update_draft(DraftEdit::Text("half done".into())).unwrap();
        session.exit_to_home();
        session.open_create().unwrap();
        assert_eq!(session.draft().text, "half done");
    }

    #[test]
    fn test_draft_edit_outside_create_is_refused() {
        let mut session = QuizSession::new();
        assert!(matches!(
            session.update_draft(DraftEdit::Text("x".into())),
            Err(QuizError::WrongView { .. })
        ));
        assert!(matches!(
            session.add_question(),
            Err(QuizError::WrongView { .. })
        ));
    }

    #[test]
    fn test_delete_removes_exact_element_and_keeps_order() {
        let mut session = session_with(&[question("a", 0), question("b", 1), question("c", 2)]);

        let removed = session.delete_question(1).unwrap();

        assert_eq!(removed.text, "b");
        let texts: Vec<&str> = session.questions().iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "c"]);
    }

    #[test]
    fn test_delete_out_of_range_is_noop() {
        let mut session = session_with(&[question("a", 0)]);
        assert_eq!(
            session.delete_question(1),
            Err(QuizError::QuestionOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(session.questions().len(), 1);
    }

    #[test]
    fn test_start_with_empty_bank_stays_home() {
        let mut session = QuizSession::new();
        assert_eq!(session.start_quiz(), Err(QuizError::EmptyBank));
        assert_eq!(session.view(), ViewState::Home);
        assert!(session.run().is_none());
    }

    #[test]
    fn test_single_question_scenario() {
        let mut session = session_with(&[question("2+2?", 1)]);

        session.start_quiz().unwrap();
        assert_eq!(session.view(), ViewState::Quiz);
        assert_eq!(session.quiz_phase(), Some(QuizPhase::Active));
        let run = session.run().unwrap();
        assert_eq!((run.current_index, run.score), (0, 0));
        assert!(!run.feedback_visible);

        let ticket = session.submit_answer(1).unwrap();
        let run = session.run().unwrap();
        assert!(run.feedback_visible);
        assert!(run.last_answer_correct);
        assert_eq!(run.score, 1);

        let outcome = session.finish_feedback(ticket).unwrap();
        assert_eq!(outcome, FeedbackOutcome::Completed { score: 1, total: 1 });
        let run = session.run().unwrap();
        assert!(!run.feedback_visible);
        assert!(run.complete);
        assert_eq!(run.current_index, 0);
        assert_eq!(session.quiz_phase(), Some(QuizPhase::Complete));
        assert_eq!(session.score_ratio(), Some(1.0));
    }

    #[test]
    fn test_two_questions_half_score() {
        let mut session = session_with(&[question("first", 1), question("second", 2)]);
        session.start_quiz().unwrap();

        assert_eq!(session.current_question().unwrap().text, "first");
        let ticket = session.submit_answer(1).unwrap();
        assert_eq!(
            session.finish_feedback(ticket).unwrap(),
            FeedbackOutcome::Advanced { current_index: 1 }
        );
        assert_eq!(session.current_question().unwrap().text, "second");

        let ticket = session.submit_answer(0).unwrap();
        assert!(!session.run().unwrap().last_answer_correct);
        assert_eq!(
            session.finish_feedback(ticket).unwrap(),
            FeedbackOutcome::Completed { score: 1, total: 2 }
        );
        assert_eq!(session.score_ratio(), Some(0.5));
    }

    #[test]
    fn test_answer_blocked_during_feedback() {
        let mut session = session_with(&[question("a", 0), question("b", 0)]);
        session.start_quiz().unwrap();

        let ticket = session.submit_answer(0).unwrap();
        assert_eq!(session.submit_answer(0), Err(QuizError::FeedbackPending));
        assert_eq!(session.run().unwrap().score, 1);

        session.finish_feedback(ticket).unwrap();
        assert!(session.submit_answer(0).is_ok());
    }

    #[test]
    fn test_answer_after_completion_is_refused() {
        let mut session = session_with(&[question("a", 0)]);
        session.start_quiz().unwrap();
        let ticket = session.submit_answer(3).unwrap();
        session.finish_feedback(ticket).unwrap();

        assert_eq!(session.submit_answer(0), Err(QuizError::RunComplete));
        assert_eq!(session.finish_feedback(ticket), Err(QuizError::StaleTicket));
        assert_eq!(session.run().unwrap().current_index, 0);
    }

    #[test]
    fn test_answer_index_out_of_range() {
        let mut session = session_with(&[question("a", 0)]);
        session.start_quiz().unwrap();
        assert_eq!(session.submit_answer(4), Err(QuizError::OptionOutOfRange(4)));
        assert!(!session.run().unwrap().feedback_visible);
    }

    #[test]
    fn test_score_counts_correct_answers() {
        let answers = [(0, 0), (1, 2), (2, 2), (3, 3), (1, 0)];
        let drafts: Vec<DraftQuestion> = answers
            .iter()
            .enumerate()
            .map(|(i, (correct, _))| question(&format!("q{}", i), *correct))
            .collect();
        let mut session = session_with(&drafts);
        session.start_quiz().unwrap();

        for (_, selected) in answers {
            let ticket = session.submit_answer(selected).unwrap();
            session.finish_feedback(ticket).unwrap();
        }

        let expected = answers.iter().filter(|(c, s)| c == s).count();
        assert_eq!(session.run().unwrap().score, expected);
        assert!(session.run().unwrap().complete);
    }

    #[test]
    fn test_stale_ticket_cannot_touch_new_run() {
        let mut session = session_with(&[question("a", 0), question("b", 0)]);
        let first_run = session.start_quiz().unwrap();
        let stale = session.submit_answer(0).unwrap();

        session.exit_to_home();
        assert!(session.run().is_none());
        let second_run = session.start_quiz().unwrap();
        assert_ne!(first_run, second_run);

        assert_eq!(session.finish_feedback(stale), Err(QuizError::StaleTicket));
        let run = session.run().unwrap();
        assert_eq!(run.current_index, 0);
        assert_eq!(run.score, 0);
        assert!(!run.feedback_visible);

        // Even with feedback open on the new run, the old ticket is refused.
        let fresh = session.submit_answer(1).unwrap();
        assert_eq!(session.finish_feedback(stale), Err(QuizError::StaleTicket));
        assert!(session.run().unwrap().feedback_visible);
        assert!(session.finish_feedback(fresh).is_ok());
    }

    #[test]
    fn test_every_feedback_step_is_logged() {
        let capture = crate::logger::LogCapture::start();
        let mut session = session_with(&[question("first", 0), question("second", 1)]);
        let run_id = session.start_quiz().unwrap();

        let ticket = session.submit_answer(0).unwrap();
        session.finish_feedback(ticket).unwrap();
        let ticket = session.submit_answer(1).unwrap();
        session.finish_feedback(ticket).unwrap();

        let log = capture.contents();
        assert!(log.contains(&format!("Run {} advanced to question 2 / 2", run_id.0)));
        assert!(log.contains(&format!("Run {} complete: 2 / 2", run_id.0)));
    }

    #[test]
    fn test_exit_keeps_bank_and_draft() {
        let mut session = session_with(&[question("a", 0)]);
        session.open_create().unwrap();
        session.update_draft(DraftEdit::Text("pending".into())).unwrap();
        session.exit_to_home();
        session.start_quiz().unwrap();
        session.exit_to_home();

        assert_eq!(session.view(), ViewState::Home);
        assert_eq!(session.questions().len(), 1);
        assert_eq!(session.draft().text, "pending");
    }

    #[test]
    fn test_bank_is_frozen_during_quiz() {
        let mut session = session_with(&[question("a", 0)]);
        session.start_quiz().unwrap();
        assert!(matches!(
            session.delete_question(0),
            Err(QuizError::WrongView { .. })
        ));
        assert!(matches!(
            session.open_create(),
            Err(QuizError::WrongView { .. })
        ));
        assert_eq!(session.questions().len(), 1);
    }
}
