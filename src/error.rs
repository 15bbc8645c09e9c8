use crate::models::ViewState;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuizError>;

/// Reasons a session operation was refused. A refused operation never mutates state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("draft rejected: question text and all four options must be non-empty")]
    DraftRejected,

    #[error("question index {index} out of range (bank has {len})")]
    QuestionOutOfRange { index: usize, len: usize },

    #[error("option index {0} out of range (expected 0..=3)")]
    OptionOutOfRange(usize),

    #[error("cannot start a quiz with an empty question bank")]
    EmptyBank,

    #[error("{operation} is not available in the {view:?} view")]
    WrongView {
        operation: &'static str,
        view: ViewState,
    },

    #[error("no quiz run is active")]
    NoActiveRun,

    #[error("answer feedback is still visible")]
    FeedbackPending,

    #[error("quiz run is already complete")]
    RunComplete,

    #[error("feedback ticket does not belong to the current run")]
    StaleTicket,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            QuizError::QuestionOutOfRange { index: 3, len: 2 }.to_string(),
            "question index 3 out of range (bank has 2)"
        );
        assert_eq!(
            QuizError::WrongView {
                operation: "start_quiz",
                view: ViewState::Create,
            }
            .to_string(),
            "start_quiz is not available in the Create view"
        );
    }
}
