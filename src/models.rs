use std::time::Duration;

pub const OPTION_COUNT: usize = 4;

/// How long answer feedback stays on screen before the run moves on.
pub const FEEDBACK_WINDOW: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub options: [String; OPTION_COUNT],
    pub correct_answer_index: usize,
}

impl Question {
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_answer_index
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftQuestion {
    pub text: String,
    pub options: [String; OPTION_COUNT],
    pub correct_answer_index: usize,
}

impl DraftQuestion {
    /// Text and every option must contain something other than whitespace.
    pub fn is_complete(&self) -> bool {
        !self.text.trim().is_empty() && self.options.iter().all(|opt| !opt.trim().is_empty())
    }

    pub fn to_question(&self) -> Question {
        Question {
            text: self.text.clone(),
            options: self.options.clone(),
            correct_answer_index: self.correct_answer_index,
        }
    }
}

/// A single-field replacement applied to the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEdit {
    Text(String),
    Option { index: usize, value: String },
    CorrectAnswer(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRun {
    pub id: RunId,
    pub current_index: usize,
    pub score: usize,
    pub complete: bool,
    pub feedback_visible: bool,
    pub last_answer_correct: bool,
}

impl QuizRun {
    pub fn new(id: RunId) -> Self {
        Self {
            id,
            current_index: 0,
            score: 0,
            complete: false,
            feedback_visible: false,
            last_answer_correct: false,
        }
    }

    pub fn accepts_answer(&self) -> bool {
        !self.complete && !self.feedback_visible
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Home,
    Create,
    Quiz,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Active,
    Complete,
}

/// Handed out by an answer; redeemed once the feedback window has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackTicket {
    pub run_id: RunId,
    pub question_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackOutcome {
    Advanced { current_index: usize },
    Completed { score: usize, total: usize },
}
