pub mod app;
pub mod config;
pub mod error;
pub mod feedback_timer;
pub mod input;
pub mod logger;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use app::{App, DraftField};
pub use config::Config;
pub use error::{QuizError, Result};
pub use feedback_timer::FeedbackTimer;
pub use input::handle_key_event;
pub use models::{
    DraftEdit, DraftQuestion, FEEDBACK_WINDOW, FeedbackOutcome, FeedbackTicket, OPTION_COUNT,
    Question, QuizPhase, QuizRun, RunId, ViewState,
};
pub use session::QuizSession;
pub use ui::draw;
pub use utils::truncate_string;
