use crate::logger;
use crate::models::{FEEDBACK_WINDOW, FeedbackTicket};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Delivers feedback tickets back to the event loop once the feedback window has elapsed.
///
/// At most one ticket is pending at a time. Cancelling aborts the sleeping task; the
/// session still checks every ticket against the live run, so a ticket that slips past
/// an abort is rejected there.
#[derive(Debug)]
pub struct FeedbackTimer {
    tx: UnboundedSender<FeedbackTicket>,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl FeedbackTimer {
    pub fn new(tx: UnboundedSender<FeedbackTicket>) -> Self {
        Self::with_delay(tx, FEEDBACK_WINDOW)
    }

    pub fn with_delay(tx: UnboundedSender<FeedbackTicket>, delay: Duration) -> Self {
        Self {
            tx,
            delay,
            pending: None,
        }
    }

    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, ticket: FeedbackTicket) {
        self.cancel();
        let tx = self.tx.clone();
        let delay = self.delay;
        logger::log(&format!(
            "Scheduling feedback for run {} question {} in {:?}",
            ticket.run_id.0,
            ticket.question_index + 1,
            delay
        ));
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(ticket).is_err() {
                logger::log("Feedback channel closed, dropping ticket");
            }
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take()
            && !handle.is_finished()
        {
            handle.abort();
            logger::log("Cancelled pending feedback timer");
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for FeedbackTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
