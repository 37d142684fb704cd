//! Background forecast fetching
//!
//! Each request runs on its own tokio task and reports back over a channel
//! that the UI loop drains without blocking. Requests are never cancelled;
//! the sequence number carried by every message lets the state container
//! drop completions that are no longer wanted.

use tokio::sync::mpsc;

use crate::data::{ForecastClient, ForecastDocument};
use crate::state::RequestSeq;

/// Messages sent from fetch tasks to the main app
#[derive(Debug, Clone)]
pub enum FetchMessage {
    /// A forecast arrived for request `seq`
    Completed {
        seq: RequestSeq,
        location: String,
        forecast: Box<ForecastDocument>,
    },
    /// Request `seq` failed; `reason` is for logging only
    Failed {
        seq: RequestSeq,
        location: String,
        reason: String,
    },
}

impl FetchMessage {
    pub fn seq(&self) -> RequestSeq {
        match self {
            FetchMessage::Completed { seq, .. } | FetchMessage::Failed { seq, .. } => *seq,
        }
    }
}

/// Handle for dispatching fetches and collecting their results
pub struct Fetcher {
    client: ForecastClient,
    sender: mpsc::Sender<FetchMessage>,
    /// Channel for receiving fetch results
    receiver: mpsc::Receiver<FetchMessage>,
}

impl Fetcher {
    /// Creates a new Fetcher around a forecast client
    pub fn new(client: ForecastClient) -> Self {
        let (sender, receiver) = mpsc::channel(32);
        Self {
            client,
            sender,
            receiver,
        }
    }

    /// Spawns a fetch for `location` tagged with `seq`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(&self, seq: RequestSeq, location: String) {
        let client = self.client.clone();
        let tx = self.sender.clone();

        tokio::spawn(async move {
            let message = match client.fetch_forecast(&location).await {
                Ok(forecast) => FetchMessage::Completed {
                    seq,
                    location,
                    forecast: Box::new(forecast),
                },
                Err(e) => FetchMessage::Failed {
                    seq,
                    location,
                    reason: e.to_string(),
                },
            };
            // The receiver only goes away when the app is shutting down
            let _ = tx.send(message).await;
        });
    }

    /// Checks for a finished fetch without blocking
    ///
    /// # Returns
    /// * `Some(FetchMessage)` if a result was available
    /// * `None` if no results are pending
    pub fn try_recv(&mut self) -> Option<FetchMessage> {
        self.receiver.try_recv().ok()
    }

    /// Waits for the next finished fetch
    pub async fn recv(&mut self) -> Option<FetchMessage> {
        self.receiver.recv().await
    }
}
