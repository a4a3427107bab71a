// src/relay/worker.rs
use super::client::RelayClient;
use super::messaging::{MessageTransport, MessagingError, RelayMessage, RelayReply, StatusReply};
use crate::types::ApiResponse;
use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, trace};

pub const KEEP_ALIVE_INTERVAL: Duration = Duration::from_secs(30);
const MAILBOX_CAPACITY: usize = 16;

type Delivery = (RelayMessage, oneshot::Sender<Option<RelayReply>>);

/// Sending side of a running relay worker.
#[derive(Clone)]
pub struct RelayHandle {
    sender: mpsc::Sender<Delivery>,
}

#[async_trait]
impl MessageTransport for RelayHandle {
    async fn send(&self, message: RelayMessage) -> Result<Option<RelayReply>, MessagingError> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.sender
            .send((message, reply_tx))
            .await
            .map_err(|_| MessagingError::ReceiverMissing)?;

        reply_rx.await.map_err(|_| MessagingError::ReceiverMissing)
    }
}

/// Long-lived relay between page scrapers and the backend service.
pub struct RelayWorker {
    client: RelayClient,
}

impl RelayWorker {
    pub fn new(client: RelayClient) -> Self {
        Self { client }
    }

    /// Start the worker on the current runtime. It stops once every
    /// [`RelayHandle`] has been dropped.
    pub fn spawn(self) -> (RelayHandle, JoinHandle<()>) {
        let (sender, receiver) = mpsc::channel(MAILBOX_CAPACITY);
        let task = tokio::spawn(self.run(receiver));
        (RelayHandle { sender }, task)
    }

    async fn run(self, mut receiver: mpsc::Receiver<Delivery>) {
        info!("Relay worker started for {}", self.client.backend_url());

        let mut keep_alive = tokio::time::interval(KEEP_ALIVE_INTERVAL);
        keep_alive.tick().await;

        loop {
            tokio::select! {
                delivery = receiver.recv() => {
                    let Some((message, reply)) = delivery else {
                        break;
                    };
                    let response = self.handle(message).await;
                    if reply.send(response).is_err() {
                        debug!("Relay reply dropped by sender");
                    }
                }
                _ = keep_alive.tick() => {
                    trace!("Relay keepalive");
                }
            }
        }

        info!("Relay worker stopped");
    }

    pub async fn handle(&self, message: RelayMessage) -> Option<RelayReply> {
        debug!("Relay received {}", message.action());

        match message {
            RelayMessage::AnalyzeProfile { profile_data } => {
                let envelope = match self.client.analyze(&profile_data).await {
                    Ok(result) => ApiResponse::success(result),
                    Err(e) => {
                        error!("Profile analysis error: {}", e);
                        ApiResponse::failure(e.to_string())
                    }
                };
                Some(RelayReply::Analysis(envelope))
            }
            RelayMessage::CheckBackendStatus => {
                let status = self.client.check_status().await;
                Some(RelayReply::Status(StatusReply::from(status)))
            }
            RelayMessage::PageLoaded {
                platform,
                is_profile,
            } => {
                info!("Page loaded: {} (profile: {})", platform, is_profile);
                None
            }
            RelayMessage::ScrapeProfile => {
                debug!("Unhandled relay action: scrapeProfile");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_handle_closed_worker_reports_receiver_missing() {
        let client = RelayClient::new("http://127.0.0.1:9").unwrap();
        let (handle, task) = RelayWorker::new(client).spawn();
        task.abort();
        let _ = task.await;

        let result = handle.send(RelayMessage::CheckBackendStatus).await;
        assert_eq!(result, Err(MessagingError::ReceiverMissing));
    }

    #[tokio::test]
    async fn test_unhandled_actions_get_no_reply() {
        let client = RelayClient::new("http://127.0.0.1:9").unwrap();
        let (handle, _task) = RelayWorker::new(client).spawn();

        let reply = handle.send(RelayMessage::ScrapeProfile).await.unwrap();
        assert_eq!(reply, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_keepalive_ticks_do_not_stop_the_worker() {
        let client = RelayClient::new("http://127.0.0.1:9").unwrap();
        let (handle, task) = RelayWorker::new(client).spawn();

        tokio::time::sleep(KEEP_ALIVE_INTERVAL * 3).await;
        assert!(!task.is_finished());

        drop(handle);
        task.await.unwrap();
    }
}
