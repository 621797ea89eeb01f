use crate::models::OrderJob;
use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

#[derive(Error, Debug)]
pub enum SubmitError {
    /// The queue is at capacity. Submissions are rejected rather than
    /// blocking the request path.
    #[error("job queue is full")]
    QueueFull,

    /// The worker side has gone away.
    #[error("job queue is closed")]
    QueueClosed,
}

/// Seam between the HTTP layer and whatever executes order jobs.
///
/// Success means "accepted for processing", never "processed".
#[async_trait]
pub trait JobSubmitter: Send + Sync {
    async fn submit(&self, job: OrderJob) -> Result<(), SubmitError>;
}

/// Production submitter backed by a bounded in-process channel.
///
/// Delivery is at-most-once in FIFO order; no retry or deduplication
/// happens at this layer.
#[derive(Clone)]
pub struct ChannelJobQueue {
    tx: mpsc::Sender<OrderJob>,
}

impl ChannelJobQueue {
    /// Returns the submitter half and the receiver a worker drains.
    pub fn bounded(capacity: usize) -> (Self, mpsc::Receiver<OrderJob>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }
}

#[async_trait]
impl JobSubmitter for ChannelJobQueue {
    async fn submit(&self, job: OrderJob) -> Result<(), SubmitError> {
        let job_id = job.id;

        self.tx.try_send(job).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => SubmitError::QueueFull,
            mpsc::error::TrySendError::Closed(_) => SubmitError::QueueClosed,
        })?;

        tracing::debug!(%job_id, "order job enqueued");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::uploads::StoredUpload;
    use std::path::PathBuf;

    fn job(name: &str) -> OrderJob {
        OrderJob::new(StoredUpload {
            path: PathBuf::from(format!("uploads/{name}")),
            original_filename: name.to_string(),
            size: 1,
            sha256: "00".to_string(),
        })
    }

    #[tokio::test]
    async fn test_submit_delivers_job() {
        let (queue, mut rx) = ChannelJobQueue::bounded(4);

        queue.submit(job("orders.csv")).await.unwrap();

        let received = rx.recv().await.unwrap();
        assert_eq!(received.csv_path, PathBuf::from("uploads/orders.csv"));
    }

    #[tokio::test]
    async fn test_submit_preserves_fifo_order() {
        let (queue, mut rx) = ChannelJobQueue::bounded(4);

        queue.submit(job("first.csv")).await.unwrap();
        queue.submit(job("second.csv")).await.unwrap();

        assert_eq!(rx.recv().await.unwrap().original_filename, "first.csv");
        assert_eq!(rx.recv().await.unwrap().original_filename, "second.csv");
    }

    #[tokio::test]
    async fn test_submit_rejects_when_full() {
        let (queue, _rx) = ChannelJobQueue::bounded(1);

        queue.submit(job("a.csv")).await.unwrap();
        let err = queue.submit(job("b.csv")).await.unwrap_err();
        assert!(matches!(err, SubmitError::QueueFull));
    }

    #[tokio::test]
    async fn test_submit_rejects_when_closed() {
        let (queue, rx) = ChannelJobQueue::bounded(1);
        drop(rx);

        let err = queue.submit(job("a.csv")).await.unwrap_err();
        assert!(matches!(err, SubmitError::QueueClosed));
    }
}
