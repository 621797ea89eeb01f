use crate::models::OrderJob;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc, watch};

/// Executes a single submitted job. The concrete order-processing logic
/// lives behind this seam.
#[async_trait]
pub trait JobHandler: Send + Sync {
    async fn handle(&self, job: &OrderJob) -> anyhow::Result<()>;
}

/// Default handler: verifies the stored CSV is readable and logs its
/// shape, leaving an operator-visible record of every order that came
/// through. The file stays in place after processing.
pub struct CsvAuditHandler;

#[async_trait]
impl JobHandler for CsvAuditHandler {
    async fn handle(&self, job: &OrderJob) -> anyhow::Result<()> {
        let file = tokio::fs::File::open(&job.csv_path).await?;
        let mut lines = BufReader::new(file).lines();

        let mut rows: u64 = 0;
        while lines.next_line().await?.is_some() {
            rows += 1;
        }

        // First line is the header when present
        let data_rows = rows.saturating_sub(1);

        tracing::info!(
            job_id = %job.id,
            file = %job.csv_path.display(),
            rows = data_rows,
            size = job.size,
            sha256 = %job.sha256,
            "order CSV processed"
        );
        Ok(())
    }
}

/// Drains the job queue until shutdown is signalled or the submitter
/// side closes. A failing job is logged and never stops the worker.
pub struct OrderWorker {
    jobs: mpsc::Receiver<OrderJob>,
    handler: Arc<dyn JobHandler>,
    shutdown: watch::Receiver<bool>,
}

impl OrderWorker {
    pub fn new(
        jobs: mpsc::Receiver<OrderJob>,
        handler: Arc<dyn JobHandler>,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            jobs,
            handler,
            shutdown,
        }
    }

    pub async fn run(mut self) {
        tracing::info!("🚀 Order worker started");

        loop {
            tokio::select! {
                _ = self.shutdown.changed() => {
                    tracing::info!("🛑 Order worker shutting down");
                    break;
                }
                job = self.jobs.recv() => {
                    let Some(job) = job else {
                        tracing::info!("🛑 Job queue closed, order worker exiting");
                        break;
                    };
                    self.process(job).await;
                }
            }
        }
    }

    async fn process(&self, job: OrderJob) {
        tracing::info!(
            job_id = %job.id,
            file = %job.csv_path.display(),
            "Processing order job"
        );

        if let Err(e) = self.handler.handle(&job).await {
            tracing::error!(job_id = %job.id, "Order job failed: {e:#}");
        }
    }
}
