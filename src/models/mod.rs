use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::services::uploads::StoredUpload;

/// A vendor-order processing job, built once the uploaded CSV has been
/// persisted. The job owns the stored file from submission onwards.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderJob {
    pub id: Uuid,
    #[schema(value_type = String)]
    pub csv_path: PathBuf,
    pub original_filename: String,
    pub size: u64,
    pub sha256: String,
    pub submitted_at: DateTime<Utc>,
}

impl OrderJob {
    /// Stamp a freshly stored upload with a job id and submission time.
    pub fn new(upload: StoredUpload) -> Self {
        Self {
            id: Uuid::new_v4(),
            csv_path: upload.path,
            original_filename: upload.original_filename,
            size: upload.size,
            sha256: upload.sha256,
            submitted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_from_upload() {
        let upload = StoredUpload {
            path: PathBuf::from("uploads/abc_orders.csv"),
            original_filename: "orders.csv".to_string(),
            size: 42,
            sha256: "deadbeef".to_string(),
        };

        let job = OrderJob::new(upload);
        assert_eq!(job.csv_path, PathBuf::from("uploads/abc_orders.csv"));
        assert_eq!(job.original_filename, "orders.csv");
        assert_eq!(job.size, 42);
        assert!(!job.id.is_nil());
    }
}
