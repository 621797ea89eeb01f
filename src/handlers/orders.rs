use crate::error::AppError;
use crate::models::OrderJob;
use crate::utils::validation::{validate_csv_upload, validate_file_size};
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
};
use futures::TryStreamExt;
use tokio_util::io::StreamReader;

/// Field name upload clients use for the order file.
const CSV_FIELD: &str = "csv";

/// Body returned when a submission is accepted.
pub const SUBMIT_STARTED: &str = "FritoLay ordering started";

/// Accepts a FritoLay order CSV and submits a background job for it.
///
/// The response only reflects that submission succeeded; the job's own
/// outcome is reported through the worker logs.
#[utoipa::path(
    post,
    path = "/fritolay",
    request_body(
        content = String,
        content_type = "multipart/form-data",
        description = "Order CSV under the `csv` field"
    ),
    responses(
        (status = 200, description = "Order accepted for background processing", body = String),
        (status = 400, description = "Missing or invalid upload, or submission failed", body = String)
    ),
    tag = "orders"
)]
pub async fn submit_fritolay_order(
    State(state): State<crate::AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, &'static str), AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(CSV_FIELD) {
            continue;
        }

        let original_filename = field.file_name().unwrap_or("order.csv").to_string();
        let content_type = field.content_type().map(|s| s.to_string());

        let filename = validate_csv_upload(&original_filename, content_type.as_deref())
            .map_err(|e| AppError::InvalidUpload(e.to_string()))?;

        let body_with_io_error =
            field.map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err));
        let reader = StreamReader::new(body_with_io_error);

        let stored = state.uploads.store_stream(&filename, reader).await?;

        // Post-upload size check; the body limit covers the whole request,
        // not the individual field
        if let Err(e) = validate_file_size(stored.size as usize, state.config.max_upload_size) {
            let _ = tokio::fs::remove_file(&stored.path).await;
            return Err(AppError::InvalidUpload(e.to_string()));
        }

        let job = OrderJob::new(stored);
        let job_id = job.id;
        let csv_path = job.csv_path.clone();

        state.jobs.submit(job).await?;

        tracing::info!(%job_id, file = %csv_path.display(), "FritoLay order submitted");
        return Ok((StatusCode::OK, SUBMIT_STARTED));
    }

    Err(AppError::MissingFile)
}
