use anyhow::{Result, anyhow};
use std::path::Path;

/// MIME types accepted for order uploads. HTTP clients are inconsistent
/// about what they send for .csv files, so this is deliberately loose.
pub const ALLOWED_CSV_MIME_TYPES: &[&str] = &[
    "text/csv",
    "text/plain",
    "application/csv",
    "application/vnd.ms-excel",
    "application/octet-stream",
];

/// Extensions accepted for order uploads
const ALLOWED_EXTENSIONS: &[&str] = &["csv", "txt"];

/// Validates file size against the configured limit
pub fn validate_file_size(size: usize, max_size: usize) -> Result<()> {
    if size > max_size {
        return Err(anyhow!(
            "File size {} bytes exceeds maximum allowed {} bytes ({} MB)",
            size,
            max_size,
            max_size / 1024 / 1024
        ));
    }
    Ok(())
}

/// Strips path components and neutralizes characters that are unsafe in
/// filenames. Rejects empty and hidden names.
pub fn sanitize_filename(filename: &str) -> Result<String> {
    let base = filename.rsplit(['/', '\\']).next().unwrap_or("").trim();

    if base.is_empty() || base == "." || base == ".." {
        return Err(anyhow!("Filename is empty"));
    }
    if base.starts_with('.') {
        return Err(anyhow!("Hidden files are not allowed"));
    }

    let sanitized: String = base
        .chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '|' | '?' | '*' | '\0' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    Ok(sanitized)
}

/// Full validation for an order upload: sanitizes the filename, then
/// checks extension and declared content type. Returns the sanitized
/// filename to store under.
pub fn validate_csv_upload(filename: &str, content_type: Option<&str>) -> Result<String> {
    let sanitized = sanitize_filename(filename)?;

    let extension = Path::new(&sanitized)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match extension.as_deref() {
        Some(ext) if ALLOWED_EXTENSIONS.contains(&ext) => {}
        _ => {
            return Err(anyhow!(
                "File type not allowed for order uploads: {}",
                sanitized
            ));
        }
    }

    if let Some(raw) = content_type {
        let essence = raw
            .parse::<mime::Mime>()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_else(|_| raw.trim().to_lowercase());

        if !ALLOWED_CSV_MIME_TYPES.contains(&essence.as_str()) {
            return Err(anyhow!("Content type not allowed: {}", raw));
        }
    }

    Ok(sanitized)
}
