//! Match Client — the single point of entry for all backend calls.
//!
//! ARCHITECTURAL RULE: no other module may talk to the backend directly.
//! Wire contract (confirmed against the backend): `/match` takes JSON
//! `{resume_text, jd_text}`; `/match-pdf` takes multipart parts
//! `resume_pdf` / `jd_pdf`. Responses are opaque JSON — the status code is
//! not inspected, so backend error bodies render the same way as results.

use std::path::Path;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::errors::SubmitError;

/// Multipart part names the backend expects. These are the contract with the
/// backend collaborator — do not rename without coordinating.
pub const RESUME_PDF_PART: &str = "resume_pdf";
pub const JD_PDF_PART: &str = "jd_pdf";

#[derive(Debug, Serialize)]
pub struct TextMatchRequest<'a> {
    pub resume_text: &'a str,
    pub jd_text: &'a str,
}

#[derive(Clone)]
pub struct MatchClient {
    client: Client,
    base_url: String,
}

impl MatchClient {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// POST /match with a JSON body. Fields are sent as-is; emptiness is the
    /// backend's problem to validate.
    pub async fn submit_text(&self, resume_text: &str, jd_text: &str) -> Result<Value, SubmitError> {
        let url = format!("{}/match", self.base_url);
        debug!(%url, "submitting text match request");

        let response = self
            .client
            .post(&url)
            .json(&TextMatchRequest {
                resume_text,
                jd_text,
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        debug!(%status, len = body.len(), "match response received");

        Ok(serde_json::from_slice(&body)?)
    }

    /// POST /match-pdf with both files as named multipart parts. Both files
    /// are read fully before anything is sent.
    pub async fn submit_pdf(&self, resume_path: &Path, jd_path: &Path) -> Result<Value, SubmitError> {
        let url = format!("{}/match-pdf", self.base_url);
        let form = Form::new()
            .part(RESUME_PDF_PART, pdf_part(resume_path).await?)
            .part(JD_PDF_PART, pdf_part(jd_path).await?);
        debug!(%url, "submitting pdf match request");

        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status();
        let body = response.bytes().await?;
        debug!(%status, len = body.len(), "match-pdf response received");

        Ok(serde_json::from_slice(&body)?)
    }
}

async fn pdf_part(path: &Path) -> Result<Part, SubmitError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| SubmitError::File {
            name: path.display().to_string(),
            source,
        })?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload.pdf".to_string());

    Ok(Part::bytes(bytes)
        .file_name(file_name)
        .mime_str("application/pdf")?)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests — run against a throwaway axum server on an ephemeral port
// ────────────────────────────────────────────────────────────────────────────
