//! Fixtures shared by the unit tests.

use std::io::Write;
use std::sync::Mutex;

use async_trait::async_trait;
use tempfile::NamedTempFile;

use crate::llm_client::{CompletionRequest, CompletionService, LlmError};

/// Builds a minimal single-font PDF with one page per entry of `pages`.
/// An empty entry produces a page with an empty content stream.
pub fn build_pdf(pages: &[&str]) -> Vec<u8> {
    let kids: Vec<String> = (0..pages.len())
        .map(|i| format!("{} 0 R", 4 + i * 2))
        .collect();

    let mut objects = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            pages.len()
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
    ];
    for (i, text) in pages.iter().enumerate() {
        let content = if text.is_empty() {
            String::new()
        } else {
            format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET")
        };
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
            5 + i * 2
        ));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{content}\nendstream",
            content.len()
        ));
    }

    let mut out = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
    }

    let xref_offset = out.len();
    out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for offset in offsets {
        out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
            objects.len() + 1
        )
        .as_bytes(),
    );
    out
}

/// Writes `bytes` to a temp file that lives as long as the returned handle.
pub fn write_pdf(bytes: &[u8]) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

/// What a `StubCompletion` answers with.
pub enum StubReply {
    Text(String),
    Refused,
    Status(u16, String),
}

/// In-memory completion service that records every request it receives.
pub struct StubCompletion {
    reply: StubReply,
    pub requests: Mutex<Vec<CompletionRequest>>,
}

impl StubCompletion {
    pub fn replying(text: &str) -> Self {
        Self::with(StubReply::Text(text.to_string()))
    }

    pub fn with(reply: StubReply) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CompletionService for StubCompletion {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            StubReply::Text(text) => Ok(text.clone()),
            StubReply::Status(status, message) => Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            }),
            StubReply::Refused => {
                // An unparsable URL fails inside reqwest without touching the network.
                let err = reqwest::Client::new()
                    .get("not a url")
                    .send()
                    .await
                    .unwrap_err();
                Err(LlmError::Http(err))
            }
        }
    }
}
