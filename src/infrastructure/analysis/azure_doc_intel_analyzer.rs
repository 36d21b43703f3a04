use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{AnalysisError, DocumentAnalyzer};
use crate::domain::{AnalysisMode, AnalyzedCell, AnalyzedDocument, AnalyzedPage, AnalyzedTable};

pub const INITIAL_BACKOFF: Duration = Duration::from_secs(2);
pub const MAX_BACKOFF: Duration = Duration::from_secs(60);
pub const API_VERSION: &str = "2024-11-30";

/// Network budget for the analysis service, owned by the client rather than the
/// conversion pipeline.
#[derive(Debug, Clone, Copy)]
pub struct AnalyzerTimeouts {
    pub request: Duration,
    pub polling: Duration,
}

impl Default for AnalyzerTimeouts {
    fn default() -> Self {
        Self {
            request: Duration::from_secs(30),
            polling: Duration::from_secs(300),
        }
    }
}

/// Azure AI Document Intelligence client: `prebuilt-layout` for PDFs, `prebuilt-read` for
/// images. Submits the document, then polls `Operation-Location` until the analysis settles.
pub struct AzureDocIntelAnalyzer {
    client: Client,
    endpoint: String,
    api_key: String,
    poll_timeout: Duration,
}

impl AzureDocIntelAnalyzer {
    pub fn new(
        endpoint: &str,
        api_key: &str,
        timeouts: AnalyzerTimeouts,
    ) -> Result<Self, AnalysisError> {
        let client = Client::builder()
            .timeout(timeouts.request)
            .build()
            .map_err(|e| AnalysisError::RequestFailed(format!("HTTP client setup failed: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            poll_timeout: timeouts.polling,
        })
    }

    pub fn model_id(mode: AnalysisMode) -> &'static str {
        match mode {
            AnalysisMode::Layout => "prebuilt-layout",
            AnalysisMode::Read => "prebuilt-read",
        }
    }

    async fn submit(&self, data: &[u8], mode: AnalysisMode) -> Result<String, AnalysisError> {
        let b64 = general_purpose::STANDARD.encode(data);
        let body = serde_json::json!({ "base64Source": b64 });

        let url = format!(
            "{}/documentintelligence/documentModels/{}:analyze?api-version={}",
            self.endpoint,
            Self::model_id(mode),
            API_VERSION
        );

        let response = self
            .client
            .post(&url)
            .header("Ocp-Apim-Subscription-Key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AnalysisError::RequestFailed(format!("submit failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::ServiceError { status, body });
        }

        let operation_url = response
            .headers()
            .get("Operation-Location")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AnalysisError::InvalidResponse("missing Operation-Location header".to_string())
            })?
            .to_string();

        Ok(operation_url)
    }

    async fn poll_until_complete(&self, operation_url: &str) -> Result<AnalyzeResult, AnalysisError> {
        let poll_future = async {
            let mut backoff = INITIAL_BACKOFF;

            loop {
                let response = self
                    .client
                    .get(operation_url)
                    .header("Ocp-Apim-Subscription-Key", &self.api_key)
                    .send()
                    .await
                    .map_err(|e| AnalysisError::RequestFailed(format!("poll failed: {e}")))?;

                if response.status().as_u16() == 429 {
                    let retry_after = response
                        .headers()
                        .get("Retry-After")
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(backoff.as_secs());
                    tracing::debug!(retry_after, "Analysis service throttled polling");
                    tokio::time::sleep(Duration::from_secs(retry_after)).await;
                    continue;
                }

                if !response.status().is_success() {
                    let status = response.status().as_u16();
                    let body = response.text().await.unwrap_or_default();
                    return Err(AnalysisError::ServiceError { status, body });
                }

                let result: AnalyzeResponse = response
                    .json()
                    .await
                    .map_err(|e| AnalysisError::InvalidResponse(e.to_string()))?;

                match result.status.as_str() {
                    "succeeded" => return Ok(result.analyze_result.unwrap_or_default()),
                    "failed" | "canceled" => {
                        let message = result
                            .error
                            .map(|e| format!("{}: {}", e.code, e.message))
                            .unwrap_or_else(|| format!("operation {}", result.status));
                        return Err(AnalysisError::AnalysisFailed(message));
                    }
                    _ => {
                        tokio::time::sleep(backoff).await;
                        backoff = (backoff * 2).min(MAX_BACKOFF);
                    }
                }
            }
        };

        tokio::time::timeout(self.poll_timeout, poll_future)
            .await
            .map_err(|_| AnalysisError::Timeout(self.poll_timeout.as_secs()))?
    }
}

#[async_trait]
impl DocumentAnalyzer for AzureDocIntelAnalyzer {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len(), mode = mode.as_str()))]
    async fn analyze(
        &self,
        data: &[u8],
        mode: AnalysisMode,
    ) -> Result<AnalyzedDocument, AnalysisError> {
        let operation_url = self.submit(data, mode).await?;
        tracing::debug!(operation_url = %operation_url, "Analysis submitted");

        let result = self.poll_until_complete(&operation_url).await?;
        Ok(result.into())
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeResponse {
    pub status: String,
    #[serde(rename = "analyzeResult")]
    pub analyze_result: Option<AnalyzeResult>,
    pub error: Option<ServiceErrorBody>,
}

#[derive(Debug, Deserialize)]
pub struct ServiceErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeResult {
    #[serde(default)]
    pub pages: Vec<PageResult>,
    #[serde(default)]
    pub tables: Vec<TableResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    pub page_number: u32,
    #[serde(default)]
    pub lines: Vec<LineResult>,
}

#[derive(Debug, Deserialize)]
pub struct LineResult {
    pub content: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableResult {
    pub row_count: usize,
    pub column_count: usize,
    #[serde(default)]
    pub cells: Vec<CellResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellResult {
    pub row_index: usize,
    pub column_index: usize,
    #[serde(default)]
    pub content: String,
}

impl From<AnalyzeResult> for AnalyzedDocument {
    fn from(result: AnalyzeResult) -> Self {
        Self {
            pages: result
                .pages
                .into_iter()
                .map(|p| AnalyzedPage {
                    page_number: p.page_number,
                    lines: p.lines.into_iter().map(|l| l.content).collect(),
                })
                .collect(),
            tables: result
                .tables
                .into_iter()
                .map(|t| AnalyzedTable {
                    row_count: t.row_count,
                    column_count: t.column_count,
                    cells: t
                        .cells
                        .into_iter()
                        .map(|c| AnalyzedCell {
                            row: c.row_index,
                            column: c.column_index,
                            content: c.content,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}
