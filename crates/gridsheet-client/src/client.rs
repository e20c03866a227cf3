//! HTTP client for the sheet API.

use gridsheet_core::api::{MessageBody, SaveResponse, SHEET_NOT_FOUND};
use gridsheet_core::{Sheet, SheetData};
use reqwest::{Response, StatusCode, Url};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// Async client for a gridsheet server.
#[derive(Debug, Clone)]
pub struct SheetClient {
    http: reqwest::Client,
    base_url: Url,
}

impl SheetClient {
    /// Create a client for the server at `config.base_url`.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let invalid = |reason: String| ClientError::InvalidUrl {
            url: config.base_url.clone(),
            reason,
        };

        let base_url = Url::parse(&config.base_url).map_err(|e| invalid(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid("not a base URL".into()));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch a sheet; `Ok(None)` if the server reports it was never saved.
    ///
    /// Only the server's own "sheet not found" answer counts as missing. Any
    /// other 404 (a wrong base path, say) is a [`ClientError::Status`].
    pub async fn fetch_sheet(&self, sheet_id: &str) -> Result<Option<Sheet>> {
        let url = self.endpoint(&["api", "sheets", sheet_id]);
        tracing::debug!(%url, "Fetching sheet");

        let response = self.http.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return match response.json::<MessageBody>().await {
                Ok(body) if body.message == SHEET_NOT_FOUND => Ok(None),
                Ok(body) => Err(ClientError::Status {
                    status: StatusCode::NOT_FOUND.as_u16(),
                    message: body.message,
                }),
                Err(_) => Err(ClientError::Status {
                    status: StatusCode::NOT_FOUND.as_u16(),
                    message: "Not Found".to_string(),
                }),
            };
        }
        let response = check_status(response).await?;
        Ok(Some(response.json().await?))
    }

    /// Save a sheet under `sheet_id`, replacing whatever was stored there.
    pub async fn save_sheet(&self, sheet_id: &str, contents: &SheetData) -> Result<Sheet> {
        let url = self.endpoint(&["api", "sheets", sheet_id]);
        tracing::debug!(%url, rows = contents.rows, columns = contents.columns, "Saving sheet");

        let response = self.http.put(url).json(contents).send().await?;
        let saved: SaveResponse = check_status(response).await?.json().await?;
        Ok(saved.sheet)
    }

    /// Save under the server's default sheet id (`POST /api/sheets`).
    pub async fn save_default(&self, contents: &SheetData) -> Result<Sheet> {
        let url = self.endpoint(&["api", "sheets"]);
        tracing::debug!(%url, rows = contents.rows, columns = contents.columns, "Saving sheet");

        let response = self.http.post(url).json(contents).send().await?;
        let saved: SaveResponse = check_status(response).await?.json().await?;
        Ok(saved.sheet)
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejected cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

/// Turn a non-success response into [`ClientError::Status`], using the
/// server's `{message}` body when there is one.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<MessageBody>().await {
        Ok(body) => body.message,
        Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
    };
    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}
