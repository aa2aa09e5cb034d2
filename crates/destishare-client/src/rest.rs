use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Response;
use serde_json::json;

use destishare_types::{Destination, NewDestination, VoteField};

use crate::error::{Error, Result};
use crate::query::ListQuery;
use crate::repository::DestinationRepository;

const TABLE_PATH: &str = "rest/v1/destinations";

/// PostgREST-style adapter for the hosted destinations table.
///
/// Transport and auth are this adapter's whole job: the api key travels in
/// the `apikey` and `Authorization` headers, and every write asks the
/// service to echo the affected rows back (`Prefer: return=representation`)
/// so callers always get the authoritative record.
#[derive(Debug, Clone)]
pub struct RestStore {
    http: reqwest::Client,
    base_url: String,
}

impl RestStore {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let key_value = HeaderValue::from_str(api_key)
            .map_err(|_| Error::Config("api key contains non-header characters".to_string()))?;
        headers.insert("apikey", key_value);

        let bearer = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|_| Error::Config("api key contains non-header characters".to_string()))?;
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn table_url(&self) -> String {
        format!("{}/{}", self.base_url, TABLE_PATH)
    }

    /// Fetch a single row by id. Used by the vote flow to read the current
    /// counter value before writing current + 1.
    async fn fetch_by_id(&self, id: u64) -> Result<Destination> {
        let response = self
            .http
            .get(self.table_url())
            .query(&[("id", format!("eq.{}", id))])
            .send()
            .await?;
        let rows: Vec<Destination> = decode_rows(response).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| Error::EmptyReply(format!("no destination with id {}", id)))
    }
}

impl DestinationRepository for RestStore {
    async fn list(&self, query: ListQuery) -> Result<Vec<Destination>> {
        let response = self
            .http
            .get(self.table_url())
            .query(&query.to_params())
            .send()
            .await?;
        decode_rows(response).await
    }

    async fn create(&self, new: NewDestination) -> Result<Destination> {
        // PostgREST takes inserts as an array of rows and echoes an array back
        let response = self
            .http
            .post(self.table_url())
            .header("Prefer", "return=representation")
            .json(&[new])
            .send()
            .await?;
        let rows: Vec<Destination> = decode_rows(response).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| Error::EmptyReply("insert returned no rows".to_string()))
    }

    async fn increment_vote(&self, id: u64, field: VoteField) -> Result<Destination> {
        let current = self.fetch_by_id(id).await?;

        let response = self
            .http
            .patch(self.table_url())
            .query(&[("id", format!("eq.{}", id))])
            .header("Prefer", "return=representation")
            .json(&json!({ field.column(): current.votes(field) + 1 }))
            .send()
            .await?;
        let rows: Vec<Destination> = decode_rows(response).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| Error::EmptyReply(format!("update matched no row for id {}", id)))
    }
}

/// Turn a response into decoded rows, mapping non-success statuses to
/// `Error::Api` with whatever message body the service sent.
async fn decode_rows(response: Response) -> Result<Vec<Destination>> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(Error::Api {
            status: status.as_u16(),
            message: truncate_message(&body),
        });
    }

    serde_json::from_str(&body).map_err(Error::Decode)
}

fn truncate_message(body: &str) -> String {
    const MAX_CHARS: usize = 200;
    let trimmed = body.trim();
    if trimmed.chars().count() <= MAX_CHARS {
        trimmed.to_string()
    } else {
        let truncated: String = trimmed.chars().take(MAX_CHARS).collect();
        format!("{}...", truncated)
    }
}
