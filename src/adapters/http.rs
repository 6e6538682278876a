use crate::config::ApiSettings;
use crate::domain::model::{BreedDetail, Species};
use crate::domain::ports::BreedApi;
use crate::utils::error::{PetMatchError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use serde_json::Value;

const API_KEY_HEADER: &str = "x-api-key";

/// api-ninjas cats/dogs 端點的 client，整個 session 共用同一個連線池
pub struct ApiNinjasClient {
    client: Client,
    settings: ApiSettings,
}

impl ApiNinjasClient {
    pub fn new(settings: ApiSettings) -> Result<Self> {
        let mut api_key = HeaderValue::from_str(&settings.api_key).map_err(|_| {
            PetMatchError::InvalidConfigValueError {
                field: "api_key".to_string(),
                value: "***".to_string(),
                reason: "API key contains characters not allowed in a header".to_string(),
            }
        })?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(settings.user_agent.clone())
            .timeout(settings.timeout)
            .build()?;

        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &ApiSettings {
        &self.settings
    }

    /// 發送 GET 並解析 JSON，可重試的錯誤依設定重試
    async fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<Value> {
        let mut attempt = 0;

        loop {
            match self.send_once(url, query).await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_retryable() && attempt < self.settings.retry_attempts => {
                    attempt += 1;
                    tracing::debug!(
                        "Retrying {} ({}/{}) after error: {}",
                        url,
                        attempt,
                        self.settings.retry_attempts,
                        e
                    );
                    tokio::time::sleep(self.settings.retry_delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn send_once(&self, url: &str, query: &[(&str, String)]) -> Result<Value> {
        tracing::debug!("Making API request to: {} {:?}", url, query);
        let response = self.client.get(url).query(query).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(PetMatchError::StatusError {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PetMatchError::InvalidResponseError {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

/// 列表回應可能是陣列，或是包著 `cats` / `dogs` 陣列的物件
pub fn parse_directory(species: Species, url: &str, body: Value) -> Result<Vec<String>> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut obj) => match obj.remove(species.directory_key()) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        other => {
            return Err(PetMatchError::InvalidResponseError {
                url: url.to_string(),
                reason: format!("expected a list of breeds, got {}", other),
            })
        }
    };

    Ok(items
        .iter()
        .filter_map(|item| item.get("name").and_then(Value::as_str))
        .map(str::to_string)
        .collect())
}

/// 單一品種查詢只取第一筆
pub fn parse_detail(species: Species, name: &str, url: &str, body: Value) -> Result<BreedDetail> {
    let Value::Array(items) = body else {
        return Err(PetMatchError::InvalidResponseError {
            url: url.to_string(),
            reason: "expected a JSON array".to_string(),
        });
    };

    match items.first() {
        Some(Value::Object(record)) => Ok(BreedDetail::from_record(species, name, record)),
        Some(_) => Err(PetMatchError::InvalidResponseError {
            url: url.to_string(),
            reason: "breed entry is not an object".to_string(),
        }),
        None => Err(PetMatchError::NotFoundError {
            name: name.to_string(),
        }),
    }
}

#[async_trait]
impl BreedApi for ApiNinjasClient {
    async fn list_breeds(&self, species: Species) -> Result<Vec<String>> {
        let url = self.settings.endpoint(species);
        let query = [(
            "min_life_expectancy",
            self.settings.min_life_expectancy.to_string(),
        )];

        let body = self.get_json(url, &query).await?;
        parse_directory(species, url, body)
    }

    async fn lookup_breed(&self, species: Species, name: &str) -> Result<BreedDetail> {
        let url = self.settings.endpoint(species);
        let query = [("name", name.to_string())];

        let body = self.get_json(url, &query).await?;
        parse_detail(species, name, url, body)
    }
}
