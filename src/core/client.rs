use crate::domain::model::{CarrierRequest, CarrierResponse};
use crate::domain::ports::{CarrierApi, ConfigProvider};
use crate::utils::error::{NovaPoshtaError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

pub const DEFAULT_ENDPOINT: &str = "https://api.novaposhta.ua/v2.0/json/";

#[derive(Serialize)]
struct Envelope<'a> {
    #[serde(rename = "apiKey", skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
    #[serde(flatten)]
    request: &'a CarrierRequest,
}

/// Nova Poshta JSON API 的 HTTP 實作
#[derive(Debug, Clone)]
pub struct NovaPoshtaClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    authenticate_tracking: bool,
}

impl NovaPoshtaClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.endpoint().to_string(),
            api_key: config.api_key().map(str::to_string),
            authenticate_tracking: config.authenticate_tracking(),
        }
    }

    /// 組出實際送出的 JSON 主體
    pub fn envelope(&self, request: &CarrierRequest) -> Result<serde_json::Value> {
        let needs_key = request.authenticated
            || (self.authenticate_tracking && self.api_key.is_some());

        let api_key = if needs_key {
            let key = self
                .api_key
                .as_deref()
                .ok_or_else(|| NovaPoshtaError::MissingApiKey {
                    called_method: request.called_method.clone(),
                })?;
            Some(key)
        } else {
            None
        };

        Ok(serde_json::to_value(Envelope { api_key, request })?)
    }
}

#[async_trait]
impl CarrierApi for NovaPoshtaClient {
    async fn send(&self, request: &CarrierRequest) -> Result<CarrierResponse> {
        let body = self.envelope(request)?;

        tracing::debug!(
            "Calling {}.{} at {}",
            request.model_name,
            request.called_method,
            self.endpoint
        );

        // 承運商 API 以 GET 搭配 JSON 主體
        let response = self.client.get(&self.endpoint).json(&body).send().await?;
        tracing::debug!("Carrier response status: {}", response.status());

        let parsed: CarrierResponse = response.json().await?;
        if !parsed.success {
            tracing::warn!(
                "{}.{} reported failure: {}",
                request.model_name,
                request.called_method,
                parsed.errors
            );
        }

        Ok(parsed)
    }
}
