pub mod endpoints;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::{ClientError, ClientResult};

/// HTTP client wrapper for the wallet-service REST API.
#[derive(Debug, Clone)]
pub struct IntmaxHttpClient {
    client: Client,
    base_url: String,
}

impl IntmaxHttpClient {
    /// Validate the base URL and build a client for it.
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let parsed = Url::parse(base_url)?;
        Ok(Self {
            client: Client::new(),
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// GET a JSON resource.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self.client.get(&url).send().await?;
        let resp = Self::check_status(resp).await?;
        resp.json::<T>().await.map_err(ClientError::Request)
    }

    /// POST a JSON body and decode a JSON response.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let resp = self.client.post(&url).json(body).send().await?;
        let resp = Self::check_status(resp).await?;
        resp.json::<T>().await.map_err(ClientError::Request)
    }

    /// POST a JSON body, discarding the response body.
    pub async fn post_empty<B>(&self, path: &str, body: &B) -> ClientResult<()>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let resp = self.client.post(&url).json(body).send().await?;
        Self::check_status(resp).await.map(|_| ())
    }

    async fn check_status(resp: reqwest::Response) -> ClientResult<reqwest::Response> {
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Http {
                status,
                message: body,
            });
        }
        Ok(resp)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
