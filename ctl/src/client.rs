use anyhow::anyhow;
use fleet_common::{
    params::RegisterClusterRequest,
    views::{ApiErrorResponse, ClusterStatus},
};
use reqwest::{
    Client, Response,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("API error: {}", .0.message)]
    Api(ApiErrorResponse),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),

    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Client for the cluster-registration service. One instance per command
/// invocation; dropped when the process exits.
pub struct ApiClient {
    api_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(api_url: String, token: Option<String>) -> Result<Self, ApiClientError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = token {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| anyhow!("Invalid API token: {e}"))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .user_agent(format!("fleetctl/{}", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self { api_url, client })
    }

    pub async fn register_cluster(
        &self,
        request: &RegisterClusterRequest,
    ) -> Result<(), ApiClientError> {
        self.post_unit("/api/v1/clusters/register", request).await
    }

    pub async fn list_clusters(&self) -> Result<Vec<ClusterStatus>, ApiClientError> {
        self.get("/api/v1/clusters").await
    }

    pub async fn deregister_cluster(&self, name: &str, force: bool) -> Result<(), ApiClientError> {
        self.delete_unit(&format!("/api/v1/clusters/{name}?force={force}"))
            .await
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn get<TResult>(&self, path: &str) -> Result<TResult, ApiClientError>
    where
        TResult: serde::de::DeserializeOwned,
    {
        let url = self.url(path);
        debug!("GET {url}");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(Self::decode_error(&url, response).await);
        }

        response
            .json::<TResult>()
            .await
            .map_err(ApiClientError::Reqwest)
    }

    /// POST that discards the response body: a 2xx response is success no
    /// matter what, if anything, the service sends back.
    async fn post_unit<TBody>(&self, path: &str, body: &TBody) -> Result<(), ApiClientError>
    where
        TBody: serde::ser::Serialize,
    {
        let url = self.url(path);
        debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::decode_error(&url, response).await);
        }

        Ok(())
    }

    async fn delete_unit(&self, path: &str) -> Result<(), ApiClientError> {
        let url = self.url(path);
        debug!("DELETE {url}");

        let response = self.client.delete(&url).send().await?;
        if !response.status().is_success() {
            return Err(Self::decode_error(&url, response).await);
        }

        Ok(())
    }

    async fn decode_error(url: &str, response: Response) -> ApiClientError {
        let status = response.status();
        match response.json::<ApiErrorResponse>().await {
            Ok(body) => ApiClientError::Api(body),
            Err(e) => ApiClientError::Anyhow(anyhow!(
                "{url} failed with status {status} and invalid error response: {e}"
            )),
        }
    }
}
