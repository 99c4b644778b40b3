use crate::core::domain::{
    error::{ConsoleError, ConsoleResult, ValidationError},
    model::{
        cluster::Cluster,
        config::{ClientConfig, RateLimitConfig},
        host::Host,
        operation::{OperationName, OperationParams},
    },
    value_object::{AccessToken, ConsoleUrl},
};
use crate::core::infrastructure::api_client::ApiClient;
use crate::operations::application::{
    response::operation_response::OperationAccepted,
    service::operation_runner::OperationTransport,
};
use crate::resources::application::service::resource_grouper::{
    GroupedResource, group_resources,
};
use async_trait::async_trait;
use tracing::info;

/// A client for the console REST API.
///
/// # Examples
///
/// ```no_run
/// use cluster_console::{ConsoleClient, ConsoleResult, group_resources};
///
/// #[tokio::main]
/// async fn main() -> ConsoleResult<()> {
///     let client = ConsoleClient::builder()
///         .base_url("https://console.example.com")?
///         .access_token("eyJhbGciOiJIUzI1NiJ9.e30.sig")?
///         .build()?;
///
///     let hosts = client.hosts().await?;
///     for cluster in client.clusters().await? {
///         let resources = cluster.details.map(|d| d.resources).unwrap_or_default();
///         println!("{}: {} rows", cluster.name, group_resources(&resources, &hosts).len());
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct ConsoleClient {
    pub(crate) api_client: ApiClient,
}

/// Builder for ConsoleClient configuration
#[derive(Debug, Default)]
pub struct ConsoleClientBuilder {
    base_url: Option<ConsoleUrl>,
    access_token: Option<AccessToken>,
    config: ClientConfig,
}

impl ConsoleClientBuilder {
    pub fn base_url(mut self, url: impl AsRef<str>) -> ConsoleResult<Self> {
        self.base_url = Some(ConsoleUrl::new(url)?);
        Ok(self)
    }

    pub fn access_token(mut self, token: impl Into<String>) -> ConsoleResult<Self> {
        self.access_token = Some(AccessToken::new(token)?);
        Ok(self)
    }

    pub fn rate_limit(mut self, requests_per_second: u32, burst_size: u32) -> Self {
        self.config.rate_limit = Some(RateLimitConfig {
            requests_per_second,
            burst_size,
        });
        self
    }

    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn build(self) -> ConsoleResult<ConsoleClient> {
        let base_url = self.base_url.ok_or_else(|| ValidationError::Field {
            field: "base_url".to_string(),
            message: "Base URL is required".to_string(),
        })?;
        let access_token = self.access_token.ok_or_else(|| ValidationError::Field {
            field: "access_token".to_string(),
            message: "Access token is required".to_string(),
        })?;

        Ok(ConsoleClient {
            api_client: ApiClient::new(base_url, access_token, &self.config)?,
        })
    }
}

impl ConsoleClient {
    /// Creates a new builder for ConsoleClient configuration
    pub fn builder() -> ConsoleClientBuilder {
        ConsoleClientBuilder::default()
    }

    /// Lists the clusters known to the console.
    pub async fn clusters(&self) -> ConsoleResult<Vec<Cluster>> {
        self.api_client.get(&["clusters"]).await
    }

    /// Lists the registered hosts.
    pub async fn hosts(&self) -> ConsoleResult<Vec<Host>> {
        self.api_client.get(&["hosts"]).await
    }

    /// Fetches a cluster's resources grouped for display.
    ///
    /// # Errors
    /// Returns `ConsoleError::NotFound` if the cluster is unknown.
    pub async fn grouped_resources(&self, cluster_id: &str) -> ConsoleResult<Vec<GroupedResource>> {
        let cluster = self
            .clusters()
            .await?
            .into_iter()
            .find(|cluster| cluster.id == cluster_id)
            .ok_or_else(|| ConsoleError::NotFound(format!("cluster {}", cluster_id)))?;
        let hosts = self.hosts().await?;

        let resources = cluster.details.map(|d| d.resources).unwrap_or_default();
        Ok(group_resources(&resources, &hosts))
    }
}

#[async_trait]
impl OperationTransport for ConsoleClient {
    async fn request_cluster_operation(
        &self,
        cluster_id: &str,
        operation: OperationName,
        params: &OperationParams,
    ) -> ConsoleResult<OperationAccepted> {
        info!(cluster_id, %operation, "requesting cluster operation");
        self.api_client
            .post(
                &["clusters", cluster_id, "operations", operation.as_str()],
                params,
            )
            .await
    }

    async fn request_cluster_host_operation(
        &self,
        cluster_id: &str,
        host_id: &str,
        operation: OperationName,
        params: &OperationParams,
    ) -> ConsoleResult<OperationAccepted> {
        info!(cluster_id, host_id, %operation, "requesting cluster host operation");
        self.api_client
            .post(
                &[
                    "clusters",
                    cluster_id,
                    "hosts",
                    host_id,
                    "operations",
                    operation.as_str(),
                ],
                params,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_url_and_token() {
        let result = ConsoleClient::builder().build();
        assert!(matches!(result, Err(ConsoleError::Validation(_))));

        let result = ConsoleClient::builder()
            .base_url("https://console.example.com")
            .unwrap()
            .build();
        assert!(matches!(result, Err(ConsoleError::Validation(_))));
    }

    #[test]
    fn test_builder_rejects_invalid_values() {
        assert!(ConsoleClient::builder().base_url("ftp://x").is_err());
        assert!(ConsoleClient::builder().access_token("").is_err());

        let result = ConsoleClient::builder()
            .base_url("https://console.example.com")
            .unwrap()
            .access_token("token")
            .unwrap()
            .rate_limit(0, 1)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_success() {
        let client = ConsoleClient::builder()
            .base_url("https://console.example.com")
            .unwrap()
            .access_token("token")
            .unwrap()
            .rate_limit(10, 5)
            .build()
            .unwrap();
        assert_eq!(
            client.api_client.base_url().endpoint(["hosts"]).unwrap().as_str(),
            "https://console.example.com/api/v1/hosts"
        );
    }
}
