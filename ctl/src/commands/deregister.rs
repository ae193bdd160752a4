use anyhow::{Context, Result, bail};
use tokio_util::sync::CancellationToken;

use crate::client::ApiClient;

pub async fn deregister(
    client: &ApiClient,
    shutdown: CancellationToken,
    name: &str,
    force: bool,
) -> Result<()> {
    tokio::select! {
        res = client.deregister_cluster(name, force) => {
            res.with_context(|| format!("Failed to deregister cluster {name}"))?
        }
        _ = shutdown.cancelled() => bail!("Interrupted while deregistering cluster"),
    }

    println!("cluster deregistered: {name}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use httptest::{Expectation, Server, matchers::*, responders::*};

    #[tokio::test]
    async fn deregister_succeeds_on_empty_2xx_body() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("DELETE", "/api/v1/clusters/eu1"))
                .respond_with(status_code(204)),
        );

        let client = ApiClient::new(server.url_str(""), None).unwrap();
        deregister(&client, CancellationToken::new(), "eu1", false)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn unknown_cluster_is_fatal() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("DELETE", "/api/v1/clusters/ghost"))
                .respond_with(
                    status_code(404)
                        .append_header("Content-Type", "application/json")
                        .body(r#"{"code":"NotFound","message":"no such cluster"}"#),
                ),
        );

        let client = ApiClient::new(server.url_str(""), None).unwrap();
        let result = deregister(&client, CancellationToken::new(), "ghost", false).await;

        assert!(result.is_err());
    }
}
