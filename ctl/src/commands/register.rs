use std::io::Read;

use anyhow::{Context, Result, bail};
use fleet_common::params::RegisterClusterRequest;
use tokio_util::sync::CancellationToken;

use crate::client::ApiClient;

pub async fn register(client: &ApiClient, shutdown: CancellationToken, file: &str) -> Result<()> {
    let request = read_request(file)?;

    tokio::select! {
        res = client.register_cluster(&request) => {
            res.with_context(|| format!("Failed to register cluster {}", request.name))?
        }
        _ = shutdown.cancelled() => bail!("Interrupted while registering cluster"),
    }

    println!("cluster registered: {}", serde_json::to_string(&request)?);
    Ok(())
}

/// Reads and decodes a registration request from `file`, or from standard
/// input when `file` is "-". Nothing goes over the wire until the whole
/// document has decoded.
fn read_request(file: &str) -> Result<RegisterClusterRequest> {
    let content = if file == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read standard input")?;
        buf
    } else {
        std::fs::read(file).with_context(|| format!("Failed to read {file}"))?
    };

    serde_json::from_slice(&content).context("Failed to decode registration request")
}

#[cfg(test)]
mod tests {
    use super::*;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use std::path::PathBuf;

    fn temp_file(name: &str, content: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("fleetctl-{}-{name}", std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn file_source_decodes_the_same_request_as_raw_bytes() {
        let bytes = br#"{"name":"eu1","url":"https://eu1.example.com"}"#;
        let path = temp_file("equivalence.json", bytes);

        let from_file = read_request(path.to_str().unwrap()).unwrap();
        let from_bytes: RegisterClusterRequest = serde_json::from_slice(bytes).unwrap();

        assert_eq!(from_file, from_bytes);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn malformed_json_is_an_input_error() {
        let path = temp_file("malformed.json", b"{not json");
        assert!(read_request(path.to_str().unwrap()).is_err());
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn nonexistent_file_is_an_input_error() {
        let err = read_request("/nonexistent/registration.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/registration.json"));
    }

    #[tokio::test]
    async fn successful_registration_echoes_the_request() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/api/v1/clusters/register"))
                .respond_with(status_code(200)),
        );

        let client = ApiClient::new(server.url_str(""), None).unwrap();
        let path = temp_file(
            "success.json",
            br#"{"name":"eu1","url":"https://eu1.example.com"}"#,
        );

        register(&client, CancellationToken::new(), path.to_str().unwrap())
            .await
            .unwrap();

        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn input_errors_issue_no_remote_call() {
        // No expectations registered: any request would fail verification.
        let server = Server::run();
        let client = ApiClient::new(server.url_str(""), None).unwrap();
        let path = temp_file("no-call.json", b"{not json");

        let result = register(&client, CancellationToken::new(), path.to_str().unwrap()).await;

        assert!(result.is_err());
        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn remote_failure_propagates() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/api/v1/clusters/register"))
                .respond_with(
                    status_code(500)
                        .append_header("Content-Type", "application/json")
                        .body(r#"{"message":"admission failed"}"#),
                ),
        );

        let client = ApiClient::new(server.url_str(""), None).unwrap();
        let path = temp_file(
            "remote-failure.json",
            br#"{"name":"eu1","url":"https://eu1.example.com"}"#,
        );

        let result = register(&client, CancellationToken::new(), path.to_str().unwrap()).await;

        assert!(result.is_err());
        std::fs::remove_file(path).unwrap();
    }
}
