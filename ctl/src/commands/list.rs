use anyhow::{Context, Result, bail};
use fleet_common::views::ClusterStatus;
use tokio_util::sync::CancellationToken;

use crate::client::ApiClient;

pub async fn list(client: &ApiClient, shutdown: CancellationToken) -> Result<()> {
    let clusters = tokio::select! {
        res = client.list_clusters() => res.context("Failed to list clusters")?,
        _ = shutdown.cancelled() => bail!("Interrupted while listing clusters"),
    };

    print!("{}", render(&clusters));
    Ok(())
}

fn render(clusters: &[ClusterStatus]) -> String {
    let mut out = format!(
        "{:<16} {:<40} {:<10} {:>5}/{:<5} {:<8}\n",
        "NAME", "URL", "STATE", "SCORE", "MAX", "GOVERNED"
    );
    for cluster in clusters {
        out.push_str(&format!(
            "{:<16} {:<40} {:<10} {:>5}/{:<5} {:<8}\n",
            cluster.name,
            cluster.url,
            cluster.state,
            cluster.score,
            cluster.max_score,
            cluster.governed,
        ));
    }
    out
}
