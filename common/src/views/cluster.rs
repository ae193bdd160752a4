use std::fmt;

use serde::{Deserialize, Serialize};

/// A registered cluster as reported by the service's list endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClusterStatus {
    /// Name the cluster was registered under.
    pub name: String,

    /// Base URL the service uses to reach the cluster.
    pub url: String,

    pub state: ClusterState,

    /// Scheduling score the service currently assigns to the cluster.
    pub score: i32,
    pub max_score: i32,

    /// Whether the service actively manages workloads on the cluster.
    pub governed: bool,

    /// Whether the cluster was configured statically rather than registered
    /// at runtime.
    #[serde(rename = "static", default)]
    pub is_static: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterState {
    Unknown,
    Available,
    Cordoned,
    Draining,
}

impl fmt::Display for ClusterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self {
            ClusterState::Unknown => "unknown",
            ClusterState::Available => "available",
            ClusterState::Cordoned => "cordoned",
            ClusterState::Draining => "draining",
        };
        write!(f, "{state}")
    }
}
