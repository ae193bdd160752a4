use serde::{Deserialize, Serialize};

/// Request body for cluster registration.
///
/// The CLI treats this as a pass-through document: it decodes input bytes
/// into this shape and forwards it to the service unmodified. Admission and
/// validation beyond what decoding enforces happen server-side.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RegisterClusterRequest {
    /// Name the cluster registers under. Must be unique within the service.
    pub name: String,

    /// Base URL the service uses to reach the cluster.
    pub url: String,

    /// TLS material for the connection to the cluster, if it is not
    /// reachable over plain HTTP.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls: Option<ClusterTls>,

    /// Scheduling hints applied at admission time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hints: Option<RegistrationHints>,
}

/// Client certificate material, all PEM encoded.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClusterTls {
    pub ca: String,
    pub crt: String,
    pub key: String,
}

/// Hints the service applies when admitting the cluster.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RegistrationHints {
    /// Admit the cluster but keep it out of scheduling rotation.
    #[serde(default)]
    pub cordoned: bool,

    /// Whether the service should actively manage workloads on the cluster.
    #[serde(default)]
    pub govern: bool,

    #[serde(default)]
    pub preferability: Preferability,
}

/// How strongly the service should prefer this cluster when placing new
/// workloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preferability {
    #[default]
    None,
    Prefer,
    DontSchedule,
}
