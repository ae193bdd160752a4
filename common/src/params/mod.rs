//! Input parameters for the cluster-registration service.

mod cluster;
pub use cluster::*;
