//! Library side of the `recon` command: configuration, logging and the
//! file-level pipeline that wraps the reconciliation core.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod types;
