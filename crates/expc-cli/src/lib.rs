//! Library side of the `expc` binary: logging setup and the load/resolve
//! pipeline, shared with integration tests.

pub mod logging;
pub mod pipeline;
