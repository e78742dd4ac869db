//! Code generation for resolved experiment tables.
//!
//! Two outputs are produced from a [`ResolvedTable`](expc_core::ResolvedTable):
//!
//! - **Header** (`experiments.h`): per-platform accessors for builds with
//!   `GRPC_EXPERIMENTS_ARE_FINAL`, otherwise the experiment id enum and
//!   runtime accessors
//! - **Source** (`experiments.cc`): the per-platform metadata array
//!
//! Rendering is a pure function of the table and [`RenderOptions`].

mod common;
mod error;
mod header;
mod source;
mod target;

pub use common::snake_to_pascal;
pub use error::RenderError;
pub use header::render_header;
pub use source::render_source;
pub use target::{DEFAULT_HEADER_PATH, RenderOptions, RenderTarget};
