//! The workflow document model and its wire formats.
//!
//! A [`Workflow`] is plain data: nodes carrying kind-specific payloads,
//! directed edges between them, and editor metadata. Everything here
//! serializes to the camelCase JSON format the canvas editors exchange.

pub mod definition;
pub mod edge;
pub mod io;
pub mod node;

pub use definition::*;
pub use edge::*;
pub use io::*;
pub use node::*;
