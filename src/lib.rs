/*!
 * ipckill Library
 * Removal of System V IPC resources by kernel identifier
 */

pub mod cli;
pub mod errors;
pub mod ipc;
pub mod trace;

// Re-exports
pub use cli::Args;
pub use errors::RemoveError;
pub use ipc::ResourceKind;
pub use trace::init_tracing;
