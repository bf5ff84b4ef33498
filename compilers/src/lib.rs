//! Adapters binding an MSVC toolchain description to the bridge used to
//! reach it: Wine emulation or a WSL mount.
//!
//! Each adapter exposes the same two entry points. `filename` rewrites a
//! native path into the form the remote compiler understands, and
//! `run_compiler` spawns exactly one compiler process with translated
//! paths, returning a normalized [`ExecutionResult`] that upstream callers
//! cannot tell apart from a native compiler invocation. Backend selection
//! is static: construct the variant matching the configured bridge.

mod backend;
mod error;
mod info;
mod result;
mod wine;
mod wsl;

pub use backend::RemoteCompiler;
pub use error::BridgeError;
pub use info::BridgeConfig;
pub use info::RemoteCompilerInfo;
pub use result::ExecutionResult;
pub use wine::WineVcCompiler;
pub use wsl::WslVcCompiler;

pub use winbridge_exec::OutputLine;
pub use winbridge_winpath::MountRule;
pub use winbridge_winpath::Namespace;
pub use winbridge_winpath::TranslateError;
