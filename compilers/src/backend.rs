use std::collections::HashMap;
use std::path::Path;

use tokio_util::sync::CancellationToken;
use winbridge_winpath::TranslateError;

use crate::BridgeError;
use crate::ExecutionResult;

/// Capability interface shared by the bridge variants. The set is closed
/// (Wine, WSL) and callers construct the concrete variant for their
/// configured backend, so dispatch stays static.
#[allow(async_fn_in_trait)]
pub trait RemoteCompiler {
    /// Rewrite a native path into the remote namespace's convention.
    ///
    /// Pure; upstream argument builders call this instead of duplicating
    /// translation logic. The returned string is only meaningful in the
    /// remote namespace and must never be handed back to native file
    /// operations.
    fn filename(&self, path: &str) -> Result<String, TranslateError>;

    /// Spawn the compiler once through this backend's bridge and wait for
    /// it to finish.
    ///
    /// `input_filename` is the native working path of the request; it is
    /// translated before anything is spawned, and a translation failure is
    /// returned without side effects. Spawn failures and compiler errors
    /// both come back as an [`ExecutionResult`]. Cancelling `cancel` kills
    /// the child best-effort.
    async fn run_compiler(
        &self,
        executable: &Path,
        args: &[String],
        input_filename: &str,
        env: HashMap<String, String>,
        cancel: CancellationToken,
    ) -> Result<ExecutionResult, BridgeError>;
}
