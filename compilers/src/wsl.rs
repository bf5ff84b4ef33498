use std::collections::HashMap;
use std::path::Path;

use tokio_util::sync::CancellationToken;
use tracing::debug;
use winbridge_exec::RunOptions;
use winbridge_winpath::TranslateError;
use winbridge_winpath::to_wsl;

use crate::BridgeConfig;
use crate::BridgeError;
use crate::ExecutionResult;
use crate::RemoteCompiler;
use crate::RemoteCompilerInfo;

/// MSVC reached through a WSL mount.
///
/// The Windows toolchain sees each configured native mount as a drive
/// letter, so filenames go through the mount table. WSL can start Windows
/// executables directly; the child's start directory is given in native
/// form as the mount directory containing the input, which the remote
/// process resolves back to the expected mount.
#[derive(Debug, Clone)]
pub struct WslVcCompiler {
    info: RemoteCompilerInfo,
    config: BridgeConfig,
}

impl WslVcCompiler {
    pub fn new(info: RemoteCompilerInfo, config: BridgeConfig) -> Self {
        Self { info, config }
    }

    pub fn info(&self) -> &RemoteCompilerInfo {
        &self.info
    }

    /// [`RemoteCompiler::filename`] with an explicit WSL-visible
    /// working-directory root instead of the configured default.
    pub fn filename_with_base(
        &self,
        path: &str,
        base: Option<&str>,
    ) -> Result<String, TranslateError> {
        to_wsl(path, &self.config.mounts, base)
    }
}

impl RemoteCompiler for WslVcCompiler {
    fn filename(&self, path: &str) -> Result<String, TranslateError> {
        self.filename_with_base(path, self.info.base_path.as_deref())
    }

    async fn run_compiler(
        &self,
        executable: &Path,
        args: &[String],
        input_filename: &str,
        env: HashMap<String, String>,
        cancel: CancellationToken,
    ) -> Result<ExecutionResult, BridgeError> {
        let translated = self.filename(input_filename)?;

        let cwd = Path::new(input_filename).parent().map(Path::to_path_buf);
        debug!(input = %translated, "running compiler through wsl");
        let output = winbridge_exec::run(executable, args, RunOptions { cwd, env }, cancel).await;
        Ok(ExecutionResult::from_run(output, translated))
    }
}
