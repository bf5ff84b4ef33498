use std::collections::HashMap;
use std::path::Path;

use tokio_util::sync::CancellationToken;
use tracing::debug;
use winbridge_exec::RunOptions;
use winbridge_winpath::TranslateError;
use winbridge_winpath::to_wine;

use crate::BridgeConfig;
use crate::BridgeError;
use crate::ExecutionResult;
use crate::RemoteCompiler;
use crate::RemoteCompilerInfo;

/// MSVC reached through Wine.
///
/// Wine exposes the entire native filesystem to the compiler as drive
/// `Z:`, so filenames translate without a mount table and the process
/// starts in the native working directory unchanged; only the command is
/// wrapped in the Wine launcher.
#[derive(Debug, Clone)]
pub struct WineVcCompiler {
    info: RemoteCompilerInfo,
    config: BridgeConfig,
}

impl WineVcCompiler {
    pub fn new(info: RemoteCompilerInfo, config: BridgeConfig) -> Self {
        Self { info, config }
    }

    pub fn info(&self) -> &RemoteCompilerInfo {
        &self.info
    }
}

impl RemoteCompiler for WineVcCompiler {
    fn filename(&self, path: &str) -> Result<String, TranslateError> {
        to_wine(path)
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

        // Launcher wraps the real command: wine <exe> <args...>
        let mut launcher_args = Vec::with_capacity(args.len() + 1);
        launcher_args.push(executable.display().to_string());
        launcher_args.extend(args.iter().cloned());

        let cwd = Path::new(input_filename).parent().map(Path::to_path_buf);
        debug!(input = %translated, "running compiler under wine");
        let output = winbridge_exec::run(
            &self.config.wine_launcher,
            &launcher_args,
            RunOptions { cwd, env },
            cancel,
        )
        .await;
        Ok(ExecutionResult::from_run(output, translated))
    }
}
