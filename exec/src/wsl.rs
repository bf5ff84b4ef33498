use std::sync::OnceLock;

/// True when this process is itself running inside a WSL distribution.
///
/// WSL kernels carry a `microsoft` tag in the release string (both
/// `Microsoft` on WSL 1 and `microsoft-standard` on WSL 2). The probe is
/// cached for the lifetime of the process.
pub fn running_under_wsl() -> bool {
    static PROBE: OnceLock<bool> = OnceLock::new();
    *PROBE.get_or_init(|| {
        std::fs::read_to_string("/proc/sys/kernel/osrelease")
            .map(|release| release.to_lowercase().contains("microsoft"))
            .unwrap_or(false)
    })
}
