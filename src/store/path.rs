use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "qcmd.conf";

/// Locates `qcmd.conf` next to the executable named by `argv0`.
pub fn resolve_config_path(argv0: Option<&str>, cwd: &Path) -> PathBuf {
    executable_dir(argv0, cwd).join(CONFIG_FILE_NAME)
}

// Only argv[0] is inspected. Without a separator the working directory
// stands in for the executable directory.
fn executable_dir(argv0: Option<&str>, cwd: &Path) -> PathBuf {
    let Some(argv0) = argv0 else {
        return cwd.to_path_buf();
    };
    match argv0.rfind(['/', '\\']) {
        Some(pos) => {
            let dir = Path::new(&argv0[..pos]);
            if dir.is_absolute() {
                dir.to_path_buf()
            } else {
                cwd.join(dir)
            }
        }
        None => cwd.to_path_buf(),
    }
}
