use std::path::{Path, PathBuf};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Answers "can this command be run?" for the gray-out styling
pub trait ProgramLookup {
    fn is_prog(&self, command: &str) -> bool;
}

/// Looks programs up in the directories of `$PATH`
#[derive(Debug, Clone, Default)]
pub struct PathLookup {
    dirs: Vec<PathBuf>,
}

impl PathLookup {
    pub fn from_env() -> Self {
        let dirs = std::env::var_os("PATH")
            .map(|path| std::env::split_paths(&path).collect())
            .unwrap_or_default();
        Self { dirs }
    }

    pub fn with_dirs(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }
}

impl ProgramLookup for PathLookup {
    /// Checks the first word of `command`; words containing `/` are
    /// treated as paths and not searched for
    fn is_prog(&self, command: &str) -> bool {
        let Some(program) = command.split_whitespace().next() else {
            return false;
        };

        if program.contains('/') {
            return is_executable(&crate::config::expand_tilde(program));
        }

        self.dirs.iter().any(|dir| is_executable(&dir.join(program)))
    }
}

fn is_executable(path: &Path) -> bool {
    let Ok(metadata) = std::fs::metadata(path) else {
        return false;
    };
    if !metadata.is_file() {
        return false;
    }

    #[cfg(unix)]
    {
        metadata.permissions().mode() & 0o111 != 0
    }
    #[cfg(not(unix))]
    {
        true
    }
}
