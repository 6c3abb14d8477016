use std::path::{Path, PathBuf};

/// Paths that must NEVER be acted on, no matter what a rule matches.
/// This is the safety net against overly broad patterns like `src = "/"`.
const PROTECTED_PATHS: &[&str] = &[
    "/",
    "/bin",
    "/boot",
    "/dev",
    "/etc",
    "/home",
    "/lib",
    "/opt",
    "/proc",
    "/root",
    "/sbin",
    "/srv",
    "/sys",
    "/tmp",
    "/usr",
    "/var",
    // macOS roots
    "/System",
    "/Applications",
    "/Users",
    "/Library",
    "/Volumes",
    "/private",
];

/// Directories under home that must never be matched as a whole.
/// Files *inside* them are fair game; the directories themselves are not.
const PROTECTED_HOME_DIRS: &[&str] = &[
    "", // home dir itself
    "Desktop",
    "Documents",
    "Downloads",
    "Pictures",
    "Music",
    "Movies",
    "Videos",
    ".ssh",
    ".gnupg",
    ".config",
];

/// Check if a path is protected and must never be removed or relocated.
/// Matching is exact: `/tmp` is protected, `/tmp/scratch.txt` is not.
pub fn is_protected(path: &Path) -> bool {
    let path_str = path.to_string_lossy();

    for protected in PROTECTED_PATHS {
        if path_str == *protected {
            return true;
        }
    }

    if let Some(home) = dirs::home_dir() {
        let home_str = home.to_string_lossy().to_string();

        for dir in PROTECTED_HOME_DIRS {
            let protected_path = if dir.is_empty() {
                home_str.clone()
            } else {
                format!("{}/{}", home_str, dir)
            };
            if path_str == protected_path {
                return true;
            }
        }
    }

    false
}

/// Scan a match set for protected locations.
/// Returns the first offender so the caller can refuse the whole set.
pub fn first_protected(paths: &[PathBuf]) -> Option<&Path> {
    paths.iter().map(PathBuf::as_path).find(|p| is_protected(p))
}
