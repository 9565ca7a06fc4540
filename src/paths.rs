use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

pub static PATH_HOME: LazyLock<PathBuf> = LazyLock::new(|| {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
});

pub static PATH_LOCAL_SHARE: LazyLock<PathBuf> = LazyLock::new(|| PATH_HOME.join(".local/share"));

pub static PATH_DATA: LazyLock<PathBuf> = LazyLock::new(|| {
    if let Ok(xdg_data_home) = env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg_data_home).join("gamelaunch");
    }
    PATH_LOCAL_SHARE.join("gamelaunch")
});

/// Known Steam install roots for the host OS, most likely first.
fn steam_candidates(os: &str) -> Vec<PathBuf> {
    match os {
        "windows" => vec![
            PathBuf::from(r"C:\Program Files (x86)\Steam"),
            PathBuf::from(r"C:\Program Files\Steam"),
        ],
        "macos" => vec![PATH_HOME.join("Library/Application Support/Steam")],
        _ => vec![
            PATH_LOCAL_SHARE.join("Steam"),
            // Follow the symlink at ~/.steam/steam
            PATH_HOME.join(".steam/steam"),
            // Flatpak Steam
            PATH_HOME.join(".var/app/com.valvesoftware.Steam/.local/share/Steam"),
        ],
    }
}

/// Resolve the Steam root, preferring an existing install and otherwise
/// falling back to the platform default.
pub fn steam_root(os: &str) -> PathBuf {
    let candidates = steam_candidates(os);
    candidates
        .iter()
        .find(|p| p.exists())
        .or_else(|| candidates.first())
        .cloned()
        .unwrap_or_else(|| PATH_LOCAL_SHARE.join("Steam"))
}

fn java_exe_name(os: &str) -> &'static str {
    if os == "windows" { "java.exe" } else { "java" }
}

/// Locate a Java binary: PATH first, then `JAVA_HOME`, then a walk of the
/// usual install directories.
pub fn find_java(os: &str) -> Option<PathBuf> {
    let exe = java_exe_name(os);

    if let Some(path_var) = env::var_os("PATH") {
        for dir in env::split_paths(&path_var) {
            let candidate = dir.join(exe);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }

    if let Some(java_home) = env::var_os("JAVA_HOME") {
        let candidate = PathBuf::from(java_home).join("bin").join(exe);
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    let common: &[&str] = match os {
        "windows" => &[r"C:\Program Files\Java", r"C:\Program Files (x86)\Java"],
        "macos" => &["/Library/Java/JavaVirtualMachines"],
        _ => &["/usr/lib/jvm", "/opt/java"],
    };
    common
        .iter()
        .find_map(|root| find_in_tree(Path::new(root), exe))
}

fn find_in_tree(root: &Path, exe: &str) -> Option<PathBuf> {
    if !root.exists() {
        return None;
    }
    walkdir::WalkDir::new(root)
        .max_depth(6)
        .follow_links(true)
        .into_iter()
        .filter_map(Result::ok)
        .find(|e| e.file_type().is_file() && e.file_name() == exe)
        .map(|e| e.into_path())
}
