use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

/// A font file requested by name, plus the directories searched when the name
/// is not a path to an existing file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreferredFont {
    pub name: PathBuf,
    pub search_dirs: Vec<PathBuf>,
}

impl Default for PreferredFont {
    fn default() -> Self {
        Self::new("arial.ttf")
    }
}

impl PreferredFont {
    pub fn new(name: impl Into<PathBuf>) -> Self {
        Self { name: name.into(), search_dirs: system_font_dirs() }
    }

    /// Request a font with an explicit search path and no system directories.
    pub fn with_search_dirs(name: impl Into<PathBuf>, search_dirs: Vec<PathBuf>) -> Self {
        Self { name: name.into(), search_dirs }
    }

    pub fn locate(&self) -> Option<PathBuf> {
        if self.name.is_file() {
            return Some(self.name.clone());
        }

        let wanted = self.name.file_name()?.to_string_lossy().to_lowercase();
        self.search_dirs.iter().filter(|dir| dir.is_dir()).find_map(|dir| find_in(dir, &wanted))
    }
}

fn find_in(dir: &Path, wanted: &str) -> Option<PathBuf> {
    let found = WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .find(|entry| entry.file_name().to_string_lossy().to_lowercase() == wanted)
        .map(|entry| entry.into_path());

    if let Some(path) = &found {
        debug!("found font {wanted} at {}", path.display());
    }
    found
}

pub fn system_font_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    if cfg!(windows) {
        let root = std::env::var_os("WINDIR").map(PathBuf::from);
        dirs.push(root.unwrap_or_else(|| PathBuf::from(r"C:\Windows")).join("Fonts"));
    } else if cfg!(target_os = "macos") {
        dirs.push(PathBuf::from("/Library/Fonts"));
        dirs.push(PathBuf::from("/System/Library/Fonts"));
    } else {
        dirs.push(PathBuf::from("/usr/share/fonts"));
        dirs.push(PathBuf::from("/usr/local/share/fonts"));
    }

    if let Some(home) = home::home_dir() {
        dirs.push(home.join(".fonts"));
        dirs.push(home.join(".local/share/fonts"));
        if cfg!(target_os = "macos") {
            dirs.push(home.join("Library/Fonts"));
        }
    }

    dirs
}
