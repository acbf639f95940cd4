use std::path::{Path, PathBuf};

/// Fixed top-level files in the watched workspace (spec §4.4).
pub const FIXED_TOP_LEVEL_FILES: &[&str] =
    &["MEMORY.md", "MEMORY_EXTENDED.md", "SOUL.md", "USER.md", "AGENTS.md", "TOOLS.md"];

/// Name of the subdirectory whose `*.md` files are watched alongside the
/// fixed top-level files (spec §4.4, §6).
pub const MEMORY_SUBDIR: &str = "memory";

/// Enumerates the currently watched document set under `workspace`: the
/// fixed top-level files that exist, plus every `*.md` file directly in
/// `memory/` (non-recursive). Files outside this set are ignored (spec §6).
/// Missing individual files are simply absent from the result; a missing
/// `memory/` subdirectory yields no entries from it, not an error.
#[must_use]
pub fn enumerate_watched_paths(workspace: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = FIXED_TOP_LEVEL_FILES
        .iter()
        .map(|name| workspace.join(name))
        .filter(|p| p.is_file())
        .collect();

    let memory_dir = workspace.join(MEMORY_SUBDIR);
    if let Ok(entries) = std::fs::read_dir(&memory_dir) {
        let mut memory_files: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "md"))
            .collect();
        memory_files.sort();
        paths.extend(memory_files);
    }

    paths
}

/// True if `path` falls within the watched surface of `workspace`: one of
/// the fixed top-level files, or a `*.md` file directly under `memory/`.
#[must_use]
pub fn is_watched_path(path: &Path, workspace: &Path) -> bool {
    let Ok(relative) = path.strip_prefix(workspace) else { return false };
    let Some(file_name) = relative.file_name().and_then(|n| n.to_str()) else { return false };

    if relative.parent() == Some(Path::new("")) {
        return FIXED_TOP_LEVEL_FILES.contains(&file_name);
    }

    relative.parent() == Some(Path::new(MEMORY_SUBDIR)) && file_name.ends_with(".md")
}
