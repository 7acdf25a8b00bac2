use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn tagsearch_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tagsearch").unwrap();
    cmd.env_remove("TAGSEARCH_LOG");
    cmd
}

/// Write `files` (relative path, content) under `root`
#[allow(dead_code)]
pub fn write_files(root: &Path, files: &[(&str, &str)]) {
    for (name, content) in files {
        let path = root.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}
