use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn cozy_cmd() -> Command {
    let mut cmd = Command::cargo_bin("cozy").unwrap();
    cmd.env_remove("COZY_ROOT");
    cmd.env_remove("COZY_LOG");
    cmd
}

/// Write a memory file with the given tags and a single text chunk.
#[allow(dead_code)]
pub fn write_memory(root: &Path, date: &str, tags: &[&str], text: &str) {
    let tags: Vec<String> = tags.iter().map(|t| format!("\"{}\"", t)).collect();
    let contents = format!(
        "date = \"{}\"\ntags = [{}]\n\n[[chunk]]\nkind = \"text\"\nindex = 0\ntext = \"{}\"\n",
        date,
        tags.join(", "),
        text
    );
    fs::write(root.join(format!("{}.toml", date)), contents).unwrap();
}
