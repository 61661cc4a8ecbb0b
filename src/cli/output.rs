//! Output formatting utilities

use crate::domain::tags::Taggable;
use crate::domain::Memory;

const PREVIEW_CHARS: usize = 60;

/// Format a list of tags for display, optionally with their counts.
pub fn format_tag_list(tags: &[(String, usize)], counts: bool) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for (tag, count) in tags {
        if counts {
            output.push_str(&format!("#{}  {}\n", tag, count));
        } else {
            output.push_str(&format!("#{}\n", tag));
        }
    }

    output
}

/// First line of the first text chunk, shortened for one-line display
fn preview(memory: &Memory) -> Option<String> {
    let line = memory.texts().find_map(|t| t.lines().find(|l| !l.trim().is_empty()))?;
    let line = line.trim();
    if line.chars().count() > PREVIEW_CHARS {
        let cut: String = line.chars().take(PREVIEW_CHARS).collect();
        Some(format!("{}...", cut))
    } else {
        Some(line.to_string())
    }
}

/// Format a list of memories for display
pub fn format_memory_list(memories: &[Memory]) -> String {
    if memories.is_empty() {
        return "No memories found".to_string();
    }

    let mut output = String::new();
    for memory in memories {
        let mut line = memory.date().format("%Y-%m-%d").to_string();

        let tags: Vec<String> = memory.tags().iter().map(|t| format!("#{}", t)).collect();
        if !tags.is_empty() {
            line.push_str("  ");
            line.push_str(&tags.join(" "));
        }
        if let Some(text) = preview(memory) {
            line.push_str("  ");
            line.push_str(&text);
        }

        output.push_str(&line);
        output.push('\n');
    }
    output
}
