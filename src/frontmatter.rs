//! YAML frontmatter handling for Markdown config files.

/// Split `content` into its YAML frontmatter and the Markdown body.
///
/// Returns `(None, content)` when the document does not open with a `---`
/// fence or the closing fence is missing.
pub fn split_frontmatter(content: &str) -> (Option<String>, &str) {
    let content = content.trim();

    let Some(rest) = content.strip_prefix("---") else {
        return (None, content);
    };

    // The closing fence must start its own line
    match rest.find("\n---") {
        Some(end) => {
            let frontmatter = rest[..end].to_string();
            let body = rest[end + 4..].trim_start();
            (Some(frontmatter), body)
        }
        None => (None, content),
    }
}

/// Render `yaml` as the frontmatter of a Markdown document with `body`.
pub fn join_frontmatter(yaml: &str, body: &str) -> String {
    let yaml = yaml.trim_end();
    if body.is_empty() {
        format!("---\n{}\n---\n", yaml)
    } else {
        format!("---\n{}\n---\n\n{}\n", yaml, body.trim_end())
    }
}
