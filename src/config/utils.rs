//! Utility functions for configuration files

/// Insert a blank line before every list entry of `section` after the first
///
/// `entry_marker` is the first key of an entry, e.g. `- id:`, matched at
/// column 0 so nested lists are left alone. Only lines inside the named
/// top-level section are touched.
pub fn add_blank_lines_between_entries(yaml: &str, section: &str, entry_marker: &str) -> String {
    let header = format!("{section}:");
    let mut formatted: Vec<String> = Vec::new();
    let mut in_section = false;

    for line in yaml.lines() {
        let is_top_level = !line.starts_with(' ') && !line.starts_with('-') && !line.is_empty();
        if is_top_level {
            in_section = line.trim_end() == header;
        } else if in_section && line.starts_with(entry_marker) {
            if let Some(last) = formatted.last() {
                if !last.is_empty() && *last != header {
                    formatted.push(String::new());
                }
            }
        }
        formatted.push(line.to_string());
    }

    format!("{}\n", formatted.join("\n"))
}
