/// Readability pass over expanded text: collapses whitespace runs to
/// single spaces, breaks the line after `;`, `{` and `}`, drops blank
/// lines, and re-indents by brace depth. Purely cosmetic; no dependency
/// logic lives here.
pub fn reformat(text: &str, indent_width: usize) -> String {
    let mut flat = String::with_capacity(text.len());
    let mut in_whitespace = false;
    for current in text.chars() {
        if current.is_whitespace() {
            in_whitespace = true;
            continue;
        }
        if in_whitespace && !flat.is_empty() {
            flat.push(' ');
        }
        in_whitespace = false;
        flat.push(current);
    }

    let mut broken = String::with_capacity(flat.len());
    for current in flat.chars() {
        broken.push(current);
        if matches!(current, ';' | '{' | '}') {
            broken.push('\n');
        }
    }

    let mut depth: usize = 0;
    let mut lines: Vec<String> = Vec::new();
    for line in broken.lines() {
        let trimmed = line.trim();
        if trimmed.contains('}') {
            depth = depth.saturating_sub(1);
        }
        if !trimmed.is_empty() {
            lines.push(format!("{}{}", " ".repeat(indent_width * depth), trimmed));
        }
        if trimmed.contains('{') {
            depth += 1;
        }
    }
    lines.join("\n")
}
