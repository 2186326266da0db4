/// Greedy word wrap for the description panel.
///
/// Words are split on single spaces and packed while the line, including the
/// joining space, stays within `max_width` characters. A word longer than
/// `max_width` gets a line to itself and is never split. Existing newlines
/// are kept; each paragraph wraps on its own.
pub fn wrap_text(text: &str, max_width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph, max_width, &mut lines);
    }
    lines.join("\n")
}

fn wrap_paragraph(paragraph: &str, max_width: usize, out: &mut Vec<String>) {
    let mut line: Vec<&str> = Vec::new();
    let mut line_len = 0usize;
    for word in paragraph.split(' ') {
        let word_len = word.chars().count();
        if line.is_empty() {
            line.push(word);
            line_len = word_len;
        } else if line_len + 1 + word_len <= max_width {
            line.push(word);
            line_len += 1 + word_len;
        } else {
            out.push(line.join(" "));
            line.clear();
            line.push(word);
            line_len = word_len;
        }
    }
    // `split` always yields at least one piece, so `line` is never empty here.
    out.push(line.join(" "));
}
