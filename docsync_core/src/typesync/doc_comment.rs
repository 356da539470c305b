//! KDoc block rendering with greedy word wrapping.

/// Greedily packs the words of `text` into lines. Every word is counted with one
/// leading separator, so a line holds words while
/// `line_width + 1 + word_width <= width`. A word that is wider than `width` on
/// its own still gets a line.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut line_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.chars().count();
        match lines.last_mut() {
            Some(line) if line_width + 1 + word_width <= width => {
                line.push(' ');
                line.push_str(word);
                line_width += 1 + word_width;
            }
            _ => {
                lines.push(word.to_string());
                line_width = 1 + word_width;
            }
        }
    }

    lines
}

/// Renders `paragraphs` as a `/** ... */` block indented by `indent` spaces,
/// wrapping every line to `max_width - indent` columns. Each paragraph and each
/// line break inside one starts a new block separated by an empty ` *` line.
///
/// Returns an empty string when there is no text to document.
pub fn format_doc_comment<S: AsRef<str>>(paragraphs: &[S], indent: usize, max_width: usize) -> String {
    let width = max_width.saturating_sub(indent);
    let blocks: Vec<Vec<String>> = paragraphs
        .iter()
        .flat_map(|paragraph| paragraph.as_ref().split('\n'))
        .map(|block| wrap_words(block, width))
        .filter(|lines| !lines.is_empty())
        .collect();

    if blocks.is_empty() {
        return String::new();
    }

    let pad = " ".repeat(indent);
    let mut output = format!("{pad}/**\n");
    for (idx, lines) in blocks.iter().enumerate() {
        if idx > 0 {
            output.push_str(&format!("{pad} *\n"));
        }
        for line in lines {
            output.push_str(&format!("{pad} * {line}\n"));
        }
    }
    output.push_str(&format!("{pad} */\n"));
    output
}
