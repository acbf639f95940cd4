/// Minimum trimmed character length for a paragraph to survive segmentation.
const MIN_PARAGRAPH_LEN: usize = 11;

fn is_heading_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    let hashes = trimmed.chars().take_while(|&c| c == '#').count();
    (1..=3).contains(&hashes) && trimmed[hashes..].starts_with(' ')
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Splits document text into paragraphs on blank-line runs and on the
/// newline immediately preceding a heading line, discarding any paragraph
/// whose trimmed payload is shorter than [`MIN_PARAGRAPH_LEN`] characters.
pub fn segment_paragraphs(content: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    let flush = |current: &mut Vec<&str>, paragraphs: &mut Vec<String>| {
        if current.is_empty() {
            return;
        }
        let joined = current.join("\n");
        let trimmed = joined.trim();
        if trimmed.chars().count() >= MIN_PARAGRAPH_LEN {
            paragraphs.push(trimmed.to_string());
        }
        current.clear();
    };

    for line in content.lines() {
        if is_blank(line) {
            flush(&mut current, &mut paragraphs);
            continue;
        }
        if is_heading_line(line) && !current.is_empty() {
            flush(&mut current, &mut paragraphs);
        }
        current.push(line);
    }
    flush(&mut current, &mut paragraphs);

    paragraphs
}
