//! Word wrapping and cell alignment for fixed-width text.

use codebook_model::Alignment;

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Wraps `text` into lines of at most `width` characters.
///
/// Breaks at whitespace; words longer than `width` are split. Always returns
/// at least one line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word.to_string();
        while char_len(&word) > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let split_at = word
                .char_indices()
                .nth(width)
                .map_or(word.len(), |(idx, _)| idx);
            let rest = word.split_off(split_at);
            lines.push(word);
            word = rest;
        }
        if word.is_empty() {
            continue;
        }
        if current.is_empty() {
            current = word;
        } else if char_len(&current) + 1 + char_len(&word) <= width {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::replace(&mut current, word));
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Pads `text` to `width` characters.
pub fn align(text: &str, width: usize, alignment: Alignment) -> String {
    let gap = width.saturating_sub(char_len(text));
    let (left, right) = match alignment {
        Alignment::Left => (0, gap),
        Alignment::Right => (gap, 0),
        Alignment::Center => (gap / 2, gap - gap / 2),
    };
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}
