//! Indentation normalization for block bodies.

/// Splits text into lines on `\n`.
///
/// A single trailing line break does not start an extra empty line, so
/// `"a\nb\n"` and `"a\nb"` both yield two lines and `""` yields none.
/// `\r` is kept as ordinary text.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let trimmed = text.strip_suffix('\n').unwrap_or(text);
    let empty = text.is_empty();
    trimmed.split('\n').filter(move |_| !empty)
}

/// Returns the leading whitespace of the first line that has any
/// non-whitespace character, or `None` if every line is blank.
pub fn indentation_prefix(body: &str) -> Option<&str> {
    split_lines(body)
        .find(|line| line.chars().any(|c| !c.is_whitespace()))
        .map(|line| {
            let end = line
                .char_indices()
                .find(|(_, c)| !c.is_whitespace())
                .map_or(line.len(), |(idx, _)| idx);
            &line[..end]
        })
}

/// Removes the block's indentation prefix from every line that starts with it.
///
/// Lines with less leading whitespace than the prefix are left untouched.
/// The lines are rejoined with `\n`, so a trailing line break is dropped.
/// A body with no non-blank line is returned unchanged.
pub fn unindent(body: &str) -> String {
    let Some(prefix) = indentation_prefix(body) else {
        return body.to_string();
    };

    split_lines(body)
        .map(|line| line.strip_prefix(prefix).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}
