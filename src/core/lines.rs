//! Line splitting and splicing on in-memory file contents.
//!
//! A line runs up to and including its `\n`. A trailing fragment without a
//! terminator is still a line. `\r\n` endings pass through untouched.

/// Splits `content` into lines, each keeping its terminator.
pub fn split_lines(content: &str) -> Vec<&str> {
    content.split_inclusive('\n').collect()
}

/// The terminator `line` ends with, if any.
pub fn line_ending(line: &str) -> Option<&'static str> {
    if line.ends_with("\r\n") {
        Some("\r\n")
    } else if line.ends_with('\n') {
        Some("\n")
    } else {
        None
    }
}

/// Inserts `line` so it becomes line `index` of the result.
///
/// Returns `None` when `content` has no lines. An `index` past the end
/// appends. Terminators follow the file: an unterminated `line` gets the
/// ending of the file's first line, and an unterminated line the insertion
/// follows gets the ending of `line`. `\n` is used when neither has one.
pub fn insert_at(content: &str, index: usize, line: &str) -> Option<String> {
    let lines = split_lines(content);
    let first = lines.first()?;

    let eol = line_ending(line)
        .or_else(|| line_ending(first))
        .unwrap_or("\n");
    let terminated = if line_ending(line).is_some() {
        line.to_string()
    } else {
        format!("{}{}", line, eol)
    };

    let index = index.min(lines.len());
    let mut out = String::with_capacity(content.len() + terminated.len() + eol.len());

    for (i, existing) in lines.iter().enumerate() {
        if i == index {
            out.push_str(&terminated);
        }
        out.push_str(existing);
    }

    if index == lines.len() {
        if line_ending(&out).is_none() {
            out.push_str(eol);
        }
        out.push_str(&terminated);
    }

    Some(out)
}
