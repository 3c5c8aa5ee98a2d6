#[inline]
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Split `input` on runs of spaces, tabs, carriage returns and newlines.
///
/// Never yields empty tokens. Other whitespace characters are kept inside
/// tokens, unlike `str::split_whitespace`.
pub fn tokenize(input: &str) -> Vec<&str> {
    input
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .collect()
}
