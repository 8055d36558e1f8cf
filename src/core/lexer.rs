//! Identifier-token scanning over plain text.
//!
//! A token is a maximal run of `[A-Za-z_][A-Za-z0-9_]*`. All scanning is
//! byte-wise: identifier characters are ASCII, so multi-byte sequences can
//! never start or continue a token and token boundaries are always valid
//! `str` boundaries.

#[inline]
pub fn valid_identifier_char(current: char, first: bool) -> bool {
    current == '_' || match first {
        true  => current.is_ascii_alphabetic(),
        false => current.is_ascii_alphanumeric()
    }
}

/// Span of the next identifier token at or after `position`. A digit
/// glues the rest of its `[A-Za-z0-9_]` run together: no token can start
/// inside a run that opened with a digit, so `FOO` in `2FOO` is not a
/// whole word.
fn next_token_span(bytes: &[u8], mut position: usize) -> Option<(usize, usize)> {
    while position < bytes.len() {
        let current = bytes[position] as char;
        if valid_identifier_char(current, true) {
            break;
        }
        position += 1;
        if valid_identifier_char(current, false) {
            while position < bytes.len() && valid_identifier_char(bytes[position] as char, false) {
                position += 1;
            }
        }
    }
    if position >= bytes.len() {
        return None;
    }
    let start = position;
    position += 1;
    while position < bytes.len() && valid_identifier_char(bytes[position] as char, false) {
        position += 1;
    }
    Some((start, position))
}

/// Iterator over the identifier tokens of a string, yielded as subslices
/// in source order.
pub struct Identifiers<'a> {
    source:     &'a str,
    position:   usize
}

pub fn identifiers(source: &str) -> Identifiers<'_> {
    Identifiers { source, position: 0 }
}

impl<'a> Iterator for Identifiers<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let (start, end) = next_token_span(self.source.as_bytes(), self.position)?;
        self.position = end;
        Some(&self.source[start..end])
    }
}

/// Rebuilds `source` in a single pass, mapping each identifier token
/// through `lookup`; tokens with no mapping and all non-token text pass
/// through verbatim. Replacement text is never re-scanned.
pub fn substitute_tokens<'a, F>(source: &str, mut lookup: F) -> String
where
    F: FnMut(&str) -> Option<&'a str>
{
    let bytes = source.as_bytes();
    let mut output = String::with_capacity(source.len());
    let mut position = 0;
    let mut copied = 0;
    while let Some((start, end)) = next_token_span(bytes, position) {
        position = end;
        if let Some(replacement) = lookup(&source[start..end]) {
            output.push_str(&source[copied..start]);
            output.push_str(replacement);
            copied = end;
        }
    }
    output.push_str(&source[copied..]);
    output
}

/// Replaces every whole-word occurrence of `word` in `haystack`.
pub fn replace_word(haystack: &str, word: &str, replacement: &str) -> String {
    substitute_tokens(haystack, |token| (token == word).then_some(replacement))
}
