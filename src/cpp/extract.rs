use log::debug;
use crate::cpp::MacroTable;

pub const DEFINE_KEYWORD: &str = "#define";

/// Splits source text into its macro table and the remaining body.
///
/// A directive line is `#define`, whitespace, a name (any non-whitespace
/// run), whitespace, the rest of the line as the raw value; one trailing
/// `;` is stripped from the value. Lines matching that shape are removed
/// from the body; everything else, including `#define` lines missing a
/// name or value, passes through verbatim in original order.
pub fn extract(source: &str) -> (MacroTable, String) {
    let mut table = MacroTable::new();
    let mut kept: Vec<&str> = Vec::new();
    for line in source.split('\n') {
        match parse_directive(line) {
            Some((name, value)) => { table.define(name, value); }
            None => kept.push(line)
        }
    }
    debug!("extracted {} macro definition(s)", table.len());
    (table, kept.join("\n"))
}

fn parse_directive(line: &str) -> Option<(&str, &str)> {
    let rest = line.trim_start().strip_prefix(DEFINE_KEYWORD)?;
    // "#defineFOO" is not a directive; the keyword must end the token.
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let rest = rest.trim_start();
    let name_end = rest.find(char::is_whitespace)?;
    let (name, value) = rest.split_at(name_end);
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    Some((name, value.strip_suffix(';').map_or(value, str::trim_end)))
}
