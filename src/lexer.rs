//! Identifier rules and field list tokenization.
//!
//! Identifiers start with a Unicode alphabetic character or `_`, and continue with Unicode
//! alphanumeric characters or `_`. This is looser than Rust's own `XID_Start`/`XID_Continue`
//! classes: names such as `a²` or `x½` are accepted even though `rustc` would reject them.

use crate::InvalidName;

/// Returns whether `c` can be the first character of an identifier.
pub fn is_identifier_start_char(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Returns whether `c` can be a continuing character of an identifier.
pub fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Returns whether the identifier is reserved and thus cannot name a field or a record type.
///
/// This covers strict, reserved, and weak keywords, as well as the lone `_`, which is a pattern
/// and not an identifier.
pub fn is_keyword(identifier: &str) -> bool {
    matches!(
        identifier,
        "_" | "as"
            | "async"
            | "await"
            | "break"
            | "const"
            | "continue"
            | "crate"
            | "dyn"
            | "else"
            | "enum"
            | "extern"
            | "false"
            | "fn"
            | "for"
            | "if"
            | "impl"
            | "in"
            | "let"
            | "loop"
            | "match"
            | "mod"
            | "move"
            | "mut"
            | "pub"
            | "ref"
            | "return"
            | "self"
            | "Self"
            | "static"
            | "struct"
            | "super"
            | "trait"
            | "true"
            | "type"
            | "unsafe"
            | "use"
            | "where"
            | "while"
            // Reserved for future use.
            | "abstract"
            | "become"
            | "box"
            | "do"
            | "final"
            | "macro"
            | "override"
            | "priv"
            | "try"
            | "typeof"
            | "unsized"
            | "virtual"
            | "yield"
            // Weak keywords.
            | "union"
    )
}

/// Checks that `name` is a valid identifier, reporting the first rule it breaks.
pub fn check_identifier(name: &str) -> Result<(), InvalidName> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Err(InvalidName::Empty),
        Some(c) if !is_identifier_start_char(c) => {
            return Err(InvalidName::StartsWithInvalidCharacter(c))
        }
        Some(_) => (),
    }
    if let Some(c) = chars.find(|&c| !is_identifier_char(c)) {
        return Err(InvalidName::InvalidCharacter(c));
    }
    if is_keyword(name) {
        return Err(InvalidName::Keyword);
    }
    Ok(())
}

/// Returns whether the character separates names in a field list string.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ','
}

/// Splits a field list string such as `"name, weight owner"` into its names.
///
/// Commas and whitespace both act as separators; runs of separators never produce empty names.
pub fn split_field_list(input: &str) -> impl Iterator<Item = &str> {
    input.split(is_separator).filter(|name| !name.is_empty())
}
