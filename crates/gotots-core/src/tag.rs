//! Struct tag parsing.
//!
//! A raw tag is a sequence of space-separated `key:"value"` pairs, e.g.
//! `json:"name,omitempty" yaml:"name"`. [`StructTag`] looks values up by key
//! with the same rules Go's `reflect.StructTag` applies; [`FieldTag`]
//! interprets one value as serialization hints.

use serde::Serialize;

/// Tag name that excludes a field entirely.
pub const SKIP_SENTINEL: &str = "-";

/// Tag option that marks a field as possibly absent.
pub const OPTIONAL_MARKER: &str = "omitempty";

/// Borrowed view over a raw struct tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StructTag<'a>(pub &'a str);

impl<'a> StructTag<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self(raw)
    }

    /// Value for `key`, or `None` if the key is absent or the tag is malformed
    /// before the key is reached.
    pub fn lookup(&self, key: &str) -> Option<String> {
        let mut tag = self.0.as_bytes();

        while !tag.is_empty() {
            let skip = tag.iter().take_while(|&&b| b == b' ').count();
            tag = &tag[skip..];
            if tag.is_empty() {
                break;
            }

            let name_len = tag
                .iter()
                .take_while(|&&b| b > b' ' && b != b':' && b != b'"' && b != 0x7f)
                .count();
            if name_len == 0
                || name_len + 1 >= tag.len()
                || tag[name_len] != b':'
                || tag[name_len + 1] != b'"'
            {
                break;
            }
            let name = &tag[..name_len];
            tag = &tag[name_len + 1..];

            // Scan to the closing quote, honoring backslash escapes.
            let mut i = 1;
            while i < tag.len() && tag[i] != b'"' {
                if tag[i] == b'\\' {
                    i += 1;
                }
                i += 1;
            }
            if i >= tag.len() {
                break;
            }
            let quoted = &tag[..=i];
            tag = &tag[i + 1..];

            if name == key.as_bytes() {
                let quoted = std::str::from_utf8(quoted).ok()?;
                return unquote(quoted);
            }
        }

        None
    }
}

/// Decode a double-quoted Go string literal, including its quotes.
///
/// Returns `None` for anything that is not a well-formed interpreted literal.
pub fn unquote(literal: &str) -> Option<String> {
    let inner = literal.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' | '\n' => return None,
            '\\' => {
                let escaped = match chars.next()? {
                    'a' => '\u{07}',
                    'b' => '\u{08}',
                    'f' => '\u{0c}',
                    'n' => '\n',
                    'r' => '\r',
                    't' => '\t',
                    'v' => '\u{0b}',
                    '\\' => '\\',
                    '"' => '"',
                    'x' => hex_escape(&mut chars, 2)?,
                    'u' => hex_escape(&mut chars, 4)?,
                    'U' => hex_escape(&mut chars, 8)?,
                    d @ '0'..='7' => {
                        let mut value = d.to_digit(8)?;
                        for _ in 0..2 {
                            value = value * 8 + chars.next()?.to_digit(8)?;
                        }
                        char::from_u32(value).filter(|_| value <= 0xff)?
                    }
                    _ => return None,
                };
                out.push(escaped);
            }
            c => out.push(c),
        }
    }

    Some(out)
}

fn hex_escape(chars: &mut std::str::Chars<'_>, digits: usize) -> Option<char> {
    let mut value = 0u32;
    for _ in 0..digits {
        value = value * 16 + chars.next()?.to_digit(16)?;
    }
    char::from_u32(value)
}

/// Serialization hints extracted from one tag value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FieldTag {
    /// Override name; empty when the tag keeps the declared name.
    pub name: String,
    /// The field is excluded from output.
    pub omit: bool,
    /// The field may be absent.
    pub optional: bool,
}

impl FieldTag {
    /// Parse the value stored under `key` in a raw tag.
    ///
    /// A missing key, an empty value, or a malformed tag all yield `None`,
    /// which callers treat the same as having no tag.
    pub fn parse(raw: &str, key: &str) -> Option<Self> {
        let value = StructTag::new(raw).lookup(key)?;
        if value.is_empty() {
            return None;
        }
        Some(Self::from_value(&value))
    }

    /// Interpret a tag value such as `name,omitempty`.
    pub fn from_value(value: &str) -> Self {
        let mut parts = value.split(',');
        let name = parts.next().unwrap_or_default();
        let options: Vec<&str> = parts.collect();

        if name == SKIP_SENTINEL && options.is_empty() {
            return Self {
                name: String::new(),
                omit: true,
                optional: false,
            };
        }

        Self {
            name: name.to_owned(),
            omit: false,
            optional: options.contains(&OPTIONAL_MARKER),
        }
    }

    /// Replacement for the declared field name, if the tag carries one.
    pub fn rename(&self) -> Option<&str> {
        (!self.name.is_empty()).then_some(self.name.as_str())
    }
}
