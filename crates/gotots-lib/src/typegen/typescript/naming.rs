//! Identifier mapping between Go and TypeScript.

use std::borrow::Cow;

/// TypeScript name for a Go type identifier.
///
/// Every numeric kind collapses to `number`; other identifiers, including
/// user-defined types, pass through unchanged.
pub fn ts_type_name(ident: &str) -> &str {
    match ident {
        "int" | "int8" | "int16" | "int32" | "int64" | "uint" | "uint8" | "uint16" | "uint32"
        | "uint64" | "uintptr" | "float32" | "float64" | "byte" | "rune" => "number",
        "bool" => "boolean",
        other => other,
    }
}

/// Property name as written in an object type, quoted when it is not a
/// valid identifier.
pub fn property_name(name: &str) -> Cow<'_, str> {
    if is_identifier(name) {
        return Cow::Borrowed(name);
    }

    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push('"');
    for c in name.chars() {
        if matches!(c, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    Cow::Owned(quoted)
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
