//! KeyValues serialization.

use crate::services::vdf::document::KvObject;

/// Serialize `root` as a tab-indented KeyValues document.
///
/// Attributes are written before child objects; every token is quoted and
/// escaped so `parse_document` reads the output back to the same tree.
pub fn write_document(root: &KvObject) -> String {
    let mut out = String::new();
    write_object(&mut out, root, 0);
    out
}

fn write_object(out: &mut String, object: &KvObject, depth: usize) {
    indent(out, depth);
    push_quoted(out, &object.name);
    out.push('\n');
    indent(out, depth);
    out.push_str("{\n");

    for (key, value) in &object.attributes {
        indent(out, depth + 1);
        push_quoted(out, key);
        out.push('\t');
        push_quoted(out, value);
        out.push('\n');
    }

    for child in &object.children {
        write_object(out, child, depth + 1);
    }

    indent(out, depth);
    out.push_str("}\n");
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push('\t');
    }
}

fn push_quoted(out: &mut String, token: &str) {
    out.push('"');
    for c in token.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
}

#[cfg(test)]
#[path = "tests/write_tests.rs"]
mod tests;
