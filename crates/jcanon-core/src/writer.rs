//! Canonical pretty-printer -- a [`Node`] tree to deterministic JSON text.
//!
//! The writer walks the tree depth-first and always produces the same
//! canonical shape, independent of how the source document was formatted:
//!
//! - 2-space indentation per nesting level
//! - every child of a composite on its own line, comma-separated
//! - the closing bracket on its own line, one level shallower
//! - empty composites collapsed to `{}` or `[]` on one line
//! - object members in key-sorted order
//! - integers with no decimal point; floats with a zero fractional part
//!   printed with a `.0` suffix so the int/float distinction survives a
//!   round trip
//!
//! String lexemes are emitted verbatim between quotes; escape sequences
//! were kept raw by the tokenizer and pass through unchanged.

use crate::node::{Array, Node, Object};

/// Indentation width per nesting level.
const INDENT_SIZE: usize = 2;

/// Serialize a tree into canonical indented JSON text.
pub fn write(root: &Node<'_>) -> String {
    let mut out = String::new();
    write_value(root, 0, &mut out);
    out
}

fn write_value(node: &Node<'_>, depth: usize, out: &mut String) {
    match node {
        Node::Null => out.push_str("null"),
        Node::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Node::Int(n) => out.push_str(&n.to_string()),
        Node::Float(x) => out.push_str(&format_float(*x)),
        Node::String(s) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
        Node::Array(items) => write_array(items, depth, out),
        Node::Object(map) => write_object(map, depth, out),
    }
}

fn write_object(map: &Object<'_>, depth: usize, out: &mut String) {
    if map.is_empty() {
        out.push_str("{}");
        return;
    }
    out.push('{');
    let mut first = true;
    for (key, value) in map {
        if !first {
            out.push(',');
        }
        first = false;
        out.push('\n');
        push_indent(depth + 1, out);
        out.push('"');
        out.push_str(key);
        out.push_str("\": ");
        write_value(value, depth + 1, out);
    }
    out.push('\n');
    push_indent(depth, out);
    out.push('}');
}

fn write_array(items: &Array<'_>, depth: usize, out: &mut String) {
    if items.is_empty() {
        out.push_str("[]");
        return;
    }
    out.push('[');
    let mut first = true;
    for value in items {
        if !first {
            out.push(',');
        }
        first = false;
        out.push('\n');
        push_indent(depth + 1, out);
        write_value(value, depth + 1, out);
    }
    out.push('\n');
    push_indent(depth, out);
    out.push(']');
}

/// Format a float so the int/float distinction survives a round trip: a
/// zero fractional part gets a `.0` suffix, everything else prints its
/// natural decimal form. Values too large for an exact `i64` fall back to
/// plain display.
fn format_float(x: f64) -> String {
    if x.fract() == 0.0 && x.is_finite() && x.abs() < i64::MAX as f64 {
        format!("{}.0", x as i64)
    } else {
        format!("{x}")
    }
}

fn push_indent(depth: usize, out: &mut String) {
    for _ in 0..depth * INDENT_SIZE {
        out.push(' ');
    }
}
