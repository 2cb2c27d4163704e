//! Renderer module — turn extracted records into YAML documents.
//!
//! Output is assembled line by line rather than through a serializer so the
//! layout (comment header, blank separators, field order) stays fixed.

pub mod callback;
pub mod class;

use crate::config::OUTPUT_EXTENSION;
use crate::model::Member;

/// Trait for rendering one kind of record into text.
pub trait Renderer {
    type Record;

    fn render(&self, record: &Self::Record) -> String;

    fn file_extension(&self) -> &str {
        OUTPUT_EXTENSION
    }
}

/// Own members first, then inherited ones, each group in source order.
pub fn own_then_inherited<M: Member>(members: &[M]) -> impl Iterator<Item = &M> {
    let own = members.iter().filter(|m| !m.is_inherited());
    let inherited = members.iter().filter(|m| m.is_inherited());
    own.chain(inherited)
}

/// Join rendered lines into a document with a trailing newline.
fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
