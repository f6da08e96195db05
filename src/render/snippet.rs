//! Doc-commented enum variant blocks
//!
//! Every block has the same shape:
//!
//! ```text
//! /// <label>: <identifier>
//! ///
//! /// <description, one comment line per source line>
//! <Variant>,
//! ```

use crate::domain::{TraitRow, TypeRow};
use crate::utils::text::{comment_continuation, COMMENT_MARKER};
use std::io::{self, Write};

pub const TRAIT_LABEL: &str = "ID";
pub const TYPE_LABEL: &str = "Type";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit a `#[serde(rename = "...")]` attribute carrying the wire id.
    pub serde_rename: bool,
}

pub fn render_trait(row: &TraitRow, options: &RenderOptions) -> String {
    let rename = options.serde_rename.then_some(row.id.as_str());
    render_block(TRAIT_LABEL, &row.id, &row.description, &row.name, rename)
}

pub fn render_type(row: &TypeRow, options: &RenderOptions) -> String {
    let wire_id = options.serde_rename.then(|| row.wire_id());
    render_block(TYPE_LABEL, &row.identifier, &row.description, &row.display_name, wire_id.as_deref())
}

fn render_block(
    label: &str,
    identifier: &str,
    description: &str,
    variant: &str,
    rename: Option<&str>,
) -> String {
    let mut lines = vec![
        format!("{COMMENT_MARKER}{label}: {identifier}"),
        COMMENT_MARKER.to_string(),
        format!("{COMMENT_MARKER}{}", comment_continuation(description)),
    ];
    if let Some(wire_id) = rename {
        lines.push(format!("#[serde(rename = \"{wire_id}\")]"));
    }
    lines.push(format!("{variant},"));
    lines.join("\n")
}

/// Write each block followed by a newline, flushing as it goes.
pub fn write_blocks<W, I>(out: &mut W, blocks: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = String>,
{
    let mut written = 0;
    for block in blocks {
        writeln!(out, "{block}")?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}
