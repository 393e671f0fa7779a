use crate::parser::segment::Block;
use crate::record::Status;
use crate::vocab::Vocabulary;

/// Metadata from the first lines of a block. Missing lines degrade to empty
/// fields; a short block is never an error.
#[derive(Debug, Clone)]
pub struct Header {
    pub status: Status,
    pub base_name: String,
    pub url: String,
}

/// Split a block into its header and body. The marker line carries the
/// status; the next line (if any) is the base product name; a URL-prefixed
/// third line is consumed as the reference URL, everything after forms the
/// body.
pub fn split<'a>(block: &'a Block, vocab: &Vocabulary) -> (Header, &'a [String]) {
    let base_name = block.lines.get(1).cloned().unwrap_or_default();

    let (url, body_start) = match block.lines.get(2) {
        Some(line) if vocab.is_url(line) => (line.clone(), 3),
        _ => (String::new(), 2),
    };

    let body = block.lines.get(body_start..).unwrap_or(&[]);

    (
        Header {
            status: block.status,
            base_name,
            url,
        },
        body,
    )
}

// ── Tests ──
