pub mod fields;
pub mod header;
pub mod variations;

use crate::parser::segment::Block;
use crate::parser::{CountPolicy, ParseOptions};
use crate::record::Record;
use crate::vocab::Vocabulary;

/// Turn one block into its records: one per variation candidate, or exactly
/// one for the whole body when no candidate exists.
pub fn extract_block(block: &Block, vocab: &Vocabulary, opts: &ParseOptions) -> Vec<Record> {
    let (header, body) = header::split(block, vocab);

    let candidates = variations::candidates(body, vocab);
    if candidates.is_empty() {
        let fields = fields::resolve(body, vocab);
        return vec![Record {
            status: header.status,
            base_name: header.base_name,
            variation: String::new(),
            url: header.url,
            fields,
        }];
    }

    // Whole-body marker totals, replicated onto every record of the block
    // when the per-block counting policy is selected.
    let body_counts = match opts.count_policy {
        CountPolicy::PerVariation => None,
        CountPolicy::PerBlock => {
            let whole = fields::resolve(body, vocab);
            Some((whole.payment_pending, whole.unshipped, whole.backorder_emails))
        }
    };

    let windows = variations::windows(body.len(), &candidates, opts.lookahead);

    candidates
        .iter()
        .zip(windows)
        .map(|(&c, window)| {
            let mut fields = fields::resolve(&body[window], vocab);
            if let Some((pending, unshipped, backorder)) = body_counts {
                fields.payment_pending = pending;
                fields.unshipped = unshipped;
                fields.backorder_emails = backorder;
            }
            Record {
                status: header.status,
                base_name: header.base_name.clone(),
                variation: body[c].clone(),
                url: header.url.clone(),
                fields,
            }
        })
        .collect()
}

// ── Tests ──
