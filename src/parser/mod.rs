pub mod extract;
pub mod segment;

use clap::ValueEnum;
use tracing::debug;

use crate::record::Record;
use crate::vocab::Vocabulary;

/// How payment-pending/unshipped markers are counted when a block has
/// several variations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CountPolicy {
    /// Count markers inside each variation's bounded window.
    PerVariation,
    /// Count markers once across the whole body and replicate the totals
    /// onto every record of the block.
    PerBlock,
}

#[derive(Debug, Clone)]
pub struct ParseOptions {
    pub count_policy: CountPolicy,
    /// Maximum lines scanned after a variation candidate.
    pub lookahead: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            count_policy: CountPolicy::PerVariation,
            lookahead: 20,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty or whitespace only")]
    EmptyInput,
}

/// Two-pass pipeline: raw pasted text → blocks → records.
///
/// Blank input is the only error; zero parsed records comes back as an
/// empty `Ok` list for the caller to report distinctly. The call is pure:
/// identical input always yields the identical record list.
pub fn parse_listing(
    text: &str,
    vocab: &Vocabulary,
    opts: &ParseOptions,
) -> Result<Vec<Record>, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let blocks = segment::split_blocks(text, vocab);
    debug!(blocks = blocks.len(), "segmented input");

    let records: Vec<Record> = blocks
        .iter()
        .flat_map(|b| extract::extract_block(b, vocab, opts))
        .collect();
    debug!(records = records.len(), "extracted records");

    Ok(records)
}

// ── Tests ──
