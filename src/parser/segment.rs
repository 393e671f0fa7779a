use crate::record::Status;
use crate::vocab::Vocabulary;

/// One base product's span of the pasted page: the status-marker line and
/// every following line up to the next marker. `lines[0]` is the marker.
#[derive(Debug, Clone)]
pub struct Block {
    pub status: Status,
    pub lines: Vec<String>,
}

/// Normalize raw text into trimmed, non-empty lines and split them into
/// per-product blocks at publication-status markers. Lines before the first
/// marker are page chrome and are discarded.
pub fn split_blocks(text: &str, vocab: &Vocabulary) -> Vec<Block> {
    let lines = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !vocab.is_noise(l));

    let mut blocks: Vec<Block> = Vec::new();
    let mut current: Option<Block> = None;

    for line in lines {
        if let Some(status) = vocab.status_of(line) {
            if let Some(done) = current.take() {
                blocks.push(done);
            }
            current = Some(Block {
                status,
                lines: vec![line.to_string()],
            });
        } else if let Some(block) = current.as_mut() {
            block.lines.push(line.to_string());
        }
    }

    if let Some(done) = current {
        blocks.push(done);
    }

    blocks
}

// ── Tests ──
