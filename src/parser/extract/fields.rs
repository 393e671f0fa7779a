use std::sync::LazyLock;

use regex::Regex;

use crate::record::FieldSet;
use crate::vocab::{FieldKey, Vocabulary};

static YEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"¥\s*([0-9,]+)").unwrap());

/// Resolve a `FieldSet` from one window of lines: a single forward pass
/// where each label keyword takes its value from the immediately following
/// line, first occurrence wins, and marker phrases are counted. Malformed
/// values leave the field absent; nothing here ever fails.
pub fn resolve(window: &[String], vocab: &Vocabulary) -> FieldSet {
    let mut fields = FieldSet::default();
    let mut i = 0;

    while i < window.len() {
        let line = &window[i];

        // Label keyword: value is on the next line. The pair is consumed
        // even when the field is already set, so a repeated label's value
        // line cannot be misread as something else.
        if let Some(key) = vocab.field_key(line) {
            if let Some(value) = window.get(i + 1) {
                match key {
                    FieldKey::Price => {
                        fields.price = fields.price.or_else(|| parse_amount(value));
                    }
                    FieldKey::Stock => {
                        fields.stock = fields.stock.or_else(|| parse_count(value));
                    }
                    FieldKey::UnitsSold => {
                        fields.units_sold = fields.units_sold.or_else(|| parse_count(value));
                    }
                    FieldKey::Revenue => {
                        fields.revenue = fields.revenue.or_else(|| parse_amount(value));
                    }
                }
                i += 2;
            } else {
                i += 1;
            }
            continue;
        }

        // Bare number directly before an unshipped marker: the count of
        // pending restock-notification emails. Distinct from the marker
        // count itself.
        if is_bare_number(line) && window.get(i + 1).is_some_and(|next| vocab.is_unshipped(next)) {
            fields.backorder_emails = fields.backorder_emails.or_else(|| line.parse().ok());
            fields.unshipped += 1;
            i += 2;
            continue;
        }

        if vocab.is_unshipped(line) {
            fields.unshipped += 1;
            i += 1;
            continue;
        }

        if vocab.is_payment_pending(line) {
            fields.payment_pending += 1;
            i += 1;
            continue;
        }

        // Anything else (including a bare number with no unshipped marker
        // after it) is noise within the window.
        i += 1;
    }

    fields
}

/// Currency amount: "¥ 2,500" → 2500; a plain numeral with separators
/// stripped also parses; anything else is absent.
fn parse_amount(line: &str) -> Option<i64> {
    if let Some(caps) = YEN_RE.captures(line) {
        return caps[1].replace(',', "").parse().ok();
    }
    line.replace(',', "").parse().ok()
}

fn parse_count(line: &str) -> Option<i64> {
    line.parse().ok()
}

fn is_bare_number(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c.is_ascii_digit())
}

// ── Tests ──
