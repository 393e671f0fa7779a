use crate::record::Status;

/// Which field-label keyword a line matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    Price,
    Stock,
    UnitsSold,
    Revenue,
}

/// Every token class the parser matches against, kept as data so the
/// vocabulary can be extended without touching control flow.
///
/// The default covers the Japanese BOOTH item-management page and its
/// English rendering; both token sets are active at once so a page copied
/// from either locale parses with the same configuration.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Publication-status markers. Exact line equality starts a new block.
    pub status_markers: Vec<(String, Status)>,
    /// UI chrome dropped before classification. Exact line equality.
    pub noise_phrases: Vec<String>,
    pub price_labels: Vec<String>,
    pub stock_labels: Vec<String>,
    pub units_sold_labels: Vec<String>,
    pub revenue_labels: Vec<String>,
    /// Counted marker phrases, matched by prefix ("支払待ち – 1" style lines).
    pub payment_pending_markers: Vec<String>,
    /// Counted marker lines, matched exactly.
    pub unshipped_markers: Vec<String>,
    /// Substrings that identify a line as naming a variation: body-part
    /// names, named colors, size tokens. Single-letter sizes are
    /// whitespace-padded so they never match inside unrelated words.
    pub variation_terms: Vec<String>,
    /// A line starting with one of these is consumed as the reference URL.
    pub url_prefixes: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        let owned = |xs: &[&str]| xs.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Self {
            status_markers: vec![
                ("公開中".into(), Status::Published),
                ("非公開".into(), Status::Unpublished),
                ("下書き".into(), Status::Draft),
                ("published".into(), Status::Published),
                ("unpublished".into(), Status::Unpublished),
                ("draft".into(), Status::Draft),
            ],
            noise_phrases: owned(&[
                "商品管理",
                "商品登録商品リスト管理",
                "すべて下書き公開中非公開",
                "編集する",
                "支払済み –",
                "Manage items",
                "Item list",
                "Edit",
                "Paid –",
            ]),
            price_labels: owned(&["価格", "price"]),
            stock_labels: owned(&["在庫", "stock"]),
            units_sold_labels: owned(&["販売数", "units sold"]),
            revenue_labels: owned(&["売上金額", "revenue"]),
            payment_pending_markers: owned(&["支払待ち", "payment pending"]),
            unshipped_markers: owned(&["未発送", "unshipped"]),
            variation_terms: owned(&[
                // body parts (avatar outfit splits)
                "頭部", "上半身", "下半身", "尻尾", "髪",
                "head", "torso", "arms", "legs", "tail",
                // colors
                "黒", "白", "赤", "青", "桃",
                "Black", "White", "Red", "Blue", "Pink",
                // sizes
                "サイズ", " S ", " M ", " L ", "XL",
            ]),
            url_prefixes: owned(&["https://", "http://"]),
        }
    }
}

impl Vocabulary {
    pub fn status_of(&self, line: &str) -> Option<Status> {
        self.status_markers
            .iter()
            .find(|(token, _)| token == line)
            .map(|(_, status)| *status)
    }

    pub fn is_noise(&self, line: &str) -> bool {
        self.noise_phrases.iter().any(|p| p == line)
    }

    pub fn field_key(&self, line: &str) -> Option<FieldKey> {
        let hit = |labels: &[String]| labels.iter().any(|l| l == line);
        if hit(&self.price_labels) {
            Some(FieldKey::Price)
        } else if hit(&self.stock_labels) {
            Some(FieldKey::Stock)
        } else if hit(&self.units_sold_labels) {
            Some(FieldKey::UnitsSold)
        } else if hit(&self.revenue_labels) {
            Some(FieldKey::Revenue)
        } else {
            None
        }
    }

    pub fn is_payment_pending(&self, line: &str) -> bool {
        self.payment_pending_markers.iter().any(|m| line.starts_with(m.as_str()))
    }

    pub fn is_unshipped(&self, line: &str) -> bool {
        self.unshipped_markers.iter().any(|m| m == line)
    }

    pub fn is_variation(&self, line: &str) -> bool {
        self.variation_terms.iter().any(|t| line.contains(t.as_str()))
    }

    pub fn is_url(&self, line: &str) -> bool {
        self.url_prefixes.iter().any(|p| line.starts_with(p.as_str()))
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_markers_both_locales() {
        let v = Vocabulary::default();
        assert_eq!(v.status_of("公開中"), Some(Status::Published));
        assert_eq!(v.status_of("published"), Some(Status::Published));
        assert_eq!(v.status_of("非公開"), Some(Status::Unpublished));
        assert_eq!(v.status_of("下書き"), Some(Status::Draft));
        assert_eq!(v.status_of("公開中です"), None);
    }

    #[test]
    fn noise_is_exact_match_only() {
        let v = Vocabulary::default();
        assert!(v.is_noise("編集する"));
        assert!(v.is_noise("支払済み –"));
        assert!(!v.is_noise("編集する場合"));
    }

    #[test]
    fn field_keys() {
        let v = Vocabulary::default();
        assert_eq!(v.field_key("価格"), Some(FieldKey::Price));
        assert_eq!(v.field_key("stock"), Some(FieldKey::Stock));
        assert_eq!(v.field_key("販売数"), Some(FieldKey::UnitsSold));
        assert_eq!(v.field_key("revenue"), Some(FieldKey::Revenue));
        assert_eq!(v.field_key("¥ 2,500"), None);
    }

    #[test]
    fn payment_pending_is_prefix_match() {
        let v = Vocabulary::default();
        assert!(v.is_payment_pending("支払待ち – 1"));
        assert!(v.is_payment_pending("payment pending – 2"));
        assert!(!v.is_payment_pending("– 支払待ち"));
    }

    #[test]
    fn variation_membership() {
        let v = Vocabulary::default();
        assert!(v.is_variation("上半身（黒）"));
        assert!(v.is_variation("Black"));
        assert!(v.is_variation("ゆったり M サイズ"));
        assert!(!v.is_variation("price"));
        assert!(!v.is_variation("¥ 2,500"));
        // padded single-letter sizes must not fire inside words
        assert!(!v.is_variation("Small batch"));
        assert!(!v.is_variation("units sold"));
    }

    #[test]
    fn url_prefixes() {
        let v = Vocabulary::default();
        assert!(v.is_url("https://booth.pm/ja/items/12345"));
        assert!(!v.is_url("booth.pm/ja/items/12345"));
    }
}
