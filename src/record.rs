use serde::Serialize;

/// Publication status of a listing, from the block's marker line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Published,
    Unpublished,
    Draft,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Published => "published",
            Status::Unpublished => "unpublished",
            Status::Draft => "draft",
        }
    }
}

/// Numeric/currency/count values resolved for one record. Absent values
/// stay `None`; a failed parse never aborts the scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldSet {
    pub price: Option<i64>,
    pub stock: Option<i64>,
    pub units_sold: Option<i64>,
    pub revenue: Option<i64>,
    pub payment_pending: u32,
    pub unshipped: u32,
    pub backorder_emails: Option<i64>,
}

/// One output row: block header plus the variation (empty if the block had
/// none) plus its resolved fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub status: Status,
    pub base_name: String,
    pub variation: String,
    pub url: String,
    #[serde(flatten)]
    pub fields: FieldSet,
}

impl Record {
    pub const COLUMNS: [&'static str; 11] = [
        "status",
        "base_name",
        "variation",
        "url",
        "price",
        "stock",
        "units_sold",
        "revenue",
        "payment_pending",
        "unshipped",
        "backorder_emails",
    ];

    /// Fixed-column row for tabular export; absent values become empty cells.
    pub fn to_row(&self) -> Vec<String> {
        let opt = |v: Option<i64>| v.map(|n| n.to_string()).unwrap_or_default();
        vec![
            self.status.as_str().to_string(),
            self.base_name.clone(),
            self.variation.clone(),
            self.url.clone(),
            opt(self.fields.price),
            opt(self.fields.stock),
            opt(self.fields.units_sold),
            opt(self.fields.revenue),
            self.fields.payment_pending.to_string(),
            self.fields.unshipped.to_string(),
            opt(self.fields.backorder_emails),
        ]
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_matches_column_order() {
        let record = Record {
            status: Status::Published,
            base_name: "Widget A".into(),
            variation: String::new(),
            url: "https://x/y".into(),
            fields: FieldSet {
                price: Some(2500),
                stock: Some(5),
                units_sold: None,
                revenue: Some(30000),
                payment_pending: 1,
                unshipped: 2,
                backorder_emails: None,
            },
        };
        let row = record.to_row();
        assert_eq!(row.len(), Record::COLUMNS.len());
        assert_eq!(row[0], "published");
        assert_eq!(row[4], "2500");
        assert_eq!(row[6], "");
        assert_eq!(row[10], "");
    }

    #[test]
    fn json_flattens_fields() {
        let record = Record {
            status: Status::Draft,
            base_name: "Prototype".into(),
            variation: String::new(),
            url: String::new(),
            fields: FieldSet::default(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["status"], "draft");
        assert_eq!(json["price"], serde_json::Value::Null);
        assert_eq!(json["payment_pending"], 0);
    }
}
