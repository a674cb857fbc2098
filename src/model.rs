use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a transaction adds to or subtracts from the balance. The server
/// only ever produces these two values.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// A transaction record as served by the API. `id` is assigned by the server
/// and never changes; `amount` is always the positive magnitude, with the
/// direction carried by `kind`.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub date: DateTime<Utc>,
    pub category: String,
}

/// Outgoing payload for create and update calls. The server assigns or keeps
/// the id itself.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct TransactionDraft {
    pub title: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub date: DateTime<Utc>,
    pub category: String,
}

/// Replaces the record with `updated.id` in place, keeping order and length.
/// A response for an id no longer in the cache leaves the list untouched.
pub fn replace_by_id(transactions: &[Transaction], updated: &Transaction) -> Vec<Transaction> {
    transactions
        .iter()
        .map(|t| {
            if t.id == updated.id {
                updated.clone()
            } else {
                t.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(id: &str, title: &str, amount: f64) -> Transaction {
        Transaction {
            id: id.into(),
            title: title.into(),
            amount,
            kind: TransactionKind::Expense,
            date: Utc.with_ymd_and_hms(2024, 5, 15, 12, 0, 0).unwrap(),
            category: "Misc".into(),
        }
    }

    #[test]
    fn deserializes_server_record() {
        let json = r#"{
            "_id": "665f1c2a9b3e4d0012ab34cd",
            "title": "Rent",
            "amount": 1200.5,
            "type": "expense",
            "date": "2024-05-01T10:30:00.000Z",
            "category": "Housing"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.id, "665f1c2a9b3e4d0012ab34cd");
        assert_eq!(tx.kind, TransactionKind::Expense);
        assert_eq!(tx.amount, 1200.5);
        assert_eq!(tx.date.to_rfc3339(), "2024-05-01T10:30:00+00:00");
    }

    #[test]
    fn serializes_draft_with_wire_names() {
        let draft = TransactionDraft {
            title: "Salary".into(),
            amount: 3000.0,
            kind: TransactionKind::Income,
            date: Utc.with_ymd_and_hms(2024, 5, 15, 12, 0, 0).unwrap(),
            category: "Work".into(),
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["type"], "income");
        assert!(value.get("_id").is_none());
        assert!(value.get("id").is_none());
    }

    #[test]
    fn replace_by_id_swaps_matching_record() {
        let list = vec![record("a", "Coffee", 4.0), record("b", "Rent", 900.0)];
        let mut updated = record("b", "Rent (new lease)", 950.0);
        updated.kind = TransactionKind::Expense;
        let next = replace_by_id(&list, &updated);
        assert_eq!(next.len(), 2);
        assert_eq!(next[0].title, "Coffee");
        assert_eq!(next[1].title, "Rent (new lease)");
        assert_eq!(next[1].amount, 950.0);
    }

    #[test]
    fn replace_by_id_ignores_unknown_id() {
        let list = vec![record("a", "Coffee", 4.0)];
        let next = replace_by_id(&list, &record("zzz", "Ghost", 1.0));
        assert_eq!(next, list);
    }
}
