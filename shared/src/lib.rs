use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used by the remote API for `tanggalTransaksi`
pub const TRANSACTION_DATE_FORMAT: &str = "%Y-%m-%d";

/// Spending or earning category, e.g. "Salary" or "Groceries"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Assigned by the server; absent on create
    #[serde(rename = "idKategori", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(rename = "namaKategori")]
    pub name: String,
}

/// A place money is held (cash, bank account, e-wallet)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Assigned by the server; absent on create
    #[serde(rename = "idAset", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(rename = "namaAset")]
    pub name: String,
}

/// One income or expense entry.
///
/// Income and expense share this shape on the wire; which one a record is
/// depends on the endpoint it is posted to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction amount
    pub total: f64,
    #[serde(rename = "idKategori")]
    pub category_id: i32,
    #[serde(rename = "idAset")]
    pub asset_id: i32,
    /// Date in `YYYY-MM-DD` form, passed through as entered
    #[serde(rename = "tanggalTransaksi")]
    pub transaction_date: String,
    #[serde(rename = "catatan")]
    pub note: String,
}

/// Envelope returned by the remote list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub status: bool,
    pub message: String,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    /// Unwrap the payload; an envelope with `status: false` yields no items
    pub fn into_data(self) -> Vec<T> {
        if self.status {
            self.data
        } else {
            Vec::new()
        }
    }
}

/// Format a picked date the way the remote API expects it
pub fn format_transaction_date(date: NaiveDate) -> String {
    date.format(TRANSACTION_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_uses_remote_field_names() {
        let transaction = Transaction {
            total: 5000.0,
            category_id: 2,
            asset_id: 1,
            transaction_date: "2024-01-01".to_string(),
            note: "salary".to_string(),
        };

        let json = serde_json::to_value(&transaction).unwrap();

        assert_eq!(json["total"], 5000.0);
        assert_eq!(json["idKategori"], 2);
        assert_eq!(json["idAset"], 1);
        assert_eq!(json["tanggalTransaksi"], "2024-01-01");
        assert_eq!(json["catatan"], "salary");
    }

    #[test]
    fn test_new_category_omits_id() {
        let category = Category { id: None, name: "Food".to_string() };

        let json = serde_json::to_string(&category).unwrap();

        assert_eq!(json, r#"{"namaKategori":"Food"}"#);
    }

    #[test]
    fn test_list_response_into_data() {
        let body = r#"{
            "status": true,
            "message": "ok",
            "data": [
                {"idAset": 1, "namaAset": "Wallet"},
                {"idAset": 2, "namaAset": "Bank"}
            ]
        }"#;

        let response: ListResponse<Asset> = serde_json::from_str(body).unwrap();
        let assets = response.into_data();

        assert_eq!(assets.len(), 2);
        assert_eq!(assets[1], Asset { id: Some(2), name: "Bank".to_string() });
    }

    #[test]
    fn test_failed_list_response_has_no_data() {
        let body = r#"{"status": false, "message": "No kategori data available"}"#;

        let response: ListResponse<Category> = serde_json::from_str(body).unwrap();

        assert!(!response.status);
        assert!(response.into_data().is_empty());
    }

    #[test]
    fn test_format_transaction_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(format_transaction_date(date), "2024-03-07");
    }
}
