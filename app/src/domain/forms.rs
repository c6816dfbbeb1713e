//! Form states for the insert screens and their conversion into records.
//!
//! Every field is held as the raw text the user typed. Forms are replaced
//! wholesale on each edit, so views build a modified copy and hand it to
//! [`InsertController::update_form`](super::InsertController::update_form).

use std::fmt;

use chrono::NaiveDate;
use shared::{format_transaction_date, Asset, Category, Transaction};

use crate::error::ConversionError;

/// One validated input of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField<'a> {
    /// Stable identifier, the form struct's field name
    pub key: &'static str,
    /// Human-readable name used in error messages
    pub label: &'static str,
    pub value: &'a str,
}

/// A text form that can be validated and turned into a record
pub trait EntryForm: Clone + Default + fmt::Debug + Send + Sync + 'static {
    type Record: fmt::Debug + Send + Sync + 'static;

    /// The required fields, in display order
    fn fields(&self) -> Vec<FormField<'_>>;

    /// Build the record sent to the repository
    fn to_record(&self) -> Result<Self::Record, ConversionError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryForm {
    pub category_name: String,
}

impl EntryForm for CategoryForm {
    type Record = Category;

    fn fields(&self) -> Vec<FormField<'_>> {
        vec![FormField {
            key: "category_name",
            label: "Category name",
            value: &self.category_name,
        }]
    }

    fn to_record(&self) -> Result<Category, ConversionError> {
        Ok(Category {
            id: None,
            name: self.category_name.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetForm {
    pub asset_name: String,
}

impl EntryForm for AssetForm {
    type Record = Asset;

    fn fields(&self) -> Vec<FormField<'_>> {
        vec![FormField {
            key: "asset_name",
            label: "Asset name",
            value: &self.asset_name,
        }]
    }

    fn to_record(&self) -> Result<Asset, ConversionError> {
        Ok(Asset {
            id: None,
            name: self.asset_name.clone(),
        })
    }
}

/// Income and expense entry form.
///
/// `category_id` and `asset_id` hold the id picked from the reference lists,
/// as text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionForm {
    pub total: String,
    pub category_id: String,
    pub asset_id: String,
    pub transaction_date: String,
    pub note: String,
}

impl TransactionForm {
    /// Copy of this form with the date set from a date picker
    pub fn with_transaction_date(mut self, date: NaiveDate) -> Self {
        self.transaction_date = format_transaction_date(date);
        self
    }
}

impl EntryForm for TransactionForm {
    type Record = Transaction;

    fn fields(&self) -> Vec<FormField<'_>> {
        vec![
            FormField { key: "total", label: "Total", value: &self.total },
            FormField { key: "category_id", label: "Category", value: &self.category_id },
            FormField { key: "asset_id", label: "Asset", value: &self.asset_id },
            FormField {
                key: "transaction_date",
                label: "Transaction date",
                value: &self.transaction_date,
            },
            FormField { key: "note", label: "Note", value: &self.note },
        ]
    }

    fn to_record(&self) -> Result<Transaction, ConversionError> {
        Ok(Transaction {
            total: parse_amount(&self.total)?,
            category_id: parse_id(&self.category_id),
            asset_id: parse_id(&self.asset_id),
            transaction_date: self.transaction_date.clone(),
            note: self.note.clone(),
        })
    }
}

/// Identifier fields fall back to 0 when they are not integers
fn parse_id(value: &str) -> i32 {
    value.parse().unwrap_or(0)
}

fn parse_amount(value: &str) -> Result<f64, ConversionError> {
    let amount: f64 = value
        .trim()
        .parse()
        .map_err(|source| ConversionError::InvalidAmount {
            value: value.to_string(),
            source,
        })?;

    if !amount.is_finite() {
        return Err(ConversionError::NonFiniteAmount {
            value: value.to_string(),
        });
    }
    Ok(amount)
}
