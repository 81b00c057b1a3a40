// A document draft: the rows of an invoice, purchase order, debit note or
// sales return as the form holds them, plus the round-off toggle.
//
// Totals are never stored here. They are recomputed from the rows on every
// read, so adding, editing or removing a row is all it takes to change them.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::DocumentKind;
use crate::core::{lenient, AppError, Result};
use crate::modules::items::{ItemEdit, ItemFormatter, LineItem, Product};
use crate::modules::totals::{
    DocumentTotals, LineTotals, NoteTotals, RoundOffPolicy, TotalsAggregator, TotalsReport,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub kind: DocumentKind,

    #[serde(default, deserialize_with = "lenient::list")]
    pub items: Vec<LineItem>,

    #[serde(default, deserialize_with = "lenient::flag")]
    pub round_off: bool,
}

impl Document {
    pub fn new(kind: DocumentKind) -> Self {
        Self {
            kind,
            items: Vec::new(),
            round_off: false,
        }
    }

    /// Parse a document from the form's JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let document: Document = serde_json::from_str(json)?;
        info!(
            kind = %document.kind,
            items = document.items.len(),
            round_off = document.round_off,
            "Loaded document"
        );
        Ok(document)
    }

    /// Append an empty row; returns its key
    pub fn add_blank_item(&mut self, formatter: &ItemFormatter) -> String {
        self.push(formatter.blank_item(self.kind))
    }

    /// Give an empty draft its first blank row, as a new form opens with one.
    /// Returns the new row's key, or `None` when the draft already has rows.
    pub fn ensure_item(&mut self, formatter: &ItemFormatter) -> Option<String> {
        if !self.items.is_empty() {
            return None;
        }
        Some(self.add_blank_item(formatter))
    }

    /// Append a row for one unit of `product`; returns its key
    pub fn add_product(&mut self, formatter: &ItemFormatter, product: &Product) -> String {
        self.push(formatter.from_product(product, self.kind))
    }

    /// Apply a user edit to the row with `key` and recalculate it
    pub fn edit_item(&mut self, key: &str, edit: &ItemEdit) -> Result<()> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.key.as_deref() == Some(key))
            .ok_or_else(|| AppError::not_found(format!("line item {}", key)))?;

        item.apply_edit(edit);
        item.recalculate();
        debug!(key, "Edited line item");
        Ok(())
    }

    /// Remove the row with `key`, if present
    pub fn remove_item(&mut self, key: &str) -> Option<LineItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.key.as_deref() == Some(key))?;
        Some(self.items.remove(index))
    }

    pub fn set_round_off(&mut self, enabled: bool) {
        self.round_off = enabled;
    }

    /// Write calculated values back onto every row
    pub fn recalculate(&mut self) {
        for item in &mut self.items {
            item.recalculate();
        }
    }

    pub fn line_totals(&self) -> LineTotals {
        TotalsAggregator::aggregate(&self.items)
    }

    /// Totals with round-off applied, labelled for this document's kind
    pub fn totals(&self) -> TotalsReport {
        let totals = self.line_totals();
        let rounded = RoundOffPolicy::apply(totals.total, self.round_off);

        if self.kind.is_note() {
            TotalsReport::Note(NoteTotals::new(&totals, rounded))
        } else {
            TotalsReport::Document(DocumentTotals::new(&totals, rounded))
        }
    }

    fn push(&mut self, item: LineItem) -> String {
        let key = item.key.clone().unwrap_or_default();
        self.items.push(item);
        key
    }
}
