use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the business a document belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TradeSide {
    /// Priced from the catalog selling price
    Sales,
    /// Priced from the catalog purchase price
    Purchase,
}

/// Documents that carry line items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Invoice,
    /// Credit note
    SalesReturn,
    PurchaseOrder,
    /// Purchase return
    DebitNote,
}

impl DocumentKind {
    pub fn side(self) -> TradeSide {
        match self {
            DocumentKind::Invoice | DocumentKind::SalesReturn => TradeSide::Sales,
            DocumentKind::PurchaseOrder | DocumentKind::DebitNote => TradeSide::Purchase,
        }
    }

    /// Notes report totals as subTotal/totalTax/total; invoices and orders use
    /// taxableAmount/vat/TotalAmount.
    pub fn is_note(self) -> bool {
        matches!(self, DocumentKind::SalesReturn | DocumentKind::DebitNote)
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Invoice => write!(f, "invoice"),
            DocumentKind::SalesReturn => write!(f, "sales_return"),
            DocumentKind::PurchaseOrder => write!(f, "purchase_order"),
            DocumentKind::DebitNote => write!(f, "debit_note"),
        }
    }
}

impl std::str::FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "invoice" => Ok(DocumentKind::Invoice),
            "sales_return" | "credit_note" => Ok(DocumentKind::SalesReturn),
            "purchase_order" => Ok(DocumentKind::PurchaseOrder),
            "debit_note" => Ok(DocumentKind::DebitNote),
            _ => Err(format!("Invalid document kind: {}", s)),
        }
    }
}
