//! Request and response payloads of the marketplace API. Login and signup
//! payloads carry passwords, so their `Debug` output is redacted and they
//! must never be logged.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum BookStatus {
    Pending,
    Approved,
    Rejected,
    Available,
    Sold,
    #[default]
    Unknown,
}

impl From<String> for BookStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => Self::Pending,
            "approved" => Self::Approved,
            "rejected" => Self::Rejected,
            "available" => Self::Available,
            "sold" => Self::Sold,
            _ => Self::Unknown,
        }
    }
}

impl BookStatus {
    /// Badge text, e.g. `Pending`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Available => "Available",
            Self::Sold => "Sold",
            Self::Unknown => "Unknown",
        }
    }
}

/// Seller as returned by the API: either a bare id or a populated account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SellerRef {
    Id(String),
    Account(Seller),
}

impl SellerRef {
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Id(_) => None,
            Self::Account(seller) => seller.username.as_deref(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub sold_quantity: u32,
    #[serde(default)]
    pub status: BookStatus,
    #[serde(default)]
    pub seller: Option<SellerRef>,
}

impl Book {
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.quantity > 0
    }

    /// Share of total units already sold, in `0.0..=1.0`.
    #[must_use]
    pub fn sold_ratio(&self) -> f64 {
        ratio(u64::from(self.sold_quantity), u64::from(self.quantity))
    }

    /// Case-insensitive match on title or author.
    #[must_use]
    pub fn matches(&self, search: &str) -> bool {
        let needle = search.trim().to_lowercase();
        needle.is_empty()
            || self.title.to_lowercase().contains(&needle)
            || self.author.to_lowercase().contains(&needle)
    }
}

/// Book reference inside a purchase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PurchasedBook {
    Id(String),
    Summary { title: String, author: String },
}

impl PurchasedBook {
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Summary { title, .. } => title,
        }
    }

    #[must_use]
    pub fn author(&self) -> Option<&str> {
        match self {
            Self::Id(_) => None,
            Self::Summary { author, .. } => Some(author),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    #[serde(rename = "_id")]
    pub id: String,
    pub book: PurchasedBook,
    pub quantity: u32,
    pub total_price: f64,
    pub purchase_date: String,
}

impl Purchase {
    /// Calendar date of the purchase, if the timestamp is RFC 3339.
    #[must_use]
    pub fn purchased_on(&self) -> Option<NaiveDate> {
        DateTime::parse_from_rfc3339(&self.purchase_date)
            .ok()
            .map(|timestamp| timestamp.date_naive())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdminStatistics {
    pub total_books: u64,
    pub available_books: u64,
    pub sold_books: u64,
    pub out_of_stock: u64,
    pub pending_books: u64,
    pub total_quantity: u64,
    pub total_sold_quantity: u64,
}

impl AdminStatistics {
    #[must_use]
    pub const fn total_units(&self) -> u64 {
        self.total_quantity.saturating_add(self.total_sold_quantity)
    }

    #[must_use]
    pub fn sold_ratio(&self) -> f64 {
        ratio(self.total_sold_quantity, self.total_quantity)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientStatistics {
    pub total_books: u64,
    pub pending_books: u64,
    pub approved_books: u64,
    pub rejected_books: u64,
    pub total_purchases: u64,
}

#[allow(clippy::cast_precision_loss)]
fn ratio(sold: u64, remaining: u64) -> f64 {
    let total = sold.saturating_add(remaining);
    if total == 0 {
        0.0
    } else {
        sold as f64 / total as f64
    }
}

#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

impl fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginResponse")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

#[derive(Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "adminSecret", skip_serializing_if = "Option::is_none")]
    pub admin_secret: Option<String>,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("admin_secret", &self.admin_secret.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub description: String,
    pub price: f64,
    pub quantity: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyRequest {
    pub quantity: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewAction {
    Approve,
    Reject,
}

impl ReviewAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }

    #[must_use]
    pub const fn past_tense(self) -> &'static str {
        match self {
            Self::Approve => "approved",
            Self::Reject => "rejected",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRequest {
    pub action: ReviewAction,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn book_decodes_populated_seller_and_defaults() -> Result<(), serde_json::Error> {
        let book: Book = serde_json::from_value(json!({
            "_id": "b1",
            "title": "Dune",
            "author": "Frank Herbert",
            "price": 12.5,
            "quantity": 3,
            "status": "pending",
            "seller": { "_id": "u1", "username": "paul" }
        }))?;

        assert_eq!(book.sold_quantity, 0);
        assert_eq!(book.description, "");
        assert_eq!(book.status, BookStatus::Pending);
        assert_eq!(book.seller.as_ref().and_then(SellerRef::username), Some("paul"));
        Ok(())
    }

    #[test]
    fn book_decodes_bare_seller_id_and_unknown_status() -> Result<(), serde_json::Error> {
        let book: Book = serde_json::from_value(json!({
            "_id": "b2",
            "title": "Emma",
            "author": "Jane Austen",
            "price": 4,
            "quantity": 0,
            "soldQuantity": 2,
            "status": "archived",
            "seller": "u2"
        }))?;

        assert_eq!(book.status, BookStatus::Unknown);
        assert_eq!(book.seller, Some(SellerRef::Id("u2".to_string())));
        assert!(!book.in_stock());
        assert!((book.sold_ratio() - 1.0).abs() < f64::EPSILON);
        Ok(())
    }

    #[test]
    fn sold_ratio_is_zero_without_units() {
        assert!(AdminStatistics::default().sold_ratio().abs() < f64::EPSILON);
        let stats = AdminStatistics {
            total_quantity: 30,
            total_sold_quantity: 10,
            ..AdminStatistics::default()
        };
        assert_eq!(stats.total_units(), 40);
        assert!((stats.sold_ratio() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn book_sold_ratio_counts_stock_and_sold_units() -> Result<(), serde_json::Error> {
        let book: Book = serde_json::from_value(json!({
            "_id": "b1",
            "title": "Dune",
            "author": "Frank Herbert",
            "price": 12.5,
            "quantity": 3,
            "soldQuantity": 1
        }))?;
        assert!((book.sold_ratio() - 0.25).abs() < f64::EPSILON);
        Ok(())
    }

    #[test]
    fn search_matches_title_or_author_case_insensitively() -> Result<(), serde_json::Error> {
        let book: Book = serde_json::from_value(json!({
            "_id": "b3", "title": "The Hobbit", "author": "J.R.R. Tolkien", "price": 9.99
        }))?;
        assert!(book.matches("hobbit"));
        assert!(book.matches("TOLKIEN"));
        assert!(book.matches("  "));
        assert!(!book.matches("dune"));
        Ok(())
    }

    #[test]
    fn purchase_date_renders_as_calendar_day() -> Result<(), serde_json::Error> {
        let purchase: Purchase = serde_json::from_value(json!({
            "_id": "p1",
            "book": { "title": "Dune", "author": "Frank Herbert" },
            "quantity": 2,
            "totalPrice": 25.0,
            "purchaseDate": "2024-03-09T17:45:00.000Z"
        }))?;
        assert_eq!(purchase.purchased_on(), NaiveDate::from_ymd_opt(2024, 3, 9));
        assert_eq!(purchase.book.title(), "Dune");
        Ok(())
    }

    #[test]
    fn statistics_default_missing_fields() -> Result<(), serde_json::Error> {
        let stats: ClientStatistics = serde_json::from_value(json!({ "totalBooks": 4 }))?;
        assert_eq!(stats.total_books, 4);
        assert_eq!(stats.total_purchases, 0);
        Ok(())
    }

    #[test]
    fn register_request_omits_admin_secret_for_clients() -> Result<(), serde_json::Error> {
        let request = RegisterRequest {
            username: "reader".to_string(),
            email: "reader@example.com".to_string(),
            password: "secret1".to_string(),
            admin_secret: None,
        };
        let value = serde_json::to_value(&request)?;
        assert!(value.get("adminSecret").is_none());
        assert!(!format!("{request:?}").contains("secret1"));
        Ok(())
    }

    #[test]
    fn review_action_wire_format() -> Result<(), serde_json::Error> {
        let body = serde_json::to_value(ReviewRequest {
            action: ReviewAction::Reject,
        })?;
        assert_eq!(body, json!({ "action": "reject" }));
        Ok(())
    }
}
