//! Book record model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A book in the inventory.
///
/// The `id` is assigned by whoever creates the record; the server neither
/// generates ids nor enforces uniqueness. Lookups return the first record
/// matching an id in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Caller-assigned opaque identifier
    pub id: String,
    /// Title, free text
    pub title: String,
    /// Author, free text
    pub author: String,
    /// Units available for checkout
    pub quantity: u32,
}

/// The demo catalog the service is seeded with when `inventory.seed_demo`
/// is enabled.
pub fn demo_catalog() -> Vec<Book> {
    vec![
        Book {
            id: "1".to_string(),
            title: "In Search of Lost Time".to_string(),
            author: "Marcel Proust".to_string(),
            quantity: 2,
        },
        Book {
            id: "2".to_string(),
            title: "The Great Gatsby".to_string(),
            author: "F. Scott Fitzgerald".to_string(),
            quantity: 20,
        },
        Book {
            id: "3".to_string(),
            title: "War and Peace".to_string(),
            author: "Leo Tolstoy".to_string(),
            quantity: 3,
        },
    ]
}
