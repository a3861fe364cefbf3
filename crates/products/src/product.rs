use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, RecordId};

/// Product identifier (assigned by the store on insert).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub RecordId);

impl ProductId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }

    pub fn get(&self) -> i64 {
        self.0.get()
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self(RecordId::new(value))
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<RecordId>().map(Self)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// The mutable part of a product, as supplied by a caller on create/update.
///
/// Any `id` (or other unknown field) present in the JSON is ignored; the
/// store owns identity.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, quantity: i32, price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
        }
    }

    /// Decode a request body.
    ///
    /// The body must be a JSON object carrying `name` (string), `quantity`
    /// (integer) and `price` (number).
    pub fn from_json(body: &[u8]) -> DomainResult<Self> {
        let value: serde_json::Value =
            serde_json::from_slice(body).map_err(|e| DomainError::validation(e.to_string()))?;
        if !value.is_object() {
            return Err(DomainError::validation("request body must be a JSON object"));
        }
        serde_json::from_value(value).map_err(|e| DomainError::validation(e.to_string()))
    }
}

/// A stored product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

impl Product {
    /// Attach a store-assigned id to a draft.
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            quantity: draft.quantity,
            price: draft.price,
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
