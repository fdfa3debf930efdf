use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Catalog entry. Names are unique across the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Item name, trimmed
    pub name: String,
    /// Item price
    pub price: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Price as sent by a client: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

impl PriceInput {
    /// A numeric zero, or empty/whitespace-only text, counts as "no price
    /// supplied". The text `"0"` is a real price.
    pub fn is_blank(&self) -> bool {
        match self {
            PriceInput::Number(n) => *n == 0.0,
            PriceInput::Text(text) => text.trim().is_empty(),
        }
    }

    /// Numeric value of the input, or `None` when it is not a finite number.
    ///
    /// Text is trimmed before parsing; `"2"` becomes `2.0`, `"1.2o"` fails.
    pub fn coerce(&self) -> Option<f64> {
        let value = match self {
            PriceInput::Number(n) => *n,
            PriceInput::Text(text) => text.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl fmt::Display for PriceInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceInput::Number(n) => write!(f, "{}", n),
            PriceInput::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for PriceInput {
    fn from(value: f64) -> Self {
        PriceInput::Number(value)
    }
}

impl From<&str> for PriceInput {
    fn from(value: &str) -> Self {
        PriceInput::Text(value.to_string())
    }
}

/// Body of `POST /items`
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<PriceInput>,
}

/// Body of `PATCH /items/{name}`; either field may be omitted
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<PriceInput>,
}

/// Validated field changes handed to the repository
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemChanges {
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl ItemChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemListResponse {
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddedResponse {
    pub added: Item,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemResponse {
    pub item: Item,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdatedResponse {
    pub updated: Item,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn deleted() -> Self {
        Self {
            message: "Deleted".to_string(),
        }
    }
}
