use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Item failures. The `Display` text is the exact message returned to clients.
#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Keyword 'name' and 'price' with values are required.")]
    MissingNameAndPrice,

    #[error("Keyword 'name' and a value are required.")]
    MissingName,

    #[error("Keyword 'price' and a value are required.")]
    MissingPrice,

    #[error("Item '{0}' not found.")]
    NotFound(String),

    #[error("Item '{name}' already exists with a price of {price}.")]
    DuplicateName { name: String, price: f64 },

    #[error(
        "Item name change from '{from}' to '{to}' is not allowed because an item named '{to}' already exists."
    )]
    NameCollision { from: String, to: String },

    #[error("Value '{0}' provided for 'price' is not a number. ")]
    InvalidNumber(String),

    #[error("Keyword 'name' and/or 'price' with values are required.")]
    NoOpUpdate,

    /// A create that failed after its name was known
    #[error("Item '{name}' NOT added: {source}")]
    NotAdded {
        name: String,
        source: Box<ItemError>,
    },

    /// An update that was rejected before anything was written
    #[error("ERROR: No changes were made to item '{name}'. {source}")]
    Unchanged {
        name: String,
        source: Box<ItemError>,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Coarse classification of [`ItemError`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemErrorKind {
    MissingField,
    NotFound,
    DuplicateName,
    InvalidNumber,
    NoOpUpdate,
    Internal,
}

impl ItemError {
    pub fn kind(&self) -> ItemErrorKind {
        match self {
            ItemError::MissingNameAndPrice | ItemError::MissingName | ItemError::MissingPrice => {
                ItemErrorKind::MissingField
            }
            ItemError::NotFound(_) => ItemErrorKind::NotFound,
            ItemError::DuplicateName { .. } | ItemError::NameCollision { .. } => {
                ItemErrorKind::DuplicateName
            }
            ItemError::InvalidNumber(_) => ItemErrorKind::InvalidNumber,
            ItemError::NoOpUpdate => ItemErrorKind::NoOpUpdate,
            ItemError::NotAdded { source, .. } | ItemError::Unchanged { source, .. } => {
                source.kind()
            }
            ItemError::Internal(_) => ItemErrorKind::Internal,
        }
    }

    /// Attach the "item was not added" context of a failed create.
    pub fn not_added(self, name: &str) -> Self {
        ItemError::NotAdded {
            name: name.to_string(),
            source: Box::new(self),
        }
    }

    /// Attach the "no changes were made" context of a failed update.
    pub fn unchanged(self, name: &str) -> Self {
        match self {
            ItemError::Unchanged { .. } => self,
            other => ItemError::Unchanged {
                name: name.to_string(),
                source: Box::new(other),
            },
        }
    }
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for standardized error responses.
///
/// Duplicate names are reported as 404, like missing items.
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        let message = err.to_string();
        match err.kind() {
            ItemErrorKind::MissingField
            | ItemErrorKind::InvalidNumber
            | ItemErrorKind::NoOpUpdate => AppError::BadRequest(message),
            ItemErrorKind::NotFound | ItemErrorKind::DuplicateName => AppError::NotFound(message),
            ItemErrorKind::Internal => AppError::InternalServerError(message),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
