//! Shopping list domain types.

use crate::server::error::AppError;

/// One aggregated line of the shopping list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingListItem {
    pub name: String,
    pub measurement_unit: String,
    pub amount: i64,
}

/// Output format of the shopping list download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShoppingListFormat {
    #[default]
    Text,
    Pdf,
}

impl ShoppingListFormat {
    /// Parses the `format` query parameter; absent means plain text.
    pub fn from_param(value: Option<&str>) -> Result<Self, AppError> {
        match value.map(str::to_ascii_lowercase).as_deref() {
            None | Some("") | Some("txt") => Ok(Self::Text),
            Some("pdf") => Ok(Self::Pdf),
            Some(other) => Err(AppError::BadRequest(format!(
                "Unsupported shopping list format '{}', expected txt or pdf",
                other
            ))),
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Text => "text/plain; charset=utf-8",
            Self::Pdf => "application/pdf",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Text => "shopping_list.txt",
            Self::Pdf => "shopping_list.pdf",
        }
    }
}
