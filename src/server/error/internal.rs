use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Hashing a new password or parsing a stored hash failed.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Building or serializing a PDF export failed.
    #[error("PDF rendering failed: {0}")]
    Pdf(String),

    /// A reference data file under `DATA_DIR` is not valid JSON of the expected shape.
    #[error("Failed to parse seed file '{path}': {source}")]
    SeedData {
        /// Path of the offending file
        path: String,
        /// The underlying parse error
        #[source]
        source: serde_json::Error,
    },
}

impl From<printpdf::Error> for InternalError {
    fn from(err: printpdf::Error) -> Self {
        Self::Pdf(format!("{:?}", err))
    }
}

impl From<argon2::password_hash::Error> for InternalError {
    fn from(err: argon2::password_hash::Error) -> Self {
        Self::PasswordHash(err.to_string())
    }
}
