use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored review row carries a category string no variant matches.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Review {id} has unknown category '{value}'")]
    UnknownCategory { id: i32, value: String },

    /// A stored review row carries a status label outside its category's label set.
    #[error("Review {id} has status '{value}' which is not valid for category {category}")]
    UnknownStatus {
        id: i32,
        category: String,
        value: String,
    },

    /// Stored payload JSON does not match the category's form.
    #[error("Failed to decode payload of review {id}: {source}")]
    MalformedPayload {
        /// Review the payload belongs to
        id: i32,
        /// The underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// Payload could not be encoded for storage.
    #[error("Failed to encode review payload: {0}")]
    PayloadEncode(#[source] serde_json::Error),
}
