use thiserror::Error;

/// Errors from the JSON helpers.
#[derive(Debug, Error)]
pub enum ObjectsError {
    /// The value could not be serialized, or the text could not be parsed
    /// into the requested type.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from the ticket simulator.
///
/// Running out of change is not an error; it is reported as `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TicketError {
    /// A customer offered something other than a 25, 50 or 100 bill.
    #[error("invalid bill {0}, expected 25, 50 or 100")]
    InvalidDenomination(u32),
}
