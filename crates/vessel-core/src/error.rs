use thiserror::Error;

/// Failure produced by a fallible middleware.
///
/// Middlewares registered through `use_try_middleware` may reject a candidate
/// value; the boxed error is handed back unchanged to the caller of `set`.
pub type MiddlewareError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The store has been closed; its value can no longer be replaced.
    #[error("store is closed")]
    Closed,

    /// A middleware rejected the candidate value. The current value is
    /// guaranteed unchanged.
    #[error("middleware rejected the value: {0}")]
    Middleware(MiddlewareError),
}
