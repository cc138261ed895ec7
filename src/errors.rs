use thiserror::Error;

/// Errors raised while turning user input into an [`Order`](crate::orders::Order).
///
/// The order itself never fails; only the input boundary does.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("invalid order id `{0}`: expected an integer or `null`")]
    InvalidId(String),
}
