#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("Cart is empty, nothing to send")]
    EmptyCart,
}

pub type DomainResult<T> = Result<T, DomainError>;
