use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Invalid message to consume")]
    InvalidMessageToConsume,

    #[error("No message to cancel")]
    NoMessageToCancel,

    #[error("Message cancellation not requested")]
    CancellationNotRequested,

    #[error("Message cancellation not allowed yet: cancellable at {cancellable_at}")]
    CancellationNotAllowedYet { cancellable_at: u64 },
}
