use thiserror::Error;

/// Rejection reasons for a single player action. Every variant maps to a
/// NACK on the wire and leaves the game state untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("seat {seat} out of range for a {seats}-seat table")]
    SeatOutOfRange { seat: usize, seats: usize },
    #[error("seat {seat} acted out of turn (seat {expected} to act)")]
    OutOfTurn { seat: usize, expected: usize },
    #[error("action not allowed at this point in the hand")]
    UnexpectedAction,
    #[error("cannot check while {required} chips behind the table bet")]
    CheckFacingBet { required: u32 },
    #[error("insufficient chips: have {stack}, need {required}")]
    InsufficientChips { stack: u32, required: u32 },
    #[error("raise amount must be positive, got {amount}")]
    NonPositiveRaise { amount: i32 },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("table has halted")]
    Halted,
}
