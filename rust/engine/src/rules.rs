use crate::errors::ActionError;
use crate::protocol::ClientAction;
use crate::state::{GameState, SeatStatus};

/// Validates and applies one betting action against the table state.
///
/// Preconditions (seat range, turn order, action kind) are checked before
/// any rule, and every rule is checked before any mutation, so an `Err`
/// always leaves the state exactly as it was. Turn advancement is the round
/// controller's job, not this function's.
///
/// # Errors
///
/// Returns the [`ActionError`] naming the first violated rule:
/// - [`ActionError::SeatOutOfRange`] / [`ActionError::OutOfTurn`] — protocol
///   violations, the action never reached rule checks.
/// - [`ActionError::UnexpectedAction`] — JOIN/READY/LEAVE passed in as a
///   betting action.
/// - [`ActionError::CheckFacingBet`] — CHECK while behind the table bet.
/// - [`ActionError::InsufficientChips`] — CALL or RAISE the stack cannot cover.
/// - [`ActionError::NonPositiveRaise`] — RAISE of zero or less.
pub fn apply_action(
    state: &mut GameState,
    seat: usize,
    action: &ClientAction,
) -> Result<(), ActionError> {
    if seat >= state.seats.len() {
        return Err(ActionError::SeatOutOfRange {
            seat,
            seats: state.seats.len(),
        });
    }
    if seat != state.current_seat {
        return Err(ActionError::OutOfTurn {
            seat,
            expected: state.current_seat,
        });
    }

    match *action {
        ClientAction::Check => {
            let behind = state.highest_bet.saturating_sub(state.seats[seat].bet);
            if behind != 0 {
                return Err(ActionError::CheckFacingBet { required: behind });
            }
            Ok(())
        }
        ClientAction::Call => {
            let to_call = state.highest_bet.saturating_sub(state.seats[seat].bet);
            if state.seats[seat].stack < to_call {
                return Err(ActionError::InsufficientChips {
                    stack: state.seats[seat].stack,
                    required: to_call,
                });
            }
            let s = &mut state.seats[seat];
            s.stack -= to_call;
            s.bet += to_call;
            state.pot += to_call;
            Ok(())
        }
        ClientAction::Raise(amount) => {
            if amount <= 0 {
                return Err(ActionError::NonPositiveRaise { amount });
            }
            let amount = amount as u32;
            let to_call = state.highest_bet.saturating_sub(state.seats[seat].bet) + amount;
            if state.seats[seat].stack < to_call {
                return Err(ActionError::InsufficientChips {
                    stack: state.seats[seat].stack,
                    required: to_call,
                });
            }
            let s = &mut state.seats[seat];
            s.stack -= to_call;
            s.bet += to_call;
            state.highest_bet += amount;
            state.pot += to_call;
            Ok(())
        }
        ClientAction::Fold => {
            state.seats[seat].status = SeatStatus::Folded;
            Ok(())
        }
        ClientAction::Join | ClientAction::Ready | ClientAction::Leave => {
            Err(ActionError::UnexpectedAction)
        }
    }
}
