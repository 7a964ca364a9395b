//! Pure queries derived from a board.
//!
//! Nothing here mutates state. Transitions and lifecycle checks are built
//! from these, and drivers may call them directly for hints or highlighting.

use smallvec::SmallVec;
use tracing::instrument;

use super::tables::{adjacent, are_adjacent, mills_through, Mill};
use crate::core::{Board, MillFormation, MorrisConfig, Player, PlayerMap, Position};
use crate::error::RuleViolation;

/// Check whether `player` owns a complete line through `position`.
///
/// Returns every completed line (a slide or placement can close two at once);
/// `None` if no line through `position` is fully owned by `player`.
///
/// ```
/// use morris_engine::core::{Board, Player, Position};
/// use morris_engine::rules::check_mill_formation;
///
/// let at = |i| Position::new(i).unwrap();
/// let board: Board = [0, 1, 2].into_iter().map(|i| (at(i), Player::A)).collect();
///
/// let mill = check_mill_formation(&board, at(1), Player::A).unwrap();
/// assert_eq!(mill.positions.len(), 3);
/// assert!(check_mill_formation(&board, at(1), Player::B).is_none());
/// ```
#[instrument(level = "trace", skip(board))]
pub fn check_mill_formation(board: &Board, position: Position, player: Player) -> Option<MillFormation> {
    let mills: SmallVec<[Mill; 2]> = mills_through(position)
        .filter(|line| line.iter().all(|&p| board.is_owned_by(p, player)))
        .copied()
        .collect();

    if mills.is_empty() {
        None
    } else {
        Some(MillFormation::new(mills))
    }
}

/// Check if `player` has any piece with an empty neighbor.
#[instrument(level = "trace", skip(board))]
pub fn has_valid_moves(board: &Board, player: Player) -> bool {
    board
        .pieces_of(player)
        .any(|from| adjacent(from).iter().any(|&to| board.is_empty(to)))
}

/// Empty cells the piece at `from` can slide to.
#[must_use]
pub fn legal_destinations(board: &Board, from: Position) -> SmallVec<[Position; 4]> {
    adjacent(from)
        .iter()
        .copied()
        .filter(|&to| board.is_empty(to))
        .collect()
}

/// Validate a slide from `from` to `to`: the destination must be empty and
/// exactly one step away.
pub fn validate_move(board: &Board, from: Position, to: Position) -> Result<(), RuleViolation> {
    if !board.is_empty(to) {
        return Err(RuleViolation::Occupied(to));
    }
    if !are_adjacent(from, to) {
        return Err(RuleViolation::NotAdjacent { from, to });
    }
    Ok(())
}

/// Find the winner, if a player has been reduced to the losing threshold.
///
/// A count of zero never triggers a win, so an empty or sparsely placed board
/// is not mistaken for a finished game. Player A is checked first.
#[instrument(level = "trace", skip(board, config))]
pub fn check_win_condition(board: &Board, config: &MorrisConfig) -> Option<Player> {
    let threshold = usize::from(config.min_pieces_to_lose);
    Player::ALL
        .into_iter()
        .find(|&p| (1..=threshold).contains(&board.count(p)))
        .map(Player::opponent)
}

/// Check if both players have placed all their pieces.
#[must_use]
pub fn can_transition_to_moving(placed: &PlayerMap<u8>, config: &MorrisConfig) -> bool {
    placed.iter().all(|(_, &n)| n == config.max_pieces_per_player)
}
