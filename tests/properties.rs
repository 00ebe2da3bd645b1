//! Property-based tests over random games.

use chain_reaction::eval::Heuristic;
use chain_reaction::rules::{both_present, game_winner, winner};
use chain_reaction::{Board, Player};
use proptest::prelude::*;
use rand::prelude::*;

/// Strategy to generate a random game length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=80usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Boards reached by playing uniformly random legal moves from an empty grid,
/// stopping early once the game is decided.
fn random_game(seed: u64, num_moves: usize) -> Vec<Board> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new();
    let mut turn = Player::Red;
    let mut started = false;
    let mut boards = vec![board];

    for _ in 0..num_moves {
        let moves = board.legal_moves(turn);
        let Some(&pos) = moves.choose(&mut rng) else {
            break;
        };
        board = board.apply_move(turn, pos).unwrap();
        boards.push(board);

        started = started || both_present(&board);
        if game_winner(&board, started).is_some() {
            break;
        }
        turn = turn.opponent();
    }
    boards
}

proptest! {
    /// Property: every board produced by a move is stable, unless the
    /// cascade was cut off as an endless cycle
    #[test]
    fn prop_resolved_board_is_stable(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new();
        let mut turn = Player::Red;

        for _ in 0..num_moves {
            let moves = board.legal_moves(turn);
            let Some(&pos) = moves.choose(&mut rng) else {
                break;
            };
            let (next, reaction) = board.apply_move_traced(turn, pos).unwrap();

            if reaction.decided {
                prop_assert!(!next.is_stable());
                prop_assert!(next.total_orbs() > 0);
            } else {
                prop_assert!(next.is_stable());
            }
            board = next;
            turn = turn.opponent();
        }
    }

    /// Property: a move adds one orb and explosions only lose overload orbs
    #[test]
    fn prop_orbs_conserved_up_to_spill(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new();
        let mut turn = Player::Red;

        for _ in 0..num_moves {
            let moves = board.legal_moves(turn);
            let Some(&pos) = moves.choose(&mut rng) else {
                break;
            };
            let before = board.total_orbs();
            let (next, reaction) = board.apply_move_traced(turn, pos).unwrap();

            prop_assert_eq!(next.total_orbs(), before + 1 - reaction.spilled);
            prop_assert!(reaction.explosions == 0 || reaction.passes > 0);
            if winner(&next).is_some() && both_present(&board) {
                break;
            }
            board = next;
            turn = turn.opponent();
        }
    }

    /// Property: applying the same move to the same board gives the same result
    #[test]
    fn prop_apply_move_is_deterministic(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let boards = random_game(seed, num_moves);
        let board = *boards.last().unwrap();

        for player in [Player::Red, Player::Blue] {
            for pos in board.legal_moves(player) {
                let a = board.apply_move(player, pos).unwrap();
                let b = board.apply_move(player, pos).unwrap();
                prop_assert_eq!(a, b);
            }
        }
    }

    /// Property: at most one player can be the winner, and only without the other
    #[test]
    fn prop_winner_is_exclusive(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for board in random_game(seed, num_moves) {
            match winner(&board) {
                Some(player) => {
                    prop_assert!(board.has_player(player));
                    prop_assert!(!board.has_player(player.opponent()));
                }
                None => prop_assert!(
                    board.is_board_empty()
                        || (board.has_player(Player::Red) && board.has_player(Player::Blue))
                ),
            }
        }
    }

    /// Property: every heuristic scores the opponent's view as the negation
    #[test]
    fn prop_heuristics_are_antisymmetric(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for board in random_game(seed, num_moves) {
            for heuristic in Heuristic::ALL {
                let red = heuristic.evaluate(&board, Player::Red);
                let blue = heuristic.evaluate(&board, Player::Blue);
                prop_assert!((red + blue).abs() < 1e-9, "{} red {} blue {}", heuristic, red, blue);
            }
        }
    }
}
