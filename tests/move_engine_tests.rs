//! Move engine integration tests on the standard board.

use rust_ur::board::Board;
use rust_ur::core::{GameState, PlayerId};
use rust_ur::pieces::{PieceId, PiecePosition, PieceRef};
use rust_ur::rules::{check_move, evaluate_move, has_any_legal_move, legal_moves, IllegalMove};

const PATH_LEN: u8 = 14;

fn piece(player: u8, id: u8) -> PieceRef {
    PieceRef::new(PlayerId(player), PieceId(id))
}

/// State with every piece finished except the ones placed.
fn sparse(placements: &[(PieceRef, PiecePosition)]) -> GameState {
    let mut state = GameState::standard(7);
    for player in PlayerId::all() {
        for id in 0..7 {
            state.place(PieceRef::new(player, PieceId(id)), PiecePosition::Finished);
        }
    }
    for &(piece, position) in placements {
        state.place(piece, position);
    }
    state
}

// =============================================================================
// Finishing Tests
// =============================================================================

#[test]
fn test_last_square_finishes_with_one() {
    let state = sparse(&[(piece(0, 0), PiecePosition::OnBoard(PATH_LEN - 1))]);

    let mv = evaluate_move(&state, piece(0, 0), 1).unwrap();
    assert!(mv.finishes());
    assert_eq!(mv.target_index(), None);
    assert_eq!(mv.target_square(), None);
    assert_eq!(mv.captures, None);
}

#[test]
fn test_last_square_overshoots_with_two() {
    let state = sparse(&[(piece(0, 0), PiecePosition::OnBoard(PATH_LEN - 1))]);

    assert_eq!(evaluate_move(&state, piece(0, 0), 2), None);
    assert!(!has_any_legal_move(&state, PlayerId::FIRST, 2));
}

#[test]
fn test_exact_distance_always_finishes() {
    for player in PlayerId::all() {
        for index in (PATH_LEN - 4)..PATH_LEN {
            let p = PieceRef::new(player, PieceId(0));
            let state = sparse(&[(p, PiecePosition::OnBoard(index))]);
            let exact = PATH_LEN - index;

            let mv = evaluate_move(&state, p, exact).unwrap();
            assert!(mv.finishes(), "index {index} with {exact} steps should finish");

            if exact < 4 {
                assert!(matches!(
                    check_move(&state, p, exact + 1),
                    Err(IllegalMove::Overshoot { excess: 1, .. })
                ));
            }
        }
    }
}

#[test]
fn test_targets_stay_on_path() {
    let state = GameState::standard(7);
    for player in PlayerId::all() {
        for index in 0..PATH_LEN {
            let mut state = state.clone();
            let p = PieceRef::new(player, PieceId(0));
            state.place(p, PiecePosition::OnBoard(index));
            for steps in 1..=4 {
                if let Some(mv) = evaluate_move(&state, p, steps) {
                    match mv.target_index() {
                        Some(target) => assert!(target < PATH_LEN),
                        None => assert_eq!(index + steps, PATH_LEN),
                    }
                }
            }
        }
    }
}

// =============================================================================
// Capture Tests
// =============================================================================

#[test]
fn test_capture_on_every_unprotected_shared_square() {
    let board = Board::standard();
    // Shared lane is indices 4..=11 for both players.
    for index in 4..=11u8 {
        let square = board.square_at(PlayerId::FIRST, index).unwrap();
        let state = sparse(&[
            (piece(0, 0), PiecePosition::OnBoard(index - 1)),
            (piece(1, 0), PiecePosition::OnBoard(index)),
        ]);

        let result = check_move(&state, piece(0, 0), 1);
        if square.flags().is_protected() {
            assert_eq!(
                result,
                Err(IllegalMove::Protected {
                    occupant: piece(1, 0),
                    square: square.id()
                })
            );
        } else {
            assert_eq!(result.unwrap().captures, Some(piece(1, 0)));
        }
    }
}

#[test]
fn test_only_fort_protects_in_shared_lane() {
    let board = Board::standard();
    let protected: Vec<u8> = (4..=11u8)
        .filter(|&i| board.square_at(PlayerId::FIRST, i).unwrap().flags().is_protected())
        .collect();
    assert_eq!(protected, vec![7]);
}

#[test]
fn test_private_squares_never_collide() {
    // Both players on their own index 2: no interaction at all.
    let state = sparse(&[
        (piece(0, 0), PiecePosition::OnBoard(1)),
        (piece(1, 0), PiecePosition::OnBoard(2)),
    ]);
    let mv = evaluate_move(&state, piece(0, 0), 1).unwrap();
    assert_eq!(mv.captures, None);
}

#[test]
fn test_entry_can_capture_nothing() {
    let state = sparse(&[
        (piece(0, 0), PiecePosition::InHand),
        (piece(1, 0), PiecePosition::OnBoard(0)),
    ]);
    let mv = evaluate_move(&state, piece(0, 0), 1).unwrap();
    assert!(mv.enters());
    assert_eq!(mv.captures, None);
}

#[test]
fn test_finished_opponent_is_not_captured() {
    let state = sparse(&[(piece(0, 0), PiecePosition::OnBoard(5))]);
    let mv = evaluate_move(&state, piece(0, 0), 1).unwrap();
    assert_eq!(mv.captures, None);
}

// =============================================================================
// Blocking Tests
// =============================================================================

#[test]
fn test_own_piece_blocks() {
    let state = sparse(&[
        (piece(0, 0), PiecePosition::OnBoard(4)),
        (piece(0, 1), PiecePosition::OnBoard(6)),
    ]);
    assert_eq!(
        check_move(&state, piece(0, 0), 2),
        Err(IllegalMove::OwnPiece {
            piece: piece(0, 0),
            blocker: piece(0, 1)
        })
    );
    assert_eq!(legal_moves(&state, PlayerId::FIRST, 2).len(), 1);
}

#[test]
fn test_jumping_over_pieces_is_allowed() {
    let state = sparse(&[
        (piece(0, 0), PiecePosition::OnBoard(4)),
        (piece(0, 1), PiecePosition::OnBoard(5)),
        (piece(1, 0), PiecePosition::OnBoard(6)),
    ]);
    let mv = evaluate_move(&state, piece(0, 0), 3).unwrap();
    assert_eq!(mv.target_index(), Some(7));
}

#[test]
fn test_zero_roll_never_moves() {
    let state = GameState::standard(7);
    for player in PlayerId::all() {
        assert!(!has_any_legal_move(&state, player, 0));
        assert!(legal_moves(&state, player, 0).is_empty());
    }
}

#[test]
fn test_fresh_board_every_roll_moves() {
    let state = GameState::standard(7);
    for steps in 1..=4 {
        assert_eq!(legal_moves(&state, PlayerId::SECOND, steps).len(), 7);
    }
}
