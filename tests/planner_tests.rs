// Integration tests for the move planner

use hanoitty::planner::{plan, rod_label, Move};
use hanoitty::puzzle::Board;

#[test]
fn test_full_replay_solves_every_size() {
    for n in 1..=12 {
        let moves = plan(n).unwrap();
        let mut board = Board::new(n);

        for (i, mv) in moves.iter().enumerate() {
            board
                .move_top(mv.from, mv.to)
                .unwrap_or_else(|e| panic!("move {} failed for {} disks: {}", i + 1, n, e));
        }

        assert!(board.is_solved(), "{} disks not solved", n);
        assert!(board.rods()[0].is_empty());
        assert!(board.rods()[1].is_empty());

        // Rod C holds every disk, largest at the bottom
        let sizes: Vec<usize> = board.rods()[2].disks().iter().map(|d| d.size()).collect();
        let expected: Vec<usize> = (1..=n).rev().collect();
        assert_eq!(sizes, expected);
    }
}

#[test]
fn test_plan_is_deterministic() {
    assert_eq!(plan(8).unwrap(), plan(8).unwrap());
}

#[test]
fn test_first_move_parity() {
    // Odd disk counts open toward the target rod, even counts toward the auxiliary
    for n in 1..=10 {
        let moves = plan(n).unwrap();
        let expected = if n % 2 == 1 {
            Move::new(0, 2)
        } else {
            Move::new(0, 1)
        };
        assert_eq!(moves[0], expected, "wrong opening move for {} disks", n);
    }
}

#[test]
fn test_moves_display_as_rod_letters() {
    assert_eq!(Move::new(0, 2).to_string(), "A → C");
    assert_eq!(Move::new(1, 0).to_string(), "B → A");
    assert_eq!(rod_label(2), 'C');
    assert_eq!(rod_label(9), '?');
}
