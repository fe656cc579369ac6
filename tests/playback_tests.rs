// Integration tests for the playback engine

use hanoitty::playback::{
    Player, SessionError, DEFAULT_SPEED, MAX_DISKS, MIN_DISKS, SPEED_PRESETS,
};
use hanoitty::puzzle::{Board, Disk};
use std::time::{Duration, Instant};

#[test]
fn test_new_session_starts_at_rest() {
    let player = Player::new(3).unwrap();

    assert_eq!(player.disk_count(), 3);
    assert_eq!(player.move_index(), 0);
    assert_eq!(player.total_moves(), 7);
    assert!(!player.is_playing());
    assert!(!player.is_finished());
    assert_eq!(player.speed(), DEFAULT_SPEED);
    assert_eq!(player.progress_percent(), 0);
    assert_eq!(player.elapsed(Instant::now()), Duration::ZERO);
}

#[test]
fn test_rejects_out_of_range_disk_counts() {
    assert!(matches!(
        Player::new(0),
        Err(SessionError::DiskCountOutOfRange { requested: 0, .. })
    ));
    assert!(matches!(
        Player::new(MAX_DISKS + 1),
        Err(SessionError::DiskCountOutOfRange { .. })
    ));
}

#[test]
fn test_engine_accepts_full_range() {
    for n in [MIN_DISKS, MAX_DISKS] {
        let player = Player::new(n).unwrap();
        assert_eq!(player.total_moves(), (1 << n) - 1);
    }
}

#[test]
fn test_step_forward_applies_planned_move() {
    let mut player = Player::new(3).unwrap();
    assert!(player.step_forward().unwrap());

    assert_eq!(player.move_index(), 1);
    // The 3-disk solution opens by carrying the smallest disk to rod C
    assert_eq!(player.board().rods()[2].top(), Some(Disk::new(1)));
}

#[test]
fn test_step_backward_mirrors_step_forward() {
    let mut player = Player::new(4).unwrap();

    for _ in 0..player.total_moves() {
        let before_board = player.board().clone();
        let before_index = player.move_index();

        assert!(player.step_forward().unwrap());
        assert!(player.step_backward().unwrap());

        assert_eq!(*player.board(), before_board);
        assert_eq!(player.move_index(), before_index);

        assert!(player.step_forward().unwrap());
    }

    assert!(player.is_finished());
}

#[test]
fn test_full_round_trip_restores_initial_state() {
    let mut player = Player::new(5).unwrap();
    let initial = player.board().clone();
    let total = player.total_moves();

    for _ in 0..total {
        assert!(player.step_forward().unwrap());
    }
    assert!(player.is_finished());
    assert!(player.board().is_solved());
    assert_eq!(player.progress_percent(), 100);

    for _ in 0..total {
        assert!(player.step_backward().unwrap());
    }
    assert_eq!(*player.board(), initial);
    assert_eq!(player.move_index(), 0);

    // One more step back is a no-op
    assert!(!player.step_backward().unwrap());
}

#[test]
fn test_boundary_steps_are_no_ops() {
    let mut player = Player::new(1).unwrap();

    assert!(!player.step_backward().unwrap());
    assert!(player.step_forward().unwrap());
    assert!(!player.step_forward().unwrap());
    assert_eq!(player.move_index(), 1);

    // Play refuses to start at the end
    player.play(Instant::now());
    assert!(!player.is_playing());
}

// === SIMULATED TIME TESTS ===

#[test]
fn test_tick_applies_one_move_per_interval() {
    let t0 = Instant::now();
    let mut player = Player::new(3).unwrap();
    player.set_speed(Duration::from_millis(200), t0).unwrap();
    player.play(t0);
    assert!(player.is_playing());

    assert_eq!(player.tick(t0).unwrap(), 0);
    assert_eq!(player.tick(t0 + Duration::from_millis(199)).unwrap(), 0);
    assert_eq!(player.tick(t0 + Duration::from_millis(200)).unwrap(), 1);
    assert_eq!(player.move_index(), 1);
    assert_eq!(player.tick(t0 + Duration::from_millis(399)).unwrap(), 0);
    assert_eq!(player.tick(t0 + Duration::from_millis(400)).unwrap(), 1);
}

#[test]
fn test_playback_auto_pauses_at_the_end() {
    let t0 = Instant::now();
    let mut player = Player::new(3).unwrap();
    player.set_speed(Duration::from_millis(200), t0).unwrap();
    player.play(t0);

    // All seven 200ms deadlines fall within 1400ms
    let applied = player.tick(t0 + Duration::from_millis(1401)).unwrap();

    assert_eq!(applied, 7);
    assert_eq!(player.move_index(), 7);
    assert!(player.is_finished());
    assert!(!player.is_playing());
    assert!(player.board().is_solved());
}

#[test]
fn test_pause_freezes_the_clock() {
    let t0 = Instant::now();
    let mut player = Player::new(6).unwrap();
    player.play(t0);

    let t1 = t0 + Duration::from_secs(3);
    player.pause(t1);
    player.pause(t1); // safe to repeat
    assert!(!player.is_playing());

    // A long paused stretch adds nothing
    assert_eq!(
        player.elapsed(t0 + Duration::from_secs(100)),
        Duration::from_secs(3)
    );

    // Resuming accumulates from the resume point
    let t2 = t0 + Duration::from_secs(50);
    player.play(t2);
    assert_eq!(
        player.elapsed(t2 + Duration::from_secs(2)),
        Duration::from_secs(5)
    );
}

#[test]
fn test_reset_rewinds_everything() {
    let t0 = Instant::now();
    let mut player = Player::new(4).unwrap();
    player.play(t0);
    player.tick(t0 + Duration::from_secs(3)).unwrap();
    assert!(player.move_index() > 0);

    player.reset();

    assert!(!player.is_playing());
    assert_eq!(player.move_index(), 0);
    assert_eq!(*player.board(), Board::new(4));
    assert_eq!(player.elapsed(t0 + Duration::from_secs(60)), Duration::ZERO);

    // The old deadline chain is gone
    assert_eq!(player.tick(t0 + Duration::from_secs(60)).unwrap(), 0);
}

#[test]
fn test_disk_switch_mid_play_cancels_the_timer() {
    let t0 = Instant::now();
    let mut player = Player::new(3).unwrap();
    player.set_speed(Duration::from_millis(200), t0).unwrap();
    player.play(t0);
    player.tick(t0 + Duration::from_millis(400)).unwrap();
    assert!(player.is_playing());

    player.set_disk_count(5).unwrap();

    assert!(!player.is_playing());
    assert_eq!(player.disk_count(), 5);
    assert_eq!(player.move_index(), 0);
    assert_eq!(player.total_moves(), 31);
    assert_eq!(*player.board(), Board::new(5));
    // The speed setting survives the rebuild
    assert_eq!(player.speed(), Duration::from_millis(200));

    // No tick from the old configuration can land on the new board
    assert_eq!(player.tick(t0 + Duration::from_secs(10)).unwrap(), 0);
    assert_eq!(player.move_index(), 0);
    assert_eq!(player.elapsed(t0 + Duration::from_secs(10)), Duration::ZERO);
}

#[test]
fn test_failed_disk_switch_leaves_session_untouched() {
    let mut player = Player::new(3).unwrap();
    player.step_forward().unwrap();

    let err = player.set_disk_count(MAX_DISKS + 1).unwrap_err();

    assert!(matches!(err, SessionError::DiskCountOutOfRange { .. }));
    assert_eq!(player.disk_count(), 3);
    assert_eq!(player.move_index(), 1);
}

#[test]
fn test_speed_change_keeps_position_and_cadence() {
    let t0 = Instant::now();
    let mut player = Player::new(3).unwrap();
    player.play(t0);
    player.tick(t0 + Duration::from_millis(1000)).unwrap();
    assert_eq!(player.move_index(), 1);

    // The next fire lands one new interval after the change
    let changed_at = t0 + Duration::from_millis(1100);
    player
        .set_speed(Duration::from_millis(200), changed_at)
        .unwrap();

    assert_eq!(player.move_index(), 1);
    assert!(player.is_playing());
    assert_eq!(player.tick(t0 + Duration::from_millis(1299)).unwrap(), 0);
    assert_eq!(player.tick(t0 + Duration::from_millis(1300)).unwrap(), 1);
}

#[test]
fn test_rejects_zero_speed() {
    let t0 = Instant::now();
    let mut player = Player::new(3).unwrap();

    let err = player.set_speed(Duration::ZERO, t0).unwrap_err();

    assert_eq!(err, SessionError::ZeroSpeed);
    assert_eq!(player.speed(), DEFAULT_SPEED);
}

#[test]
fn test_progress_and_minimum_readouts() {
    let mut player = Player::new(3).unwrap();
    assert_eq!(player.minimum_moves(), 7);

    player.step_forward().unwrap();
    assert_eq!(player.progress_percent(), 14); // 1/7 rounds down

    for _ in 0..5 {
        player.step_forward().unwrap();
    }
    assert_eq!(player.progress_percent(), 86); // 6/7 rounds up
}

#[test]
fn test_presets_match_published_speeds() {
    let labels: Vec<&str> = SPEED_PRESETS.iter().map(|p| p.label).collect();
    assert_eq!(labels, vec!["Slow", "Medium", "Fast", "Very Fast"]);

    let millis: Vec<u128> = SPEED_PRESETS
        .iter()
        .map(|p| p.interval.as_millis())
        .collect();
    assert_eq!(millis, vec![2000, 1000, 500, 200]);
}

// === PROPERTY TESTS ===

mod invariants {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        StepForward,
        StepBackward,
        Play,
        Pause,
        Tick(u64),
        Reset,
        SetSpeed(u64),
        SetDiskCount(usize),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::StepForward),
            Just(Op::StepBackward),
            Just(Op::Play),
            Just(Op::Pause),
            (1u64..3000).prop_map(Op::Tick),
            Just(Op::Reset),
            (50u64..2500).prop_map(Op::SetSpeed),
            (1usize..=6).prop_map(Op::SetDiskCount),
        ]
    }

    proptest! {
        #[test]
        fn session_invariants_hold(ops in proptest::collection::vec(op_strategy(), 1..60)) {
            let mut now = Instant::now();
            let mut player = Player::new(4).unwrap();

            for op in ops {
                match op {
                    Op::StepForward => {
                        player.step_forward().unwrap();
                    }
                    Op::StepBackward => {
                        player.step_backward().unwrap();
                    }
                    Op::Play => player.play(now),
                    Op::Pause => player.pause(now),
                    Op::Tick(ms) => {
                        now += Duration::from_millis(ms);
                        player.tick(now).unwrap();
                    }
                    Op::Reset => player.reset(),
                    Op::SetSpeed(ms) => {
                        player.set_speed(Duration::from_millis(ms), now).unwrap();
                    }
                    Op::SetDiskCount(n) => {
                        player.set_disk_count(n).unwrap();
                    }
                }

                // Position stays within the move list
                prop_assert!(player.move_index() <= player.total_moves());

                // Every disk is accounted for
                let on_board: usize = player.board().rods().iter().map(|rod| rod.len()).sum();
                prop_assert_eq!(on_board, player.disk_count());

                // No disk ever rests on a smaller one
                for rod in player.board().rods() {
                    for pair in rod.disks().windows(2) {
                        prop_assert!(pair[0].size() > pair[1].size());
                    }
                }
            }
        }
    }
}
