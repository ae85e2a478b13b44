mod support;

use checkers_sync::animator::{Phase, STEP_DELAY};
use checkers_sync::{BoardRenderer, Board, Color, MoveStep, Piece, ReplayAnimator};
use support::{sq, Op, RecordingRenderer};
use tokio::time::Instant;

fn renderer_with(board: &Board) -> RecordingRenderer {
    let mut renderer = RecordingRenderer::default();
    renderer.render(Some(board), Some(Color::Red));
    renderer.ops.clear();
    renderer
}

/// Drive the animator to completion, one transition per deadline.
fn play_out(animator: &mut ReplayAnimator, renderer: &mut RecordingRenderer) -> usize {
    let mut transitions = 0;
    while let Some(deadline) = animator.deadline() {
        animator.advance(deadline, renderer);
        transitions += 1;
    }
    transitions
}

#[test]
fn multi_jump_relocates_each_step_in_order_then_renders_once() {
    let start = Board::with_pieces([
        (sq(0, 1), Piece::man(Color::Black)),
        (sq(1, 2), Piece::man(Color::Red)),
        (sq(3, 4), Piece::man(Color::Red)),
        (sq(5, 4), Piece::man(Color::Red)),
    ]);
    let end = Board::with_pieces([(sq(6, 5), Piece::man(Color::Black))]);
    let steps = vec![
        MoveStep::new(sq(0, 1), sq(2, 3)),
        MoveStep::new(sq(2, 3), sq(4, 5)),
        MoveStep::new(sq(4, 5), sq(6, 5)),
    ];

    let mut renderer = renderer_with(&start);
    let mut animator = ReplayAnimator::new();
    animator.start(steps, end, Some(Color::Red), Instant::now(), &mut renderer);
    assert_eq!(play_out(&mut animator, &mut renderer), 6);

    assert_eq!(
        renderer.relocations(),
        [
            (sq(0, 1), sq(2, 3)),
            (sq(2, 3), sq(4, 5)),
            (sq(4, 5), sq(6, 5)),
        ]
    );
    assert_eq!(renderer.renders(), [&end]);
    assert_eq!(renderer.ops.last(), Some(&Op::Render(end)));
    assert_eq!(renderer.scene.pieces().len(), 1);
}

#[test]
fn each_step_waits_two_delays() {
    let start = Board::with_pieces([(sq(5, 0), Piece::man(Color::Red))]);
    let end = Board::with_pieces([(sq(3, 0), Piece::man(Color::Red))]);
    let steps = vec![
        MoveStep::new(sq(5, 0), sq(4, 1)),
        MoveStep::new(sq(4, 1), sq(3, 0)),
    ];
    let mut renderer = renderer_with(&start);
    let mut animator = ReplayAnimator::new();
    let t0 = Instant::now();
    animator.start(steps, end, None, t0, &mut renderer);

    assert_eq!(animator.deadline(), Some(t0 + STEP_DELAY));
    animator.advance(t0 + STEP_DELAY, &mut renderer);
    assert_eq!(animator.position(), Some((0, Phase::Landed)));
    animator.advance(t0 + STEP_DELAY * 2, &mut renderer);
    assert_eq!(animator.position(), Some((1, Phase::Lifted)));
    assert_eq!(animator.deadline(), Some(t0 + STEP_DELAY * 3));
    animator.advance(t0 + STEP_DELAY * 3, &mut renderer);
    animator.advance(t0 + STEP_DELAY * 4, &mut renderer);
    assert!(!animator.is_playing());
    assert_eq!(renderer.relocations().len(), 2);
}

#[test]
fn early_advance_does_nothing() {
    let start = Board::with_pieces([(sq(5, 0), Piece::man(Color::Red))]);
    let mut renderer = renderer_with(&start);
    let mut animator = ReplayAnimator::new();
    let t0 = Instant::now();
    animator.start(
        vec![MoveStep::new(sq(5, 0), sq(4, 1))],
        start,
        None,
        t0,
        &mut renderer,
    );
    let before = renderer.ops.len();
    animator.advance(t0, &mut renderer);
    assert_eq!(renderer.ops.len(), before);
}

#[test]
fn final_snapshot_overrides_visual_drift() {
    // The replay only moves the piece; the snapshot also drops the captured one.
    let start = Board::with_pieces([
        (sq(2, 1), Piece::man(Color::Black)),
        (sq(3, 2), Piece::man(Color::Red)),
    ]);
    let end = Board::with_pieces([(sq(4, 3), Piece::man(Color::Black))]);
    let mut renderer = renderer_with(&start);
    let mut animator = ReplayAnimator::new();
    animator.start(
        vec![MoveStep::new(sq(2, 1), sq(4, 3))],
        end,
        Some(Color::Red),
        Instant::now(),
        &mut renderer,
    );
    play_out(&mut animator, &mut renderer);

    let mut expected = support::RecordingRenderer::default();
    expected.render(Some(&end), Some(Color::Red));
    assert_eq!(renderer.scene.pieces(), expected.scene.pieces());
}

#[test]
fn cancel_renders_nothing() {
    let start = Board::with_pieces([(sq(5, 0), Piece::man(Color::Red))]);
    let mut renderer = renderer_with(&start);
    let mut animator = ReplayAnimator::new();
    let t0 = Instant::now();
    animator.start(
        vec![MoveStep::new(sq(5, 0), sq(4, 1))],
        start,
        None,
        t0,
        &mut renderer,
    );
    animator.cancel();
    animator.advance(t0 + STEP_DELAY * 4, &mut renderer);
    assert!(renderer.renders().is_empty());
    assert!(renderer.relocations().is_empty());
}
