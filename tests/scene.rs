use skydive::consts::*;
use skydive::sim::{Entity, ManualClock, Rect, Scene, SpriteKind};
use skydive::{Flow, FlowView, InputEvent, Key};

const STEP: f64 = 1.0 / 30.0;

fn scripted_event(i: usize) -> Option<InputEvent> {
    match i % 11 {
        0 | 1 | 2 => Some(InputEvent::KeyDown(Key::Right)),
        5 | 6 => Some(InputEvent::KeyDown(Key::Left)),
        9 => Some(InputEvent::KeyDown(Key::Other)),
        _ => None,
    }
}

#[test]
fn long_run_keeps_invariants() {
    let clock = ManualClock::new(1_700_000_000.0);
    let mut scene = Scene::with_clock(800, 600, 2024, clock.clone());
    let mut last_score = 0;
    let mut cloud_seen_visible = [false; CLOUD_COUNT];

    for i in 0..3_000 {
        clock.advance(STEP);
        scene.step(scripted_event(i));

        let state = scene.state();
        assert!(state.score() >= last_score);
        last_score = state.score();
        assert!(state.chain_expire() >= state.now());
        let m = state.chain_multiplier();
        assert!((MIN_MULTIPLIER..=MAX_MULTIPLIER).contains(&m));

        // Viewport never changes size, only scrolls horizontally
        assert_eq!(state.viewport.top(), 0);
        assert_eq!((state.viewport.width, state.viewport.height), (800, 600));

        for (seen, cloud) in cloud_seen_visible.iter_mut().zip(scene.clouds()) {
            *seen |= cloud.is_visible();
            assert!((1..=CLOUD_MAX_SPEED).contains(&cloud.velocity_x().abs()));
        }
        assert!(scene.coins().iter().all(|c| c.is_visible()));
    }

    // 100 seconds of play spans 13 waves (one starts on the first step)
    assert_eq!(scene.state().wave(), 13);
    assert!(cloud_seen_visible.iter().all(|&v| v));
}

#[test]
fn same_seed_and_inputs_replay_identically() {
    let run = |seed: u64| {
        let clock = ManualClock::new(500.0);
        let mut scene = Scene::with_clock(640, 480, seed, clock.clone());
        let mut reports = Vec::new();
        for i in 0..600 {
            clock.advance(STEP);
            reports.push(scene.step(scripted_event(i)));
        }
        (reports, scene.snapshot())
    };

    let (reports_a, snap_a) = run(77);
    let (reports_b, snap_b) = run(77);
    assert_eq!(reports_a, reports_b);
    assert_eq!(snap_a, snap_b);

    let (_, snap_c) = run(78);
    assert_ne!(snap_a.sprites, snap_c.sprites);
}

#[test]
fn viewport_pursues_a_drifting_diver() {
    let clock = ManualClock::new(10.0);
    let mut scene = Scene::with_clock(800, 600, 5, clock.clone());

    for _ in 0..200 {
        clock.advance(STEP);
        scene.step(Some(InputEvent::KeyDown(Key::Left)));
    }

    let viewport = scene.state().viewport;
    assert!(viewport.left() < 0);
    // The diver is always kept within reach of the camera
    let diver = scene.diver().rect();
    assert!(diver.right() > viewport.left() - 2 * diver.width as i32);
    assert!(diver.left() < viewport.right() + 2 * diver.width as i32);
}

#[test]
fn snapshot_exposes_everything_for_drawing() {
    let clock = ManualClock::new(10.0);
    let mut scene = Scene::with_clock(800, 600, 5, clock.clone());
    clock.advance(STEP);
    scene.step(None);

    let snap = scene.snapshot();
    let count = |kind| snap.sprites.iter().filter(|s| s.kind == kind).count();
    assert_eq!(count(SpriteKind::Coin), COIN_COUNT);
    assert_eq!(count(SpriteKind::Cloud), CLOUD_COUNT);
    assert_eq!(count(SpriteKind::Diver), 1);
    assert_eq!(snap.viewport, scene.state().viewport);
    assert_eq!(snap.score, 0);
    assert_eq!(snap.multiplier, 1.0);
    assert_eq!(snap.wave_duration, WAVE_DURATION);
    assert!(snap.drawable().any(|s| s.kind == SpriteKind::Diver));
    assert_eq!(
        snap.diver().map(|d| d.rect),
        Some(scene.diver().rect())
    );
    assert_ne!(snap.diver().map(|d| d.rect), Some(Rect::default()));
}

#[test]
fn flow_runs_intro_then_game() {
    let clock = ManualClock::new(0.0);
    let mut flow = Flow::with_intro(800, 600, 9, clock.clone());

    let mut frames_in_intro = 0;
    while !flow.is_playing() {
        clock.advance(STEP);
        if flow.step(None).is_none() {
            frames_in_intro += 1;
        }
        assert!(frames_in_intro < 200, "intro never ended");
    }
    // About five seconds at 30 steps per second
    assert!((148..=151).contains(&frames_in_intro));
    assert!(matches!(flow.view(), FlowView::Game(_)));
}
