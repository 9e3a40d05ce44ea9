//! Headless end-to-end runs of the menu <-> gameplay cycle

use glam::Vec2;

use mini_osu::app::AppState;
use mini_osu::consts::{HEIGHT, WIDTH};
use mini_osu::platform::{InputEvent, Key};
use mini_osu::renderer::{DrawList, Rasterizer};
use mini_osu::sim::{GameLoop, HitResult, LoopState, Session, SessionClock, Spawner, Target};
use mini_osu::{App, AppControl, Difficulty, Settings};

const FRAME: f64 = 1.0 / 60.0;

fn key(k: Key) -> InputEvent {
    InputEvent::KeyDown(k)
}

fn difficulty(lifetime: f64, interval: f64) -> Difficulty {
    Difficulty {
        name: "Test".into(),
        target_lifetime_secs: lifetime,
        spawn_interval_secs: interval,
    }
}

/// Session with one hand-placed target and a spawner that won't fire during the test
fn session_with_target(pos: Vec2, lifetime: f64) -> GameLoop {
    let mut session = Session::new(
        difficulty(lifetime, 1000.0),
        SessionClock::starting_at(0.0),
        Spawner::new(1),
    );
    session.targets.push(Target::new(1, pos, 0.0, lifetime, 60.0));
    GameLoop::with_session(session)
}

fn current_game(app: &App) -> &GameLoop {
    match app.state() {
        AppState::Playing(game) => game,
        other => panic!("expected gameplay, got {other:?}"),
    }
}

#[test]
fn test_centre_click_halfway_through_lifetime_hits() {
    let mut game = session_with_target(Vec2::new(100.0, 100.0), 2.0);
    assert_eq!(game.session().targets[0].shrink_radius(1.0), 30.0);
    game.tick([InputEvent::PointerDown(Vec2::new(100.0, 100.0))], 1.0);
    assert_eq!(game.session().score, 100);
}

#[test]
fn test_early_click_outside_radius_misses() {
    let mut game = session_with_target(Vec2::new(100.0, 100.0), 2.0);
    let radius = game.session().targets[0].shrink_radius(0.1);
    assert!((radius - 57.0).abs() < 1e-3);
    game.tick([InputEvent::PointerDown(Vec2::new(170.0, 100.0))], 0.1);
    assert_eq!(game.session().score, -50);
}

#[test]
fn test_second_click_on_same_target_is_free() {
    let mut game = session_with_target(Vec2::new(100.0, 100.0), 2.0);
    game.tick([InputEvent::PointerDown(Vec2::new(100.0, 100.0))], 0.5);
    game.tick([InputEvent::PointerDown(Vec2::new(100.0, 100.0))], 0.6);
    assert_eq!(game.session().score, 100);
    assert_eq!(
        game.session_mut().targets[0].resolve_click(Vec2::new(100.0, 100.0), 0.7),
        HitResult::Ignored
    );
}

#[test]
fn test_expired_unclicked_target_present_at_ten_seconds() {
    let mut game = session_with_target(Vec2::new(100.0, 100.0), 1.5);
    let mut now = 0.0;
    while now < 10.0 {
        assert_eq!(game.tick(std::iter::empty(), now), LoopState::Running);
        now += FRAME;
    }
    assert_eq!(game.session().targets.len(), 1);
    assert_eq!(game.session().score, 0);

    // Drawn at zero radius, i.e. not at all
    let mut list = DrawList::new();
    game.draw(now, &Default::default(), &mut list);
    assert_eq!(list.circles().count(), 0);
}

#[test]
fn test_full_cycle_menu_play_menu_quit() {
    let mut app = App::new(Settings::default().with_seed(2024));
    let mut now = 0.0;

    // Pick Easy
    assert_eq!(app.frame([key(Key::Up), key(Key::Enter)], now), AppControl::Continue);
    assert_eq!(current_game(&app).session().difficulty.name, "Easy");

    // Play until a couple of targets have spawned (interval 1.5s)
    while current_game(&app).session().stats.spawned < 2 {
        now += FRAME;
        assert_eq!(app.frame(std::iter::empty(), now), AppControl::Continue);
    }
    let newest = current_game(&app).session().targets.last().cloned().unwrap();
    assert_eq!(newest.lifetime_secs, 2.2);

    // Click the newest target dead centre right after it appeared
    now += FRAME;
    app.frame([InputEvent::PointerDown(newest.pos)], now);
    assert!(current_game(&app).session().stats.hits >= 1);

    // Back to the menu, then choose Exit
    now += FRAME;
    assert_eq!(app.frame([key(Key::Escape)], now), AppControl::Continue);
    assert!(matches!(app.state(), AppState::Menu(_)));

    now += FRAME;
    let exit = [key(Key::Down), key(Key::Down), key(Key::Enter)];
    assert_eq!(app.frame(exit, now), AppControl::Exit);
}

#[test]
fn test_fixed_seed_replays_identically() {
    fn run() -> Vec<Vec2> {
        let mut app = App::new(Settings::default().with_seed(77));
        app.frame([key(Key::Enter)], 0.0);
        let mut now = 0.0;
        for _ in 0..600 {
            now += FRAME;
            app.frame(std::iter::empty(), now);
        }
        current_game(&app).session().targets.iter().map(|t| t.pos).collect()
    }
    let first = run();
    assert!(!first.is_empty());
    assert_eq!(first, run());
}

#[test]
fn test_rasterized_menu_frame() {
    let app = App::new(Settings::default());
    let mut list = DrawList::new();
    app.draw(0.0, &mut list);

    let mut frame = vec![0u8; (WIDTH * HEIGHT * 4) as usize];
    Rasterizer::new(&mut frame, WIDTH, HEIGHT).unwrap().draw(&list);

    let background = app.settings().palette.background;
    assert_eq!(&frame[0..4], &background);
    let selected = app.settings().palette.selected;
    assert!(frame.chunks_exact(4).any(|px| px == selected));
}
