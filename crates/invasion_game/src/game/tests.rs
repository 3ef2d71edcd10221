use super::*;
use crate::alien::FleetLayout;
use crate::gesture::{GestureInput, Hand, Landmark, INDEX_PIP, INDEX_TIP, MIDDLE_MCP};

const CENTER: f32 = 640.0;

fn hold() -> GestureSample {
    GestureSample {
        fire: false,
        steer_x: CENTER,
    }
}

fn shoot() -> GestureSample {
    GestureSample {
        fire: true,
        steer_x: CENTER,
    }
}

fn alien_at(x: f32, y: f32) -> Alien {
    Alien {
        x,
        y,
        width: 40.0,
        height: 32.0,
    }
}

fn bullet_at(x: f32, y: f32) -> Bullet {
    Bullet {
        x,
        y,
        width: 3.0,
        height: 15.0,
        speed: 12.0,
    }
}

fn started_with(settings: Settings) -> Game {
    let mut game = Game::new(settings);
    assert!(game.click(640, 360));
    game.take_events();
    game
}

fn started() -> Game {
    started_with(Settings::default())
}

fn hand(raised: bool) -> Hand {
    Hand::new(vec![
        Landmark { id: INDEX_PIP, x: 320, y: 200 },
        Landmark { id: INDEX_TIP, x: 320, y: if raised { 150 } else { 250 } },
        Landmark { id: MIDDLE_MCP, x: 320, y: 240 },
    ])
}

/// Rams an alien into the ship and runs the frame.
fn ram_ship(game: &mut Game) {
    game.aliens = vec![alien_at(620.0, 650.0)];
    game.step(hold());
}

fn wait_out_pause(game: &mut Game) {
    while game.is_paused() {
        game.step(hold());
    }
}

#[test]
fn new_game_waits_for_play_button() {
    let mut game = Game::new(Settings::default());
    assert_eq!(game.state(), GameState::Inactive);
    assert!(game.cursor_visible());
    assert!(game.aliens().is_empty());

    let ship = game.ship().x;
    game.step(shoot());
    assert!(game.aliens().is_empty());
    assert!(game.bullets().is_empty());
    assert_eq!(game.ship().x, ship);
    assert!(game.take_events().is_empty());
}

#[test]
fn play_click_starts_a_fresh_game() {
    let mut game = Game::new(Settings::default());
    assert!(!game.click(10, 10));
    assert_eq!(game.state(), GameState::Inactive);

    game.settings.increase_speed();
    game.stats.add_score(500);
    game.bullets.push(bullet_at(100.0, 100.0));
    game.ship.x = 0.0;

    assert!(game.click(640, 360));
    assert_eq!(game.state(), GameState::Active);
    assert!(!game.cursor_visible());
    assert_eq!(game.settings().dynamic, game.settings().initial);
    assert_eq!(game.stats().score, 0);
    assert_eq!(game.stats().high_score, 500);
    assert_eq!(game.stats().ships_left, 3);
    assert_eq!(game.stats().level, 1);
    assert!(game.bullets().is_empty());
    assert_eq!(game.aliens().len(), 112);
    assert_eq!(game.ship().center_x(), CENTER);
    assert_eq!(game.scoreboard().score_text(), "0");
    assert_eq!(game.take_events(), vec![GameEvent::GameStarted]);

    // Already active: the button is gone.
    assert!(!game.click(640, 360));
}

#[test]
fn frames_without_a_hand_never_fire_or_steer() {
    let mut game = started();
    let mut input = GestureInput::new(1280);
    input.sample(&[hand(false)], 640);
    let target = input.steer_x();

    for _ in 0..20 {
        let sample = input.sample(&[], 640);
        assert!(!sample.fire);
        assert_eq!(sample.steer_x, target);
        game.step(sample);
        assert!(game.bullets().is_empty());
    }
}

#[test]
fn one_bullet_per_raise() {
    let mut game = started();
    game.aliens.clear();
    let mut input = GestureInput::new(1280);

    let frames = [false, true, true, true, false, false, true, true];
    let mut fired = 0;
    for raised in frames {
        let before = game.bullets().len();
        game.step(input.sample(&[hand(raised)], 640));
        let added = game.bullets().len() - before;
        assert!(added <= 1);
        fired += added;
    }
    assert_eq!(fired, 2);
    let shots = game
        .take_events()
        .into_iter()
        .filter(|e| *e == GameEvent::Fired)
        .count();
    assert_eq!(shots, 2);
}

#[test]
fn bullet_cap_is_never_exceeded() {
    let settings = Settings::builder().bullets_allowed(3).build();
    let mut game = started_with(settings);
    game.aliens.clear();
    let mut input = GestureInput::new(1280);

    for i in 0..20 {
        game.step(input.sample(&[hand(i % 2 == 0)], 640));
        assert!(game.bullets().len() <= 3);
    }
    assert_eq!(game.bullets().len(), 3);
}

#[test]
fn bullets_rise_until_they_leave_the_screen() {
    let mut game = started();
    game.aliens.clear();
    game.step(shoot());

    let mut last_y = game.bullets()[0].y;
    let mut frames = 1;
    while let Some(b) = game.bullets().first() {
        assert!(b.rect().bottom() > 0.0);
        last_y = last_y.min(b.y);
        game.step(hold());
        frames += 1;
        if let Some(next) = game.bullets().first() {
            assert!(next.y < last_y);
        }
        assert!(frames < 100);
    }
    // Spawned at y = 660, removed once y <= -15.
    assert_eq!(frames, 57);
}

#[test]
fn destroyed_aliens_score_per_alien() {
    let mut game = started();
    game.aliens = vec![
        alien_at(100.0, 100.0),
        alien_at(300.0, 100.0),
        alien_at(500.0, 100.0),
        alien_at(900.0, 300.0),
    ];
    game.bullets = vec![
        bullet_at(110.0, 110.0),
        bullet_at(310.0, 110.0),
        bullet_at(510.0, 110.0),
    ];
    game.step(hold());

    assert_eq!(game.stats().score, 150);
    assert_eq!(game.stats().high_score, 150);
    assert_eq!(game.aliens().len(), 1);
    assert!(game.bullets().is_empty());
    assert_eq!(game.scoreboard().score_text(), "150");
    assert_eq!(
        game.take_events(),
        vec![GameEvent::AliensDestroyed {
            count: 3,
            points: 150
        }]
    );
}

#[test]
fn clearing_the_fleet_starts_the_next_level() {
    let mut game = started();
    let before = game.settings().dynamic;
    game.aliens = vec![alien_at(100.0, 100.0)];
    game.bullets = vec![bullet_at(110.0, 110.0), bullet_at(600.0, 400.0)];
    game.step(hold());

    let after = game.settings().dynamic;
    assert!(game.bullets().is_empty());
    assert_eq!(game.stats().level, 2);
    assert_eq!(game.scoreboard().level_text(), "L2");
    assert!(after.ship_speed > before.ship_speed);
    assert!(after.bullet_speed > before.bullet_speed);
    assert!(after.alien_speed > before.alien_speed);
    assert!(after.alien_points > before.alien_points);

    // Same layout, already moved once at the new speed.
    let layout = FleetLayout::for_settings(game.settings());
    assert_eq!(game.aliens().len(), layout.len());
    let (x, y) = FleetLayout::position(game.settings(), 0, 0);
    assert_eq!(game.aliens()[0].y, y);
    assert!((game.aliens()[0].x - (x + after.alien_speed)).abs() < 1e-4);

    assert_eq!(
        game.take_events(),
        vec![
            GameEvent::AliensDestroyed {
                count: 1,
                points: 50
            },
            GameEvent::LevelCleared { level: 2 },
        ]
    );
}

#[test]
fn fleet_drops_once_when_it_touches_an_edge() {
    let mut game = started();
    let mut frames = 0;
    loop {
        let ys: Vec<f32> = game.aliens().iter().map(|a| a.y).collect();
        game.step(hold());
        frames += 1;
        let events = game.take_events();
        if events.contains(&GameEvent::FleetReversed) {
            for (alien, y) in game.aliens().iter().zip(ys) {
                assert_eq!(alien.y, y + 10.0);
            }
            break;
        }
        assert!(frames < 100);
    }
    // Right-most alien starts with its right edge at 1120: 16 moves of 10.
    assert_eq!(frames, 17);
    assert_eq!(
        game.settings().dynamic.fleet_direction,
        crate::settings::FleetDirection::Left
    );
}

#[test]
fn ship_hit_with_lives_left_resets_fleet_and_ship_only() {
    let mut game = started();
    game.stats.add_score(500);
    game.stats.level = 3;
    game.bullets.push(bullet_at(10.0, 400.0));
    ram_ship(&mut game);

    assert_eq!(game.state(), GameState::Active);
    assert_eq!(game.stats().ships_left, 2);
    assert_eq!(game.stats().score, 500);
    assert_eq!(game.stats().level, 3);
    assert_eq!(game.aliens().len(), 112);
    assert!(game.bullets().is_empty());
    assert_eq!(game.ship().center_x(), CENTER);
    assert_eq!(game.scoreboard().ships_left(), 2);
    assert_eq!(
        game.take_events(),
        vec![GameEvent::ShipHit { ships_left: 2 }]
    );
}

#[test]
fn hit_pause_freezes_the_frame_loop() {
    let mut game = started();
    ram_ship(&mut game);
    assert!(game.is_paused());

    let frozen = game.aliens().to_vec();
    for _ in 0..game.settings().hit_pause_frames {
        game.step(shoot());
    }
    assert_eq!(game.aliens(), &frozen[..]);
    assert!(game.bullets().is_empty());
    assert!(!game.is_paused());

    game.step(hold());
    assert_ne!(game.aliens(), &frozen[..]);
    // The raise seen while frozen fires once, on the first live frame.
    assert_eq!(game.bullets().len(), 1);
    game.step(hold());
    assert_eq!(game.bullets().len(), 1);
}

#[test]
fn raise_during_hit_pause_fires_when_the_pause_ends() {
    let mut game = started();
    let mut input = GestureInput::new(1280);
    ram_ship(&mut game);
    game.take_events();

    game.step(input.sample(&[hand(false)], 640));
    for _ in 0..2 * game.settings().hit_pause_frames + 1 {
        game.step(input.sample(&[hand(true)], 640));
    }
    let fired = game
        .take_events()
        .into_iter()
        .filter(|e| *e == GameEvent::Fired)
        .count();
    assert_eq!(fired, 1);
}

#[test]
fn alien_reaching_the_bottom_counts_as_a_hit() {
    let mut game = started();
    game.aliens = vec![alien_at(200.0, 700.0)];
    game.step(hold());
    assert_eq!(game.stats().ships_left, 2);
    assert_eq!(game.aliens().len(), 112);
}

#[test]
fn third_hit_ends_the_game() {
    let mut game = started();
    for expected in [2, 1] {
        ram_ship(&mut game);
        assert_eq!(game.state(), GameState::Active);
        assert_eq!(game.stats().ships_left, expected);
        wait_out_pause(&mut game);
    }

    game.stats.add_score(120);
    game.take_events();
    ram_ship(&mut game);
    assert_eq!(game.state(), GameState::Inactive);
    assert_eq!(game.stats().ships_left, 0);
    assert!(game.cursor_visible());
    assert!(game.aliens().is_empty());
    assert!(game.bullets().is_empty());
    assert!(!game.is_paused());
    assert_eq!(
        game.take_events(),
        vec![
            GameEvent::ShipHit { ships_left: 0 },
            GameEvent::GameOver { score: 120 },
        ]
    );

    // No respawn until the next click.
    for _ in 0..100 {
        game.step(shoot());
    }
    assert!(game.aliens().is_empty());
    assert!(game.bullets().is_empty());
    assert!(game.take_events().is_empty());

    assert!(game.click(640, 360));
    assert_eq!(game.stats().ships_left, 3);
    assert_eq!(game.stats().high_score, 120);
    assert_eq!(game.aliens().len(), 112);
    assert!(!game.is_paused());
}

#[test]
fn ship_follows_the_steering_target() {
    let mut game = started();
    game.aliens.clear();
    game.step(GestureSample {
        fire: false,
        steer_x: 0.0,
    });
    assert_eq!(game.ship().center_x(), CENTER - 12.0);
}
