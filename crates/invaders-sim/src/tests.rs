//! Tests for the simulation engine, formation, projectiles, and collision rules.

use hecs::World;

use invaders_core::commands::PlayerCommand;
use invaders_core::components::*;
use invaders_core::constants::*;
use invaders_core::enums::*;
use invaders_core::events::GameEvent;
use invaders_core::state::GameStateSnapshot;
use invaders_core::types::{Position, Velocity};

use crate::engine::{SimConfig, SimulationEngine};
use crate::score::ScoreState;
use crate::systems::{cleanup, collision, movement, projectiles};
use crate::world_setup;

// ---- Helpers ----

/// Start a game and run its first tick.
fn started_engine(seed: u64) -> SimulationEngine {
    let mut engine = SimulationEngine::new(SimConfig { seed });
    engine.queue_command(PlayerCommand::StartGame);
    engine.tick();
    engine
}

/// Start a game where stray missiles can never end it.
fn invulnerable_engine() -> SimulationEngine {
    let mut engine = started_engine(42);
    engine.score_mut().lives = 1_000_000;
    engine
}

fn despawn_all_invaders(world: &mut World) {
    let invaders: Vec<hecs::Entity> = world
        .query::<&Invader>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();
    for entity in invaders {
        let _ = world.despawn(entity);
    }
}

fn input(left: bool, right: bool, fire: bool) -> PlayerCommand {
    PlayerCommand::SetInput { left, right, fire }
}

fn player_position(engine: &SimulationEngine) -> Position {
    let mut query = engine.world().query::<(&Player, &Position)>();
    let (_, (_, pos)) = query.iter().next().unwrap();
    *pos
}

fn invader_at_slot(snapshot: &GameStateSnapshot, row: u32, column: u32) -> Position {
    snapshot
        .invaders
        .iter()
        .find(|i| i.row == row && i.column == column)
        .map(|i| i.position)
        .unwrap()
}

fn run_until_game_over(engine: &mut SimulationEngine, max_ticks: usize) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for _ in 0..max_ticks {
        let snap = engine.tick();
        events.extend(snap.events);
        if snap.phase == GamePhase::GameOver {
            break;
        }
    }
    events
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = SimulationEngine::new(SimConfig { seed: 12345 });
    let mut engine_b = SimulationEngine::new(SimConfig { seed: 12345 });

    for engine in [&mut engine_a, &mut engine_b] {
        engine.queue_commands([PlayerCommand::StartGame, input(false, true, true)]);
    }

    for _ in 0..1000 {
        let snap_a = engine_a.tick();
        let snap_b = engine_b.tick();

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = SimulationEngine::new(SimConfig { seed: 111 });
    let mut engine_b = SimulationEngine::new(SimConfig { seed: 222 });

    engine_a.queue_command(PlayerCommand::StartGame);
    engine_b.queue_command(PlayerCommand::StartGame);

    // Missile rolls differ once the formation starts stepping.
    let mut diverged = false;
    for _ in 0..1000 {
        let json_a = serde_json::to_string(&engine_a.tick()).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick()).unwrap();
        if json_a != json_b {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "Different seeds should produce divergent output");
}

// ---- Setup ----

#[test]
fn test_title_phase_has_empty_world() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let snap = engine.tick();

    assert_eq!(snap.phase, GamePhase::Title);
    assert!(snap.player.is_none());
    assert!(snap.invaders.is_empty());
    assert!(snap.shield_blocks.is_empty());
    assert_eq!(snap.time.tick, 0, "Time should not advance on the title screen");
}

#[test]
fn test_start_game_builds_world() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_command(PlayerCommand::StartGame);
    let snap = engine.tick();

    assert_eq!(snap.phase, GamePhase::Active);
    assert_eq!(snap.outcome, None);

    let player = snap.player.as_ref().unwrap();
    assert_eq!(player.position, Position::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y));

    assert_eq!(snap.invaders.len(), 55);
    assert_eq!(invader_at_slot(&snap, 0, 0), Position::new(80.0, 100.0));
    assert_eq!(invader_at_slot(&snap, 4, 10), Position::new(880.0, 300.0));
    for invader in &snap.invaders {
        assert_eq!(invader.kind, InvaderKind::for_row(invader.row));
    }
    let count_kind = |kind| snap.invaders.iter().filter(|i| i.kind == kind).count();
    assert_eq!(count_kind(InvaderKind::Top), 11);
    assert_eq!(count_kind(InvaderKind::Middle), 22);
    assert_eq!(count_kind(InvaderKind::Bottom), 22);

    assert_eq!(snap.shield_blocks.len(), 56);
    assert!(snap
        .shield_blocks
        .iter()
        .all(|b| b.condition == BlockCondition::Intact));
    for origin_x in SHIELD_ORIGINS_X {
        for (dx, dy) in SHIELD_LAYOUT {
            let expected = Position::new(origin_x + dx, SHIELD_BASE_Y + dy);
            assert!(
                snap.shield_blocks.iter().any(|b| b.position == expected),
                "No shield block at {:?}",
                expected
            );
        }
    }

    assert!(snap.bullet.is_none(), "Bullet starts parked");
    assert!(snap.missiles.is_empty());

    assert_eq!(snap.score.score, 0);
    assert_eq!(snap.score.lives, 3);
    assert_eq!(snap.score.invaders_remaining, 55);
}

#[test]
fn test_start_game_ignored_while_active() {
    let mut engine = started_engine(42);
    for _ in 0..10 {
        engine.tick();
    }

    engine.queue_command(PlayerCommand::StartGame);
    engine.tick();
    assert_eq!(
        engine.time().tick,
        12,
        "StartGame while Active should not reset the game"
    );
}

// ---- Formation ----

#[test]
fn test_formation_steps_every_30_ticks() {
    let mut engine = invulnerable_engine();

    // Tick 1 has run; run up to tick 29.
    let mut snap = engine.tick();
    for _ in 2..29 {
        snap = engine.tick();
    }
    assert_eq!(snap.time.tick, 29);
    assert_eq!(invader_at_slot(&snap, 0, 0), Position::new(80.0, 100.0));

    let snap = engine.tick();
    assert_eq!(snap.time.tick, 30);
    assert_eq!(invader_at_slot(&snap, 0, 0), Position::new(100.0, 100.0));
    assert!(snap.events.contains(&GameEvent::FormationAdvanced {
        direction: MoveDirection::Right,
        dropped: false,
    }));
}

#[test]
fn test_formation_drops_and_reverses() {
    let mut engine = invulnerable_engine();

    let mut snap = engine.tick();
    while snap.time.tick < 539 {
        snap = engine.tick();
    }
    // 17 steps right (ticks 30..=510).
    assert_eq!(invader_at_slot(&snap, 0, 0), Position::new(420.0, 100.0));

    let snap = engine.tick();
    assert_eq!(snap.time.tick, 540);
    assert_eq!(invader_at_slot(&snap, 0, 0), Position::new(400.0, 150.0));
    assert_eq!(invader_at_slot(&snap, 4, 0), Position::new(400.0, 350.0));
    assert!(snap.events.contains(&GameEvent::FormationAdvanced {
        direction: MoveDirection::Left,
        dropped: true,
    }));
}

#[test]
fn test_formation_launches_missiles() {
    let mut engine = invulnerable_engine();

    let mut launched = 0;
    for _ in 0..600 {
        let snap = engine.tick();
        launched += snap
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::MissileLaunched { .. }))
            .count();
    }
    assert!(launched > 0, "Invaders should launch missiles within 20 steps");
}

#[test]
fn test_overrun_ends_game() {
    let mut engine = invulnerable_engine();

    // Park one invader just above the player row; the first drop lands it there.
    for (_entity, (slot, pos)) in engine
        .world_mut()
        .query_mut::<(&FormationSlot, &mut Position)>()
    {
        if slot.row == 4 && slot.column == 0 {
            pos.y = PLAYER_SPAWN_Y - FORMATION_DROP;
        }
    }

    let events = run_until_game_over(&mut engine, 600);
    assert_eq!(engine.phase(), GamePhase::GameOver);
    assert_eq!(engine.outcome(), Some(GameOutcome::Overrun));
    assert_eq!(engine.time().tick, 540);
    assert!(events.contains(&GameEvent::GameOver {
        outcome: GameOutcome::Overrun
    }));
}

// ---- Player control ----

#[test]
fn test_player_moves_left_and_right() {
    let mut engine = invulnerable_engine();

    engine.queue_command(input(true, false, false));
    for _ in 0..60 {
        engine.tick();
    }
    let pos = player_position(&engine);
    assert!(
        (pos.x - (PLAYER_SPAWN_X - PLAYER_SPEED)).abs() < 0.1,
        "After 1s holding left, x should be ~340, got {}",
        pos.x
    );

    engine.queue_command(input(false, true, false));
    for _ in 0..60 {
        engine.tick();
    }
    let pos = player_position(&engine);
    assert!((pos.x - PLAYER_SPAWN_X).abs() < 0.1, "got {}", pos.x);

    engine.queue_command(input(false, false, false));
    for _ in 0..30 {
        engine.tick();
    }
    let after = player_position(&engine);
    assert_eq!(after.x, pos.x, "Ship should stop when no key is held");
    assert_eq!(after.y, PLAYER_SPAWN_Y);
}

#[test]
fn test_player_stops_at_field_edges() {
    let mut engine = invulnerable_engine();

    engine.queue_command(input(true, false, false));
    for _ in 0..300 {
        engine.tick();
    }
    let pos = player_position(&engine);
    assert!(
        pos.x <= PLAYER_MIN_X && pos.x > PLAYER_MIN_X - 5.5,
        "Ship should stop at the left edge, got {}",
        pos.x
    );

    engine.queue_command(input(false, true, false));
    for _ in 0..600 {
        engine.tick();
    }
    let pos = player_position(&engine);
    assert!(
        pos.x >= PLAYER_MAX_X && pos.x < PLAYER_MAX_X + 5.5,
        "Ship should stop at the right edge, got {}",
        pos.x
    );
}

#[test]
fn test_both_directions_keep_velocity() {
    let mut engine = invulnerable_engine();

    engine.queue_command(input(false, true, false));
    engine.tick();
    engine.queue_command(input(true, true, false));
    for _ in 0..10 {
        engine.tick();
    }

    let mut query = engine.world().query::<(&Player, &Velocity)>();
    let (_, (_, vel)) = query.iter().next().unwrap();
    assert_eq!(vel.x, PLAYER_SPEED);
}

// ---- Firing ----

#[test]
fn test_single_bullet_in_flight() {
    let mut engine = invulnerable_engine();
    despawn_all_invaders(engine.world_mut());

    engine.queue_command(input(false, false, true));
    let mut shots = 0;
    for _ in 0..20 {
        let snap = engine.tick();
        shots += snap
            .events
            .iter()
            .filter(|e| **e == GameEvent::ShotFired)
            .count();
        assert!(snap.bullet.is_some());
    }
    assert_eq!(shots, 1, "Holding fire must not fire a second bullet");
}

#[test]
fn test_bullet_reused_after_leaving_screen() {
    let mut engine = invulnerable_engine();
    despawn_all_invaders(engine.world_mut());

    engine.queue_command(input(false, false, true));
    let snap = engine.tick();
    let bullet = snap.bullet.unwrap();
    assert_eq!(bullet.position.x, PLAYER_SPAWN_X);
    assert!((bullet.position.y - (PLAYER_SPAWN_Y - BULLET_SPEED * DT)).abs() < 1e-3);

    engine.queue_command(input(false, false, false));
    let mut snap = engine.tick();
    for _ in 0..100 {
        snap = engine.tick();
    }
    assert!(snap.bullet.is_none(), "Bullet should deactivate above the top edge");

    engine.queue_command(input(false, false, true));
    let snap = engine.tick();
    assert!(snap.bullet.is_some());
    assert!(snap.events.contains(&GameEvent::ShotFired));

    let bullets = engine
        .world()
        .query::<&Projectile>()
        .iter()
        .filter(|(_, p)| p.kind == ProjectileKind::Bullet)
        .count();
    assert_eq!(bullets, 1, "The bullet is pooled, not respawned");
}

#[test]
fn test_bullet_destroys_invader() {
    let mut engine = invulnerable_engine();

    // The ship starts under column 7; the bottom invader there is hit first.
    engine.queue_command(input(false, false, true));
    let mut events = Vec::new();
    let mut snap = engine.tick();
    for _ in 0..60 {
        events.extend(snap.events.drain(..));
        snap = engine.tick();
    }
    events.extend(snap.events.drain(..));

    assert!(events.contains(&GameEvent::InvaderDestroyed {
        kind: InvaderKind::Bottom,
        points: INVADER_POINTS,
    }));
    assert!(snap.score.score >= 10);
    assert_eq!(
        snap.score.invaders_remaining as usize,
        snap.invaders.len(),
        "Counter must match live invaders"
    );
    assert!(!snap
        .invaders
        .iter()
        .any(|i| i.row == 4 && i.column == 7));
}

#[test]
fn test_last_invader_is_victory() {
    let mut engine = invulnerable_engine();
    despawn_all_invaders(engine.world_mut());
    world_setup::spawn_invader(engine.world_mut(), FormationSlot { row: 0, column: 7 });
    engine.score_mut().invaders_remaining = 1;

    // Move it down near the ship so the shot lands quickly.
    for (_entity, (_invader, pos)) in engine.world_mut().query_mut::<(&Invader, &mut Position)>()
    {
        pos.y = 500.0;
        pos.x = PLAYER_SPAWN_X;
    }

    engine.queue_command(input(false, false, true));
    let events = run_until_game_over(&mut engine, 60);

    assert_eq!(engine.outcome(), Some(GameOutcome::Victory));
    assert_eq!(engine.score().score, 10);
    assert_eq!(engine.score().invaders_remaining, 0);
    assert!(events.contains(&GameEvent::GameOver {
        outcome: GameOutcome::Victory
    }));
}

// ---- Collisions ----

#[test]
fn test_invader_touching_player_ends_game() {
    let mut engine = invulnerable_engine();
    world_setup::spawn_invader(engine.world_mut(), FormationSlot { row: 4, column: 0 });
    for (_entity, (slot, pos)) in engine
        .world_mut()
        .query_mut::<(&FormationSlot, &mut Position)>()
    {
        if slot.row == 4 && slot.column == 0 {
            *pos = Position::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y);
        }
    }

    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::GameOver);
    assert_eq!(snap.outcome, Some(GameOutcome::Collision));
}

#[test]
fn test_missile_costs_a_life() {
    let mut world = World::new();
    world_setup::spawn_player(&mut world);
    let mut score = ScoreState::default();
    let mut events = Vec::new();

    projectiles::launch_missile(&mut world, PLAYER_SPAWN_X, PLAYER_SPAWN_Y, &mut events);
    let outcome = collision::run(&mut world, &mut score, &mut events);

    assert_eq!(outcome, None);
    assert_eq!(score.lives, 2);
    assert!(events.contains(&GameEvent::PlayerHit { lives_remaining: 2 }));

    let active = world
        .query::<&Projectile>()
        .iter()
        .filter(|(_, p)| p.active)
        .count();
    assert_eq!(active, 0, "Missile should be deactivated on hit");
}

#[test]
fn test_last_life_lost_ends_game() {
    let mut engine = started_engine(42);
    despawn_all_invaders(engine.world_mut());
    engine.score_mut().lives = 1;

    let mut events = Vec::new();
    projectiles::launch_missile(
        engine.world_mut(),
        PLAYER_SPAWN_X,
        PLAYER_SPAWN_Y - 20.0,
        &mut events,
    );

    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::GameOver);
    assert_eq!(snap.outcome, Some(GameOutcome::LivesExhausted));
    assert_eq!(snap.score.lives, 0);
    assert!(snap.events.contains(&GameEvent::GameOver {
        outcome: GameOutcome::LivesExhausted
    }));

    // Frozen after game over.
    let frozen_tick = snap.time.tick;
    for _ in 0..10 {
        engine.tick();
    }
    assert_eq!(engine.time().tick, frozen_tick);
}

#[test]
fn test_shield_block_takes_two_hits() {
    let mut world = World::new();
    let block = world_setup::spawn_shield_block(&mut world, Position::new(200.0, 600.0));
    let mut score = ScoreState::default();
    let mut events = Vec::new();
    let mut despawn_buffer = Vec::new();

    projectiles::launch_missile(&mut world, 200.0, 595.0, &mut events);
    collision::run(&mut world, &mut score, &mut events);
    cleanup::run(&mut world, &mut despawn_buffer);

    assert_eq!(
        world.get::<&ShieldBlock>(block).unwrap().condition,
        BlockCondition::Damaged
    );
    assert!(events.contains(&GameEvent::ShieldDamaged));

    projectiles::launch_missile(&mut world, 200.0, 595.0, &mut events);
    collision::run(&mut world, &mut score, &mut events);
    cleanup::run(&mut world, &mut despawn_buffer);

    assert!(!world.contains(block), "Damaged block should be destroyed");
    assert!(events.contains(&GameEvent::ShieldDestroyed));
    assert_eq!(projectiles::missile_pool_size(&world), 1);
}

#[test]
fn test_two_missiles_same_tick_on_one_block() {
    let mut world = World::new();
    let block = world_setup::spawn_shield_block(&mut world, Position::new(200.0, 600.0));
    let mut score = ScoreState::default();
    let mut events = Vec::new();

    world_setup::spawn_missile(&mut world, Position::new(195.0, 600.0));
    world_setup::spawn_missile(&mut world, Position::new(205.0, 600.0));
    collision::run(&mut world, &mut score, &mut events);

    assert!(world.get::<&Destroyed>(block).is_ok());
    assert_eq!(
        events,
        vec![GameEvent::ShieldDamaged, GameEvent::ShieldDestroyed]
    );
}

#[test]
fn test_bullet_hits_shield() {
    let mut world = World::new();
    let block = world_setup::spawn_shield_block(&mut world, Position::new(200.0, 600.0));
    let bullet = world_setup::spawn_bullet(&mut world);
    if let Ok((projectile, pos)) = world.query_one_mut::<(&mut Projectile, &mut Position)>(bullet)
    {
        projectile.active = true;
        *pos = Position::new(200.0, 610.0);
    }

    let mut score = ScoreState::default();
    let mut events = Vec::new();
    collision::run(&mut world, &mut score, &mut events);

    assert!(!world.get::<&Projectile>(bullet).unwrap().active);
    assert_eq!(
        world.get::<&ShieldBlock>(block).unwrap().condition,
        BlockCondition::Damaged
    );
}

// ---- Projectile pool ----

#[test]
fn test_missile_pool_reuses_inactive() {
    let mut world = World::new();
    let mut events = Vec::new();

    let first = projectiles::launch_missile(&mut world, 100.0, 100.0, &mut events);
    let second = projectiles::launch_missile(&mut world, 200.0, 100.0, &mut events);
    assert_ne!(first, second, "Active missiles are not reused");
    assert_eq!(projectiles::missile_pool_size(&world), 2);

    projectiles::deactivate(&mut world, first);
    projectiles::deactivate(&mut world, second);

    // The last inactive missile found by the scan is reused.
    let third = projectiles::launch_missile(&mut world, 300.0, 150.0, &mut events);
    assert_eq!(third, second);
    assert_eq!(projectiles::missile_pool_size(&world), 2);

    let projectile = *world.get::<&Projectile>(third).unwrap();
    assert!(projectile.active);
    assert_eq!(*world.get::<&Position>(third).unwrap(), Position::new(300.0, 150.0));
    assert_eq!(
        *world.get::<&Velocity>(third).unwrap(),
        Velocity::new(0.0, MISSILE_SPEED)
    );
    assert_eq!(events.len(), 3);
}

#[test]
fn test_missile_pool_skips_active_and_takes_last_inactive() {
    let mut world = World::new();
    let mut events = Vec::new();

    let a = projectiles::launch_missile(&mut world, 100.0, 100.0, &mut events);
    let b = projectiles::launch_missile(&mut world, 200.0, 100.0, &mut events);
    let c = projectiles::launch_missile(&mut world, 300.0, 100.0, &mut events);

    // b stays in flight between two parked missiles.
    projectiles::deactivate(&mut world, a);
    projectiles::deactivate(&mut world, c);

    let reused = projectiles::launch_missile(&mut world, 400.0, 120.0, &mut events);
    assert_eq!(reused, c);
    assert_eq!(projectiles::missile_pool_size(&world), 3);
    assert!(world.get::<&Projectile>(b).unwrap().active);
    assert!(!world.get::<&Projectile>(a).unwrap().active);

    // Only a is left to reuse.
    let next = projectiles::launch_missile(&mut world, 500.0, 120.0, &mut events);
    assert_eq!(next, a);
    assert_eq!(projectiles::missile_pool_size(&world), 3);

    // Pool exhausted: a fourth missile is spawned.
    let fresh = projectiles::launch_missile(&mut world, 600.0, 120.0, &mut events);
    assert!(fresh != a && fresh != b && fresh != c);
    assert_eq!(projectiles::missile_pool_size(&world), 4);
}

#[test]
fn test_missile_deactivates_below_screen() {
    let mut world = World::new();
    let mut events = Vec::new();
    let missile = projectiles::launch_missile(&mut world, 100.0, FIELD_HEIGHT - 10.0, &mut events);

    for _ in 0..3 {
        movement::run(&mut world);
        projectiles::run_bounds(&mut world);
    }

    let projectile = *world.get::<&Projectile>(missile).unwrap();
    assert!(!projectile.active);
    assert_eq!(*world.get::<&Velocity>(missile).unwrap(), Velocity::zero());
}

// ---- Movement ----

#[test]
fn test_movement_integration() {
    let mut world = World::new();

    world.spawn((Position::new(0.0, 0.0), Velocity::new(120.0, 0.0)));

    for _ in 0..60 {
        movement::run(&mut world);
    }

    let mut query = world.query::<&Position>();
    let (_, pos) = query.iter().next().unwrap();
    assert!(
        (pos.x - 120.0).abs() < 1e-3,
        "After 1s at 120 px/s, x should be ~120, got {}",
        pos.x
    );
    assert!(pos.y.abs() < 1e-6, "y should be 0, got {}", pos.y);
}

// ---- Animation ----

#[test]
fn test_invader_animation_cycles_and_freezes() {
    let mut engine = invulnerable_engine();

    let mut snap = engine.tick();
    while snap.time.tick < 30 {
        snap = engine.tick();
    }
    assert!(snap.invaders.iter().all(|i| i.frame == 1));

    engine.queue_command(PlayerCommand::Pause);
    for _ in 0..60 {
        snap = engine.tick();
    }
    assert!(snap.invaders.iter().all(|i| i.frame == 1), "Paused invaders stay on their frame");

    engine.queue_command(PlayerCommand::Resume);
    while snap.time.tick < 60 {
        snap = engine.tick();
    }
    assert!(snap.invaders.iter().all(|i| i.frame == 0));
}

// ---- Phases ----

#[test]
fn test_pause_stops_simulation() {
    let mut engine = started_engine(42);

    for _ in 0..9 {
        engine.tick();
    }
    assert_eq!(engine.time().tick, 10);
    assert_eq!(engine.phase(), GamePhase::Active);

    engine.queue_command(PlayerCommand::Pause);
    for _ in 0..10 {
        engine.tick();
    }
    assert_eq!(
        engine.time().tick,
        10,
        "Time should not advance while paused"
    );
    assert_eq!(engine.phase(), GamePhase::Paused);

    engine.queue_command(PlayerCommand::Resume);
    for _ in 0..10 {
        engine.tick();
    }
    assert_eq!(engine.time().tick, 20);
    assert_eq!(engine.phase(), GamePhase::Active);
}

#[test]
fn test_restart_after_game_over() {
    let mut engine = started_engine(42);
    despawn_all_invaders(engine.world_mut());
    engine.score_mut().lives = 1;
    let mut events = Vec::new();
    projectiles::launch_missile(
        engine.world_mut(),
        PLAYER_SPAWN_X,
        PLAYER_SPAWN_Y,
        &mut events,
    );
    engine.tick();
    assert_eq!(engine.phase(), GamePhase::GameOver);

    engine.queue_command(PlayerCommand::StartGame);
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Active);
    assert_eq!(snap.outcome, None);
    assert_eq!(snap.time.tick, 1);
    assert_eq!(snap.invaders.len(), 55);
    assert_eq!(snap.shield_blocks.len(), 56);
    assert_eq!(snap.score.lives, STARTING_LIVES);
    assert_eq!(snap.score.score, 0);
    assert!(snap.missiles.is_empty());
}

#[test]
fn test_return_to_title() {
    let mut engine = started_engine(42);

    // Ignored while Active.
    engine.queue_command(PlayerCommand::ReturnToTitle);
    engine.tick();
    assert_eq!(engine.phase(), GamePhase::Active);

    engine.queue_command(PlayerCommand::Pause);
    engine.queue_command(PlayerCommand::ReturnToTitle);
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Title);
    assert!(snap.player.is_none());
    assert!(snap.invaders.is_empty());
    assert_eq!(engine.world().len(), 0);
}
