//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Playfield ---

/// Playfield width in pixels.
pub const FIELD_WIDTH: f32 = 1280.0;

/// Playfield height in pixels.
pub const FIELD_HEIGHT: f32 = 720.0;

// --- Player ---

/// Player spawn position.
pub const PLAYER_SPAWN_X: f32 = 640.0;
pub const PLAYER_SPAWN_Y: f32 = 650.0;

/// Horizontal speed while a direction key is held (px/s).
pub const PLAYER_SPEED: f32 = 300.0;

/// The ship may only keep moving left while x is above this.
pub const PLAYER_MIN_X: f32 = 30.0;

/// The ship may only keep moving right while x is below this.
pub const PLAYER_MAX_X: f32 = 1250.0;

pub const PLAYER_WIDTH: f32 = 50.0;
pub const PLAYER_HEIGHT: f32 = 30.0;

/// Lives at the start of a game.
pub const STARTING_LIVES: u32 = 3;

// --- Projectiles ---

/// Player bullet vertical speed (px/s, upward).
pub const BULLET_SPEED: f32 = 500.0;

/// Invader missile vertical speed (px/s, downward).
pub const MISSILE_SPEED: f32 = 500.0;

pub const PROJECTILE_WIDTH: f32 = 6.0;
pub const PROJECTILE_HEIGHT: f32 = 18.0;

// --- Formation ---

pub const FORMATION_ROWS: u32 = 5;
pub const FORMATION_COLUMNS: u32 = 11;
pub const INVADER_COUNT: u32 = FORMATION_ROWS * FORMATION_COLUMNS;

/// Horizontal spacing between formation columns.
pub const FORMATION_COLUMN_SPACING: f32 = 80.0;

/// y of the top formation row.
pub const FORMATION_TOP_Y: f32 = 100.0;

/// Vertical spacing between formation rows.
pub const FORMATION_ROW_SPACING: f32 = 50.0;

/// Ticks between formation steps.
pub const FORMATION_STEP_INTERVAL: u64 = 30;

/// Formation steps per sweep; the formation drops and reverses once per sweep.
pub const FORMATION_STEPS_PER_SWEEP: u64 = 18;

/// Ticks between drop-and-reverse events.
pub const FORMATION_REVERSE_INTERVAL: u64 = FORMATION_STEP_INTERVAL * FORMATION_STEPS_PER_SWEEP;

/// Lateral distance per formation step (px).
pub const FORMATION_STEP: f32 = 20.0;

/// Vertical distance per drop (px).
pub const FORMATION_DROP: f32 = 50.0;

/// Missile roll: two draws from `0..=MISSILE_ROLL_MAX` must match.
pub const MISSILE_ROLL_MAX: u32 = 70;

pub const INVADER_WIDTH: f32 = 40.0;
pub const INVADER_HEIGHT: f32 = 30.0;

/// Points awarded per invader destroyed.
pub const INVADER_POINTS: u32 = 10;

// --- Animation ---

/// Invader animation frame rate (frames per second).
pub const INVADER_ANIMATION_FPS: u32 = 2;

/// Ticks each animation frame is held.
pub const INVADER_FRAME_TICKS: u32 = TICK_RATE / INVADER_ANIMATION_FPS;

/// Frames in the invader animation cycle.
pub const INVADER_FRAME_COUNT: u8 = 2;

// --- Shields ---

/// x of the left edge block of each shield.
pub const SHIELD_ORIGINS_X: [f32; 4] = [127.0, 419.0, 711.0, 1003.0];

/// y of the bottom row of shield blocks.
pub const SHIELD_BASE_Y: f32 = 600.0;

/// Block offsets from the shield origin, forming an arch.
pub const SHIELD_LAYOUT: [(f32, f32); 14] = [
    (0.0, 0.0),
    (30.0, 0.0),
    (0.0, -20.0),
    (30.0, -20.0),
    (30.0, -40.0),
    (60.0, -40.0),
    (90.0, -40.0),
    (60.0, -60.0),
    (90.0, -60.0),
    (120.0, 0.0),
    (150.0, 0.0),
    (120.0, -20.0),
    (150.0, -20.0),
    (120.0, -40.0),
];

pub const BLOCK_WIDTH: f32 = 30.0;
pub const BLOCK_HEIGHT: f32 = 20.0;
