//! Draws a `GameStateSnapshot` with macroquad.
//!
//! Positions in the snapshot are sprite centres; everything here converts to
//! top-left corners before drawing.

use invaders_core::constants::{FIELD_HEIGHT, FIELD_WIDTH};
use invaders_core::enums::{BlockCondition, GameOutcome, GamePhase, ProjectileKind};
use invaders_core::state::GameStateSnapshot;
use invaders_core::types::Position;
use macroquad::prelude::*;

use crate::assets::Sprites;

const HUD_FONT_SIZE: f32 = 32.0;
const BANNER_FONT_SIZE: f32 = 64.0;
const HINT_FONT_SIZE: f32 = 28.0;
/// Render frames the screen stays tinted after the player is hit.
const HIT_FLASH_FRAMES: u32 = 12;

const PLAYER_COLOR: Color = Color::new(0.2, 0.9, 0.3, 1.0);
const INVADER_COLOR: Color = Color::new(0.9, 0.9, 0.9, 1.0);
const BULLET_COLOR: Color = Color::new(1.0, 1.0, 0.4, 1.0);
const MISSILE_COLOR: Color = Color::new(1.0, 0.35, 0.2, 1.0);
const BLOCK_INTACT_COLOR: Color = Color::new(0.2, 0.7, 0.2, 1.0);
const BLOCK_DAMAGED_COLOR: Color = Color::new(0.6, 0.5, 0.1, 1.0);
const HITBOX_COLOR: Color = Color::new(1.0, 0.0, 1.0, 0.8);
const FLASH_COLOR: Color = Color::new(1.0, 0.0, 0.0, 0.25);

/// Headline and hint shown over the playfield, if any.
pub fn banner_text(
    phase: GamePhase,
    outcome: Option<GameOutcome>,
) -> Option<(&'static str, &'static str)> {
    match phase {
        GamePhase::Title => Some(("INVADERS", "Press Enter to start")),
        GamePhase::Active => None,
        GamePhase::Paused => Some(("PAUSED", "P to resume, Esc to quit to title")),
        GamePhase::GameOver => {
            let headline = match outcome {
                Some(GameOutcome::Victory) => "YOU WIN",
                Some(GameOutcome::LivesExhausted) => "GAME OVER",
                Some(GameOutcome::Overrun) => "GAME OVER: INVADED",
                Some(GameOutcome::Collision) => "GAME OVER: RAMMED",
                None => "GAME OVER",
            };
            Some((headline, "Press Enter to play again"))
        }
    }
}

/// Red tint after the player loses a life.
///
/// Driven by the lives counter rather than `PlayerHit` events, so a hit in a
/// snapshot the render loop never saw still flashes.
#[derive(Debug, Default)]
pub struct HitFlash {
    last_lives: Option<u32>,
    frames: u32,
}

impl HitFlash {
    pub fn observe(&mut self, snapshot: &GameStateSnapshot) {
        let lives = snapshot.score.lives;
        if self.last_lives.is_some_and(|last| lives < last) {
            self.frames = HIT_FLASH_FRAMES;
        }
        self.last_lives = Some(lives);
    }

    /// Whether to tint this frame. Counts the flash down.
    pub fn next_frame(&mut self) -> bool {
        if self.frames == 0 {
            return false;
        }
        self.frames -= 1;
        true
    }
}

pub struct Renderer {
    sprites: Sprites,
    show_hitboxes: bool,
    flash: HitFlash,
}

impl Renderer {
    pub fn new(sprites: Sprites, show_hitboxes: bool) -> Self {
        Self {
            sprites,
            show_hitboxes,
            flash: HitFlash::default(),
        }
    }

    pub fn draw(&mut self, snapshot: Option<&GameStateSnapshot>) {
        clear_background(BLACK);
        self.draw_background();

        let Some(snapshot) = snapshot else {
            return;
        };

        self.flash.observe(snapshot);

        for block in &snapshot.shield_blocks {
            let (w, h) = (block.width, block.height);
            match self.sprites.block(block.condition) {
                Some(texture) => draw_sprite(texture, block.position, w, h),
                None => {
                    let color = match block.condition {
                        BlockCondition::Intact => BLOCK_INTACT_COLOR,
                        BlockCondition::Damaged => BLOCK_DAMAGED_COLOR,
                    };
                    fill_box(block.position, w, h, color);
                }
            }
            self.outline(block.position, w, h);
        }

        for invader in &snapshot.invaders {
            let (w, h) = (invader.width, invader.height);
            match self.sprites.invader(invader.kind, invader.frame) {
                Some(texture) => draw_sprite(texture, invader.position, w, h),
                None => fill_box(invader.position, w, h, INVADER_COLOR),
            }
            self.outline(invader.position, w, h);
        }

        if let Some(player) = &snapshot.player {
            let (w, h) = (player.width, player.height);
            match &self.sprites.ship {
                Some(texture) => draw_sprite(texture, player.position, w, h),
                None => fill_box(player.position, w, h, PLAYER_COLOR),
            }
            self.outline(player.position, w, h);
        }

        for projectile in snapshot.bullet.iter().chain(&snapshot.missiles) {
            let (w, h) = (projectile.width, projectile.height);
            match (projectile.kind, &self.sprites.bullet) {
                (ProjectileKind::Bullet, Some(texture)) => {
                    draw_sprite(texture, projectile.position, w, h)
                }
                (ProjectileKind::Bullet, None) => {
                    fill_box(projectile.position, w, h, BULLET_COLOR)
                }
                (ProjectileKind::Missile, Some(texture)) => {
                    draw_sprite_tinted(texture, projectile.position, w, h, MISSILE_COLOR)
                }
                (ProjectileKind::Missile, None) => {
                    fill_box(projectile.position, w, h, MISSILE_COLOR)
                }
            }
            self.outline(projectile.position, w, h);
        }

        if self.flash.next_frame() {
            draw_rectangle(0.0, 0.0, FIELD_WIDTH, FIELD_HEIGHT, FLASH_COLOR);
        }

        if snapshot.phase != GamePhase::Title {
            draw_hud(snapshot);
        }

        if let Some((headline, hint)) = banner_text(snapshot.phase, snapshot.outcome) {
            draw_banner(headline, hint);
        }
    }

    fn draw_background(&self) {
        if let Some(texture) = &self.sprites.background {
            draw_texture_ex(
                texture,
                0.0,
                0.0,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(FIELD_WIDTH, FIELD_HEIGHT)),
                    ..Default::default()
                },
            );
        }
    }

    fn outline(&self, center: Position, w: f32, h: f32) {
        if self.show_hitboxes {
            draw_rectangle_lines(center.x - w / 2.0, center.y - h / 2.0, w, h, 1.0, HITBOX_COLOR);
        }
    }
}

fn draw_sprite(texture: &Texture2D, center: Position, w: f32, h: f32) {
    draw_sprite_tinted(texture, center, w, h, WHITE);
}

fn draw_sprite_tinted(texture: &Texture2D, center: Position, w: f32, h: f32, tint: Color) {
    draw_texture_ex(
        texture,
        center.x - w / 2.0,
        center.y - h / 2.0,
        tint,
        DrawTextureParams {
            dest_size: Some(vec2(w, h)),
            ..Default::default()
        },
    );
}

fn fill_box(center: Position, w: f32, h: f32, color: Color) {
    draw_rectangle(center.x - w / 2.0, center.y - h / 2.0, w, h, color);
}

fn draw_hud(snapshot: &GameStateSnapshot) {
    // draw_text takes the baseline, the HUD is anchored at its top edge
    draw_text(
        &format!("Score: {}", snapshot.score.score),
        16.0,
        16.0 + HUD_FONT_SIZE,
        HUD_FONT_SIZE,
        WHITE,
    );
    draw_text(
        &format!("Lives: {}", snapshot.score.lives),
        1100.0,
        16.0 + HUD_FONT_SIZE,
        HUD_FONT_SIZE,
        WHITE,
    );
}

fn draw_banner(headline: &str, hint: &str) {
    draw_rectangle(
        0.0,
        FIELD_HEIGHT / 2.0 - 90.0,
        FIELD_WIDTH,
        150.0,
        Color::new(0.0, 0.0, 0.0, 0.6),
    );
    draw_centered(headline, FIELD_HEIGHT / 2.0, BANNER_FONT_SIZE);
    draw_centered(hint, FIELD_HEIGHT / 2.0 + 45.0, HINT_FONT_SIZE);
}

fn draw_centered(text: &str, baseline: f32, size: f32) {
    let dims = measure_text(text, None, size as u16, 1.0);
    draw_text(text, (FIELD_WIDTH - dims.width) / 2.0, baseline, size, WHITE);
}
