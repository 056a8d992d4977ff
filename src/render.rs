//! Canvas 2D renderer
//!
//! Draws the play field in field coordinates; the context transform scales
//! them to the canvas size.

use std::f64::consts::{PI, TAU};

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::Settings;
use crate::consts::*;
use crate::sim::{GameState, ObstacleKind, PowerupKind, Silhouettes, Theme};

/// Renderer bound to one canvas element
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Returns `None` when the canvas has no 2D context
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())?;
        Some(Self { canvas, ctx })
    }

    /// Draw one frame. `time_secs` only drives decorative scrolling.
    pub fn render(&self, state: &GameState, settings: &Settings, time_secs: f64) {
        let ctx = &self.ctx;
        let scale_x = self.canvas.width() as f64 / FIELD_WIDTH as f64;
        let scale_y = self.canvas.height() as f64 / FIELD_HEIGHT as f64;
        let _ = ctx.set_transform(scale_x, 0.0, 0.0, scale_y, 0.0, 0.0);
        ctx.clear_rect(0.0, 0.0, FIELD_WIDTH as f64, FIELD_HEIGHT as f64);

        let theme = &state.level().theme;
        self.draw_background(theme, settings, time_secs);
        self.draw_obstacles(state, theme, settings);
        self.draw_bananas(state);
        self.draw_powerups(state);
        self.draw_player(state, theme);
    }

    fn draw_background(&self, theme: &Theme, settings: &Settings, time_secs: f64) {
        let ctx = &self.ctx;
        let (w, h) = (FIELD_WIDTH as f64, FIELD_HEIGHT as f64);
        let ground = GROUND_Y as f64;

        let sky = ctx.create_linear_gradient(0.0, 0.0, 0.0, h);
        let _ = sky.add_color_stop(0.0, theme.sky.0);
        let _ = sky.add_color_stop(1.0, theme.sky.1);
        ctx.set_fill_style_canvas_gradient(&sky);
        ctx.fill_rect(0.0, 0.0, w, h);

        // Distant silhouettes, heights from a fixed hash so they don't flicker
        let scroll = if settings.effective_parallax() {
            (time_secs * 20.0) % 200.0
        } else {
            0.0
        };
        ctx.save();
        ctx.set_global_alpha(0.25);
        ctx.set_fill_style_str("#0a0e25");
        for i in 0..7 {
            let x = i as f64 * 180.0 - scroll;
            let hash = ((i * 2_654_435_761_u64) % 100) as f64 / 100.0;
            match theme.silhouettes {
                Silhouettes::Lab => {
                    let tower = 120.0 + hash * 80.0;
                    ctx.fill_rect(x, ground - tower, 40.0, tower);
                    ctx.fill_rect(x + 50.0, ground - tower * 0.7, 18.0, tower * 0.7);
                }
                Silhouettes::City => {
                    let width = 50.0 + hash * 50.0;
                    let height = 110.0 + hash * 100.0;
                    ctx.fill_rect(x, ground - height, width, height);
                }
                Silhouettes::Beach => {
                    let radius = 60.0 + hash * 60.0;
                    ctx.begin_path();
                    let _ = ctx.arc(x, ground + 20.0, radius, PI, PI * 1.15);
                    ctx.fill();
                }
            }
        }
        ctx.restore();

        // Floor conveyor stripes
        let stripe_offset = if settings.effective_parallax() {
            (time_secs * 2000.0 / 60.0) % 60.0
        } else {
            0.0
        };
        ctx.set_fill_style_str("rgba(255,255,255,.06)");
        let mut x = -stripe_offset;
        while x < w {
            ctx.fill_rect(x, ground + 6.0, 30.0, 3.0);
            x += 60.0;
        }

        ctx.set_fill_style_str("rgba(255,255,255,.18)");
        ctx.fill_rect(0.0, ground, w, 2.0);
    }

    fn draw_obstacles(&self, state: &GameState, theme: &Theme, settings: &Settings) {
        let ctx = &self.ctx;
        for obstacle in &state.obstacles {
            let (x, y) = (obstacle.pos.x as f64, obstacle.pos.y as f64);
            let (w, h) = (obstacle.size.x as f64, obstacle.size.y as f64);
            match obstacle.kind {
                ObstacleKind::Box => {
                    ctx.set_fill_style_str("#b7712b");
                    ctx.fill_rect(x, y, w, h);
                    ctx.set_stroke_style_str("rgba(0,0,0,.4)");
                    ctx.stroke_rect(x, y, w, h);
                }
                ObstacleKind::Droid => {
                    let (cx, cy) = (x + w / 2.0, y + h / 2.0);
                    ctx.set_fill_style_str("#8bd2ff");
                    ctx.begin_path();
                    let _ = ctx.arc(cx, cy, w / 2.0, 0.0, TAU);
                    ctx.fill();
                    ctx.set_fill_style_str("#0c2945");
                    ctx.begin_path();
                    let _ = ctx.arc(cx, cy, 6.0, 0.0, TAU);
                    ctx.fill();
                }
                ObstacleKind::Laser { .. } => {
                    let pulse = if settings.effective_laser_pulse() {
                        obstacle.pulse() as f64
                    } else {
                        1.0
                    };
                    ctx.save();
                    ctx.set_global_alpha(0.6 + 0.4 * pulse);
                    ctx.set_fill_style_str(theme.laser);
                    ctx.fill_rect(x, y, w, h);
                    ctx.restore();
                }
            }
        }
    }

    fn draw_bananas(&self, state: &GameState) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str("#ffe135");
        for banana in &state.bananas {
            let r = banana.radius as f64;
            ctx.save();
            let _ = ctx.translate(banana.pos.x as f64, banana.pos.y as f64);
            let _ = ctx.rotate(PI / 6.0);
            ctx.begin_path();
            let _ = ctx.ellipse(0.0, 0.0, r, r * 2.0, 0.0, 0.0, TAU);
            ctx.fill();
            ctx.restore();
        }
    }

    fn draw_powerups(&self, state: &GameState) {
        let ctx = &self.ctx;
        for powerup in &state.powerups {
            ctx.save();
            let _ = ctx.translate(powerup.pos.x as f64, powerup.pos.y as f64);
            match powerup.kind {
                PowerupKind::Shield => {
                    ctx.set_stroke_style_str("#7ec9ff");
                    ctx.set_line_width(3.0);
                    ctx.begin_path();
                    let _ = ctx.ellipse(0.0, 0.0, 16.0, 16.0, 0.0, 0.0, TAU);
                    ctx.stroke();
                    ctx.set_fill_style_str("rgba(126,201,255,.25)");
                    ctx.fill();
                    ctx.set_fill_style_str("#7ec9ff");
                    ctx.fill_rect(-2.0, -8.0, 4.0, 16.0);
                }
                PowerupKind::Magnet => {
                    ctx.set_fill_style_str("#ff4d4d");
                    ctx.begin_path();
                    let _ = ctx.arc(-6.0, 0.0, 8.0, PI * 1.5, PI * 0.5);
                    let _ = ctx.arc(6.0, 0.0, 8.0, PI * 0.5, PI * 1.5);
                    ctx.fill();
                    ctx.set_fill_style_str("#fff");
                    ctx.fill_rect(-10.0, -4.0, 4.0, 8.0);
                    ctx.fill_rect(6.0, -4.0, 4.0, 8.0);
                }
            }
            ctx.restore();
        }
    }

    fn draw_player(&self, state: &GameState, theme: &Theme) {
        let ctx = &self.ctx;
        let player = &state.player;
        let (x, y) = (player.pos.x as f64, player.pos.y as f64);
        let (w, h) = (player.size.x as f64, player.size.y as f64);
        let (cx, cy) = (x + w / 2.0, y + h / 2.0);

        // Shadow on the ground
        ctx.save();
        ctx.set_global_alpha(0.35);
        ctx.set_fill_style_str("#000");
        ctx.begin_path();
        let _ = ctx.ellipse(cx, GROUND_Y as f64 + 12.0, w * 0.55, 10.0, 0.0, 0.0, TAU);
        ctx.fill();
        ctx.restore();

        if player.dashing {
            ctx.save();
            ctx.set_global_alpha(0.25);
            ctx.set_fill_style_str(theme.accent_b);
            ctx.fill_rect(x - 18.0, y + 10.0, 18.0, h - 20.0);
            ctx.restore();
        }

        // Body and overalls
        ctx.set_fill_style_str(theme.accent_a);
        ctx.fill_rect(x, y, w, h);
        ctx.set_fill_style_str("#2a63ff");
        ctx.fill_rect(x, y + h * 0.55, w, h * 0.45);

        // Goggle strap and goggles
        ctx.set_fill_style_str("#222");
        ctx.fill_rect(x, y + 24.0, w, 10.0);
        for dx in [-12.0, 12.0] {
            ctx.set_fill_style_str("#cfd6df");
            ctx.begin_path();
            let _ = ctx.arc(cx + dx, y + 28.0, 12.0, 0.0, TAU);
            ctx.fill();
            ctx.set_fill_style_str("#221f27");
            ctx.begin_path();
            let _ = ctx.arc(cx + dx + 1.5, y + 29.5, 4.0, 0.0, TAU);
            ctx.fill();
        }

        if state.effects.shield_active() {
            ctx.save();
            ctx.set_stroke_style_str(theme.accent_b);
            ctx.set_global_alpha(0.7);
            ctx.set_line_width(3.0);
            ctx.begin_path();
            let _ = ctx.ellipse(cx, cy, w * 0.62, h * 0.66, 0.0, 0.0, TAU);
            ctx.stroke();
            ctx.restore();
        }
    }
}
