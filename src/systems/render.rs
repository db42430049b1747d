//! Raylib drawing.
//!
//! The world is drawn with the origin at the window centre and
//! `pixels_per_unit` pixels per world unit. UI bars are drawn in screen
//! space on top. With [`DebugMode`] present, per-gauge numbers are printed.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::fillbar::FillBar;
use crate::components::mapposition::MapPosition;
use crate::components::motion::MotionState;
use crate::components::player::Player;
use crate::components::screenposition::ScreenPosition;
use crate::components::stamina::StaminaGauge;
use crate::resources::debugmode::DebugMode;
use crate::resources::gameconfig::GameConfig;

pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    config: Res<GameConfig>,
    players: Query<(&MapPosition, &Player, Option<&MotionState>)>,
    bars: Query<(&ScreenPosition, &FillBar)>,
    gauges: Query<&StaminaGauge>,
    motions: Query<&MotionState>,
    debug: Option<Res<DebugMode>>,
) {
    let (w, h) = config.window_size();
    let ppu = config.pixels_per_unit;
    let center = Vector2 {
        x: w as f32 / 2.0,
        y: h as f32 / 2.0,
    };

    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::RAYWHITE);

    for (position, player, motion) in players.iter() {
        let size = player.size * ppu;
        let top_left = Vector2 {
            x: center.x + position.pos.x * ppu - size / 2.0,
            y: center.y + position.pos.y * ppu - size / 2.0,
        };
        let color = match motion {
            Some(m) if m.running && m.is_moving() => Color::ORANGE,
            _ => Color::DARKBLUE,
        };
        d.draw_rectangle_v(top_left, Vector2 { x: size, y: size }, color);
    }

    for (screen, bar) in bars.iter() {
        let color = if bar.fill > 0.0 {
            Color::LIME
        } else {
            Color::MAROON
        };
        d.draw_rectangle_v(
            screen.pos,
            Vector2 {
                x: bar.filled_width(),
                y: bar.height,
            },
            color,
        );
        d.draw_rectangle_lines(
            screen.pos.x as i32,
            screen.pos.y as i32,
            bar.width as i32,
            bar.height as i32,
            Color::DARKGRAY,
        );
    }

    if debug.is_some() {
        d.draw_fps(10, h as i32 - 20);
        let mut y = 40;
        for gauge in gauges.iter() {
            let text = format!(
                "stamina {:.2}/{:.2} fill {:.2} can_run {}",
                gauge.current, gauge.duration, gauge.last_fill, gauge.can_run
            );
            d.draw_text(&text, 10, y, 10, Color::BLACK);
            y += 14;
            if let Ok(motion) = motions.get(gauge.player) {
                let text = format!(
                    "speed {:.1} dir ({:.0}, {:.0}) running {}",
                    motion.speed, motion.direction.x, motion.direction.y, motion.running
                );
                d.draw_text(&text, 10, y, 10, Color::BLACK);
                y += 14;
            }
        }
    }
}
