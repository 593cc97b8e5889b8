//! Game Renderer
//!
//! Draws the backdrop, then either the live round (nebulae and Scarfy) or,
//! once the round has ended, the win/lose overlay with its restart button.

use macroquad::prelude::*;
use crate::assets::Textures;
use crate::ui::overlay::{BUTTON_FONT_SIZE, MESSAGE_FONT_SIZE, RESTART_LABEL};
use crate::ui::OverlayLayout;
use super::anim::AnimData;
use super::parallax::{fit_scale, Backdrop};
use super::runtime::{GameState, RoundOutcome};

/// Scaled width of each parallax layer (0 for a missing layer)
pub fn layer_widths(textures: &Textures, screen_height: f32) -> [f32; 3] {
    textures.layers.each_ref().map(|layer| match layer {
        Some(tex) => tex.width() * fit_scale(screen_height, tex.height()),
        None => 0.0,
    })
}

fn draw_backdrop(textures: &Textures, backdrop: &Backdrop) {
    let sh = screen_height();
    for (tex, layer) in textures.layers.iter().zip(&backdrop.layers) {
        let Some(tex) = tex else { continue };
        let scale = fit_scale(sh, tex.height());
        let size = vec2(tex.width() * scale, tex.height() * scale);
        for x in layer.copies(size.x) {
            draw_texture_ex(tex, x, 0.0, WHITE, DrawTextureParams {
                dest_size: Some(size),
                ..Default::default()
            });
        }
    }
}

/// Draw the current frame of a sprite sheet
fn draw_sprite(tex: &Texture2D, sprite: &AnimData) {
    let r = sprite.frame_rect;
    draw_texture_ex(tex, sprite.position.0, sprite.position.1, WHITE, DrawTextureParams {
        source: Some(Rect::new(r.x, r.y, r.w, r.h)),
        ..Default::default()
    });
}

/// Text drawn with its top-left corner at (x, y)
fn draw_text_top_left(text: &str, x: f32, y: f32, font_size: u16, color: Color) {
    let dims = measure_text(text, None, font_size, 1.0);
    draw_text(text, x, y + dims.offset_y, font_size as f32, color);
}

fn draw_overlay(state: &GameState) {
    let Some(message) = state.outcome.message() else { return };
    let color = if state.outcome == RoundOutcome::Lost { RED } else { GREEN };

    let message_width = measure_text(message, None, MESSAGE_FONT_SIZE, 1.0).width;
    let label_width = measure_text(RESTART_LABEL, None, BUTTON_FONT_SIZE, 1.0).width;
    let layout = OverlayLayout::compute(
        state.dims.screen_width,
        state.dims.screen_height,
        message_width,
        label_width,
    );

    draw_text_top_left(message, layout.message.0, layout.message.1, MESSAGE_FONT_SIZE, color);
    let b = layout.button;
    draw_rectangle(b.x, b.y, b.w, b.h, GRAY);
    draw_text_top_left(RESTART_LABEL, layout.label.0, layout.label.1, BUTTON_FONT_SIZE, WHITE);
}

pub fn draw_frame(state: &GameState, textures: &Textures, backdrop: &Backdrop) {
    clear_background(WHITE);
    draw_backdrop(textures, backdrop);

    if state.outcome.is_ended() {
        draw_overlay(state);
    } else {
        for nebula in state.obstacles.nebulae() {
            draw_sprite(&textures.nebula, nebula);
        }
        draw_sprite(&textures.scarfy, &state.player.sprite);
    }
}
