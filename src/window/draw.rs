use raylib::prelude::*;

use carousel::{FocusTarget, SlideDescriptor, SlideSet};

use super::WindowHost;
use super::layout::{HeroLayout, Rect};

// Overlay gradient of the storefront hero, 70% opaque
const OVERLAY_TOP: Color = Color::new(4, 29, 69, 179);
const OVERLAY_BOTTOM: Color = Color::new(163, 21, 33, 179);
const CONTROL_FILL: Color = Color::new(255, 255, 255, 60);
const DOT_IDLE: Color = Color::new(255, 255, 255, 110);
const STATUS_FILL: Color = Color::new(18, 18, 24, 255);
const CTA_FILL: Color = Color::new(163, 21, 33, 255);

pub fn draw_hero(
    d: &mut RaylibDrawHandle,
    layout: &HeroLayout,
    slides: &SlideSet,
    textures: &[Option<Texture2D>],
    host: &WindowHost,
    playing: bool,
    focus: FocusTarget,
) {
    d.clear_background(Color::BLACK);

    let active = host.active_slide();
    if let Some(Some(texture)) = textures.get(active) {
        draw_cover(d, texture, &layout.hero);
    }
    d.draw_rectangle_gradient_v(
        layout.hero.x as i32,
        layout.hero.y as i32,
        layout.hero.w as i32,
        layout.hero.h as i32,
        OVERLAY_TOP,
        OVERLAY_BOTTOM,
    );
    if let Some(slide) = slides.get(active) {
        draw_content(d, slide, &layout.hero);
    }

    draw_button(d, &layout.previous, "<", false);
    draw_button(d, &layout.next, ">", false);
    let play_label = if playing { "||" } else { ">" };
    draw_button(d, &layout.play_pause, play_label, focus == FocusTarget::PlayPause);

    for (i, dot) in layout.dots.iter().enumerate() {
        let (cx, cy) = dot.center();
        let color = if i == host.active_dot() { Color::WHITE } else { DOT_IDLE };
        d.draw_circle(cx as i32, cy as i32, dot.w * 0.5, color);
    }

    // Live region strip, kept off the image
    let status = &layout.status;
    d.draw_rectangle(
        status.x as i32,
        status.y as i32,
        status.w as i32,
        status.h as i32,
        STATUS_FILL,
    );
    if let Some(text) = host.live_text() {
        d.draw_text(text, status.x as i32 + 12, status.y as i32 + 6, 16, Color::LIGHTGRAY);
    }
}

/// Draws `texture` scaled to fill `area`, cropping the overflow.
fn draw_cover(d: &mut RaylibDrawHandle, texture: &Texture2D, area: &Rect) {
    let tex_width = texture.width() as f32;
    let tex_height = texture.height() as f32;
    if tex_width <= 0.0 || tex_height <= 0.0 || area.w <= 0.0 || area.h <= 0.0 {
        return;
    }

    let scale = (area.w / tex_width).max(area.h / tex_height);
    let src_width = area.w / scale;
    let src_height = area.h / scale;

    d.draw_texture_pro(
        texture,
        Rectangle::new(
            (tex_width - src_width) * 0.5,
            (tex_height - src_height) * 0.5,
            src_width,
            src_height,
        ),
        Rectangle::new(area.x, area.y, area.w, area.h),
        Vector2::new(0.0, 0.0),
        0.0,
        Color::WHITE,
    );
}

fn draw_content(d: &mut RaylibDrawHandle, slide: &SlideDescriptor, hero: &Rect) {
    let left = hero.x as i32 + 96;
    let top = (hero.y + hero.h * 0.32) as i32;

    d.draw_text(&slide.title, left, top, 48, Color::WHITE);
    d.draw_text(&slide.subtitle, left, top + 64, 24, Color::RAYWHITE);

    let cta_width = slide.cta_label.len() as i32 * 12 + 40;
    d.draw_rectangle(left, top + 112, cta_width, 44, CTA_FILL);
    d.draw_text(&slide.cta_label, left + 20, top + 124, 20, Color::WHITE);
}

fn draw_button(d: &mut RaylibDrawHandle, area: &Rect, label: &str, focused: bool) {
    d.draw_rectangle(area.x as i32, area.y as i32, area.w as i32, area.h as i32, CONTROL_FILL);
    if focused {
        d.draw_rectangle_lines(
            area.x as i32 - 2,
            area.y as i32 - 2,
            area.w as i32 + 4,
            area.h as i32 + 4,
            Color::GOLD,
        );
    }
    d.draw_text(label, area.x as i32 + 16, area.y as i32 + 12, 24, Color::WHITE);
}
