#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w * 0.5, self.y + self.h * 0.5)
    }
}

/// What sits under a point of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Previous,
    Next,
    PlayPause,
    Dot(usize),
    Slide,
    Outside,
}

pub const STATUS_HEIGHT: f32 = 28.0; // Strip under the hero holding the live region text
const CONTROL_SIZE: f32 = 48.0;
const CONTROL_MARGIN: f32 = 16.0;
const DOT_SIZE: f32 = 14.0;
const DOT_GAP: f32 = 12.0;
const DOTS_BOTTOM: f32 = 28.0;

/// Screen geometry of the hero section for a given window size.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroLayout {
    pub hero: Rect,
    pub previous: Rect,
    pub next: Rect,
    pub play_pause: Rect,
    pub dots: Vec<Rect>,
    pub status: Rect,
}

impl HeroLayout {
    pub fn new(width: f32, height: f32, slide_count: usize) -> Self {
        let hero = Rect::new(0.0, 0.0, width, (height - STATUS_HEIGHT).max(0.0));
        let control_y = hero.h * 0.5 - CONTROL_SIZE * 0.5;

        let row_width =
            slide_count as f32 * DOT_SIZE + slide_count.saturating_sub(1) as f32 * DOT_GAP;
        let row_x = (width - row_width) * 0.5;
        let dot_y = hero.h - DOTS_BOTTOM - DOT_SIZE;
        let dots = (0..slide_count)
            .map(|i| Rect::new(row_x + i as f32 * (DOT_SIZE + DOT_GAP), dot_y, DOT_SIZE, DOT_SIZE))
            .collect();

        Self {
            previous: Rect::new(CONTROL_MARGIN, control_y, CONTROL_SIZE, CONTROL_SIZE),
            next: Rect::new(
                width - CONTROL_MARGIN - CONTROL_SIZE,
                control_y,
                CONTROL_SIZE,
                CONTROL_SIZE,
            ),
            play_pause: Rect::new(
                width - CONTROL_MARGIN - CONTROL_SIZE,
                hero.h - CONTROL_MARGIN - CONTROL_SIZE,
                CONTROL_SIZE,
                CONTROL_SIZE,
            ),
            status: Rect::new(0.0, hero.h, width, STATUS_HEIGHT),
            dots,
            hero,
        }
    }

    pub fn hit(&self, x: f32, y: f32) -> Hit {
        if !self.hero.contains(x, y) {
            return Hit::Outside;
        }
        if self.previous.contains(x, y) {
            return Hit::Previous;
        }
        if self.next.contains(x, y) {
            return Hit::Next;
        }
        if self.play_pause.contains(x, y) {
            return Hit::PlayPause;
        }
        if let Some(i) = self.dots.iter().position(|d| d.contains(x, y)) {
            return Hit::Dot(i);
        }
        Hit::Slide
    }
}
