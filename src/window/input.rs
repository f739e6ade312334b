use raylib::prelude::*;

use carousel::{FocusTarget, InputEvent, Key, KeyPress};

use super::layout::{HeroLayout, Hit};

const WATCHED_KEYS: [KeyboardKey; 8] = [
    KeyboardKey::KEY_LEFT,
    KeyboardKey::KEY_RIGHT,
    KeyboardKey::KEY_HOME,
    KeyboardKey::KEY_END,
    KeyboardKey::KEY_SPACE,
    KeyboardKey::KEY_ENTER,
    KeyboardKey::KEY_KP_ENTER,
    KeyboardKey::KEY_TAB,
];

/// Raw window input sampled once per frame.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub mouse: (f32, f32),
    pub pressed: bool,
    pub released: bool,
    pub hidden: bool,
    pub focused: bool,
    pub keys: Vec<KeyboardKey>,
}

impl FrameInput {
    pub fn sample(rl: &RaylibHandle) -> Self {
        let mouse = rl.get_mouse_position();
        Self {
            mouse: (mouse.x, mouse.y),
            pressed: rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT),
            released: rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT),
            hidden: rl.is_window_minimized() || rl.is_window_hidden(),
            focused: rl.is_window_focused(),
            keys: WATCHED_KEYS.into_iter().filter(|k| rl.is_key_pressed(*k)).collect(),
        }
    }
}

pub fn map_key(key: KeyboardKey) -> Option<Key> {
    match key {
        KeyboardKey::KEY_LEFT => Some(Key::ArrowLeft),
        KeyboardKey::KEY_RIGHT => Some(Key::ArrowRight),
        KeyboardKey::KEY_HOME => Some(Key::Home),
        KeyboardKey::KEY_END => Some(Key::End),
        KeyboardKey::KEY_SPACE => Some(Key::Space),
        KeyboardKey::KEY_ENTER | KeyboardKey::KEY_KP_ENTER => Some(Key::Enter),
        _ => None,
    }
}

/// Turns frame samples into carousel events: edges of hover and visibility,
/// clicks on controls, press/release on the slide area as a touch gesture, and
/// keys while the window has focus. Tab moves focus between the carousel region
/// and the play/pause affordance.
#[derive(Debug, Default)]
pub struct InputPoller {
    hovering: bool,
    hidden: bool,
    touching: bool,
    focus: FocusTarget,
}

impl InputPoller {
    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    pub fn poll(&mut self, rl: &RaylibHandle, layout: &HeroLayout) -> Vec<InputEvent> {
        self.translate(&FrameInput::sample(rl), layout)
    }

    pub fn translate(&mut self, frame: &FrameInput, layout: &HeroLayout) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if frame.hidden != self.hidden {
            self.hidden = frame.hidden;
            events.push(InputEvent::VisibilityChange { hidden: frame.hidden });
        }

        let (x, y) = frame.mouse;
        let inside = layout.hero.contains(x, y);
        if inside != self.hovering {
            self.hovering = inside;
            events.push(if inside { InputEvent::PointerEnter } else { InputEvent::PointerLeave });
        }

        if frame.pressed {
            match layout.hit(x, y) {
                Hit::Previous => events.push(InputEvent::PreviousControl),
                Hit::Next => events.push(InputEvent::NextControl),
                Hit::Dot(i) => events.push(InputEvent::Indicator(i)),
                Hit::PlayPause => {
                    self.focus = FocusTarget::PlayPause;
                    events.push(InputEvent::PlayPauseControl);
                }
                Hit::Slide => {
                    self.focus = FocusTarget::Region;
                    self.touching = true;
                    events.push(InputEvent::TouchStart { x });
                }
                Hit::Outside => {}
            }
        }

        if frame.released && self.touching {
            self.touching = false;
            events.push(InputEvent::TouchEnd { x });
        }

        if frame.focused {
            for key in &frame.keys {
                if *key == KeyboardKey::KEY_TAB {
                    self.focus = match self.focus {
                        FocusTarget::Region => FocusTarget::PlayPause,
                        FocusTarget::PlayPause => FocusTarget::Region,
                    };
                } else if let Some(key) = map_key(*key) {
                    events.push(InputEvent::Key(KeyPress::on(key, self.focus)));
                }
            }
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> HeroLayout {
        HeroLayout::new(1280.0, 560.0, 3)
    }

    fn at(x: f32, y: f32) -> FrameInput {
        FrameInput {
            mouse: (x, y),
            focused: true,
            ..Default::default()
        }
    }

    #[test]
    fn hover_edges_are_reported_once() {
        let layout = layout();
        let mut poller = InputPoller::default();

        assert_eq!(poller.translate(&at(640.0, 200.0), &layout), [InputEvent::PointerEnter]);
        assert!(poller.translate(&at(650.0, 210.0), &layout).is_empty());
        assert_eq!(poller.translate(&at(640.0, 550.0), &layout), [InputEvent::PointerLeave]);
    }

    #[test]
    fn drag_on_slide_becomes_touch_pair() {
        let layout = layout();
        let mut poller = InputPoller::default();
        poller.translate(&at(700.0, 200.0), &layout);

        let press = FrameInput { pressed: true, ..at(700.0, 200.0) };
        assert_eq!(poller.translate(&press, &layout), [InputEvent::TouchStart { x: 700.0 }]);

        let release = FrameInput { released: true, ..at(600.0, 200.0) };
        assert_eq!(poller.translate(&release, &layout), [InputEvent::TouchEnd { x: 600.0 }]);
    }

    #[test]
    fn tab_moves_focus_to_play_pause() {
        let layout = layout();
        let mut poller = InputPoller::default();
        poller.translate(&at(640.0, 200.0), &layout);

        let frame = FrameInput {
            keys: vec![KeyboardKey::KEY_TAB, KeyboardKey::KEY_SPACE],
            ..at(640.0, 200.0)
        };
        assert_eq!(
            poller.translate(&frame, &layout),
            [InputEvent::Key(KeyPress::on(Key::Space, FocusTarget::PlayPause))]
        );
    }

    #[test]
    fn clicking_play_pause_toggles_and_focuses_it() {
        let layout = layout();
        let mut poller = InputPoller::default();
        let (x, y) = layout.play_pause.center();
        poller.translate(&at(x, y), &layout);

        let click = FrameInput { pressed: true, ..at(x, y) };
        assert_eq!(poller.translate(&click, &layout), [InputEvent::PlayPauseControl]);
        assert_eq!(poller.focus(), FocusTarget::PlayPause);
    }

    #[test]
    fn keys_need_window_focus() {
        let layout = layout();
        let mut poller = InputPoller::default();
        poller.translate(&at(640.0, 200.0), &layout);

        let frame = FrameInput {
            focused: false,
            keys: vec![KeyboardKey::KEY_RIGHT],
            ..at(640.0, 200.0)
        };
        assert!(poller.translate(&frame, &layout).is_empty());
    }

    #[test]
    fn minimising_hides_the_page() {
        let layout = layout();
        let mut poller = InputPoller::default();
        let frame = FrameInput { hidden: true, ..at(-10.0, -10.0) };
        assert_eq!(
            poller.translate(&frame, &layout),
            [InputEvent::VisibilityChange { hidden: true }]
        );
    }
}
