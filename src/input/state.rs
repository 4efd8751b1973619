use std::collections::HashSet;
use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, KeyEvent, MouseScrollDelta, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use super::bindings::{Action, KeyBindings};

/// Pixels of a trackpad scroll that count as one wheel line
const PIXELS_PER_LINE: f32 = 40.0;

/// Input for one frame, independent of the windowing backend
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Actions whose key is down at the start of the frame
    pub held: HashSet<Action>,
    /// Actions whose key went down since the previous frame, in press order
    pub triggered: Vec<Action>,
    /// Vertical wheel movement since the previous frame, in lines (up is positive)
    pub scroll: f32,
}

impl FrameInput {
    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    pub fn was_triggered(&self, action: Action) -> bool {
        self.triggered.contains(&action)
    }

    pub fn with_held(mut self, action: Action) -> Self {
        self.held.insert(action);
        self
    }

    pub fn with_triggered(mut self, action: Action) -> Self {
        self.triggered.push(action);
        self
    }

    pub fn with_scroll(mut self, scroll: f32) -> Self {
        self.scroll = scroll;
        self
    }
}

/// Folds window events into [`FrameInput`] snapshots
#[derive(Debug, Clone, Default)]
pub struct InputState {
    bindings: KeyBindings,
    pressed: HashSet<KeyCode>,
    triggered: Vec<Action>,
    scroll: f32,
}

impl InputState {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            ..Default::default()
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Records keyboard, wheel and focus events; returns true if the event was used
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        repeat,
                        ..
                    },
                ..
            } => self.handle_key(*code, *state, *repeat),
            WindowEvent::MouseWheel { delta, .. } => {
                self.handle_scroll(*delta);
                true
            }
            WindowEvent::Focused(false) => {
                // Key releases are not delivered while unfocused
                self.pressed.clear();
                false
            }
            _ => false,
        }
    }

    /// Records a key transition; returns true if the key is bound
    pub fn handle_key(&mut self, code: KeyCode, state: ElementState, repeat: bool) -> bool {
        let Some(action) = self.bindings.action(code) else {
            return false;
        };

        match state {
            ElementState::Pressed => {
                if self.pressed.insert(code) && !repeat {
                    log::debug!("{} pressed ({code:?})", action.name());
                    self.triggered.push(action);
                }
            }
            ElementState::Released => {
                self.pressed.remove(&code);
            }
        }
        true
    }

    pub fn handle_scroll(&mut self, delta: MouseScrollDelta) {
        self.scroll += match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(PhysicalPosition { y, .. }) => y as f32 / PIXELS_PER_LINE,
        };
    }

    /// Snapshot of the input since the previous call
    pub fn begin_frame(&mut self) -> FrameInput {
        let held = self
            .pressed
            .iter()
            .filter_map(|code| self.bindings.action(*code))
            .collect();

        FrameInput {
            held,
            triggered: std::mem::take(&mut self.triggered),
            scroll: std::mem::take(&mut self.scroll),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::ScenePreset;

    #[test]
    fn test_press_triggers_once_and_stays_held() {
        let mut input = InputState::default();

        input.handle_key(KeyCode::ArrowLeft, ElementState::Pressed, false);
        let first = input.begin_frame();
        assert!(first.is_held(Action::PanLeft));
        assert!(first.was_triggered(Action::PanLeft));

        input.handle_key(KeyCode::ArrowLeft, ElementState::Pressed, true);
        let second = input.begin_frame();
        assert!(second.is_held(Action::PanLeft));
        assert!(second.triggered.is_empty());

        input.handle_key(KeyCode::ArrowLeft, ElementState::Released, false);
        let third = input.begin_frame();
        assert!(!third.is_held(Action::PanLeft));
    }

    #[test]
    fn test_tap_between_frames_is_not_lost() {
        let mut input = InputState::default();

        input.handle_key(KeyCode::Digit3, ElementState::Pressed, false);
        input.handle_key(KeyCode::Digit3, ElementState::Released, false);

        let frame = input.begin_frame();
        assert!(frame.was_triggered(Action::SelectScene(ScenePreset::Cluster)));
        assert!(frame.held.is_empty());
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let mut input = InputState::default();
        assert!(!input.handle_key(KeyCode::KeyQ, ElementState::Pressed, false));
        assert_eq!(input.begin_frame(), FrameInput::default());
    }

    #[test]
    fn test_scroll_accumulates_and_resets() {
        let mut input = InputState::default();

        input.handle_scroll(MouseScrollDelta::LineDelta(0.0, 1.0));
        input.handle_scroll(MouseScrollDelta::LineDelta(0.5, 2.0));
        input.handle_scroll(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -40.0)));

        assert_eq!(input.begin_frame().scroll, 2.0);
        assert_eq!(input.begin_frame().scroll, 0.0);
    }

    #[test]
    fn test_custom_bindings() {
        let mut bindings = KeyBindings::empty();
        bindings.bind(KeyCode::KeyP, Action::TogglePause);
        let mut input = InputState::new(bindings);

        assert!(!input.handle_key(KeyCode::Space, ElementState::Pressed, false));
        assert!(input.handle_key(KeyCode::KeyP, ElementState::Pressed, false));
        assert!(input.begin_frame().was_triggered(Action::TogglePause));
    }
}
