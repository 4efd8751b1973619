use std::collections::HashMap;
use winit::keyboard::KeyCode;

use crate::simulation::ScenePreset;

/// Everything the keyboard can ask the visualizer to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    PanRight,
    PanLeft,
    PanUp,
    PanDown,
    /// Decrease the velocity scale while held
    SlowDown,
    /// Increase the velocity scale while held
    SpeedUp,
    SelectScene(ScenePreset),
    ReloadScene,
    TogglePause,
    ToggleForceModel,
    Quit,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::PanRight => "Pan Right",
            Action::PanLeft => "Pan Left",
            Action::PanUp => "Pan Up",
            Action::PanDown => "Pan Down",
            Action::SlowDown => "Slow Down",
            Action::SpeedUp => "Speed Up",
            Action::SelectScene(_) => "Select Scene",
            Action::ReloadScene => "Reload Scene",
            Action::TogglePause => "Pause / Resume",
            Action::ToggleForceModel => "Toggle Force Model",
            Action::Quit => "Quit",
        }
    }
}

/// Table from physical keys to actions
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyCode, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert(KeyCode::ArrowRight, Action::PanRight);
        bindings.insert(KeyCode::ArrowLeft, Action::PanLeft);
        bindings.insert(KeyCode::ArrowUp, Action::PanUp);
        bindings.insert(KeyCode::ArrowDown, Action::PanDown);

        bindings.insert(KeyCode::Comma, Action::SlowDown);
        bindings.insert(KeyCode::Period, Action::SpeedUp);

        // Top row and keypad both select scenes
        let scene_keys = [
            (KeyCode::Digit1, KeyCode::Numpad1),
            (KeyCode::Digit2, KeyCode::Numpad2),
            (KeyCode::Digit3, KeyCode::Numpad3),
            (KeyCode::Digit4, KeyCode::Numpad4),
        ];
        for ((digit, numpad), preset) in scene_keys.into_iter().zip(ScenePreset::ALL) {
            bindings.insert(digit, Action::SelectScene(preset));
            bindings.insert(numpad, Action::SelectScene(preset));
        }

        bindings.insert(KeyCode::KeyR, Action::ReloadScene);
        bindings.insert(KeyCode::Space, Action::TogglePause);
        bindings.insert(KeyCode::KeyG, Action::ToggleForceModel);
        bindings.insert(KeyCode::Escape, Action::Quit);

        Self { bindings }
    }
}

impl KeyBindings {
    /// A table with no bindings
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    pub fn action(&self, key: KeyCode) -> Option<Action> {
        self.bindings.get(&key).copied()
    }

    /// Binds `key` to `action`, returning the action it replaced
    pub fn bind(&mut self, key: KeyCode, action: Action) -> Option<Action> {
        self.bindings.insert(key, action)
    }

    pub fn unbind(&mut self, key: KeyCode) -> Option<Action> {
        self.bindings.remove(&key)
    }

    /// Keys bound to `action`, in no particular order
    pub fn keys_for(&self, action: Action) -> impl Iterator<Item = KeyCode> + '_ {
        self.bindings
            .iter()
            .filter(move |(_, bound)| **bound == action)
            .map(|(key, _)| *key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::default();

        assert_eq!(bindings.action(KeyCode::ArrowRight), Some(Action::PanRight));
        assert_eq!(bindings.action(KeyCode::Comma), Some(Action::SlowDown));
        assert_eq!(bindings.action(KeyCode::Period), Some(Action::SpeedUp));
        assert_eq!(bindings.action(KeyCode::Escape), Some(Action::Quit));
        assert_eq!(bindings.action(KeyCode::KeyZ), None);
    }

    #[test]
    fn test_digit_and_numpad_select_same_scene() {
        let bindings = KeyBindings::default();

        for (number, preset) in ScenePreset::ALL.into_iter().enumerate() {
            let digit = [KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3, KeyCode::Digit4][number];
            let numpad =
                [KeyCode::Numpad1, KeyCode::Numpad2, KeyCode::Numpad3, KeyCode::Numpad4][number];
            assert_eq!(bindings.action(digit), Some(Action::SelectScene(preset)));
            assert_eq!(bindings.action(numpad), Some(Action::SelectScene(preset)));
        }
        assert_eq!(bindings.action(KeyCode::Digit5), None);
    }

    #[test]
    fn test_rebinding() {
        let mut bindings = KeyBindings::empty();
        assert_eq!(bindings.bind(KeyCode::KeyD, Action::PanRight), None);
        assert_eq!(
            bindings.bind(KeyCode::KeyD, Action::PanLeft),
            Some(Action::PanRight)
        );
        assert_eq!(bindings.keys_for(Action::PanLeft).collect::<Vec<_>>(), vec![KeyCode::KeyD]);
        assert_eq!(bindings.unbind(KeyCode::KeyD), Some(Action::PanLeft));
        assert_eq!(bindings.action(KeyCode::KeyD), None);
    }
}
