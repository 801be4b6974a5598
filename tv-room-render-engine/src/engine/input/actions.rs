use bevy::input::keyboard::Key;
use bevy::math::Vec3;
use constants::controls::{MOVE_STEP, VOLUME_STEP};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMove {
    Right,
    Left,
    Forward,
    Back,
    Up,
    Down,
}

impl CameraMove {
    /// World-space step for one key press.
    pub fn delta(self) -> Vec3 {
        let direction = match self {
            Self::Right => Vec3::X,
            Self::Left => Vec3::NEG_X,
            Self::Forward => Vec3::NEG_Z,
            Self::Back => Vec3::Z,
            Self::Up => Vec3::Y,
            Self::Down => Vec3::NEG_Y,
        };
        direction * MOVE_STEP
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    MoveCamera(CameraMove),
    ToggleVideo,
    SwitchClip,
    ShowVideo,
    ShowImages,
    ToggleMusic,
    AdjustVolume(f32),
    NextTrack,
}

impl InputAction {
    /// Action for a DOM-style key identifier (`"ArrowLeft"`, `"p"`, `"+"`).
    /// Letter keys match either case; anything else maps to no action.
    pub fn from_key_str(key: &str) -> Option<Self> {
        let action = match key {
            "ArrowRight" => Self::MoveCamera(CameraMove::Right),
            "ArrowLeft" => Self::MoveCamera(CameraMove::Left),
            "ArrowUp" => Self::MoveCamera(CameraMove::Forward),
            "ArrowDown" => Self::MoveCamera(CameraMove::Back),
            "1" => Self::MoveCamera(CameraMove::Up),
            "0" => Self::MoveCamera(CameraMove::Down),
            "p" | "P" => Self::ToggleVideo,
            "c" | "C" => Self::SwitchClip,
            "v" | "V" => Self::ShowVideo,
            "i" | "I" => Self::ShowImages,
            "m" | "M" => Self::ToggleMusic,
            "+" => Self::AdjustVolume(VOLUME_STEP),
            "-" => Self::AdjustVolume(-VOLUME_STEP),
            "b" | "B" => Self::NextTrack,
            _ => return None,
        };
        Some(action)
    }

    pub fn from_logical_key(key: &Key) -> Option<Self> {
        match key {
            Key::ArrowRight => Self::from_key_str("ArrowRight"),
            Key::ArrowLeft => Self::from_key_str("ArrowLeft"),
            Key::ArrowUp => Self::from_key_str("ArrowUp"),
            Key::ArrowDown => Self::from_key_str("ArrowDown"),
            Key::Character(text) => Self::from_key_str(text.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_table_matches_dom_identifiers() {
        assert_eq!(
            InputAction::from_key_str("ArrowUp"),
            Some(InputAction::MoveCamera(CameraMove::Forward))
        );
        assert_eq!(
            InputAction::from_key_str("0"),
            Some(InputAction::MoveCamera(CameraMove::Down))
        );
        assert_eq!(InputAction::from_key_str("B"), Some(InputAction::NextTrack));
        assert_eq!(InputAction::from_key_str("i"), Some(InputAction::ShowImages));
        assert_eq!(
            InputAction::from_key_str("-"),
            Some(InputAction::AdjustVolume(-VOLUME_STEP))
        );
    }

    #[test]
    fn unknown_keys_do_nothing() {
        for key in ["x", "Enter", "2", "", "pp"] {
            assert_eq!(InputAction::from_key_str(key), None, "{key}");
        }
        assert_eq!(InputAction::from_logical_key(&Key::Escape), None);
    }

    #[test]
    fn logical_keys_use_the_same_table() {
        assert_eq!(
            InputAction::from_logical_key(&Key::Character("P".into())),
            Some(InputAction::ToggleVideo)
        );
        assert_eq!(
            InputAction::from_logical_key(&Key::ArrowRight),
            Some(InputAction::MoveCamera(CameraMove::Right))
        );
    }

    #[test]
    fn arrow_up_moves_towards_the_tv() {
        assert_eq!(CameraMove::Forward.delta(), Vec3::new(0.0, 0.0, -MOVE_STEP));
        assert_eq!(CameraMove::Up.delta(), Vec3::new(0.0, MOVE_STEP, 0.0));
    }
}
