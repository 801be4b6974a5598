use serde::Serialize;
use thiserror::Error;

/// Every failure the scene can hit. None of them abort the running scene: load
/// and playback failures leave the affected element missing, and an empty media
/// cycler is rejected before the app starts.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneError {
    #[error("Error loading {name} ({path}): {cause}")]
    AssetLoad {
        name: String,
        path: String,
        cause: String,
    },

    #[error("{media} playback failed: {cause}")]
    Playback { media: String, cause: String },

    #[error("Media cycler `{name}` needs at least one source")]
    EmptyCycler { name: &'static str },
}

impl SceneError {
    pub fn asset_load(name: &str, path: &str, cause: impl ToString) -> Self {
        Self::AssetLoad {
            name: name.to_string(),
            path: path.to_string(),
            cause: cause.to_string(),
        }
    }

    pub fn playback(media: &str, cause: impl ToString) -> Self {
        Self::Playback {
            media: media.to_string(),
            cause: cause.to_string(),
        }
    }

    /// Name of the asset or media element the failure is about.
    pub fn subject(&self) -> &str {
        match self {
            Self::AssetLoad { name, .. } => name,
            Self::Playback { media, .. } => media,
            Self::EmptyCycler { name } => name,
        }
    }

    /// Notification method used when forwarding the failure to the host page.
    pub fn notification_method(&self) -> &'static str {
        match self {
            Self::AssetLoad { .. } => "asset_load_failed",
            Self::Playback { .. } => "playback_failed",
            Self::EmptyCycler { .. } => "startup_failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_load_message_names_the_asset() {
        let err = SceneError::asset_load("sofa", "model/sofa/scene.gltf", "404 Not Found");
        assert_eq!(err.subject(), "sofa");
        assert_eq!(
            err.to_string(),
            "Error loading sofa (model/sofa/scene.gltf): 404 Not Found"
        );
    }

    #[test]
    fn serialises_with_kind_tag() {
        let err = SceneError::playback("tv video", "NotAllowedError");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "playback");
        assert_eq!(json["media"], "tv video");
        assert_eq!(err.notification_method(), "playback_failed");
    }
}
