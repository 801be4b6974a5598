use bevy::prelude::*;

use crate::engine::loading::diagnostics::LoadDiagnostics;
use crate::engine::loading::model_loader::PendingModels;
use crate::rpc::web_rpc::WebRpcInterface;

/// Composition phase of the room. Interaction is live in both phases; models
/// simply keep appearing while composing.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum ScenePhase {
    #[default]
    Composing,
    Ready,
}

#[derive(Component)]
pub struct FpsText;

/// Move to `Ready` once every model load has settled.
pub fn transition_to_ready(
    pending: Res<PendingModels>,
    diagnostics: Res<LoadDiagnostics>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut next_state: ResMut<NextState<ScenePhase>>,
) {
    if !pending.is_empty() {
        return;
    }

    info!(
        "✓ Scene composed: {} models placed, {} failed",
        pending.placed(),
        pending.failed()
    );
    rpc_interface.send_notification(
        "scene_ready",
        serde_json::json!({
            "placed": pending.placed(),
            "failed": pending.failed(),
            "failures": diagnostics.total(),
        }),
    );
    next_state.set(ScenePhase::Ready);
}
