use bevy::asset::{LoadState, UntypedAssetId};
use bevy::prelude::*;
use constants::assets::name_for_path;

use crate::engine::core::error::SceneError;

/// Operator-facing failure log. A record is held only until it has been
/// forwarded to the host page; afterwards only the running count remains.
#[derive(Resource, Debug, Default)]
pub struct LoadDiagnostics {
    unforwarded: Vec<SceneError>,
    total: usize,
}

impl LoadDiagnostics {
    pub fn report(&mut self, failure: SceneError) {
        error!(subject = failure.subject(), "{}", failure);
        self.unforwarded.push(failure);
        self.total += 1;
    }

    /// Failures reported since the app started.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Records not yet handed to the host page.
    pub fn unforwarded(&self) -> &[SceneError] {
        &self.unforwarded
    }

    pub fn take_unforwarded(&mut self) -> Vec<SceneError> {
        std::mem::take(&mut self.unforwarded)
    }
}

/// Settled or outstanding state of one asynchronous load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome<T> {
    Pending,
    Loaded(T),
    Failed(String),
}

/// Map the asset server's view of a load onto [`LoadOutcome`].
pub fn load_outcome(asset_server: &AssetServer, id: impl Into<UntypedAssetId>) -> LoadOutcome<()> {
    match asset_server.get_load_state(id) {
        Some(LoadState::Loaded) => LoadOutcome::Loaded(()),
        Some(LoadState::Failed(err)) => LoadOutcome::Failed(err.to_string()),
        _ => LoadOutcome::Pending,
    }
}

#[derive(Debug, Clone)]
struct TrackedAsset {
    name: String,
    path: String,
    handle: UntypedHandle,
}

/// Texture and audio loads watched for failure. Model loads are tracked
/// separately by the model loader.
#[derive(Resource, Debug, Default)]
pub struct TrackedAssets {
    watching: Vec<TrackedAsset>,
}

impl TrackedAssets {
    pub fn track(&mut self, path: &str, handle: UntypedHandle) {
        if self.watching.iter().any(|asset| asset.path == path) {
            return;
        }
        self.watching.push(TrackedAsset {
            name: name_for_path(path).to_string(),
            path: path.to_string(),
            handle,
        });
    }

    pub fn len(&self) -> usize {
        self.watching.len()
    }

    pub fn is_empty(&self) -> bool {
        self.watching.is_empty()
    }

    /// Drop every settled load and return the failures among them.
    pub fn settle(
        &mut self,
        mut outcome: impl FnMut(&UntypedHandle) -> LoadOutcome<()>,
    ) -> Vec<SceneError> {
        let mut failures = Vec::new();
        self.watching.retain(|asset| match outcome(&asset.handle) {
            LoadOutcome::Pending => true,
            LoadOutcome::Loaded(()) => false,
            LoadOutcome::Failed(cause) => {
                failures.push(SceneError::asset_load(&asset.name, &asset.path, cause));
                false
            }
        });
        failures
    }
}

pub fn report_failed_assets(
    asset_server: Res<AssetServer>,
    mut tracked: ResMut<TrackedAssets>,
    mut diagnostics: ResMut<LoadDiagnostics>,
) {
    if tracked.is_empty() {
        return;
    }

    for failure in tracked.settle(|handle| load_outcome(&asset_server, handle)) {
        diagnostics.report(failure);
    }
}
