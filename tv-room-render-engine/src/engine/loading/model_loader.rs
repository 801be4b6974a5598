use bevy::gltf::Gltf;
use bevy::prelude::*;
use constants::placement::{PLACED_OBJECTS, ParentGroup, PlacedObjectSpec};

use crate::engine::core::error::SceneError;
use crate::engine::loading::diagnostics::{LoadDiagnostics, LoadOutcome, load_outcome};
use crate::engine::scene::composer::place_loaded_object;
use crate::engine::scene::tv_assembly::TvAssembly;

/// A requested model load waiting to settle.
#[derive(Debug, Clone)]
pub struct PendingModel {
    pub spec: &'static PlacedObjectSpec,
    pub handle: Handle<Gltf>,
}

/// Settled model load, ready to be placed or reported.
pub type SettledModel = (&'static PlacedObjectSpec, Result<Handle<Scene>, SceneError>);

#[derive(Resource, Debug, Default)]
pub struct PendingModels {
    pending: Vec<PendingModel>,
    placed: usize,
    failed: usize,
}

impl PendingModels {
    pub fn request(&mut self, spec: &'static PlacedObjectSpec, handle: Handle<Gltf>) {
        self.pending.push(PendingModel { spec, handle });
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn placed(&self) -> usize {
        self.placed
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Remove every load whose outcome is known. Loads settle independently;
    /// one failure does not hold back or cancel any other.
    pub fn settle(
        &mut self,
        mut outcome: impl FnMut(&PlacedObjectSpec, &Handle<Gltf>) -> LoadOutcome<Handle<Scene>>,
    ) -> Vec<SettledModel> {
        let mut settled = Vec::new();
        self.pending
            .retain(|model| match outcome(model.spec, &model.handle) {
                LoadOutcome::Pending => true,
                LoadOutcome::Loaded(scene) => {
                    settled.push((model.spec, Ok(scene)));
                    false
                }
                LoadOutcome::Failed(cause) => {
                    let err = SceneError::asset_load(model.spec.name, model.spec.asset.path, cause);
                    settled.push((model.spec, Err(err)));
                    false
                }
            });

        for (_, result) in &settled {
            match result {
                Ok(_) => self.placed += 1,
                Err(_) => self.failed += 1,
            }
        }
        settled
    }
}

/// Issue one load per placed object. Lamps sharing a model get the same handle.
pub fn request_model_loads(asset_server: Res<AssetServer>, mut pending: ResMut<PendingModels>) {
    for spec in PLACED_OBJECTS {
        pending.request(spec, asset_server.load(spec.asset.path));
    }
    info!("Requested {} model loads", pending.len());
}

fn scene_of(gltf: &Gltf) -> Option<Handle<Scene>> {
    gltf.default_scene
        .clone()
        .or_else(|| gltf.scenes.first().cloned())
}

/// Place every model whose load finished this frame and report the failures.
pub fn complete_model_loads(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
    tv_assembly: Res<TvAssembly>,
    mut pending: ResMut<PendingModels>,
    mut diagnostics: ResMut<LoadDiagnostics>,
) {
    if pending.is_empty() {
        return;
    }

    let settled = pending.settle(|_, handle| match load_outcome(&asset_server, handle) {
        LoadOutcome::Pending => LoadOutcome::Pending,
        LoadOutcome::Failed(cause) => LoadOutcome::Failed(cause),
        LoadOutcome::Loaded(()) => match gltfs.get(handle) {
            Some(gltf) => scene_of(gltf)
                .map(LoadOutcome::Loaded)
                .unwrap_or_else(|| LoadOutcome::Failed("model contains no scene".into())),
            None => LoadOutcome::Pending,
        },
    });

    for (spec, result) in settled {
        match result {
            Ok(scene) => {
                let parent = match spec.parent {
                    ParentGroup::World => None,
                    ParentGroup::TvAssembly => Some(tv_assembly.root),
                };
                place_loaded_object(&mut commands, spec, scene, parent);
                debug!("Placed {}", spec.name);
            }
            Err(err) => diagnostics.report(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use bevy::ecs::world::CommandQueue;

    use super::*;

    fn request_all() -> PendingModels {
        let mut pending = PendingModels::default();
        for spec in PLACED_OBJECTS {
            pending.request(spec, Handle::default());
        }
        pending
    }

    #[test]
    fn sofa_failure_is_reported_once_and_other_models_are_placed() {
        let mut pending = request_all();
        let settled = pending.settle(|spec, _| {
            if spec.name == "sofa" {
                LoadOutcome::Failed("404 Not Found".into())
            } else {
                LoadOutcome::Loaded(Handle::default())
            }
        });
        assert!(pending.is_empty());
        assert_eq!(pending.failed(), 1);
        assert_eq!(pending.placed(), PLACED_OBJECTS.len() - 1);

        let mut world = World::new();
        let mut queue = CommandQueue::default();
        let mut diagnostics = LoadDiagnostics::default();
        {
            let mut commands = Commands::new(&mut queue, &world);
            for (spec, result) in settled {
                match result {
                    Ok(scene) => {
                        place_loaded_object(&mut commands, spec, scene, None);
                    }
                    Err(err) => diagnostics.report(err),
                }
            }
        }
        queue.apply(&mut world);

        assert_eq!(diagnostics.total(), 1);
        assert_eq!(diagnostics.unforwarded()[0].subject(), "sofa");

        let mut names: Vec<String> = world
            .query_filtered::<&Name, With<SceneRoot>>()
            .iter(&world)
            .map(|name| name.to_string())
            .collect();
        names.sort();
        assert_eq!(names.len(), PLACED_OBJECTS.len() - 1);
        assert!(!names.iter().any(|name| name == "sofa"));
        assert!(names.iter().any(|name| name == "tv-table"));
    }

    #[test]
    fn loads_settle_in_any_order() {
        let mut pending = request_all();

        let first = pending.settle(|spec, _| {
            if spec.name == "ceiling-fan" {
                LoadOutcome::Loaded(Handle::default())
            } else {
                LoadOutcome::Pending
            }
        });
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].0.name, "ceiling-fan");
        assert_eq!(pending.len(), PLACED_OBJECTS.len() - 1);

        let rest = pending.settle(|_, _| LoadOutcome::Loaded(Handle::default()));
        assert_eq!(rest.len(), PLACED_OBJECTS.len() - 1);
        assert!(pending.is_empty());
        assert_eq!(pending.failed(), 0);
    }

    #[test]
    fn stalled_load_stays_pending() {
        let mut pending = request_all();
        let settled = pending.settle(|spec, _| {
            if spec.name == "door" {
                LoadOutcome::Pending
            } else {
                LoadOutcome::Loaded(Handle::default())
            }
        });
        assert_eq!(settled.len(), PLACED_OBJECTS.len() - 1);
        assert_eq!(pending.len(), 1);
        assert!(!pending.is_empty());
    }
}
