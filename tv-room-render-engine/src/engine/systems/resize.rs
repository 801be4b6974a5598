use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

/// Current viewport size in logical pixels.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub size: Vec2,
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self {
            size: Vec2::new(1280.0, 720.0),
        }
    }
}

impl ViewportSize {
    pub fn aspect_ratio(&self) -> Option<f32> {
        (self.size.x > 0.0 && self.size.y > 0.0).then(|| self.size.x / self.size.y)
    }
}

pub fn init_viewport(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<ViewportSize>,
) {
    if let Ok(window) = windows.single() {
        viewport.size = Vec2::new(window.width(), window.height());
    }
}

/// Store the new size and update every perspective camera in the same frame.
pub fn handle_window_resize(
    mut resized: EventReader<WindowResized>,
    mut viewport: ResMut<ViewportSize>,
    mut projections: Query<&mut Projection, With<Camera3d>>,
) {
    let Some(event) = resized.read().last() else {
        return;
    };
    viewport.size = Vec2::new(event.width, event.height);

    let Some(aspect_ratio) = viewport.aspect_ratio() else {
        return;
    };
    for mut projection in &mut projections {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.aspect_ratio = aspect_ratio;
        }
    }
}

#[cfg(test)]
mod tests {
    use bevy::ecs::system::RunSystemOnce;

    use super::*;

    #[test]
    fn resize_updates_viewport_and_camera_aspect() {
        let mut world = World::new();
        world.init_resource::<ViewportSize>();
        world.init_resource::<Events<WindowResized>>();
        let window = world.spawn_empty().id();
        let camera = world
            .spawn((Camera3d::default(), Projection::Perspective(PerspectiveProjection::default())))
            .id();

        world.send_event(WindowResized {
            window,
            width: 1000.0,
            height: 500.0,
        });
        world.run_system_once(handle_window_resize).unwrap();

        assert_eq!(world.resource::<ViewportSize>().size, Vec2::new(1000.0, 500.0));
        match world.get::<Projection>(camera).unwrap() {
            Projection::Perspective(perspective) => assert_eq!(perspective.aspect_ratio, 2.0),
            other => panic!("unexpected projection {other:?}"),
        }
    }

    #[test]
    fn degenerate_viewport_has_no_aspect_ratio() {
        let viewport = ViewportSize {
            size: Vec2::new(800.0, 0.0),
        };
        assert_eq!(viewport.aspect_ratio(), None);
    }
}
