use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::core::error::SceneError;
use crate::engine::loading::diagnostics::LoadDiagnostics;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::window;

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// Resource queueing notifications for the host page.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
}

impl WebRpcInterface {
    /// Queue a notification; it is posted at the end of the frame.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    pub fn pending(&self) -> &[RpcNotification] {
        &self.outgoing_notifications
    }

    fn drain(&mut self) -> Vec<RpcNotification> {
        std::mem::take(&mut self.outgoing_notifications)
    }
}

/// Plugin establishing the notification channel to the parent window.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>().add_systems(
            Last,
            (forward_diagnostics, send_outgoing_messages).chain(),
        );
    }
}

fn failure_params(failure: &SceneError) -> serde_json::Value {
    let error = match serde_json::to_value(failure) {
        Ok(value) => value,
        Err(e) => {
            error!("Failed to serialize failure: {}", e);
            serde_json::Value::Null
        }
    };
    serde_json::json!({
        "error": error,
        "message": failure.to_string(),
    })
}

/// Queue one notification per new diagnostics record.
pub fn forward_diagnostics(
    mut diagnostics: ResMut<LoadDiagnostics>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for failure in diagnostics.take_unforwarded() {
        rpc_interface.send_notification(failure.notification_method(), failure_params(&failure));
    }
}

fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    for notification in rpc_interface.drain() {
        send_message_to_parent(&notification);
    }
}

/// Send serialized message to the parent window.
fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // Native builds have no host page; failures are already logged.
        let _ = message;
    }
}

#[cfg(test)]
mod tests {
    use bevy::ecs::system::RunSystemOnce;

    use super::*;

    #[test]
    fn diagnostics_become_notifications_once() {
        let mut world = World::new();
        world.init_resource::<WebRpcInterface>();
        let mut diagnostics = LoadDiagnostics::default();
        diagnostics.report(SceneError::asset_load("sofa", "model/sofa/scene.gltf", "404"));
        world.insert_resource(diagnostics);

        world.run_system_once(forward_diagnostics).unwrap();
        world.run_system_once(forward_diagnostics).unwrap();

        let rpc = world.resource::<WebRpcInterface>();
        assert_eq!(rpc.pending().len(), 1);
        let notification = &rpc.pending()[0];
        assert_eq!(notification.jsonrpc, "2.0");
        assert_eq!(notification.method, "asset_load_failed");
        assert_eq!(notification.params["error"]["name"], "sofa");
        assert_eq!(notification.params["error"]["kind"], "asset_load");
    }

    #[test]
    fn outgoing_queue_is_drained_each_frame() {
        let mut world = World::new();
        world.init_resource::<WebRpcInterface>();
        world
            .resource_mut::<WebRpcInterface>()
            .send_notification("fps_update", serde_json::json!({ "fps": 60.0 }));

        world.run_system_once(send_outgoing_messages).unwrap();
        assert!(world.resource::<WebRpcInterface>().pending().is_empty());
    }
}
