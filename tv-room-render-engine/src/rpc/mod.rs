//! JSON-RPC 2.0 notifications to the embedding page.
//!
//! The room runs inside an iframe and reports to its parent window through
//! `postMessage`. Only notifications are sent; the room does not accept
//! requests.
//!
//! ## Message Flow
//!
//! ```text
//! Host page (parent window)  <──postMessage──  Bevy (iframe)
//!        │                                         │
//!        │ <────────── Notification (no ID) ───────┤
//! ```
//!
//! ## Notifications
//!
//! - `scene_ready`: every model load settled; `{ placed, failed, failures }`
//! - `asset_load_failed`: a model, texture or audio track failed to load;
//!   `{ error: { kind, name, path, cause }, message }`
//! - `playback_failed`: a play request was rejected;
//!   `{ error: { kind, media, cause }, message }`
//! - `fps_update`: smoothed frame rate every half second; `{ fps }`
//!
//! ## Sending Notifications from Bevy
//!
//! ```rust,ignore
//! fn your_system(mut rpc: ResMut<WebRpcInterface>) {
//!     rpc.send_notification("event_name", json!({ "data": "value" }));
//! }
//! ```

/// Outgoing notification queue, diagnostics forwarding and parent window transport.
pub mod web_rpc;
