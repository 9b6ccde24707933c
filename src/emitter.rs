// src/emitter.rs
use serde::Serialize;
use tauri::{AppHandle, Emitter, Runtime};
use tracing::error;

pub const LOCALE_CHANGED_EVENT: &str = "locale-changed";

pub fn emit<R: Runtime, S: Serialize + Clone>(app: &AppHandle<R>, event_name: &str, payload: S) {
    if let Err(e) = app.emit(event_name, payload) {
        error!("Failed to emit event '{}': {}", event_name, e);
    }
}
