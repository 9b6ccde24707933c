// src/utils/window.rs
use tauri::{AppHandle, Manager, Runtime, WebviewWindow};
use tracing::{debug, warn};

pub const MAIN_WINDOW_LABEL: &str = "main";

pub fn show_and_focus_main_window<R: Runtime>(app: &AppHandle<R>) {
    match app.get_webview_window(MAIN_WINDOW_LABEL) {
        Some(window) => show_window(window),
        None => debug!("No '{}' window to show", MAIN_WINDOW_LABEL),
    }
}

fn show_window<R: Runtime>(window: WebviewWindow<R>) {
    let result = window
        .unminimize()
        .and_then(|_| window.show())
        .and_then(|_| window.set_focus());
    if let Err(e) = result {
        warn!("Failed to show window '{}': {}", window.label(), e);
    }
}
