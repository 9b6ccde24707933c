// src/tray.rs
use crate::catalog::CatalogStore;
use crate::ensure_some;
use crate::locale::SupportedLocale;
use crate::utils::error::Error;
use crate::utils::window::show_and_focus_main_window;
use serde::{Deserialize, Serialize};
use std::future::Future;
use tauri::menu::{Menu, MenuItem};
use tauri::tray::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent};
use tauri::{App, AppHandle, Runtime, Wry};
use tracing::{debug, error, info};

pub const TRAY_ID: &str = "main";
pub const QUIT_ITEM_ID: &str = "quit";

/// Catalog subtree holding the tray labels.
const TRAY_SECTION: &str = "tray";

/// Keys under `tray` that become menu items, in menu order.
pub const TRAY_MENU_KEYS: &[&str] = &[QUIT_ITEM_ID];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrayMenuItem {
    pub id: String,
    pub label: String,
}

/// Receiver of "update menu" requests, e.g. the native tray icon.
pub trait MenuHost {
    fn update_menu(
        &self,
        items: Vec<TrayMenuItem>,
    ) -> impl Future<Output = Result<(), Error>> + Send;
}

#[derive(Debug)]
pub enum TraySync {
    /// The host accepted this many items.
    Updated(usize),
    /// No catalog or no tray section for the locale; the host was not called.
    NothingToSync,
    HostFailed(Error),
}

fn tray_label(catalogs: &CatalogStore, locale: SupportedLocale, key: &str) -> String {
    let path = format!("{}.{}", TRAY_SECTION, key);
    catalogs
        .message(locale, &path)
        .or_else(|| catalogs.message(SupportedLocale::default(), &path))
        .unwrap_or(key)
        .to_string()
}

/// Builds the tray items for `locale`, or `None` when its catalog has no tray section.
pub fn build_tray_items(
    catalogs: &CatalogStore,
    locale: SupportedLocale,
) -> Option<Vec<TrayMenuItem>> {
    catalogs
        .lookup(locale, TRAY_SECTION)
        .filter(|section| section.is_object())?;
    let items = TRAY_MENU_KEYS
        .iter()
        .map(|key| TrayMenuItem {
            id: key.to_string(),
            label: tray_label(catalogs, locale, key),
        })
        .collect();
    Some(items)
}

/// Items the tray starts with: the locale's labels, or bare ids when the
/// catalogs have nothing for it.
pub fn initial_tray_items(catalogs: &CatalogStore, locale: SupportedLocale) -> Vec<TrayMenuItem> {
    build_tray_items(catalogs, locale).unwrap_or_else(|| {
        TRAY_MENU_KEYS
            .iter()
            .map(|key| TrayMenuItem {
                id: key.to_string(),
                label: key.to_string(),
            })
            .collect()
    })
}

/// Pushes the tray labels for `candidate_locale` to the menu host.
///
/// Unknown locales fall back to the default one. A host failure is logged and
/// reported in the returned [`TraySync`]; it is never raised to the caller.
pub async fn sync_tray_locale<H: MenuHost>(
    candidate_locale: &str,
    catalogs: &CatalogStore,
    host: &H,
) -> TraySync {
    let locale = SupportedLocale::parse_or_default(candidate_locale);

    let Some(items) = build_tray_items(catalogs, locale) else {
        debug!("No tray messages for '{}' yet, skipping tray update", locale);
        return TraySync::NothingToSync;
    };

    let count = items.len();
    match host.update_menu(items).await {
        Ok(()) => {
            info!("Tray menu updated to '{}' ({} items)", locale, count);
            TraySync::Updated(count)
        }
        Err(e) => {
            error!("Failed to update tray menu: {}", e);
            TraySync::HostFailed(e)
        }
    }
}

fn build_menu<R: Runtime>(app: &AppHandle<R>, items: &[TrayMenuItem]) -> Result<Menu<R>, Error> {
    let menu = Menu::new(app)?;
    for item in items {
        let menu_item = MenuItem::with_id(app, item.id.as_str(), &item.label, true, None::<&str>)?;
        menu.append(&menu_item)?;
    }
    Ok(menu)
}

fn apply_tray_menu<R: Runtime>(app: &AppHandle<R>, items: &[TrayMenuItem]) -> Result<(), Error> {
    let tray = ensure_some!(
        app.tray_by_id(TRAY_ID),
        "Tray icon '{}' is not registered",
        TRAY_ID
    )?;
    let menu = build_menu(app, items)?;
    tray.set_menu(Some(menu))?;
    Ok(())
}

/// Menu host backed by the application's tray icon.
pub struct TrayMenuHost<R: Runtime> {
    app: AppHandle<R>,
}

impl<R: Runtime> TrayMenuHost<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        Self { app }
    }
}

impl<R: Runtime> MenuHost for TrayMenuHost<R> {
    fn update_menu(
        &self,
        items: Vec<TrayMenuItem>,
    ) -> impl Future<Output = Result<(), Error>> + Send {
        let app = self.app.clone();
        async move { apply_tray_menu(&app, &items) }
    }
}

pub fn create_system_tray(app: &App<Wry>, items: &[TrayMenuItem]) -> anyhow::Result<()> {
    let menu = build_menu(app.handle(), items)
        .map_err(|e| anyhow::anyhow!("Failed to build initial tray menu: {}", e))?;
    let mut builder = TrayIconBuilder::with_id(TRAY_ID)
        .menu(&menu)
        .show_menu_on_left_click(false)
        .on_menu_event(|app, event| match event.id.as_ref() {
            QUIT_ITEM_ID => {
                info!("quit menu item was clicked");
                app.exit(0);
            }
            _ => {
                debug!("menu item {:?} not handled", event.id);
            }
        })
        .on_tray_icon_event(|tray, event| match event {
            TrayIconEvent::Click {
                button: MouseButton::Left,
                button_state: MouseButtonState::Up,
                ..
            } => {
                debug!("tray left click, showing main window");
                show_and_focus_main_window(tray.app_handle());
            }
            _ => {}
        });
    if let Some(icon) = app.default_window_icon() {
        builder = builder.icon(icon.clone());
    }
    builder.build(app)?;
    info!("System tray '{}' created with {} items", TRAY_ID, items.len());
    Ok(())
}

/// Installs the given items on the tray menu as sent by the frontend.
#[tauri::command]
pub async fn update_tray_menu(app: AppHandle, items: Vec<TrayMenuItem>) -> Result<(), Error> {
    debug!("update_tray_menu {:?}", items);
    TrayMenuHost::new(app).update_menu(items).await
}
