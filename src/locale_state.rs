// src/locale_state.rs
use crate::catalog::CatalogStore;
use crate::emitter::{emit, LOCALE_CHANGED_EVENT};
use crate::locale::SupportedLocale;
use crate::tray::{sync_tray_locale, TrayMenuHost, TraySync};
use crate::utils::error::Error;
use tauri::{AppHandle, Manager, Runtime, State};
use tokio::sync::watch;
use tracing::info;

/// The locale the UI is currently displayed in.
///
/// Seeded once at startup and changed only through [`ActiveLocale::set`].
/// Consumers that need to react to changes hold a receiver from
/// [`ActiveLocale::subscribe`].
#[derive(Debug)]
pub struct ActiveLocale {
    sender: watch::Sender<SupportedLocale>,
}

impl ActiveLocale {
    pub fn new(initial: SupportedLocale) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    pub fn get(&self) -> SupportedLocale {
        *self.sender.borrow()
    }

    /// Returns `true` when the stored locale actually changed.
    pub fn set(&self, locale: SupportedLocale) -> bool {
        self.sender.send_if_modified(|current| {
            if *current == locale {
                false
            } else {
                *current = locale;
                true
            }
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<SupportedLocale> {
        self.sender.subscribe()
    }
}

/// Synchronizes the tray with whatever locale is currently active.
pub async fn sync_tray_with_active_locale<R: Runtime>(app: AppHandle<R>) -> TraySync {
    let locale = app.state::<ActiveLocale>().get();
    let catalogs = app.state::<CatalogStore>();
    sync_tray_locale(locale.as_str(), &catalogs, &TrayMenuHost::new(app.clone())).await
}

#[tauri::command]
pub fn get_locale(active: State<'_, ActiveLocale>) -> SupportedLocale {
    active.get()
}

#[tauri::command]
pub async fn set_locale(
    app: AppHandle,
    locale: String,
    active: State<'_, ActiveLocale>,
) -> Result<SupportedLocale, Error> {
    let applied = SupportedLocale::parse_or_default(&locale);

    if active.set(applied) {
        info!("Active locale changed to '{}'", applied);
        emit(&app, LOCALE_CHANGED_EVENT, applied);
    }

    sync_tray_with_active_locale(app).await;
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_reports_change() {
        let active = ActiveLocale::new(SupportedLocale::ZhTw);
        assert_eq!(active.get(), SupportedLocale::ZhTw);
        assert!(!active.set(SupportedLocale::ZhTw));
        assert!(active.set(SupportedLocale::En));
        assert_eq!(active.get(), SupportedLocale::En);
    }

    #[tokio::test]
    async fn test_subscribers_observe_changes() {
        let active = ActiveLocale::new(SupportedLocale::En);
        let mut receiver = active.subscribe();

        assert!(active.set(SupportedLocale::Zh));
        receiver.changed().await.unwrap();
        assert_eq!(*receiver.borrow_and_update(), SupportedLocale::Zh);

        assert!(!active.set(SupportedLocale::Zh));
        assert!(!receiver.has_changed().unwrap());
    }
}
