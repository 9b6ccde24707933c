use serde_json::json;
use std::future::Future;
use std::sync::Mutex;
use tray_locale_lib::catalog::CatalogStore;
use tray_locale_lib::locale::{resolve, SupportedLocale};
use tray_locale_lib::locale_state::ActiveLocale;
use tray_locale_lib::tray::{sync_tray_locale, MenuHost, TrayMenuItem, TraySync};
use tray_locale_lib::utils::error::Error;

#[derive(Default)]
struct FakeMenuHost {
    requests: Mutex<Vec<serde_json::Value>>,
}

impl FakeMenuHost {
    fn requests(&self) -> Vec<serde_json::Value> {
        self.requests.lock().unwrap().clone()
    }
}

impl MenuHost for FakeMenuHost {
    fn update_menu(
        &self,
        items: Vec<TrayMenuItem>,
    ) -> impl Future<Output = Result<(), Error>> + Send {
        let payload = serde_json::to_value(&items).unwrap();
        self.requests.lock().unwrap().push(payload);
        async { Ok(()) }
    }
}

#[tokio::test]
async fn traditional_system_language_syncs_traditional_labels() {
    let active = ActiveLocale::new(resolve(Some("zh-HK")));
    assert_eq!(active.get(), SupportedLocale::ZhTw);

    let catalogs = CatalogStore::new()
        .with_catalog(SupportedLocale::ZhTw, json!({ "tray": { "quit": "結束" } }));
    let host = FakeMenuHost::default();

    let outcome = sync_tray_locale("zh-TW", &catalogs, &host).await;

    assert!(matches!(outcome, TraySync::Updated(1)));
    assert_eq!(host.requests(), vec![json!([{ "id": "quit", "label": "結束" }])]);
}

#[tokio::test]
async fn unsupported_system_language_uses_default_catalog() {
    let active = ActiveLocale::new(resolve(Some("fr-FR")));
    assert_eq!(active.get(), SupportedLocale::En);

    let catalogs = CatalogStore::bundled().unwrap();
    let host = FakeMenuHost::default();

    sync_tray_locale("fr-FR", &catalogs, &host).await;

    assert_eq!(host.requests(), vec![json!([{ "id": "quit", "label": "Quit" }])]);
}

#[tokio::test]
async fn concurrent_syncs_each_reach_the_host() {
    let catalogs = CatalogStore::bundled().unwrap();
    let host = FakeMenuHost::default();

    tokio::join!(
        sync_tray_locale("zh", &catalogs, &host),
        sync_tray_locale("zh-TW", &catalogs, &host),
    );

    let mut labels: Vec<String> = host
        .requests()
        .iter()
        .map(|request| request[0]["label"].as_str().unwrap().to_string())
        .collect();
    labels.sort();
    assert_eq!(labels, vec!["結束".to_string(), "退出".to_string()]);
}
