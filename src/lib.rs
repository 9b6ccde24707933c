pub mod catalog;
pub mod config;
mod emitter;
pub mod locale;
pub mod locale_state;
pub mod tray;
pub mod utils;

use crate::catalog::CatalogStore;
use crate::locale_state::ActiveLocale;
use crate::utils::logger::LoggerBuilder;
use crate::utils::window::show_and_focus_main_window;
use tauri::Manager;
use tracing::{error, info};

/// Starts the desktop application with the given generated context.
pub fn run(context: tauri::Context<tauri::Wry>) {
    let logger = LoggerBuilder::new()
        .log_dir(config::LOG_DIR)
        .file_prefix(config::LOG_FILE_PREFIX)
        .default_level(config::LOG_LEVEL)
        .stdout(config::LOG_TO_STDOUT);
    if let Err(e) = logger.init() {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }
    info!("Log initialized");

    let system_language = config::system_language();
    let initial_locale = locale::resolve(system_language.as_deref());
    info!(
        "System language is {:?}, initial locale '{}'",
        system_language, initial_locale
    );

    let catalogs = CatalogStore::bundled().unwrap_or_else(|e| {
        error!("Failed to load bundled catalogs, tray will show item ids: {}", e);
        CatalogStore::new()
    });

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app, args, cwd| {
            info!("tauri_plugin_single_instance args:{:?} cwd:{}", args, cwd);
            show_and_focus_main_window(app);
        }))
        .manage(ActiveLocale::new(initial_locale))
        .manage(catalogs)
        .setup(|app| {
            let locale = app.state::<ActiveLocale>().get();
            let items = tray::initial_tray_items(&app.state::<CatalogStore>(), locale);
            tray::create_system_tray(app, &items)?;
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            locale_state::get_locale,
            locale_state::set_locale,
            tray::update_tray_menu,
        ])
        .run(context)
        .expect("error while running tauri application");
}
