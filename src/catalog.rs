// src/catalog.rs
use crate::locale::SupportedLocale;
use crate::utils::error::Error;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, error, info};

const BUNDLED_CATALOGS: [(SupportedLocale, &str); 3] = [
    (SupportedLocale::En, include_str!("../locales/en.json")),
    (SupportedLocale::Zh, include_str!("../locales/zh.json")),
    (SupportedLocale::ZhTw, include_str!("../locales/zh-TW.json")),
];

fn parse_catalog(locale: SupportedLocale, source: &str) -> Result<Value, Error> {
    serde_json::from_str(source).map_err(|e| {
        error!("Failed to parse catalog for '{}': {}", locale, e);
        Error::Json(e)
    })
}

/// Read-only translation catalogs, one nested JSON tree per locale.
#[derive(Debug, Default, Clone)]
pub struct CatalogStore {
    catalogs: HashMap<SupportedLocale, Value>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalogs compiled into the binary from `locales/*.json`.
    pub fn bundled() -> Result<Self, Error> {
        let mut store = Self::new();
        for (locale, source) in BUNDLED_CATALOGS {
            store.insert(locale, parse_catalog(locale, source)?);
        }
        info!("Loaded {} bundled translation catalogs", store.catalogs.len());
        Ok(store)
    }

    pub fn with_catalog(mut self, locale: SupportedLocale, catalog: Value) -> Self {
        self.insert(locale, catalog);
        self
    }

    pub fn insert(&mut self, locale: SupportedLocale, catalog: Value) {
        if self.catalogs.insert(locale, catalog).is_some() {
            debug!("Replaced translation catalog for '{}'", locale);
        }
    }

    pub fn catalog(&self, locale: SupportedLocale) -> Option<&Value> {
        self.catalogs.get(&locale)
    }

    /// Walks a dotted key such as `tray.quit` through the locale's catalog.
    pub fn lookup(&self, locale: SupportedLocale, key: &str) -> Option<&Value> {
        key.split('.')
            .try_fold(self.catalog(locale)?, |node, segment| node.get(segment))
    }

    pub fn message(&self, locale: SupportedLocale, key: &str) -> Option<&str> {
        self.lookup(locale, key).and_then(Value::as_str)
    }
}
