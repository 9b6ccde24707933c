// src/config.rs
use std::env;

pub const LOG_DIR: &str = "logs";
pub const LOG_FILE_PREFIX: &str = "tray-locale.log";
pub const LOG_LEVEL: &str = "debug";
/// Mirror log output to stdout only in debug builds.
pub const LOG_TO_STDOUT: bool = cfg!(debug_assertions);

/// Overrides the operating-system language when set to a non-blank value.
pub const LANG_OVERRIDE_ENV: &str = "APP_LANG";

/// Reads the user's preferred language tag once at startup.
pub fn system_language() -> Option<String> {
    if let Ok(value) = env::var(LANG_OVERRIDE_ENV) {
        if !value.trim().is_empty() {
            return Some(value);
        }
    }
    sys_locale::get_locale().map(|locale| locale.replace('_', "-"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    struct EnvVarGuard {
        original: Option<std::ffi::OsString>,
    }

    impl EnvVarGuard {
        fn set(value: &str) -> Self {
            let original = env::var_os(LANG_OVERRIDE_ENV);
            env::set_var(LANG_OVERRIDE_ENV, value);
            Self { original }
        }
    }

    impl Drop for EnvVarGuard {
        fn drop(&mut self) {
            match self.original.take() {
                Some(value) => env::set_var(LANG_OVERRIDE_ENV, value),
                None => env::remove_var(LANG_OVERRIDE_ENV),
            }
        }
    }

    #[test]
    #[serial]
    fn test_override_takes_precedence() {
        let _guard = EnvVarGuard::set("zh-HK");
        assert_eq!(system_language().as_deref(), Some("zh-HK"));
    }

    #[test]
    #[serial]
    fn test_blank_override_falls_back_to_system() {
        let _guard = EnvVarGuard::set("   ");
        let expected = sys_locale::get_locale().map(|locale| locale.replace('_', "-"));
        assert_eq!(system_language(), expected);
    }
}
