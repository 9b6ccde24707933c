// src/utils/error.rs
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Tauri(#[from] tauri::Error),
    #[error("{0}")]
    Msg(String),
}

#[derive(serde::Serialize)]
#[serde(tag = "kind", content = "message")]
#[serde(rename_all = "camelCase")]
enum ErrorKind {
    Io(String),
    Json(String),
    Tauri(String),
    Msg(String),
}

impl serde::Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let error_message = self.to_string();
        let error_kind = match self {
            Self::Io(_) => ErrorKind::Io(error_message),
            Self::Json(_) => ErrorKind::Json(error_message),
            Self::Tauri(_) => ErrorKind::Tauri(error_message),
            Self::Msg(_) => ErrorKind::Msg(error_message),
        };
        error_kind.serialize(serializer)
    }
}

#[macro_export]
macro_rules! err {
    ($msg:literal $(,)?) => {
        $crate::utils::error::Error::Msg($msg.to_string())
    };
    ($err_expr:expr $(,)?) => {
        $crate::utils::error::Error::Msg($err_expr.into())
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::utils::error::Error::Msg(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! ensure_some {
    ($option_expr:expr, $fmt_str:literal $(, $($args:tt)*)?) => {
        match $option_expr {
            Some(val) => ::core::result::Result::Ok(val),
            None => ::core::result::Result::Err($crate::err!($fmt_str $(, $($args)*)?)),
        }
    };
}
