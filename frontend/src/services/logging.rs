use gloo::net::http::Request;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;

use crate::config::FrontendConfig;

#[derive(Debug, Serialize)]
struct LogRequest {
    level: String,
    message: String,
    component: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(Level::Debug, message, Some(component));
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(Level::Info, message, Some(component));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(Level::Warn, message, Some(component));
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(Level::Error, message, Some(component));
    }

    fn log(level: Level, message: &str, component: Option<&str>) {
        let line = format_line(level, message, component);
        match level {
            Level::Debug => gloo::console::debug!(line),
            Level::Info => gloo::console::info!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Error => gloo::console::error!(line),
        }

        let config = FrontendConfig::from_build_env();
        if !config.remote_logging {
            return;
        }

        let request = LogRequest {
            level: level.as_str().to_string(),
            message: message.to_string(),
            component: component.map(str::to_string),
        };
        let url = format!("{}/api/logs", config.api_base_url);

        // Fire and forget; a failing log sink must not surface in the UI
        spawn_local(async move {
            if let Ok(request) = Request::post(&url).json(&request) {
                let _ = request.send().await;
            }
        });
    }
}

fn format_line(level: Level, message: &str, component: Option<&str>) -> String {
    match component {
        Some(component) => format!("[{}] [{}] {}", level.as_str().to_uppercase(), component, message),
        None => format!("[{}] {}", level.as_str().to_uppercase(), message),
    }
}
