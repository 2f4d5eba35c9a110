//! Console logging
//!
//! In the browser messages go to `console.log` / `console.warn`.
//! Native builds (tests, benches) print to stderr in debug builds only.

/// Log an informational message: `console_log!("spawned {} bodies", n)`
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::utils::log::info(&format!($($arg)*))
    };
}

/// Log a warning: `console_warn!("rejected body: {}", err)`
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::utils::log::warn(&format!($($arg)*))
    };
}

pub fn info(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        if cfg!(debug_assertions) {
            eprintln!("[buoyancy] {}", msg);
        }
    }
}

pub fn warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(msg));
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        if cfg!(debug_assertions) {
            eprintln!("[buoyancy] warning: {}", msg);
        }
    }
}
