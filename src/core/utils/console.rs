//! Console logging macros
//!
//! On wasm32 these go to the browser devtools console through
//! `web_sys::console`. Native builds (tests, benches) write to stderr
//! instead, since JS imports panic outside the browser.
//!
//! Usage:
//! ```rust
//! use ragdoll_engine::console_log;
//!
//! let particles = 6;
//! console_log!("scene ready: {} particles", particles);
//! ```

#[doc(hidden)]
pub fn __log(level: Level, msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let value = wasm_bindgen::JsValue::from_str(msg);
        match level {
            Level::Log => web_sys::console::log_1(&value),
            Level::Warn => web_sys::console::warn_1(&value),
            Level::Error => web_sys::console::error_1(&value),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        match level {
            Level::Log => eprintln!("{}", msg),
            Level::Warn => eprintln!("WARN: {}", msg),
            Level::Error => eprintln!("ERROR: {}", msg),
        }
    }
}

#[doc(hidden)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Log,
    Warn,
    Error,
}

/// `console.log` with `format!` arguments
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::core::utils::console::__log(
            $crate::core::utils::console::Level::Log,
            &format!($($arg)*),
        )
    };
}

/// `console.warn` with `format!` arguments
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::core::utils::console::__log(
            $crate::core::utils::console::Level::Warn,
            &format!($($arg)*),
        )
    };
}

/// `console.error` with `format!` arguments
#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        $crate::core::utils::console::__log(
            $crate::core::utils::console::Level::Error,
            &format!($($arg)*),
        )
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn macros_format_natively() {
        // Native path only touches stderr.
        console_log!("frame {}", 1);
        console_warn!("joint {} degenerate", 0);
        console_error!("draw failed: {}", "boom");
    }
}
