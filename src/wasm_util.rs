#[cfg(target_arch = "wasm32")]
pub(crate) fn log(s: &str) {
    web_sys::console::log_1(&s.into());
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn warn(s: &str) {
    web_sys::console::warn_1(&s.into());
}

// Imported JS functions panic outside of wasm, so native hosts and unit tests go to stderr.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn log(s: &str) {
    eprintln!("{}", s);
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn warn(s: &str) {
    eprintln!("warning: {}", s);
}

macro_rules! console_log {
    ($fmt:expr, $($arg1:expr),*) => {
        crate::wasm_util::log(&format!($fmt, $($arg1),+))
    };
    ($fmt:expr) => {
        crate::wasm_util::log($fmt)
    }
}

macro_rules! console_warn {
    ($fmt:expr, $($arg1:expr),*) => {
        crate::wasm_util::warn(&format!($fmt, $($arg1),+))
    };
    ($fmt:expr) => {
        crate::wasm_util::warn($fmt)
    }
}

pub(crate) use {console_log, console_warn};
