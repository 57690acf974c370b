//! Greeting for whoever opens the developer console.

use wasm_bindgen::JsValue;

const BANNER: &str = r#"
    ___   _________    ____  __
   /   | / ____/   |  / __ \/ /
  / /| |/ /   / /| | / / / / /
 / ___ / /___/ ___ |/ /_/ / /___
/_/  |_\____/_/  |_/_____/_____/
"#;

const ACCENT: &str = "color: #a855f7; font-family: monospace; font-weight: bold;";
const MUTED: &str = "color: #9ca3af; font-family: monospace;";

fn styled(text: &str, style: &str) {
    web_sys::console::log_2(&JsValue::from_str(&format!("%c{text}")), &JsValue::from_str(style));
}

/// Print the banner and a short hello. Called once at startup.
pub fn print_banner() {
    styled(BANNER, ACCENT);
    styled(
        &format!("portfolio v{} | Rust + Leptos", env!("CARGO_PKG_VERSION")),
        MUTED,
    );
    styled("(^_^) Curioso? acadl@email.com", MUTED);
}
