// The interaction core is only driven by the wasm frontend; native builds
// exist for running its unit tests.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod config;
mod contact;
mod effects;
mod error;
mod highlight;
mod logging;
mod nav;
mod notification;
mod scroll;
mod typewriter;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    if let Err(error) = frontend::run() {
        // Startup can fail before the configured logger is installed.
        logging::init(config::LogLevel::Warn);
        log::error!("failed to start portfolio interactions: {error}");
    }
}
