#![allow(dead_code)]

pub mod synthetic_drawing;

/// Installs a test-friendly subscriber once; `RUST_LOG` raises the level.
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}
