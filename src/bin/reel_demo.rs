//! Walk the starter reel through a few updates and print each state.
//! Usage: cargo run --bin reel_demo

use reel_state::ImageKey;
use slot_reel_lib::commands;
use slot_reel_lib::emitter::{LogSink, ReelEmitter};
use std::sync::Arc;

fn print_reel(title: &str, app: &slot_reel_lib::ReelApp) -> anyhow::Result<()> {
    let json = commands::get_reel_state(&app.state).map_err(anyhow::Error::msg)?;
    println!("\n=== {} ===", title);
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = slot_reel_lib::run()?;

    let changes = commands::subscribe(&app.state).map_err(anyhow::Error::msg)?;
    let emitter = ReelEmitter::start(changes, Arc::new(LogSink));

    print_reel("Starter reel", &app)?;

    commands::save_previous_images(&app.state).map_err(anyhow::Error::msg)?;

    commands::update_image(&app.state, ImageKey::Id(6), "newGunSrc".into(), None)
        .map_err(anyhow::Error::msg)?;
    commands::update_image(&app.state, ImageKey::Id(999), "x".into(), None)
        .map_err(anyhow::Error::msg)?;
    tokio::task::yield_now().await;
    print_reel("After updating id 6 (and missing id 999)", &app)?;

    commands::restore_previous_images(&app.state).map_err(anyhow::Error::msg)?;
    tokio::task::yield_now().await;
    print_reel("Restored", &app)?;

    emitter.stop();
    Ok(())
}
