//! Brick Breaker entry point
//!
//! Runs a headless demo round: the paddle steers itself, frames are built but
//! not painted. A windowed build plugs its own `Platform` into `run`.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brick_breaker::Settings;
    use brick_breaker::consts::TARGET_FPS;
    use brick_breaker::platform::{HeadlessPlatform, run};

    env_logger::init();
    log::info!("Brick Breaker (headless demo) starting...");

    let settings = Settings::load_or_default(Settings::DEFAULT_PATH);

    // Two minutes of play at the target frame rate
    let mut platform = HeadlessPlatform::new(120 * TARGET_FPS as u64).with_demo_mode();
    let state = run(&mut platform, settings);

    println!(
        "Score: {}  Lives: {}  Bricks left: {}  Ticks: {}{}",
        state.score,
        state.lives,
        state.bricks.len(),
        state.ticks,
        if state.is_game_over() { "  (Game Over)" } else { "" }
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No web front end; the library is driven by an embedding platform
}
