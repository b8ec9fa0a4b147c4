pub mod headless;
pub mod input;
pub mod render;
pub mod state;

pub use headless::{run_headless, write_report, HeadlessReport};
pub use state::{ActiveSimulation, App, Mode};

use anyhow::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use tessera_tui::Tui;

impl App {
    pub async fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let mut last_tick = Instant::now();

        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();
        tokio::spawn(async move {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Ctrl+C received, initiating graceful shutdown...");
            shutdown_clone.store(true, Ordering::SeqCst);
        });

        while self.running && !shutdown.load(Ordering::SeqCst) {
            tui.draw(|f| self.draw(f))?;

            let tick_rate = self.sim.tick_interval();
            if let Some(key) = tui.next_key(tick_rate.saturating_sub(last_tick.elapsed()))? {
                self.handle_key(key);
            }

            if last_tick.elapsed() >= tick_rate {
                self.on_tick();
                last_tick = Instant::now();
            }
        }

        let metrics = self.sim.metrics();
        tracing::info!(
            mode = self.mode().label(),
            ticks = metrics.tick_count(),
            mean_step_us = metrics.mean_step_micros(),
            "Session finished"
        );
        Ok(())
    }
}
