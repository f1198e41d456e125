// driver.rs - Timed render/step loop

use std::io;
use std::time::Duration;

use conway::{Renderer, Simulation};
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info};

use crate::error::TermError;

/// Render, step, wait `frame_delay`, repeat, until `quit` says so or
/// `shutdown` completes (`tokio::signal::ctrl_c()` in the real program).
/// A pending shutdown wins over a due tick.
pub async fn run<R, Q, S>(
    sim: &mut Simulation,
    renderer: &mut R,
    frame_delay: Duration,
    mut quit: Q,
    shutdown: S,
) -> Result<(), TermError>
where
    R: Renderer,
    TermError: From<R::Error>,
    Q: FnMut() -> io::Result<bool>,
    S: Future<Output = io::Result<()>>,
{
    let mut ticker = time::interval(frame_delay);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            biased;
            result = &mut shutdown => {
                result?;
                info!(generation = sim.generation(), "interrupted");
                return Ok(());
            }
            _ = ticker.tick() => {}
        }

        if sim.frame(renderer)? {
            debug!(generation = sim.generation(), "still running a repeating cycle");
        }

        if quit()? {
            info!(generation = sim.generation(), "quit requested");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conway::patterns::BLINKER;
    use conway::{BitGrid, TextRenderer};
    use std::future;

    fn blinker_sim() -> Simulation {
        let mut sim = Simulation::new(BitGrid::new(10, 16).unwrap());
        sim.apply_pattern(&BLINKER).unwrap();
        sim
    }

    #[tokio::test]
    async fn runs_one_frame_per_tick_until_quit() {
        let mut sim = blinker_sim();
        let start = sim.grid().clone();
        let mut renderer = TextRenderer::new();
        let mut frames = 0;

        run(&mut sim, &mut renderer, Duration::from_millis(1), || {
            frames += 1;
            Ok(frames == 4)
        }, future::pending::<io::Result<()>>())
        .await
        .unwrap();

        assert_eq!(renderer.frames_drawn(), 4);
        assert_eq!(sim.generation(), 4);
        // Period two: four steps land back on the start
        assert_eq!(sim.grid(), &start);
    }

    #[tokio::test]
    async fn input_errors_stop_the_loop() {
        let mut sim = Simulation::new(BitGrid::new(4, 8).unwrap());
        let mut renderer = TextRenderer::new();

        let result = run(&mut sim, &mut renderer, Duration::from_millis(1), || {
            Err(io::Error::other("input closed"))
        }, future::pending::<io::Result<()>>())
        .await;

        assert!(matches!(result, Err(TermError::Io(_))));
        assert_eq!(renderer.frames_drawn(), 1);
    }

    #[tokio::test]
    async fn interrupt_before_the_first_tick_draws_nothing() {
        let mut sim = blinker_sim();
        let mut renderer = TextRenderer::new();

        run(&mut sim, &mut renderer, Duration::from_millis(1), || Ok(false), future::ready(Ok::<(), io::Error>(())))
            .await
            .unwrap();

        assert_eq!(renderer.frames_drawn(), 0);
        assert_eq!(sim.generation(), 0);
    }

    #[tokio::test]
    async fn interrupt_stops_a_running_loop() {
        let mut sim = blinker_sim();
        let mut renderer = TextRenderer::new();
        let shutdown = async {
            time::sleep(Duration::from_millis(30)).await;
            Ok::<(), io::Error>(())
        };

        run(&mut sim, &mut renderer, Duration::from_millis(1), || Ok(false), shutdown)
            .await
            .unwrap();

        assert!(renderer.frames_drawn() >= 1);
        assert_eq!(sim.generation(), renderer.frames_drawn());
    }

    #[tokio::test]
    async fn failed_signal_listener_is_an_error() {
        let mut sim = blinker_sim();
        let mut renderer = TextRenderer::new();
        let shutdown = future::ready(Err::<(), io::Error>(io::Error::other("no signal handler")));

        let result = run(&mut sim, &mut renderer, Duration::from_millis(1), || Ok(false), shutdown).await;

        assert!(matches!(result, Err(TermError::Io(_))));
    }
}
