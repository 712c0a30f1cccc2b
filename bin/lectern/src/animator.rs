//! Tokio-driven runner for the typing animation.
//!
//! [`Animator::start`] spawns one task that ticks a [`TypistState`] on a
//! fixed interval and publishes each [`Frame`] through a watch channel.
//! [`Animator::stop`] waits for the task to exit, so nothing is published
//! after it returns.

use lectern_core::{Frame, Result, TypistConfig, TypistState};
use rand::{SeedableRng, rngs::StdRng};
use tokio::{
    sync::{oneshot, watch},
    task::JoinHandle,
    time::{Instant, MissedTickBehavior},
};

/// A running typing animation.
#[derive(Debug)]
pub struct Animator {
    frames: watch::Receiver<Frame>,
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl Animator {
    /// Start ticking on the current Tokio runtime.
    ///
    /// Fails when the configuration is invalid (e.g. an empty phrase list).
    pub fn start(config: &TypistConfig) -> Result<Self> {
        Self::start_with_rng(config, StdRng::from_entropy())
    }

    /// Start with an explicit random source for phrase selection.
    pub fn start_with_rng(config: &TypistConfig, mut rng: StdRng) -> Result<Self> {
        let origin = Instant::now();
        let mut state = TypistState::new(config, 0)?;

        let (frame_tx, frames) = watch::channel(state.frame());
        let (shutdown, mut shutdown_rx) = oneshot::channel::<()>();

        let mut interval = tokio::time::interval(config.tick_interval());
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tracing::debug!(
            phrases = config.phrases.len(),
            tick_ms = config.tick_interval_ms,
            "Starting typist animator"
        );

        let task = tokio::spawn(async move {
            // The first tick completes immediately.
            interval.tick().await;

            loop {
                tokio::select! {
                    biased;
                    _ = &mut shutdown_rx => break,
                    _ = interval.tick() => {
                        let now_ms = origin.elapsed().as_millis() as u64;
                        let frame = state.tick(now_ms, &mut rng);
                        if frame_tx.send(frame).is_err() {
                            break;
                        }
                    }
                }
            }

            tracing::debug!("Typist animator stopped");
        });

        Ok(Self {
            frames,
            shutdown: Some(shutdown),
            task: Some(task),
        })
    }

    /// Subscribe to frame updates.
    pub fn subscribe(&self) -> watch::Receiver<Frame> {
        self.frames.clone()
    }

    /// Most recently published frame.
    pub fn current(&self) -> Frame {
        self.frames.borrow().clone()
    }

    /// Stop the animation and wait for the timer task to finish.
    pub async fn stop(mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }

        if let Some(task) = self.task.take() {
            if let Err(err) = task.await {
                if !err.is_cancelled() {
                    tracing::warn!("Typist animator task failed: {err}");
                }
            }
        }
    }
}

impl Drop for Animator {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
