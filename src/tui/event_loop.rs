//! # Event Loop
//!
//! The single serialized consumer of two independently produced streams:
//!
//! ```text
//!  ┌──────────────────┐  Event   ┌──────────────┐
//!  │  input producer  │─────────▶│              │   update()   ┌────────────┐
//!  │ (blocking poll)  │  mpsc    │  EventLoop   │─────────────▶│ Simulation │
//!  └──────────────────┘          │  (select!)   │              └────────────┘
//!  ┌──────────────────┐   tick   │              │    paint()   ┌────────────┐
//!  │  tick producer   │─────────▶│              │─────────────▶│  Surface   │
//!  │ (sleep interval) │  mpsc(1) └──────┬───────┘              └────────────┘
//!  └────────▲─────────┘                 │
//!           └──────── paused (watch) ───┘
//! ```
//!
//! Only the consumer touches the `Simulation`. The ticker sees a copy of the
//! pause flag through a `watch` channel and stops emitting while it is set.
//! A tick already in flight when pause engages is dropped by the reducer.

use std::io;
use std::time::Duration;

use crossterm::event::Event;
use log::{debug, info, warn};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::core::action::{Action, Effect, update};
use crate::core::state::Simulation;
use crate::tui::event::{InputSource, map_event};
use crate::tui::ui::RenderSurface;

/// How long the input producer blocks per poll before checking whether the
/// loop is still listening.
pub const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Capacity of the input channel. Ticks use a capacity of one.
pub const INPUT_CHANNEL_CAPACITY: usize = 64;

pub struct EventLoop<S: RenderSurface> {
    sim: Simulation,
    surface: S,
    paused_tx: watch::Sender<bool>,
}

impl<S: RenderSurface> EventLoop<S> {
    /// Returns the loop and the receiver the tick producer samples pause from.
    pub fn new(sim: Simulation, surface: S) -> (Self, watch::Receiver<bool>) {
        let (paused_tx, paused_rx) = watch::channel(sim.paused);
        (
            Self {
                sim,
                surface,
                paused_tx,
            },
            paused_rx,
        )
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Apply one action and repaint if anything changed.
    pub fn dispatch(&mut self, action: Action) -> io::Result<Effect> {
        let effect = update(&mut self.sim, action);
        if action == Action::TogglePause {
            self.paused_tx.send_replace(self.sim.paused);
        }
        if effect == Effect::Redraw {
            self.surface.paint(&self.sim)?;
        }
        Ok(effect)
    }

    /// Handle a raw input event. Unmapped events are ignored without a repaint.
    pub fn handle_input(&mut self, event: Event) -> io::Result<Effect> {
        match map_event(&event) {
            Some(action) => {
                debug!("Input action: {:?}", action);
                self.dispatch(action)
            }
            None => Ok(Effect::None),
        }
    }

    pub fn handle_tick(&mut self) -> io::Result<Effect> {
        self.dispatch(Action::Tick)
    }

    /// Paint once, then process events one at a time until quit or until the
    /// input stream ends. Returns the final simulation state.
    pub async fn run(
        mut self,
        mut input_rx: mpsc::Receiver<Event>,
        mut tick_rx: mpsc::Receiver<()>,
    ) -> io::Result<Simulation> {
        self.surface.paint(&self.sim)?;

        loop {
            let effect = tokio::select! {
                // Input first on ties so keys stay responsive under a fast ticker
                biased;
                input = input_rx.recv() => match input {
                    Some(event) => self.handle_input(event)?,
                    None => {
                        info!("Input stream closed, leaving event loop");
                        Effect::Quit
                    }
                },
                Some(()) = tick_rx.recv() => self.handle_tick()?,
            };

            if effect == Effect::Quit {
                break;
            }
        }

        info!("Event loop finished after {} generations", self.sim.generation);
        Ok(self.sim)
    }
}

/// Poll `source` on a blocking thread and forward every event.
///
/// Stops when the receiver is dropped or the source fails.
pub fn spawn_input_producer<I>(mut source: I, tx: mpsc::Sender<Event>) -> JoinHandle<()>
where
    I: InputSource + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            match source.poll_input(INPUT_POLL_TIMEOUT) {
                Ok(Some(event)) => {
                    if tx.blocking_send(event).is_err() {
                        debug!("Input receiver dropped, stopping input producer");
                        return;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    warn!("Input source failed: {}", e);
                    return;
                }
            }
        }
        debug!("Input receiver dropped, stopping input producer");
    })
}

/// Emit a tick every `interval` while the pause flag is clear.
///
/// While paused the task parks on the watch channel instead of waking up
/// every interval. The first tick after a resume comes one full interval
/// later. Stops when either the tick receiver or the pause sender is dropped.
pub fn spawn_tick_producer(
    interval: Duration,
    mut paused: watch::Receiver<bool>,
    tx: mpsc::Sender<()>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let is_paused = *paused.borrow_and_update();
            if is_paused {
                if paused.changed().await.is_err() {
                    debug!("Pause sender dropped, stopping tick producer");
                    return;
                }
                tokio::time::sleep(interval).await;
                continue;
            }

            if tx.send(()).await.is_err() {
                debug!("Tick receiver dropped, stopping tick producer");
                return;
            }
            tokio::time::sleep(interval).await;
        }
    })
}

/// Wire up both producers and run the loop to completion.
pub async fn run_with<I, S>(
    sim: Simulation,
    surface: S,
    input: I,
    tick_interval: Duration,
) -> io::Result<Simulation>
where
    I: InputSource + Send + 'static,
    S: RenderSurface,
{
    let (event_loop, paused_rx) = EventLoop::new(sim, surface);
    let (input_tx, input_rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
    let (tick_tx, tick_rx) = mpsc::channel(1);

    let _input = spawn_input_producer(input, input_tx);
    let ticker = spawn_tick_producer(tick_interval, paused_rx, tick_tx);
    info!("Producers started (tick every {:?})", tick_interval);

    let result = event_loop.run(input_rx, tick_rx).await;
    ticker.abort();
    result
}
