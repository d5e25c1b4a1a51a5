
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

use crate::core::{saturating_nanos, StageContext, StageLogic, StreamError, StreamInstant, TimerKey, TimerTable};

/// Event delivered to a hosted stage, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageEvent<T> {
  /// Upstream pushed an element.
  Push(T),
  /// Downstream signalled demand.
  Pull,
  /// Upstream completed.
  UpstreamFinish,
  /// Downstream cancelled with the given cause.
  DownstreamCancel(StreamError),
}

/// Signal a hosted stage sent to its peers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageEffect<T> {
  /// The stage pushed an element downstream.
  Push(T),
  /// The stage signalled demand upstream.
  Pull,
  /// The stage completed downstream.
  Complete,
  /// The stage failed downstream.
  Fail(StreamError),
  /// The stage cancelled upstream with the given cause.
  Cancel(StreamError),
}

struct RunnerContext<T> {
  origin:     Instant,
  timers:     TimerTable,
  effects:    mpsc::UnboundedSender<StageEffect<T>>,
  pending_in: Option<T>,
  demand_out: bool,
  in_closed:  bool,
  stopped:    bool,
}

impl<T> RunnerContext<T> {
  fn new(origin: Instant, effects: mpsc::UnboundedSender<StageEffect<T>>) -> Self {
    Self { origin, timers: TimerTable::new(), effects, pending_in: None, demand_out: false, in_closed: false, stopped: false }
  }

  fn emit(&self, effect: StageEffect<T>) {
    // The receiver half may already be gone during teardown.
    let _ = self.effects.send(effect);
  }

  fn stop(&mut self) {
    self.stopped = true;
    self.timers.clear();
  }

  fn fire_due_timers(&mut self, logic: &mut impl StageLogic<T>) {
    let horizon = self.now();
    while let Some((key, _)) = self.timers.pop_due(horizon) {
      logic.on_timer(self, key);
      if self.stopped {
        break;
      }
    }
  }
}

impl<T> StageContext<T> for RunnerContext<T> {
  fn now(&self) -> StreamInstant {
    StreamInstant::from_nanos(saturating_nanos(self.origin.elapsed()))
  }

  fn schedule_once(&mut self, key: TimerKey, delay: Duration) {
    let now = self.now();
    self.timers.schedule_once(key, now, delay);
  }

  fn schedule_with_fixed_delay(&mut self, key: TimerKey, initial_delay: Duration, interval: Duration) {
    let now = self.now();
    self.timers.schedule_with_fixed_delay(key, now, initial_delay, interval);
  }

  fn cancel_timer(&mut self, key: TimerKey) {
    self.timers.cancel(key);
  }

  fn grab(&mut self) -> T {
    self.pending_in.take().expect("grab without a pushed element")
  }

  fn push(&mut self, elem: T) {
    self.demand_out = false;
    self.emit(StageEffect::Push(elem));
  }

  fn pull(&mut self) {
    self.emit(StageEffect::Pull);
  }

  fn is_out_available(&self) -> bool {
    self.demand_out
  }

  fn is_in_closed(&self) -> bool {
    self.in_closed
  }

  fn complete_stage(&mut self) {
    if !self.stopped {
      self.stop();
      self.emit(StageEffect::Complete);
    }
  }

  fn fail_stage(&mut self, error: StreamError) {
    if !self.stopped {
      self.stop();
      self.emit(StageEffect::Cancel(error.clone()));
      self.emit(StageEffect::Fail(error));
    }
  }

  fn cancel_stage(&mut self, cause: StreamError) {
    if !self.stopped {
      self.stop();
      self.emit(StageEffect::Cancel(cause));
    }
  }
}

/// Hosts one [`StageLogic`] on a spawned Tokio task.
///
/// Events go in through an unbounded channel and are delivered one at a time;
/// timers run on the Tokio clock, waking the task exactly at the earliest
/// scheduled deadline. Everything the stage signals comes back out as a
/// [`StageEffect`] stream that ends when the stage stops.
#[derive(Debug)]
pub struct TokioStageRunner<T> {
  events:  mpsc::UnboundedSender<StageEvent<T>>,
  effects: mpsc::UnboundedReceiver<StageEffect<T>>,
  handle:  JoinHandle<()>,
}

impl<T> TokioStageRunner<T>
where
  T: Send + 'static,
{
  /// Spawns `logic` on a new task and delivers `on_start` to it.
  ///
  /// # Panics
  ///
  /// Panics when called outside a Tokio runtime.
  #[must_use]
  pub fn spawn<L>(mut logic: L) -> Self
  where
    L: StageLogic<T> + Send + 'static, {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (effect_tx, effect_rx) = mpsc::unbounded_channel();
    let handle = tokio::spawn(async move {
      let mut ctx = RunnerContext::new(Instant::now(), effect_tx);
      logic.on_start(&mut ctx);
      while !ctx.stopped {
        let event = match ctx.timers.next_deadline() {
          | Some(deadline) => {
            let wake_at = ctx.origin + Duration::from_nanos(deadline.as_nanos());
            tokio::select! {
              event = event_rx.recv() => event,
              () = sleep_until(wake_at) => {
                ctx.fire_due_timers(&mut logic);
                continue;
              },
            }
          },
          | None => event_rx.recv().await,
        };
        match event {
          | Some(StageEvent::Push(elem)) => {
            ctx.pending_in = Some(elem);
            logic.on_push(&mut ctx);
          },
          | Some(StageEvent::Pull) => {
            ctx.demand_out = true;
            logic.on_pull(&mut ctx);
          },
          | Some(StageEvent::UpstreamFinish) => {
            ctx.in_closed = true;
            logic.on_upstream_finish(&mut ctx);
          },
          | Some(StageEvent::DownstreamCancel(cause)) => logic.on_downstream_cancel(&mut ctx, cause),
          | None => break,
        }
      }
      logic.on_stop(&mut ctx);
    });
    Self { events: event_tx, effects: effect_rx, handle }
  }

  /// Queues `event` for the stage. Returns false once the stage has stopped.
  pub fn send(&self, event: StageEvent<T>) -> bool {
    self.events.send(event).is_ok()
  }

  /// Receives the next effect, or `None` once the stage has stopped and
  /// drained.
  pub async fn next_effect(&mut self) -> Option<StageEffect<T>> {
    self.effects.recv().await
  }

  /// Aborts the hosting task without delivering `on_stop`.
  pub fn abort(&self) {
    self.handle.abort();
  }

  /// Waits for the hosting task to finish.
  pub async fn join(self) {
    let _ = self.handle.await;
  }
}
