//! Rotating Role Broadcaster
//!
//! Multicasts the "current role" text to every observer from a single ticker.
//!
//! The broadcaster is a two-state machine. It stays `Idle` until the first
//! observer registers, which publishes tick 0 and spawns one ticker task.
//! While `Running`, every further registration reuses that task and receives
//! the latest published role synchronously. When the last observer drops its
//! [`RoleSubscription`] the task is aborted and the state returns to `Idle`,
//! so the next registration starts again from tick 0.

use futures_util::stream::{self, Stream};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::error::{AppError, Result};

enum BroadcastState {
    Idle,
    Running {
        /// Identifies this run; a ticker from an earlier run must not publish.
        generation: u64,
        observers: usize,
        tick: u64,
        sender: watch::Sender<String>,
        task: JoinHandle<()>,
    },
}

struct Inner {
    state: BroadcastState,
    next_generation: u64,
}

struct Shared {
    roles: Vec<String>,
    interval: Duration,
    inner: Mutex<Inner>,
}

impl Shared {
    fn role_at(&self, tick: u64) -> String {
        let index = (tick % self.roles.len() as u64) as usize;
        self.roles[index].clone()
    }

    /// Publish the next tick. Returns false once `generation` is stale.
    fn advance(&self, generation: u64) -> bool {
        let mut guard = self.inner.lock();
        match &mut guard.state {
            BroadcastState::Running {
                generation: current,
                tick,
                sender,
                ..
            } if *current == generation => {
                *tick += 1;
                let role = self.role_at(*tick);
                debug!(tick = *tick, role = %role, "rotating role advanced");
                sender.send_replace(role);
                true
            }
            _ => false,
        }
    }

    fn release(&self) {
        let mut guard = self.inner.lock();
        let last = match &mut guard.state {
            BroadcastState::Running { observers, .. } => {
                *observers = observers.saturating_sub(1);
                *observers == 0
            }
            BroadcastState::Idle => false,
        };

        if last {
            if let BroadcastState::Running {
                generation, task, ..
            } = std::mem::replace(&mut guard.state, BroadcastState::Idle)
            {
                task.abort();
                info!(generation, "rotating role ticker stopped");
            }
        }
    }
}

async fn run_ticker(shared: Arc<Shared>, generation: u64) {
    let period = shared.interval;
    let mut interval = tokio::time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;
        if !shared.advance(generation) {
            break;
        }
    }
}

/// Shared, reference-counted role ticker.
///
/// Cloning is cheap and every clone drives the same ticker.
#[derive(Clone)]
pub struct RoleBroadcaster {
    shared: Arc<Shared>,
}

impl std::fmt::Debug for RoleBroadcaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoleBroadcaster")
            .field("roles", &self.shared.roles)
            .field("interval", &self.shared.interval)
            .field("observers", &self.observer_count())
            .finish()
    }
}

impl RoleBroadcaster {
    /// Build a broadcaster over `roles`, dropping empty and whitespace-only entries.
    pub fn new<I, S>(roles: I, interval: Duration) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles: Vec<String> = roles
            .into_iter()
            .map(Into::into)
            .filter(|role: &String| !role.trim().is_empty())
            .collect();

        if roles.is_empty() {
            return Err(AppError::Validation(
                "role list is empty after removing blank entries".to_string(),
            ));
        }
        if interval.is_zero() {
            return Err(AppError::Validation(
                "role rotation interval must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            shared: Arc::new(Shared {
                roles,
                interval,
                inner: Mutex::new(Inner {
                    state: BroadcastState::Idle,
                    next_generation: 0,
                }),
            }),
        })
    }

    /// Roles in rotation order, blanks already removed.
    pub fn roles(&self) -> &[String] {
        &self.shared.roles
    }

    pub fn interval(&self) -> Duration {
        self.shared.interval
    }

    /// Role shown at `tick`: `roles[tick mod len]`.
    pub fn role_at(&self, tick: u64) -> String {
        self.shared.role_at(tick)
    }

    /// Register an observer.
    ///
    /// The returned subscription already holds the latest role. The first
    /// registration starts the ticker; must be called inside a tokio runtime.
    pub fn subscribe(&self) -> RoleSubscription {
        let mut guard = self.shared.inner.lock();
        let inner = &mut *guard;

        if let BroadcastState::Running {
            observers, sender, ..
        } = &mut inner.state
        {
            *observers += 1;
            debug!(observers = *observers, "rotating role observer attached");
            return RoleSubscription::new(sender.subscribe(), self.shared.clone());
        }

        inner.next_generation += 1;
        let generation = inner.next_generation;
        let (sender, receiver) = watch::channel(self.shared.role_at(0));
        let task = tokio::spawn(run_ticker(self.shared.clone(), generation));
        inner.state = BroadcastState::Running {
            generation,
            observers: 1,
            tick: 0,
            sender,
            task,
        };
        info!(
            generation,
            interval_ms = self.shared.interval.as_millis() as u64,
            "rotating role ticker started"
        );

        RoleSubscription::new(receiver, self.shared.clone())
    }

    /// Number of live subscriptions.
    pub fn observer_count(&self) -> usize {
        match &self.shared.inner.lock().state {
            BroadcastState::Running { observers, .. } => *observers,
            BroadcastState::Idle => 0,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(
            self.shared.inner.lock().state,
            BroadcastState::Running { .. }
        )
    }

    /// Current tick of the running ticker, `None` while idle.
    pub fn current_tick(&self) -> Option<u64> {
        match &self.shared.inner.lock().state {
            BroadcastState::Running { tick, .. } => Some(*tick),
            BroadcastState::Idle => None,
        }
    }
}

/// One observer's registration. Dropping it deregisters the observer.
pub struct RoleSubscription {
    receiver: watch::Receiver<String>,
    shared: Arc<Shared>,
    replayed: bool,
}

impl RoleSubscription {
    fn new(receiver: watch::Receiver<String>, shared: Arc<Shared>) -> Self {
        Self {
            receiver,
            shared,
            replayed: false,
        }
    }

    /// Latest published role.
    pub fn current(&self) -> String {
        self.receiver.borrow().clone()
    }

    /// Next role for this observer.
    ///
    /// The first call resolves immediately with the latest role; later calls
    /// wait for the next tick.
    pub async fn next(&mut self) -> Option<String> {
        if !self.replayed {
            self.replayed = true;
            return Some(self.receiver.borrow_and_update().clone());
        }

        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }

    /// Turn the subscription into an infinite stream of roles.
    pub fn into_stream(self) -> impl Stream<Item = String> + Send + 'static {
        stream::unfold(self, |mut subscription| async move {
            let role = subscription.next().await?;
            Some((role, subscription))
        })
    }
}

impl Drop for RoleSubscription {
    fn drop(&mut self) {
        self.shared.release();
    }
}
