//! A single-producer bridge that turns pushed values into a pull-based
//! [`Cursor`].
//!
//! One thread pushes values with [`Producer::push`]; another pulls them with
//! [`Consumer::next`](Cursor::next) exactly like any other cursor. When the
//! producer closes (or is dropped) the consumer drains what is left and then
//! reports end-of-sequence.
//!
//! ```text
//!   producer thread                      consumer thread
//!   ───────────────                      ───────────────
//!   push(a) ──┐                       ┌─▶ next() -> Some(a)
//!   push(b) ──┼──▶ [ ArrayQueue ] ────┼─▶ next() -> Some(b)
//!   push(c) ──┘                       └─▶ next() -> Some(c)
//!   close()  ─────── closed flag ───────▶ next() -> None (forever)
//! ```
//!
//! # Rendezvous vs Buffered
//!
//! | Config | `push` returns when |
//! |--------|---------------------|
//! | capacity 0 (default) | the consumer has taken the value |
//! | capacity `n` | the value is buffered (blocks only while `n` are waiting) |
//!
//! A rendezvous bridge keeps the producer in lock-step with the consumer,
//! which is what you want when a callback-style producer must not run ahead
//! of whoever is iterating.
//!
//! # Example
//!
//! ```
//! use ferrule_channel::bridge;
//! use ferrule_core::{Cursor, Maybe};
//! use std::thread;
//!
//! let (mut tx, mut rx) = bridge::<&str>();
//!
//! let handle = thread::spawn(move || {
//!     for word in ["a", "b", "c"] {
//!         tx.push(word).unwrap();
//!     }
//!     tx.close();
//! });
//!
//! assert_eq!(rx.next(), Maybe::Some("a"));
//! assert_eq!(rx.into_vector().as_slice(), &["b", "c"]);
//! handle.join().unwrap();
//! ```
//!
//! # Waiting Strategy
//!
//! Every blocking wait goes through the same three phases:
//!
//! ```text
//! 1. fast path       one attempt, no waiting
//! 2. backoff         Backoff::snooze() x snooze_iters, retrying each time
//! 3. park            set *_parked flag (SeqCst), retry, park, clear flag
//! ```
//!
//! The other side only issues an unpark when it observes the parked flag,
//! so a spinning peer never costs a syscall. The flags sit in separate
//! cache lines:
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │ Cache Line 0: producer_parked (AtomicBool + padding)      │
//! ├───────────────────────────────────────────────────────────┤
//! │ Cache Line 1: consumer_parked (AtomicBool + padding)      │
//! ├───────────────────────────────────────────────────────────┤
//! │ Cache Line 2: taken (AtomicUsize, rendezvous handshake)   │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! # Disconnection
//!
//! Dropping either end wakes the other:
//!
//! - Dropping the [`Producer`] closes the bridge, same as [`Producer::close`].
//! - Dropping the [`Consumer`] makes any pending or future `push` return
//!   [`SendError`] carrying the value back.
//!
//! ```
//! use ferrule_channel::bridge_with_config;
//! use ferrule_channel::BridgeConfig;
//!
//! let (mut tx, rx) = bridge_with_config::<u64>(BridgeConfig::default().with_capacity(4));
//! drop(rx);
//!
//! let err = tx.push(7).unwrap_err();
//! assert_eq!(err.into_inner(), 7);
//! ```

#![warn(missing_docs)]

use core::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crossbeam_queue::ArrayQueue;
use crossbeam_utils::sync::{Parker, Unparker};
use crossbeam_utils::{Backoff, CachePadded};
use ferrule_collections::Vector;
use ferrule_core::{Cursor, Maybe, StdIter};
use tracing::{debug, trace};

/// Default number of backoff snooze iterations before parking.
pub const DEFAULT_SNOOZE_ITERS: usize = 8;

// ============================================================================
// Configuration
// ============================================================================

/// Sizing and wait tuning for a bridge.
///
/// ```
/// use ferrule_channel::BridgeConfig;
///
/// let config = BridgeConfig::default().with_capacity(64).with_snooze_iters(32);
/// assert_eq!(config.capacity, 64);
/// assert!(!config.is_rendezvous());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Number of values that may wait between producer and consumer.
    /// `0` means rendezvous.
    pub capacity: usize,
    /// Backoff iterations before a blocked side parks. Higher values burn
    /// more CPU for lower wake-up latency.
    pub snooze_iters: usize,
}

impl BridgeConfig {
    /// Rendezvous configuration with default backoff.
    pub const fn rendezvous() -> Self {
        Self {
            capacity: 0,
            snooze_iters: DEFAULT_SNOOZE_ITERS,
        }
    }

    /// Sets the buffer capacity.
    #[must_use]
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the number of snooze iterations.
    #[must_use]
    pub const fn with_snooze_iters(mut self, snooze_iters: usize) -> Self {
        self.snooze_iters = snooze_iters;
        self
    }

    /// Returns `true` if `push` waits for the consumer to take each value.
    pub const fn is_rendezvous(&self) -> bool {
        self.capacity == 0
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self::rendezvous()
    }
}

// ============================================================================
// Shared State
// ============================================================================

struct Shared<T> {
    queue: ArrayQueue<T>,
    capacity: usize,
    /// Values the consumer has pulled so far.
    taken: CachePadded<AtomicUsize>,
    closed: AtomicBool,
    consumer_gone: AtomicBool,
    producer_parked: CachePadded<AtomicBool>,
    consumer_parked: CachePadded<AtomicBool>,
}

/// Retries `attempt` until it yields a result: once immediately, then
/// between backoff snoozes, then around parks.
///
/// `parked` must be the flag the peer checks before unparking `parker`.
fn wait_for<R>(
    parked: &AtomicBool,
    parker: &Parker,
    snooze_iters: usize,
    mut attempt: impl FnMut() -> Option<R>,
) -> R {
    // Fast path
    if let Some(r) = attempt() {
        return r;
    }

    // Backoff phase
    let backoff = Backoff::new();
    for _ in 0..snooze_iters {
        backoff.snooze();
        if let Some(r) = attempt() {
            return r;
        }
    }

    // Park phase
    loop {
        parked.store(true, Ordering::SeqCst);

        // Check after signaling - prevents missed wakeup race
        if let Some(r) = attempt() {
            parked.store(false, Ordering::Relaxed);
            return r;
        }

        parker.park();
        parked.store(false, Ordering::Relaxed);

        if let Some(r) = attempt() {
            return r;
        }
    }
}

// ============================================================================
// Construction
// ============================================================================

/// Creates a rendezvous bridge.
///
/// Each [`Producer::push`] returns only after the consumer has pulled the
/// value. Use [`bridge_with_config`] for a buffered bridge.
pub fn bridge<T>() -> (Producer<T>, Consumer<T>) {
    bridge_with_config(BridgeConfig::rendezvous())
}

/// Creates a bridge with the given configuration.
///
/// # Example
///
/// ```
/// use ferrule_channel::{BridgeConfig, bridge_with_config};
/// use ferrule_core::{Cursor, Maybe};
///
/// let (mut tx, mut rx) = bridge_with_config::<u32>(BridgeConfig::default().with_capacity(2));
///
/// // Buffered: neither push waits for the consumer.
/// tx.push(1).unwrap();
/// tx.push(2).unwrap();
/// tx.close();
///
/// assert_eq!(rx.next(), Maybe::Some(1));
/// assert_eq!(rx.next(), Maybe::Some(2));
/// assert_eq!(rx.next(), Maybe::None);
/// ```
pub fn bridge_with_config<T>(config: BridgeConfig) -> (Producer<T>, Consumer<T>) {
    // A rendezvous bridge still needs one slot to hand the value across.
    let slots = config.capacity.max(1);

    let shared = Arc::new(Shared {
        queue: ArrayQueue::new(slots),
        capacity: config.capacity,
        taken: CachePadded::new(AtomicUsize::new(0)),
        closed: AtomicBool::new(false),
        consumer_gone: AtomicBool::new(false),
        producer_parked: CachePadded::new(AtomicBool::new(false)),
        consumer_parked: CachePadded::new(AtomicBool::new(false)),
    });

    let producer_parker = Parker::new();
    let producer_unparker = producer_parker.unparker().clone();

    let consumer_parker = Parker::new();
    let consumer_unparker = consumer_parker.unparker().clone();

    (
        Producer {
            shared: Arc::clone(&shared),
            parker: producer_parker,
            consumer_unparker,
            snooze_iters: config.snooze_iters,
            pushed: 0,
        },
        Consumer {
            shared,
            parker: consumer_parker,
            producer_unparker,
            snooze_iters: config.snooze_iters,
        },
    )
}

// ============================================================================
// Producer
// ============================================================================

/// The pushing half of a bridge.
///
/// Not `Clone`: there is exactly one producer. [`close`](Producer::close)
/// takes `self`, so a closed producer cannot push again.
pub struct Producer<T> {
    shared: Arc<Shared<T>>,
    parker: Parker,
    consumer_unparker: Unparker,
    snooze_iters: usize,
    pushed: usize,
}

impl<T> Producer<T> {
    /// Hands `value` to the consumer.
    ///
    /// On a rendezvous bridge this blocks until the consumer has pulled the
    /// value. On a buffered bridge it blocks only while the buffer is full.
    ///
    /// Returns `Err(SendError(value))` if the consumer has been dropped,
    /// including when it is dropped while this call is waiting.
    pub fn push(&mut self, value: T) -> Result<(), SendError<T>> {
        if self.is_disconnected() {
            trace!("push on disconnected bridge");
            return Err(SendError(value));
        }

        let shared = &*self.shared;
        let mut pending = Some(value);

        let enqueued = wait_for(
            &shared.producer_parked,
            &self.parker,
            self.snooze_iters,
            || {
                let v = pending.take()?;
                if shared.consumer_gone.load(Ordering::SeqCst) {
                    return Some(Err(SendError(v)));
                }
                match shared.queue.push(v) {
                    Ok(()) => Some(Ok(())),
                    Err(v) => {
                        pending = Some(v);
                        None
                    }
                }
            },
        );

        if let Err(e) = enqueued {
            trace!("consumer dropped while push was waiting for space");
            return Err(e);
        }

        self.pushed += 1;
        self.notify_consumer();

        if shared.capacity == 0 {
            self.await_handoff()
        } else {
            Ok(())
        }
    }

    /// Pushes the payload of `value`; `Maybe::None` is a no-op.
    pub fn push_maybe(&mut self, value: Maybe<T>) -> Result<(), SendError<T>> {
        match value {
            Maybe::Some(v) => self.push(v),
            Maybe::None => Ok(()),
        }
    }

    /// Signals end of stream.
    ///
    /// The consumer still receives every value pushed before this call.
    /// Dropping the producer has the same effect.
    pub fn close(self) {
        drop(self);
    }

    /// Returns `true` if the consumer has been dropped.
    #[inline]
    pub fn is_disconnected(&self) -> bool {
        self.shared.consumer_gone.load(Ordering::SeqCst)
    }

    /// Returns the configured capacity. `0` means rendezvous.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.shared.capacity
    }

    /// Waits until the consumer has pulled everything pushed so far.
    fn await_handoff(&self) -> Result<(), SendError<T>> {
        let shared = &*self.shared;
        let pushed = self.pushed;

        wait_for(
            &shared.producer_parked,
            &self.parker,
            self.snooze_iters,
            || {
                if shared.taken.load(Ordering::SeqCst) >= pushed {
                    return Some(Ok(()));
                }
                if shared.consumer_gone.load(Ordering::SeqCst) {
                    // The consumer is gone, so whatever is still queued is
                    // the value this push handed over.
                    trace!("consumer dropped before taking pushed value");
                    return Some(match shared.queue.pop() {
                        Some(v) => Err(SendError(v)),
                        None => Ok(()),
                    });
                }
                None
            },
        )
    }

    #[inline]
    fn notify_consumer(&self) {
        if self.shared.consumer_parked.load(Ordering::SeqCst) {
            self.consumer_unparker.unpark();
        }
    }
}

impl<T> fmt::Debug for Producer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Producer")
            .field("capacity", &self.capacity())
            .field("pushed", &self.pushed)
            .field("disconnected", &self.is_disconnected())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Consumer
// ============================================================================

/// The pulling half of a bridge.
///
/// Implements [`Cursor`]: [`next`](Cursor::next) blocks until a value
/// arrives, or returns `Maybe::None` once the bridge is closed and drained.
/// After that it keeps returning `Maybe::None`.
pub struct Consumer<T> {
    shared: Arc<Shared<T>>,
    parker: Parker,
    producer_unparker: Unparker,
    snooze_iters: usize,
}

impl<T> Consumer<T> {
    /// Polls without blocking.
    ///
    /// ```
    /// use ferrule_channel::{BridgeConfig, TryRecv, bridge_with_config};
    ///
    /// let (mut tx, mut rx) = bridge_with_config::<u8>(BridgeConfig::default().with_capacity(1));
    /// assert_eq!(rx.try_next(), TryRecv::Empty);
    ///
    /// tx.push(3).unwrap();
    /// tx.close();
    /// assert_eq!(rx.try_next(), TryRecv::Value(3));
    /// assert_eq!(rx.try_next(), TryRecv::Closed);
    /// ```
    pub fn try_next(&mut self) -> TryRecv<T> {
        match self.poll() {
            Some(Maybe::Some(v)) => TryRecv::Value(v),
            Some(Maybe::None) => TryRecv::Closed,
            None => TryRecv::Empty,
        }
    }

    /// Pulls every remaining value until the bridge is closed.
    ///
    /// Blocks until the producer closes or is dropped.
    pub fn into_vector(mut self) -> Vector<T> {
        let mut out = Vector::new();
        while let Maybe::Some(v) = self.next() {
            out.push(v);
        }
        debug!(count = out.len(), "bridge drained into vector");
        out
    }

    /// Returns `true` if the producer has closed. Values may still be
    /// waiting to be pulled.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.shared.closed.load(Ordering::SeqCst)
    }

    /// Returns the configured capacity. `0` means rendezvous.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.shared.capacity
    }

    /// One non-blocking attempt. `None` means "nothing yet, still open".
    fn poll(&self) -> Option<Maybe<T>> {
        if let Some(v) = self.take() {
            return Some(Maybe::Some(v));
        }
        if self.shared.closed.load(Ordering::SeqCst) {
            // Values pushed before close are visible once close is.
            return Some(self.take().into());
        }
        None
    }

    fn take(&self) -> Option<T> {
        let v = self.shared.queue.pop()?;
        self.shared.taken.fetch_add(1, Ordering::SeqCst);
        self.notify_producer();
        Some(v)
    }

    #[inline]
    fn notify_producer(&self) {
        if self.shared.producer_parked.load(Ordering::SeqCst) {
            self.producer_unparker.unpark();
        }
    }
}

impl<T> Cursor for Consumer<T> {
    type Item = T;

    fn next(&mut self) -> Maybe<T> {
        wait_for(
            &self.shared.consumer_parked,
            &self.parker,
            self.snooze_iters,
            || self.poll(),
        )
    }
}

impl<T> IntoIterator for Consumer<T> {
    type Item = T;
    type IntoIter = StdIter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_std()
    }
}

impl<T> fmt::Debug for Consumer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Consumer")
            .field("capacity", &self.capacity())
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Error returned when [`Producer::push`] fails because the consumer is gone.
///
/// Contains the value that could not be delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendError<T>(pub T);

impl<T> SendError<T> {
    /// Returns the value that could not be delivered.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Display for SendError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bridge consumer disconnected")
    }
}

impl<T: fmt::Debug> std::error::Error for SendError<T> {}

/// Result of [`Consumer::try_next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TryRecv<T> {
    /// A value was available.
    Value(T),
    /// Nothing available yet; the producer is still open.
    Empty,
    /// The producer closed and every value has been pulled.
    Closed,
}

impl<T> TryRecv<T> {
    /// Converts into the value, if any.
    pub fn value(self) -> Maybe<T> {
        match self {
            TryRecv::Value(v) => Maybe::Some(v),
            TryRecv::Empty | TryRecv::Closed => Maybe::None,
        }
    }

    /// Returns `true` for [`TryRecv::Closed`].
    pub fn is_closed(&self) -> bool {
        matches!(self, TryRecv::Closed)
    }
}

// ============================================================================
// Drop Implementations
// ============================================================================

impl<T> Drop for Producer<T> {
    fn drop(&mut self) {
        self.shared.closed.store(true, Ordering::SeqCst);
        trace!(pushed = self.pushed, "bridge producer closed");
        self.consumer_unparker.unpark();
    }
}

impl<T> Drop for Consumer<T> {
    fn drop(&mut self) {
        self.shared.consumer_gone.store(true, Ordering::SeqCst);
        trace!("bridge consumer dropped");
        self.producer_unparker.unpark();
    }
}
