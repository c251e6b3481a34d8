// [libs/domain/models/src/shared_state.rs]
//! `SharedState`: the atomic counters and phase machine every worker of a
//! search observes without locking against one another.

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicU8, Ordering};

/// Phase of a concurrent generator's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorPhase {
    /// Workers are actively generating and evaluating candidates.
    Running,
    /// The requested match count was reached (or a stop was requested);
    /// workers are finishing their current candidate.
    Draining,
    /// Every worker has joined; the results queue is closed.
    Terminated,
}

impl GeneratorPhase {
    fn from_tag(tag: u8) -> Self {
        match tag {
            0 => GeneratorPhase::Running,
            1 => GeneratorPhase::Draining,
            _ => GeneratorPhase::Terminated,
        }
    }

    fn tag(self) -> u8 {
        match self {
            GeneratorPhase::Running => 0,
            GeneratorPhase::Draining => 1,
            GeneratorPhase::Terminated => 2,
        }
    }
}

/// State shared by every worker of a search: how many candidates have been
/// examined, how many matches have been delivered, how many of the
/// `target` result slots are already spoken for, the lifecycle phase, and
/// the cooperative cancellation flag.
#[derive(Debug)]
pub struct SharedState {
    searched: AtomicU64,
    found: AtomicU64,
    claimed: AtomicU64,
    phase: AtomicU8,
    stop_requested: AtomicBool,
    target: u64,
}

impl SharedState {
    /// Creates a new shared state in [`GeneratorPhase::Running`], with
    /// `target` matches required before workers self-terminate.
    pub fn new(target: u64) -> Self {
        SharedState {
            searched: AtomicU64::new(0),
            found: AtomicU64::new(0),
            claimed: AtomicU64::new(0),
            phase: AtomicU8::new(GeneratorPhase::Running.tag()),
            stop_requested: AtomicBool::new(false),
            target,
        }
    }

    /// Reserves one of the `target` result slots for the calling worker's
    /// just-matched candidate. Returns `true` if the reservation succeeded
    /// (the worker should persist and deliver its match); `false` if every
    /// slot was already claimed by other workers, in which case the worker
    /// must discard this candidate instead of delivering it. This is what
    /// keeps the number of matches ever delivered to at most `target` even
    /// when several workers match a candidate at the same instant.
    pub fn try_claim_slot(&self) -> bool {
        let mut current = self.claimed.load(Ordering::Relaxed);
        loop {
            if current >= self.target {
                return false;
            }
            match self.claimed.compare_exchange_weak(
                current,
                current + 1,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return true,
                Err(observed) => current = observed,
            }
        }
    }

    /// The immutable match count a search was constructed to find.
    pub fn target(&self) -> u64 {
        self.target
    }

    /// Flushes a worker's thread-local batch of examined candidates into
    /// the shared counter. Returns the new total. Workers call this every
    /// `checkEvery` candidates rather than on every single one, so the
    /// counter may lag the true count by up to `checkEvery` per worker
    /// between flushes.
    pub fn add_searched(&self, delta: u64) -> u64 {
        self.searched.fetch_add(delta, Ordering::Relaxed) + delta
    }

    /// Records a successfully delivered match. Returns the new total.
    pub fn record_found(&self) -> u64 {
        self.found.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Candidates examined so far, across all workers. May lag the true
    /// count by up to `checkEvery × workers` between flushes.
    pub fn searched(&self) -> u64 {
        self.searched.load(Ordering::Relaxed)
    }

    /// Matches delivered so far.
    pub fn found(&self) -> u64 {
        self.found.load(Ordering::Relaxed)
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> GeneratorPhase {
        GeneratorPhase::from_tag(self.phase.load(Ordering::Acquire))
    }

    /// Advances to a new lifecycle phase.
    pub fn transition_to(&self, phase: GeneratorPhase) {
        self.phase.store(phase.tag(), Ordering::Release);
    }

    /// Requests cooperative cancellation (`breakOut`). Workers observe
    /// [`SharedState::stop_requested`] at `checkEvery` boundaries and at
    /// each match.
    pub fn request_stop(&self) {
        self.stop_requested.store(true, Ordering::Relaxed);
    }

    /// `true` if cooperative cancellation was requested.
    pub fn stop_requested(&self) -> bool {
        self.stop_requested.load(Ordering::Relaxed)
    }
}
