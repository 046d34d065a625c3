//! Fault-injecting SHA1 engine

use sha1_stream_core::hashing::algorithms::sha1::{BLOCK_SIZE, SIZE};
use sha1_stream_core::{Engine, EngineFault, HashAlgorithm, Sha1Engine};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Faults to inject, shared by an engine and every snapshot taken of it
///
/// Counters live outside the engine state, so they keep counting when a
/// digest restores a snapshot.
#[derive(Debug, Default)]
pub struct FaultPlan {
    fail_update_on_call: Option<usize>,
    finalize_faults: AtomicUsize,
    update_calls: AtomicUsize,
    finalize_calls: AtomicUsize,
}

impl FaultPlan {
    /// A plan that injects nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the `call`-th update (zero based)
    pub fn fail_update_on_call(mut self, call: usize) -> Self {
        self.fail_update_on_call = Some(call);
        self
    }

    /// Fail the next `times` finalize calls
    pub fn fail_finalize_times(self, times: usize) -> Self {
        self.finalize_faults.store(times, Ordering::SeqCst);
        self
    }

    /// Number of update calls that reached the engine
    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    /// Number of finalize calls that reached the engine
    pub fn finalize_calls(&self) -> usize {
        self.finalize_calls.load(Ordering::SeqCst)
    }

    /// Wrap this plan in an engine, returning a handle for inspecting counters
    pub fn into_engine(self) -> (Arc<FaultPlan>, FaultyEngine) {
        let plan = Arc::new(self);
        (plan.clone(), FaultyEngine::new(plan))
    }
}

/// SHA1 engine that fails on demand
///
/// A failed finalize still wipes the running state, the way a destructive
/// native finalize would.
#[derive(Clone, Debug, Default)]
pub struct FaultyEngine {
    inner: Sha1Engine,
    plan: Arc<FaultPlan>,
}

impl FaultyEngine {
    pub fn new(plan: Arc<FaultPlan>) -> Self {
        Self {
            inner: Sha1Engine::default(),
            plan,
        }
    }
}

impl Engine for FaultyEngine {
    const ALGORITHM: HashAlgorithm = HashAlgorithm::SHA1;
    const SIZE: usize = SIZE;
    const BLOCK_SIZE: usize = BLOCK_SIZE;

    fn reset(&mut self) {
        self.inner.reset();
    }

    fn update(&mut self, data: &[u8]) -> Result<(), EngineFault> {
        let call = self.plan.update_calls.fetch_add(1, Ordering::SeqCst);
        if self.plan.fail_update_on_call == Some(call) {
            return Err(EngineFault::new(format!("injected update fault on call {call}")));
        }
        self.inner.update(data)
    }

    fn finalize_into(&mut self, out: &mut [u8]) -> Result<(), EngineFault> {
        self.plan.finalize_calls.fetch_add(1, Ordering::SeqCst);
        let armed = self
            .plan
            .finalize_faults
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok();

        if armed {
            self.inner.reset();
            return Err(EngineFault::new("injected finalize fault"));
        }
        self.inner.finalize_into(out)
    }
}
