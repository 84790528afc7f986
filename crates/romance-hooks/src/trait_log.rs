//! Compatibility diagnostics: per-agent trait messages batched in a
//! concurrent cache and flushed to `tracing` once an agent goes quiet.
//!
//! Purely observational.  Nothing here feeds back into scoring.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use dashmap::DashMap;
use romance_core::{AgentId, Trait, TraitSet, is_sexuality_trait};
use tracing::{error, info};

use crate::HookResult;

/// An agent's messages are flushed once nothing was written for this long.
pub const FLUSH_AGE_MS: u64 = 1_000;

/// How often the background sweeper runs.
pub const SWEEP_INTERVAL: Duration = Duration::from_millis(100);

/// Batches diagnostic lines per agent.
pub struct TraitLogCache {
    messages: DashMap<AgentId, String>,
    /// Milliseconds since `epoch` of each agent's latest write.
    touched:  DashMap<AgentId, u64>,
    epoch:    Instant,
}

impl Default for TraitLogCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TraitLogCache {
    pub fn new() -> Self {
        Self {
            messages: DashMap::new(),
            touched:  DashMap::new(),
            epoch:    Instant::now(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }

    pub fn write_message(&self, method: &str, agent: AgentId, message: &str) {
        self.write_message_at(method, agent, message, self.now_ms());
    }

    pub fn write_message_at(&self, method: &str, agent: AgentId, message: &str, now_ms: u64) {
        let mut buf = self.messages.entry(agent).or_default();
        buf.push_str(&format!("{method} - {message}\n"));
        drop(buf);
        self.touched.insert(agent, now_ms);
    }

    /// Record the full trait list of `agent`.
    pub fn write_traits(&self, method: &str, agent: AgentId, traits: Option<&TraitSet>) {
        let list = traits
            .map(|ts| ts.iter().map(Trait::label).collect::<Vec<_>>().join(","))
            .unwrap_or_default();
        self.write_message(method, agent, &format!("agent: {agent} | traits: {list}"));
    }

    /// Agents with unflushed messages.
    pub fn pending(&self) -> usize {
        self.touched.len()
    }

    pub fn peek(&self, agent: AgentId) -> Option<String> {
        self.messages.get(&agent).map(|m| m.value().clone())
    }

    pub fn sweep(&self) -> Vec<(AgentId, String)> {
        self.sweep_at(self.now_ms())
    }

    /// Flush every agent whose latest write is older than [`FLUSH_AGE_MS`]
    /// at `now_ms`.  Each batch is logged at `info` and returned.
    pub fn sweep_at(&self, now_ms: u64) -> Vec<(AgentId, String)> {
        let stale: Vec<AgentId> = self
            .touched
            .iter()
            .filter(|e| now_ms.saturating_sub(*e.value()) > FLUSH_AGE_MS)
            .map(|e| *e.key())
            .collect();

        let mut flushed = Vec::with_capacity(stale.len());
        for agent in stale {
            match self.messages.remove(&agent) {
                Some((_, text)) => {
                    info!(%agent, "{}", text.trim_end());
                    flushed.push((agent, text));
                }
                None => error!(%agent, "message cache entry missing on flush"),
            }
            if self.touched.remove(&agent).is_none() {
                error!(%agent, "timer cache entry missing on flush");
            }
        }
        flushed
    }

    /// Sweep every [`SWEEP_INTERVAL`] on a background thread until the
    /// returned handle is stopped or dropped.
    pub fn spawn_sweeper(self: &Arc<Self>) -> HookResult<SweeperHandle> {
        let cache = Arc::clone(self);
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let join = thread::Builder::new()
            .name("trait-log-sweeper".into())
            .spawn(move || {
                while !flag.load(Ordering::Relaxed) {
                    cache.sweep();
                    thread::sleep(SWEEP_INTERVAL);
                }
            })?;
        Ok(SweeperHandle { stop, join: Some(join) })
    }
}

/// Stops the sweeper thread when dropped.
pub struct SweeperHandle {
    stop: Arc<AtomicBool>,
    join: Option<JoinHandle<()>>,
}

impl SweeperHandle {
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(join) = self.join.take() {
            if join.join().is_err() {
                error!("trait log sweeper panicked");
            }
        }
    }
}

impl Drop for SweeperHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Replaces a third-party "is this a sexuality trait" check with ours,
/// logging every call to `cache`.
pub fn sexuality_trait_check(cache: &TraitLogCache, agent: AgentId, t: Trait) -> bool {
    let answer = is_sexuality_trait(t);
    cache.write_message(
        "is_sexuality_trait",
        agent,
        &format!("trait: {} | is_sexuality_trait: {answer}", t.label()),
    );
    answer
}
