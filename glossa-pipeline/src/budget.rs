//! Request-cost budget tracking.
//!
//! The remote enforces a refilling point budget per account. [`RateBudget`]
//! keeps a short-lived cached estimate of the remaining points and gates
//! outgoing calls on it, probing only when the cache has gone stale. It is an
//! owned component, not a process-wide singleton; it is the only shared
//! mutable state in a run.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use glossa_core::{BudgetObserver, BudgetProbe};
use tokio::time::Instant;

/// Tunables for the budget tracker.
///
/// Defaults match the remote's published refill behavior: a 1000-point
/// budget refilling 50 points per second, so a 1 s wait regains the
/// 50-point threshold.
#[derive(Clone, Debug)]
pub struct BudgetConfig {
    /// Wait when fewer points than this remain.
    pub threshold: u32,
    /// How long one threshold wait lasts.
    pub wait_interval: Duration,
    /// How long a cached estimate is trusted.
    pub cache_duration: Duration,
    /// Optimistic estimate assumed when a probe fails.
    pub full_budget: u32,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            threshold: 50,
            wait_interval: Duration::from_millis(1000),
            cache_duration: Duration::from_millis(2000),
            full_budget: 1000,
        }
    }
}

impl BudgetConfig {
    #[must_use]
    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_wait_interval(mut self, wait_interval: Duration) -> Self {
        self.wait_interval = wait_interval;
        self
    }

    #[must_use]
    pub fn with_cache_duration(mut self, cache_duration: Duration) -> Self {
        self.cache_duration = cache_duration;
        self
    }

    #[must_use]
    pub fn with_full_budget(mut self, full_budget: u32) -> Self {
        self.full_budget = full_budget;
        self
    }
}

/// Point-in-time view of the budget, for display and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetStatus {
    pub available: u32,
    pub threshold: u32,
    pub is_low: bool,
}

#[derive(Debug, Clone, Copy)]
struct Cache {
    available: u32,
    checked_at: Option<Instant>,
}

pub struct RateBudget {
    probe: Arc<dyn BudgetProbe>,
    config: BudgetConfig,
    cache: Mutex<Cache>,
}

impl RateBudget {
    pub fn new(probe: Arc<dyn BudgetProbe>, config: BudgetConfig) -> Self {
        let cache = Cache { available: config.full_budget, checked_at: None };
        Self { probe, config, cache: Mutex::new(cache) }
    }

    /// Gate one outgoing remote call.
    ///
    /// Trusts a cache younger than the configured duration, otherwise probes.
    /// When the estimate is below the threshold, sleeps one wait interval
    /// (matching the refill rate) and invalidates the cache so the next check
    /// probes fresh. Waits at most one interval per call; a probe failure is
    /// treated as a full budget, leaving the remote's own throttling response
    /// as the backstop.
    pub async fn ensure_available(&self) {
        let available = self.current_estimate().await;

        if available < self.config.threshold {
            glossa_telemetry::info!(
                available,
                threshold = self.config.threshold,
                wait_ms = self.config.wait_interval.as_millis() as u64,
                "Budget low; waiting for refill"
            );
            tokio::time::sleep(self.config.wait_interval).await;
            self.cache.lock().expect("budget cache poisoned").checked_at = None;
        }
    }

    /// Best-known remaining budget without a network call.
    pub fn estimate(&self) -> u32 {
        self.cache.lock().expect("budget cache poisoned").available
    }

    /// Probe-backed status snapshot.
    pub async fn status(&self) -> BudgetStatus {
        let available = self.current_estimate().await;
        BudgetStatus {
            available,
            threshold: self.config.threshold,
            is_low: available < self.config.threshold,
        }
    }

    async fn current_estimate(&self) -> u32 {
        {
            let cache = self.cache.lock().expect("budget cache poisoned");
            if let Some(checked_at) = cache.checked_at {
                if checked_at.elapsed() < self.config.cache_duration {
                    return cache.available;
                }
            }
        }

        // Cache is stale; probe without holding the lock so concurrent
        // observers are never blocked on the network.
        let available = match self.probe.probe_available().await {
            Ok(points) => points,
            Err(error) => {
                glossa_telemetry::warn!(
                    error = %error,
                    assumed = self.config.full_budget,
                    "Budget probe failed; assuming full budget"
                );
                self.config.full_budget
            }
        };

        let mut cache = self.cache.lock().expect("budget cache poisoned");
        cache.available = available;
        cache.checked_at = Some(Instant::now());
        available
    }
}

impl BudgetObserver for RateBudget {
    /// Refresh the cache from a completed call's response metadata.
    fn observe(&self, points_remaining: u32) {
        let mut cache = self.cache.lock().expect("budget cache poisoned");
        cache.available = points_remaining;
        cache.checked_at = Some(Instant::now());
    }
}
