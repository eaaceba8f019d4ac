use std::time::Duration;

/// Tunables for one engine instance.
///
/// The defaults come from the crate-level constants and suit
/// interactive use. A fixed seed makes every simulation in the
/// instance replayable; leaving it unset draws from OS entropy.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Config {
    pub equity_iterations: u32,
    pub fallback_iterations: u32,
    pub strategy_iterations: u32,
    pub worker_timeout: Duration,
    pub evaluation_cache: usize,
    pub equity_cache: usize,
    pub strategy_cache: usize,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            equity_iterations: crate::EQUITY_ITERATIONS,
            fallback_iterations: crate::EQUITY_ITERATIONS_FALLBACK,
            strategy_iterations: crate::STRATEGY_ITERATIONS,
            worker_timeout: crate::WORKER_TIMEOUT,
            evaluation_cache: crate::EVALUATION_CACHE_SIZE,
            equity_cache: crate::EQUITY_CACHE_SIZE,
            strategy_cache: crate::STRATEGY_CACHE_SIZE,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert!(config.fallback_iterations < config.equity_iterations);
        assert!(config.worker_timeout > Duration::ZERO);
        assert!(config.evaluation_cache > 0);
    }
}
