//! Decision support for heads-up No-Limit Texas Hold'em.
//!
//! Given hole cards, a partial or complete board, and coarse game context,
//! this crate ranks the best achievable hand, estimates equity against a
//! random opponent by Monte Carlo sampling, and synthesizes a small,
//! explainable action distribution. The strategy output is a banded
//! heuristic, not an equilibrium solve.

pub mod cache;
pub mod cards;
pub mod engine;
pub mod equity;
pub mod error;
pub mod evaluation;
pub mod strategy;

pub use engine::Config;
pub use engine::Engine;
pub use error::Error;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Pot sizes, stack sizes, and bet amounts in chips.
pub type Chips = f32;
/// Win rates, action frequencies, and confidence values.
pub type Probability = f32;
/// Expected values and payoff estimates.
pub type Utility = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// MONTE CARLO SAMPLING
// Trial counts trade latency for confidence; interactive defaults stay
// comfortably under a second on one core.
// ============================================================================
/// Equity trials for interactive queries.
pub const EQUITY_ITERATIONS: u32 = 10_000;
/// Equity trials for full-analysis mode.
pub const EQUITY_ITERATIONS_FULL: u32 = 100_000;
/// Reduced trial count for the synchronous timeout fallback.
pub const EQUITY_ITERATIONS_FALLBACK: u32 = 2_000;
/// Internal equity trials backing strategy synthesis.
pub const STRATEGY_ITERATIONS: u32 = 5_000;

// ============================================================================
// BACKGROUND WORKER
// ============================================================================
/// How long an async caller waits on the worker before falling back.
pub const WORKER_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(3);

// ============================================================================
// CACHE CAPACITIES
// Bounded LRU; evaluation entries are small, simulation results smaller
// but costlier to recompute.
// ============================================================================
/// Hand evaluation cache entries.
pub const EVALUATION_CACHE_SIZE: usize = 4096;
/// Equity result cache entries.
pub const EQUITY_CACHE_SIZE: usize = 1024;
/// Strategy result cache entries.
pub const STRATEGY_CACHE_SIZE: usize = 1024;

// ============================================================================
// STRATEGY BANDS
// Overlapping strength bands over [0, 1]; every strength falls in at
// least one band so the synthesizer always emits an action.
// ============================================================================
/// Fold band upper edge.
pub const FOLD_CEILING: Probability = 0.40;
/// Call band lower edge.
pub const CALL_FLOOR: Probability = 0.15;
/// Call band upper edge.
pub const CALL_CEILING: Probability = 0.70;
/// Check band lower edge (postflop pot control).
pub const CHECK_FLOOR: Probability = 0.20;
/// Check band upper edge.
pub const CHECK_CEILING: Probability = 0.65;
/// Raise band lower edge.
pub const RAISE_FLOOR: Probability = 0.55;
/// Raise threshold discount in late position.
pub const LATE_SHIFT: Probability = 0.05;
/// Fold EV as a fraction of pot (surrendered equity share).
pub const FOLD_EV_FACTOR: Utility = -0.05;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
