use super::config::Config;
use super::dispatcher::Dispatcher;
use super::dispatcher::Fallback;
use crate::cache::cache::CacheStats;
use crate::cache::cache::Caches;
use crate::cache::cache::EquityKey;
use crate::cache::cache::StrategyKey;
use crate::cards::hand::Hand;
use crate::cards::street::Street;
use crate::equity::equity::Equity;
use crate::equity::simulator::Simulator;
use crate::error::Error;
use crate::evaluation::evaluation::Evaluation;
use crate::evaluation::strength::Strength;
use crate::strategy::context::GameContext;
use crate::strategy::strategy::Strategy;
use crate::strategy::synthesizer::Synthesizer;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::sync::Mutex;
use tokio::sync::OnceCell;

/// One self-contained decision engine.
///
/// Construct as many instances as you like; nothing is shared between
/// them and nothing lives at module scope. Evaluation is synchronous.
/// Equity and strategy run on the instance's background worker and
/// fall back to inline computation when the worker is unavailable or
/// over deadline, so the async calls always resolve. Identical
/// in-flight requests coalesce onto one computation.
pub struct Engine {
    config: Config,
    caches: Caches,
    dispatcher: Dispatcher,
    pending_equities: Mutex<HashMap<EquityKey, Arc<OnceCell<Equity>>>>,
    pending_strategies: Mutex<HashMap<StrategyKey, Arc<OnceCell<(Strategy, u32)>>>>,
}

impl From<Config> for Engine {
    fn from(config: Config) -> Self {
        Self {
            caches: Caches::new(
                config.evaluation_cache,
                config.equity_cache,
                config.strategy_cache,
            ),
            dispatcher: Dispatcher::new(),
            pending_equities: Mutex::new(HashMap::new()),
            pending_strategies: Mutex::new(HashMap::new()),
            config,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::from(Config::default())
    }

    /// Rank the made hand formed by hole and board together.
    ///
    /// Fewer than two known cards is not an error: it yields the
    /// degenerate empty evaluation by contract.
    pub fn evaluate_hand(&self, hole: Hand, board: Hand) -> Result<Evaluation, Error> {
        let union = Self::validated(hole, board)?;
        let key = u64::from(union);
        if let Some(hit) = self.caches.evaluations().get(&key) {
            log::trace!("evaluation cache hit {}", union);
            return Ok(hit);
        }
        let evaluation = Evaluation::from(union);
        self.caches.evaluations().put(key, evaluation.clone());
        Ok(evaluation)
    }

    /// Estimate showdown equity against one random opponent.
    pub async fn calculate_equity(
        &self,
        hole: Hand,
        board: Hand,
        iterations: Option<u32>,
    ) -> Result<Equity, Error> {
        Self::validated(hole, board)?;
        let trials = iterations.unwrap_or(self.config.equity_iterations);
        let key = (u64::from(hole), u64::from(board), trials);
        if let Some(hit) = self.caches.equities().get(&key) {
            log::trace!("equity cache hit {} | {}", hole, board);
            return Ok(hit);
        }
        let cell = Self::checkout(&self.pending_equities, key);
        let equity = *cell
            .get_or_init(|| self.sample_equity(hole, board, trials))
            .await;
        // a downsampled timeout fallback is served once, never cached,
        // so the next identical call retries the full computation
        if equity.iterations() == trials {
            self.caches.equities().put(key, equity);
        }
        Self::release(&self.pending_equities, &key, &cell);
        Ok(equity)
    }

    /// Synthesize a mixed recommendation for the spot.
    ///
    /// Strength comes from a fresh equity estimate, so a pocket pair
    /// that only ranks as one pair still raises preflop on the back of
    /// its simulated win rate.
    pub async fn calculate_gto_strategy(
        &self,
        hole: Hand,
        board: Hand,
        context: GameContext,
    ) -> Result<Strategy, Error> {
        Self::validated(hole, board)?;
        let key = (
            u64::from(hole),
            u64::from(board),
            (context.pot * 100.).round() as u64,
            (context.stack * 100.).round() as u64,
            context.position,
        );
        if let Some(hit) = self.caches.strategies().get(&key) {
            log::trace!("strategy cache hit {} | {}", hole, board);
            return Ok(hit);
        }
        let cell = Self::checkout(&self.pending_strategies, key);
        let (strategy, sampled) = cell
            .get_or_init(|| async {
                let trials = self.config.strategy_iterations;
                let equity = self.sample_equity(hole, board, trials).await;
                let street = Street::from_observed(board.size());
                let strategy = Synthesizer::from((equity.strength(), context, street)).synthesize();
                (strategy, equity.iterations())
            })
            .await
            .clone();
        // a strategy built on a downsampled equity estimate is served
        // once, never cached, so the next identical call retries at
        // full depth
        if sampled == self.config.strategy_iterations {
            self.caches.strategies().put(key, strategy.clone());
        }
        Self::release(&self.pending_strategies, &key, &cell);
        Ok(strategy)
    }

    /// Showdown comparison of two hands over a shared board.
    ///
    /// Greater means the first hand wins. The two hands may literally
    /// be the same cards, which compares Equal; each must still be
    /// disjoint from the board.
    pub fn compare_hands(
        &self,
        hero: Hand,
        villain: Hand,
        board: Hand,
    ) -> Result<std::cmp::Ordering, Error> {
        let hero = Self::validated(hero, board)?;
        let villain = Self::validated(villain, board)?;
        Ok(match (hero.size(), villain.size()) {
            (0, 0) => std::cmp::Ordering::Equal,
            (0, _) => std::cmp::Ordering::Less,
            (_, 0) => std::cmp::Ordering::Greater,
            _ => Strength::from(hero).cmp(&Strength::from(villain)),
        })
    }

    pub fn clear_cache(&self) {
        log::debug!("cache cleared ({} entries)", self.caches.size());
        self.caches.clear();
    }
    pub fn cache_stats(&self) -> CacheStats {
        self.caches.stats()
    }
    /// Tear down the background worker. Later async calls compute inline.
    pub fn cleanup(&mut self) {
        log::debug!("engine cleanup");
        self.dispatcher.shutdown();
    }

    /// Sampling with dispatch, deadline, and the two fallback paths.
    async fn sample_equity(&self, hole: Hand, board: Hand, trials: u32) -> Equity {
        let seed = self.config.seed;
        let dispatched = self
            .dispatcher
            .submit(self.config.worker_timeout, move || {
                Simulator::new(hole, board, seed).simulate(trials)
            })
            .await;
        match dispatched {
            Ok(equity) => equity,
            Err(Fallback::Unavailable) => Simulator::new(hole, board, seed).simulate(trials),
            Err(Fallback::TimedOut) => {
                let reduced = self.config.fallback_iterations.min(trials);
                log::warn!("equity deadline missed, downsampling to {} trials", reduced);
                Simulator::new(hole, board, seed).simulate(reduced)
            }
        }
    }

    /// Shape checks shared by every entry point: at most two hole
    /// cards, at most five board cards, no card in both.
    fn validated(hole: Hand, board: Hand) -> Result<Hand, Error> {
        if hole.size() > 2 {
            return Err(Error::TooManyCards {
                count: hole.size(),
                limit: 2,
            });
        }
        if board.size() > 5 {
            return Err(Error::TooManyCards {
                count: board.size(),
                limit: 5,
            });
        }
        let overlap = Hand::from(u64::from(hole) & u64::from(board));
        match overlap.top() {
            Some(card) => Err(Error::DuplicateCard(card)),
            None => Ok(Hand::add(hole, board)),
        }
    }

    /// Join or start the pending computation for a key.
    ///
    /// Entries whose every caller has dropped its future are swept
    /// here, so abandoned keys cannot accumulate across the life of
    /// the engine.
    fn checkout<K, V>(
        pending: &Mutex<HashMap<K, Arc<OnceCell<V>>>>,
        key: K,
    ) -> Arc<OnceCell<V>>
    where
        K: Eq + Hash,
    {
        let mut pending = pending.lock().expect("pending lock poisoned");
        pending.retain(|_, cell| Arc::strong_count(cell) > 1);
        pending.entry(key).or_default().clone()
    }

    /// Retire a pending entry, but only the cell this caller joined.
    /// A slow waiter must not evict a successor's fresh cell.
    fn release<K, V>(
        pending: &Mutex<HashMap<K, Arc<OnceCell<V>>>>,
        key: &K,
        cell: &Arc<OnceCell<V>>,
    ) where
        K: Eq + Hash,
    {
        let mut pending = pending.lock().expect("pending lock poisoned");
        if pending
            .get(key)
            .is_some_and(|resident| Arc::ptr_eq(resident, cell))
        {
            pending.remove(key);
        }
    }
}
