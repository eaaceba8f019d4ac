use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::sync::oneshot;

/// Why a dispatched request produced no result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// No worker exists, or it has been torn down.
    Unavailable,
    /// The worker did not answer within the deadline.
    TimedOut,
}

/// A unit of work tagged with its correlation id.
struct Request {
    id: u64,
    work: Box<dyn FnOnce() + Send + 'static>,
}

/// Owns the single background worker of an engine instance.
///
/// Each request carries a fresh correlation id and replies on its own
/// oneshot channel, so concurrent callers can never receive one
/// another's results. A caller that abandons its future closes the
/// reply channel, and the worker skips the computation when it
/// dequeues the orphaned request. After shutdown every submission
/// reports Unavailable and the caller computes inline.
pub struct Dispatcher {
    tx: Option<mpsc::UnboundedSender<Request>>,
    worker: Option<std::thread::JoinHandle<()>>,
    sequence: AtomicU64,
}

impl Dispatcher {
    pub fn new() -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<Request>();
        let worker = std::thread::Builder::new()
            .name(String::from("railbird-worker"))
            .spawn(move || {
                while let Some(request) = rx.blocking_recv() {
                    log::trace!("worker picks up request {}", request.id);
                    (request.work)();
                }
                log::debug!("worker drains and exits");
            });
        match worker {
            Ok(handle) => Self {
                tx: Some(tx),
                worker: Some(handle),
                sequence: AtomicU64::new(0),
            },
            Err(e) => {
                log::warn!("background worker unavailable ({}), computing inline", e);
                Self {
                    tx: None,
                    worker: None,
                    sequence: AtomicU64::new(0),
                }
            }
        }
    }

    /// Run work on the worker and await its reply, up to the deadline.
    pub async fn submit<T, F>(&self, deadline: Duration, work: F) -> Result<T, Fallback>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        let tx = self.tx.as_ref().ok_or(Fallback::Unavailable)?;
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        let (reply, response) = oneshot::channel::<T>();
        let request = Request {
            id,
            work: Box::new(move || {
                if reply.is_closed() {
                    return;
                }
                let _ = reply.send(work());
            }),
        };
        if tx.send(request).is_err() {
            log::warn!("worker channel closed, request {} computes inline", id);
            return Err(Fallback::Unavailable);
        }
        match tokio::time::timeout(deadline, response).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(_)) => {
                log::warn!("worker dropped request {}", id);
                Err(Fallback::Unavailable)
            }
            Err(_) => {
                log::warn!("request {} unanswered after {:?}", id, deadline);
                Err(Fallback::TimedOut)
            }
        }
    }

    /// Close the channel and wait for the worker to drain and exit.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.tx.take() {
            drop(tx);
        }
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::error!("worker exited by panic");
            }
        }
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;

    #[tokio::test]
    async fn answers_come_back() {
        let dispatcher = Dispatcher::new();
        let answer = dispatcher.submit(Duration::from_secs(1), || 6 * 7).await;
        assert_eq!(answer, Ok(42));
    }

    #[tokio::test]
    async fn concurrent_replies_stay_matched() {
        let dispatcher = Dispatcher::new();
        let slow = dispatcher.submit(Duration::from_secs(1), || {
            std::thread::sleep(Duration::from_millis(30));
            "slow"
        });
        let fast = dispatcher.submit(Duration::from_secs(1), || "fast");
        let (slow, fast) = tokio::join!(slow, fast);
        assert_eq!(slow, Ok("slow"));
        assert_eq!(fast, Ok("fast"));
    }

    #[tokio::test]
    async fn deadline_reports_timeout() {
        let dispatcher = Dispatcher::new();
        let answer = dispatcher
            .submit(Duration::from_millis(10), || {
                std::thread::sleep(Duration::from_millis(200));
                1
            })
            .await;
        assert_eq!(answer, Err(Fallback::TimedOut));
    }

    #[tokio::test]
    async fn shutdown_reports_unavailable() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.shutdown();
        let answer = dispatcher.submit(Duration::from_secs(1), || 1).await;
        assert_eq!(answer, Err(Fallback::Unavailable));
    }

    #[tokio::test]
    async fn abandoned_requests_are_skipped() {
        let dispatcher = Dispatcher::new();
        let touched = Arc::new(AtomicBool::new(false));
        let blocker = dispatcher.submit(Duration::from_secs(1), || {
            std::thread::sleep(Duration::from_millis(50))
        });
        let probe = {
            let touched = touched.clone();
            dispatcher.submit(Duration::from_secs(1), move || {
                touched.store(true, Ordering::Relaxed)
            })
        };
        let abandoned = tokio::time::timeout(Duration::from_millis(5), probe);
        let (blocked, _) = tokio::join!(blocker, abandoned);
        assert!(blocked.is_ok());
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(!touched.load(Ordering::Relaxed));
    }
}
