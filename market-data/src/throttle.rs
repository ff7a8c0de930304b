use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

struct Inner {
    capacity: usize,
    tokens: usize,
    interval: Duration,
    last_refill: Instant,
}

impl Inner {
    fn refill(&mut self) {
        let now = Instant::now();
        if now.duration_since(self.last_refill) >= self.interval {
            self.tokens = self.capacity;
            self.last_refill = now;
        }
    }
}

/// Token-bucket pacing for outbound provider requests.
///
/// The upstream API is a shared, rate-limited resource; every request path
/// acquires a token first so repeated calls cannot exceed `capacity`
/// requests per `interval`. Acquisition never fails, it only waits.
#[derive(Clone)]
pub struct RequestThrottle {
    inner: Arc<Mutex<Inner>>,
}

impl RequestThrottle {
    /// Allow `capacity` requests every `interval`.
    pub fn new(capacity: usize, interval: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                capacity,
                tokens: capacity,
                interval,
                last_refill: Instant::now(),
            })),
        }
    }

    /// Wait until a request slot is available, then consume it.
    pub async fn acquire(&self) {
        loop {
            let wait = {
                let mut inner = self.inner.lock().await;
                inner.refill();
                if inner.tokens > 0 {
                    inner.tokens -= 1;
                    None
                } else {
                    Some(
                        inner
                            .interval
                            .saturating_sub(inner.last_refill.elapsed()),
                    )
                }
            };

            match wait {
                None => return,
                Some(delay) => tokio::time::sleep(delay).await,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_throttle_within_capacity_is_immediate() {
        let throttle = RequestThrottle::new(3, Duration::from_millis(100));
        let start = Instant::now();
        throttle.acquire().await;
        throttle.acquire().await;
        throttle.acquire().await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_throttle_blocks_past_capacity() {
        let throttle = RequestThrottle::new(2, Duration::from_millis(50));
        throttle.acquire().await;
        throttle.acquire().await;
        let start = Instant::now();
        throttle.acquire().await;
        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_throttle_refills_after_interval() {
        let throttle = RequestThrottle::new(1, Duration::from_millis(30));
        throttle.acquire().await;
        tokio::time::sleep(Duration::from_millis(40)).await;
        let start = Instant::now();
        throttle.acquire().await;
        assert!(start.elapsed() < Duration::from_millis(20));
    }
}
