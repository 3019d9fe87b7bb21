use crate::core::errors::ExchangeError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Resolution of the wall-clock value a nonce is derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonceScale {
    /// Unix time in units of 1/10000 s (v2 endpoints)
    TenThousandths,
    /// Unix time in nanoseconds (v1 endpoints)
    Nanos,
}

impl NonceScale {
    fn scale(self, since_epoch: Duration) -> u64 {
        match self {
            Self::TenThousandths => (since_epoch.as_micros() / 100) as u64,
            Self::Nanos => since_epoch.as_nanos() as u64,
        }
    }
}

/// Clock-derived nonce source that never repeats or goes backwards.
///
/// The last issued value is kept in an atomic, so two calls in the same clock
/// tick, from any number of threads, still get strictly increasing nonces.
/// Only values from one generator are ordered; signers each own one.
#[derive(Debug)]
pub struct NonceGenerator {
    scale: NonceScale,
    last: AtomicU64,
}

impl NonceGenerator {
    pub const fn new(scale: NonceScale) -> Self {
        Self {
            scale,
            last: AtomicU64::new(0),
        }
    }

    pub const fn scale(&self) -> NonceScale {
        self.scale
    }

    /// Produce the next nonce as a decimal string
    pub fn next_nonce(&self) -> Result<String, ExchangeError> {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| ExchangeError::Other(format!("System time error: {}", e)))?;

        Ok(self.advance(self.scale.scale(since_epoch)).to_string())
    }

    fn advance(&self, now: u64) -> u64 {
        let mut last = self.last.load(Ordering::Acquire);
        loop {
            let candidate = now.max(last.saturating_add(1));
            match self
                .last
                .compare_exchange_weak(last, candidate, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => return candidate,
                Err(actual) => last = actual,
            }
        }
    }
}
