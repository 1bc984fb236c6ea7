//! Exponential backoff for transient backend failures.

use super::{Row, SheetBackend, SheetError, SheetHandle, SheetResult};
use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::thread;
use std::time::Duration;

/// How many times a backend call is attempted and how long to wait in between.
///
/// The delay before retry `n` (1-based) is `base_delay_ms * 2^(n-1)`, capped at
/// `max_delay_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 200,
            max_delay_ms: 5_000,
        }
    }
}

impl RetryPolicy {
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2u64.saturating_pow(attempt.saturating_sub(1));
        let ms = self
            .base_delay_ms
            .saturating_mul(factor)
            .min(self.max_delay_ms);
        Duration::from_millis(ms)
    }

    /// Run `op`, retrying transient failures. Permanent failures return at once.
    pub fn run<T>(
        &self,
        operation: &str,
        mut op: impl FnMut() -> SheetResult<T>,
    ) -> SheetResult<T> {
        let attempts = self.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match op() {
                Ok(value) => return Ok(value),
                Err(e) if e.is_transient() && attempt < attempts => {
                    let delay = self.delay_for(attempt);
                    warning(format!(
                        "{operation}: {e}; retrying in {} ms ({attempt}/{attempts})",
                        delay.as_millis()
                    ));
                    thread::sleep(delay);
                    attempt += 1;
                }
                Err(e) if e.is_transient() && attempts > 1 => {
                    return Err(SheetError::transient(format!(
                        "{} (gave up after {attempts} attempts)",
                        e.message
                    )));
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Backend decorator applying a [`RetryPolicy`] to every call.
///
/// Each protocol call is idempotent (writes land on fixed row positions), so a
/// call can be repeated safely after a transient failure.
#[derive(Debug, Clone)]
pub struct Retrying<B> {
    inner: B,
    policy: RetryPolicy,
}

impl<B> Retrying<B> {
    pub fn new(inner: B, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }
}

impl<B: SheetBackend> SheetBackend for Retrying<B> {
    fn open_table(&self, name: &str, header: &[&str]) -> SheetResult<SheetHandle> {
        self.policy
            .run(&format!("open {name}"), || self.inner.open_table(name, header))
    }

    fn read_all_rows(&self, handle: &SheetHandle) -> SheetResult<Vec<Row>> {
        self.policy.run(&format!("read {}", handle.name()), || {
            self.inner.read_all_rows(handle)
        })
    }

    fn clear(&self, handle: &SheetHandle) -> SheetResult<()> {
        self.policy
            .run(&format!("clear {}", handle.name()), || self.inner.clear(handle))
    }

    fn write_rows(&self, handle: &SheetHandle, rows: &[Row]) -> SheetResult<()> {
        self.policy.run(&format!("write {}", handle.name()), || {
            self.inner.write_rows(handle, rows)
        })
    }

    fn audit(&self, operation: &str, target: &str, message: &str) -> SheetResult<()> {
        self.policy.run("audit", || self.inner.audit(operation, target, message))
    }
}
