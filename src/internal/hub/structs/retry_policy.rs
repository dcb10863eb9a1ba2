use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::internal::hub::traits::retry_class::RetryClass;

/// 默认最多尝试次数
pub const DEFAULT_MAX_ATTEMPTS: usize = 3;

/// 有界重试策略：只有 [`RetryClass::is_retryable`] 为真的错误才会重试，
/// 最后一次失败的错误原样返回。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// 最多尝试次数（含第一次），0 会被当作 1
    pub max_attempts: usize,
    /// 两次尝试之间的等待，默认不等待
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            delay: Duration::ZERO,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: usize) -> Self {
        Self {
            max_attempts,
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// 执行 `op`，参数为从 1 开始的尝试序号。
    pub async fn run<T, E, F, Fut>(&self, mut op: F) -> Result<T, E>
    where
        F: FnMut(usize) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: RetryClass + Display,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match op(attempt).await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_retryable() && attempt < max_attempts => {
                    warn!(
                        "遇到错误: {err}。正在进行第 {attempt} 次重试（共 {max_attempts} 次）..."
                    );
                    if !self.delay.is_zero() {
                        tokio::time::sleep(self.delay).await;
                    }
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
