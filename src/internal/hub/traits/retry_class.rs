/// 错误分类：决定一次失败是否值得重试。
pub trait RetryClass {
    fn is_retryable(&self) -> bool;
}
