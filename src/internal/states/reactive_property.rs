//! # ReactiveProperty
//!
//! 一个轻量级的响应式属性容器，基于 [`tokio::sync::watch`] 实现，
//! 支持异步监听和更新值。纯通知机制，读写不阻塞，适合高频更新场景（如下载进度）。
//!
//! ## 使用示例
//! ```rust,no_run
//! use model_fetch::states::reactive_property::ReactiveProperty;
//!
//! let prop = ReactiveProperty::new(0);
//! prop.update(1);
//! prop.update_field(|v| *v += 1);
//! assert_eq!(prop.get_current(), 2);
//! ```

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;
use tokio::sync::watch::error::RecvError;

/// 响应式属性错误类型
#[derive(Debug, Error)]
pub enum ReactivePropertyError {
    /// 所有属性句柄都已销毁，不会再有新值
    #[error("属性已被销毁")]
    Destroyed(#[from] RecvError),
}

/// 响应式属性：提供 new / update / update_field / get_current / watch 等基础能力。
///
/// clone 得到的是同一份状态的共享句柄。
#[derive(Clone, Debug)]
pub struct ReactiveProperty<T: Clone + Send + Sync> {
    sender: Arc<watch::Sender<T>>,
}

impl<T> ReactiveProperty<T>
where
    T: Clone + Send + Sync,
{
    /// 创建一个新的响应式属性。
    pub fn new(value: T) -> Self {
        let (sender, _) = watch::channel(value);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// 更新属性的值，所有监听者都会收到通知；没有监听者时同样会保存新值。
    pub fn update(&self, new_value: T) -> &Self {
        self.sender.send_replace(new_value);
        self
    }

    /// 使用闭包更新属性的部分字段。
    pub fn update_field<F>(&self, updater: F) -> &Self
    where
        F: FnOnce(&mut T),
    {
        self.sender.send_modify(updater);
        self
    }

    /// 获取当前属性值的快照（会 clone）。
    pub fn get_current(&self) -> T {
        self.sender.borrow().clone()
    }

    /// 创建一个监听器，用于异步监听属性值的变化。
    pub fn watch(&self) -> PropertyWatcher<T> {
        PropertyWatcher {
            receiver: self.sender.subscribe(),
        }
    }
}

/// 属性监听器，用于异步接收属性值的变化。
pub struct PropertyWatcher<T> {
    receiver: watch::Receiver<T>,
}

impl<T> PropertyWatcher<T>
where
    T: Clone + Send + Sync,
{
    /// 异步等待属性值的变化，返回新值。
    pub async fn changed(&mut self) -> Result<T, ReactivePropertyError> {
        self.receiver.changed().await?;
        Ok(self.receiver.borrow_and_update().clone())
    }

    /// 同步获取当前值的克隆。
    pub fn borrow(&self) -> T {
        self.receiver.borrow().clone()
    }
}
