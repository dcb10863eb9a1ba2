//! 响应式属性测试：更新、部分更新、监听。

use crate::remote_file::DownloadProgress;
use crate::states::reactive_property::ReactiveProperty;

#[test]
fn update_and_read_back() {
    let prop = ReactiveProperty::new(DownloadProgress::default());
    prop.update(DownloadProgress {
        bytes_done: 10,
        total: Some(100),
    });
    prop.update_field(|p| p.bytes_done += 5);

    let current = prop.get_current();
    assert_eq!(current.bytes_done, 15);
    assert_eq!(current.pct(), Some(15.0));
}

#[test]
fn clones_share_state() {
    let prop = ReactiveProperty::new(1u32);
    let other = prop.clone();
    other.update(2);
    assert_eq!(prop.get_current(), 2);
}

#[tokio::test]
async fn watcher_sees_updates_from_another_task() {
    let prop = ReactiveProperty::new(0u64);
    let mut watcher = prop.watch();
    assert_eq!(watcher.borrow(), 0);

    let writer = prop.clone();
    let handle = tokio::spawn(async move {
        writer.update(42);
    });
    handle.await.unwrap();

    assert_eq!(watcher.changed().await.unwrap(), 42);
}

#[tokio::test]
async fn watcher_errors_after_all_handles_dropped() {
    let prop = ReactiveProperty::new(0u8);
    let mut watcher = prop.watch();
    drop(prop);

    assert!(watcher.changed().await.is_err());
}
