//! CivitAI 下载入口测试：已存在跳过、Bearer 头、失败只返回 false。

use httpmock::prelude::*;

use crate::tests::{test_config, weights_bytes};
use crate::{EnsureOutcome, download_civitai_model, ensure_model_file};

const DOWNLOAD_PATH: &str = "/api/download/models/1920896";

#[tokio::test]
async fn ensure_existing_file_issues_no_request() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path(DOWNLOAD_PATH);
            then.status(200).body("new content");
        })
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server, dir.path(), Some("civitai-secret"), None);
    let model_path = dir.path().join("pony_realism.safetensors");
    std::fs::write(&model_path, b"old content").unwrap();

    let outcome =
        ensure_model_file(&config, &model_path, &server.url(DOWNLOAD_PATH)).await;

    assert_eq!(outcome, EnsureOutcome::AlreadyPresent);
    assert_eq!(std::fs::read(&model_path).unwrap(), b"old content");
    mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn ensure_missing_file_downloads_it() {
    let server = MockServer::start_async().await;
    let body = weights_bytes(12_345);
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path(DOWNLOAD_PATH);
            then.status(200).body(&body);
        })
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server, dir.path(), None, None);
    let model_path = config.model_dir.join("pony_realism.safetensors");

    let outcome =
        ensure_model_file(&config, &model_path, &server.url(DOWNLOAD_PATH)).await;

    assert_eq!(outcome, EnsureOutcome::Downloaded);
    assert_eq!(std::fs::read(&model_path).unwrap(), body);
    mock.assert_async().await;
}

#[tokio::test]
async fn download_with_api_key_sends_bearer_header() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(DOWNLOAD_PATH)
                .header("authorization", "Bearer civitai-secret");
            then.status(200).body("weights");
        })
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server, dir.path(), Some("civitai-secret"), None);
    let destination = dir.path().join("out/model.safetensors");

    assert!(download_civitai_model(&config, &server.url(DOWNLOAD_PATH), &destination).await);
    assert_eq!(std::fs::read(&destination).unwrap(), b"weights");
    mock.assert_async().await;
}

#[tokio::test]
async fn download_without_api_key_sends_no_auth_header() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(DOWNLOAD_PATH)
                .matches(|req| {
                    !req.headers.as_ref().is_some_and(|headers| {
                        headers
                            .iter()
                            .any(|(k, _)| k.eq_ignore_ascii_case("authorization"))
                    })
                });
            then.status(200).body("weights");
        })
        .await;

    let dir = tempfile::tempdir().unwrap();
    // 空字符串等同于未设置
    let config = test_config(&server, dir.path(), Some(""), None);
    let destination = dir.path().join("model.safetensors");

    assert!(download_civitai_model(&config, &server.url(DOWNLOAD_PATH), &destination).await);
    mock.assert_async().await;
}

#[tokio::test]
async fn download_failing_response_returns_false() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path(DOWNLOAD_PATH);
            then.status(401).body("unauthorized");
        })
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server, dir.path(), None, None);
    let destination = dir.path().join("model.safetensors");

    assert!(!download_civitai_model(&config, &server.url(DOWNLOAD_PATH), &destination).await);
    assert!(!destination.exists());
    mock.assert_async().await;
}

#[tokio::test]
async fn download_invalid_url_returns_false() {
    let server = MockServer::start_async().await;
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server, dir.path(), None, None);

    assert!(!download_civitai_model(&config, "not a url", dir.path().join("m")).await);
}

#[tokio::test]
async fn ensure_failed_download_reports_failed() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(DOWNLOAD_PATH);
            then.status(503);
        })
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server, dir.path(), None, None);
    let model_path = config.model_dir.join("pony_realism.safetensors");

    let outcome =
        ensure_model_file(&config, &model_path, &server.url(DOWNLOAD_PATH)).await;

    assert_eq!(outcome, EnsureOutcome::Failed);
    assert!(!model_path.exists());
}

#[tokio::test]
async fn ensure_unreadable_path_falls_through_to_download() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path(DOWNLOAD_PATH);
            then.status(200).body("weights");
        })
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server, dir.path(), None, None);
    // 父路径是普通文件：存在性检查报错，不能当作已存在
    let blocker = dir.path().join("not_a_dir");
    std::fs::write(&blocker, b"").unwrap();
    let model_path = blocker.join("pony_realism.safetensors");

    let outcome =
        ensure_model_file(&config, &model_path, &server.url(DOWNLOAD_PATH)).await;

    assert_eq!(outcome, EnsureOutcome::Failed);
    // 建目录先失败，请求没有发出
    mock.assert_hits_async(0).await;
}
