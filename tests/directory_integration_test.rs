use httpmock::prelude::*;
use pitch_directory::{
    Directory, DirectoryConfig, DirectoryError, FileSource, HttpSource, RetryPolicy, SortKey,
    StartupSource,
};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

fn quick_retry(max_attempts: u32) -> RetryPolicy {
    RetryPolicy {
        max_attempts,
        initial_delay_ms: 1,
        max_delay_ms: 5,
        jitter_ms: 0,
    }
}

fn sample_listings() -> serde_json::Value {
    serde_json::json!([
        {
            "_id": "a",
            "_createdAt": "2025-01-10T09:00:00Z",
            "title": "Solar Drones",
            "category": "Tech",
            "views": 100,
            "likes": ["user1"]
        },
        {
            "_id": "b",
            "_createdAt": "2025-01-15T09:00:00Z",
            "title": "Meal Planner",
            "category": "Food & Beverage",
            "views": 50,
            "likes": ["user1", "user2"]
        },
        {
            "_id": "c",
            "_createdAt": "2025-01-12T09:00:00Z",
            "title": "Tutor Match",
            "category": "Education",
            "views": null
        }
    ])
}

fn ids(startups: &[pitch_directory::StartupSummary]) -> Vec<&str> {
    startups.iter().filter_map(|s| s.id.as_deref()).collect()
}

#[tokio::test]
async fn test_http_listing_sorted_by_each_key() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/startups");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "result": sample_listings() }));
    });

    let source = HttpSource::new(server.url("/startups"), Duration::from_secs(5)).unwrap();
    let directory = Directory::new(source).with_retry(quick_retry(1));

    let newest = directory.listing(SortKey::Newest.as_str(), None).await.unwrap();
    assert_eq!(ids(&newest), vec!["b", "c", "a"]);

    let viewed = directory.listing("most_viewed", None).await.unwrap();
    assert_eq!(ids(&viewed), vec!["a", "b", "c"]);

    let liked = directory.listing("likes", None).await.unwrap();
    assert_eq!(ids(&liked), vec!["b", "a", "c"]);

    let tech = directory.listing("newest", Some("Tech")).await.unwrap();
    assert_eq!(ids(&tech), vec!["a"]);

    api_mock.assert_hits(4);
}

#[tokio::test]
async fn test_http_stats() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/startups");
        then.status(200).json_body(sample_listings());
    });

    let source = HttpSource::new(server.url("/startups"), Duration::from_secs(5)).unwrap();
    let stats = Directory::new(source).stats().await.unwrap();

    assert_eq!(stats.total_startups, 3);
    assert_eq!(stats.total_views, 150);
    assert_eq!(stats.total_likes, 3);
    assert_eq!(stats.top_startup.and_then(|s| s.id), Some("a".to_string()));
}

#[tokio::test]
async fn test_unavailable_service_is_retried_until_exhausted() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/startups");
        then.status(503);
    });

    let source = HttpSource::new(server.url("/startups"), Duration::from_secs(5)).unwrap();
    let result = Directory::new(source)
        .with_retry(quick_retry(3))
        .fetch()
        .await;

    assert!(matches!(
        result,
        Err(DirectoryError::RetryExhausted { attempts: 3, .. })
    ));
    api_mock.assert_hits(3);
}

#[tokio::test]
async fn test_unavailable_service_with_empty_fallback() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/startups");
        then.status(503);
    });

    let source = HttpSource::new(server.url("/startups"), Duration::from_secs(5)).unwrap();
    let listing = Directory::new(source)
        .with_retry(quick_retry(2))
        .with_empty_fallback(true)
        .listing("newest", None)
        .await
        .unwrap();

    assert!(listing.is_empty());
    api_mock.assert_hits(2);
}

#[tokio::test]
async fn test_client_error_is_not_retried() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/startups");
        then.status(400);
    });

    let source = HttpSource::new(server.url("/startups"), Duration::from_secs(5)).unwrap();
    let result = Directory::new(source)
        .with_retry(quick_retry(3))
        .fetch()
        .await;

    assert!(matches!(result, Err(DirectoryError::ApiError(_))));
    api_mock.assert_hits(1);
}

#[tokio::test]
async fn test_file_source_from_config() {
    let mut listings = NamedTempFile::new().unwrap();
    listings
        .write_all(sample_listings().to_string().as_bytes())
        .unwrap();

    let toml_content = format!(
        "[source]\nfile = {:?}\n\n[display]\ndefault_sort = \"oldest\"\n",
        listings.path().to_string_lossy()
    );
    let config = DirectoryConfig::from_toml_str(&toml_content).unwrap();
    let source = config.build_source().unwrap();
    assert!(source.describe().starts_with("file "));

    let directory = Directory::new(source).with_retry(config.retry.clone());
    let oldest = directory
        .listing(config.display.default_sort.as_str(), None)
        .await
        .unwrap();

    assert_eq!(ids(&oldest), vec!["a", "c", "b"]);
}

#[tokio::test]
async fn test_missing_file_fails_without_retry() {
    let source = FileSource::new("/no/such/listings.json");
    let result = Directory::new(source)
        .with_retry(quick_retry(3))
        .fetch()
        .await;

    assert!(matches!(result, Err(DirectoryError::IoError(_))));
}
