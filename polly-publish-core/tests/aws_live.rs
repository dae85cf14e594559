//! Live tests against AWS Polly and S3
//!
//! # Running live tests
//!
//! These tests require AWS credentials and a writable bucket. They are marked
//! #[ignore] by default and won't run in normal CI.
//!
//! To run:
//! ```sh
//! POLLY_TEST_BUCKET=my-bucket cargo test -p polly-publish-core --test aws_live -- --ignored
//! ```

use std::env;

use polly_publish_core::aws::AwsConfig;
use polly_publish_core::storage::AwsS3;
use polly_publish_core::tts::AwsPolly;
use polly_publish_core::{publish, PublishConfig};
use tempfile::TempDir;

#[tokio::test]
#[ignore] // Requires AWS credentials and a bucket
async fn test_publish_to_s3() {
    tracing_subscriber::fmt::init();

    let bucket = env::var("POLLY_TEST_BUCKET").expect("POLLY_TEST_BUCKET must be set");
    let temp_dir = TempDir::new().unwrap();
    let text_file = temp_dir.path().join("speech.txt");
    std::fs::write(&text_file, "Hello from the polly publish live test.").unwrap();

    let mut config = PublishConfig::new(bucket, "polly-audio/test.mp3");
    config.text_file = text_file;
    config.profile = env::var("AWS_PROFILE").ok();
    config.region = env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string());

    let sdk_config = AwsConfig {
        profile: config.profile.clone(),
        region: config.region.clone(),
    }
    .load()
    .await;

    let published = publish(&config, &AwsPolly::new(&sdk_config), &AwsS3::new(&sdk_config))
        .await
        .expect("publish failed");

    println!("Uploaded {} ({} bytes)", published.destination, published.bytes);
    assert!(published.bytes > 0);
}
