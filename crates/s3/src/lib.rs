use std::time::Duration;

use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to upload object: {0}")]
    Put(String),
    #[error("failed to presign object url: {0}")]
    Presign(String),
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub bucket: String,
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

#[derive(Clone)]
pub struct Client {
    inner: aws_sdk_s3::Client,
    bucket: String,
}

impl Client {
    pub async fn new(config: &Config) -> Self {
        let credentials = aws_credential_types::Credentials::from_keys(
            config.access_key_id.clone(),
            config.secret_access_key.clone(),
            None,
        );

        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()))
            .credentials_provider(credentials);
        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        Self {
            inner: aws_sdk_s3::Client::new(&sdk_config),
            bucket: config.bucket.clone(),
        }
    }

    /// Write one object. Objects are never deleted here; lifecycle is owned
    /// by the bucket configuration.
    pub async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<(), Error> {
        let size = bytes.len();

        self.inner
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| Error::Put(e.into_service_error().to_string()))?;

        tracing::info!(key = %key, size_bytes = %size, "object_uploaded");
        Ok(())
    }

    pub async fn presign_get(&self, key: &str, ttl: Duration) -> Result<String, Error> {
        let presigning =
            PresigningConfig::expires_in(ttl).map_err(|e| Error::Presign(e.to_string()))?;

        let request = self
            .inner
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|e| Error::Presign(e.into_service_error().to_string()))?;

        Ok(request.uri().to_string())
    }
}

/// Time- and randomness-qualified object key, so concurrent uploads never
/// collide: `2026-08-07-12-30-05-<uuid>.<ext>`.
pub fn object_key(extension: &str) -> String {
    format!(
        "{}-{}.{}",
        chrono::Utc::now().format("%Y-%m-%d-%H-%M-%S"),
        uuid::Uuid::new_v4(),
        extension
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_keys_are_unique_and_carry_the_extension() {
        let a = object_key("wav");
        let b = object_key("wav");

        assert_ne!(a, b);
        assert!(a.ends_with(".wav"));
        // timestamp prefix + uuid: 19 + 1 + 36 + 4
        assert_eq!(a.len(), 60);
    }

    #[tokio::test]
    async fn presign_get_signs_offline() {
        let client = Client::new(&Config {
            bucket: "test-bucket".into(),
            region: "us-east-1".into(),
            access_key_id: "test-key".into(),
            secret_access_key: "test-secret".into(),
            endpoint_url: Some("http://127.0.0.1:9000".into()),
        })
        .await;

        let url = client
            .presign_get("2026-01-01-00-00-00-abc.wav", Duration::from_secs(3600))
            .await
            .unwrap();

        assert!(url.contains("test-bucket"));
        assert!(url.contains("2026-01-01-00-00-00-abc.wav"));
        assert!(url.contains("X-Amz-Expires=3600"));
    }
}
