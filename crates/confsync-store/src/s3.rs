//! S3 transport for the RemoteStore capability
//!
//! Speaks the S3 REST API directly over reqwest with SigV4-signed
//! requests: HeadBucket, HeadObject, GetObject, PutObject. No retries and
//! no multipart uploads; a put is always a full replace.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, Method, Response, StatusCode, Url};

use crate::error::{Result, StoreError};
use crate::sigv4;
use crate::store::RemoteStore;

/// Longest error-body excerpt carried into a [`StoreError::Api`] message
const MAX_ERROR_BODY: usize = 512;

/// Connection settings for [`S3Store`]
#[derive(Debug, Clone)]
pub struct S3Config {
    pub access_key: String,
    pub secret_key: String,
    pub region: String,
    /// Optional S3-compatible endpoint (e.g. a local MinIO in CI). When
    /// set, requests use path-style addressing against this base URL;
    /// otherwise virtual-hosted AWS addressing is used.
    pub endpoint: Option<String>,
}

/// Production store implementation over the S3 REST API
pub struct S3Store {
    client: Client,
    config: S3Config,
}

impl S3Store {
    /// Build a store from connection settings. Performs no I/O.
    pub fn new(config: S3Config) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn bucket_url(&self, bucket: &str) -> Result<Url> {
        self.build_url(bucket, "")
    }

    fn object_url(&self, bucket: &str, key: &str) -> Result<Url> {
        self.build_url(bucket, key)
    }

    fn build_url(&self, bucket: &str, key: &str) -> Result<Url> {
        let encoded_key = sigv4::uri_encode_path(key);
        let raw = match &self.config.endpoint {
            Some(endpoint) => {
                format!("{}/{bucket}/{encoded_key}", endpoint.trim_end_matches('/'))
            }
            None => format!(
                "https://{bucket}.s3.{}.amazonaws.com/{encoded_key}",
                self.config.region
            ),
        };
        Url::parse(&raw).map_err(|e| StoreError::request(format!("bad URL '{raw}': {e}")))
    }

    async fn send(&self, method: Method, url: Url, body: Vec<u8>) -> Result<Response> {
        let timestamp = Utc::now();
        let host = host_header(&url)?;
        let payload_hash = sigv4::payload_hash(&body);

        let authorization = sigv4::authorization_header(
            &sigv4::RequestToSign {
                method: method.as_str(),
                host: &host,
                uri: url.path(),
                payload_hash: &payload_hash,
                timestamp,
            },
            &sigv4::Credentials {
                access_key: &self.config.access_key,
                secret_key: &self.config.secret_key,
                region: &self.config.region,
            },
        );

        tracing::debug!(%method, %url, "sending store request");
        self.client
            .request(method, url)
            .header("host", &host)
            .header("x-amz-date", sigv4::amz_date(&timestamp))
            .header("x-amz-content-sha256", &payload_hash)
            .header("authorization", authorization)
            .body(body)
            .send()
            .await
            .map_err(|e| StoreError::transport(e.to_string()))
    }
}

#[async_trait]
impl RemoteStore for S3Store {
    async fn bucket_exists(&self, bucket: &str) -> Result<bool> {
        let url = self.bucket_url(bucket)?;
        let response = self.send(Method::HEAD, url, Vec::new()).await?;
        exists_from_status(response.status())
    }

    async fn object_exists(&self, bucket: &str, key: &str) -> Result<bool> {
        let url = self.object_url(bucket, key)?;
        let response = self.send(Method::HEAD, url, Vec::new()).await?;
        exists_from_status(response.status())
    }

    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        let url = self.object_url(bucket, key)?;
        let response = self.send(Method::GET, url, Vec::new()).await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        response
            .bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(|e| StoreError::transport(e.to_string()))
    }

    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()> {
        let url = self.object_url(bucket, key)?;
        let response = self.send(Method::PUT, url, body).await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        Ok(())
    }
}

/// The host header value that participates in the signature.
fn host_header(url: &Url) -> Result<String> {
    let host = url
        .host_str()
        .ok_or_else(|| StoreError::request(format!("URL '{url}' has no host")))?;
    Ok(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

/// Translate a HEAD status into the existence boolean.
///
/// Only a confirmed 404 means "absent"; a 403 is a credential or policy
/// problem and must surface as an error, not as absence.
fn exists_from_status(status: StatusCode) -> Result<bool> {
    if status.is_success() {
        Ok(true)
    } else if status == StatusCode::NOT_FOUND {
        Ok(false)
    } else {
        Err(StoreError::Api {
            status: status.as_u16(),
            message: "unexpected status for existence check".to_string(),
        })
    }
}

async fn api_error(response: Response) -> StoreError {
    let status = response.status().as_u16();
    let mut message = response.text().await.unwrap_or_default();
    if message.is_empty() {
        message = "no response body".to_string();
    } else if message.len() > MAX_ERROR_BODY {
        let mut end = MAX_ERROR_BODY;
        while !message.is_char_boundary(end) {
            end -= 1;
        }
        message.truncate(end);
    }
    StoreError::Api { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn aws_store() -> S3Store {
        S3Store::new(S3Config {
            access_key: "AKID".to_string(),
            secret_key: "secret".to_string(),
            region: "eu-west-2".to_string(),
            endpoint: None,
        })
    }

    fn endpoint_store() -> S3Store {
        S3Store::new(S3Config {
            access_key: "AKID".to_string(),
            secret_key: "secret".to_string(),
            region: "us-east-1".to_string(),
            endpoint: Some("http://localhost:9000".to_string()),
        })
    }

    #[test]
    fn test_virtual_hosted_object_url() {
        let url = aws_store().object_url("deploys", "configs/app.json").unwrap();
        assert_eq!(
            url.as_str(),
            "https://deploys.s3.eu-west-2.amazonaws.com/configs/app.json"
        );
    }

    #[test]
    fn test_virtual_hosted_bucket_url_has_root_path() {
        let url = aws_store().bucket_url("deploys").unwrap();
        assert_eq!(url.path(), "/");
    }

    #[test]
    fn test_endpoint_override_uses_path_style() {
        let url = endpoint_store().object_url("deploys", "app.json").unwrap();
        assert_eq!(url.as_str(), "http://localhost:9000/deploys/app.json");
    }

    #[test]
    fn test_object_key_is_uri_encoded() {
        let url = aws_store().object_url("deploys", "env configs/app.json").unwrap();
        assert_eq!(url.path(), "/env%20configs/app.json");
    }

    #[test]
    fn test_host_header_includes_non_default_port() {
        let url = Url::parse("http://localhost:9000/bucket/key").unwrap();
        assert_eq!(host_header(&url).unwrap(), "localhost:9000");

        let url = Url::parse("https://deploys.s3.us-east-1.amazonaws.com/key").unwrap();
        assert_eq!(
            host_header(&url).unwrap(),
            "deploys.s3.us-east-1.amazonaws.com"
        );
    }

    #[test]
    fn test_exists_from_status_policy() {
        assert!(exists_from_status(StatusCode::OK).unwrap());
        assert!(!exists_from_status(StatusCode::NOT_FOUND).unwrap());

        let err = exists_from_status(StatusCode::FORBIDDEN).unwrap_err();
        assert!(matches!(err, StoreError::Api { status: 403, .. }));
    }
}
