use reqwest::Client;
use serde_json::Value;
use tracing::info;

use crate::{error, model, parse};

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com";

const VOLUMES_RESOURCE: &str = "/books/v1/volumes";

/// Build the volume search URI for an ISBN query. The text is encoded as
/// typed, surrounding whitespace included.
pub fn volumes_by_isbn_uri(base_url: &str, isbn: &str) -> String {
    let query = urlencoding::encode(&format!("isbn:{isbn}")).into_owned();
    format!(
        "{}{VOLUMES_RESOURCE}?q={query}",
        base_url.trim_end_matches('/')
    )
}

#[derive(Clone)]
pub struct ApiClient {
    http_client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        let http_client = Client::new();
        Self {
            http_client,
            base_url: base_url.to_owned(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn lookup_isbn(&self, isbn: &str) -> error::Result<Option<model::Book>> {
        let body = self.request_volumes(isbn).await?;
        parse::book_from_slice(&body)
    }

    /// The raw search envelope, unvalidated.
    pub async fn fetch_volumes(&self, isbn: &str) -> error::Result<Value> {
        let body = self.request_volumes(isbn).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn request_volumes(&self, isbn: &str) -> error::Result<Vec<u8>> {
        let resource_uri = volumes_by_isbn_uri(&self.base_url, isbn);
        info!(uri = %resource_uri, "requesting volumes");

        let request = self.http_client.get(&resource_uri).build()?;
        let response = self.http_client.execute(request).await?;

        if response.status().is_success() {
            Ok(response.bytes().await?.to_vec())
        } else {
            Err(error::Error::Server {
                status: response.status(),
                uri: resource_uri,
            })
        }
    }
}
