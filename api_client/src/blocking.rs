use reqwest::blocking::Client;
use serde_json::Value;
use tracing::info;

use crate::{client::volumes_by_isbn_uri, error, model, parse};

/// Same lookups as [`crate::ApiClient`] for callers without a runtime.
/// Must not be called from inside an async context.
#[derive(Clone)]
pub struct ApiClient {
    http_client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.to_owned(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn lookup_isbn(&self, isbn: &str) -> error::Result<Option<model::Book>> {
        let body = self.request_volumes(isbn)?;
        parse::book_from_slice(&body)
    }

    pub fn fetch_volumes(&self, isbn: &str) -> error::Result<Value> {
        let body = self.request_volumes(isbn)?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn request_volumes(&self, isbn: &str) -> error::Result<Vec<u8>> {
        let resource_uri = volumes_by_isbn_uri(&self.base_url, isbn);
        info!(uri = %resource_uri, "requesting volumes");

        let response = self.http_client.get(&resource_uri).send()?;

        if response.status().is_success() {
            Ok(response.bytes()?.to_vec())
        } else {
            Err(error::Error::Server {
                status: response.status(),
                uri: resource_uri,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{google_books, serve};
    use tokio::runtime::Runtime;

    // The blocking client spins its own runtime, so the server lives on a
    // separate one and the test body stays synchronous.
    fn server() -> (Runtime, String) {
        let runtime = Runtime::new().expect("a runtime");
        let base_url = runtime.block_on(serve(google_books()));
        (runtime, base_url)
    }

    #[test]
    fn lookup_isbn_parses_the_first_volume() {
        let (_runtime, base_url) = server();
        let client = ApiClient::new(&base_url);

        let book = client
            .lookup_isbn("9780261102217")
            .expect("a response")
            .expect("a book");
        assert_eq!(book.title, "q=isbn%3A9780261102217");
        assert_eq!(book.description, "No description");
    }

    #[test]
    fn empty_result_is_none() {
        let (_runtime, base_url) = server();
        let client = ApiClient::new(&base_url);
        assert_eq!(client.lookup_isbn("none").expect("a response"), None);
    }

    #[test]
    fn server_failure_is_reported() {
        let (_runtime, base_url) = server();
        let client = ApiClient::new(&base_url);
        assert!(matches!(
            client.lookup_isbn("fail"),
            Err(error::Error::Server { status, .. }) if status.as_u16() == 503
        ));
    }

    #[test]
    fn fetch_volumes_returns_the_raw_envelope() {
        let (_runtime, base_url) = server();
        let client = ApiClient::new(&base_url);
        let json = client.fetch_volumes("none").expect("a response");
        assert_eq!(json["kind"], "books#volumes");
    }
}
