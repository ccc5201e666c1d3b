pub mod blocking;
pub mod client;
pub mod error;
pub mod model;
pub mod parse;

pub use blocking::ApiClient as BlockingApiClient;
pub use client::{volumes_by_isbn_uri, ApiClient, DEFAULT_BASE_URL};
pub use model::{Book, BookApiResponse, BookImage};
