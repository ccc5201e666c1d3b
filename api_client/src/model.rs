use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Discriminator carried by a Google Books volume search envelope.
pub const VOLUMES_KIND: &str = "books#volumes";

pub const NO_TITLE: &str = "No title";
pub const NO_AUTHORS: &str = "No authors";
pub const NO_DESCRIPTION: &str = "No description";
pub const NO_LINK: &str = "#";

/// A search envelope that passed validation. Items keep their raw shape,
/// only the first one is ever looked at.
#[derive(Clone, Debug, PartialEq)]
pub struct BookApiResponse {
    pub kind: String,
    pub total_items: Option<u64>,
    pub items: Vec<Value>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub authors: Vec<String>,
    pub description: String,
    pub image: BookImage,
    pub detail_link: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookImage {
    pub small_thumbnail_url: String,
    pub thumbnail_url: String,
}

impl Default for Book {
    fn default() -> Self {
        Self {
            title: NO_TITLE.to_owned(),
            authors: vec![NO_AUTHORS.to_owned()],
            description: NO_DESCRIPTION.to_owned(),
            image: BookImage::default(),
            detail_link: NO_LINK.to_owned(),
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { title, authors, .. } = self;
        write!(f, "{title} by {}", authors.join(", "))
    }
}
