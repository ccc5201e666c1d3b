use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::{
    error,
    model::{
        Book, BookApiResponse, BookImage, NO_AUTHORS, NO_DESCRIPTION, NO_LINK, NO_TITLE,
        VOLUMES_KIND,
    },
};

#[derive(Clone, Debug, PartialEq)]
pub enum Validation {
    Valid(BookApiResponse),
    Invalid(Rejection),
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    #[error("unexpected response kind {0:?}")]
    WrongKind(Option<String>),

    #[error("no matching volumes")]
    NoResults,

    #[error("response carries no item list")]
    MissingItems,
}

/// Check an untrusted search envelope before anything reads from it.
pub fn validate(json: &Value) -> Validation {
    let kind = json.get("kind").and_then(Value::as_str);
    if kind != Some(VOLUMES_KIND) {
        return Validation::Invalid(Rejection::WrongKind(kind.map(str::to_owned)));
    }

    let total_items = json.get("totalItems");
    if total_items.and_then(Value::as_f64) == Some(0.0) {
        return Validation::Invalid(Rejection::NoResults);
    }

    let items = match json.get("items").and_then(Value::as_array) {
        Some(items) if items.is_empty() => return Validation::Invalid(Rejection::NoResults),
        Some(items) => items.clone(),
        None => return Validation::Invalid(Rejection::MissingItems),
    };

    Validation::Valid(BookApiResponse {
        kind: VOLUMES_KIND.to_owned(),
        total_items: total_items.and_then(Value::as_u64),
        items,
    })
}

/// Project the first item of a validated envelope into a [`Book`].
pub fn project(response: &BookApiResponse) -> Option<Book> {
    let volume_info = response
        .items
        .first()
        .and_then(|item| item.get("volumeInfo"))
        .and_then(Value::as_object);

    let Some(volume_info) = volume_info else {
        debug!("first item has no volumeInfo object");
        return None;
    };

    let image_links = volume_info.get("imageLinks").and_then(Value::as_object);

    Some(Book {
        title: text_or(volume_info, "title", NO_TITLE),
        authors: authors(volume_info),
        description: text_or(volume_info, "description", NO_DESCRIPTION),
        image: BookImage {
            small_thumbnail_url: image_links
                .map(|links| text_or(links, "smallThumbnail", ""))
                .unwrap_or_default(),
            thumbnail_url: image_links
                .map(|links| text_or(links, "thumbnail", ""))
                .unwrap_or_default(),
        },
        detail_link: text_or(volume_info, "previewLink", NO_LINK),
    })
}

pub fn book_from_value(json: &Value) -> Option<Book> {
    match validate(json) {
        Validation::Valid(response) => project(&response),
        Validation::Invalid(rejection) => {
            debug!(%rejection, "response rejected");
            None
        }
    }
}

/// Bodies that are not JSON at all are an error, not an empty result.
pub fn book_from_slice(body: &[u8]) -> error::Result<Option<Book>> {
    let json: Value = serde_json::from_slice(body)?;
    Ok(book_from_value(&json))
}

fn text_or(object: &Map<String, Value>, field: &str, fallback: &str) -> String {
    object
        .get(field)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .unwrap_or(fallback)
        .to_owned()
}

fn authors(volume_info: &Map<String, Value>) -> Vec<String> {
    match volume_info.get("authors") {
        Some(Value::Array(names)) => names
            .iter()
            .map(|name| match name {
                Value::String(name) => name.clone(),
                other => other.to_string(),
            })
            .collect(),
        _ => vec![NO_AUTHORS.to_owned()],
    }
}
