use api_client::Book;

use crate::application::LookupState;

pub const NO_BOOK_SELECTED: &str = "No book selected.";
pub const LINK_LABEL: &str = "View on Google Books";

pub const HOME_BANNER: &str = r"
          (                                  )
           )\ )    hearthshelf       (      /(
          (()/(                      )\    )\())
           /(_))  pull up a chair  ((_)  ((_)\
          (_))    and look up a       _    _((_)
          | |     book by its ISBN   | |  | || |
          | |__                      | |__| __ |
          |____|                     |____|_||_|
";

/// Everything the lookup screen shows, derived from the controller state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupPanel {
    pub status: Option<String>,
    pub body: PanelBody,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelBody {
    Detail(BookDetail),
    Placeholder(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookDetail {
    pub title: String,
    pub description: String,
    pub authors_line: String,
    pub thumbnail_url: String,
    pub link: String,
    pub link_label: &'static str,
}

impl From<&Book> for BookDetail {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            description: book.description.clone(),
            authors_line: format!("Authors: {}", book.authors.join(", ")),
            thumbnail_url: book.image.small_thumbnail_url.clone(),
            link: book.detail_link.clone(),
            link_label: LINK_LABEL,
        }
    }
}

impl BookDetail {
    /// The placeholder link `#` leads nowhere.
    pub fn has_link(&self) -> bool {
        !self.link.is_empty() && self.link != api_client::model::NO_LINK
    }
}

impl LookupPanel {
    pub fn from_state(state: &LookupState) -> Self {
        let status = match state {
            LookupState::Idle | LookupState::Resolved(_) => None,
            LookupState::Fetching { query } => Some(format!("Searching for isbn:{query}...")),
            LookupState::Empty => Some("No match for that ISBN.".to_owned()),
            LookupState::Errored(reason) => Some(format!("Lookup failed: {reason}")),
        };

        let body = match state {
            LookupState::Resolved(book) => PanelBody::Detail(book.into()),
            _ => PanelBody::Placeholder(NO_BOOK_SELECTED),
        };

        Self { status, body }
    }
}
