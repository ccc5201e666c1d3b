use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;
use tabled::{settings::Style, Table, Tabled};

use super::domain;

#[derive(Subcommand)]
pub enum Command {
    /// Look up the first volume matching an ISBN
    Lookup(LookupArgs),
    /// Print the raw search envelope for an ISBN
    Volumes {
        #[arg(help = "ISBN to search for")]
        isbn: String,
    },
    /// Print the home banner
    Banner,
}

#[derive(Parser)]
pub struct LookupArgs {
    #[arg(help = "ISBN to search for, as typed")]
    pub isbn: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table, help = "Output format")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct Field {
    #[tabled(rename = "Field")]
    name: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

pub struct BookTable(domain::Book);

impl From<domain::Book> for BookTable {
    fn from(value: domain::Book) -> Self {
        Self(value)
    }
}

impl fmt::Display for BookTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(domain::Book {
            title,
            authors,
            description,
            image: domain::BookImage {
                small_thumbnail_url,
                thumbnail_url,
            },
            detail_link,
        }) = self;

        let fields = [
            ("Title", title.clone()),
            ("Authors", authors.join(", ")),
            ("Description", description.clone()),
            ("Small thumbnail", small_thumbnail_url.clone()),
            ("Thumbnail", thumbnail_url.clone()),
            ("Link", detail_link.clone()),
        ]
        .into_iter()
        .map(|(name, value)| Field { name, value });

        let mut table = Table::new(fields);
        table.with(Style::rounded());
        write!(f, "{table}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_field() {
        let table = BookTable::from(domain::Book {
            title: "The Hobbit".to_owned(),
            authors: vec!["J. R. R. Tolkien".to_owned(), "C. Tolkien".to_owned()],
            ..domain::Book::default()
        })
        .to_string();

        assert!(table.contains("The Hobbit"));
        assert!(table.contains("J. R. R. Tolkien, C. Tolkien"));
        assert!(table.contains("No description"));
        assert!(table.contains("Small thumbnail"));
        assert!(table.contains("Link"));
    }
}
