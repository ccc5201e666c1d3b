use anyhow::{bail, Result};
use clap::Parser;
use tracing::debug;

use api_client::{model as domain, ApiClient};
use hearthshelf::{
    config::ClientArgs,
    logging::{self, LogSink},
    presentation::{LookupPanel, PanelBody, HOME_BANNER},
    LookupController, LookupState,
};

pub mod model;

#[derive(Parser)]
#[command(name = "hearthshelf")]
#[command(about = "Look up books by ISBN on Google Books")]
struct CliArgs {
    #[command(flatten)]
    client: ClientArgs,

    #[command(subcommand)]
    command: model::Command,
}

struct BookLookupApi(ApiClient);

impl BookLookupApi {
    fn new(client: ApiClient) -> Self {
        Self(client)
    }

    async fn dispatch(&self, command: model::Command) -> Result<()> {
        let Self(client) = self;
        match command {
            model::Command::Lookup(model::LookupArgs { isbn, format }) => {
                let state = self.lookup(&isbn).await;
                print_lookup(&state, format)
            }
            model::Command::Volumes { isbn } => {
                let volumes = client.fetch_volumes(&isbn).await?;
                println!("{}", serde_json::to_string_pretty(&volumes)?);
                Ok(())
            }
            model::Command::Banner => {
                println!("{HOME_BANNER}");
                Ok(())
            }
        }
    }

    async fn lookup(&self, isbn: &str) -> LookupState {
        let Self(client) = self;
        let mut controller = LookupController::new();

        if let Some(ticket) = controller.query_changed(isbn) {
            let outcome = client.lookup_isbn(ticket.query()).await;
            let completion = controller.complete(&ticket, outcome);
            debug!(?completion, "lookup finished");
        }

        controller.state().clone()
    }
}

fn print_lookup(state: &LookupState, format: model::OutputFormat) -> Result<()> {
    println!("{}", render_lookup(state, format)?);
    Ok(())
}

fn render_lookup(state: &LookupState, format: model::OutputFormat) -> Result<String> {
    if let LookupState::Errored(reason) = state {
        bail!("{reason}");
    }

    let rendered = match format {
        model::OutputFormat::Json => {
            let book: Option<&domain::Book> = match state {
                LookupState::Resolved(book) => Some(book),
                _ => None,
            };
            serde_json::to_string_pretty(&book)?
        }
        model::OutputFormat::Table => match state {
            LookupState::Resolved(book) => model::BookTable::from(book.clone()).to_string(),
            _ => {
                let LookupPanel { status, body } = LookupPanel::from_state(state);
                let placeholder = match body {
                    PanelBody::Placeholder(message) => Some(message.to_owned()),
                    _ => None,
                };
                status
                    .into_iter()
                    .chain(placeholder)
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        },
    };

    Ok(rendered)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    logging::init(&args.client, LogSink::Stderr)?;

    let client = ApiClient::new(&args.client.base_url);
    let api = BookLookupApi::new(client);
    api.dispatch(args.command).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_arguments_parse() {
        let args = CliArgs::try_parse_from([
            "hearthshelf",
            "--base-url",
            "http://localhost:9000",
            "lookup",
            "9780261102217",
            "--format",
            "json",
        ])
        .expect("valid arguments");

        assert_eq!(args.client.base_url, "http://localhost:9000");
        match args.command {
            model::Command::Lookup(model::LookupArgs { isbn, format }) => {
                assert_eq!(isbn, "9780261102217");
                assert_eq!(format, model::OutputFormat::Json);
            }
            _ => panic!("expected the lookup command"),
        }
    }

    #[tokio::test]
    async fn blank_isbn_never_reaches_the_network() {
        // Nothing listens here; a request would surface as an error state.
        let api = BookLookupApi::new(ApiClient::new("http://127.0.0.1:1"));
        assert_eq!(api.lookup("   ").await, LookupState::Idle);
    }

    #[test]
    fn failed_lookup_is_an_error() {
        let state = LookupState::Errored("Request failed 503".to_owned());
        let failure = print_lookup(&state, model::OutputFormat::Table).expect_err("an error");
        assert_eq!(failure.to_string(), "Request failed 503");
    }

    #[test]
    fn empty_lookup_prints_without_failing() {
        assert!(print_lookup(&LookupState::Empty, model::OutputFormat::Table).is_ok());
        assert!(print_lookup(&LookupState::Empty, model::OutputFormat::Json).is_ok());
    }

    fn hobbit() -> LookupState {
        LookupState::Resolved(domain::Book {
            title: "The Hobbit".to_owned(),
            authors: vec!["J. R. R. Tolkien".to_owned()],
            image: domain::BookImage {
                small_thumbnail_url: "http://books.google.com/small".to_owned(),
                thumbnail_url: "http://books.google.com/thumb".to_owned(),
            },
            detail_link: "http://books.google.com/preview".to_owned(),
            ..domain::Book::default()
        })
    }

    #[test]
    fn resolved_lookup_as_json_keeps_every_field() {
        let rendered = render_lookup(&hobbit(), model::OutputFormat::Json).expect("rendered");
        let json: serde_json::Value = serde_json::from_str(&rendered).expect("json output");

        assert_eq!(json["title"], "The Hobbit");
        assert_eq!(json["authors"][0], "J. R. R. Tolkien");
        assert_eq!(json["detail_link"], "http://books.google.com/preview");
        assert_eq!(
            json["image"]["small_thumbnail_url"],
            "http://books.google.com/small"
        );
        assert_eq!(json["image"]["thumbnail_url"], "http://books.google.com/thumb");
    }

    #[test]
    fn resolved_lookup_as_table_shows_the_book() {
        let rendered = render_lookup(&hobbit(), model::OutputFormat::Table).expect("rendered");
        assert!(rendered.contains("The Hobbit"));
        assert!(rendered.contains("http://books.google.com/preview"));
    }

    #[test]
    fn absent_book_renders_null_or_the_placeholder() {
        let json = render_lookup(&LookupState::Empty, model::OutputFormat::Json).expect("json");
        assert_eq!(json, "null");

        let table = render_lookup(&LookupState::Empty, model::OutputFormat::Table).expect("table");
        assert!(!table.is_empty());
    }
}
