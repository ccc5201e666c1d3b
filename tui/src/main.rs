use anyhow::Result;
use clap::Parser;
use cursive::{
    event::Key,
    view::{Nameable, Resizable},
    views::{LinearLayout, TextView},
    CbSink, Cursive,
};
use cursive_tabs::TabPanel;
use std::{sync::Arc, thread};
use tracing::{debug, info, warn};

use api_client::BlockingApiClient;
use hearthshelf::{
    application::{self, BookSource},
    config::ClientArgs,
    logging::{self, LogSink},
    RequestTicket,
};

mod views;

use views::{LookupScreen, ThemeChoice};

const TABS: &str = "tabs";
const HOME_TAB: &str = "Home";
const LOOKUP_TAB: &str = "Lookup";

#[derive(Parser)]
#[command(name = "hearthshelf-tui")]
#[command(about = "Look up books by ISBN from the terminal")]
struct CliArgs {
    #[command(flatten)]
    client: ClientArgs,

    #[arg(long, value_name = "ISBN", help = "Start the lookup tab with this query")]
    isbn: Option<String>,

    #[arg(long, value_enum, default_value_t = ThemeChoice::Dark, help = "Colour scheme")]
    theme: ThemeChoice,
}

// Cheap to clone; every callback gets its own handle on the book source.
#[derive(Clone)]
struct UserInterface {
    books: Arc<dyn BookSource>,
}

impl UserInterface {
    fn new(books: Arc<dyn BookSource>) -> Self {
        Self { books }
    }

    fn render(&self, siv: &mut Cursive, initial_query: &str, theme: ThemeChoice) {
        siv.set_theme(views::theme_for(theme));
        siv.set_user_data(LookupScreen::default());

        let lookup = views::lookup_view({
            let ui = self.clone();
            move |siv: &mut Cursive, text: &str, _cursor: usize| ui.query_changed(siv, text)
        });

        let mut tabs = TabPanel::new()
            .with_tab(views::home_view().with_name(HOME_TAB))
            .with_tab(lookup.with_name(LOOKUP_TAB));
        let first_tab = if initial_query.trim().is_empty() {
            HOME_TAB
        } else {
            LOOKUP_TAB
        };
        if tabs.set_active_tab(first_tab).is_err() {
            warn!(tab = first_tab, "no such tab");
        }

        let mut screen = LinearLayout::vertical();
        screen.add_child(tabs.with_name(TABS).full_screen());
        screen.add_child(TextView::new("Esc - exit. F1 home, F2 lookup.").full_width());

        siv.add_fullscreen_layer(screen);
        views::set_query(siv, initial_query);

        siv.add_global_callback(Key::Esc, |s| s.quit());
        siv.add_global_callback(Key::F1, |s| show_tab(s, HOME_TAB));
        siv.add_global_callback(Key::F2, |s| show_tab(s, LOOKUP_TAB));

        // The effect fires once on mount, whatever the initial text is.
        self.query_changed(siv, initial_query);
    }

    fn query_changed(&self, siv: &mut Cursive, text: &str) {
        let sink = siv.cb_sink().clone();
        self.observe(siv, text, sink);
    }

    /// Results for any ticket issued here are posted to `sink`.
    fn observe(&self, siv: &mut Cursive, text: &str, sink: CbSink) {
        let ticket = siv
            .with_user_data(|screen: &mut LookupScreen| screen.controller.query_changed(text))
            .flatten();
        views::refresh(siv);

        if let Some(ticket) = ticket {
            self.dispatch(sink, ticket);
        }
    }

    /// Run the lookup on a worker thread and hand the outcome back to the
    /// UI thread, where the controller decides whether it is still wanted.
    fn dispatch(&self, sink: CbSink, ticket: RequestTicket) {
        let books = Arc::clone(&self.books);
        thread::spawn(move || {
            let outcome = application::resolve(books.as_ref(), &ticket);
            let delivered = sink.send(Box::new(move |siv: &mut Cursive| {
                siv.with_user_data(|screen: &mut LookupScreen| {
                    screen.controller.complete(&ticket, outcome)
                });
                views::refresh(siv);
            }));
            if delivered.is_err() {
                debug!("interface closed before the lookup finished");
            }
        });
    }

    fn start(self, initial_query: &str, theme: ThemeChoice) {
        let mut siv = cursive::default();
        self.render(&mut siv, initial_query, theme);
        siv.run();
    }
}

fn show_tab(siv: &mut Cursive, name: &str) {
    let switched = siv.call_on_name(TABS, |tabs: &mut TabPanel| tabs.set_active_tab(name));
    if !matches!(switched, Some(Ok(()))) {
        warn!(tab = name, "could not switch tab");
    }
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    logging::init(&args.client, LogSink::Silent)?;
    info!(base_url = %args.client.base_url, "starting");

    let books = BlockingApiClient::new(&args.client.base_url);
    let initial_query = args.isbn.as_deref().unwrap_or_default();
    UserInterface::new(Arc::new(books)).start(initial_query, args.theme);
    Ok(())
}
