use clap::ValueEnum;
use cursive::{
    theme::{BaseColor, BorderStyle, Color, Effect, PaletteColor, Theme},
    utils::markup::StyledString,
    view::{Nameable, Resizable, Scrollable},
    views::{Button, Dialog, EditView, LinearLayout, Panel, TextView},
    Cursive,
};
use tracing::warn;

use hearthshelf::{
    browser,
    presentation::{BookDetail, LookupPanel, PanelBody, HOME_BANNER},
    LookupController,
};

pub const QUERY: &str = "query";
pub const STATUS: &str = "status";
pub const DETAIL: &str = "detail";

/// State owned by the lookup tab, kept as cursive user data.
#[derive(Debug)]
pub struct LookupScreen {
    pub controller: LookupController,
    pub details_open: bool,
}

impl Default for LookupScreen {
    fn default() -> Self {
        Self {
            controller: LookupController::new(),
            details_open: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Light,
    #[default]
    Dark,
}

pub fn theme_for(choice: ThemeChoice) -> Theme {
    let mut theme = Theme::default();
    theme.shadow = false;
    theme.borders = BorderStyle::Simple;

    let palette = &mut theme.palette;
    match choice {
        ThemeChoice::Dark => {
            palette[PaletteColor::Background] = Color::Dark(BaseColor::Black);
            palette[PaletteColor::View] = Color::Dark(BaseColor::Black);
            palette[PaletteColor::Primary] = Color::Light(BaseColor::White);
            palette[PaletteColor::Secondary] = Color::Dark(BaseColor::White);
            palette[PaletteColor::TitlePrimary] = Color::Light(BaseColor::Yellow);
            palette[PaletteColor::Highlight] = Color::Dark(BaseColor::Red);
        }
        ThemeChoice::Light => {
            palette[PaletteColor::Background] = Color::Light(BaseColor::White);
            palette[PaletteColor::View] = Color::Light(BaseColor::White);
            palette[PaletteColor::Primary] = Color::Dark(BaseColor::Black);
            palette[PaletteColor::Secondary] = Color::Dark(BaseColor::Blue);
            palette[PaletteColor::TitlePrimary] = Color::Dark(BaseColor::Red);
            palette[PaletteColor::Highlight] = Color::Light(BaseColor::Red);
        }
    }

    theme
}

pub fn home_view() -> impl cursive::View {
    LinearLayout::vertical()
        .child(Panel::new(TextView::new(HOME_BANNER).center()).title("hearthshelf"))
        .scrollable()
        .full_screen()
}

/// The search row, the status line and an empty detail area. The edit
/// callback is supplied by the caller so this stays free of I/O.
pub fn lookup_view<F>(on_edit: F) -> impl cursive::View
where
    F: Fn(&mut Cursive, &str, usize) + Send + Sync + 'static,
{
    let search = LinearLayout::horizontal()
        .child(TextView::new("Search ISBN: "))
        .child(
            EditView::new()
                .on_edit(on_edit)
                .with_name(QUERY)
                .full_width(),
        );

    LinearLayout::vertical()
        .child(search)
        .child(TextView::new("").with_name(STATUS))
        .child(
            LinearLayout::vertical()
                .child(TextView::new(hearthshelf::presentation::NO_BOOK_SELECTED))
                .with_name(DETAIL)
                .scrollable()
                .full_screen(),
        )
}

/// Put text into the search box without firing its edit callback.
pub fn set_query(siv: &mut Cursive, text: &str) -> bool {
    siv.call_on_name(QUERY, |view: &mut EditView| {
        let _ = view.set_content(text);
    })
    .is_some()
}

/// Redraw the status line and the detail area from the controller state.
pub fn refresh(siv: &mut Cursive) {
    let Some((panel, details_open)) = siv.user_data::<LookupScreen>().map(|screen| {
        (
            LookupPanel::from_state(screen.controller.state()),
            screen.details_open,
        )
    }) else {
        warn!("lookup screen state is missing");
        return;
    };

    let LookupPanel { status, body } = panel;

    siv.call_on_name(STATUS, |view: &mut TextView| {
        view.set_content(status.unwrap_or_default())
    });
    siv.call_on_name(DETAIL, |layout: &mut LinearLayout| {
        layout.clear();
        match body {
            PanelBody::Placeholder(message) => layout.add_child(TextView::new(message)),
            PanelBody::Detail(detail) => add_detail(layout, detail, details_open),
        }
    });
}

fn add_detail(layout: &mut LinearLayout, detail: BookDetail, details_open: bool) {
    let has_link = detail.has_link();
    let BookDetail {
        title,
        description,
        authors_line,
        thumbnail_url,
        link,
        link_label,
    } = detail;

    layout.add_child(TextView::new(StyledString::styled(title, Effect::Bold)));

    let marker = if details_open { "v" } else { ">" };
    layout.add_child(Button::new_raw(
        format!("{marker} Book Information"),
        toggle_details,
    ));

    if !details_open {
        return;
    }

    let thumbnail = if thumbnail_url.is_empty() {
        "Thumbnail: none".to_owned()
    } else {
        format!("Thumbnail: {thumbnail_url}")
    };
    layout.add_child(TextView::new(thumbnail));
    layout.add_child(TextView::new(description));
    layout.add_child(TextView::new(authors_line));

    if has_link {
        layout.add_child(Button::new(link_label, move |siv| open_link(siv, &link)));
    }
}

fn toggle_details(siv: &mut Cursive) {
    siv.with_user_data(|screen: &mut LookupScreen| screen.details_open = !screen.details_open);
    refresh(siv);
}

fn open_link(siv: &mut Cursive, link: &str) {
    if let Err(failure) = browser::open_link(link) {
        warn!(%failure, "could not open link");
        siv.add_layer(Dialog::info(format!("{failure}\n\n{link}")));
    }
}
