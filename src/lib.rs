pub mod application;
pub mod browser;
pub mod config;
pub mod error;
pub mod logging;
pub mod presentation;

pub use application::{BookSource, Completion, LookupController, LookupState, RequestTicket};
pub use presentation::{BookDetail, LookupPanel, PanelBody};
