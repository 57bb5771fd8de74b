pub mod app;
pub mod grouping;
pub mod library;
pub mod logging;
pub mod popup;
pub mod theme;
pub mod ui;
