pub mod library;
pub mod popups;
