pub mod browser;
pub mod ui;

pub use browser::AlbumBrowser;
pub use ui::Toast;
