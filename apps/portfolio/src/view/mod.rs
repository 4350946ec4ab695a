// View layer: UI state machine, palettes, decorative background, and the
// askama page that ties them to the content table.

pub mod background;
pub mod page;
pub mod state;
pub mod theme;

pub use page::PortfolioPage;
pub use state::{UiState, ViewQuery, CV_PATH};
