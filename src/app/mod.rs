pub mod app;
pub mod event;
pub mod mode;
pub mod reply;

pub use app::App;
pub use event::{AppEvent, Conversion};
pub use mode::AppMode;
pub use reply::{Reply, Section};
