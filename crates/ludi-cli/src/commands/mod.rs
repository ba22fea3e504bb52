pub mod content;
pub mod dispatch;
pub mod price;
pub mod schema;

pub use dispatch::dispatch;
