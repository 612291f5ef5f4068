pub mod dispatch;
pub mod smoke;
pub mod status;

pub use dispatch::dispatch;
