pub mod ask;
pub mod dispatcher;

pub use dispatcher::Dispatcher;
