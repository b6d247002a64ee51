mod builder;
mod dispatcher;
mod result;

pub use builder::DispatcherBuilder;
pub use dispatcher::Dispatcher;
pub use result::{ExecutionResult, Outcome};
