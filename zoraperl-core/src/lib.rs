pub mod config;
pub mod errors;
pub mod interpreter;
pub mod resolver;
pub mod scaffold;

pub use config::*;
pub use errors::*;
pub use interpreter::*;
pub use resolver::*;
pub use scaffold::*;
