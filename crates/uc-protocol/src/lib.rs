pub mod commands;
pub mod diagnostic;
pub mod matching;
pub mod session;

pub use commands::*;
pub use diagnostic::*;
pub use matching::*;
pub use session::*;
