pub mod book;
pub mod export;
pub mod input;
pub mod matching;
pub mod registry;
pub mod store;
pub mod validation;

// Re-export main components
pub use book::*;
pub use export::*;
pub use input::*;
pub use matching::*;
pub use registry::*;
pub use store::*;
pub use validation::*;
