pub mod clock;
pub mod config;
pub mod habit;
pub mod idea;
pub mod milestone;
pub mod quote;
pub mod task;
pub mod vault;

pub use clock::*;
pub use config::*;
pub use habit::*;
pub use idea::*;
pub use milestone::*;
pub use quote::*;
pub use task::*;
pub use vault::*;
