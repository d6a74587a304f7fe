pub mod idea;
pub mod user;
pub mod vote;

pub use idea::*;
pub use user::*;
pub use vote::*;
