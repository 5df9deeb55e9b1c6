//! Pure data structures shared by the source adapter, the reducer and the renderer.

pub mod criteria;
pub mod page;
pub mod sample;
pub mod user;

pub use criteria::*;
pub use page::*;
pub use sample::*;
pub use user::*;
