pub mod general;
pub mod jobs;
pub mod user;

pub use general::*;
pub use jobs::*;
pub use user::*;
