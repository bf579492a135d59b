#[cfg(feature = "ssr")]
pub mod app_state;
pub mod draft;
pub mod error;
pub mod job;
pub mod server;
pub mod session;
pub mod task;
pub mod user;

#[cfg(feature = "ssr")]
pub use app_state::*;
pub use draft::*;
pub use error::*;
pub use job::*;
pub use server::*;
pub use session::*;
pub use task::*;
pub use user::*;

use serde::{Deserialize, Deserializer};

/// The Mongo-backed handlers encode empty collections as JSON `null`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
