pub mod loading;
pub mod modal;
pub mod nav_bar;

#[allow(unused_imports)]
pub use loading::*;
#[allow(unused_imports)]
pub use modal::*;
#[allow(unused_imports)]
pub use nav_bar::*;
