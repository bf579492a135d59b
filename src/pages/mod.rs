pub mod about_page;
pub mod home_page;
pub mod login_page;
pub mod register_page;
pub mod user_jobs_page;
pub mod user_panel_page;

pub use about_page::*;
pub use home_page::*;
pub use login_page::*;
pub use register_page::*;
pub use user_jobs_page::*;
pub use user_panel_page::*;
