pub mod job_card;
pub mod job_list;

#[allow(unused_imports)]
pub use job_card::*;
#[allow(unused_imports)]
pub use job_list::*;
