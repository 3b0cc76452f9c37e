//! Command implementations

mod alumni_list;
mod alumni_manage;
mod dashboard;
mod projects_list;
mod projects_manage;

pub use alumni_list::{alumni_list, AlumniListOptions};
pub use alumni_manage::alumni_manage;
pub use dashboard::dashboard;
pub use projects_list::projects_list;
pub use projects_manage::projects_manage;
