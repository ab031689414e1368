pub mod brew;
pub mod context;
pub mod estimate;
pub mod history;
pub mod insights;
pub mod key;
mod render;
pub mod show;
