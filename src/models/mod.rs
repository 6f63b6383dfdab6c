pub mod project;
pub mod repo;

pub use project::{load_static_projects, Project};
pub use repo::Repository;
