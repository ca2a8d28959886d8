pub mod portfolio;
pub mod resume;

pub use portfolio::{ContactLink, ContentError, Portfolio, Project};
pub use resume::{Role, RoleDate};
