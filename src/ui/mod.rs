pub mod components;
pub mod layout;
pub mod page;
pub mod theme;
