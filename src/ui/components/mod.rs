pub mod header;
pub mod nav_list;
