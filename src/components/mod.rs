pub mod about;
pub mod contact;
pub mod events;
pub mod footer;
pub mod hero;
pub mod menu;
pub mod navbar;
pub mod section_heading;
