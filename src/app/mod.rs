pub mod console;
pub mod menu;
pub mod render;
