pub mod gate;
pub mod prompt;
pub mod rows;
pub mod view;
