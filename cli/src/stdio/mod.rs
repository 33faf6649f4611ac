pub mod input;

pub use input::read_stdin_text;
