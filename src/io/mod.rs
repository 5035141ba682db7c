pub mod color_scheme;
pub mod config_io;
pub mod log;
