pub mod cli;
pub mod conf;
pub mod error;
pub mod logging;
pub mod logs;
pub mod sink;
pub mod source;
