pub mod conf;
pub mod parse;

pub use parse::{ParseArgs, run_parse};
