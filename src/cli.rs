//! CLI domain: parse, route, output, and presentation only.
//! Generation itself lives in `crate::generate`.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::{exit_code, map_error};
pub use parse::{Cli, Commands};
pub use presentation::{format_flow_list_json, format_flow_list_text};
pub use route::RunContext;
