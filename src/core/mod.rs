//! Argument model: path resolution, work orders, and the command-line
//! parser that produces them. Consumed by the `api` module and the CLI.
pub mod args;
pub mod params;
pub mod paths;
pub mod work_order;
