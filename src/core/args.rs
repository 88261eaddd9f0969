//! Command-line model: `RawArgs` is what clap sees, `Arguments` is the
//! resolved result (help flag, work orders, output root) handed to the
//! processing layer.
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::{ArgAction, CommandFactory, Parser};
use tracing::debug;

use crate::core::params::DumpParams;
use crate::core::paths::Resolver;
use crate::core::work_order::WorkOrder;
use crate::error::Result;
use crate::types::PlanFormat;

#[derive(Debug, Parser)]
#[command(
    name = "resourcedump",
    version,
    about = "Dump the resources of one or more files",
    disable_help_flag = true,
    args_override_self = true
)]
pub struct RawArgs {
    /// Print help and exit
    #[arg(short = 'h', long = "help", action = ArgAction::SetTrue)]
    pub help: bool,

    /// Write every dump into DIR instead of next to its input
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Plan output format (text or json)
    #[arg(short = 'f', long, value_enum, default_value_t = PlanFormat::Text)]
    pub format: PlanFormat,

    /// Keep processing remaining files after a failure
    #[arg(short = 'k', long, default_value_t = false)]
    pub keep_going: bool,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Input files
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,
}

/// Parsed and resolved command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arguments {
    show_help: bool,
    work_orders: Vec<WorkOrder>,
    output_root: Option<PathBuf>,
    params: DumpParams,
    log: bool,
}

impl Arguments {
    /// Parse `argv` (program name first), resolving paths against the
    /// process working directory.
    pub fn from_args<I, T>(argv: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cwd = std::env::current_dir()?;
        Self::from_args_in(argv, &cwd)
    }

    /// Like [`Arguments::from_args`] with an explicit working directory.
    pub fn from_args_in<I, T>(argv: I, cwd: &Path) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let raw = RawArgs::try_parse_from(argv)?;
        Self::from_raw(raw, cwd)
    }

    pub fn from_raw(raw: RawArgs, cwd: &Path) -> Result<Self> {
        let params = DumpParams {
            format: raw.format,
            keep_going: raw.keep_going,
        };

        if raw.help {
            return Ok(Self {
                show_help: true,
                work_orders: Vec::new(),
                output_root: None,
                params,
                log: raw.log,
            });
        }

        let resolver = Resolver::new(cwd, raw.output_dir.as_deref());
        let work_orders = raw
            .inputs
            .iter()
            .map(|nominal| WorkOrder::resolve(nominal, &resolver))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Parsed {} work order(s), output root {:?}",
            work_orders.len(),
            resolver.output_root()
        );

        Ok(Self {
            show_help: false,
            work_orders,
            output_root: resolver.output_root().map(Path::to_path_buf),
            params,
            log: raw.log,
        })
    }

    /// Rendered help text.
    pub fn usage() -> String {
        RawArgs::command().render_help().to_string()
    }

    /// When set, `work_orders` is empty and `output_root` is `None`.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// One per positional argument, in command-line order.
    pub fn work_orders(&self) -> &[WorkOrder] {
        &self.work_orders
    }

    pub fn output_root(&self) -> Option<&Path> {
        self.output_root.as_deref()
    }

    pub fn params(&self) -> &DumpParams {
        &self.params
    }

    pub fn log_enabled(&self) -> bool {
        self.log
    }
}
