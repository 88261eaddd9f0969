#![doc = r#"
resourcedump — argument model for a resource-dump command-line tool.

This crate turns a command line such as `resourcedump -o out System Finder.rsrc`
into an ordered list of work orders, each pairing an input file with the
location its dump should be written to. The resource decoding itself plugs in
behind the [`api::Dumper`] trait.

Quick start
-----------
```rust,no_run
use resourcedump::{Arguments, PlanWriter, process_work_orders, prepare_output_root};

fn main() -> resourcedump::Result<()> {
    let args = Arguments::from_args(std::env::args_os())?;
    if args.show_help() {
        print!("{}", Arguments::usage());
        return Ok(());
    }

    prepare_output_root(&args)?;
    let mut plan = PlanWriter::new(std::io::stdout(), args.params().format);
    let report = process_work_orders(args.work_orders(), &mut plan, args.params().keep_going)?;
    println!("processed={} skipped={} errors={}", report.processed, report.skipped, report.errors);
    Ok(())
}
```

Output naming
-------------
Each input `NAME` is dumped to `NAME.resources`: next to the input by default,
or directly inside the directory given with `-o`.

Error handling
--------------
All fallible functions return `resourcedump::Result<T>`. Command-line problems
surface as [`Error::Usage`]; inputs that cannot be resolved surface as
[`Error::PathResolution`].

```rust
use std::path::Path;
use resourcedump::{Arguments, Error};

match Arguments::from_args_in(["resourcedump", "--bogus"], Path::new("/")) {
    Err(Error::Usage(e)) => eprintln!("{e}"),
    Err(other) => eprintln!("{other}"),
    Ok(_) => unreachable!(),
}
```
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod types;

pub use crate::core::args::{Arguments, RawArgs};
pub use crate::core::params::DumpParams;
pub use crate::core::paths::{OUTPUT_SUFFIX, Resolver};
pub use crate::core::work_order::WorkOrder;
pub use error::{Error, Result};
pub use types::PlanFormat;

pub use api::{BatchReport, Dumper, PlanWriter, prepare_output_root, process_work_orders};
