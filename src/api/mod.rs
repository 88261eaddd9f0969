//! High-level library API: run parsed work orders through a [`Dumper`],
//! collecting a [`BatchReport`]. The resource decoding itself lives behind
//! the `Dumper` trait; [`PlanWriter`] is the built-in implementation that
//! prints the resolved input/output plan.
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::core::args::Arguments;
use crate::core::work_order::WorkOrder;
use crate::error::{Error, Result};
use crate::types::PlanFormat;

/// Consumer of resolved work orders.
pub trait Dumper {
    fn dump(&mut self, order: &WorkOrder) -> Result<()>;
}

impl<F> Dumper for F
where
    F: FnMut(&WorkOrder) -> Result<()>,
{
    fn dump(&mut self, order: &WorkOrder) -> Result<()> {
        self(order)
    }
}

/// Batch processing report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Create the shared output directory, if one was given.
pub fn prepare_output_root(args: &Arguments) -> Result<()> {
    if let Some(root) = args.output_root() {
        std::fs::create_dir_all(root)?;
        debug!("Output root ready: {:?}", root);
    }
    Ok(())
}

/// Feed `orders` to `dumper` in order.
///
/// A repeat of an input that was already processed successfully is
/// skipped. A different input whose output path collides with one already
/// written is a `Processing` error, as are missing inputs and dumper
/// failures; if `continue_on_error` is false the first error is returned.
pub fn process_work_orders<D: Dumper + ?Sized>(
    orders: &[WorkOrder],
    dumper: &mut D,
    continue_on_error: bool,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();
    // output path -> input that produced it
    let mut produced: HashMap<&Path, &Path> = HashMap::new();

    for order in orders {
        let result = match produced.get(order.output_path()) {
            Some(&earlier) if earlier == order.input_path() => {
                debug!("Skipping repeated input {:?}", order.nominal_path());
                report.skipped += 1;
                continue;
            }
            Some(&earlier) => Err(Error::Processing(format!(
                "output {:?} for {:?} was already written for {:?}",
                order.output_path(),
                order.nominal_path(),
                earlier
            ))),
            None => order.check_input().and_then(|()| dumper.dump(order)),
        };

        match result {
            Ok(()) => {
                debug!("Processed {:?} -> {:?}", order.input_path(), order.output_path());
                produced.insert(order.output_path(), order.input_path());
                report.processed += 1;
            }
            Err(e) => {
                report.errors += 1;
                if !continue_on_error {
                    return Err(e);
                }
                warn!("{}", e);
            }
        }
    }

    info!(
        "Batch complete: processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(report)
}

/// Writes one line per work order describing where its dump goes.
pub struct PlanWriter<W: Write> {
    out: W,
    format: PlanFormat,
}

impl<W: Write> PlanWriter<W> {
    pub fn new(out: W, format: PlanFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Dumper for PlanWriter<W> {
    fn dump(&mut self, order: &WorkOrder) -> Result<()> {
        match self.format {
            PlanFormat::Text => writeln!(
                self.out,
                "{} -> {}",
                order.nominal_path(),
                order.output_path().display()
            )?,
            PlanFormat::Json => {
                serde_json::to_writer(&mut self.out, order)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn setup(files: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for f in files {
            fs::write(dir.path().join(f), b"rsrc").unwrap();
        }
        dir
    }

    fn parse_in(dir: &Path, argv: &[&str]) -> Arguments {
        Arguments::from_args_in(argv, dir).unwrap()
    }

    #[test]
    fn processes_every_order_in_sequence() {
        let dir = setup(&["a", "b"]);
        let args = parse_in(dir.path(), &["resourcedump", "b", "a"]);

        let mut visited = Vec::new();
        let mut record = |o: &WorkOrder| -> Result<()> {
            visited.push(o.nominal_path().to_string());
            Ok(())
        };
        let report = process_work_orders(args.work_orders(), &mut record, false).unwrap();

        assert_eq!(visited, ["b", "a"]);
        assert_eq!(
            report,
            BatchReport {
                processed: 2,
                skipped: 0,
                errors: 0
            }
        );
    }

    #[test]
    fn missing_input_stops_batch_by_default() {
        let dir = setup(&["a"]);
        let args = parse_in(dir.path(), &["resourcedump", "missing", "a"]);

        let mut calls = 0;
        let mut count = |_: &WorkOrder| -> Result<()> {
            calls += 1;
            Ok(())
        };
        let err = process_work_orders(args.work_orders(), &mut count, false).unwrap_err();
        assert!(matches!(err, Error::PathResolution { ref nominal, .. } if nominal == "missing"));
        assert_eq!(calls, 0);
    }

    #[test]
    fn continue_on_error_counts_failures() {
        let dir = setup(&["a", "c"]);
        let args = parse_in(dir.path(), &["resourcedump", "a", "missing", "c"]);

        let mut fail_c = |o: &WorkOrder| -> Result<()> {
            if o.nominal_path() == "c" {
                Err(Error::Processing("bad resource map".to_string()))
            } else {
                Ok(())
            }
        };
        let report = process_work_orders(args.work_orders(), &mut fail_c, true).unwrap();
        assert_eq!(report.processed, 1);
        assert_eq!(report.errors, 2);
    }

    #[test]
    fn repeated_input_is_processed_once() {
        let dir = setup(&["x"]);
        let args = parse_in(dir.path(), &["resourcedump", "-o", "out", "x", "./x"]);
        assert_eq!(args.work_orders().len(), 2);

        let mut ok = |_: &WorkOrder| -> Result<()> { Ok(()) };
        let report = process_work_orders(args.work_orders(), &mut ok, false).unwrap();
        assert_eq!(
            report,
            BatchReport {
                processed: 1,
                skipped: 1,
                errors: 0
            }
        );
    }

    #[test]
    fn colliding_outputs_from_distinct_inputs_fail() {
        let dir = setup(&[]);
        for sub in ["a", "b"] {
            fs::create_dir(dir.path().join(sub)).unwrap();
            fs::write(dir.path().join(sub).join("x"), b"rsrc").unwrap();
        }
        let args = parse_in(dir.path(), &["resourcedump", "-o", "out", "a/x", "b/x"]);

        let mut dumped = Vec::new();
        let mut record = |o: &WorkOrder| -> Result<()> {
            dumped.push(o.input_path().to_path_buf());
            Ok(())
        };
        let err = process_work_orders(args.work_orders(), &mut record, false).unwrap_err();
        assert!(matches!(err, Error::Processing(_)));
        assert_eq!(dumped, [dir.path().join("a/x")]);

        let mut ok = |_: &WorkOrder| -> Result<()> { Ok(()) };
        let report = process_work_orders(args.work_orders(), &mut ok, true).unwrap();
        assert_eq!(report.processed, 1);
        assert_eq!(report.skipped, 0);
        assert_eq!(report.errors, 1);
    }

    #[test]
    fn failed_order_does_not_claim_its_output() {
        let dir = setup(&[]);
        fs::create_dir(dir.path().join("b")).unwrap();
        fs::write(dir.path().join("b/x"), b"rsrc").unwrap();
        // a/x is missing, so b/x must still get out/x.resources
        let args = parse_in(dir.path(), &["resourcedump", "-o", "out", "a/x", "b/x", "a/x"]);

        let mut dumped = Vec::new();
        let mut record = |o: &WorkOrder| -> Result<()> {
            dumped.push(o.nominal_path().to_string());
            Ok(())
        };
        let report = process_work_orders(args.work_orders(), &mut record, true).unwrap();
        assert_eq!(dumped, ["b/x"]);
        assert_eq!(report.processed, 1);
        assert_eq!(report.errors, 2);
    }

    #[test]
    fn output_root_is_created() {
        let dir = setup(&[]);
        let args = parse_in(dir.path(), &["resourcedump", "-o", "nested/out"]);
        prepare_output_root(&args).unwrap();
        assert!(dir.path().join("nested/out").is_dir());

        let without = parse_in(dir.path(), &["resourcedump"]);
        prepare_output_root(&without).unwrap();
    }

    #[test]
    fn plan_writer_text() {
        let dir = setup(&["Finder"]);
        let args = parse_in(dir.path(), &["resourcedump", "Finder"]);
        let mut writer = PlanWriter::new(Vec::new(), PlanFormat::Text);
        process_work_orders(args.work_orders(), &mut writer, false).unwrap();

        let text = String::from_utf8(writer.into_inner()).unwrap();
        let expected = format!(
            "Finder -> {}\n",
            dir.path().join("Finder.resources").display()
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn plan_writer_json_lines() {
        let dir = setup(&["a", "b"]);
        let args = parse_in(dir.path(), &["resourcedump", "-f", "json", "a", "b"]);
        let mut writer = PlanWriter::new(Vec::new(), args.params().format);
        process_work_orders(args.work_orders(), &mut writer, false).unwrap();

        let text = String::from_utf8(writer.into_inner()).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["nominal_path"], "a");
        assert_eq!(lines[1]["nominal_path"], "b");
    }
}
