use std::io;

use tracing::info;

use resourcedump::{Arguments, PlanWriter, prepare_output_root, process_work_orders};

use super::errors::AppError;

pub fn run(args: &Arguments) -> Result<(), AppError> {
    if args.show_help() {
        print!("{}", Arguments::usage());
        return Ok(());
    }

    let orders = args.work_orders();
    if orders.is_empty() {
        info!("No input files given, nothing to do");
        return Ok(());
    }

    prepare_output_root(args)?;
    if let Some(root) = args.output_root() {
        info!("Output directory: {:?}", root);
    }

    let params = args.params();
    let mut plan = PlanWriter::new(io::stdout().lock(), params.format);
    let report = process_work_orders(orders, &mut plan, params.keep_going)?;

    info!("Processed: {}", report.processed);
    info!("Skipped: {}", report.skipped);
    info!("Errors: {}", report.errors);

    if report.errors > 0 {
        return Err(AppError::FailedOrders {
            count: report.errors,
            total: orders.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn help_and_empty_runs_succeed() {
        let dir = tempfile::tempdir().unwrap();
        let help = Arguments::from_args_in(["resourcedump", "-h"], dir.path()).unwrap();
        run(&help).unwrap();
        let empty = Arguments::from_args_in(["resourcedump"], dir.path()).unwrap();
        run(&empty).unwrap();
    }

    #[test]
    fn missing_input_under_keep_going_reports_failed_orders() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("present"), b"rsrc").unwrap();
        let args = Arguments::from_args_in(
            ["resourcedump", "-k", "-o", "out", "present", "missing"],
            dir.path(),
        )
        .unwrap();

        let err = run(&args).unwrap_err();
        assert!(matches!(err, AppError::FailedOrders { count: 1, total: 2 }));
        assert_eq!(err.exit_code(), 1);
        assert!(dir.path().join("out").is_dir());
    }

    #[test]
    fn first_failure_stops_without_keep_going() {
        let dir = tempfile::tempdir().unwrap();
        let args = Arguments::from_args_in(["resourcedump", "missing"], dir.path()).unwrap();
        let err = run(&args).unwrap_err();
        assert!(matches!(
            err,
            AppError::Dump(resourcedump::Error::PathResolution { .. })
        ));
        assert_eq!(err.exit_code(), 1);
    }
}
