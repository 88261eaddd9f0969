use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::core::paths::Resolver;
use crate::error::{Error, Result};

/// One input file and where its dump goes.
///
/// Built once by the argument parser and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WorkOrder {
    nominal_path: String,
    input_path: PathBuf,
    output_path: PathBuf,
}

impl WorkOrder {
    /// Resolve `nominal` (as typed on the command line) into absolute input
    /// and output locations. Only path strings are computed; whether the
    /// input exists is checked separately by [`WorkOrder::check_input`].
    ///
    /// Paths that are not valid UTF-8 resolve exactly; only the echoed
    /// `nominal_path` is converted lossily.
    pub fn resolve(nominal: &Path, resolver: &Resolver) -> Result<Self> {
        let nominal_path = nominal.to_string_lossy().into_owned();
        if nominal.as_os_str().is_empty() {
            return Err(Error::path_resolution(nominal_path, "empty path"));
        }

        let input_path = resolver.resolve_input(nominal);
        let output_path = match resolver.output_for(&input_path) {
            Some(path) => path,
            None => {
                return Err(Error::path_resolution(
                    nominal_path,
                    "path has no file name to name the output after",
                ));
            }
        };

        debug!("Resolved {:?}: {:?} -> {:?}", nominal_path, input_path, output_path);

        Ok(Self {
            nominal_path,
            input_path,
            output_path,
        })
    }

    /// The path as given on the command line, converted lossily to UTF-8.
    pub fn nominal_path(&self) -> &str {
        &self.nominal_path
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    /// Output location, taking any `-o` option into account.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Fail with `PathResolution` unless the input exists and is a file.
    pub fn check_input(&self) -> Result<()> {
        match fs::metadata(&self.input_path) {
            Ok(meta) if meta.is_dir() => {
                Err(Error::path_resolution(&self.nominal_path, "is a directory"))
            }
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(Error::path_resolution(&self.nominal_path, "no such file"))
            }
            Err(e) => Err(Error::path_resolution(&self.nominal_path, e.to_string())),
        }
    }
}
