use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// Suffix appended to an input's file name to name its dump.
pub const OUTPUT_SUFFIX: &str = "resources";

/// Resolution context shared by every work order of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolver {
    cwd: PathBuf,
    output_root: Option<PathBuf>,
}

impl Resolver {
    /// `cwd` should be absolute; `output_root` is resolved against it.
    pub fn new(cwd: impl Into<PathBuf>, output_root: Option<&Path>) -> Self {
        let cwd = cwd.into();
        let output_root = output_root.map(|root| absolutize(&cwd, root));
        Self { cwd, output_root }
    }

    pub fn output_root(&self) -> Option<&Path> {
        self.output_root.as_deref()
    }

    /// Absolute, lexically normalized location of `path`.
    pub fn resolve_input(&self, path: &Path) -> PathBuf {
        absolutize(&self.cwd, path)
    }

    /// Output location for an already resolved input; `None` if the input
    /// has no file name to derive one from.
    pub fn output_for(&self, input: &Path) -> Option<PathBuf> {
        let name = output_file_name(input)?;
        Some(match &self.output_root {
            Some(root) => root.join(name),
            None => input.with_file_name(name),
        })
    }
}

/// `<file name>.resources`
pub fn output_file_name(input: &Path) -> Option<OsString> {
    let mut name = input.file_name()?.to_os_string();
    name.push(".");
    name.push(OUTPUT_SUFFIX);
    Some(name)
}

/// Join `path` onto `base`, dropping `.` and folding `..` without touching
/// the filesystem. `..` never climbs above the root.
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in base.join(path).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
