use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::CalcError;

const OUTPUT_PREFIX: &str = "out_";

/// Resolved input and output paths of one calculator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Config {
    /// `args` is the full argument list, program name first.
    pub fn from_args<I>(args: I) -> Result<Config, CalcError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let program = args.next().unwrap_or_else(|| "radix_calc".to_string());
        let rest: Vec<String> = args.collect();
        match rest.as_slice() {
            [input] => {
                let input = PathBuf::from(input);
                let output = default_output(&input)?;
                Ok(Config { input, output })
            }
            [input, output] => Ok(Config { input: input.into(), output: output.into() }),
            _ => Err(CalcError::Usage { program }),
        }
    }
}

/// `dir/name` becomes `dir/out_name`.
fn default_output(input: &Path) -> Result<PathBuf, CalcError> {
    let name = input
        .file_name()
        .ok_or_else(|| CalcError::NoFileName { path: input.to_path_buf() })?;
    let mut prefixed = OsString::from(OUTPUT_PREFIX);
    prefixed.push(name);
    Ok(input.with_file_name(prefixed))
}
