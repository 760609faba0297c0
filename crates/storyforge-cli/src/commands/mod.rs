//! Command implementations.

pub mod chapters;
pub mod extract;
pub mod proposal;

pub use self::chapters::execute_chapters;
pub use self::extract::execute_extract;
pub use self::proposal::execute_proposal;

use crate::error::Result;
use std::fs;
use std::io::{self, Read};

/// Read command input from a file, or from stdin when `file` is absent or "-".
pub fn read_input(file: Option<&str>) -> Result<String> {
    match file {
        None | Some("-") => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        Some(path) => Ok(fs::read_to_string(path)?),
    }
}
