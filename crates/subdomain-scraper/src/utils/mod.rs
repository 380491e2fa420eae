pub mod log;

use crate::{Error, Result};
use std::env;
use std::ffi::OsString;
use std::{fs, path::Path, path::PathBuf};

pub fn ensure_dir(dir: &Path) -> Result<bool> {
    if dir.is_dir() {
        Ok(false)
    } else {
        fs::create_dir_all(dir)?;
        Ok(true)
    }
}

/// Home directory of the invoking user, from `HOME` then `USERPROFILE`.
pub fn home_dir() -> Result<PathBuf> {
    home_dir_from(env::var_os("HOME"), env::var_os("USERPROFILE"))
}

fn home_dir_from(home: Option<OsString>, user_profile: Option<OsString>) -> Result<PathBuf> {
    home.into_iter()
        .chain(user_profile)
        .find(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .ok_or(Error::HomeDirNotFound)
}
