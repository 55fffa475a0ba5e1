use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

use dxportlib_sys::{Api, Library, LoadError};
use log::{debug, trace};

/// Environment variable naming the shared library to open.
pub const LIBRARY_PATH_VAR: &str = "DXPORTLIB_PATH";

/// Picks the library to open: an explicit path, then `DXPORTLIB_PATH`, then the platform file
/// name, left to the dynamic loader's search path.
#[must_use]
pub fn library_path(explicit: Option<&Path>) -> PathBuf {
    resolve_library_path(explicit, env::var_os(LIBRARY_PATH_VAR))
}

fn resolve_library_path(explicit: Option<&Path>, from_env: Option<OsString>) -> PathBuf {
    if let Some(path) = explicit {
        trace!("using explicit library path {}", path.display());
        return path.to_path_buf();
    }

    match from_env.filter(|path| !path.is_empty()) {
        Some(path) => {
            trace!("using {LIBRARY_PATH_VAR}={}", path.to_string_lossy());
            PathBuf::from(path)
        }
        None => {
            let path = PathBuf::from(libloading::library_filename("DxPortLib"));
            trace!("falling back to {}", path.display());
            path
        }
    }
}

/// Opens the library and resolves the whole binding table.
///
/// # Safety
/// See [`dxportlib_sys::open`]: the file must be a trusted DxPortLib build.
pub(crate) unsafe fn open(path: &Path) -> Result<(Library, Api), LoadError> {
    let library = unsafe { dxportlib_sys::open(path)? };
    let api = unsafe { Api::load(&library)? };
    debug!("loaded {}", path.display());
    Ok((library, api))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let path = resolve_library_path(
            Some(Path::new("/opt/dx/libDxPortLib.so")),
            Some("/usr/lib/libDxPortLib.so".into()),
        );
        assert_eq!(path, Path::new("/opt/dx/libDxPortLib.so"));
    }

    #[test]
    fn environment_before_platform_name() {
        let path = resolve_library_path(None, Some("/usr/lib/libDxPortLib.so".into()));
        assert_eq!(path, Path::new("/usr/lib/libDxPortLib.so"));
    }

    #[test]
    fn platform_name_as_last_resort() {
        let expected = PathBuf::from(libloading::library_filename("DxPortLib"));
        assert_eq!(resolve_library_path(None, None), expected);
        assert_eq!(resolve_library_path(None, Some(OsString::new())), expected);
        assert!(expected.to_string_lossy().contains("DxPortLib"));
    }
}
