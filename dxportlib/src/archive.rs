use std::{ffi::CStr, os::raw::c_int};

use dxportlib_sys::consts;

use crate::{DxLib, convert::bool_to_flag, defaults};

raw_enum! {
    /// Where files are looked up first once archives are enabled.
    pub enum ArchivePriority / InvalidRawArchivePriority {
        ArchiveFirst = consts::FALSE,
        FolderFirst = consts::TRUE,
    }
}

#[allow(clippy::must_use_candidate)]
impl DxLib {
    /// Lets file loading look inside `.dxa` archives.
    pub fn set_use_dx_archive_flag(&self, enabled: bool) -> c_int {
        unsafe { (self.api.archive.set_use_dx_archive_flag)(bool_to_flag(enabled)) }
    }

    pub fn set_dx_archive_key_string(&self, key: &CStr) -> c_int {
        unsafe { (self.api.archive.set_dx_archive_key_string)(key.as_ptr()) }
    }

    pub fn set_dx_archive_extension(&self, extension: &CStr) -> c_int {
        unsafe { (self.api.archive.set_dx_archive_extension)(extension.as_ptr()) }
    }

    pub fn set_dx_archive_priority(&self, priority: ArchivePriority) -> c_int {
        unsafe { (self.api.archive.set_dx_archive_priority)(priority.raw()) }
    }

    /// `async_load` defaults to `false`.
    pub fn dx_archive_pre_load(&self, dxa_filename: &CStr, async_load: Option<bool>) -> c_int {
        let async_load = bool_to_flag(async_load.unwrap_or(defaults::ARCHIVE_PRE_LOAD_ASYNC));
        unsafe { (self.api.archive.dx_archive_pre_load)(dxa_filename.as_ptr(), async_load) }
    }

    #[must_use]
    pub fn dx_archive_check_idle(&self, dxa_filename: &CStr) -> c_int {
        unsafe { (self.api.archive.dx_archive_check_idle)(dxa_filename.as_ptr()) }
    }

    pub fn dx_archive_release(&self, dxa_filename: &CStr) -> c_int {
        unsafe { (self.api.archive.dx_archive_release)(dxa_filename.as_ptr()) }
    }

    /// Whether `filename` is stored inside the archive.
    #[must_use]
    pub fn dx_archive_check_file(&self, dxa_filename: &CStr, filename: &CStr) -> c_int {
        unsafe {
            (self.api.archive.dx_archive_check_file)(dxa_filename.as_ptr(), filename.as_ptr())
        }
    }
}

#[cfg(test)]
mod tests {
    use cstr::cstr;
    use dxportlib_sys::{ArchiveFns, echo::Value};

    use super::*;
    use crate::testing::{assert_family_covered, echo_dx, ints, single_call};

    #[test]
    fn pre_load_async_default() {
        let dx = echo_dx();
        dx.dx_archive_pre_load(cstr!("data.dxa"), None);
        let implicit = single_call("DXArchivePreLoad");
        dx.dx_archive_pre_load(cstr!("data.dxa"), Some(false));
        assert_eq!(single_call("DXArchivePreLoad"), implicit);
        assert_eq!(
            implicit,
            [Value::Text(b"data.dxa".to_vec()), Value::Int(0)]
        );
    }

    #[test]
    fn priority_values() {
        let dx = echo_dx();
        dx.set_dx_archive_priority(ArchivePriority::FolderFirst);
        assert_eq!(single_call("SetDXArchivePriority"), ints(&[1]));
        assert_eq!(ArchivePriority::ArchiveFirst.raw(), 0);
        assert_eq!(
            ArchivePriority::from_raw(2),
            Err(InvalidRawArchivePriority(2))
        );
    }

    #[test]
    fn check_file_order() {
        let dx = echo_dx();
        let _ = dx.dx_archive_check_file(cstr!("data.dxa"), cstr!("img/title.png"));
        assert_eq!(
            single_call("DXArchiveCheckFile"),
            [
                Value::Text(b"data.dxa".to_vec()),
                Value::Text(b"img/title.png".to_vec()),
            ]
        );
        dx.set_dx_archive_key_string(cstr!(""));
        assert_eq!(
            single_call("SetDXArchiveKeyString"),
            [Value::Text(Vec::new())]
        );
    }

    #[test]
    fn release_and_idle_take_the_archive_name() {
        let dx = echo_dx();
        dx.dx_archive_release(cstr!("bgm.dxa"));
        assert_eq!(
            single_call("DXArchiveRelease"),
            [Value::Text(b"bgm.dxa".to_vec())]
        );
        let _ = dx.dx_archive_check_idle(cstr!("bgm.dxa"));
        assert_eq!(
            single_call("DXArchiveCheckIdle"),
            [Value::Text(b"bgm.dxa".to_vec())]
        );
        dx.set_dx_archive_extension(cstr!("pak"));
        assert_eq!(
            single_call("SetDXArchiveExtension"),
            [Value::Text(b"pak".to_vec())]
        );
        dx.set_use_dx_archive_flag(true);
        assert_eq!(single_call("SetUseDXArchiveFlag"), ints(&[1]));
    }

    #[test]
    fn every_operation_reaches_the_table() {
        let dx = echo_dx();
        dx.set_use_dx_archive_flag(true);
        dx.set_dx_archive_key_string(cstr!("key"));
        dx.set_dx_archive_extension(cstr!("dxa"));
        dx.set_dx_archive_priority(ArchivePriority::ArchiveFirst);
        dx.dx_archive_pre_load(cstr!("a.dxa"), Some(true));
        let _ = dx.dx_archive_check_idle(cstr!("a.dxa"));
        dx.dx_archive_release(cstr!("a.dxa"));
        let _ = dx.dx_archive_check_file(cstr!("a.dxa"), cstr!("b.png"));

        assert_family_covered(ArchiveFns::OPERATIONS);
    }
}
