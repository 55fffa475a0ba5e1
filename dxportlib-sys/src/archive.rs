use std::os::raw::{c_char, c_int};

use crate::consts::FALSE;

binding_table! {
    /// Entry points of the `archive` family.
    pub struct ArchiveFns {
        fn set_use_dx_archive_flag as "SetUseDXArchiveFlag" = "DxLib_SetUseDXArchiveFlag"(flag: c_int) -> c_int;
        fn set_dx_archive_key_string as "SetDXArchiveKeyString" =
            "DxLib_SetDXArchiveKeyString"(key_string: *const c_char) -> c_int;
        fn set_dx_archive_extension as "SetDXArchiveExtension" =
            "DxLib_SetDXArchiveExtension"(extension: *const c_char) -> c_int;
        /// `FALSE` looks in archives first, `TRUE` in loose folders first.
        fn set_dx_archive_priority as "SetDXArchivePriority" =
            "DxLib_SetDXArchivePriority"(priority_flag: c_int) -> c_int;
        fn dx_archive_pre_load as "DXArchivePreLoad" = "DxLib_DXArchivePreLoad"(
            dxa_filename: *const c_char,
            async_flag: c_int = FALSE,
        ) -> c_int;
        fn dx_archive_check_idle as "DXArchiveCheckIdle" =
            "DxLib_DXArchiveCheckIdle"(dxa_filename: *const c_char) -> c_int;
        fn dx_archive_release as "DXArchiveRelease" =
            "DxLib_DXArchiveRelease"(dxa_filename: *const c_char) -> c_int;
        fn dx_archive_check_file as "DXArchiveCheckFile" = "DxLib_DXArchiveCheckFile"(
            dxa_filename: *const c_char,
            filename: *const c_char,
        ) -> c_int;
    }
}
