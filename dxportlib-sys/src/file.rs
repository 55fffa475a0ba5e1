//! Read access to files, both loose and packed into archives.

use std::os::raw::{c_char, c_int, c_longlong, c_void};

binding_table! {
    pub struct FileFns {
        fn file_read_open as "FileRead_open" = "DxLib_FileRead_open"(filename: *const c_char) -> c_int;
        fn file_read_size as "FileRead_size" = "DxLib_FileRead_size"(file_handle: c_int) -> c_longlong;
        fn file_read_close as "FileRead_close" = "DxLib_FileRead_close"(file_handle: c_int) -> c_int;
        fn file_read_tell as "FileRead_tell" = "DxLib_FileRead_tell"(file_handle: c_int) -> c_longlong;
        /// `origin` is one of `SEEK_SET`, `SEEK_CUR` or `SEEK_END`.
        fn file_read_seek as "FileRead_seek" = "DxLib_FileRead_seek"(
            file_handle: c_int,
            position: c_longlong,
            origin: c_int,
        ) -> c_int;
        fn file_read_read as "FileRead_read" = "DxLib_FileRead_read"(
            data: *mut c_void,
            size: c_int,
            file_handle: c_int,
        ) -> c_int;
        fn file_read_eof as "FileRead_eof" = "DxLib_FileRead_eof"(file_handle: c_int) -> c_int;
    }
}
