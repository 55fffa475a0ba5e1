use std::{
    ffi::CStr,
    os::raw::{c_int, c_longlong},
};

use dxportlib_sys::consts;

use crate::{DxLib, convert::usize_to_c_int_saturating};

handle! {
    /// Read-only stream over a loose file or an archive member.
    pub struct FileHandle;
}

raw_enum! {
    pub enum SeekOrigin / InvalidRawSeekOrigin {
        Start = consts::SEEK_SET,
        Current = consts::SEEK_CUR,
        End = consts::SEEK_END,
    }
}

#[allow(clippy::must_use_candidate)]
impl DxLib {
    #[must_use]
    pub fn file_read_open(&self, filename: &CStr) -> FileHandle {
        FileHandle::from_raw(unsafe { (self.api.file.file_read_open)(filename.as_ptr()) })
    }

    #[must_use]
    pub fn file_read_size(&self, file: FileHandle) -> c_longlong {
        unsafe { (self.api.file.file_read_size)(file.raw()) }
    }

    pub fn file_read_close(&self, file: FileHandle) -> c_int {
        unsafe { (self.api.file.file_read_close)(file.raw()) }
    }

    #[must_use]
    pub fn file_read_tell(&self, file: FileHandle) -> c_longlong {
        unsafe { (self.api.file.file_read_tell)(file.raw()) }
    }

    pub fn file_read_seek(
        &self,
        file: FileHandle,
        position: c_longlong,
        origin: SeekOrigin,
    ) -> c_int {
        unsafe { (self.api.file.file_read_seek)(file.raw(), position, origin.raw()) }
    }

    /// Reads into `data`, returning the native byte count. At most `c_int::MAX` bytes are
    /// requested per call.
    pub fn file_read_read(&self, data: &mut [u8], file: FileHandle) -> c_int {
        let size = usize_to_c_int_saturating(data.len());
        unsafe { (self.api.file.file_read_read)(data.as_mut_ptr().cast(), size, file.raw()) }
    }

    #[must_use]
    pub fn file_read_eof(&self, file: FileHandle) -> c_int {
        unsafe { (self.api.file.file_read_eof)(file.raw()) }
    }
}
