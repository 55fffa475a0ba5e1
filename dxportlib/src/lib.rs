//! Typed access to DxPortLib.
//!
//! [`DxLib`] forwards every call to the native library untouched. The wrapper only narrows
//! parameter types: constants become enums or flag sets, handles become newtypes, text goes
//! through [`CStr`](std::ffi::CStr) and defaulted trailing parameters become `Option`s.

#![allow(clippy::too_many_arguments)]

#[macro_use]
mod macros;

mod archive;
mod convert;
pub mod defaults;
mod file;
mod font;
mod graph;
mod input;
mod loader;
mod sound;
mod system;
mod window;

use std::{marker::PhantomData, path::Path};

pub use archive::{ArchivePriority, InvalidRawArchivePriority};
pub use dxportlib_sys as sys;
pub use dxportlib_sys::LoadError;
pub use file::{FileHandle, InvalidRawSeekOrigin, SeekOrigin};
pub use font::{
    CharSet, FontBuilder, FontCharInfo, FontHandle, FontType, InvalidRawCharSet, InvalidRawFontType,
};
pub use graph::{BlendMode, Color, GraphHandle, InvalidRawBlendMode};
pub use input::{
    CheckInput, InputType, InvalidRawInputType, InvalidRawKeyCode, InvalidRawXInputButton,
    KeyCode, KeyStateTable, MouseInput, PadInput, XInputButton,
};
pub use loader::{LIBRARY_PATH_VAR, library_path};
pub use sound::{InvalidRawPlayType, PlayType, SoundHandle};
pub use window::{InvalidRawScreen, Screen};

use dxportlib_sys::{Api, Library};
use log::info;

/// Dispatcher over the DxPortLib entry points.
///
/// Every method is a direct, synchronous call into the native library. The native side keeps
/// global state (current draw screen, current font, loaded archives) and is not thread safe:
/// drive it from a single thread, usually the one that called [`DxLib::dxlib_init`]. The
/// dispatcher is neither `Send` nor `Sync` for that reason.
///
/// ```compile_fail
/// fn assert_send<T: Send>() {}
/// assert_send::<dxportlib::DxLib>();
/// ```
#[derive(Debug)]
pub struct DxLib {
    api: Api,
    library: Option<Library>,
    _marker: PhantomData<*const ()>,
}

impl DxLib {
    /// Opens the shared library and resolves every entry point.
    ///
    /// The path is `path` if given, then the `DXPORTLIB_PATH` environment variable, then the
    /// platform file name of `DxPortLib`.
    ///
    /// # Safety
    /// Opening a library runs its initialisation code; the file must be a trusted DxPortLib
    /// build exporting the declared signatures.
    pub unsafe fn open(path: Option<&Path>) -> Result<Self, LoadError> {
        let path = library_path(path);
        let (library, api) = unsafe { loader::open(&path)? };
        info!("using DxPortLib from {}", path.display());
        Ok(Self {
            api,
            library: Some(library),
            _marker: PhantomData,
        })
    }

    /// Builds the dispatcher over an already populated table.
    ///
    /// # Safety
    /// Every entry of `api` must be callable with the declared signature for as long as the
    /// returned value lives.
    #[must_use]
    pub unsafe fn from_api(api: Api) -> Self {
        Self {
            api,
            library: None,
            _marker: PhantomData,
        }
    }

    #[cfg(feature = "link")]
    #[must_use]
    pub fn linked() -> Self {
        Self {
            api: Api::linked(),
            library: None,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub fn api(&self) -> &Api {
        &self.api
    }

    /// Whether the entry points come from a library opened at runtime.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        self.library.is_some()
    }
}
