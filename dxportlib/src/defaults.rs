//! Values applied when an optional trailing parameter is left as `None`.

use std::os::raw::c_int;

use dxportlib_sys::consts;

pub const FPS: c_int = 60;
pub const LINE_THICKNESS: c_int = 1;
pub const TURN: bool = false;
/// Edge color of string drawing calls.
pub const EDGE_COLOR: c_int = 0;
/// Lets the native side pick its current font type.
pub const FONT_TYPE: c_int = -1;
pub const CHAR_SET: c_int = -1;
pub const EDGE_SIZE: c_int = -1;
pub const ITALIC: bool = false;
pub const START_POSITION: bool = true;
pub const CHECK_INPUT: c_int = consts::DX_CHECKINPUT_ALL;
/// Extra keys of a joypad mapping.
pub const JOYPAD_KEY: c_int = 0;
pub const ARCHIVE_PRE_LOAD_ASYNC: bool = false;
