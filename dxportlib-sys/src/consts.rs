//! Raw constants of the native ABI.
//!
//! Values are fixed by the native headers. Aliases share a value on purpose and are never
//! renumbered.

use std::os::raw::c_int;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Boolean,
    Screen,
    BlendMode,
    DrawMode,
    FontType,
    CharSet,
    InputType,
    PadInput,
    XInputButton,
    KeyInput,
    MouseInput,
    CheckInput,
    PlayType,
    SeekOrigin,
}

impl Family {
    pub const ALL: [Self; 14] = [
        Self::Boolean,
        Self::Screen,
        Self::BlendMode,
        Self::DrawMode,
        Self::FontType,
        Self::CharSet,
        Self::InputType,
        Self::PadInput,
        Self::XInputButton,
        Self::KeyInput,
        Self::MouseInput,
        Self::CheckInput,
        Self::PlayType,
        Self::SeekOrigin,
    ];
}

/// A named native constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constant {
    pub family: Family,
    pub name: &'static str,
    pub value: c_int,
}

macro_rules! constants {
    ($($family:ident { $($name:ident = $value:expr),* $(,)? })*) => {
        $($(pub const $name: c_int = $value;)*)*

        pub static CONSTANTS: &[Constant] = &[
            $($(
                Constant {
                    family: Family::$family,
                    name: stringify!($name),
                    value: $name,
                },
            )*)*
        ];
    };
}

constants! {
    Boolean {
        TRUE = 1,
        FALSE = 0,
        DXTRUE = 1,
        DXFALSE = 0,
    }

    Screen {
        DX_SCREEN_FRONT = -4,
        DX_SCREEN_BACK = -2,
        DX_SCREEN_WORK = -3,
        DX_SCREEN_TEMPFRONT = -5,
        DX_NONE_GRAPH = -5,
    }

    BlendMode {
        DX_BLENDMODE_NOBLEND = 0,
        DX_BLENDMODE_ALPHA = 1,
        DX_BLENDMODE_ADD = 2,
        DX_BLENDMODE_SUB = 3,
        DX_BLENDMODE_MUL = 4,
        DX_BLENDMODE_SUB2 = 5,
        DX_BLENDMODE_DESTCOLOR = 8,
        DX_BLENDMODE_INVDESTCOLOR = 9,
        DX_BLENDMODE_INVSRC = 10,
        DX_BLENDMODE_MULA = 11,
        DX_BLENDMODE_ALPHA_X4 = 12,
        DX_BLENDMODE_ADD_X4 = 13,
        DX_BLENDMODE_SRCCOLOR = 14,
        DX_BLENDMODE_HALF_ADD = 15,
        DX_BLENDMODE_SUB1 = 16,
        DX_BLENDMODE_PMA_ALPHA = 17,
        DX_BLENDMODE_PMA_ADD = 18,
        DX_BLENDMODE_PMA_SUB = 19,
        DX_BLENDMODE_PMA_INVSRC = 20,
        DX_BLENDMODE_PMA_ALPHA_X4 = 21,
        DX_BLENDMODE_PMA_ADD_X4 = 22,
    }

    DrawMode {
        DX_DRAWMODE_NEAREST = 0,
        DX_DRAWMODE_BILINEAR = 1,
    }

    FontType {
        DX_FONTTYPE_NORMAL = 0x00,
        DX_FONTTYPE_EDGE = 0x01,
        DX_FONTTYPE_ANTIALIASING = 0x02,
        DX_FONTTYPE_ANTIALIASING_4X4 = 0x12,
        DX_FONTTYPE_ANTIALIASING_8X8 = 0x22,
        DX_FONTTYPE_ANTIALIASING_EDGE = 0x03,
        DX_FONTTYPE_ANTIALIASING_EDGE_4X4 = 0x13,
        DX_FONTTYPE_ANTIALIASING_EDGE_8X8 = 0x23,
    }

    CharSet {
        DX_CHARSET_DEFAULT = 0,
        DX_CHARSET_SHFTJIS = 1,
        DX_CHARSET_EXT_UTF8 = 0xff,
    }

    InputType {
        DX_INPUT_PAD1 = 0x0001,
        DX_INPUT_PAD2 = 0x0002,
        DX_INPUT_PAD3 = 0x0003,
        DX_INPUT_PAD4 = 0x0004,
        DX_INPUT_PAD5 = 0x0005,
        DX_INPUT_PAD6 = 0x0006,
        DX_INPUT_PAD7 = 0x0007,
        DX_INPUT_PAD8 = 0x0008,
        DX_INPUT_PAD9 = 0x0009,
        DX_INPUT_PAD10 = 0x000a,
        DX_INPUT_PAD11 = 0x000b,
        DX_INPUT_PAD12 = 0x000c,
        DX_INPUT_PAD13 = 0x000d,
        DX_INPUT_PAD14 = 0x000e,
        DX_INPUT_PAD15 = 0x000f,
        DX_INPUT_PAD16 = 0x0010,
        DX_INPUT_KEY = 0x1000,
        DX_INPUT_KEY_PAD1 = 0x1001,
    }

    PadInput {
        PAD_INPUT_DOWN = 0x0000_0001,
        PAD_INPUT_LEFT = 0x0000_0002,
        PAD_INPUT_RIGHT = 0x0000_0004,
        PAD_INPUT_UP = 0x0000_0008,
        PAD_INPUT_1 = 0x0000_0010,
        PAD_INPUT_2 = 0x0000_0020,
        PAD_INPUT_3 = 0x0000_0040,
        PAD_INPUT_4 = 0x0000_0080,
        PAD_INPUT_5 = 0x0000_0100,
        PAD_INPUT_6 = 0x0000_0200,
        PAD_INPUT_7 = 0x0000_0400,
        PAD_INPUT_8 = 0x0000_0800,
        PAD_INPUT_9 = 0x0000_1000,
        PAD_INPUT_10 = 0x0000_2000,
        PAD_INPUT_11 = 0x0000_4000,
        PAD_INPUT_12 = 0x0000_8000,
        PAD_INPUT_13 = 0x0001_0000,
        PAD_INPUT_14 = 0x0002_0000,
        PAD_INPUT_15 = 0x0004_0000,
        PAD_INPUT_16 = 0x0008_0000,
        PAD_INPUT_17 = 0x0010_0000,
        PAD_INPUT_18 = 0x0020_0000,
        PAD_INPUT_19 = 0x0040_0000,
        PAD_INPUT_20 = 0x0080_0000,
        PAD_INPUT_21 = 0x0100_0000,
        PAD_INPUT_22 = 0x0200_0000,
        PAD_INPUT_23 = 0x0400_0000,
        PAD_INPUT_24 = 0x0800_0000,
        PAD_INPUT_25 = 0x1000_0000,
        PAD_INPUT_26 = 0x2000_0000,
        PAD_INPUT_27 = 0x4000_0000,
        PAD_INPUT_28 = c_int::MIN,
        PAD_INPUT_A = PAD_INPUT_1,
        PAD_INPUT_B = PAD_INPUT_2,
        PAD_INPUT_C = PAD_INPUT_3,
        PAD_INPUT_X = PAD_INPUT_4,
        PAD_INPUT_Y = PAD_INPUT_5,
        PAD_INPUT_Z = PAD_INPUT_6,
        PAD_INPUT_L = PAD_INPUT_7,
        PAD_INPUT_R = PAD_INPUT_8,
        PAD_INPUT_START = PAD_INPUT_9,
        PAD_INPUT_M = PAD_INPUT_10,
        PAD_INPUT_D = PAD_INPUT_11,
        PAD_INPUT_F = PAD_INPUT_12,
        PAD_INPUT_G = PAD_INPUT_13,
        PAD_INPUT_H = PAD_INPUT_14,
        PAD_INPUT_I = PAD_INPUT_15,
        PAD_INPUT_J = PAD_INPUT_16,
        PAD_INPUT_K = PAD_INPUT_17,
        PAD_INPUT_LL = PAD_INPUT_18,
        PAD_INPUT_N = PAD_INPUT_19,
        PAD_INPUT_O = PAD_INPUT_20,
        PAD_INPUT_P = PAD_INPUT_21,
        PAD_INPUT_RR = PAD_INPUT_22,
        PAD_INPUT_S = PAD_INPUT_23,
        PAD_INPUT_T = PAD_INPUT_24,
        PAD_INPUT_U = PAD_INPUT_25,
        PAD_INPUT_V = PAD_INPUT_26,
        PAD_INPUT_W = PAD_INPUT_27,
        PAD_INPUT_XX = PAD_INPUT_28,
    }

    XInputButton {
        XINPUT_BUTTON_DPAD_UP = 0,
        XINPUT_BUTTON_DPAD_DOWN = 1,
        XINPUT_BUTTON_DPAD_LEFT = 2,
        XINPUT_BUTTON_DPAD_RIGHT = 3,
        XINPUT_BUTTON_START = 4,
        XINPUT_BUTTON_BACK = 5,
        XINPUT_BUTTON_LEFT_THUMB = 6,
        XINPUT_BUTTON_RIGHT_THUMB = 7,
        XINPUT_BUTTON_LEFT_SHOULDER = 8,
        XINPUT_BUTTON_RIGHT_SHOULDER = 9,
        XINPUT_BUTTON_A = 10,
        XINPUT_BUTTON_B = 11,
        XINPUT_BUTTON_X = 12,
        XINPUT_BUTTON_Y = 13,
    }

    KeyInput {
        KEY_INPUT_ESCAPE = 0x01,
        KEY_INPUT_1 = 0x02,
        KEY_INPUT_2 = 0x03,
        KEY_INPUT_3 = 0x04,
        KEY_INPUT_4 = 0x05,
        KEY_INPUT_5 = 0x06,
        KEY_INPUT_6 = 0x07,
        KEY_INPUT_7 = 0x08,
        KEY_INPUT_8 = 0x09,
        KEY_INPUT_9 = 0x0a,
        KEY_INPUT_0 = 0x0b,
        KEY_INPUT_MINUS = 0x0c,
        KEY_INPUT_EQUALS = 0x0d,
        KEY_INPUT_BACK = 0x0e,
        KEY_INPUT_TAB = 0x0f,
        KEY_INPUT_Q = 0x10,
        KEY_INPUT_W = 0x11,
        KEY_INPUT_E = 0x12,
        KEY_INPUT_R = 0x13,
        KEY_INPUT_T = 0x14,
        KEY_INPUT_Y = 0x15,
        KEY_INPUT_U = 0x16,
        KEY_INPUT_I = 0x17,
        KEY_INPUT_O = 0x18,
        KEY_INPUT_P = 0x19,
        KEY_INPUT_LBRACKET = 0x1a,
        KEY_INPUT_RBRACKET = 0x1b,
        KEY_INPUT_RETURN = 0x1c,
        KEY_INPUT_LCONTROL = 0x1d,
        KEY_INPUT_A = 0x1e,
        KEY_INPUT_S = 0x1f,
        KEY_INPUT_D = 0x20,
        KEY_INPUT_F = 0x21,
        KEY_INPUT_G = 0x22,
        KEY_INPUT_H = 0x23,
        KEY_INPUT_J = 0x24,
        KEY_INPUT_K = 0x25,
        KEY_INPUT_L = 0x26,
        KEY_INPUT_SEMICOLON = 0x27,
        KEY_INPUT_LSHIFT = 0x2a,
        KEY_INPUT_BACKSLASH = 0x2b,
        KEY_INPUT_Z = 0x2c,
        KEY_INPUT_X = 0x2d,
        KEY_INPUT_C = 0x2e,
        KEY_INPUT_V = 0x2f,
        KEY_INPUT_B = 0x30,
        KEY_INPUT_N = 0x31,
        KEY_INPUT_M = 0x32,
        KEY_INPUT_COMMA = 0x33,
        KEY_INPUT_PERIOD = 0x34,
        KEY_INPUT_SLASH = 0x35,
        KEY_INPUT_RSHIFT = 0x36,
        KEY_INPUT_MULTIPLY = 0x37,
        KEY_INPUT_LALT = 0x38,
        KEY_INPUT_SPACE = 0x39,
        KEY_INPUT_CAPSLOCK = 0x3a,
        KEY_INPUT_F1 = 0x3b,
        KEY_INPUT_F2 = 0x3c,
        KEY_INPUT_F3 = 0x3d,
        KEY_INPUT_F4 = 0x3e,
        KEY_INPUT_F5 = 0x3f,
        KEY_INPUT_F6 = 0x40,
        KEY_INPUT_F7 = 0x41,
        KEY_INPUT_F8 = 0x42,
        KEY_INPUT_F9 = 0x43,
        KEY_INPUT_F10 = 0x44,
        KEY_INPUT_NUMLOCK = 0x45,
        KEY_INPUT_SCROLL = 0x46,
        KEY_INPUT_NUMPAD7 = 0x47,
        KEY_INPUT_NUMPAD8 = 0x48,
        KEY_INPUT_NUMPAD9 = 0x49,
        KEY_INPUT_SUBTRACT = 0x4a,
        KEY_INPUT_NUMPAD4 = 0x4b,
        KEY_INPUT_NUMPAD5 = 0x4c,
        KEY_INPUT_NUMPAD6 = 0x4d,
        KEY_INPUT_ADD = 0x4e,
        KEY_INPUT_NUMPAD1 = 0x4f,
        KEY_INPUT_NUMPAD2 = 0x50,
        KEY_INPUT_NUMPAD3 = 0x51,
        KEY_INPUT_NUMPAD0 = 0x52,
        KEY_INPUT_DECIMAL = 0x53,
        KEY_INPUT_F11 = 0x57,
        KEY_INPUT_F12 = 0x58,
        KEY_INPUT_KANA = 0x70,
        KEY_INPUT_CONVERT = 0x79,
        KEY_INPUT_NOCONVERT = 0x7b,
        KEY_INPUT_YEN = 0x7d,
        KEY_INPUT_PREVTRACK = 0x90,
        KEY_INPUT_AT = 0x91,
        KEY_INPUT_COLON = 0x92,
        KEY_INPUT_KANJI = 0x94,
        KEY_INPUT_NUMPADENTER = 0x9c,
        KEY_INPUT_RCONTROL = 0x9d,
        KEY_INPUT_NUMPADCOMMA = 0xb3,
        KEY_INPUT_DIVIDE = 0xb5,
        KEY_INPUT_SYSRQ = 0xb7,
        KEY_INPUT_RALT = 0xb8,
        KEY_INPUT_PAUSE = 0xc5,
        KEY_INPUT_HOME = 0xc7,
        KEY_INPUT_UP = 0xc8,
        KEY_INPUT_PGUP = 0xc9,
        KEY_INPUT_LEFT = 0xcb,
        KEY_INPUT_RIGHT = 0xcd,
        KEY_INPUT_END = 0xcf,
        KEY_INPUT_DOWN = 0xd0,
        KEY_INPUT_PGDN = 0xd1,
        KEY_INPUT_INSERT = 0xd2,
        KEY_INPUT_DELETE = 0xd3,
        KEY_INPUT_LWIN = 0xdb,
        KEY_INPUT_RWIN = 0xdc,
        KEY_INPUT_APPS = 0xdd,
    }

    MouseInput {
        MOUSE_INPUT_LEFT = 0x01,
        MOUSE_INPUT_MIDDLE = 0x02,
        MOUSE_INPUT_RIGHT = 0x04,
        MOUSE_INPUT_1 = 0x01,
        MOUSE_INPUT_2 = 0x02,
        MOUSE_INPUT_3 = 0x04,
        MOUSE_INPUT_4 = 0x08,
        MOUSE_INPUT_5 = 0x10,
        MOUSE_INPUT_6 = 0x20,
        MOUSE_INPUT_7 = 0x40,
        MOUSE_INPUT_8 = 0x80,
    }

    CheckInput {
        DX_CHECKINPUT_KEY = 0x01,
        DX_CHECKINPUT_PAD = 0x02,
        DX_CHECKINPUT_MOUSE = 0x04,
        DX_CHECKINPUT_ALL = DX_CHECKINPUT_KEY | DX_CHECKINPUT_PAD | DX_CHECKINPUT_MOUSE,
    }

    PlayType {
        DX_PLAYTYPE_LOOPBIT = 0x0002,
        DX_PLAYTYPE_BACKBIT = 0x0001,
        DX_PLAYTYPE_NORMAL = 0x0000,
        DX_PLAYTYPE_BACK = DX_PLAYTYPE_BACKBIT,
        DX_PLAYTYPE_LOOP = DX_PLAYTYPE_BACKBIT | DX_PLAYTYPE_LOOPBIT,
    }

    SeekOrigin {
        SEEK_SET = 0,
        SEEK_CUR = 1,
        SEEK_END = 2,
    }
}

/// Looks up a constant by its native name.
#[must_use]
pub fn find(name: &str) -> Option<&'static Constant> {
    CONSTANTS.iter().find(|constant| constant.name == name)
}

pub fn family(family: Family) -> impl Iterator<Item = &'static Constant> {
    CONSTANTS
        .iter()
        .filter(move |constant| constant.family == family)
}
