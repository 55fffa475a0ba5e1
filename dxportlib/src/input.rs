use std::os::raw::{c_float, c_int};

use bitflags::bitflags;
use dxportlib_sys::consts;

use crate::{DxLib, convert::bool_to_flag, defaults};

raw_enum! {
    /// Keyboard scan codes, laid out like DirectInput's `DIK_*` values.
    pub enum KeyCode / InvalidRawKeyCode {
        Escape = consts::KEY_INPUT_ESCAPE,
        Key1 = consts::KEY_INPUT_1,
        Key2 = consts::KEY_INPUT_2,
        Key3 = consts::KEY_INPUT_3,
        Key4 = consts::KEY_INPUT_4,
        Key5 = consts::KEY_INPUT_5,
        Key6 = consts::KEY_INPUT_6,
        Key7 = consts::KEY_INPUT_7,
        Key8 = consts::KEY_INPUT_8,
        Key9 = consts::KEY_INPUT_9,
        Key0 = consts::KEY_INPUT_0,
        Minus = consts::KEY_INPUT_MINUS,
        Equals = consts::KEY_INPUT_EQUALS,
        Back = consts::KEY_INPUT_BACK,
        Tab = consts::KEY_INPUT_TAB,
        Q = consts::KEY_INPUT_Q,
        W = consts::KEY_INPUT_W,
        E = consts::KEY_INPUT_E,
        R = consts::KEY_INPUT_R,
        T = consts::KEY_INPUT_T,
        Y = consts::KEY_INPUT_Y,
        U = consts::KEY_INPUT_U,
        I = consts::KEY_INPUT_I,
        O = consts::KEY_INPUT_O,
        P = consts::KEY_INPUT_P,
        LBracket = consts::KEY_INPUT_LBRACKET,
        RBracket = consts::KEY_INPUT_RBRACKET,
        Return = consts::KEY_INPUT_RETURN,
        LControl = consts::KEY_INPUT_LCONTROL,
        A = consts::KEY_INPUT_A,
        S = consts::KEY_INPUT_S,
        D = consts::KEY_INPUT_D,
        F = consts::KEY_INPUT_F,
        G = consts::KEY_INPUT_G,
        H = consts::KEY_INPUT_H,
        J = consts::KEY_INPUT_J,
        K = consts::KEY_INPUT_K,
        L = consts::KEY_INPUT_L,
        Semicolon = consts::KEY_INPUT_SEMICOLON,
        LShift = consts::KEY_INPUT_LSHIFT,
        Backslash = consts::KEY_INPUT_BACKSLASH,
        Z = consts::KEY_INPUT_Z,
        X = consts::KEY_INPUT_X,
        C = consts::KEY_INPUT_C,
        V = consts::KEY_INPUT_V,
        B = consts::KEY_INPUT_B,
        N = consts::KEY_INPUT_N,
        M = consts::KEY_INPUT_M,
        Comma = consts::KEY_INPUT_COMMA,
        Period = consts::KEY_INPUT_PERIOD,
        Slash = consts::KEY_INPUT_SLASH,
        RShift = consts::KEY_INPUT_RSHIFT,
        Multiply = consts::KEY_INPUT_MULTIPLY,
        LAlt = consts::KEY_INPUT_LALT,
        Space = consts::KEY_INPUT_SPACE,
        CapsLock = consts::KEY_INPUT_CAPSLOCK,
        F1 = consts::KEY_INPUT_F1,
        F2 = consts::KEY_INPUT_F2,
        F3 = consts::KEY_INPUT_F3,
        F4 = consts::KEY_INPUT_F4,
        F5 = consts::KEY_INPUT_F5,
        F6 = consts::KEY_INPUT_F6,
        F7 = consts::KEY_INPUT_F7,
        F8 = consts::KEY_INPUT_F8,
        F9 = consts::KEY_INPUT_F9,
        F10 = consts::KEY_INPUT_F10,
        NumLock = consts::KEY_INPUT_NUMLOCK,
        Scroll = consts::KEY_INPUT_SCROLL,
        Numpad7 = consts::KEY_INPUT_NUMPAD7,
        Numpad8 = consts::KEY_INPUT_NUMPAD8,
        Numpad9 = consts::KEY_INPUT_NUMPAD9,
        Subtract = consts::KEY_INPUT_SUBTRACT,
        Numpad4 = consts::KEY_INPUT_NUMPAD4,
        Numpad5 = consts::KEY_INPUT_NUMPAD5,
        Numpad6 = consts::KEY_INPUT_NUMPAD6,
        Add = consts::KEY_INPUT_ADD,
        Numpad1 = consts::KEY_INPUT_NUMPAD1,
        Numpad2 = consts::KEY_INPUT_NUMPAD2,
        Numpad3 = consts::KEY_INPUT_NUMPAD3,
        Numpad0 = consts::KEY_INPUT_NUMPAD0,
        Decimal = consts::KEY_INPUT_DECIMAL,
        F11 = consts::KEY_INPUT_F11,
        F12 = consts::KEY_INPUT_F12,
        Kana = consts::KEY_INPUT_KANA,
        Convert = consts::KEY_INPUT_CONVERT,
        NoConvert = consts::KEY_INPUT_NOCONVERT,
        Yen = consts::KEY_INPUT_YEN,
        PrevTrack = consts::KEY_INPUT_PREVTRACK,
        At = consts::KEY_INPUT_AT,
        Colon = consts::KEY_INPUT_COLON,
        Kanji = consts::KEY_INPUT_KANJI,
        NumpadEnter = consts::KEY_INPUT_NUMPADENTER,
        RControl = consts::KEY_INPUT_RCONTROL,
        NumpadComma = consts::KEY_INPUT_NUMPADCOMMA,
        Divide = consts::KEY_INPUT_DIVIDE,
        SysRq = consts::KEY_INPUT_SYSRQ,
        RAlt = consts::KEY_INPUT_RALT,
        Pause = consts::KEY_INPUT_PAUSE,
        Home = consts::KEY_INPUT_HOME,
        Up = consts::KEY_INPUT_UP,
        PageUp = consts::KEY_INPUT_PGUP,
        Left = consts::KEY_INPUT_LEFT,
        Right = consts::KEY_INPUT_RIGHT,
        End = consts::KEY_INPUT_END,
        Down = consts::KEY_INPUT_DOWN,
        PageDown = consts::KEY_INPUT_PGDN,
        Insert = consts::KEY_INPUT_INSERT,
        Delete = consts::KEY_INPUT_DELETE,
        LWin = consts::KEY_INPUT_LWIN,
        RWin = consts::KEY_INPUT_RWIN,
        Apps = consts::KEY_INPUT_APPS,
    }
}

impl KeyCode {
    const fn index(self) -> usize {
        // Every scan code is in `0..256`
        #[allow(clippy::cast_sign_loss)]
        let index = self as usize;
        index
    }
}

raw_enum! {
    /// Device selector for the joypad queries.
    pub enum InputType / InvalidRawInputType {
        Pad1 = consts::DX_INPUT_PAD1,
        Pad2 = consts::DX_INPUT_PAD2,
        Pad3 = consts::DX_INPUT_PAD3,
        Pad4 = consts::DX_INPUT_PAD4,
        Pad5 = consts::DX_INPUT_PAD5,
        Pad6 = consts::DX_INPUT_PAD6,
        Pad7 = consts::DX_INPUT_PAD7,
        Pad8 = consts::DX_INPUT_PAD8,
        Pad9 = consts::DX_INPUT_PAD9,
        Pad10 = consts::DX_INPUT_PAD10,
        Pad11 = consts::DX_INPUT_PAD11,
        Pad12 = consts::DX_INPUT_PAD12,
        Pad13 = consts::DX_INPUT_PAD13,
        Pad14 = consts::DX_INPUT_PAD14,
        Pad15 = consts::DX_INPUT_PAD15,
        Pad16 = consts::DX_INPUT_PAD16,
        /// The keyboard, reported through the pad bits.
        Key = consts::DX_INPUT_KEY,
        /// The keyboard merged with the first joypad.
        KeyPad1 = consts::DX_INPUT_KEY_PAD1,
    }
}

raw_enum! {
    pub enum XInputButton / InvalidRawXInputButton {
        DpadUp = consts::XINPUT_BUTTON_DPAD_UP,
        DpadDown = consts::XINPUT_BUTTON_DPAD_DOWN,
        DpadLeft = consts::XINPUT_BUTTON_DPAD_LEFT,
        DpadRight = consts::XINPUT_BUTTON_DPAD_RIGHT,
        Start = consts::XINPUT_BUTTON_START,
        Back = consts::XINPUT_BUTTON_BACK,
        LeftThumb = consts::XINPUT_BUTTON_LEFT_THUMB,
        RightThumb = consts::XINPUT_BUTTON_RIGHT_THUMB,
        LeftShoulder = consts::XINPUT_BUTTON_LEFT_SHOULDER,
        RightShoulder = consts::XINPUT_BUTTON_RIGHT_SHOULDER,
        A = consts::XINPUT_BUTTON_A,
        B = consts::XINPUT_BUTTON_B,
        X = consts::XINPUT_BUTTON_X,
        Y = consts::XINPUT_BUTTON_Y,
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PadInput: c_int {
        const DOWN = consts::PAD_INPUT_DOWN;
        const LEFT = consts::PAD_INPUT_LEFT;
        const RIGHT = consts::PAD_INPUT_RIGHT;
        const UP = consts::PAD_INPUT_UP;
        const BUTTON_1 = consts::PAD_INPUT_1;
        const BUTTON_2 = consts::PAD_INPUT_2;
        const BUTTON_3 = consts::PAD_INPUT_3;
        const BUTTON_4 = consts::PAD_INPUT_4;
        const BUTTON_5 = consts::PAD_INPUT_5;
        const BUTTON_6 = consts::PAD_INPUT_6;
        const BUTTON_7 = consts::PAD_INPUT_7;
        const BUTTON_8 = consts::PAD_INPUT_8;
        const BUTTON_9 = consts::PAD_INPUT_9;
        const BUTTON_10 = consts::PAD_INPUT_10;
        const BUTTON_11 = consts::PAD_INPUT_11;
        const BUTTON_12 = consts::PAD_INPUT_12;
        const BUTTON_13 = consts::PAD_INPUT_13;
        const BUTTON_14 = consts::PAD_INPUT_14;
        const BUTTON_15 = consts::PAD_INPUT_15;
        const BUTTON_16 = consts::PAD_INPUT_16;
        const BUTTON_17 = consts::PAD_INPUT_17;
        const BUTTON_18 = consts::PAD_INPUT_18;
        const BUTTON_19 = consts::PAD_INPUT_19;
        const BUTTON_20 = consts::PAD_INPUT_20;
        const BUTTON_21 = consts::PAD_INPUT_21;
        const BUTTON_22 = consts::PAD_INPUT_22;
        const BUTTON_23 = consts::PAD_INPUT_23;
        const BUTTON_24 = consts::PAD_INPUT_24;
        const BUTTON_25 = consts::PAD_INPUT_25;
        const BUTTON_26 = consts::PAD_INPUT_26;
        const BUTTON_27 = consts::PAD_INPUT_27;
        const BUTTON_28 = consts::PAD_INPUT_28;
    }
}

// Letter aliases of the numbered buttons.
impl PadInput {
    pub const A: Self = Self::BUTTON_1;
    pub const B: Self = Self::BUTTON_2;
    pub const C: Self = Self::BUTTON_3;
    pub const X: Self = Self::BUTTON_4;
    pub const Y: Self = Self::BUTTON_5;
    pub const Z: Self = Self::BUTTON_6;
    pub const L: Self = Self::BUTTON_7;
    pub const R: Self = Self::BUTTON_8;
    pub const START: Self = Self::BUTTON_9;
    pub const M: Self = Self::BUTTON_10;
    pub const D: Self = Self::BUTTON_11;
    pub const F: Self = Self::BUTTON_12;
    pub const G: Self = Self::BUTTON_13;
    pub const H: Self = Self::BUTTON_14;
    pub const I: Self = Self::BUTTON_15;
    pub const J: Self = Self::BUTTON_16;
    pub const K: Self = Self::BUTTON_17;
    pub const LL: Self = Self::BUTTON_18;
    pub const N: Self = Self::BUTTON_19;
    pub const O: Self = Self::BUTTON_20;
    pub const P: Self = Self::BUTTON_21;
    pub const RR: Self = Self::BUTTON_22;
    pub const S: Self = Self::BUTTON_23;
    pub const T: Self = Self::BUTTON_24;
    pub const U: Self = Self::BUTTON_25;
    pub const V: Self = Self::BUTTON_26;
    pub const W: Self = Self::BUTTON_27;
    pub const XX: Self = Self::BUTTON_28;
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MouseInput: c_int {
        const LEFT = consts::MOUSE_INPUT_LEFT;
        const MIDDLE = consts::MOUSE_INPUT_MIDDLE;
        const RIGHT = consts::MOUSE_INPUT_RIGHT;
        const BUTTON_4 = consts::MOUSE_INPUT_4;
        const BUTTON_5 = consts::MOUSE_INPUT_5;
        const BUTTON_6 = consts::MOUSE_INPUT_6;
        const BUTTON_7 = consts::MOUSE_INPUT_7;
        const BUTTON_8 = consts::MOUSE_INPUT_8;
    }
}

impl MouseInput {
    pub const BUTTON_1: Self = Self::LEFT;
    pub const BUTTON_2: Self = Self::MIDDLE;
    pub const BUTTON_3: Self = Self::RIGHT;
}

bitflags! {
    /// Devices inspected by [`DxLib::check_hit_key_all`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CheckInput: c_int {
        const KEY = consts::DX_CHECKINPUT_KEY;
        const PAD = consts::DX_CHECKINPUT_PAD;
        const MOUSE = consts::DX_CHECKINPUT_MOUSE;
        const ALL = consts::DX_CHECKINPUT_ALL;
    }
}

/// One pressed flag per scan code, as filled by [`DxLib::get_hit_key_state_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyStateTable([u8; 256]);

impl Default for KeyStateTable {
    fn default() -> Self {
        Self([0; 256])
    }
}

impl KeyStateTable {
    #[must_use]
    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.0[key.index()] != 0
    }

    pub fn pressed(&self) -> impl Iterator<Item = KeyCode> + '_ {
        KeyCode::ALL
            .iter()
            .copied()
            .filter(|&key| self.is_pressed(key))
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 256] {
        &self.0
    }
}

#[allow(clippy::must_use_candidate)]
impl DxLib {
    /// Non-zero while `key` is held down.
    #[must_use]
    pub fn check_hit_key(&self, key: KeyCode) -> c_int {
        unsafe { (self.api.input.check_hit_key)(key.raw()) }
    }

    /// `check_type` defaults to [`CheckInput::ALL`].
    #[must_use]
    pub fn check_hit_key_all(&self, check_type: Option<CheckInput>) -> c_int {
        let check_type = check_type.map_or(defaults::CHECK_INPUT, |flags| flags.bits());
        unsafe { (self.api.input.check_hit_key_all)(check_type) }
    }

    pub fn get_hit_key_state_all(&self, table: &mut KeyStateTable) -> c_int {
        table.0.fill(0);
        unsafe { (self.api.input.get_hit_key_state_all)(table.0.as_mut_ptr().cast()) }
    }

    #[must_use]
    pub fn get_joypad_num(&self) -> c_int {
        unsafe { (self.api.input.get_joypad_num)() }
    }

    /// Every bit the native side reports is kept, known or not.
    #[must_use]
    pub fn get_joypad_input_state(&self, input_type: InputType) -> PadInput {
        let state = unsafe { (self.api.input.get_joypad_input_state)(input_type.raw()) };
        PadInput::from_bits_retain(state)
    }

    /// Maps keyboard keys onto a pad input. Unused extra keys default to none.
    pub fn set_joypad_input_to_key_input(
        &self,
        input_type: InputType,
        input: PadInput,
        key1: KeyCode,
        key2: Option<KeyCode>,
        key3: Option<KeyCode>,
        key4: Option<KeyCode>,
    ) -> c_int {
        let extra = |key: Option<KeyCode>| key.map_or(defaults::JOYPAD_KEY, KeyCode::raw);
        unsafe {
            (self.api.input.set_joypad_input_to_key_input)(
                input_type.raw(),
                input.bits(),
                key1.raw(),
                extra(key2),
                extra(key3),
                extra(key4),
            )
        }
    }

    /// Both slots are zeroed before the call.
    pub fn get_mouse_point(&self, x: &mut c_int, y: &mut c_int) -> c_int {
        *x = 0;
        *y = 0;
        unsafe { (self.api.input.get_mouse_point)(x, y) }
    }

    pub fn set_mouse_point(&self, x: c_int, y: c_int) -> c_int {
        unsafe { (self.api.input.set_mouse_point)(x, y) }
    }

    #[must_use]
    pub fn get_mouse_input(&self) -> MouseInput {
        MouseInput::from_bits_retain(unsafe { (self.api.input.get_mouse_input)() })
    }

    #[must_use]
    pub fn get_mouse_wheel_rot_vol(&self, clear: bool) -> c_int {
        unsafe { (self.api.input.get_mouse_wheel_rot_vol)(bool_to_flag(clear)) }
    }

    #[must_use]
    pub fn get_mouse_h_wheel_rot_vol(&self, clear: bool) -> c_int {
        unsafe { (self.api.input.get_mouse_h_wheel_rot_vol)(bool_to_flag(clear)) }
    }

    #[must_use]
    pub fn get_mouse_wheel_rot_vol_f(&self, clear: bool) -> c_float {
        unsafe { (self.api.input.get_mouse_wheel_rot_vol_f)(bool_to_flag(clear)) }
    }

    #[must_use]
    pub fn get_mouse_h_wheel_rot_vol_f(&self, clear: bool) -> c_float {
        unsafe { (self.api.input.get_mouse_h_wheel_rot_vol_f)(bool_to_flag(clear)) }
    }
}

#[cfg(test)]
mod tests {
    use dxportlib_sys::{
        InputFns,
        echo::{self, Value},
    };

    use super::*;
    use crate::testing::{assert_family_covered, echo_dx, ints, single_call};

    #[test]
    fn key_codes_match_native_values() {
        assert_eq!(KeyCode::Escape.raw(), 0x01);
        assert_eq!(KeyCode::Key0.raw(), 0x0b);
        assert_eq!(KeyCode::Return.raw(), 0x1c);
        assert_eq!(KeyCode::Space.raw(), 0x39);
        assert_eq!(KeyCode::Delete.raw(), 0xd3);
        assert_eq!(KeyCode::from_raw(0xc8), Ok(KeyCode::Up));
        assert_eq!(KeyCode::from_raw(0x28), Err(InvalidRawKeyCode(0x28)));
        assert_eq!(KeyCode::ALL.len(), 111);

        for &key in KeyCode::ALL {
            assert_eq!(KeyCode::from_raw(key.raw()), Ok(key));
        }
    }

    #[test]
    fn aliases_share_bits() {
        assert_eq!(PadInput::A, PadInput::BUTTON_1);
        assert_eq!(PadInput::START.bits(), 0x1000);
        assert_eq!(PadInput::XX.bits(), c_int::MIN);
        assert_eq!(PadInput::UP.bits(), 0x08);
        assert_eq!(MouseInput::BUTTON_1, MouseInput::LEFT);
        assert_eq!(MouseInput::BUTTON_3.bits(), 0x04);
        assert_eq!(CheckInput::ALL.bits(), 0x07);
        assert_eq!(CheckInput::ALL, CheckInput::all());
        assert_eq!(InputType::KeyPad1.raw(), 0x1001);
        assert_eq!(XInputButton::Y.raw(), 13);
    }

    #[test]
    fn check_hit_key_all_default() {
        let dx = echo_dx();
        let _ = dx.check_hit_key_all(None);
        let implicit = single_call("CheckHitKeyAll");
        assert_eq!(implicit, ints(&[0x07]));
        let _ = dx.check_hit_key_all(Some(CheckInput::ALL));
        assert_eq!(single_call("CheckHitKeyAll"), implicit);
        let _ = dx.check_hit_key_all(Some(CheckInput::KEY | CheckInput::MOUSE));
        assert_eq!(single_call("CheckHitKeyAll"), ints(&[0x05]));
    }

    #[test]
    fn joypad_key_mapping_defaults() {
        let dx = echo_dx();
        dx.set_joypad_input_to_key_input(
            InputType::Pad1,
            PadInput::A,
            KeyCode::Z,
            None,
            None,
            None,
        );
        let implicit = single_call("SetJoypadInputToKeyInput");
        assert_eq!(implicit, ints(&[1, 0x10, 0x2c, 0, 0, 0]));

        dx.set_joypad_input_to_key_input(
            InputType::Pad2,
            PadInput::UP,
            KeyCode::Up,
            Some(KeyCode::W),
            None,
            Some(KeyCode::Numpad8),
        );
        assert_eq!(
            single_call("SetJoypadInputToKeyInput"),
            ints(&[2, 0x08, 0xc8, 0x11, 0, 0x48])
        );
    }

    #[test]
    fn pad_state_keeps_unknown_bits() {
        let dx = echo_dx();
        echo::push_return(c_int::MIN | 0x0f);
        let state = dx.get_joypad_input_state(InputType::KeyPad1);
        assert!(state.contains(PadInput::XX | PadInput::DOWN | PadInput::UP));
        assert_eq!(single_call("GetJoypadInputState"), ints(&[0x1001]));
    }

    #[test]
    fn mouse_point_slots() {
        let dx = echo_dx();
        let (mut x, mut y) = (99, 99);
        dx.get_mouse_point(&mut x, &mut y);
        assert_eq!((x, y), (0, 0));
        assert_eq!(
            single_call("GetMousePoint"),
            [Value::Slot, Value::Slot]
        );

        echo::push_slot_values([320, 240]);
        dx.get_mouse_point(&mut x, &mut y);
        assert_eq!((x, y), (320, 240));
    }

    #[test]
    fn wheel_float_variant() {
        let dx = echo_dx();
        echo::push_return(3);
        let rotation = dx.get_mouse_wheel_rot_vol_f(true);
        assert!((rotation - 3.0).abs() < f32::EPSILON);
        assert_eq!(single_call("GetMouseWheelRotVolF"), ints(&[1]));
    }

    #[test]
    fn key_state_table() {
        let dx = echo_dx();
        let mut table = KeyStateTable::default();
        assert_eq!(dx.get_hit_key_state_all(&mut table), 0);
        assert_eq!(single_call("GetHitKeyStateAll"), [Value::Buffer]);
        assert!(!table.is_pressed(KeyCode::Escape));
        assert_eq!(table.pressed().count(), 0);
        assert_eq!(table.as_bytes().len(), 256);
    }

    #[test]
    fn every_operation_reaches_the_table() {
        let dx = echo_dx();
        let mut table = KeyStateTable::default();
        let (mut x, mut y) = (0, 0);
        let _ = dx.check_hit_key(KeyCode::Space);
        let _ = dx.check_hit_key_all(None);
        dx.get_hit_key_state_all(&mut table);
        let _ = dx.get_joypad_num();
        let _ = dx.get_joypad_input_state(InputType::Pad1);
        dx.set_joypad_input_to_key_input(
            InputType::Pad1,
            PadInput::A,
            KeyCode::Z,
            None,
            None,
            None,
        );
        dx.get_mouse_point(&mut x, &mut y);
        dx.set_mouse_point(x, y);
        let _ = dx.get_mouse_input();
        let _ = dx.get_mouse_wheel_rot_vol(false);
        let _ = dx.get_mouse_h_wheel_rot_vol(false);
        let _ = dx.get_mouse_wheel_rot_vol_f(false);
        let _ = dx.get_mouse_h_wheel_rot_vol_f(false);

        assert_family_covered(InputFns::OPERATIONS);
    }
}
