use std::os::raw::{c_char, c_float, c_int};

use crate::consts::DX_CHECKINPUT_ALL;

binding_table! {
    /// Keyboard, joypad and mouse queries.
    pub struct InputFns {
        fn check_hit_key as "CheckHitKey" = "DxLib_CheckHitKey"(key_code: c_int) -> c_int;
        fn check_hit_key_all as "CheckHitKeyAll" = "DxLib_CheckHitKeyAll"(
            check_type: c_int = DX_CHECKINPUT_ALL,
        ) -> c_int;
        /// Fills a 256 byte table with one pressed flag per key code.
        fn get_hit_key_state_all as "GetHitKeyStateAll" =
            "DxLib_GetHitKeyStateAll"(table: *mut c_char) -> c_int;
        fn get_joypad_num as "GetJoypadNum" = "DxLib_GetJoypadNum"() -> c_int;
        fn get_joypad_input_state as "GetJoypadInputState" =
            "DxLib_GetJoypadInputState"(controller_index: c_int) -> c_int;
        fn set_joypad_input_to_key_input as "SetJoypadInputToKeyInput" =
            "DxLib_SetJoypadInputToKeyInput"(
                controller_index: c_int,
                input: c_int,
                key1: c_int,
                key2: c_int = 0,
                key3: c_int = 0,
                key4: c_int = 0,
            ) -> c_int;
        fn get_mouse_point as "GetMousePoint" =
            "DxLib_GetMousePoint"(x_position: *mut c_int, y_position: *mut c_int) -> c_int;
        fn set_mouse_point as "SetMousePoint" =
            "DxLib_SetMousePoint"(x_position: c_int, y_position: c_int) -> c_int;
        fn get_mouse_input as "GetMouseInput" = "DxLib_GetMouseInput"() -> c_int;
        fn get_mouse_wheel_rot_vol as "GetMouseWheelRotVol" =
            "DxLib_GetMouseWheelRotVol"(clear_flag: c_int) -> c_int;
        fn get_mouse_h_wheel_rot_vol as "GetMouseHWheelRotVol" =
            "DxLib_GetMouseHWheelRotVol"(clear_flag: c_int) -> c_int;
        fn get_mouse_wheel_rot_vol_f as "GetMouseWheelRotVolF" =
            "DxLib_GetMouseWheelRotVolF"(clear_flag: c_int) -> c_float;
        fn get_mouse_h_wheel_rot_vol_f as "GetMouseHWheelRotVolF" =
            "DxLib_GetMouseHWheelRotVolF"(clear_flag: c_int) -> c_float;
    }
}
