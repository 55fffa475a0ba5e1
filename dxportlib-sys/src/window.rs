use std::os::raw::{c_char, c_int};

binding_table! {
    /// Window, screen and display flags.
    pub struct WindowFns {
        fn set_graph_mode as "SetGraphMode" = "DxLib_SetGraphMode"(
            width: c_int,
            height: c_int,
            bit_depth: c_int,
            fps: c_int = 60,
        ) -> c_int;
        fn set_window_size_change_enable_flag as "SetWindowSizeChangeEnableFlag" =
            "DxLib_SetWindowSizeChangeEnableFlag"(window_resize_flag: c_int) -> c_int;
        fn set_window_text as "SetWindowText" = "DxLib_SetWindowText"(window_name: *const c_char) -> c_int;
        fn screen_flip as "ScreenFlip" = "DxLib_ScreenFlip"() -> c_int;
        fn change_window_mode as "ChangeWindowMode" = "DxLib_ChangeWindowMode"(flag: c_int) -> c_int;
        fn set_draw_screen as "SetDrawScreen" = "DxLib_SetDrawScreen"(screen: c_int) -> c_int;
        fn set_mouse_disp_flag as "SetMouseDispFlag" = "DxLib_SetMouseDispFlag"(flag: c_int) -> c_int;
        fn get_mouse_disp_flag as "GetMouseDispFlag" = "DxLib_GetMouseDispFlag"() -> c_int;
        // The native export is spelled `WaitVSync`.
        fn set_vsync_wait_flag as "SetVSyncWaitFlag" = "DxLib_SetWaitVSyncFlag"(flag: c_int) -> c_int;
        fn get_vsync_wait_flag as "GetVSyncWaitFlag" = "DxLib_GetWaitVSyncFlag"() -> c_int;
        fn ext_set_icon_image_file as "EXT_SetIconImageFile" =
            "DxLib_EXT_SetIconImageFile"(filename: *const c_char) -> c_int;
        fn set_always_run_flag as "SetAlwaysRunFlag" = "DxLib_SetAlwaysRunFlag"(flag: c_int) -> c_int;
        fn get_always_run_flag as "GetAlwaysRunFlag" = "DxLib_GetAlwaysRunFlag"() -> c_int;
    }
}
