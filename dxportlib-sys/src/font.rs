use std::os::raw::{c_char, c_double, c_int};

use crate::consts::FALSE;

binding_table! {
    /// Font mappings, font handles and the default font.
    pub struct FontFns {
        fn ext_map_font_file_to_name as "EXT_MapFontFileToName" = "DxLib_EXT_MapFontFileToName"(
            filename: *const c_char,
            fontname: *const c_char,
            thickness: c_int,
            bold_flag: c_int,
        ) -> c_int;
        fn ext_init_font_mappings as "EXT_InitFontMappings" = "DxLib_EXT_InitFontMappings"() -> c_int;
        fn draw_string_to_handle as "DrawStringToHandle" = "DxLib_DrawStringToHandle"(
            x: c_int,
            y: c_int,
            text: *const c_char,
            color: c_int,
            font_handle: c_int,
            edge_color: c_int = 0,
        ) -> c_int;
        fn draw_extend_string_to_handle as "DrawExtendStringToHandle" =
            "DxLib_DrawExtendStringToHandle"(
                x: c_int,
                y: c_int,
                ex_rate_x: c_double,
                ex_rate_y: c_double,
                text: *const c_char,
                color: c_int,
                font_handle: c_int,
                edge_color: c_int = 0,
            ) -> c_int;
        fn get_draw_string_width_to_handle as "GetDrawStringWidthToHandle" =
            "DxLib_GetDrawStringWidthToHandle"(
                text: *const c_char,
                str_len: c_int,
                font_handle: c_int,
            ) -> c_int;
        fn get_draw_extend_string_width_to_handle as "GetDrawExtendStringWidthToHandle" =
            "DxLib_GetDrawExtendStringWidthToHandle"(
                ex_rate_x: c_double,
                text: *const c_char,
                str_len: c_int,
                font_handle: c_int,
            ) -> c_int;
        fn get_font_size_to_handle as "GetFontSizeToHandle" =
            "DxLib_GetFontSizeToHandle"(font_handle: c_int) -> c_int;
        /// Metrics of the first character of `text`.
        fn get_font_char_info as "GetFontCharInfo" = "DxLib_GetFontCharInfo"(
            font_handle: c_int,
            text: *const c_char,
            x_pos: *mut c_int,
            y_pos: *mut c_int,
            advance_x: *mut c_int,
            width: *mut c_int,
            height: *mut c_int,
        ) -> c_int;
        fn set_font_space_to_handle as "SetFontSpaceToHandle" =
            "DxLib_SetFontSpaceToHandle"(font_spacing: c_int, font_handle: c_int) -> c_int;
        fn create_font_to_handle as "CreateFontToHandle" = "DxLib_CreateFontToHandle"(
            fontname: *const c_char,
            size: c_int,
            thickness: c_int,
            font_type: c_int = -1,
            char_set: c_int = -1,
            edge_size: c_int = -1,
            italic: c_int = FALSE,
        ) -> c_int;
        fn delete_font_to_handle as "DeleteFontToHandle" =
            "DxLib_DeleteFontToHandle"(font_handle: c_int) -> c_int;
        fn check_font_handle_valid as "CheckFontHandleValid" =
            "DxLib_CheckFontHandleValid"(font_handle: c_int) -> c_int;
        /// Deletes every font handle.
        fn init_font_to_handle as "InitFontToHandle" = "DxLib_InitFontToHandle"() -> c_int;

        fn draw_string as "DrawString" = "DxLib_DrawString"(
            x: c_int,
            y: c_int,
            text: *const c_char,
            color: c_int,
            edge_color: c_int = 0,
        ) -> c_int;
        fn draw_extend_string as "DrawExtendString" = "DxLib_DrawExtendString"(
            x: c_int,
            y: c_int,
            ex_rate_x: c_double,
            ex_rate_y: c_double,
            text: *const c_char,
            color: c_int,
            edge_color: c_int = 0,
        ) -> c_int;
        fn get_draw_string_width as "GetDrawStringWidth" =
            "DxLib_GetDrawStringWidth"(text: *const c_char, str_len: c_int) -> c_int;
        fn get_draw_extend_string_width as "GetDrawExtendStringWidth" = "DxLib_GetDrawExtendStringWidth"(
            ex_rate_x: c_double,
            text: *const c_char,
            str_len: c_int,
        ) -> c_int;
        fn change_font as "ChangeFont" = "DxLib_ChangeFont"(
            font_name: *const c_char,
            char_set: c_int = -1,
        ) -> c_int;
        fn change_font_type as "ChangeFontType" = "DxLib_ChangeFontType"(font_type: c_int) -> c_int;
        fn set_font_size as "SetFontSize" = "DxLib_SetFontSize"(size: c_int) -> c_int;
        fn get_font_size as "GetFontSize" = "DxLib_GetFontSize"() -> c_int;
        fn set_font_thickness as "SetFontThickness" = "DxLib_SetFontThickness"(thickness: c_int) -> c_int;
        fn set_font_space as "SetFontSpace" = "DxLib_SetFontSpace"(spacing: c_int) -> c_int;
        fn set_default_font_state as "SetDefaultFontState" = "DxLib_SetDefaultFontState"(
            font_name: *const c_char,
            size: c_int,
            thickness: c_int,
        ) -> c_int;
        fn get_default_font_handle as "GetDefaultFontHandle" = "DxLib_GetDefaultFontHandle"() -> c_int;
    }
}
