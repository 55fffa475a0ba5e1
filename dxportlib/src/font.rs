use std::{
    ffi::CStr,
    os::raw::{c_double, c_int},
};

use dxportlib_sys::consts;

use crate::{
    Color, DxLib,
    convert::{bool_to_flag, usize_to_c_int_saturating},
    defaults,
};

handle! {
    pub struct FontHandle;
}

raw_enum! {
    pub enum FontType / InvalidRawFontType {
        Normal = consts::DX_FONTTYPE_NORMAL,
        Edge = consts::DX_FONTTYPE_EDGE,
        Antialiasing = consts::DX_FONTTYPE_ANTIALIASING,
        Antialiasing4x4 = consts::DX_FONTTYPE_ANTIALIASING_4X4,
        Antialiasing8x8 = consts::DX_FONTTYPE_ANTIALIASING_8X8,
        AntialiasingEdge = consts::DX_FONTTYPE_ANTIALIASING_EDGE,
        AntialiasingEdge4x4 = consts::DX_FONTTYPE_ANTIALIASING_EDGE_4X4,
        AntialiasingEdge8x8 = consts::DX_FONTTYPE_ANTIALIASING_EDGE_8X8,
    }
}

raw_enum! {
    pub enum CharSet / InvalidRawCharSet {
        Default = consts::DX_CHARSET_DEFAULT,
        ShiftJis = consts::DX_CHARSET_SHFTJIS,
        Utf8 = consts::DX_CHARSET_EXT_UTF8,
    }
}

/// Metrics written by [`DxLib::get_font_char_info`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FontCharInfo {
    pub x_pos: c_int,
    pub y_pos: c_int,
    pub advance_x: c_int,
    pub width: c_int,
    pub height: c_int,
}

/// Pending `CreateFontToHandle` call, see [`DxLib::create_font_to_handle`].
#[derive(Debug, Clone)]
#[must_use]
pub struct FontBuilder<'a> {
    dx: &'a DxLib,
    name: &'a CStr,
    size: c_int,
    thickness: c_int,
    font_type: c_int,
    char_set: c_int,
    edge_size: c_int,
    italic: bool,
}

impl FontBuilder<'_> {
    pub fn font_type(&mut self, font_type: FontType) -> &mut Self {
        self.font_type = font_type.raw();
        self
    }

    pub fn char_set(&mut self, char_set: CharSet) -> &mut Self {
        self.char_set = char_set.raw();
        self
    }

    pub fn edge_size(&mut self, edge_size: c_int) -> &mut Self {
        self.edge_size = edge_size;
        self
    }

    pub fn italic(&mut self, italic: bool) -> &mut Self {
        self.italic = italic;
        self
    }

    /// Issues the call. The handle is `-1` when the font cannot be created.
    #[must_use]
    pub fn create(&self) -> FontHandle {
        let raw = unsafe {
            (self.dx.api.font.create_font_to_handle)(
                self.name.as_ptr(),
                self.size,
                self.thickness,
                self.font_type,
                self.char_set,
                self.edge_size,
                bool_to_flag(self.italic),
            )
        };
        FontHandle::from_raw(raw)
    }
}

fn edge(edge_color: Option<Color>) -> c_int {
    edge_color.map_or(defaults::EDGE_COLOR, Color::raw)
}

fn text_len(text: &CStr) -> c_int {
    usize_to_c_int_saturating(text.to_bytes().len())
}

#[allow(clippy::must_use_candidate)]
impl DxLib {
    /// Makes the font file at `filename` available under `fontname`.
    pub fn ext_map_font_file_to_name(
        &self,
        filename: &CStr,
        fontname: &CStr,
        thickness: c_int,
        bold: bool,
    ) -> c_int {
        unsafe {
            (self.api.font.ext_map_font_file_to_name)(
                filename.as_ptr(),
                fontname.as_ptr(),
                thickness,
                bool_to_flag(bold),
            )
        }
    }

    pub fn ext_init_font_mappings(&self) -> c_int {
        unsafe { (self.api.font.ext_init_font_mappings)() }
    }

    /// `edge_color` defaults to `0`.
    pub fn draw_string_to_handle(
        &self,
        x: c_int,
        y: c_int,
        text: &CStr,
        color: Color,
        font: FontHandle,
        edge_color: Option<Color>,
    ) -> c_int {
        unsafe {
            (self.api.font.draw_string_to_handle)(
                x,
                y,
                text.as_ptr(),
                color.raw(),
                font.raw(),
                edge(edge_color),
            )
        }
    }

    pub fn draw_extend_string_to_handle(
        &self,
        x: c_int,
        y: c_int,
        ex_rate_x: c_double,
        ex_rate_y: c_double,
        text: &CStr,
        color: Color,
        font: FontHandle,
        edge_color: Option<Color>,
    ) -> c_int {
        unsafe {
            (self.api.font.draw_extend_string_to_handle)(
                x,
                y,
                ex_rate_x,
                ex_rate_y,
                text.as_ptr(),
                color.raw(),
                font.raw(),
                edge(edge_color),
            )
        }
    }

    /// Width in pixels of the whole of `text`.
    #[must_use]
    pub fn get_draw_string_width_to_handle(&self, text: &CStr, font: FontHandle) -> c_int {
        unsafe {
            (self.api.font.get_draw_string_width_to_handle)(
                text.as_ptr(),
                text_len(text),
                font.raw(),
            )
        }
    }

    #[must_use]
    pub fn get_draw_extend_string_width_to_handle(
        &self,
        ex_rate_x: c_double,
        text: &CStr,
        font: FontHandle,
    ) -> c_int {
        unsafe {
            (self.api.font.get_draw_extend_string_width_to_handle)(
                ex_rate_x,
                text.as_ptr(),
                text_len(text),
                font.raw(),
            )
        }
    }

    #[must_use]
    pub fn get_font_size_to_handle(&self, font: FontHandle) -> c_int {
        unsafe { (self.api.font.get_font_size_to_handle)(font.raw()) }
    }

    /// Metrics of the first character of `text`. Every field of `info` is zeroed before the
    /// call.
    pub fn get_font_char_info(
        &self,
        font: FontHandle,
        text: &CStr,
        info: &mut FontCharInfo,
    ) -> c_int {
        *info = FontCharInfo::default();
        unsafe {
            (self.api.font.get_font_char_info)(
                font.raw(),
                text.as_ptr(),
                &mut info.x_pos,
                &mut info.y_pos,
                &mut info.advance_x,
                &mut info.width,
                &mut info.height,
            )
        }
    }

    pub fn set_font_space_to_handle(&self, spacing: c_int, font: FontHandle) -> c_int {
        unsafe { (self.api.font.set_font_space_to_handle)(spacing, font.raw()) }
    }

    /// Starts a `CreateFontToHandle` call. Font type, char set and edge size default to `-1`
    /// (the native defaults), italic to `false`.
    pub fn create_font_to_handle<'a>(
        &'a self,
        name: &'a CStr,
        size: c_int,
        thickness: c_int,
    ) -> FontBuilder<'a> {
        FontBuilder {
            dx: self,
            name,
            size,
            thickness,
            font_type: defaults::FONT_TYPE,
            char_set: defaults::CHAR_SET,
            edge_size: defaults::EDGE_SIZE,
            italic: defaults::ITALIC,
        }
    }

    pub fn delete_font_to_handle(&self, font: FontHandle) -> c_int {
        unsafe { (self.api.font.delete_font_to_handle)(font.raw()) }
    }

    #[must_use]
    pub fn check_font_handle_valid(&self, font: FontHandle) -> c_int {
        unsafe { (self.api.font.check_font_handle_valid)(font.raw()) }
    }

    /// Deletes every font handle.
    pub fn init_font_to_handle(&self) -> c_int {
        unsafe { (self.api.font.init_font_to_handle)() }
    }

    /// Draws with the default font.
    pub fn draw_string(
        &self,
        x: c_int,
        y: c_int,
        text: &CStr,
        color: Color,
        edge_color: Option<Color>,
    ) -> c_int {
        unsafe {
            (self.api.font.draw_string)(x, y, text.as_ptr(), color.raw(), edge(edge_color))
        }
    }

    pub fn draw_extend_string(
        &self,
        x: c_int,
        y: c_int,
        ex_rate_x: c_double,
        ex_rate_y: c_double,
        text: &CStr,
        color: Color,
        edge_color: Option<Color>,
    ) -> c_int {
        unsafe {
            (self.api.font.draw_extend_string)(
                x,
                y,
                ex_rate_x,
                ex_rate_y,
                text.as_ptr(),
                color.raw(),
                edge(edge_color),
            )
        }
    }

    #[must_use]
    pub fn get_draw_string_width(&self, text: &CStr) -> c_int {
        unsafe { (self.api.font.get_draw_string_width)(text.as_ptr(), text_len(text)) }
    }

    #[must_use]
    pub fn get_draw_extend_string_width(&self, ex_rate_x: c_double, text: &CStr) -> c_int {
        unsafe {
            (self.api.font.get_draw_extend_string_width)(ex_rate_x, text.as_ptr(), text_len(text))
        }
    }

    /// `char_set` defaults to the native default.
    pub fn change_font(&self, name: &CStr, char_set: Option<CharSet>) -> c_int {
        let char_set = char_set.map_or(defaults::CHAR_SET, CharSet::raw);
        unsafe { (self.api.font.change_font)(name.as_ptr(), char_set) }
    }

    pub fn change_font_type(&self, font_type: FontType) -> c_int {
        unsafe { (self.api.font.change_font_type)(font_type.raw()) }
    }

    pub fn set_font_size(&self, size: c_int) -> c_int {
        unsafe { (self.api.font.set_font_size)(size) }
    }

    #[must_use]
    pub fn get_font_size(&self) -> c_int {
        unsafe { (self.api.font.get_font_size)() }
    }

    pub fn set_font_thickness(&self, thickness: c_int) -> c_int {
        unsafe { (self.api.font.set_font_thickness)(thickness) }
    }

    pub fn set_font_space(&self, spacing: c_int) -> c_int {
        unsafe { (self.api.font.set_font_space)(spacing) }
    }

    pub fn set_default_font_state(&self, name: &CStr, size: c_int, thickness: c_int) -> c_int {
        unsafe { (self.api.font.set_default_font_state)(name.as_ptr(), size, thickness) }
    }

    #[must_use]
    pub fn get_default_font_handle(&self) -> FontHandle {
        FontHandle::from_raw(unsafe { (self.api.font.get_default_font_handle)() })
    }
}
