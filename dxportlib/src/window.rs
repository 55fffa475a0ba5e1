use std::{ffi::CStr, os::raw::c_int};

use dxportlib_sys::consts;

use crate::{DxLib, convert::bool_to_flag, defaults};

raw_enum! {
    /// Draw targets accepted by [`DxLib::set_draw_screen`].
    pub enum Screen / InvalidRawScreen {
        Front = consts::DX_SCREEN_FRONT,
        Back = consts::DX_SCREEN_BACK,
        Work = consts::DX_SCREEN_WORK,
        TempFront = consts::DX_SCREEN_TEMPFRONT,
    }
}

#[allow(clippy::must_use_candidate)]
impl DxLib {
    /// `fps` defaults to 60.
    pub fn set_graph_mode(
        &self,
        width: c_int,
        height: c_int,
        bit_depth: c_int,
        fps: Option<c_int>,
    ) -> c_int {
        let fps = fps.unwrap_or(defaults::FPS);
        unsafe { (self.api.window.set_graph_mode)(width, height, bit_depth, fps) }
    }

    pub fn set_window_size_change_enable_flag(&self, resizable: bool) -> c_int {
        unsafe { (self.api.window.set_window_size_change_enable_flag)(bool_to_flag(resizable)) }
    }

    pub fn set_window_text(&self, name: &CStr) -> c_int {
        unsafe { (self.api.window.set_window_text)(name.as_ptr()) }
    }

    pub fn screen_flip(&self) -> c_int {
        unsafe { (self.api.window.screen_flip)() }
    }

    /// `true` runs in a window, `false` full screen.
    pub fn change_window_mode(&self, windowed: bool) -> c_int {
        unsafe { (self.api.window.change_window_mode)(bool_to_flag(windowed)) }
    }

    pub fn set_draw_screen(&self, screen: Screen) -> c_int {
        unsafe { (self.api.window.set_draw_screen)(screen.raw()) }
    }

    pub fn set_mouse_disp_flag(&self, visible: bool) -> c_int {
        unsafe { (self.api.window.set_mouse_disp_flag)(bool_to_flag(visible)) }
    }

    #[must_use]
    pub fn get_mouse_disp_flag(&self) -> c_int {
        unsafe { (self.api.window.get_mouse_disp_flag)() }
    }

    pub fn set_vsync_wait_flag(&self, wait: bool) -> c_int {
        unsafe { (self.api.window.set_vsync_wait_flag)(bool_to_flag(wait)) }
    }

    #[must_use]
    pub fn get_vsync_wait_flag(&self) -> c_int {
        unsafe { (self.api.window.get_vsync_wait_flag)() }
    }

    pub fn ext_set_icon_image_file(&self, filename: &CStr) -> c_int {
        unsafe { (self.api.window.ext_set_icon_image_file)(filename.as_ptr()) }
    }

    /// Keeps the application running while the window is in the background.
    pub fn set_always_run_flag(&self, always_run: bool) -> c_int {
        unsafe { (self.api.window.set_always_run_flag)(bool_to_flag(always_run)) }
    }

    #[must_use]
    pub fn get_always_run_flag(&self) -> c_int {
        unsafe { (self.api.window.get_always_run_flag)() }
    }
}

#[cfg(test)]
mod tests {
    use cstr::cstr;
    use dxportlib_sys::{
        WindowFns,
        echo::{self, Value},
    };

    use super::*;
    use crate::testing::{assert_family_covered, echo_dx, ints, single_call};

    #[test]
    fn graph_mode_fps_default() {
        let dx = echo_dx();
        dx.set_graph_mode(640, 480, 32, None);
        let implicit = single_call("SetGraphMode");
        dx.set_graph_mode(640, 480, 32, Some(60));
        assert_eq!(single_call("SetGraphMode"), implicit);
        assert_eq!(implicit, ints(&[640, 480, 32, 60]));

        dx.set_graph_mode(800, 600, 16, Some(30));
        assert_eq!(single_call("SetGraphMode"), ints(&[800, 600, 16, 30]));
    }

    #[test]
    fn window_text_bytes() {
        let dx = echo_dx();
        dx.set_window_text(cstr!("Tōhō ★"));
        assert_eq!(
            single_call("SetWindowText"),
            [Value::Text("Tōhō ★".as_bytes().to_vec())]
        );
    }

    #[test]
    fn screens_and_flags() {
        let dx = echo_dx();
        dx.set_draw_screen(Screen::Back);
        assert_eq!(single_call("SetDrawScreen"), ints(&[-2]));
        dx.change_window_mode(true);
        assert_eq!(single_call("ChangeWindowMode"), ints(&[1]));
        dx.set_vsync_wait_flag(false);
        assert_eq!(single_call("SetVSyncWaitFlag"), ints(&[0]));
    }

    #[test]
    fn getters_pass_native_value() {
        let dx = echo_dx();
        echo::push_return(1);
        assert_eq!(dx.get_always_run_flag(), 1);
        assert_eq!(dx.get_mouse_disp_flag(), 0);
    }

    #[test]
    fn screen_values() {
        assert_eq!(Screen::Front.raw(), -4);
        assert_eq!(Screen::Work.raw(), -3);
        assert_eq!(Screen::from_raw(-5), Ok(Screen::TempFront));
        assert_eq!(Screen::from_raw(0), Err(InvalidRawScreen(0)));
        assert_eq!(Screen::ALL.len(), 4);
    }

    #[test]
    fn every_operation_reaches_the_table() {
        let dx = echo_dx();
        dx.set_graph_mode(640, 480, 32, None);
        dx.set_window_size_change_enable_flag(true);
        dx.set_window_text(cstr!("title"));
        dx.screen_flip();
        dx.change_window_mode(true);
        dx.set_draw_screen(Screen::Front);
        dx.set_mouse_disp_flag(false);
        let _ = dx.get_mouse_disp_flag();
        dx.set_vsync_wait_flag(true);
        let _ = dx.get_vsync_wait_flag();
        dx.ext_set_icon_image_file(cstr!("icon.png"));
        dx.set_always_run_flag(true);
        let _ = dx.get_always_run_flag();

        assert_family_covered(WindowFns::OPERATIONS);
    }
}
