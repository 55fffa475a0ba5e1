use std::os::raw::c_int;

use crate::{DxLib, convert::bool_to_flag};

#[allow(clippy::must_use_candidate)]
impl DxLib {
    /// Initialises the native library. Returns `-1` on failure.
    pub fn dxlib_init(&self) -> c_int {
        unsafe { (self.api.system.dxlib_init)() }
    }

    pub fn dxlib_end(&self) -> c_int {
        unsafe { (self.api.system.dxlib_end)() }
    }

    pub fn global_struct_initialize(&self) -> c_int {
        unsafe { (self.api.system.global_struct_initialize)() }
    }

    #[must_use]
    pub fn is_init(&self) -> c_int {
        unsafe { (self.api.system.is_init)() }
    }

    /// Handles pending window messages. Returns `-1` once the window has been closed.
    pub fn process_message(&self) -> c_int {
        unsafe { (self.api.system.process_message)() }
    }

    pub fn wait_timer(&self, ms_time: c_int) -> c_int {
        unsafe { (self.api.system.wait_timer)(ms_time) }
    }

    pub fn wait_key(&self) -> c_int {
        unsafe { (self.api.system.wait_key)() }
    }

    #[must_use]
    pub fn get_now_count(&self) -> c_int {
        unsafe { (self.api.system.get_now_count)() }
    }

    /// A random number in `0..=max_value`.
    #[must_use]
    pub fn get_rand(&self, max_value: c_int) -> c_int {
        unsafe { (self.api.system.get_rand)(max_value) }
    }

    pub fn srand(&self, random_seed: c_int) -> c_int {
        unsafe { (self.api.system.srand)(random_seed) }
    }

    pub fn set_out_application_log_valid_flag(&self, enabled: bool) -> c_int {
        unsafe { (self.api.system.set_out_application_log_valid_flag)(bool_to_flag(enabled)) }
    }
}
