use std::{ffi::CStr, os::raw::c_int};

use dxportlib_sys::consts;

use crate::{DxLib, convert::bool_to_flag, defaults};

handle! {
    pub struct SoundHandle;
}

raw_enum! {
    pub enum PlayType / InvalidRawPlayType {
        /// Blocks until the sound has finished.
        Normal = consts::DX_PLAYTYPE_NORMAL,
        Back = consts::DX_PLAYTYPE_BACK,
        Loop = consts::DX_PLAYTYPE_LOOP,
    }
}

impl PlayType {
    #[must_use]
    pub const fn is_background(self) -> bool {
        self.raw() & consts::DX_PLAYTYPE_BACKBIT != 0
    }

    #[must_use]
    pub const fn is_looping(self) -> bool {
        self.raw() & consts::DX_PLAYTYPE_LOOPBIT != 0
    }
}

#[allow(clippy::must_use_candidate)]
impl DxLib {
    /// `from_start` defaults to `true`; `false` resumes where the sound was stopped.
    pub fn play_sound_mem(
        &self,
        sound: SoundHandle,
        play_type: PlayType,
        from_start: Option<bool>,
    ) -> c_int {
        let from_start = bool_to_flag(from_start.unwrap_or(defaults::START_POSITION));
        unsafe { (self.api.sound.play_sound_mem)(sound.raw(), play_type.raw(), from_start) }
    }

    pub fn stop_sound_mem(&self, sound: SoundHandle) -> c_int {
        unsafe { (self.api.sound.stop_sound_mem)(sound.raw()) }
    }

    #[must_use]
    pub fn check_sound_mem(&self, sound: SoundHandle) -> c_int {
        unsafe { (self.api.sound.check_sound_mem)(sound.raw()) }
    }

    pub fn set_volume_sound_mem(&self, volume: c_int, sound: SoundHandle) -> c_int {
        unsafe { (self.api.sound.set_volume_sound_mem)(volume, sound.raw()) }
    }

    /// `volume` ranges over `0..=255`.
    pub fn change_volume_sound_mem(&self, volume: c_int, sound: SoundHandle) -> c_int {
        unsafe { (self.api.sound.change_volume_sound_mem)(volume, sound.raw()) }
    }

    pub fn set_use_old_volume_calc_flag(&self, enabled: bool) -> c_int {
        unsafe { (self.api.sound.set_use_old_volume_calc_flag)(bool_to_flag(enabled)) }
    }

    #[must_use]
    pub fn load_sound_mem(&self, filename: &CStr) -> SoundHandle {
        SoundHandle::from_raw(unsafe { (self.api.sound.load_sound_mem)(filename.as_ptr()) })
    }

    /// Plays `intro` once, then loops `looped` when played with [`PlayType::Loop`].
    #[must_use]
    pub fn load_sound_mem2(&self, intro: &CStr, looped: &CStr) -> SoundHandle {
        let raw = unsafe { (self.api.sound.load_sound_mem2)(intro.as_ptr(), looped.as_ptr()) };
        SoundHandle::from_raw(raw)
    }

    pub fn delete_sound_mem(&self, sound: SoundHandle) -> c_int {
        unsafe { (self.api.sound.delete_sound_mem)(sound.raw()) }
    }

    /// Deletes every sound handle.
    pub fn init_sound_mem(&self) -> c_int {
        unsafe { (self.api.sound.init_sound_mem)() }
    }
}

#[cfg(test)]
mod tests {
    use cstr::cstr;
    use dxportlib_sys::{
        SoundFns,
        echo::{self, Value},
    };

    use super::*;
    use crate::testing::{assert_family_covered, echo_dx, ints, single_call};

    #[test]
    fn start_position_default() {
        let dx = echo_dx();
        let sound = SoundHandle::from_raw(21);
        dx.play_sound_mem(sound, PlayType::Loop, None);
        let implicit = single_call("PlaySoundMem");
        assert_eq!(implicit, ints(&[21, 3, 1]));
        dx.play_sound_mem(sound, PlayType::Loop, Some(true));
        assert_eq!(single_call("PlaySoundMem"), implicit);
        dx.play_sound_mem(sound, PlayType::Back, Some(false));
        assert_eq!(single_call("PlaySoundMem"), ints(&[21, 1, 0]));
    }

    #[test]
    fn volume_argument_order() {
        let dx = echo_dx();
        dx.change_volume_sound_mem(200, SoundHandle::from_raw(4));
        assert_eq!(single_call("ChangeVolumeSoundMem"), ints(&[200, 4]));
        dx.set_volume_sound_mem(-1000, SoundHandle::from_raw(4));
        assert_eq!(single_call("SetVolumeSoundMem"), ints(&[-1000, 4]));
    }

    #[test]
    fn load_two_part_sound() {
        let dx = echo_dx();
        echo::push_return(8);
        let sound = dx.load_sound_mem2(cstr!("intro.ogg"), cstr!("loop.ogg"));
        assert_eq!(sound.raw(), 8);
        assert_eq!(
            single_call("LoadSoundMem2"),
            [
                Value::Text(b"intro.ogg".to_vec()),
                Value::Text(b"loop.ogg".to_vec())
            ]
        );
    }

    #[test]
    fn never_created_sound() {
        let dx = echo_dx();
        echo::push_return(-1);
        assert_eq!(dx.check_sound_mem(SoundHandle::from_raw(-1)), -1);
        assert_eq!(single_call("CheckSoundMem"), ints(&[-1]));
    }

    #[test]
    fn play_type_bits() {
        assert_eq!(PlayType::Loop.raw(), 3);
        assert!(PlayType::Loop.is_background());
        assert!(PlayType::Loop.is_looping());
        assert!(!PlayType::Normal.is_background());
        assert!(!PlayType::Back.is_looping());
        assert_eq!(PlayType::from_raw(2), Err(InvalidRawPlayType(2)));
    }

    #[test]
    fn every_operation_reaches_the_table() {
        let dx = echo_dx();
        let sound = SoundHandle::from_raw(1);
        dx.play_sound_mem(sound, PlayType::Normal, None);
        dx.stop_sound_mem(sound);
        let _ = dx.check_sound_mem(sound);
        dx.set_volume_sound_mem(0, sound);
        dx.change_volume_sound_mem(255, sound);
        dx.set_use_old_volume_calc_flag(false);
        let _ = dx.load_sound_mem(cstr!("a.wav"));
        let _ = dx.load_sound_mem2(cstr!("a.ogg"), cstr!("b.ogg"));
        dx.delete_sound_mem(sound);
        dx.init_sound_mem();

        assert_family_covered(SoundFns::OPERATIONS);
    }
}
