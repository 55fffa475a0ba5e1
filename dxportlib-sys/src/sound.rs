use std::os::raw::{c_char, c_int};

use crate::consts::TRUE;

binding_table! {
    /// Sound handles and playback.
    pub struct SoundFns {
        fn play_sound_mem as "PlaySoundMem" = "DxLib_PlaySoundMem"(
            sound_id: c_int,
            play_type: c_int,
            start_position_flag: c_int = TRUE,
        ) -> c_int;
        fn stop_sound_mem as "StopSoundMem" = "DxLib_StopSoundMem"(sound_id: c_int) -> c_int;
        /// `1` while the sound is playing.
        fn check_sound_mem as "CheckSoundMem" = "DxLib_CheckSoundMem"(sound_id: c_int) -> c_int;
        fn set_volume_sound_mem as "SetVolumeSoundMem" =
            "DxLib_SetVolumeSoundMem"(volume: c_int, sound_id: c_int) -> c_int;
        fn change_volume_sound_mem as "ChangeVolumeSoundMem" =
            "DxLib_ChangeVolumeSoundMem"(volume: c_int, sound_id: c_int) -> c_int;
        fn set_use_old_volume_calc_flag as "SetUseOldVolumeCalcFlag" =
            "DxLib_SetUseOldVolumeCalcFlag"(volume_flag: c_int) -> c_int;
        fn load_sound_mem as "LoadSoundMem" = "DxLib_LoadSoundMem"(filename: *const c_char) -> c_int;
        /// Loads an intro part followed by a looping part.
        fn load_sound_mem2 as "LoadSoundMem2" = "DxLib_LoadSoundMem2"(
            filename: *const c_char,
            filename2: *const c_char,
        ) -> c_int;
        fn delete_sound_mem as "DeleteSoundMem" = "DxLib_DeleteSoundMem"(sound_id: c_int) -> c_int;
        fn init_sound_mem as "InitSoundMem" = "DxLib_InitSoundMem"() -> c_int;
    }
}
