//! Library lifecycle, timers and the random number generator.

use std::os::raw::c_int;

binding_table! {
    /// Entry points of the `main` family.
    pub struct SystemFns {
        fn dxlib_init as "DxLib_Init" = "DxLib_DxLib_Init"() -> c_int;
        fn dxlib_end as "DxLib_End" = "DxLib_DxLib_End"() -> c_int;
        /// Resets the configuration set before `DxLib_Init`.
        fn global_struct_initialize as "GlobalStructInitialize" = "DxLib_GlobalStructInitialize"() -> c_int;
        fn is_init as "IsInit" = "DxLib_IsInit"() -> c_int;
        /// Pumps window events; returns `-1` once the application should quit.
        fn process_message as "ProcessMessage" = "DxLib_ProcessMessage"() -> c_int;
        fn wait_timer as "WaitTimer" = "DxLib_WaitTimer"(ms_time: c_int) -> c_int;
        fn wait_key as "WaitKey" = "DxLib_WaitKey"() -> c_int;
        /// Milliseconds since an arbitrary, fixed starting point.
        fn get_now_count as "GetNowCount" = "DxLib_GetNowCount"() -> c_int;
        fn get_rand as "GetRand" = "DxLib_GetRand"(max_value: c_int) -> c_int;
        fn srand as "SRand" = "DxLib_SRand"(random_seed: c_int) -> c_int;
        fn set_out_application_log_valid_flag as "SetOutApplicationLogValidFlag" =
            "DxLib_SetOutApplicationLogValidFlag"(log_flag: c_int) -> c_int;
    }
}
