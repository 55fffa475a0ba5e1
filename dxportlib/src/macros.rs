/// Declares a closed `#[repr(i32)]` enum over native constants, with a fallible `from_raw`.
macro_rules! raw_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident / $error:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:path,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i32)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $value,
            )*
        }

        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
        #[error("invalid raw {} value {}", stringify!($name), .0)]
        pub struct $error(pub std::os::raw::c_int);

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            pub fn from_raw(raw: std::os::raw::c_int) -> Result<Self, $error> {
                Ok(match raw {
                    $($value => Self::$variant,)*
                    _ => return Err($error(raw)),
                })
            }

            #[must_use]
            pub const fn raw(self) -> std::os::raw::c_int {
                self as std::os::raw::c_int
            }
        }

        impl From<$name> for std::os::raw::c_int {
            fn from(value: $name) -> Self {
                value.raw()
            }
        }
    };
}

/// Declares a `Copy` newtype over a native handle.
macro_rules! handle {
    ($(#[$meta:meta])* pub struct $name:ident;) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(transparent)]
        pub struct $name(std::os::raw::c_int);

        impl $name {
            /// Wraps a raw handle. No check is made: invalid handles are left to the native
            /// library.
            #[must_use]
            pub const fn from_raw(raw: std::os::raw::c_int) -> Self {
                Self(raw)
            }

            #[must_use]
            pub const fn raw(self) -> std::os::raw::c_int {
                self.0
            }

            /// Create and load calls return `-1` on failure.
            #[must_use]
            pub const fn is_error(self) -> bool {
                self.0 == -1
            }
        }
    };
}
