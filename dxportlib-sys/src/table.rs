use std::path::{Path, PathBuf};

use libloading::Library;
use log::error;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot open native library {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    #[error("native library does not export `{symbol}` (required by {name})")]
    Symbol {
        symbol: &'static str,
        name: &'static str,
        #[source]
        source: libloading::Error,
    },
}

/// Opens the shared library at `path`.
///
/// # Safety
/// Loading a library runs its initialisation routines; `path` must point to a trusted DxPortLib
/// build.
pub unsafe fn open(path: &Path) -> Result<Library, LoadError> {
    unsafe { Library::new(path) }.map_err(|source| {
        error!("cannot open {}: {source}", path.display());
        LoadError::Open {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// # Safety
/// `T` must be the function pointer type of the entry point exported as `symbol`.
pub(crate) unsafe fn resolve<T: Copy>(
    library: &Library,
    symbol: &'static str,
    name: &'static str,
) -> Result<T, LoadError> {
    match unsafe { library.get::<T>(symbol.as_bytes()) } {
        Ok(entry) => Ok(*entry),
        Err(source) => {
            error!("cannot resolve {symbol} ({name}): {source}");
            Err(LoadError::Symbol {
                symbol,
                name,
                source,
            })
        }
    }
}

/// Declares one family of native entry points.
///
/// Every entry expands to a function pointer field of the family struct, an [`Operation`]
/// descriptor in `OPERATIONS`, a resolver in `load`, an `extern "C"` declaration for the `link`
/// feature and an argument-recording stand-in for the `echo` feature.
///
/// [`Operation`]: crate::Operation
macro_rules! binding_table {
    (@default) => {
        None
    };

    (@default $default:expr) => {
        Some($default)
    };

    (
        $(#[$table_meta:meta])*
        pub struct $table:ident {
            $(
                $(#[$fn_meta:meta])*
                fn $field:ident as $name:literal = $symbol:literal (
                    $($arg:ident : $ty:ty $(= $default:expr)?),* $(,)?
                ) -> $ret:ty;
            )*
        }
    ) => {
        $(#[$table_meta])*
        #[derive(Clone, Copy)]
        pub struct $table {
            $(
                $(#[$fn_meta])*
                pub $field: unsafe extern "C" fn($($arg: $ty),*) -> $ret,
            )*
        }

        impl $table {
            pub const OPERATIONS: &'static [$crate::Operation] = &[
                $(
                    $crate::Operation {
                        name: $name,
                        rust_name: stringify!($field),
                        symbol: $symbol,
                        params: &[
                            $(
                                $crate::Param {
                                    name: stringify!($arg),
                                    kind: <$ty as $crate::NativeType>::KIND,
                                    default: binding_table!(@default $($default)?),
                                },
                            )*
                        ],
                        returns: <$ret as $crate::NativeType>::KIND,
                    },
                )*
            ];

            /// Resolves every entry point of the family, stopping at the first missing symbol.
            ///
            /// # Safety
            /// `library` must be a DxPortLib build exporting the declared signatures, and it must
            /// outlive the returned table.
            pub unsafe fn load(library: &libloading::Library) -> Result<Self, $crate::LoadError> {
                Ok(Self {
                    $(
                        $field: unsafe { $crate::table::resolve(library, $symbol, $name)? },
                    )*
                })
            }
        }

        impl std::fmt::Debug for $table {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($table))
                    .field("operations", &Self::OPERATIONS.len())
                    .finish_non_exhaustive()
            }
        }

        #[cfg(feature = "link")]
        mod linked {
            #[allow(unused_imports)]
            use super::*;

            unsafe extern "C" {
                $(
                    #[link_name = $symbol]
                    pub fn $field($($arg: $ty),*) -> $ret;
                )*
            }

            impl super::$table {
                #[must_use]
                pub fn linked() -> Self {
                    Self {
                        $($field,)*
                    }
                }
            }
        }

        #[cfg(feature = "echo")]
        pub mod echo {
            #[allow(unused_imports)]
            use super::*;

            $(
                /// Records the call and returns the next queued value.
                ///
                /// # Safety
                /// Text pointers must be null or NUL-terminated, slot pointers null or writable.
                #[allow(unused_unsafe, clippy::too_many_arguments)]
                pub unsafe extern "C" fn $field($($arg: $ty),*) -> $ret {
                    let args = unsafe { vec![$($crate::echo::Echo::echo($arg)),*] };
                    $crate::echo::record($name, args);
                    <$ret as $crate::echo::EchoReturn>::echo_return()
                }
            )*

            impl super::$table {
                #[must_use]
                pub fn echo() -> Self {
                    Self {
                        $($field,)*
                    }
                }
            }
        }
    };
}
