#![allow(clippy::too_many_arguments)]

#[macro_use]
mod table;

pub mod archive;
pub mod consts;
mod descriptor;
#[cfg(feature = "echo")]
pub mod echo;
pub mod file;
pub mod font;
pub mod graph;
pub mod input;
pub mod sound;
pub mod system;
pub mod window;

pub use archive::ArchiveFns;
pub use descriptor::{NativeType, Operation, Param, ValueKind};
pub use file::FileFns;
pub use font::FontFns;
pub use graph::GraphFns;
pub use input::InputFns;
pub use libloading::Library;
pub use sound::SoundFns;
pub use system::SystemFns;
pub use table::{LoadError, open};
pub use window::WindowFns;

use log::debug;

/// The whole binding table, one function pointer per native entry point.
///
/// The table is plain data. It does not keep the library alive: whoever builds it from a
/// [`Library`] must keep that library loaded for as long as the table is used.
#[derive(Debug, Clone, Copy)]
pub struct Api {
    pub system: SystemFns,
    pub file: FileFns,
    pub archive: ArchiveFns,
    pub input: InputFns,
    pub window: WindowFns,
    pub graph: GraphFns,
    pub font: FontFns,
    pub sound: SoundFns,
}

impl Api {
    /// Resolves every entry point, stopping at the first missing symbol.
    ///
    /// # Safety
    /// `library` must be a DxPortLib build with the declared signatures and must outlive the
    /// returned table.
    pub unsafe fn load(library: &Library) -> Result<Self, LoadError> {
        let api = unsafe {
            Self {
                system: SystemFns::load(library)?,
                file: FileFns::load(library)?,
                archive: ArchiveFns::load(library)?,
                input: InputFns::load(library)?,
                window: WindowFns::load(library)?,
                graph: GraphFns::load(library)?,
                font: FontFns::load(library)?,
                sound: SoundFns::load(library)?,
            }
        };
        debug!("resolved {} native entry points", operations().count());
        Ok(api)
    }

    #[cfg(feature = "link")]
    #[must_use]
    pub fn linked() -> Self {
        Self {
            system: SystemFns::linked(),
            file: FileFns::linked(),
            archive: ArchiveFns::linked(),
            input: InputFns::linked(),
            window: WindowFns::linked(),
            graph: GraphFns::linked(),
            font: FontFns::linked(),
            sound: SoundFns::linked(),
        }
    }

    /// A table whose entries record their arguments instead of calling native code.
    #[cfg(feature = "echo")]
    #[must_use]
    pub fn echo() -> Self {
        Self {
            system: SystemFns::echo(),
            file: FileFns::echo(),
            archive: ArchiveFns::echo(),
            input: InputFns::echo(),
            window: WindowFns::echo(),
            graph: GraphFns::echo(),
            font: FontFns::echo(),
            sound: SoundFns::echo(),
        }
    }
}

/// Family name and descriptors, in the order of [`Api`]'s fields.
pub const FAMILIES: [(&str, &[Operation]); 8] = [
    ("main", SystemFns::OPERATIONS),
    ("file", FileFns::OPERATIONS),
    ("archive", ArchiveFns::OPERATIONS),
    ("input", InputFns::OPERATIONS),
    ("window", WindowFns::OPERATIONS),
    ("graph", GraphFns::OPERATIONS),
    ("font", FontFns::OPERATIONS),
    ("sound", SoundFns::OPERATIONS),
];

pub fn operations() -> impl Iterator<Item = &'static Operation> {
    FAMILIES
        .iter()
        .flat_map(|&(_, operations)| operations.iter())
}

/// Looks up a descriptor by logical name, e.g. `DrawGraph`.
#[must_use]
pub fn find_operation(name: &str) -> Option<&'static Operation> {
    operations().find(|operation| operation.name == name)
}
