use std::{
    fmt,
    os::raw::{c_char, c_double, c_float, c_int, c_longlong, c_void},
};

/// How a value crosses the call boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// 32-bit signed integer: handles, flags, counts and colors.
    Int,
    /// Single precision coordinate.
    Float,
    /// Double precision scale, angle or extend rate.
    Double,
    /// 64-bit signed integer, used by file sizes and offsets.
    LongLong,
    /// NUL-terminated narrow string, UTF-8 encoded.
    Text,
    /// Caller-provided `int` storage the native call writes into.
    IntSlot,
    /// Caller-provided byte buffer.
    Buffer,
}

impl ValueKind {
    #[must_use]
    pub const fn c_name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Double => "double",
            Self::LongLong => "long long",
            Self::Text => "const char *",
            Self::IntSlot => "int *",
            Self::Buffer => "void *",
        }
    }
}

pub trait NativeType {
    const KIND: ValueKind;
}

macro_rules! impl_native_type {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl NativeType for $ty {
                const KIND: ValueKind = ValueKind::$kind;
            }
        )*
    };
}

impl_native_type!(
    c_int => Int,
    c_float => Float,
    c_double => Double,
    c_longlong => LongLong,
    *const c_char => Text,
    *mut c_int => IntSlot,
    *mut c_char => Buffer,
    *mut c_void => Buffer,
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Param {
    pub name: &'static str,
    pub kind: ValueKind,
    /// Value applied when the caller does not override the parameter.
    pub default: Option<c_int>,
}

/// Descriptor of one bound native function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operation {
    /// Stable logical name, e.g. `DrawGraph`.
    pub name: &'static str,
    /// Name of the function pointer field, e.g. `draw_graph`.
    pub rust_name: &'static str,
    /// Exported native symbol, e.g. `DxLib_DrawGraph`.
    pub symbol: &'static str,
    pub params: &'static [Param],
    pub returns: ValueKind,
}

impl Operation {
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&'static Param> {
        self.params.iter().find(|param| param.name == name)
    }

    /// Number of leading parameters without a documented default.
    #[must_use]
    pub fn required_params(&self) -> usize {
        self.params
            .iter()
            .take_while(|param| param.default.is_none())
            .count()
    }

    #[must_use]
    pub fn has_output_slots(&self) -> bool {
        self.params
            .iter()
            .any(|param| param.kind == ValueKind::IntSlot)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}(", self.returns.c_name(), self.symbol)?;
        for (index, param) in self.params.iter().enumerate() {
            if index != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} {}", param.kind.c_name(), param.name)?;
            if let Some(default) = param.default {
                write!(f, " = {default}")?;
            }
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: Operation = Operation {
        name: "DrawLine",
        rust_name: "draw_line",
        symbol: "DxLib_DrawLine",
        params: &[
            Param {
                name: "x1",
                kind: ValueKind::Int,
                default: None,
            },
            Param {
                name: "color",
                kind: ValueKind::Int,
                default: None,
            },
            Param {
                name: "thickness",
                kind: ValueKind::Int,
                default: Some(1),
            },
        ],
        returns: ValueKind::Int,
    };

    #[test]
    fn display_as_c_prototype() {
        assert_eq!(
            LINE.to_string(),
            "int DxLib_DrawLine(int x1, int color, int thickness = 1)"
        );
    }

    #[test]
    fn required_params_stop_at_first_default() {
        assert_eq!(LINE.required_params(), 2);
        assert_eq!(LINE.param("thickness").and_then(|p| p.default), Some(1));
        assert!(LINE.param("missing").is_none());
        assert!(!LINE.has_output_slots());
    }
}
