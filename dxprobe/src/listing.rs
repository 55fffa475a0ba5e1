use dxportlib::sys::{
    self, FAMILIES,
    consts::{self, Family},
};

/// One header per family, then one C prototype per entry point.
pub fn symbols() -> Vec<String> {
    let mut lines = Vec::with_capacity(sys::operations().count() + FAMILIES.len());
    for (family, operations) in FAMILIES {
        lines.push(format!("[{family}] {} entry points", operations.len()));
        lines.extend(
            operations
                .iter()
                .map(|operation| format!("  {:<32} {operation}", operation.name)),
        );
    }
    lines
}

/// Case-insensitive match on the family name, e.g. `blendmode`.
pub fn parse_family(name: &str) -> Option<Family> {
    Family::ALL
        .into_iter()
        .find(|family| format!("{family:?}").eq_ignore_ascii_case(name))
}

pub fn constants(only: Option<Family>) -> Vec<String> {
    consts::CONSTANTS
        .iter()
        .filter(|constant| only.is_none_or(|family| constant.family == family))
        .map(|constant| {
            format!(
                "{:<12} {:<28} {:>11} {:#010x}",
                format!("{:?}", constant.family),
                constant.name,
                constant.value,
                constant.value,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_cover_every_family() {
        let lines = symbols();
        let headers: Vec<_> = lines.iter().filter(|line| line.starts_with('[')).collect();
        assert_eq!(headers.len(), FAMILIES.len());
        assert_eq!(lines.len(), sys::operations().count() + FAMILIES.len());
        assert!(
            lines
                .iter()
                .any(|line| line.contains("int DxLib_SetGraphMode(") && line.contains("fps = 60"))
        );
    }

    #[test]
    fn family_names() {
        assert_eq!(parse_family("blendmode"), Some(Family::BlendMode));
        assert_eq!(parse_family("PadInput"), Some(Family::PadInput));
        assert_eq!(parse_family("pad"), None);
    }

    #[test]
    fn filtered_constants() {
        let lines = constants(Some(Family::SeekOrigin));
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("SEEK_SET"));
        assert!(lines[2].ends_with("0x00000002"));

        assert_eq!(constants(None).len(), consts::CONSTANTS.len());
    }
}
