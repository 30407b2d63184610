use std::fmt;
use std::str::FromStr;

/// # Variants
/// The three instruction set flavours this interpreter understands.
///
/// - `Chip8` the original COSMAC VIP interpreter
/// - `SuperChip` SUPER-CHIP 1.1; adds high resolution, scrolling and the halt opcode
/// - `XoChip` XO-CHIP; a superset of SUPER-CHIP with its own quirks
///
/// A variant is chosen when a machine is built and never changes afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Variant {
    Chip8,
    SuperChip,
    XoChip,
}

impl Default for Variant {
    fn default() -> Self {
        Variant::Chip8
    }
}

impl Variant {
    pub fn quirks(self) -> Quirks {
        quirks(self)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::Chip8 => "Original",
            Variant::SuperChip => "Super-chip 1.1",
            Variant::XoChip => "XO-Chip",
        };
        f.write_str(name)
    }
}

impl FromStr for Variant {
    type Err = String;

    /// Accepts the names used on the command line; whitespace and case are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        match name.as_str() {
            "original" | "chip8" | "chip-8" => Ok(Variant::Chip8),
            "super" | "schip" | "superchip" => Ok(Variant::SuperChip),
            "xo" | "xochip" | "xo-chip" => Ok(Variant::XoChip),
            _ => Err(format!(
                "unknown spec `{}`; expected one of original, super, xo",
                s
            )),
        }
    }
}

/// # Quirks
/// Behaviour that differs between variants for an otherwise shared opcode.
///
/// Every operation that behaves differently per variant asks this table rather than the variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Quirks {
    /// 8XY6/8XYE copy Vy into Vx before shifting
    pub shift_copies_source: bool,
    /// 8XY1/8XY2/8XY3 clear VF
    pub logic_resets_flag: bool,
    /// FX55/FX65 leave I pointing past the last register transferred
    pub increments_index_on_bulk_transfer: bool,
    /// BNNN adds the register named by the high nibble of NNN instead of V0
    pub offset_jump_uses_vx: bool,
    /// DXYN drops pixels past the edge of the screen instead of wrapping them
    pub clips_at_edge: bool,
}

pub fn quirks(variant: Variant) -> Quirks {
    match variant {
        Variant::Chip8 => Quirks {
            shift_copies_source: true,
            logic_resets_flag: true,
            increments_index_on_bulk_transfer: true,
            offset_jump_uses_vx: false,
            clips_at_edge: true,
        },
        Variant::SuperChip => Quirks {
            shift_copies_source: false,
            logic_resets_flag: false,
            increments_index_on_bulk_transfer: false,
            offset_jump_uses_vx: true,
            clips_at_edge: true,
        },
        Variant::XoChip => Quirks {
            shift_copies_source: false,
            logic_resets_flag: false,
            increments_index_on_bulk_transfer: false,
            offset_jump_uses_vx: false,
            clips_at_edge: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chip8_quirks() {
        let q = quirks(Variant::Chip8);
        assert!(q.shift_copies_source);
        assert!(q.logic_resets_flag);
        assert!(q.increments_index_on_bulk_transfer);
        assert!(!q.offset_jump_uses_vx);
        assert!(q.clips_at_edge);
    }

    #[test]
    fn test_superchip_quirks() {
        let q = quirks(Variant::SuperChip);
        assert!(!q.shift_copies_source);
        assert!(!q.logic_resets_flag);
        assert!(!q.increments_index_on_bulk_transfer);
        assert!(q.offset_jump_uses_vx);
        assert!(q.clips_at_edge);
    }

    #[test]
    fn test_xochip_quirks() {
        let q = quirks(Variant::XoChip);
        assert!(!q.shift_copies_source);
        assert!(!q.logic_resets_flag);
        assert!(!q.increments_index_on_bulk_transfer);
        assert!(!q.offset_jump_uses_vx);
        assert!(!q.clips_at_edge);
    }

    #[test]
    fn test_parses_cli_names() {
        assert_eq!("original".parse::<Variant>(), Ok(Variant::Chip8));
        assert_eq!(" Super ".parse::<Variant>(), Ok(Variant::SuperChip));
        assert_eq!("XO".parse::<Variant>(), Ok(Variant::XoChip));
        assert!("cosmac".parse::<Variant>().is_err());
    }
}
