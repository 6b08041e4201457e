use std::fmt;

/// Opaque identifier of one hexagonal cell at a fixed resolution.
///
/// The raw value is whatever the backing grid uses (an H3 index for `H3Grid`);
/// only a `GridIndex` can interpret it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridCell(u64);

impl GridCell {
    /// Wrap a raw 64-bit cell id without validating it.
    #[inline] pub const fn new(raw: u64) -> Self { Self(raw) }

    /// Get the raw 64-bit cell id.
    #[inline] pub const fn raw(self) -> u64 { self.0 }
}

impl From<u64> for GridCell {
    #[inline] fn from(raw: u64) -> Self { Self(raw) }
}

impl From<GridCell> for u64 {
    #[inline] fn from(cell: GridCell) -> Self { cell.0 }
}

impl From<h3o::CellIndex> for GridCell {
    #[inline] fn from(cell: h3o::CellIndex) -> Self { Self(u64::from(cell)) }
}

/// Lowercase hexadecimal, the usual textual form of an H3 index.
impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_value_round_trips() {
        let cell = GridCell::new(0x8928308280fffff);
        assert_eq!(cell.raw(), 0x8928308280fffff);
        assert_eq!(u64::from(cell), 0x8928308280fffff);
        assert_eq!(GridCell::from(0x8928308280fffff_u64), cell);
    }

    #[test]
    fn displays_as_lowercase_hex() {
        assert_eq!(GridCell::new(0x8928308280fffff).to_string(), "8928308280fffff");
    }

    #[test]
    fn ordering_follows_raw_value() {
        assert!(GridCell::new(1) < GridCell::new(2));
    }
}
