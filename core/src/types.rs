/// Single coordinate axis used for board row/column positions and sizes.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional board position `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Row/column displacements of the eight touching cells.
const DISPLACEMENTS: [(i16, i16); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Iterates the 8-adjacent positions of `center` that fall inside `bounds`.
pub fn neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    let (row, col) = (center.0 as i16, center.1 as i16);
    let (rows, cols) = (bounds.0 as i16, bounds.1 as i16);

    DISPLACEMENTS.into_iter().filter_map(move |(dr, dc)| {
        let (r, c) = (row + dr, col + dc);
        if (0..rows).contains(&r) && (0..cols).contains(&c) {
            Some((r as Coord, c as Coord))
        } else {
            None
        }
    })
}
