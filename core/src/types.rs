/// Single coordinate axis, used for the board side and for positions.
pub type Coord = u8;

/// Count type used for mine counts and cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`, `x` being the column and `y` the row.
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

/// Number of cells on a square board of side `size`.
pub const fn square(size: Coord) -> CellCount {
    let size = size as CellCount;
    size.saturating_mul(size)
}

/// Iterates the up-to-8 cells around `center` that lie on a square board of side `size`.
pub fn neighbors(center: Coord2, size: Coord) -> Neighbors {
    Neighbors {
        center,
        size,
        index: 0,
    }
}

const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

fn offset_axis(value: Coord, delta: i8, size: Coord) -> Option<Coord> {
    value.checked_add_signed(delta).filter(|&next| next < size)
}

#[derive(Clone, Debug)]
pub struct Neighbors {
    center: Coord2,
    size: Coord,
    index: usize,
}

impl Iterator for Neighbors {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&(dx, dy)) = OFFSETS.get(self.index) {
            self.index += 1;
            let (x, y) = self.center;
            if let (Some(nx), Some(ny)) = (
                offset_axis(x, dx, self.size),
                offset_axis(y, dy, self.size),
            ) {
                return Some((nx, ny));
            }
        }
        None
    }
}
