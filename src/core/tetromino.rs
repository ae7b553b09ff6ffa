//! Tetromino catalog - shape and color definitions
//!
//! Each of the seven kinds carries four precomputed rotation states. A state
//! is a square occupancy matrix (side 2-4 depending on the kind) whose origin
//! is the top-left corner of the bounding box; rotations are stored rather
//! than computed because only four discrete orientations exist. Each state is
//! the previous one rotated 90 degrees clockwise (a unit test pins this).

use crate::types::Rgb;

/// Number of rotation states per kind.
pub const ROTATION_STATES: usize = 4;

/// One rotation state: a square boolean matrix in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationGrid {
    side: i32,
    cells: &'static [u8],
}

impl RotationGrid {
    const fn new(side: i32, cells: &'static [u8]) -> Self {
        Self { side, cells }
    }

    /// Side length of the bounding matrix (2-4).
    pub fn side(&self) -> i32 {
        self.side
    }

    /// Whether the sub-cell at (row, col) within the matrix is occupied.
    pub fn filled(&self, row: i32, col: i32) -> bool {
        self.cells[(row * self.side + col) as usize] != 0
    }

    /// Iterate occupied sub-cells as (row, col) offsets from the origin.
    pub fn cells(self) -> impl Iterator<Item = (i32, i32)> {
        let side = self.side;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, v)| **v != 0)
            .map(move |(i, _)| (i as i32 / side, i as i32 % side))
    }
}

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl Kind {
    pub const ALL: [Kind; 7] = [
        Kind::I,
        Kind::O,
        Kind::T,
        Kind::S,
        Kind::Z,
        Kind::J,
        Kind::L,
    ];

    /// The four rotation states for this kind, in rotation-index order.
    pub fn shapes(self) -> &'static [RotationGrid; ROTATION_STATES] {
        match self {
            Kind::I => &I_SHAPES,
            Kind::O => &O_SHAPES,
            Kind::T => &T_SHAPES,
            Kind::S => &S_SHAPES,
            Kind::Z => &Z_SHAPES,
            Kind::J => &J_SHAPES,
            Kind::L => &L_SHAPES,
        }
    }

    /// Display color for this kind.
    pub fn color(self) -> Rgb {
        match self {
            Kind::I => Rgb::new(80, 220, 220),
            Kind::O => Rgb::new(240, 220, 80),
            Kind::T => Rgb::new(200, 120, 220),
            Kind::S => Rgb::new(100, 220, 120),
            Kind::Z => Rgb::new(220, 80, 80),
            Kind::J => Rgb::new(80, 120, 220),
            Kind::L => Rgb::new(255, 165, 0),
        }
    }
}

#[rustfmt::skip]
const I_SHAPES: [RotationGrid; 4] = [
    RotationGrid::new(4, &[
        0, 0, 0, 0,
        1, 1, 1, 1,
        0, 0, 0, 0,
        0, 0, 0, 0,
    ]),
    RotationGrid::new(4, &[
        0, 0, 1, 0,
        0, 0, 1, 0,
        0, 0, 1, 0,
        0, 0, 1, 0,
    ]),
    RotationGrid::new(4, &[
        0, 0, 0, 0,
        0, 0, 0, 0,
        1, 1, 1, 1,
        0, 0, 0, 0,
    ]),
    RotationGrid::new(4, &[
        0, 1, 0, 0,
        0, 1, 0, 0,
        0, 1, 0, 0,
        0, 1, 0, 0,
    ]),
];

#[rustfmt::skip]
const O_SHAPES: [RotationGrid; 4] = [
    RotationGrid::new(2, &[
        1, 1,
        1, 1,
    ]),
    RotationGrid::new(2, &[
        1, 1,
        1, 1,
    ]),
    RotationGrid::new(2, &[
        1, 1,
        1, 1,
    ]),
    RotationGrid::new(2, &[
        1, 1,
        1, 1,
    ]),
];

#[rustfmt::skip]
const T_SHAPES: [RotationGrid; 4] = [
    RotationGrid::new(3, &[
        0, 1, 0,
        1, 1, 1,
        0, 0, 0,
    ]),
    RotationGrid::new(3, &[
        0, 1, 0,
        0, 1, 1,
        0, 1, 0,
    ]),
    RotationGrid::new(3, &[
        0, 0, 0,
        1, 1, 1,
        0, 1, 0,
    ]),
    RotationGrid::new(3, &[
        0, 1, 0,
        1, 1, 0,
        0, 1, 0,
    ]),
];

#[rustfmt::skip]
const S_SHAPES: [RotationGrid; 4] = [
    RotationGrid::new(3, &[
        0, 1, 1,
        1, 1, 0,
        0, 0, 0,
    ]),
    RotationGrid::new(3, &[
        0, 1, 0,
        0, 1, 1,
        0, 0, 1,
    ]),
    RotationGrid::new(3, &[
        0, 0, 0,
        0, 1, 1,
        1, 1, 0,
    ]),
    RotationGrid::new(3, &[
        1, 0, 0,
        1, 1, 0,
        0, 1, 0,
    ]),
];

#[rustfmt::skip]
const Z_SHAPES: [RotationGrid; 4] = [
    RotationGrid::new(3, &[
        1, 1, 0,
        0, 1, 1,
        0, 0, 0,
    ]),
    RotationGrid::new(3, &[
        0, 0, 1,
        0, 1, 1,
        0, 1, 0,
    ]),
    RotationGrid::new(3, &[
        0, 0, 0,
        1, 1, 0,
        0, 1, 1,
    ]),
    RotationGrid::new(3, &[
        0, 1, 0,
        1, 1, 0,
        1, 0, 0,
    ]),
];

#[rustfmt::skip]
const J_SHAPES: [RotationGrid; 4] = [
    RotationGrid::new(3, &[
        1, 0, 0,
        1, 1, 1,
        0, 0, 0,
    ]),
    RotationGrid::new(3, &[
        0, 1, 1,
        0, 1, 0,
        0, 1, 0,
    ]),
    RotationGrid::new(3, &[
        0, 0, 0,
        1, 1, 1,
        0, 0, 1,
    ]),
    RotationGrid::new(3, &[
        0, 1, 0,
        0, 1, 0,
        1, 1, 0,
    ]),
];

#[rustfmt::skip]
const L_SHAPES: [RotationGrid; 4] = [
    RotationGrid::new(3, &[
        0, 0, 1,
        1, 1, 1,
        0, 0, 0,
    ]),
    RotationGrid::new(3, &[
        0, 1, 0,
        0, 1, 0,
        0, 1, 1,
    ]),
    RotationGrid::new(3, &[
        0, 0, 0,
        1, 1, 1,
        1, 0, 0,
    ]),
    RotationGrid::new(3, &[
        1, 1, 0,
        0, 1, 0,
        0, 1, 0,
    ]),
];
