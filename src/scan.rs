//! The order in which pixels are laid out in a hex array.
//!
//! Arrays are row-major: the first `width` entries are the top row from left to right, the next
//! `width` entries are the second row, and so on. Everything that walks pixels into or out of an
//! array goes through [`ScanOrder`] so the two directions can't drift apart.

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ScanOrder {
    width: u32,
    height: u32,
}

impl ScanOrder {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Number of entries in an array covering the whole grid.
    pub const fn len(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position in the array of the pixel at `(x, y)`.
    pub fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        usize::try_from(y as u64 * self.width as u64 + x as u64).ok()
    }

    /// All coordinates of the grid, in array order.
    pub fn coords(&self) -> Coords {
        Coords {
            order: *self,
            x: 0,
            y: 0,
        }
    }
}

pub struct Coords {
    order: ScanOrder,
    x: u32,
    y: u32,
}

impl Iterator for Coords {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.order.width == 0 || self.y >= self.order.height {
            return None;
        }

        let item = (self.x, self.y);
        self.x += 1;
        if self.x == self.order.width {
            self.x = 0;
            self.y += 1;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.order.width == 0 || self.y >= self.order.height {
            0
        } else {
            self.order.len() - (self.y as u64 * self.order.width as u64 + self.x as u64)
        };
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
