/// 1-bit pixel art; `X` marks a lit cell. Drawn scaled into any rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub rows: &'static [&'static str],
}

impl Sprite {
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_set(&self, col: usize, row: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.as_bytes().get(col))
            .is_some_and(|&b| b == b'X')
    }
}

pub const ALIEN: Sprite = Sprite {
    rows: &[
        "..X.....X..",
        "...X...X...",
        "..XXXXXXX..",
        ".XX.XXX.XX.",
        "XXXXXXXXXXX",
        "X.XXXXXXX.X",
        "X.X.....X.X",
        "...XX.XX...",
    ],
};

pub const SHIP: Sprite = Sprite {
    rows: &[
        "......X......",
        ".....XXX.....",
        ".....XXX.....",
        ".XXXXXXXXXXX.",
        "XXXXXXXXXXXXX",
        "XXXXXXXXXXXXX",
        "XXXXXXXXXXXXX",
        "XXXXXXXXXXXXX",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sprites_are_rectangular() {
        for sprite in [ALIEN, SHIP] {
            let width = sprite.width();
            assert!(sprite.rows.iter().all(|row| row.len() == width));
        }
    }

    #[test]
    fn out_of_range_cells_are_clear() {
        assert!(SHIP.is_set(6, 0));
        assert!(!SHIP.is_set(0, 0));
        assert!(!SHIP.is_set(100, 0));
        assert!(!SHIP.is_set(0, 100));
    }
}
