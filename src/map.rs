use glam::IVec2;

pub const MAP_WIDTH: i32 = 40;
pub const MAP_HEIGHT: i32 = 60;
pub const SKY_HEIGHT: i32 = 3;
pub const GRASS_LEVEL: i32 = SKY_HEIGHT + 1;
pub const ELEVATOR_SHAFT_X: i32 = MAP_WIDTH - 3;
pub const MAX_ELEVATOR_DEPTH: i32 = MAP_HEIGHT - SKY_HEIGHT - 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileType {
    Border,
    Dirt,
    Empty,
    Grass,
    Ladder,
    Rock { hardness: u8 },
    Sky,
    Treasure { value: u8 },
    Void,
    Water,
}

/// Rectangular tile grid, row-major, y growing downwards.
///
/// `Void` is the out-of-bounds sentinel and is never stored in the grid.
pub struct Map {
    pub size: IVec2,
    tiles: Vec<TileType>,
}

impl Map {
    pub fn new(size: IVec2) -> Self {
        let mut map = Map {
            size,
            tiles: vec![TileType::Dirt; (size.x * size.y) as usize],
        };
        map.init_default_tiles();
        map
    }

    pub fn is_in_bounds(&self, pos: IVec2) -> bool {
        pos.x >= 0 && pos.x < self.size.x && pos.y >= 0 && pos.y < self.size.y
    }

    pub fn tile(&self, pos: IVec2) -> TileType {
        if !self.is_in_bounds(pos) {
            return TileType::Void;
        }
        self.tiles[self.tile_idx(pos)]
    }

    pub fn set_tile(&mut self, pos: IVec2, tile: TileType) {
        assert!(self.is_in_bounds(pos), "tile write out of bounds: {pos}");
        let idx = self.tile_idx(pos);
        self.tiles[idx] = tile;
    }

    fn tile_idx(&self, pos: IVec2) -> usize {
        (pos.x + pos.y * self.size.x) as usize
    }

    fn init_default_tiles(&mut self) {
        let w = self.size.x;
        let h = self.size.y;

        // Border ring.
        for x in 0..w {
            self.set_tile(IVec2::new(x, 0), TileType::Border);
            self.set_tile(IVec2::new(x, h - 1), TileType::Border);
        }
        for y in 0..h {
            self.set_tile(IVec2::new(0, y), TileType::Border);
            self.set_tile(IVec2::new(w - 1, y), TileType::Border);
        }

        // Sky, then the grass surface below it.
        for x in 1..w - 1 {
            for y in 1..=SKY_HEIGHT {
                self.set_tile(IVec2::new(x, y), TileType::Sky);
            }
            self.set_tile(IVec2::new(x, GRASS_LEVEL), TileType::Grass);
        }

        // Two starter ladders reaching down from the surface.
        for x in [3, w / 2] {
            for y in GRASS_LEVEL..=GRASS_LEVEL + 2 {
                self.set_tile(IVec2::new(x, y), TileType::Ladder);
            }
        }

        // Elevator shaft.
        // w-1 is the border, w-2 a column of dirt, w-3 the shaft itself.
        for y in GRASS_LEVEL..h - 1 {
            self.set_tile(IVec2::new(w - 3, y), TileType::Empty);
        }

        // Rock scenery along the shaft, getting harder with depth.
        for i in 0..=3 {
            self.set_tile(
                IVec2::new(w - 4, 10 * i + 10),
                TileType::Rock { hardness: i as u8 },
            );
        }

        // Fixed deposits and a water pocket.
        let deposits = [
            (IVec2::new(7, 20), TileType::Treasure { value: 1 }),
            (IVec2::new(15, 33), TileType::Treasure { value: 2 }),
            (IVec2::new(26, 47), TileType::Treasure { value: 3 }),
            (IVec2::new(5, 30), TileType::Water),
            (IVec2::new(6, 30), TileType::Water),
            (IVec2::new(7, 30), TileType::Water),
        ];
        for (pos, tile) in deposits {
            if self.is_in_bounds(pos) {
                self.set_tile(pos, tile);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout() {
        let map = Map::new(IVec2::new(30, 50));
        assert_eq!(map.tile(IVec2::new(0, 0)), TileType::Border);
        assert_eq!(map.tile(IVec2::new(1, 1)), TileType::Sky);
        assert_eq!(map.tile(IVec2::new(1, GRASS_LEVEL)), TileType::Grass);
        assert_eq!(map.tile(IVec2::new(1, GRASS_LEVEL + 1)), TileType::Dirt);
        assert_eq!(map.tile(IVec2::new(29, 19)), TileType::Border);
        // Starter ladders and the shaft.
        assert_eq!(map.tile(IVec2::new(3, GRASS_LEVEL)), TileType::Ladder);
        assert_eq!(map.tile(IVec2::new(15, GRASS_LEVEL + 2)), TileType::Ladder);
        assert_eq!(map.tile(IVec2::new(27, 10)), TileType::Empty);
        assert_eq!(map.tile(IVec2::new(27, 48)), TileType::Empty);
        // Scenery.
        assert_eq!(map.tile(IVec2::new(26, 10)), TileType::Rock { hardness: 0 });
        assert_eq!(map.tile(IVec2::new(26, 40)), TileType::Rock { hardness: 3 });
        assert_eq!(map.tile(IVec2::new(7, 20)), TileType::Treasure { value: 1 });
        assert_eq!(map.tile(IVec2::new(5, 30)), TileType::Water);
    }

    #[test]
    fn out_of_bounds_reads_are_void() {
        let map = Map::new(IVec2::new(30, 50));
        assert_eq!(map.tile(IVec2::new(-1, -1)), TileType::Void);
        assert_eq!(map.tile(IVec2::new(30, 20)), TileType::Void);
        assert_eq!(map.tile(IVec2::new(20, 50)), TileType::Void);
    }

    #[test]
    fn set_tile_overwrites() {
        let mut map = Map::new(IVec2::new(30, 50));
        let pos = IVec2::new(2, 10);
        assert_eq!(map.tile(pos), TileType::Dirt);
        map.set_tile(pos, TileType::Rock { hardness: 2 });
        assert_eq!(map.tile(pos), TileType::Rock { hardness: 2 });
    }

    #[test]
    #[should_panic]
    fn set_tile_out_of_bounds_panics() {
        let mut map = Map::new(IVec2::new(30, 50));
        map.set_tile(IVec2::new(30, 0), TileType::Empty);
    }
}
