use std::fmt;

use glam::IVec2;

use crate::elevator::Elevator;
use crate::map::{
    Map, TileType, ELEVATOR_SHAFT_X, GRASS_LEVEL, MAP_HEIGHT, MAP_WIDTH, MAX_ELEVATOR_DEPTH,
    SKY_HEIGHT,
};
use crate::player::Player;
use crate::{Engine, EngineProvider};

pub const PLAYER_START: IVec2 = IVec2::new(MAP_WIDTH - 5, SKY_HEIGHT);

const TREASURE_BASE_VALUE: i32 = 200;
const LADDER_ENERGY: i32 = 5;
const RESCUE_FEE: i32 = 250;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Parses the single-letter wire token used by embedding hosts.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "l" => Some(Direction::Left),
            "r" => Some(Direction::Right),
            "u" => Some(Direction::Up),
            "d" => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
        }
    }
}

/// The mining game: a diggable map, a player, and the shaft elevator.
///
/// One call to [`MineGame::move_player`] is one game turn: either the player
/// falls, or the command resolves; afterwards the elevator advances one step
/// towards its called depth.
pub struct MineGame {
    map: Map,
    player: Player,
    elevator: Elevator,
}

impl MineGame {
    pub fn new() -> Self {
        MineGame {
            map: Map::new(IVec2::new(MAP_WIDTH, MAP_HEIGHT)),
            player: Player::new(PLAYER_START),
            elevator: Elevator::new(MAX_ELEVATOR_DEPTH),
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn move_player(&mut self, command: Direction) {
        if self.apply_gravity() {
            // The fall consumes the turn.
            self.tick_elevator();
            return;
        }

        if self.player_in_car() && matches!(command, Direction::Up | Direction::Down) {
            let called = self.elevator.depth() + command.delta().y;
            self.elevator.set_target_depth(called);
        } else if command == Direction::Up
            && self.map.tile(self.player.position) != TileType::Ladder
        {
            // Can't climb open air.
        } else {
            self.try_enter(self.player.position + command.delta());
        }

        self.tick_elevator();
    }

    /// Raised hammers break rocks, at an energy cost scaling with hardness.
    pub fn set_rock_hammer(&mut self, raised: bool) {
        self.player.rock_hammer = raised;
    }

    /// Converts the player's own (empty) tile into a ladder rung.
    pub fn place_ladder(&mut self) {
        let pos = self.player.position;
        if pos.x < ELEVATOR_SHAFT_X
            && self.map.tile(pos) == TileType::Empty
            && self.player.use_energy(LADDER_ENERGY)
        {
            self.map.set_tile(pos, TileType::Ladder);
        }
    }

    /// Paid teleport out of the mine and into the elevator car, which is
    /// recalled to the surface.
    pub fn rescue(&mut self) {
        let pos = self.player.position;
        if pos.x < ELEVATOR_SHAFT_X && pos.y > GRASS_LEVEL {
            self.player.pay_money(RESCUE_FEE);
            self.player.position = IVec2::new(ELEVATOR_SHAFT_X, SKY_HEIGHT + self.elevator.depth());
            self.elevator.set_target_depth(0);
        }
    }

    fn apply_gravity(&mut self) -> bool {
        let pos = self.player.position;
        if self.map.tile(pos) == TileType::Ladder || self.player_in_car() {
            return false;
        }
        let below = pos + IVec2::Y;
        if matches!(self.map.tile(below), TileType::Empty | TileType::Sky) {
            self.player.position = below;
            return true;
        }
        false
    }

    fn try_enter(&mut self, target: IVec2) {
        match self.map.tile(target) {
            TileType::Empty | TileType::Sky | TileType::Ladder => {
                self.player.position = target;
            }
            TileType::Dirt | TileType::Grass => {
                self.map.set_tile(target, TileType::Empty);
                self.player.position = target;
            }
            TileType::Treasure { value } => {
                self.player.receive_money(TREASURE_BASE_VALUE * i32::from(value));
                self.map.set_tile(target, TileType::Empty);
                self.player.position = target;
            }
            TileType::Rock { hardness } => {
                if self.player.rock_hammer && self.player.use_energy(i32::from(hardness)) {
                    self.map.set_tile(target, TileType::Empty);
                    self.player.position = target;
                }
            }
            TileType::Border | TileType::Water | TileType::Void => {}
        }
    }

    fn player_in_car(&self) -> bool {
        self.player.position == self.car_position()
    }

    fn car_position(&self) -> IVec2 {
        IVec2::new(ELEVATOR_SHAFT_X, SKY_HEIGHT + self.elevator.depth())
    }

    fn tick_elevator(&mut self) {
        let riding = self.player_in_car();
        let depth = self.elevator.depth();
        let new_depth = self.elevator.move_towards_target();
        if riding {
            self.player.position.y += new_depth - depth;
        }
    }
}

impl Default for MineGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MineGame {
    fn apply(&mut self, command: &str) {
        match Direction::from_token(command) {
            Some(direction) => self.move_player(direction),
            None => log::warn!("ignoring unknown command token {command:?}"),
        }
    }

    fn text_repr(&self) -> String {
        self.to_string()
    }
}

/// The concrete acquisition seam; building a fresh game cannot fail, the
/// `Result` belongs to the provider contract.
#[derive(Default)]
pub struct MineProvider;

impl EngineProvider for MineProvider {
    type Engine = MineGame;

    async fn acquire(self) -> anyhow::Result<MineGame> {
        Ok(MineGame::new())
    }
}

fn tile_glyph(tile: TileType) -> char {
    match tile {
        TileType::Sky => ' ',
        TileType::Empty => '░',
        TileType::Dirt => '▒',
        TileType::Grass => '▓',
        TileType::Border => '█',
        TileType::Ladder => 'H',
        TileType::Rock { .. } => '◆',
        TileType::Treasure { .. } => '$',
        TileType::Water => '~',
        TileType::Void => '?',
    }
}

impl fmt::Display for MineGame {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let car = self.car_position();
        let mut out = String::new();
        for y in 0..self.map.size.y {
            for x in 0..self.map.size.x {
                let pos = IVec2::new(x, y);
                if pos == self.player.position {
                    out.push('*');
                } else if pos == car {
                    out.push('=');
                } else {
                    out.push(tile_glyph(self.map.tile(pos)));
                }
            }
            out.push('\n');
        }
        writeln!(
            f,
            "Money: {}  Energy: {}",
            self.player.money(),
            self.player.energy()
        )?;
        write!(f, "{}", out)
    }
}
