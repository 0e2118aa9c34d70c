pub(crate) mod chain;
pub(crate) mod direction;
pub(crate) mod food;
pub(crate) mod grid;
pub(crate) mod rules;
use self::chain::Chain;
use self::direction::Direction;
use self::food::Food;
use self::grid::{Bounds, BoundsCheck, Cell};
use crate::app::Exit;
use crate::consts;
use crate::input::{InputEvent, Key};
use rand::{rngs::StdRng, RngCore};
use tracing::{debug, info};

/// Gameplay parameters fixed for the lifetime of a `Game`
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Settings {
    /// Width & height of the grid in cells
    pub(crate) grid_size: u16,

    /// Minimum distance between a freshly spawned snake and the grid's edges
    pub(crate) spawn_margin: u16,

    pub(crate) bounds_check: BoundsCheck,
}

impl Settings {
    pub(crate) fn bounds(&self) -> Bounds {
        Bounds::new(self.grid_size, self.bounds_check)
    }
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            grid_size: consts::DEFAULT_GRID_SIZE,
            spawn_margin: consts::DEFAULT_SPAWN_MARGIN,
            bounds_check: BoundsCheck::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Phase {
    #[default]
    Playing,
    /// The snake has hit itself or left the grid.  Only a reset leaves this
    /// phase.
    GameOver,
}

/// Session status
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct GameState {
    pub(crate) phase: Phase,

    /// Set when the player asks for a new session; acted on (and cleared) at
    /// the start of the next tick
    pub(crate) reset_requested: bool,
}

/// What happened during a tick
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum TickOutcome {
    Running,
    GameOver,
}

/// Everything a renderer needs to draw one frame
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snapshot {
    /// Positions of the snake's segments from head to tail
    pub(crate) chain_positions: Vec<Cell>,

    /// The direction the head is facing
    pub(crate) heading: Direction,

    pub(crate) food_position: Cell,

    pub(crate) grid_size: u16,

    pub(crate) phase: Phase,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = StdRng> {
    rng: R,
    settings: Settings,
    chain: Chain,
    food: Food,
    state: GameState,
    /// The most recent direction requested since the last tick
    pending_turn: Option<Direction>,
}

impl<R: RngCore> Game<R> {
    /// Start a new session with a freshly spawned snake & food
    pub(crate) fn new(settings: Settings, mut rng: R) -> Game<R> {
        let chain = new_chain(settings, &mut rng);
        let mut food = Food::default();
        food.place(settings.grid_size, &mut rng);
        Game {
            rng,
            settings,
            chain,
            food,
            state: GameState::default(),
            pending_turn: None,
        }
    }

    /// Run one step of the simulation.
    pub(crate) fn tick(&mut self) -> TickOutcome {
        if self.state.reset_requested {
            self.reset();
        } else if self.state.phase == Phase::GameOver {
            return TickOutcome::GameOver;
        }
        if rules::food_eaten(&self.chain, &self.food) {
            self.chain.grow();
            self.food.place(self.settings.grid_size, &mut self.rng);
            debug!(
                length = self.chain.len(),
                food = %self.food.position,
                "Snake ate food"
            );
        }
        if rules::game_over(&self.chain, self.settings.bounds()) {
            info!(
                length = self.chain.len(),
                head = %self.chain.head().position,
                "Game over"
            );
            self.state.phase = Phase::GameOver;
            return TickOutcome::GameOver;
        }
        if let Some(direction) = self.pending_turn.take() {
            if !self.chain.set_head_direction(direction) {
                debug!(?direction, "Ignoring reversal of the snake's direction");
            }
        }
        self.chain.advance();
        TickOutcome::Running
    }

    fn reset(&mut self) {
        info!("Starting new session");
        self.chain = new_chain(self.settings, &mut self.rng);
        self.food.place(self.settings.grid_size, &mut self.rng);
        self.state = GameState::default();
    }
}

impl<R> Game<R> {
    /// Buffer an input event for the next tick.  Returns `Some` if the player
    /// asked to leave the game.
    pub(crate) fn handle_event(&mut self, event: InputEvent) -> Option<Exit> {
        match event {
            InputEvent::Quit => return Some(Exit::Quit),
            InputEvent::KeyDown(Key::Up) => self.pending_turn = Some(Direction::Up),
            InputEvent::KeyDown(Key::Down) => self.pending_turn = Some(Direction::Down),
            InputEvent::KeyDown(Key::Left) => self.pending_turn = Some(Direction::Left),
            InputEvent::KeyDown(Key::Right) => self.pending_turn = Some(Direction::Right),
            InputEvent::KeyDown(Key::Reset) => self.state.reset_requested = true,
            InputEvent::KeyUp | InputEvent::Other => (),
        }
        None
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            chain_positions: self.chain.positions().collect(),
            heading: self.chain.head().direction,
            food_position: self.food.position,
            grid_size: self.settings.grid_size,
            phase: self.state.phase,
        }
    }
}

/// Spawn a snake and grow it to its starting length
fn new_chain<R: RngCore + ?Sized>(settings: Settings, rng: &mut R) -> Chain {
    let mut chain = Chain::spawn(settings.grid_size, settings.spawn_margin, rng);
    for _ in 1..consts::INITIAL_CHAIN_LENGTH {
        chain.grow();
    }
    chain
}
