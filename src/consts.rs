//! Assorted constants & hard-coded configuration
use ratatui::style::{Color, Modifier, Style};

/// Default width & height of the grid in cells
pub(crate) const DEFAULT_GRID_SIZE: u16 = 20;

/// Default minimum distance between a newly spawned snake and the edges of
/// the grid
pub(crate) const DEFAULT_SPAWN_MARGIN: u16 = 6;

/// Default time between movements of the snake, in milliseconds
pub(crate) const DEFAULT_TICK_DELAY_MS: u64 = 300;

/// Number of segments in a newly spawned snake
pub(crate) const INITIAL_CHAIN_LENGTH: usize = 3;

/// The most ticks that will be run back-to-back to catch up after the game
/// loop has been held up.  Any further overdue ticks are dropped.
pub(crate) const MAX_CATCH_UP_TICKS: u32 = 3;

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: char = '>';

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: char = '<';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for the snake's head once the game is over
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the status bar above the grid
pub(crate) const STATUS_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
