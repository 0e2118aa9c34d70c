use crate::consts;
use crate::game::{Game, TickOutcome};
use crate::input::InputSource;
use crate::render::RenderSink;
use rand::RngCore;
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Why the game loop stopped
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Exit {
    /// The player asked to quit
    Quit,
    /// The snake died and the game was configured to exit on game over
    GameOver,
}

/// Runs a [`Game`] against an input source & a render sink
#[derive(Debug)]
pub(crate) struct App<R, I, S> {
    game: Game<R>,
    input: I,
    sink: S,
    tick_period: Duration,
    exit_on_game_over: bool,
}

impl<R: RngCore, I: InputSource, S: RenderSink> App<R, I, S> {
    pub(crate) fn new(game: Game<R>, input: I, sink: S) -> Self {
        App {
            game,
            input,
            sink,
            tick_period: Duration::from_millis(consts::DEFAULT_TICK_DELAY_MS),
            exit_on_game_over: true,
        }
    }

    pub(crate) fn tick_period(mut self, period: Duration) -> Self {
        self.tick_period = period;
        self
    }

    pub(crate) fn exit_on_game_over(mut self, flag: bool) -> Self {
        self.exit_on_game_over = flag;
        self
    }

    /// Run the game until the player quits or, if so configured, the game
    /// ends.
    ///
    /// Input is read while waiting for each tick rather than only between
    /// ticks, so a quit takes effect immediately and no key press is lost to
    /// the movement cadence.
    pub(crate) fn run(mut self) -> io::Result<Exit> {
        self.sink.render(&self.game.snapshot())?;
        let mut ticker = Ticker::new(self.tick_period, Instant::now());
        loop {
            let timeout = ticker.timeout(Instant::now());
            for event in self.input.poll_events(timeout)? {
                if let Some(exit) = self.game.handle_event(event) {
                    info!("Player quit");
                    return Ok(exit);
                }
            }
            let due = ticker.due_ticks(Instant::now());
            if due == 0 {
                continue;
            }
            for _ in 0..due {
                if self.game.tick() == TickOutcome::GameOver && self.exit_on_game_over {
                    return Ok(Exit::GameOver);
                }
            }
            self.sink.render(&self.game.snapshot())?;
        }
    }
}

/// Fixed-timestep tick scheduler.
///
/// Ticks are due every `period` after the ticker's creation.  If the caller
/// falls behind, up to [`MAX_CATCH_UP_TICKS`][consts::MAX_CATCH_UP_TICKS]
/// overdue ticks are reported at once; beyond that the backlog is dropped and
/// the schedule restarts from the current time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Ticker {
    period: Duration,
    next_tick: Instant,
}

impl Ticker {
    pub(crate) fn new(period: Duration, now: Instant) -> Ticker {
        Ticker {
            period,
            next_tick: now + period,
        }
    }

    /// How long until the next tick is due
    pub(crate) fn timeout(&self, now: Instant) -> Duration {
        self.next_tick.saturating_duration_since(now)
    }

    /// Return the number of ticks that have come due as of `now` and advance
    /// the schedule past them
    pub(crate) fn due_ticks(&mut self, now: Instant) -> u32 {
        let mut due = 0;
        while self.next_tick <= now && due < consts::MAX_CATCH_UP_TICKS {
            due += 1;
            self.next_tick += self.period;
        }
        if self.next_tick <= now {
            debug!(
                behind = ?now.duration_since(self.next_tick),
                "Dropping overdue ticks"
            );
            self.next_tick = now + self.period;
        }
        due
    }
}
