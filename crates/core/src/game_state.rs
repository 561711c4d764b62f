//! Game state module - the session aggregate and its phase machine
//!
//! Ties together the grid, the piece controller, scoring and the gravity
//! timer. The game is driven by two inputs:
//!
//! - commands ([`Game::apply_action`] or the named methods), ignored when the
//!   current phase does not permit them
//! - [`Game::tick`], called once per frame with the elapsed milliseconds
//!
//! Gravity and explicit soft drops share one drop step, so a piece that
//! locks from a command within a frame cannot lock again from gravity in the
//! same frame.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::GameConfig;
use crate::error::Result;
use crate::grid::Grid;
use crate::line_clear::{clear_and_collapse, find_clearable_rows};
use crate::piece::{Piece, PieceController};
use crate::scoring::{gravity_interval_ms, score_for_clear, update_progression};
use crate::shapes::matrix_height;
use crate::snapshot::GameSnapshot;
use crate::timer::DropTimer;
use crate::types::{GameAction, GamePhase, GRAVITY_INTERVALS_MS};

/// What happened when a piece locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_delta: u32,
    /// Level after progression was applied
    pub level: u32,
    pub leveled_up: bool,
    /// The promoted piece did not fit at the spawn anchor
    pub topped_out: bool,
}

/// Result of one drop step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Moved,
    Locked,
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct Game<R = SmallRng> {
    config: GameConfig,
    grid: Grid,
    pieces: PieceController<R>,
    score: u32,
    lines: u32,
    level: u32,
    phase: GamePhase,
    timer: DropTimer,
    quick_drop: bool,
    /// A command locked a piece since the last tick
    locked_by_command: bool,
    last_event: Option<LockEvent>,
}

impl Game<SmallRng> {
    /// Create a game waiting in `GameOver` for the start command.
    ///
    /// Pieces come from `config.seed`, or fresh entropy when it is unset.
    /// Fails with [`CoreError::InvalidConfig`](crate::error::CoreError) when
    /// the config does not validate.
    pub fn new(config: GameConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Game<R> {
    /// Create a game drawing pieces from the given random source
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.rows, config.cols);
        let pieces = PieceController::new(rng, config.cols);
        let timer = DropTimer::new(gravity_interval_ms(1, &config.gravity_ms, GRAVITY_INTERVALS_MS[0]));
        Ok(Self {
            config,
            grid,
            pieces,
            score: 0,
            lines: 0,
            level: 1,
            phase: GamePhase::GameOver,
            timer,
            quick_drop: false,
            locked_by_command: false,
            last_event: None,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<&Piece> {
        self.pieces.active()
    }

    pub fn next(&self) -> Option<&Piece> {
        self.pieces.next()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_quick_drop(&self) -> bool {
        self.quick_drop
    }

    pub fn timer(&self) -> &DropTimer {
        &self.timer
    }

    /// Drop interval derived from the current level alone
    pub fn level_interval_ms(&self) -> u32 {
        gravity_interval_ms(self.level, &self.config.gravity_ms, GRAVITY_INTERVALS_MS[0])
    }

    /// Drop interval currently in force (quick drop overrides the level)
    pub fn drop_interval_ms(&self) -> u32 {
        if self.quick_drop {
            self.config.quick_drop_ms
        } else {
            self.level_interval_ms()
        }
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.grid.rows();
        out.cols = self.grid.cols();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());
        out.active = self.pieces.active().copied();
        out.next = self.pieces.next().copied();
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.phase = self.phase;
        out.quick_drop = self.quick_drop;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Apply a command. Returns whether it changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::Rotate => self.rotate(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDropStart => self.hard_drop_start(),
            GameAction::HardDropEnd => self.hard_drop_end(),
            GameAction::TogglePauseOrStart => {
                self.toggle_pause_or_start();
                true
            }
        }
    }

    pub fn move_left(&mut self) -> bool {
        self.phase == GamePhase::Running && self.pieces.try_move(0, -1, &self.grid)
    }

    pub fn move_right(&mut self) -> bool {
        self.phase == GamePhase::Running && self.pieces.try_move(0, 1, &self.grid)
    }

    pub fn rotate(&mut self) -> bool {
        self.phase == GamePhase::Running && self.pieces.try_rotate(&self.grid)
    }

    /// Move the piece one row down now, locking it if it cannot move.
    pub fn soft_drop(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        if self.drop_step() == DropOutcome::Locked {
            self.locked_by_command = true;
        }
        true
    }

    /// Switch gravity to the quick-drop interval until released
    pub fn hard_drop_start(&mut self) -> bool {
        if self.phase != GamePhase::Running || self.quick_drop {
            return false;
        }
        self.quick_drop = true;
        self.timer.reset(self.drop_interval_ms());
        true
    }

    /// Restore the level-derived interval.
    ///
    /// Also honored while paused so a key released during the pause does not
    /// leave gravity stuck fast.
    pub fn hard_drop_end(&mut self) -> bool {
        if self.phase == GamePhase::GameOver || !self.quick_drop {
            return false;
        }
        self.quick_drop = false;
        self.timer.reset(self.drop_interval_ms());
        true
    }

    pub fn toggle_pause_or_start(&mut self) {
        match self.phase {
            GamePhase::GameOver => self.start(),
            GamePhase::Running => {
                self.phase = GamePhase::Paused;
                self.timer.pause();
                info!("paused");
            }
            GamePhase::Paused => {
                self.phase = GamePhase::Running;
                self.timer.resume();
                info!("resumed");
            }
        }
    }

    /// Advance gravity by `elapsed_ms`. Returns true if a drop step ran.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        let locked_by_command = std::mem::take(&mut self.locked_by_command);
        if !self.timer.tick(elapsed_ms) || locked_by_command {
            return false;
        }
        trace!(interval_ms = self.timer.interval_ms(), "gravity step");
        self.drop_step();
        true
    }

    fn start(&mut self) {
        self.grid.reset();
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.quick_drop = false;
        self.locked_by_command = false;
        self.last_event = None;
        self.pieces.deal();
        self.phase = GamePhase::Running;
        self.timer.reset(self.drop_interval_ms());
        self.timer.resume();
        info!(
            rows = self.grid.rows(),
            cols = self.grid.cols(),
            "game started"
        );
    }

    /// Shared by gravity and soft drop: move down one row or lock.
    ///
    /// Either way the gravity countdown restarts.
    fn drop_step(&mut self) -> DropOutcome {
        let outcome = if self.pieces.try_move(1, 0, &self.grid) {
            DropOutcome::Moved
        } else {
            self.lock_active();
            DropOutcome::Locked
        };
        if self.phase == GamePhase::Running {
            self.timer.reset(self.drop_interval_ms());
        }
        outcome
    }

    /// Write the active piece into the grid, clear rows, score, and promote
    /// the queued piece.
    fn lock_active(&mut self) {
        let Some(piece) = self.pieces.take_active() else {
            return;
        };

        for (row, col) in piece.cells() {
            // The piece was validated in place, so every cell is in range.
            if let Err(err) = self.grid.occupy(row as usize, col as usize, piece.color) {
                warn!(%err, "locked cell outside the grid");
            }
        }

        let height = matrix_height(piece.matrix());
        let rows = find_clearable_rows(piece.row().max(0) as usize, Some(height), &self.grid);
        let cleared = rows.len() as u32;

        let mut score_delta = 0;
        let previous_level = self.level;
        if cleared > 0 {
            score_delta = score_for_clear(rows.len(), self.level);
            self.score = self.score.saturating_add(score_delta);
            clear_and_collapse(&rows, &mut self.grid);
            (self.lines, self.level) = update_progression(self.lines, cleared);
        }

        let next = self.pieces.promote_next();
        let topped_out = !next.fits(&self.grid);

        debug!(
            kind = piece.kind.as_str(),
            row = piece.row(),
            col = piece.col(),
            ?rows,
            score_delta,
            level = self.level,
            "piece locked"
        );
        if self.level != previous_level {
            info!(level = self.level, lines = self.lines, "level up");
        }

        self.last_event = Some(LockEvent {
            lines_cleared: cleared,
            score_delta,
            level: self.level,
            leveled_up: self.level != previous_level,
            topped_out,
        });

        if topped_out {
            self.phase = GamePhase::GameOver;
            self.quick_drop = false;
            self.timer.pause();
            info!(score = self.score, lines = self.lines, level = self.level, "game over");
        }
    }
}
