//! Session - the frame loop around a [`GameBoard`]
//!
//! A frame checks the end condition first and only then applies the tick,
//! so the frame that detects the end still updates (and is drawn) once.
//! After that frame the session is halted and further frames are no-ops.

use crate::board::{GameBoard, TickOutcome};
use crate::types::EndReason;

/// What a call to [`Session::frame`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The game continues
    Running(TickOutcome),
    /// This frame ended the game (its tick was still applied)
    GameOver(EndReason),
    /// The game had already ended; nothing changed
    Halted,
}

#[derive(Debug, Clone)]
pub struct Session {
    board: GameBoard,
    halted: Option<EndReason>,
    frames: u64,
}

impl Session {
    pub fn new(board: GameBoard) -> Self {
        Self {
            board,
            halted: None,
            frames: 0,
        }
    }

    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut GameBoard {
        &mut self.board
    }

    pub fn halted(&self) -> bool {
        self.halted.is_some()
    }

    /// Reason the session halted, if it has
    pub fn end_reason(&self) -> Option<EndReason> {
        self.halted
    }

    /// Frames that applied a tick
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Key presses only reach the board while the game runs.
    pub fn handle_input(&mut self, key: char) {
        if self.halted.is_none() {
            self.board.handle_input(key);
        }
    }

    pub fn frame(&mut self) -> FrameOutcome {
        if self.halted.is_some() {
            return FrameOutcome::Halted;
        }

        let ending = self.board.end_reason();
        let tick = self.board.tick();
        self.frames += 1;

        match ending {
            Some(reason) => {
                self.halted = Some(reason);
                log::info!(
                    "game over after {} frames: {} (score {})",
                    self.frames,
                    reason.as_str(),
                    self.board.score()
                );
                FrameOutcome::GameOver(reason)
            }
            None => FrameOutcome::Running(tick),
        }
    }
}
