//! Inventory session driven by the menu loop
//!
//! Bridges the controller and the UI: holds the inventory, the action
//! cursor, per-session tallies, and a short feedback log of what the
//! last few commands did.

use crate::generator::PieceGenerator;
use crate::inventory::{Inventory, InventoryError, QUEUE_CAPACITY};
use crate::queue::BoundedQueue;

/// How many feedback lines are kept for display
pub const FEEDBACK_CAPACITY: usize = 6;

/// The action rows shown on the inventory screen, with their quick keys
pub const ACTIONS: [(char, &str); 4] = [
    ('1', "Play piece (remove from queue)"),
    ('2', "Reserve piece (queue -> stack)"),
    ('3', "Use reserved piece (remove from stack)"),
    ('0', "Back to menu"),
];

/// Commands the shell can issue against the inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play,
    Reserve,
    UseReserved,
}

/// How a feedback line should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    /// A piece changed hands
    Action,
    /// Bookkeeping worth mentioning
    Notice,
    /// A rejected command
    Error,
}

/// One line of the on-screen feedback log
#[derive(Debug, Clone)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub text: String,
}

/// Tallies surfaced when the session ends
#[derive(Debug, Clone, Copy)]
pub struct SessionStats {
    pub played: u32,
    pub reserved: u32,
    pub used: u32,
    pub generated: u64,
}

/// One menu-loop session over a fresh inventory
pub struct Session {
    pub inventory: Inventory,
    /// Selected row in the action list
    pub selected: usize,
    feedback: BoundedQueue<Feedback, FEEDBACK_CAPACITY>,
    played: u32,
    reserved: u32,
    used: u32,
}

impl Session {
    /// Start a session with a fresh, entropy-seeded inventory
    pub fn new() -> Self {
        let seed = rand::random::<u64>();
        tracing::info!("new inventory session, seed={:#018x}", seed);
        Self::with_inventory(Inventory::with_generator(PieceGenerator::with_seed(seed)))
    }

    /// Start a session over an existing inventory
    pub fn with_inventory(inventory: Inventory) -> Self {
        Self {
            inventory,
            selected: 0,
            feedback: BoundedQueue::new(),
            played: 0,
            reserved: 0,
            used: 0,
        }
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        } else {
            self.selected = ACTIONS.len() - 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected < ACTIONS.len() - 1 {
            self.selected += 1;
        } else {
            self.selected = 0;
        }
    }

    /// The command behind the selected row, or `None` for the back row
    pub fn selected_command(&self) -> Option<Command> {
        match self.selected {
            0 => Some(Command::Play),
            1 => Some(Command::Reserve),
            2 => Some(Command::UseReserved),
            _ => None,
        }
    }

    /// Run one command against the inventory and record the outcome
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::Play => match self.inventory.play() {
                Ok(piece) => {
                    self.played += 1;
                    tracing::info!("played piece {}", piece);
                    self.record_action(format!("Played piece {}", piece));
                    self.note_replenishment();
                }
                Err(error) => self.record_error(error),
            },
            Command::Reserve => match self.inventory.reserve() {
                Ok(piece) => {
                    self.reserved += 1;
                    tracing::info!("reserved piece {}", piece);
                    self.record_action(format!("Reserved piece {}", piece));
                    self.note_replenishment();
                }
                Err(error) => self.record_error(error),
            },
            Command::UseReserved => match self.inventory.use_reserved() {
                Ok(piece) => {
                    self.used += 1;
                    tracing::info!("used reserved piece {}", piece);
                    self.record_action(format!("Used reserved piece {}", piece));
                }
                Err(error) => self.record_error(error),
            },
        }
    }

    /// Report a key that maps to no command
    pub fn invalid_option(&mut self, key: char) {
        tracing::debug!("invalid option '{}'", key);
        self.push_feedback(FeedbackKind::Error, "Invalid option! Try again.".to_string());
    }

    /// Feedback lines, oldest first
    pub fn feedback(&self) -> impl Iterator<Item = &Feedback> {
        self.feedback.iter()
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            played: self.played,
            reserved: self.reserved,
            used: self.used,
            generated: self.inventory.pieces_generated(),
        }
    }

    fn record_action(&mut self, text: String) {
        self.push_feedback(FeedbackKind::Action, text);
    }

    fn record_error(&mut self, error: InventoryError) {
        tracing::warn!("command rejected: {}", error);
        self.push_feedback(FeedbackKind::Error, format!("Error: {}.", error));
    }

    /// The queue is topped back up after every successful removal;
    /// surface that in the on-screen log.
    fn note_replenishment(&mut self) {
        if self.inventory.queue_len() == QUEUE_CAPACITY {
            self.push_feedback(
                FeedbackKind::Notice,
                "A new piece joined the queue.".to_string(),
            );
        }
    }

    fn push_feedback(&mut self, kind: FeedbackKind, text: String) {
        // Drop the oldest line once the log is full
        if self.feedback.is_full() {
            self.feedback.dequeue();
        }
        let _ = self.feedback.enqueue(Feedback { kind, text });
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::STACK_CAPACITY;

    fn seeded_session() -> Session {
        Session::with_inventory(Inventory::with_generator(PieceGenerator::with_seed(3)))
    }

    #[test]
    fn test_play_records_action_and_notice() {
        let mut session = seeded_session();
        session.execute(Command::Play);
        let lines: Vec<&Feedback> = session.feedback().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].kind, FeedbackKind::Action);
        assert!(lines[0].text.starts_with("Played piece ["));
        assert_eq!(lines[1].kind, FeedbackKind::Notice);
        assert_eq!(session.stats().played, 1);
    }

    #[test]
    fn test_full_stack_reports_error() {
        let mut session = seeded_session();
        for _ in 0..=STACK_CAPACITY {
            session.execute(Command::Reserve);
        }
        let last = session.feedback().last().unwrap();
        assert_eq!(last.kind, FeedbackKind::Error);
        assert!(last.text.contains("reserve stack is full"));
        assert_eq!(session.stats().reserved, STACK_CAPACITY as u32);
    }

    #[test]
    fn test_use_reserved_on_empty_stack_reports_error() {
        let mut session = seeded_session();
        session.execute(Command::UseReserved);
        let last = session.feedback().last().unwrap();
        assert_eq!(last.kind, FeedbackKind::Error);
        assert!(last.text.contains("no pieces are reserved"));
        assert_eq!(session.stats().used, 0);
    }

    #[test]
    fn test_feedback_log_drops_oldest() {
        let mut session = seeded_session();
        for _ in 0..FEEDBACK_CAPACITY {
            session.invalid_option('x');
        }
        session.execute(Command::Play);
        let lines: Vec<&Feedback> = session.feedback().collect();
        assert_eq!(lines.len(), FEEDBACK_CAPACITY);
        // The newest entries pushed the oldest invalid-option lines out
        assert!(lines.last().unwrap().text.contains("new piece"));
    }

    #[test]
    fn test_selection_wraps() {
        let mut session = seeded_session();
        session.move_up();
        assert_eq!(session.selected, ACTIONS.len() - 1);
        assert_eq!(session.selected_command(), None);
        session.move_down();
        assert_eq!(session.selected, 0);
        assert_eq!(session.selected_command(), Some(Command::Play));
    }
}
