//! Inventory controller: the queue/stack transition rules
//!
//! Owns the upcoming-piece queue, the reserve stack, and the generator,
//! and applies the three user-facing transitions. Each transition either
//! fully applies or rejects with an [`InventoryError`] and no mutation.
//! The queue is topped back up to capacity after every successful
//! removal, so under correct use it is always full between commands.

use crate::generator::PieceGenerator;
use crate::piece::Piece;
use crate::queue::BoundedQueue;
use crate::stack::BoundedStack;
use std::fmt;

/// Upcoming-piece queue capacity
pub const QUEUE_CAPACITY: usize = 5;
/// Reserve stack capacity
pub const STACK_CAPACITY: usize = 3;

/// Recoverable, user-facing failures
///
/// All of these are reported back to the shell for display; none of them
/// aborts the session or leaves a container half-mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryError {
    /// Play or Reserve with nothing in the queue
    QueueEmpty,
    /// Enqueue against a full queue (container guard; correct controller
    /// use never surfaces this)
    QueueFull,
    /// Reserve with the stack already at capacity
    StackFull,
    /// Use-reserved with nothing on the stack
    StackEmpty,
}

impl fmt::Display for InventoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            InventoryError::QueueEmpty => "the piece queue is empty",
            InventoryError::QueueFull => "the piece queue is full",
            InventoryError::StackFull => "the reserve stack is full",
            InventoryError::StackEmpty => "no pieces are reserved",
        };
        write!(f, "{}", message)
    }
}

impl std::error::Error for InventoryError {}

/// The piece inventory
pub struct Inventory {
    queue: BoundedQueue<Piece, QUEUE_CAPACITY>,
    reserve: BoundedStack<Piece, STACK_CAPACITY>,
    generator: PieceGenerator,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    /// Create an inventory with an entropy-seeded generator
    pub fn new() -> Self {
        Self::with_generator(PieceGenerator::new())
    }

    /// Create an inventory drawing from the given generator
    ///
    /// The queue is filled to capacity before the first command; the
    /// reserve starts empty.
    pub fn with_generator(generator: PieceGenerator) -> Self {
        let mut inventory = Self {
            queue: BoundedQueue::new(),
            reserve: BoundedStack::new(),
            generator,
        };
        inventory.refill();
        inventory
    }

    /// Top the queue back up to capacity
    fn refill(&mut self) {
        while !self.queue.is_full() {
            let piece = self.generator.generate();
            if self.queue.enqueue(piece).is_err() {
                break;
            }
        }
    }

    /// Play the piece at the front of the queue
    ///
    /// The queue is replenished with a fresh piece so it returns to
    /// capacity.
    pub fn play(&mut self) -> Result<Piece, InventoryError> {
        let piece = self.queue.dequeue().ok_or(InventoryError::QueueEmpty)?;
        self.refill();
        Ok(piece)
    }

    /// Move the piece at the front of the queue onto the reserve stack
    ///
    /// Failure modes are checked in order: an empty queue wins over a
    /// full stack, and either one leaves both containers untouched - in
    /// particular the queue is not replenished when nothing left it.
    pub fn reserve(&mut self) -> Result<Piece, InventoryError> {
        if self.queue.is_empty() {
            return Err(InventoryError::QueueEmpty);
        }
        if self.reserve.is_full() {
            return Err(InventoryError::StackFull);
        }
        let piece = self.queue.dequeue().ok_or(InventoryError::QueueEmpty)?;
        self.reserve
            .push(piece)
            .map_err(|_| InventoryError::StackFull)?;
        self.refill();
        Ok(piece)
    }

    /// Take the piece on top of the reserve stack
    ///
    /// No queue interaction.
    pub fn use_reserved(&mut self) -> Result<Piece, InventoryError> {
        self.reserve.pop().ok_or(InventoryError::StackEmpty)
    }

    /// Queue contents, front to back
    pub fn upcoming(&self) -> impl Iterator<Item = &Piece> {
        self.queue.iter()
    }

    /// Reserve contents, top to base
    pub fn reserved(&self) -> impl Iterator<Item = &Piece> {
        self.reserve.iter()
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn queue_capacity(&self) -> usize {
        self.queue.capacity()
    }

    pub fn reserved_len(&self) -> usize {
        self.reserve.len()
    }

    pub fn reserved_capacity(&self) -> usize {
        self.reserve.capacity()
    }

    /// Total pieces generated since the session started
    pub fn pieces_generated(&self) -> u64 {
        self.generator.generated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Inventory {
        Inventory::with_generator(PieceGenerator::with_seed(7))
    }

    fn upcoming_ids(inventory: &Inventory) -> Vec<u64> {
        inventory.upcoming().map(|piece| piece.id).collect()
    }

    fn reserved_ids(inventory: &Inventory) -> Vec<u64> {
        inventory.reserved().map(|piece| piece.id).collect()
    }

    #[test]
    fn test_initial_fill() {
        let inventory = seeded();
        assert_eq!(upcoming_ids(&inventory), vec![0, 1, 2, 3, 4]);
        assert_eq!(inventory.reserved_len(), 0);
        assert_eq!(inventory.pieces_generated(), QUEUE_CAPACITY as u64);
    }

    #[test]
    fn test_play_replenishes_queue() {
        let mut inventory = seeded();
        let played = inventory.play().unwrap();
        assert_eq!(played.id, 0);
        assert_eq!(upcoming_ids(&inventory), vec![1, 2, 3, 4, 5]);
        assert_eq!(inventory.queue_len(), QUEUE_CAPACITY);
    }

    #[test]
    fn test_reserve_moves_piece_and_replenishes() {
        let mut inventory = seeded();
        inventory.play().unwrap();
        let reserved = inventory.reserve().unwrap();
        assert_eq!(reserved.id, 1);
        assert_eq!(reserved_ids(&inventory), vec![1]);
        assert_eq!(upcoming_ids(&inventory), vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_use_reserved_pops_lifo() {
        let mut inventory = seeded();
        inventory.reserve().unwrap(); // id 0
        inventory.reserve().unwrap(); // id 1
        let used = inventory.use_reserved().unwrap();
        assert_eq!(used.id, 1);
        assert_eq!(reserved_ids(&inventory), vec![0]);
        // Queue untouched by use-reserved
        assert_eq!(inventory.queue_len(), QUEUE_CAPACITY);
    }

    #[test]
    fn test_use_reserved_empty_stack_errors() {
        let mut inventory = seeded();
        assert_eq!(inventory.use_reserved(), Err(InventoryError::StackEmpty));
        assert_eq!(upcoming_ids(&inventory), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_reserve_full_stack_leaves_queue_alone() {
        let mut inventory = seeded();
        for _ in 0..STACK_CAPACITY {
            inventory.reserve().unwrap();
        }
        let before = upcoming_ids(&inventory);
        assert_eq!(inventory.reserve(), Err(InventoryError::StackFull));
        assert_eq!(upcoming_ids(&inventory), before);
        assert_eq!(inventory.queue_len(), QUEUE_CAPACITY);
        assert_eq!(inventory.reserved_len(), STACK_CAPACITY);
    }

    #[test]
    fn test_menu_walkthrough() {
        // Play, reserve, use the reserved piece, then fill the reserve
        // until it rejects.
        let mut inventory = seeded();

        assert_eq!(inventory.play().unwrap().id, 0);
        assert_eq!(upcoming_ids(&inventory), vec![1, 2, 3, 4, 5]);

        assert_eq!(inventory.reserve().unwrap().id, 1);
        assert_eq!(inventory.reserved_len(), 1);
        assert_eq!(upcoming_ids(&inventory), vec![2, 3, 4, 5, 6]);

        assert_eq!(inventory.use_reserved().unwrap().id, 1);
        assert_eq!(inventory.reserved_len(), 0);

        for expected in [2, 3, 4] {
            assert_eq!(inventory.reserve().unwrap().id, expected);
        }
        assert_eq!(inventory.reserve(), Err(InventoryError::StackFull));
        assert_eq!(upcoming_ids(&inventory), vec![5, 6, 7, 8, 9]);
        assert_eq!(reserved_ids(&inventory), vec![4, 3, 2]);
    }

    #[test]
    fn test_occupancy_invariants_hold() {
        let mut inventory = seeded();
        for round in 0..100 {
            match round % 3 {
                0 => {
                    let _ = inventory.play();
                }
                1 => {
                    let _ = inventory.reserve();
                }
                _ => {
                    let _ = inventory.use_reserved();
                }
            }
            assert!(inventory.queue_len() <= QUEUE_CAPACITY);
            assert!(inventory.reserved_len() <= STACK_CAPACITY);
        }
    }

    #[test]
    fn test_ids_never_repeat_across_containers() {
        let mut inventory = seeded();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..20 {
            let piece = inventory.play().unwrap();
            assert!(seen.insert(piece.id), "id {} seen twice", piece.id);
        }
        for _ in 0..STACK_CAPACITY {
            let piece = inventory.reserve().unwrap();
            assert!(seen.insert(piece.id), "id {} seen twice", piece.id);
        }
        for piece in inventory.upcoming() {
            assert!(seen.insert(piece.id), "id {} seen twice", piece.id);
        }
        // Reserved pieces were counted when they left the queue
        for piece in inventory.reserved() {
            assert!(seen.contains(&piece.id));
        }
    }
}
