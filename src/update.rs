//! Glass updates
//!
//! Sensing and pattern code never touch the [`Board`] directly. They queue
//! [`GlassUpdate`]s, and the single owner of the board drains the queue with
//! an [`UpdateProcessor`] once per control loop iteration.
//!
//! The queue is guarded by `critical-section`, so senders may live in
//! interrupt handlers or other executors.

use core::cell::RefCell;

use critical_section::Mutex;
#[cfg(feature = "esp32-log")]
use esp_println::println;
use heapless::Deque;

use crate::board::{Board, GlassWiring};
use crate::color::Colors;

/// Change to apply to one glass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlassChange {
    /// Glass was placed (true) or removed (false)
    Status(bool),
    /// New LED colors
    Colors(Colors),
    /// Glass was rewired to another expander line
    Wiring(GlassWiring),
}

/// Change addressed to the glass at `index` on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlassUpdate {
    pub index: usize,
    pub change: GlassChange,
}

impl GlassUpdate {
    pub const fn status(index: usize, glass_status: bool) -> Self {
        Self {
            index,
            change: GlassChange::Status(glass_status),
        }
    }

    pub const fn colors(index: usize, colors: Colors) -> Self {
        Self {
            index,
            change: GlassChange::Colors(colors),
        }
    }

    pub const fn wiring(index: usize, wiring: GlassWiring) -> Self {
        Self {
            index,
            change: GlassChange::Wiring(wiring),
        }
    }
}

/// Error returned when trying to queue into a full [`UpdateQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull(pub GlassUpdate);

/// Error returned when an update addresses a glass the board doesn't have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownGlass(pub usize);

/// Bounded queue of pending glass updates
///
/// SIZE is the number of updates the queue holds before rejecting new ones
pub struct UpdateQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<GlassUpdate, SIZE>>>,
}

impl<const SIZE: usize> UpdateQueue<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Handle for producers. Any number may coexist.
    pub const fn sender(&self) -> UpdateSender<'_, SIZE> {
        UpdateSender { queue: self }
    }

    /// Handle for the board owner
    pub const fn receiver(&self) -> UpdateReceiver<'_, SIZE> {
        UpdateReceiver { queue: self }
    }

    /// Queue an update
    ///
    /// Returns the update back if the queue is full
    pub fn try_send(&self, update: GlassUpdate) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(update).map_err(QueueFull)
        })
    }

    /// Take the oldest pending update
    pub fn try_receive(&self) -> Option<GlassUpdate> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for UpdateQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub struct UpdateSender<'a, const SIZE: usize> {
    queue: &'a UpdateQueue<SIZE>,
}

impl<const SIZE: usize> UpdateSender<'_, SIZE> {
    pub fn try_send(&self, update: GlassUpdate) -> Result<(), QueueFull> {
        self.queue.try_send(update)
    }

    /// Report a reed switch reading for a glass
    pub fn try_send_status(&self, index: usize, glass_status: bool) -> Result<(), QueueFull> {
        self.try_send(GlassUpdate::status(index, glass_status))
    }

    /// Assign new colors to a glass
    pub fn try_send_colors(&self, index: usize, colors: Colors) -> Result<(), QueueFull> {
        self.try_send(GlassUpdate::colors(index, colors))
    }
}

#[derive(Clone, Copy)]
pub struct UpdateReceiver<'a, const SIZE: usize> {
    queue: &'a UpdateQueue<SIZE>,
}

impl<const SIZE: usize> UpdateReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Option<GlassUpdate> {
        self.queue.try_receive()
    }
}

/// Summary of one drain of the queue
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateReport {
    /// Updates applied to a glass
    pub applied: usize,
    /// Updates dropped because their index was out of range
    pub unknown: usize,
    /// At least one glass was placed or removed
    pub status_changed: bool,
}

impl UpdateReport {
    pub const fn has_changes(&self) -> bool {
        self.applied > 0
    }
}

/// Apply a single update to the board
///
/// Returns `Ok(true)` if the update flipped the glass status.
fn apply<const N: usize>(board: &mut Board<N>, update: GlassUpdate) -> Result<bool, UnknownGlass> {
    let glass = board
        .get_mut(update.index)
        .ok_or(UnknownGlass(update.index))?;
    let flipped = match update.change {
        GlassChange::Status(glass_status) => {
            let flipped = glass.glass_status() != glass_status;
            glass.set_glass_status(glass_status);
            flipped
        }
        GlassChange::Colors(colors) => {
            glass.set_colors(colors.red, colors.green, colors.blue);
            false
        }
        GlassChange::Wiring(wiring) => {
            glass.set_reed_pin(wiring.reed_pin);
            glass.set_port(wiring.port);
            false
        }
    };
    Ok(flipped)
}

/// Apply a single update to the board
pub fn apply_update<const N: usize>(
    board: &mut Board<N>,
    update: GlassUpdate,
) -> Result<(), UnknownGlass> {
    apply(board, update).map(|_| ())
}

/// Drains queued updates into a board
pub struct UpdateProcessor<'a, const SIZE: usize> {
    updates: UpdateReceiver<'a, SIZE>,
}

impl<'a, const SIZE: usize> UpdateProcessor<'a, SIZE> {
    pub const fn new(updates: UpdateReceiver<'a, SIZE>) -> Self {
        Self { updates }
    }

    /// Apply all pending updates (non-blocking)
    ///
    /// Updates are applied in the order they were queued. Updates for
    /// glasses the board doesn't have are dropped and counted.
    pub fn process_pending<const N: usize>(&mut self, board: &mut Board<N>) -> UpdateReport {
        let mut report = UpdateReport::default();

        while let Some(update) = self.updates.try_receive() {
            match apply(board, update) {
                Ok(flipped) => {
                    report.applied += 1;
                    report.status_changed |= flipped;
                }
                Err(UnknownGlass(_index)) => {
                    #[cfg(feature = "esp32-log")]
                    println!("[update] no glass at index {}, dropping update", _index);
                    report.unknown += 1;
                }
            }
        }

        report
    }
}
