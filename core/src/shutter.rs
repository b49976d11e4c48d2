#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShutterPhase {
    Idle,
    Closing { target: usize },
    Opening,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShutterStep {
    /// Panels are shut: show the lightbox at `target` and start opening.
    Reveal { target: usize },
    /// Panels are open again: clear the shutter classes.
    Reset,
}

/// Sequencing for the shutter played in front of the lightbox.
///
/// Each phase ends either on `animationend` or on a fallback timeout. Both
/// complete through a ticket, so whichever arrives second for the same phase
/// is a no-op.
#[derive(Clone, Copy, Debug)]
pub struct Shutter {
    phase: ShutterPhase,
    ticket: u64,
}

impl Default for Shutter {
    fn default() -> Self {
        Self::new()
    }
}

impl Shutter {
    pub fn new() -> Self {
        Self {
            phase: ShutterPhase::Idle,
            ticket: 0,
        }
    }

    pub fn phase(&self) -> ShutterPhase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase != ShutterPhase::Idle
    }

    /// Ticket of the phase in flight.
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    /// Starts closing toward `target`. Ignored while a phase is in flight.
    pub fn request(&mut self, target: usize) -> Option<u64> {
        if self.is_busy() {
            return None;
        }
        self.phase = ShutterPhase::Closing { target };
        Some(self.advance_ticket())
    }

    pub fn complete(&mut self, ticket: u64) -> Option<ShutterStep> {
        if ticket != self.ticket {
            return None;
        }
        match self.phase {
            ShutterPhase::Idle => None,
            ShutterPhase::Closing { target } => {
                self.phase = ShutterPhase::Opening;
                self.advance_ticket();
                Some(ShutterStep::Reveal { target })
            }
            ShutterPhase::Opening => {
                self.phase = ShutterPhase::Idle;
                self.advance_ticket();
                Some(ShutterStep::Reset)
            }
        }
    }

    fn advance_ticket(&mut self) -> u64 {
        self.ticket = self.ticket.wrapping_add(1);
        self.ticket
    }
}
