//! Collaborator services module
//! 
//! This module contains the seams the timer controller talks through: the
//! clock, the tick scheduler, the screen view and user notifications.

pub mod clock;
pub mod notifier;
pub mod scheduler;
pub mod view;

// Re-export main types
pub use clock::{Clock, SystemClock};
pub use notifier::{Notifier, TerminalNotifier};
pub use scheduler::{LoopScheduler, Scheduler, TickHandle};
pub use view::{TerminalView, View};
