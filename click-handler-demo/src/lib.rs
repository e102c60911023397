//! A component with three buttons. Each button's click slot is bound to a
//! deferred action; the four [NonCallableValues] show what a click slot
//! refuses to take.

pub mod actions;
mod app;
mod console;
mod illustrations;

pub use app::{ClickHandlerDemo, BUTTON_LABELS, HEADING};
pub use console::{Console, RecordingConsole, TracingConsole};
pub use illustrations::{NonCallableValues, UH_OH};
