use crate::Console;

pub const UH_OH: &str = "uh oh";

/// Values that look like they could go into a click slot but are not
/// functions. They are evaluated right away and never bound.
///
/// A click slot takes a callable, so binding any of them does not compile.
/// A closure binds fine:
/// ```
/// use click_handler_demo::{Console, RecordingConsole};
/// use click_html::tag::button;
/// use std::sync::Arc;
///
/// let console = Arc::new(RecordingConsole::default());
/// let _ = button().on_click(move || console.log("clicked")).build();
/// ```
/// The text constant:
/// ```compile_fail,E0277
/// use click_handler_demo::{NonCallableValues, RecordingConsole};
/// use click_html::tag::button;
///
/// let values = NonCallableValues::evaluate(&RecordingConsole::default());
/// let _ = button().on_click(values.my_string).build();
/// ```
/// The fixed number:
/// ```compile_fail,E0277
/// use click_handler_demo::{NonCallableValues, RecordingConsole};
/// use click_html::tag::button;
///
/// let values = NonCallableValues::evaluate(&RecordingConsole::default());
/// let _ = button().on_click(values.my_fixed_number).build();
/// ```
/// The random number, which is what calling the generator returned:
/// ```compile_fail,E0277
/// use click_handler_demo::{NonCallableValues, RecordingConsole};
/// use click_html::tag::button;
///
/// let values = NonCallableValues::evaluate(&RecordingConsole::default());
/// let _ = button().on_click(values.my_random_number).build();
/// ```
/// The unit value returned by logging immediately:
/// ```compile_fail,E0277
/// use click_handler_demo::{NonCallableValues, RecordingConsole};
/// use click_html::tag::button;
///
/// let values = NonCallableValues::evaluate(&RecordingConsole::default());
/// let _ = button().on_click(values.my_return_value).build();
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonCallableValues {
    pub my_string: &'static str,
    pub my_fixed_number: i32,
    pub my_random_number: f64,
    pub my_return_value: (),
}

impl NonCallableValues {
    /// Evaluates every value on the spot. Logs [UH_OH] once.
    pub fn evaluate(console: &dyn Console) -> Self {
        Self {
            my_string: "hi",
            my_fixed_number: 42,
            my_random_number: rand::random(),
            my_return_value: console.log(UH_OH),
        }
    }
}
