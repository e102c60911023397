use std::sync::Arc;

use crate::Console;

pub const EXPRESSION_REFERENCE: &str = "From function expression reference";
pub const ARROW_FUNCTION_BODY: &str = "From handle arrow function body";
pub const ARROW_FUNCTION_IMPLICIT_RETURN: &str = "From arrow function implicit return";

/// Build a deferred action that logs `name` each time it is invoked.
///
/// Nothing is logged here; the returned callable only logs when called.
pub fn make_named_action(
    console: Arc<dyn Console>,
    name: &'static str,
) -> impl Fn() + Send + Sync + 'static {
    move || {
        console.log(name);
    }
}
