mod component;
mod element;
mod render_stream;

pub use component::Component;
pub use element::Element;
pub use render_stream::{render_stream, NodeStream};
