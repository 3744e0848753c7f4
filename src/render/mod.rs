mod mermaid;

pub use mermaid::{render_mermaid, RenderOptions};
