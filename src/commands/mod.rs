pub mod inspect;
pub mod render;
pub mod settings;

pub use render::{build_note_graph, AnnotatedGraph};
pub use settings::{FilterArgs, RenderArgs, RenderSettings, SourceArgs};
