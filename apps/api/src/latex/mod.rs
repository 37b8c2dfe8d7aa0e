// LaTeX generation engine.
// Pure functions from (Resume, template id) to a complete document source.
// No I/O and no shared mutable state: safe to call from any task.

pub mod contact;
pub mod credits;
pub mod escape;
pub mod router;
pub mod sections;
pub mod templates;

pub use credits::Credits;
pub use router::{TemplateInfo, TemplateRegistry, DEFAULT_TEMPLATE};
