pub mod cabinet;
pub mod panel;
pub mod project;

pub use cabinet::{Cabinet, CabinetKind};
pub use panel::Panel;
pub use project::{Project, ProjectStatus};
