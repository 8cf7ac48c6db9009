pub mod binder;
pub mod layout;
pub mod pages;
pub mod render;

pub use binder::{BindIssue, FieldBinder, SheetHeader};
pub use pages::PageReplicator;
pub use render::{RenderLogic, RenderOutcome};
