pub mod location;
pub mod record;
pub mod summary;

pub use location::Location;
pub use record::Record;
pub use summary::Summary;
