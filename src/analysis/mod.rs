mod projection;
mod projector;
mod summary;

pub use projection::project;
pub use projector::Projector;
pub use summary::ProjectionSummary;
