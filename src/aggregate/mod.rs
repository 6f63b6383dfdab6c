pub mod classifier;
pub mod enricher;
pub mod guard;
pub mod pipeline;

pub use classifier::is_ml_related;
pub use enricher::to_project;
pub use guard::StaleGuard;
pub use pipeline::{Aggregator, Portfolio};
