pub mod analytics;
pub mod film;
pub mod person;

pub use analytics::*;
pub use film::*;
pub use person::*;
