pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod model;

mod context;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder, TestContext, TestError};
}
