pub mod assertor;
pub mod expr;
pub mod meter;

pub use assertor::{assert_equals, AssertError, CompareError, MeterAssert};
pub use meter::{Meter, MeterId, MeterItem};
