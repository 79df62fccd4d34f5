pub mod driver;
pub mod driver_status;
pub mod event;
pub mod movement;

pub use driver::Driver;
pub use driver_status::DriverStatus;
pub use event::{Event, EventPatch};
pub use movement::MovementKind;
