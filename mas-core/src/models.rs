mod assignment;
pub use assignment::{Assignment, Combination};

mod error;
pub use error::{ValidationError, validate_budget};

mod group;
pub use group::{Group, GroupDto};

mod instance;
pub use instance::{Instance, InstanceDto};

mod map;
pub use map::Map;
