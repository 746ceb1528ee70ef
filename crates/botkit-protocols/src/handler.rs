//! Handler protocol definitions.
//!
//! Handlers are the robot's message-processing plugins. The core keeps
//! them as an *ordered* sequence because downstream dispatch consults them
//! in registration order; it never interprets messages itself.

use crate::robot::RobotHandle;

/// A handler instance attached to one robot.
///
/// Route definitions and message matching belong to the dispatch layer,
/// not to this core; the contract here is only what the registry and the
/// robot's startup path need.
pub trait Handler: Send + Sync {
    /// Human-readable handler name, used in startup logging.
    fn name(&self) -> &str;
}

/// Constructor contract for handlers.
pub trait HandlerBuilder: Send + Sync {
    /// Construct a handler instance for the given robot.
    fn build(&self, robot: &RobotHandle) -> Box<dyn Handler>;
}

impl<F> HandlerBuilder for F
where
    F: Fn(&RobotHandle) -> Box<dyn Handler> + Send + Sync,
{
    fn build(&self, robot: &RobotHandle) -> Box<dyn Handler> {
        self(robot)
    }
}
