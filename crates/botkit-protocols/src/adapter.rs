//! Adapter protocol definitions.
//!
//! Adapters are transport plugins connecting the robot to a chat service
//! (shell, IRC, Slack, XMPP, ...). The runtime core registers adapter
//! *builders* by name and constructs one adapter per robot at startup;
//! everything the adapter does after [`Adapter::run`] is transport-layer
//! behavior outside the core.

use crate::error::AdapterError;
use crate::robot::RobotHandle;

/// A running transport adapter bound to one robot.
pub trait Adapter: Send {
    /// Connect to the chat service and block until the session ends.
    fn run(&mut self) -> Result<(), AdapterError>;

    /// Disconnect cleanly. Called when the robot shuts down; the default
    /// does nothing for transports without teardown needs.
    fn shut_down(&mut self) {}
}

/// Constructor contract for adapters.
///
/// Builders are the values stored in the adapter registry. `build` receives
/// the owning robot's handle so the adapter can read the robot's name and
/// its own section of the configuration.
pub trait AdapterBuilder: Send + Sync {
    /// Construct an adapter instance for the given robot.
    fn build(&self, robot: &RobotHandle) -> Box<dyn Adapter>;
}

impl<F> AdapterBuilder for F
where
    F: Fn(&RobotHandle) -> Box<dyn Adapter> + Send + Sync,
{
    fn build(&self, robot: &RobotHandle) -> Box<dyn Adapter> {
        self(robot)
    }
}
