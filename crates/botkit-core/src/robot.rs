//! The robot: the execution unit the lifecycle orchestrator starts.
//!
//! Construction resolves the configured adapter through the registry and
//! instantiates every registered handler against the robot's handle. What
//! the adapter and handlers do once running is transport and dispatch
//! territory, outside this core.

use tracing::info;

use botkit_protocols::adapter::Adapter;
use botkit_protocols::handler::Handler;
use botkit_protocols::robot::RobotHandle;

use crate::error::CoreError;
use crate::runtime::Runtime;

/// One constructed robot, ready to run.
pub struct Robot {
    handle: RobotHandle,
    adapter: Box<dyn Adapter>,
    handlers: Vec<Box<dyn Handler>>,
}

impl Robot {
    /// Build a robot from the runtime's current configuration.
    ///
    /// # Errors
    ///
    /// `CoreError::UnknownAdapter` when the configured adapter name has no
    /// registration.
    pub fn new(runtime: &Runtime) -> Result<Self, CoreError> {
        let config = runtime.config();
        let (name, alias, adapter_name, extensions) = {
            let guard = config.read();
            (
                guard.robot.name.clone(),
                guard.robot.alias.clone(),
                guard.robot.adapter.clone(),
                guard.extensions.clone(),
            )
        };

        let builder = runtime
            .adapters()
            .get(&adapter_name)
            .ok_or_else(|| CoreError::UnknownAdapter(adapter_name.clone()))?;

        let handle = RobotHandle::new(name, alias, extensions);
        let handlers: Vec<Box<dyn Handler>> = runtime
            .handlers()
            .all()
            .iter()
            .map(|handler| handler.build(&handle))
            .collect();
        let adapter = builder.build(&handle);

        info!(
            name = %handle.name,
            adapter = %adapter_name,
            handlers = handlers.len(),
            "Robot constructed"
        );

        Ok(Self {
            handle,
            adapter,
            handlers,
        })
    }

    /// The robot's public handle.
    pub fn handle(&self) -> &RobotHandle {
        &self.handle
    }

    /// The constructed handler instances, in registration order.
    pub fn handlers(&self) -> &[Box<dyn Handler>] {
        &self.handlers
    }

    /// Start the adapter and block until it returns.
    pub fn run(&mut self) -> Result<(), CoreError> {
        info!(name = %self.handle.name, "Robot starting");
        self.adapter.run()?;
        Ok(())
    }

    /// Tear the adapter down.
    pub fn shut_down(&mut self) {
        info!(name = %self.handle.name, "Robot shutting down");
        self.adapter.shut_down();
    }
}
