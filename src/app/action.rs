use crate::app::event::RunId;
use std::time::Duration;

/// Side effects requested by the handler, executed by the main loop.
#[derive(Debug, PartialEq)]
pub enum Action {
    ScheduleRunCompletion { run_id: RunId, delay: Duration },
    Quit,
}
