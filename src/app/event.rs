use crossterm::event::Event as CrosstermEvent;

pub type RunId = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// The simulated run delay elapsed
    RunCompleted { run_id: RunId },

    /// Tick for UI refresh
    Tick,
}
