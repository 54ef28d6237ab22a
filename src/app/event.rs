use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// The engine emitted a confirmed `HH:MM`
    TimeSelected(String),

    /// Tick for clock refresh
    Tick,
}
