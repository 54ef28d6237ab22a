/// Side effects the main loop performs on behalf of the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Bell,
}
