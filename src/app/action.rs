use crate::calc::Key;

/// Side effects requested by the handler, carried out by the main loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    PlaySound { key: Key },
    Quit,
}
