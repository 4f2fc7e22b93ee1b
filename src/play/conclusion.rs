/// how a game ends: someone clears their card, or the bag runs dry
/// with nobody at zero. both are valid terminal states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conclusion {
    Winner(String),
    Exhausted,
}
