pub mod race;
pub use race::{MovieRace, RaceSeries};

mod leaderboard;
pub use leaderboard::MoviesLeaderboard;

mod sentiment;
pub use sentiment::SentimentGauge;

pub(crate) mod signal_mix;
pub use signal_mix::SignalMix;
