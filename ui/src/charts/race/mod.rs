mod engine;
pub use engine::{RaceDataError, RaceEngine, RacePhase, RaceSeries, RaceSummary, Standing};

mod view;
pub use view::MovieRace;
