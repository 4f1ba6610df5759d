mod overview;
pub use overview::Overview;

mod movies;
pub use movies::Movies;

mod signals;
pub use signals::Signals;

mod cinemas;
pub use cinemas::Cinemas;

mod geography;
pub use geography::Geography;
