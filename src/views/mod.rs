pub mod explore;
pub mod notice;
pub mod stations;
pub mod weather;

pub use explore::ExploreView;
pub use notice::{Notice, NoticeLevel};
pub use stations::StationView;
pub use weather::WeatherView;
