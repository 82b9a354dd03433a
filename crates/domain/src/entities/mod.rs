//! Domain entities - Objects with identity and lifecycle

mod weather_record;

pub use weather_record::WeatherRecord;
