//! Value objects - Immutable objects defined by their attributes

mod observed_conditions;
mod weather_patch;
mod weather_record_id;

pub use observed_conditions::ObservedConditions;
pub use weather_patch::WeatherPatch;
pub use weather_record_id::WeatherRecordId;
