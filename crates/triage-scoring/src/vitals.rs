pub mod age;
pub mod blood_pressure;
pub mod temperature;
