use crate::domain::ConstraintViolation;

/// Latitudes are accepted in [-LATITUDE_BOUND, LATITUDE_BOUND]
pub const LATITUDE_BOUND: f64 = 90.0;

/// Longitudes are accepted in [-LONGITUDE_BOUND, LONGITUDE_BOUND]
pub const LONGITUDE_BOUND: f64 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Latitude(f64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Longitude(f64);

impl Latitude {
    pub fn parse(value: f64) -> Result<Latitude, ConstraintViolation> {
        if value < -LATITUDE_BOUND {
            return Err(ConstraintViolation::LatitudeTooLow);
        }
        if value > LATITUDE_BOUND {
            return Err(ConstraintViolation::LatitudeTooHigh);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Longitude {
    pub fn parse(value: f64) -> Result<Longitude, ConstraintViolation> {
        if value < -LONGITUDE_BOUND {
            return Err(ConstraintViolation::LongitudeTooLow);
        }
        if value > LONGITUDE_BOUND {
            return Err(ConstraintViolation::LongitudeTooHigh);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}
