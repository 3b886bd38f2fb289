// ps-core/src/units.rs

use uom::si::f64::{
    Acceleration as UomAcceleration, AngularAcceleration as UomAngularAcceleration,
    AngularVelocity as UomAngularVelocity, Frequency as UomFrequency, Length as UomLength,
    Time as UomTime, Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Accel = UomAcceleration;
pub type AngularAccel = UomAngularAcceleration;
pub type AngularVelocity = UomAngularVelocity;
pub type Frequency = UomFrequency;
pub type Length = UomLength;
pub type Time = UomTime;
pub type Velocity = UomVelocity;

#[inline]
pub fn mps2(v: f64) -> Accel {
    use uom::si::acceleration::meter_per_second_squared;
    Accel::new::<meter_per_second_squared>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

/// Rate in 1/s, used for linear damping coefficients.
#[inline]
pub fn per_s(v: f64) -> Frequency {
    use uom::si::frequency::hertz;
    Frequency::new::<hertz>(v)
}

#[inline]
pub fn rad_per_s(v: f64) -> AngularVelocity {
    use uom::si::angular_velocity::radian_per_second;
    AngularVelocity::new::<radian_per_second>(v)
}

#[inline]
pub fn rad_per_s2(v: f64) -> AngularAccel {
    use uom::si::angular_acceleration::radian_per_second_squared;
    AngularAccel::new::<radian_per_second_squared>(v)
}

pub mod constants {
    use super::*;

    /// Gravitational acceleration used by the classic textbook pendulum.
    pub const G_TEXTBOOK_MPS2: f64 = 9.8;

    pub const G0_MPS2: f64 = 9.806_65;

    #[inline]
    pub fn g0() -> Accel {
        mps2(G0_MPS2)
    }
}
