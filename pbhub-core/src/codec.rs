//! Payload encoding and range checks
//!
//! All multi-byte values on the wire are little-endian. Setters are a
//! single write of the selector followed by the payload; getters write the
//! selector alone and read one or two bytes back.

use crate::error::ArgumentError;

/// Largest PWM duty value
pub const PWM_MAX: u8 = 255;

/// Largest servo angle in degrees
pub const SERVO_ANGLE_MAX: u8 = 180;

/// Shortest servo pulse in microseconds
pub const SERVO_PULSE_MIN_US: u16 = 500;

/// Longest servo pulse in microseconds
pub const SERVO_PULSE_MAX_US: u16 = 2500;

/// Validate a PWM duty value
pub fn pwm_value(value: i32) -> Result<u8, ArgumentError> {
    u8::try_from(value).map_err(|_| ArgumentError::PwmValue(value))
}

/// Validate a servo angle
pub fn servo_angle(angle: i32) -> Result<u8, ArgumentError> {
    match u8::try_from(angle) {
        Ok(a) if a <= SERVO_ANGLE_MAX => Ok(a),
        _ => Err(ArgumentError::ServoAngle(angle)),
    }
}

/// Validate a servo pulse width
pub fn servo_pulse(pulse_us: i32) -> Result<u16, ArgumentError> {
    match u16::try_from(pulse_us) {
        Ok(p) if (SERVO_PULSE_MIN_US..=SERVO_PULSE_MAX_US).contains(&p) => Ok(p),
        _ => Err(ArgumentError::ServoPulse(pulse_us)),
    }
}

/// Convert a brightness in 0.0-1.0 to its wire byte
///
/// The byte is `round(255 * value)`. NaN is rejected.
pub fn brightness_to_wire(value: f32) -> Result<u8, ArgumentError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ArgumentError::Brightness);
    }
    Ok(libm::roundf(255.0 * value) as u8)
}

/// Convert a wire byte to a brightness, rounded to two decimals
pub fn brightness_from_wire(byte: u8) -> f32 {
    libm::roundf(f32::from(byte) / 255.0 * 100.0) / 100.0
}

/// Decode a little-endian 16-bit value
pub const fn u16_from_wire(bytes: [u8; 2]) -> u16 {
    u16::from_le_bytes(bytes)
}

/// Build a one-byte write: `[register, value]`
pub const fn write_u8(register: u8, value: u8) -> [u8; 2] {
    [register, value]
}

/// Build a two-byte write: `[register, low, high]`
pub const fn write_u16(register: u8, value: u16) -> [u8; 3] {
    let [lo, hi] = value.to_le_bytes();
    [register, lo, hi]
}
