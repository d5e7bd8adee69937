/// Rounds to one decimal place, half away from zero. Never returns `-0.0`.
pub fn round1(value: f64) -> f64 {
    // -0.0 + 0.0 == +0.0
    (value * 10.0).round() / 10.0 + 0.0
}
