//! Instrument text formats. These strings are the observable contract
//! of the display layer, keep them byte exact.

use nalgebra::Vector3;

/// `"SPD {n} kt"`, nearest integer knots
pub fn speed(knots: f64) -> String {
    format!("SPD {} kt", knots.round() as i64)
}

/// `"ALT {n} m"`, nearest integer meters
pub fn altitude(meters: f64) -> String {
    format!("ALT {} m", meters.round() as i64)
}

/// `"HDG {nnn}"`, zero padded 3 digits, rounded then wrapped so
/// 359.6° reads `HDG 000` and never `HDG 360`
pub fn heading(degrees: f64) -> String {
    format!("HDG {:03}", (degrees.round() as i64).rem_euclid(360))
}

/// One decimal with explicit sign: `"+5.2"`, `"-10.3"`.
/// A value rounding to zero reads `"0.0"`, unsigned.
pub fn signed_one_decimal(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded == 0.0 {
        "0.0".to_string()
    } else {
        format!("{:+.1}", rounded)
    }
}

/// `"PITCH {v}"` signed one decimal
pub fn pitch(degrees: f64) -> String {
    format!("PITCH {}", signed_one_decimal(degrees))
}

/// `"ROLL {v}"` signed one decimal
pub fn roll(degrees: f64) -> String {
    format!("ROLL {}", signed_one_decimal(degrees))
}

/// `"VS {v}"` signed one decimal
pub fn vertical_speed(rate: f64) -> String {
    format!("VS {}", signed_one_decimal(rate))
}

/// `"GPS {lat} {lon}"` at 5 decimals, geographic mapping enabled
pub fn geographic(latitude_deg: f64, longitude_deg: f64) -> String {
    format!("GPS {:.5} {:.5}", latitude_deg, longitude_deg)
}

/// `"GPS {x} {y} {z}"` raw world coordinates at zero decimals,
/// fallback when geographic mapping is disabled
pub fn world_position(position: Vector3<f64>) -> String {
    format!("GPS {:.0} {:.0} {:.0}", position.x, position.y, position.z)
}

/// `"{n}%"` from a fraction already clamped to [0; 1]
pub fn percent(fraction: f64) -> String {
    format!("{}%", (fraction * 100.0).round() as i64)
}
