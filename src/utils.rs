use crate::arithmetic::BinaryOperator;

pub fn operator_list() -> String {
    BinaryOperator::ALL
        .iter()
        .map(BinaryOperator::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Shortest round-trip rendering, always with a fractional part or an exponent.
///
/// Plain notation is used for `1e-4 <= |x| < 1e16`, exponent notation with a
/// signed two-digit exponent outside of it (`1e+16`, `1.5e-05`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return String::from("nan");
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "inf" } else { "-inf" });
    }

    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{value:?}");
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return format!("{value:?}");
    };

    if value == 0.0 || (-4..16).contains(&exponent) {
        let plain = value.to_string();
        if plain.contains('.') {
            plain
        } else {
            format!("{plain}.0")
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.abs())
    }
}
