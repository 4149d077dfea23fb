//! Output formatting compatible with C's `%W.Pe`.
use tensor::PrincipalStresses;

pub const WIDTH: usize = 12;
pub const PRECISION: usize = 4;

/// Scientific notation with `precision` fractional digits and an exponent of at
/// least two digits with explicit sign, right aligned to `width`.
/// `sci(123.45, 12, 4) == "  1.2345e+02"`
pub fn sci(value: f64, width: usize, precision: usize) -> String {
    let body = if value.is_nan() {
        if value.is_sign_negative() {
            "-nan".to_string()
        } else {
            "nan".to_string()
        }
    } else if value.is_infinite() {
        if value > 0.0 {
            "inf".to_string()
        } else {
            "-inf".to_string()
        }
    } else {
        let s = format!("{:.*e}", precision, value);
        match s.split_once('e') {
            Some((mantissa, exp)) => {
                let (sign, digits) = match exp.strip_prefix('-') {
                    Some(d) => ('-', d),
                    None => ('+', exp),
                };
                format!("{}e{}{:0>2}", mantissa, sign, digits)
            }
            None => s,
        }
    };
    format!("{:>width$}", body, width = width)
}

/// the three principal stresses as appended to a line, `" %12.4e %12.4e %12.4e"`
pub fn suffix(p: &PrincipalStresses) -> String {
    format!(
        " {} {} {}",
        sci(p.p1(), WIDTH, PRECISION),
        sci(p.p2(), WIDTH, PRECISION),
        sci(p.p3(), WIDTH, PRECISION)
    )
}

/// the raw line, unchanged, followed by [`suffix`]
pub fn augment(raw: &[u8], p: &PrincipalStresses) -> Vec<u8> {
    let mut line = raw.to_vec();
    line.extend_from_slice(suffix(p).as_bytes());
    line
}
