//! CSS value checks shared by the integration tests

use aura_theme::{ColorToken, Theme};

pub fn is_hex(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

pub fn is_rgba(value: &str) -> bool {
    let Some(inner) = value
        .strip_prefix("rgba(")
        .and_then(|rest| rest.strip_suffix(')'))
    else {
        return false;
    };
    let parts: Vec<&str> = inner.split(", ").collect();
    if parts.len() != 4 {
        return false;
    }
    let channels_ok = parts[..3].iter().all(|p| p.parse::<u8>().is_ok());
    let alpha_ok = parts[3]
        .parse::<f64>()
        .map(|a| (0.0..=1.0).contains(&a))
        .unwrap_or(false);
    channels_ok && alpha_ok
}

/// `linear-gradient(<angle>deg, <hex> <pct>%, ...)` or the mystical
/// `radial-gradient(circle, <rgba> 0%, transparent 70%)`
pub fn is_gradient(value: &str) -> bool {
    if let Some(inner) = value
        .strip_prefix("linear-gradient(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let mut parts = inner.split(", ");
        let angle_ok = parts
            .next()
            .and_then(|angle| angle.strip_suffix("deg"))
            .is_some_and(|deg| deg.parse::<u32>().is_ok());
        let stops: Vec<&str> = parts.collect();
        return angle_ok && stops.len() == 2 && stops.iter().all(|stop| is_stop(stop, is_hex));
    }

    value
        .strip_prefix("radial-gradient(circle, ")
        .and_then(|rest| rest.strip_suffix(", transparent 70%)"))
        .is_some_and(|stop| is_stop(stop, is_rgba))
}

fn is_stop(stop: &str, is_color: fn(&str) -> bool) -> bool {
    let Some((color, position)) = stop.rsplit_once(' ') else {
        return false;
    };
    is_color(color)
        && position
            .strip_suffix('%')
            .is_some_and(|pct| pct.parse::<u32>().is_ok())
}

/// Every color token is a non-empty CSS color, gradient, or (for blur) a px length
pub fn assert_valid_css(theme: &Theme) {
    for &token in ColorToken::all() {
        let value = theme.color(token);
        let name = theme.name();
        assert!(!value.is_empty(), "theme={name} token={token:?}");
        if token == ColorToken::MysticalBlur {
            let px = value.strip_suffix("px").unwrap_or("x");
            assert!(px.parse::<f64>().is_ok(), "theme={name} blur={value}");
        } else {
            assert!(
                is_hex(value) || is_rgba(value) || is_gradient(value),
                "theme={name} token={token:?} value={value}"
            );
        }
    }
}
