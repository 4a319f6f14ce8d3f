use crate::core::colour_mapping::kinds::ColourSchemeKinds;
use crate::core::data::colour::Colour;

const RAINBOW_FREQUENCY: f64 = 0.3;
const RAINBOW_PHASES: [f64; 3] = [0.0, 2.0, 4.0];

/// Colour for an escape count under `scheme`.
///
/// Points that reached `max_iterations` are inside the set and always map to
/// opaque black. Every channel is clamped to `0..=255` and alpha is always 255.
#[must_use]
pub fn colour_for(iterations: u32, max_iterations: u32, scheme: ColourSchemeKinds) -> Colour {
    if iterations >= max_iterations {
        return Colour::BLACK;
    }

    match scheme {
        ColourSchemeKinds::Default => banded(iterations),
        ColourSchemeKinds::Rainbow => rainbow(iterations),
        ColourSchemeKinds::Fire => fire(iterations),
        ColourSchemeKinds::Electric => electric(iterations),
    }
}

fn banded(iterations: u32) -> Colour {
    Colour::opaque(
        clamp_channel(iterations % 16 * 16),
        clamp_channel(iterations % 8 * 32),
        clamp_channel(iterations % 4 * 64),
    )
}

fn rainbow(iterations: u32) -> Colour {
    let [r, g, b] = RAINBOW_PHASES.map(|phase| {
        let wave = (RAINBOW_FREQUENCY * f64::from(iterations) + phase).sin();
        (wave * 127.0 + 128.0).round().clamp(0.0, 255.0) as u8
    });

    Colour::opaque(r, g, b)
}

fn fire(iterations: u32) -> Colour {
    Colour::opaque(
        clamp_channel(iterations.saturating_mul(8)),
        clamp_channel(iterations.saturating_mul(4)),
        0,
    )
}

fn electric(iterations: u32) -> Colour {
    Colour::opaque(
        clamp_channel(iterations.saturating_mul(4)),
        clamp_channel(iterations.saturating_mul(8)),
        clamp_channel(iterations.saturating_mul(16)),
    )
}

#[inline]
fn clamp_channel(value: u32) -> u8 {
    value.min(u32::from(u8::MAX)) as u8
}
