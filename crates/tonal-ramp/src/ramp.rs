//! Ramp derivation — tone buckets, shared offsets, and step emission.
//!
//! One seed color fans out into a fixed set of sixteen tokens:
//!
//! | Token                     | Count | Meaning                                |
//! |---------------------------|-------|----------------------------------------|
//! | `prefix`                  | 1     | the seed itself, fully opaque          |
//! | `prefix/5` … `prefix/95`  | 11    | lightness steps, darkest to lightest   |
//! | `prefix/a20` … `prefix/a80` | 4   | alpha variants of the unmodified seed  |
//!
//! The seed's lightness is bucketed to its nearest decade (its "tone"), and
//! the whole ramp shares one pair of offsets derived from that bucket. The
//! offsets re-anchor the ramp around a usable mid-tone, so a near-black or
//! near-white seed still spreads across the full range instead of clipping
//! at its own end of the scale.

use tonal_color::{ColorError, Hsl};

use crate::Palette;

// ---------------------------------------------------------------------------
// Tone bucket
// ---------------------------------------------------------------------------

/// Bucket a lightness percentage to its decade (0, 10, …, 100).
///
/// Remainders above 5 advance to the next decade; a remainder of exactly 5
/// stays on the lower one. Exact multiples of 10 pass through unchanged.
/// (This is deliberately not round-half-up — 55 buckets to 50, 56 to 60.)
#[must_use]
pub const fn tone_bucket(lightness: u8) -> u8 {
    let rem = lightness % 10;
    lightness - rem + if rem > 5 { 10 } else { 0 }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate the full token ramp for one seed color.
///
/// The palette is computed in full before it is returned — generation has
/// no observable effect beyond a `tracing` debug event carrying the result.
/// Two calls with the same `(seed, prefix)` produce identical palettes.
///
/// # Errors
///
/// [`ColorError::InvalidFormat`] if `seed` is not a six-digit hex color.
pub fn generate(seed: &str, prefix: &str) -> Result<Palette, ColorError> {
    let hsl = Hsl::from_hex(seed)?;
    let tone = i32::from(tone_bucket(hsl.l));

    let h = hsl.h;
    let s = i32::from(hsl.s);
    let l = i32::from(hsl.l);

    // Extreme tones anchor to 45 instead of 50 so that near-black and
    // near-white seeds keep a spreadable mid-ramp.
    let l_offset = if tone == 0 || tone == 100 { 45 } else { 50 } - tone;
    let s_offset = tone / 5 - 10;

    let mut palette = Palette::new();
    palette.insert(prefix.to_string(), hsla(h, s, l, 1.0));

    for i in (0..=100).step_by(10) {
        let s_delta = 10 - i / 5;

        // The two end steps are renamed inward: 0 → 5 and 100 → 95.
        let ii = match i {
            0 => 5,
            100 => 95,
            _ => i,
        };
        let l_delta = ii - 50;

        let new_l = l + l_delta + l_offset;
        // A fully desaturated seed stays desaturated at every step.
        let new_s = if s == 0 { 0 } else { s + s_delta + s_offset };

        palette.insert(format!("{prefix}/{ii}"), hsla(h, new_s, new_l, 1.0));
    }

    for i in (20..=80).step_by(20) {
        let a = f64::from(i) / 100.0;
        palette.insert(format!("{prefix}/a{i}"), hsla(h, s, l, a));
    }

    tracing::debug!(seed, prefix, palette = ?palette, "generated tonal ramp");
    Ok(palette)
}

// ---------------------------------------------------------------------------
// Color strings
// ---------------------------------------------------------------------------

/// Clamp a derived percentage into the displayable 0–100 range.
fn valid(pct: i32) -> i32 {
    pct.clamp(0, 100)
}

/// Format an `hsla()` color string.
///
/// Saturation and lightness are clamped here, at string-build time, so no
/// emitted token ever carries an out-of-range percentage. Alpha renders
/// with no trailing zeros: `1`, `0.2`, `0.4`, …
fn hsla(h: u16, s: i32, l: i32, a: f64) -> String {
    format!("hsla({h}, {}%, {}%, {a})", valid(s), valid(l))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Pull the `s%` and `l%` percentages back out of an `hsla()` string.
    fn percentages(color: &str) -> (i32, i32) {
        let body = color
            .strip_prefix("hsla(")
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap();
        let parts: Vec<&str> = body.split(", ").collect();
        let s = parts[1].strip_suffix('%').unwrap().parse().unwrap();
        let l = parts[2].strip_suffix('%').unwrap().parse().unwrap();
        (s, l)
    }

    // ── Tone bucket ──────────────────────────────────────────────────────

    #[test]
    fn tone_bucket_rounds_by_remainder() {
        assert_eq!(tone_bucket(0), 0);
        assert_eq!(tone_bucket(4), 0);
        assert_eq!(tone_bucket(5), 0); // remainder of exactly 5 stays down
        assert_eq!(tone_bucket(6), 10);
        assert_eq!(tone_bucket(50), 50);
        assert_eq!(tone_bucket(55), 50);
        assert_eq!(tone_bucket(56), 60);
        assert_eq!(tone_bucket(95), 90);
        assert_eq!(tone_bucket(98), 100);
        assert_eq!(tone_bucket(100), 100);
    }

    // ── Token set ────────────────────────────────────────────────────────

    #[test]
    fn emits_exactly_sixteen_tokens_in_order() {
        let palette = generate("#3498db", "p").unwrap();
        let names: Vec<&str> = palette.iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            [
                "p", "p/5", "p/10", "p/20", "p/30", "p/40", "p/50", "p/60",
                "p/70", "p/80", "p/90", "p/95", "p/a20", "p/a40", "p/a60",
                "p/a80",
            ]
        );
    }

    // ── Mid-tone seeds ───────────────────────────────────────────────────

    #[test]
    fn mid_gray_ramp_is_the_identity_ladder() {
        // Tone 50 → both offsets are zero, and a desaturated seed keeps
        // saturation 0 everywhere, so each step's lightness is its own name.
        let palette = generate("#808080", "gray").unwrap();

        assert_eq!(palette.get("gray"), Some("hsla(0, 0%, 50%, 1)"));
        for step in [5, 10, 20, 30, 40, 50, 60, 70, 80, 90, 95] {
            assert_eq!(
                palette.get(&format!("gray/{step}")).unwrap(),
                format!("hsla(0, 0%, {step}%, 1)"),
                "step {step}"
            );
        }
    }

    #[test]
    fn pure_red_ramp_spot_values() {
        let palette = generate("#ff0000", "red").unwrap();

        assert_eq!(palette.get("red"), Some("hsla(0, 100%, 50%, 1)"));
        // Dark steps gain saturation but clamp at 100.
        assert_eq!(palette.get("red/5"), Some("hsla(0, 100%, 5%, 1)"));
        // Light steps shed saturation linearly.
        assert_eq!(palette.get("red/60"), Some("hsla(0, 98%, 60%, 1)"));
        assert_eq!(palette.get("red/95"), Some("hsla(0, 90%, 95%, 1)"));
    }

    // ── Extreme seeds ────────────────────────────────────────────────────

    #[test]
    fn white_seed_re_anchors_instead_of_clipping() {
        // Tone 100 → lightness offset −55: the ramp runs 0…90 even though
        // the seed sits at 100.
        let palette = generate("#ffffff", "w").unwrap();

        assert_eq!(palette.get("w"), Some("hsla(0, 0%, 100%, 1)"));
        assert_eq!(palette.get("w/5"), Some("hsla(0, 0%, 0%, 1)"));
        assert_eq!(palette.get("w/50"), Some("hsla(0, 0%, 45%, 1)"));
        assert_eq!(palette.get("w/95"), Some("hsla(0, 0%, 90%, 1)"));
    }

    #[test]
    fn black_seed_re_anchors_instead_of_clipping() {
        let palette = generate("#000000", "b").unwrap();

        assert_eq!(palette.get("b"), Some("hsla(0, 0%, 0%, 1)"));
        assert_eq!(palette.get("b/5"), Some("hsla(0, 0%, 0%, 1)"));
        assert_eq!(palette.get("b/50"), Some("hsla(0, 0%, 45%, 1)"));
        assert_eq!(palette.get("b/95"), Some("hsla(0, 0%, 90%, 1)"));
    }

    #[test]
    fn near_black_seed_clamps_negative_saturation() {
        // #0c0d0e → HSL(210, 8, 5): tone 0, saturation offset −10. The top
        // step would land at 8 − 10 − 10 = −12 and must clamp to 0.
        let palette = generate("#0c0d0e", "ink").unwrap();

        assert_eq!(palette.get("ink/5"), Some("hsla(210, 8%, 5%, 1)"));
        assert_eq!(palette.get("ink/95"), Some("hsla(210, 0%, 95%, 1)"));
    }

    #[test]
    fn no_step_escapes_the_percentage_range() {
        for seed in ["#ffffff", "#000000", "#ff0000", "#0c0d0e", "#fffffe"] {
            let palette = generate(seed, "x").unwrap();
            for (name, color) in palette.iter() {
                let (s, l) = percentages(color);
                assert!((0..=100).contains(&s), "{seed} {name}: s={s}");
                assert!((0..=100).contains(&l), "{seed} {name}: l={l}");
            }
        }
    }

    // ── Saturation invariant ─────────────────────────────────────────────

    #[test]
    fn desaturated_seed_stays_desaturated() {
        // #333333 → HSL(0, 0, 20): no step may invent saturation.
        let palette = generate("#333333", "slate").unwrap();
        for (name, color) in palette.iter() {
            let (s, _) = percentages(color);
            assert_eq!(s, 0, "token {name} gained saturation");
        }
    }

    // ── Alpha steps ──────────────────────────────────────────────────────

    #[test]
    fn alpha_steps_keep_the_seed_and_vary_only_alpha() {
        let palette = generate("#ff0000", "red").unwrap();

        assert_eq!(palette.get("red/a20"), Some("hsla(0, 100%, 50%, 0.2)"));
        assert_eq!(palette.get("red/a40"), Some("hsla(0, 100%, 50%, 0.4)"));
        assert_eq!(palette.get("red/a60"), Some("hsla(0, 100%, 50%, 0.6)"));
        assert_eq!(palette.get("red/a80"), Some("hsla(0, 100%, 50%, 0.8)"));
        assert_eq!(palette.get("red/a100"), None);
    }

    // ── Determinism and failure ──────────────────────────────────────────

    #[test]
    fn identical_inputs_produce_identical_palettes() {
        let a = generate("#27ae60", "green").unwrap();
        let b = generate("#27ae60", "green").unwrap();
        let entries_a: Vec<(&str, &str)> = a.iter().collect();
        let entries_b: Vec<(&str, &str)> = b.iter().collect();
        assert_eq!(entries_a, entries_b);
    }

    #[test]
    fn malformed_seed_propagates_invalid_format() {
        assert!(generate("not-a-color", "p").is_err());
        assert!(generate("#12345", "p").is_err());
    }
}
