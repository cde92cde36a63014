//! Bézier-Auswertung beliebigen Grades (de-Casteljau-Reduktion) und Polylinien-Sampling.
//!
//! Alle Funktionen sind rein: sie lesen nur ihre Eingabe und halten keinen Zustand.

use glam::Vec2;

/// Lineare Interpolation `a·(1-t) + b·t`.
///
/// Algebraisch identisch mit `a + t·(b-a)`, liefert aber bei `t = 0` exakt `a`
/// und bei `t = 1` exakt `b`.
#[inline]
fn lerp(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a * (1.0 - t) + b * t
}

/// Reduziert `work` in-place, bis nur noch ein Punkt übrig ist, und gibt ihn zurück.
///
/// Jede Runde ersetzt `len` Punkte durch `len-1` paarweise Interpolationen.
fn reduce(work: &mut [Vec2], t: f32) -> Vec2 {
    let mut len = work.len();
    match len {
        0 => return Vec2::ZERO,
        1 => return work[0],
        _ => {}
    }
    while len > 2 {
        for i in 1..len {
            work[i - 1] = lerp(work[i - 1], work[i], t);
        }
        len -= 1;
    }
    lerp(work[0], work[1], t)
}

/// Wertet die Bézier-Kurve der gegebenen Kontrollpunkte bei `t` aus.
///
/// - Ein einzelner Punkt wird unverändert zurückgegeben, eine leere Liste liefert `Vec2::ZERO`.
/// - `t` wird nicht geklemmt; Werte außerhalb von `[0, 1]` extrapolieren.
pub fn evaluate(points: &[Vec2], t: f32) -> Vec2 {
    let mut work = points.to_vec();
    reduce(&mut work, t)
}

/// Geschlossene Bernstein-Form: `B(t) = Σ C(n,i)·(1-t)^(n-i)·t^i·P_i`.
///
/// Numerisch weniger stabil als [`evaluate`] bei hohem Grad; dient als Referenz.
pub fn bernstein(points: &[Vec2], t: f32) -> Vec2 {
    let Some(n) = points.len().checked_sub(1) else {
        return Vec2::ZERO;
    };
    let inv = 1.0 - t;
    let mut binomial = 1.0f64;
    let mut sum = Vec2::ZERO;
    for (i, &p) in points.iter().enumerate() {
        let weight = binomial as f32 * inv.powi((n - i) as i32) * t.powi(i as i32);
        sum += weight * p;
        // C(n, i+1) = C(n, i) · (n-i) / (i+1)
        binomial = binomial * (n - i) as f64 / (i + 1) as f64;
    }
    sum
}

/// Anzahl Segmente für eine Schrittweite (mindestens 1).
pub fn segment_count(step: f32) -> usize {
    if step.is_finite() && step > 0.0 {
        (1.0 / step).round().max(1.0) as usize
    } else {
        1
    }
}

/// Tastet die Kurve in gleichmäßigen Parameter-Schritten ab.
///
/// Liefert `segment_count(step) + 1` Punkte; `t = 0` und `t = 1` sind immer enthalten.
pub fn sample_polyline(points: &[Vec2], step: f32) -> Vec<Vec2> {
    let segments = segment_count(step);
    let mut work = Vec::with_capacity(points.len());
    let mut polyline = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let t = i as f32 / segments as f32;
        work.clear();
        work.extend_from_slice(points);
        polyline.push(reduce(&mut work, t));
    }
    polyline
}

/// Approximierte Kurvenlänge über Polylinien-Segmente.
pub fn approx_length(polyline: &[Vec2]) -> f32 {
    polyline.windows(2).map(|w| w[0].distance(w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_points(count: usize) -> Vec<Vec2> {
        (0..count)
            .map(|i| {
                let f = i as f32;
                Vec2::new(f * 37.5 - 12.0, (f * 1.7).sin() * 80.0 + f * 3.0)
            })
            .collect()
    }

    #[test]
    fn linear_midpoint() {
        let points = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)];
        assert_eq!(evaluate(&points, 0.5), Vec2::new(5.0, 0.0));
    }

    #[test]
    fn quadratic_endpoints_and_midpoint() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
        ];
        assert_eq!(evaluate(&points, 0.0), points[0]);
        assert_eq!(evaluate(&points, 1.0), points[2]);

        let mid = evaluate(&points, 0.5);
        assert_relative_eq!(mid.x, 7.5);
        assert_relative_eq!(mid.y, 2.5);
    }

    #[test]
    fn reduction_matches_bernstein_sum() {
        for count in 2..=7 {
            let points = sample_points(count);
            for step in 0..=20 {
                let t = step as f32 / 20.0;
                let reduced = evaluate(&points, t);
                let closed = bernstein(&points, t);
                assert_relative_eq!(reduced.x, closed.x, epsilon = 1e-3);
                assert_relative_eq!(reduced.y, closed.y, epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn endpoints_are_exact_for_any_sequence() {
        for count in 2..=12 {
            let points = sample_points(count);
            assert_eq!(evaluate(&points, 0.0), points[0]);
            assert_eq!(evaluate(&points, 1.0), points[count - 1]);
        }
    }

    #[test]
    fn evaluation_is_repeatable() {
        let points = sample_points(5);
        let first = evaluate(&points, 0.37);
        let second = evaluate(&points, 0.37);
        assert_eq!(first, second);
    }

    #[test]
    fn evaluate_does_not_touch_input() {
        let points = sample_points(4);
        let before = points.clone();
        let _ = evaluate(&points, 0.6);
        assert_eq!(points, before);
    }

    #[test]
    fn single_point_degenerates_to_itself() {
        let p = Vec2::new(3.0, 4.0);
        assert_eq!(evaluate(&[p], 0.3), p);
        assert_eq!(evaluate(&[], 0.3), Vec2::ZERO);
    }

    #[test]
    fn parameter_outside_unit_interval_extrapolates() {
        let points = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)];
        assert_relative_eq!(evaluate(&points, 1.5).x, 15.0);
        assert_relative_eq!(evaluate(&points, -0.5).x, -5.0);
    }

    #[test]
    fn sample_polyline_includes_both_ends() {
        let points = sample_points(4);
        let polyline = sample_polyline(&points, 0.001);
        assert_eq!(polyline.len(), 1001);
        assert_eq!(polyline[0], points[0]);
        assert_eq!(polyline[1000], points[3]);
    }

    #[test]
    fn sample_polyline_matches_pointwise_evaluation() {
        let points = sample_points(6);
        let polyline = sample_polyline(&points, 0.1);
        assert_eq!(polyline.len(), 11);
        for (i, p) in polyline.iter().enumerate() {
            assert_eq!(*p, evaluate(&points, i as f32 / 10.0));
        }
    }

    #[test]
    fn invalid_step_falls_back_to_single_segment() {
        assert_eq!(segment_count(0.0), 1);
        assert_eq!(segment_count(-1.0), 1);
        assert_eq!(segment_count(f32::NAN), 1);
        assert_eq!(segment_count(5.0), 1);
        assert_eq!(segment_count(0.25), 4);
    }

    #[test]
    fn approx_length_of_straight_line() {
        let points = [Vec2::new(0.0, 0.0), Vec2::new(30.0, 40.0)];
        let polyline = sample_polyline(&points, 0.01);
        assert_relative_eq!(approx_length(&polyline), 50.0, epsilon = 1e-3);
        assert_eq!(approx_length(&[]), 0.0);
    }
}
