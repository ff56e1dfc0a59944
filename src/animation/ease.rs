#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Timing curves for badge transitions.
pub enum Ease {
    /// Constant speed.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in-out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in-out.
    InOutCubic,
}

impl Ease {
    /// Eased progress for `t`, clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Damped spring settling from 0 to 1 within a fixed duration.
pub struct Spring {
    /// Damping ratio; `< 1` overshoots, `1` is critical.
    pub damping_ratio: f64,
    /// Initial velocity in units of the full distance per second.
    pub initial_velocity: f64,
}

impl Spring {
    // Envelope decays to 1e-3 of the distance at the end of the duration.
    const SETTLE_LN: f64 = 6.907_755_278_982_137;

    /// Normalized displacement at `t` in `[0, 1]` of `duration_secs`.
    ///
    /// Snaps to exactly `1.0` at the end so completion lands on the target.
    pub fn apply(self, t: f64, duration_secs: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t >= 1.0 || duration_secs <= 0.0 {
            return 1.0;
        }

        let zeta = self.damping_ratio.max(1e-3);
        let secs = t * duration_secs;
        let omega = Self::SETTLE_LN / (zeta.min(1.0) * duration_secs);
        // Velocity relative to remaining distance (target - start = 1).
        let v0 = self.initial_velocity;

        if zeta < 1.0 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * omega * secs).exp();
            let b = (zeta * omega - v0) / omega_d;
            1.0 - decay * ((omega_d * secs).cos() + b * (omega_d * secs).sin())
        } else {
            let decay = (-omega * secs).exp();
            1.0 - decay * (1.0 + (omega - v0) * secs)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
