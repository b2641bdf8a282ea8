/// Normalized `[0, 1] -> [0, 1]` timing curves.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    Linear,
    /// `t < 0.5 ? 2t^2 : -1 + (4 - 2t)t`
    InOutQuad,
    /// `1 - (1 - t)^power`: steep start, slow tail. Larger powers are sharper.
    OutPow(f64),
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Self::OutPow(power) => 1.0 - (1.0 - t).powf(power),
        }
    }
}

/// Progress of `elapsed` through `duration`, clamped to `[0, 1]`.
///
/// A non-positive duration counts as already complete.
pub fn progress(elapsed: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return 1.0;
    }
    (elapsed / duration).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
