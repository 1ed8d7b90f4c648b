use glam::Vec2;

/// One radially symmetric Gaussian bump of the elevation profile.
#[derive(Debug, Clone, Copy)]
pub struct GaussianBump {
    pub center: Vec2,
    pub amplitude: f32,
    pub spread: f32,
}

impl GaussianBump {
    pub const fn new(center: Vec2, amplitude: f32, spread: f32) -> Self {
        GaussianBump {
            center,
            amplitude,
            spread,
        }
    }
}

/// Sum-of-Gaussians elevation profile. Read-only after construction; the
/// bump order is fixed so evaluation is deterministic down to the bit.
#[derive(Debug, Clone)]
pub struct HeightProfile {
    pub bumps: Vec<GaussianBump>,
}

impl Default for HeightProfile {
    /// The teaching-scene terrain: one broad hill, one depression and two
    /// smaller mounds.
    fn default() -> Self {
        HeightProfile {
            bumps: vec![
                GaussianBump::new(Vec2::new(-10.0, -10.0), 3.0, 10.0),
                GaussianBump::new(Vec2::new(5.0, 5.0), -1.5, 3.0),
                GaussianBump::new(Vec2::new(-3.0, 4.0), 1.0, 4.0),
                GaussianBump::new(Vec2::new(6.0, 4.0), 2.0, 4.0),
            ],
        }
    }
}

impl HeightProfile {
    /// Elevation at planar coordinates (x, y): the sum of every bump's
    /// `amplitude * exp(-(distance / spread)^2)` contribution. Smooth and
    /// defined everywhere.
    pub fn height(&self, x: f32, y: f32) -> f32 {
        let point = Vec2::new(x, y);
        let mut z = 0.0;

        for bump in &self.bumps {
            let d = point.distance(bump.center) / bump.spread;
            z += bump.amplitude * (-d * d).exp();
        }

        z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_is_deterministic() {
        let profile = HeightProfile::default();
        for (x, y) in [(0.0, 0.0), (-7.3, 2.1), (10.0, -10.0)] {
            assert_eq!(profile.height(x, y), profile.height(x, y));
        }
    }

    #[test]
    fn test_bump_amplitude_at_center() {
        // a lone bump evaluates to exactly its amplitude at its own center
        for bump in HeightProfile::default().bumps {
            let lone = HeightProfile { bumps: vec![bump] };
            assert_eq!(lone.height(bump.center.x, bump.center.y), bump.amplitude);
        }
    }

    #[test]
    fn test_bumps_fade_out() {
        let profile = HeightProfile::default();
        // far from every center the surface flattens to zero
        assert!(profile.height(500.0, 500.0).abs() < 1e-6);
    }

    #[test]
    fn test_default_profile_constants() {
        let profile = HeightProfile::default();
        assert_eq!(profile.bumps.len(), 4);
        assert_eq!(profile.bumps[0].center, Vec2::new(-10.0, -10.0));
        assert_eq!(profile.bumps[0].amplitude, 3.0);
        assert_eq!(profile.bumps[1].amplitude, -1.5);
        assert_eq!(profile.bumps[3].spread, 4.0);
    }
}
