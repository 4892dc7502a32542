//! Light casters and the CPU side of their shading terms.
//!
//! The structs mirror the `uniform` structs in the lighting shaders field for field. The
//! [`Attenuation::at`] and [`SpotLight::intensity`] functions compute the same terms the fragment
//! shaders do, which keeps the constants honest without a GPU.

use glam::Vec3;

/// Default start position of the movable light.
pub const LIGHT_START: Vec3 = Vec3::new(1.2, 0.5, 2.0);

/// Units per second the arrow keys move the light.
pub const LIGHT_SPEED: f32 = 1.0;

/// Ambient, diffuse and specular intensities of a light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Phong {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

impl Phong {
    pub const fn new(ambient: Vec3, diffuse: Vec3, specular: Vec3) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
        }
    }

    /// A dim ambient term with strong diffuse and full specular highlights.
    pub const fn white() -> Self {
        Self::new(
            Vec3::splat(0.2),
            Vec3::splat(0.5),
            Vec3::splat(1.0),
        )
    }
}

/// Distance falloff `1 / (constant + linear * d + quadratic * d²)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Attenuation {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Attenuation {
    /// Covers a distance of roughly fifty units.
    pub const RANGE_50: Self = Self {
        constant: 1.0,
        linear: 0.09,
        quadratic: 0.032,
    };

    pub fn at(&self, distance: f32) -> f32 {
        1.0 / (self.constant + self.linear * distance + self.quadratic * distance * distance)
    }
}

/// Light coming from infinitely far away along a single direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vec3,
    pub phong: Phong,
}

/// Light radiating from a point and fading with distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub phong: Phong,
    pub attenuation: Attenuation,
}

/// A cone of light with a soft edge between the inner and outer cut-off angles.
///
/// Cut-offs are stored as cosines, which is what the shader compares against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotLight {
    pub position: Vec3,
    pub direction: Vec3,
    pub cut_off: f32,
    pub outer_cut_off: f32,
    pub phong: Phong,
    pub attenuation: Attenuation,
}

impl SpotLight {
    /// Builds a spotlight from cut-off angles in degrees. The outer angle is raised to the inner
    /// one if it is smaller.
    pub fn from_degrees(
        position: Vec3,
        direction: Vec3,
        inner_degrees: f32,
        outer_degrees: f32,
        phong: Phong,
        attenuation: Attenuation,
    ) -> Self {
        let outer_degrees = outer_degrees.max(inner_degrees);
        Self {
            position,
            direction,
            cut_off: inner_degrees.to_radians().cos(),
            outer_cut_off: outer_degrees.to_radians().cos(),
            phong,
            attenuation,
        }
    }

    /// How strongly a point at `fragment` is lit by the cone, from 0 outside the outer edge to 1
    /// inside the inner edge.
    pub fn intensity(&self, fragment: Vec3) -> f32 {
        let light_dir = (self.position - fragment).normalize_or_zero();
        let theta = light_dir.dot(-self.direction.normalize_or_zero());
        let epsilon = self.cut_off - self.outer_cut_off;
        if epsilon > 0.0 {
            ((theta - self.outer_cut_off) / epsilon).clamp(0.0, 1.0)
        } else if theta >= self.cut_off {
            1.0
        } else {
            0.0
        }
    }
}

/// Surface properties; colours come from the bound diffuse and specular maps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self { shininess: 32.0 }
    }
}

/// Arrow-key direction used to nudge a light around in the xy plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LightNudge {
    Up,
    Down,
    Left,
    Right,
}

impl LightNudge {
    /// Moves `position` by [`LIGHT_SPEED`] units per second for `delta_time` seconds.
    pub fn apply(self, position: &mut Vec3, delta_time: f32) {
        let velocity = LIGHT_SPEED * delta_time;
        match self {
            LightNudge::Up => position.y += velocity,
            LightNudge::Down => position.y -= velocity,
            LightNudge::Left => position.x -= velocity,
            LightNudge::Right => position.x += velocity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn flashlight() -> SpotLight {
        SpotLight::from_degrees(
            Vec3::ZERO,
            Vec3::NEG_Z,
            12.5,
            17.5,
            Phong::white(),
            Attenuation::RANGE_50,
        )
    }

    #[test]
    fn attenuation_is_one_at_the_source() {
        assert!((Attenuation::RANGE_50.at(0.0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn attenuation_decreases_with_distance() {
        let near = Attenuation::RANGE_50.at(1.0);
        let far = Attenuation::RANGE_50.at(10.0);
        assert!(near > far);
        assert!((far - 1.0 / (1.0 + 0.9 + 3.2)).abs() < EPSILON);
    }

    #[test]
    fn cut_offs_are_cosines() {
        let light = flashlight();
        assert!((light.cut_off - 12.5_f32.to_radians().cos()).abs() < EPSILON);
        assert!(light.outer_cut_off < light.cut_off);
    }

    #[test]
    fn spotlight_is_full_on_axis() {
        assert!((flashlight().intensity(Vec3::new(0.0, 0.0, -5.0)) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn spotlight_is_dark_outside_the_cone() {
        assert_eq!(flashlight().intensity(Vec3::new(5.0, 0.0, -5.0)), 0.0);
        assert_eq!(flashlight().intensity(Vec3::new(0.0, 0.0, 5.0)), 0.0);
    }

    #[test]
    fn spotlight_fades_between_the_edges() {
        let light = flashlight();
        let angle = 15.0_f32.to_radians();
        let fragment = Vec3::new(angle.sin(), 0.0, -angle.cos()) * 3.0;
        let intensity = light.intensity(fragment);
        assert!(intensity > 0.0 && intensity < 1.0);
    }

    #[test]
    fn hard_edged_spotlight_has_no_fade() {
        let light = SpotLight::from_degrees(
            Vec3::ZERO,
            Vec3::NEG_Z,
            10.0,
            5.0,
            Phong::white(),
            Attenuation::RANGE_50,
        );
        assert_eq!(light.cut_off, light.outer_cut_off);
        assert_eq!(light.intensity(Vec3::new(0.0, 0.0, -1.0)), 1.0);
        assert_eq!(light.intensity(Vec3::new(1.0, 0.0, -1.0)), 0.0);
    }

    #[test]
    fn zero_width_cone_lights_its_axis() {
        let light = SpotLight::from_degrees(
            Vec3::ZERO,
            Vec3::NEG_Z,
            0.0,
            0.0,
            Phong::white(),
            Attenuation::RANGE_50,
        );
        assert_eq!(light.intensity(Vec3::new(0.0, 0.0, -1.0)), 1.0);
        assert_eq!(light.intensity(Vec3::new(0.1, 0.0, -1.0)), 0.0);
    }

    #[test]
    fn five_degree_flashlight_has_a_hard_edge() {
        let light = SpotLight::from_degrees(
            Vec3::ZERO,
            Vec3::NEG_Z,
            5.0,
            5.0,
            Phong::white(),
            Attenuation::RANGE_50,
        );
        let at = |degrees: f32| {
            let angle = degrees.to_radians();
            light.intensity(Vec3::new(angle.sin(), 0.0, -angle.cos()) * 2.0)
        };
        assert_eq!(at(0.0), 1.0);
        assert_eq!(at(4.0), 1.0);
        assert_eq!(at(6.0), 0.0);
    }

    #[test]
    fn nudges_move_in_the_xy_plane() {
        let mut position = LIGHT_START;
        LightNudge::Up.apply(&mut position, 0.5);
        LightNudge::Right.apply(&mut position, 0.25);
        assert!(position.abs_diff_eq(Vec3::new(1.45, 1.0, 2.0), EPSILON));
        LightNudge::Down.apply(&mut position, 0.5);
        LightNudge::Left.apply(&mut position, 0.25);
        assert!(position.abs_diff_eq(LIGHT_START, EPSILON));
    }
}
