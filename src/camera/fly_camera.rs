use cgmath::{Angle, Deg, EuclideanSpace, Matrix4, Point3, Vector3};

use super::camera_utils::Camera;
use crate::gfx::{context::RenderContext, shader_uniforms::ShaderUniforms};

/// Uniform name the camera publishes its view transform under.
pub const VIEW_UNIFORM: &str = "view";

/// Polar-angle clamp range used by [`FlyCamera::look`], one degree off the
/// global-up poles.
const MIN_POLAR: f32 = 1.0;
const MAX_POLAR: f32 = 179.0;

/// Construction record for [`FlyCamera`]. Angles are in degrees.
#[derive(Debug, Clone, Copy)]
pub struct FlyCameraDescriptor {
    pub position: Vector3<f32>,
    /// `eulers.y` is the polar angle measured from global +Z, `eulers.z` the
    /// heading in the XY plane. `eulers.x` is stored but not read by the view
    /// computation.
    pub eulers: Vector3<f32>,
}

/// Free-look camera in a Z-up world.
///
/// Holds a position and Euler angles; everything else (basis, view matrix) is
/// derived fresh per call and never cached. Fields are public so movement code
/// can drive them between frames.
///
/// The derived basis degenerates when `eulers.y` sits on a multiple of 180
/// degrees, where forwards is parallel to global up. Construction does not
/// reject such orientations; [`FlyCamera::look`] clamps away from the poles,
/// direct field writes do not.
#[derive(Debug, Clone, Copy)]
pub struct FlyCamera {
    pub position: Vector3<f32>,
    pub eulers: Vector3<f32>,
}

/// Right-handed frame derived from the camera orientation.
#[derive(Debug, Clone, Copy)]
pub struct CameraBasis {
    pub forwards: Vector3<f32>,
    pub right: Vector3<f32>,
    pub up: Vector3<f32>,
}

impl FlyCamera {
    /// Stores the descriptor fields verbatim. No validation.
    pub fn new(create_info: &FlyCameraDescriptor) -> Self {
        Self {
            position: create_info.position,
            eulers: create_info.eulers,
        }
    }

    /// Forward direction from the spherical angles. Unit length for any
    /// orientation, since the components are products of sines and cosines.
    pub fn forwards(&self) -> Vector3<f32> {
        let polar = Deg(self.eulers.y);
        let heading = Deg(self.eulers.z);
        Vector3::new(
            polar.sin() * heading.cos(),
            polar.sin() * heading.sin(),
            polar.cos(),
        )
    }

    /// Derives the full camera frame: `right = forwards x Z`,
    /// `up = right x forwards`.
    pub fn basis(&self) -> CameraBasis {
        let forwards = self.forwards();
        let right = forwards.cross(Vector3::unit_z());
        let up = right.cross(forwards);
        CameraBasis { forwards, right, up }
    }

    /// Publishes the current view transform to the `"view"` uniform.
    ///
    /// Reads the camera state without mutating it. If `uniforms` declares no
    /// `"view"` entry the write is dropped, mirroring how GL treats an
    /// unmatched uniform name.
    pub fn update(&self, ctx: &RenderContext, uniforms: &mut ShaderUniforms) {
        uniforms.set_mat4(ctx.queue(), VIEW_UNIFORM, self.view_matrix());
    }

    /// Walks in the XY plane. `direction` is an offset in degrees from the
    /// current heading (0 = straight ahead, 90 = strafe left), `amount` the
    /// distance to cover. Height is unaffected.
    pub fn walk(&mut self, direction: f32, amount: f32) {
        let bearing = Deg((direction + self.eulers.z).rem_euclid(360.0));
        self.position.x += amount * bearing.cos();
        self.position.y += amount * bearing.sin();
    }

    /// Turns the camera. The heading wraps modulo 360; the polar angle is
    /// clamped inside (0, 180) so the derived basis stays non-degenerate.
    pub fn look(&mut self, d_heading: f32, d_polar: f32) {
        self.eulers.z = (self.eulers.z + d_heading).rem_euclid(360.0);
        self.eulers.y = (self.eulers.y + d_polar).clamp(MIN_POLAR, MAX_POLAR);
    }
}

impl Camera for FlyCamera {
    fn view_matrix(&self) -> Matrix4<f32> {
        let CameraBasis { forwards, up, .. } = self.basis();
        let eye = Point3::from_vec(self.position);
        let target = Point3::from_vec(self.position + forwards);
        Matrix4::look_at_rh(eye, target, up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use cgmath::{InnerSpace, Vector4};

    const EPS: f32 = 1e-5;

    fn camera(position: [f32; 3], eulers: [f32; 3]) -> FlyCamera {
        FlyCamera::new(&FlyCameraDescriptor {
            position: Vector3::from(position),
            eulers: Vector3::from(eulers),
        })
    }

    fn sample_orientations() -> Vec<FlyCamera> {
        let mut cameras = Vec::new();
        for polar in [30.0, 45.0, 90.0, 135.0, 170.0] {
            for heading in [0.0, 45.0, 90.0, 200.0, 315.0] {
                cameras.push(camera([1.0, -2.0, 0.5], [0.0, polar, heading]));
            }
        }
        cameras
    }

    #[test]
    fn forwards_is_unit_length_off_the_poles() {
        for cam in sample_orientations() {
            assert_abs_diff_eq!(cam.forwards().magnitude(), 1.0, epsilon = EPS);
        }
    }

    #[test]
    fn basis_is_pairwise_orthogonal() {
        for cam in sample_orientations() {
            let basis = cam.basis();
            assert_abs_diff_eq!(basis.forwards.dot(basis.right), 0.0, epsilon = EPS);
            assert_abs_diff_eq!(basis.forwards.dot(basis.up), 0.0, epsilon = EPS);
            assert_abs_diff_eq!(basis.right.dot(basis.up), 0.0, epsilon = EPS);
        }
    }

    #[test]
    fn zero_eulers_point_along_global_up() {
        // The degenerate orientation: forwards coincides with global up and
        // the cross products collapse.
        let forwards = camera([0.0, 0.0, 0.0], [0.0, 0.0, 0.0]).forwards();
        assert_abs_diff_eq!((forwards - Vector3::unit_z()).magnitude(), 0.0, epsilon = EPS);
    }

    #[test]
    fn ninety_degree_polar_faces_plus_x() {
        let cam = camera([0.0, 0.0, 0.0], [0.0, 90.0, 0.0]);
        let forwards = cam.forwards();
        assert_abs_diff_eq!((forwards - Vector3::unit_x()).magnitude(), 0.0, epsilon = EPS);

        // Point two units ahead of the eye maps to (0, 0, -2) in camera
        // space: right-handed view space looks down -Z.
        let viewed = cam.view_matrix() * Vector4::new(2.0, 0.0, 0.0, 1.0);
        assert_abs_diff_eq!(viewed.x, 0.0, epsilon = EPS);
        assert_abs_diff_eq!(viewed.y, 0.0, epsilon = EPS);
        assert_abs_diff_eq!(viewed.z, -2.0, epsilon = EPS);
        assert_abs_diff_eq!(viewed.w, 1.0, epsilon = EPS);
    }

    #[test]
    fn view_matrix_matches_look_at() {
        let cam = camera([3.0, -1.0, 2.0], [0.0, 60.0, 130.0]);
        let CameraBasis { forwards, up, .. } = cam.basis();
        let expected = Matrix4::look_at_rh(
            Point3::from_vec(cam.position),
            Point3::from_vec(cam.position + forwards),
            up,
        );
        let view = cam.view_matrix();
        let lhs: [[f32; 4]; 4] = view.into();
        let rhs: [[f32; 4]; 4] = expected.into();
        for (a, b) in lhs.iter().flatten().zip(rhs.iter().flatten()) {
            assert_abs_diff_eq!(*a, *b, epsilon = EPS);
        }
    }

    #[test]
    fn eye_maps_to_view_space_origin() {
        let cam = camera([3.0, -1.0, 2.0], [0.0, 75.0, 220.0]);
        let eye = Vector4::new(cam.position.x, cam.position.y, cam.position.z, 1.0);
        let viewed = cam.view_matrix() * eye;
        assert_abs_diff_eq!(viewed.x, 0.0, epsilon = EPS);
        assert_abs_diff_eq!(viewed.y, 0.0, epsilon = EPS);
        assert_abs_diff_eq!(viewed.z, 0.0, epsilon = EPS);
    }

    #[test]
    fn view_math_leaves_state_untouched() {
        let cam = camera([1.0, 2.0, 3.0], [0.0, 80.0, 45.0]);
        let (position, eulers) = (cam.position, cam.eulers);
        let _ = cam.forwards();
        let _ = cam.basis();
        let _ = cam.view_matrix();
        assert_eq!(cam.position, position);
        assert_eq!(cam.eulers, eulers);
    }

    #[test]
    fn walk_follows_heading() {
        let mut cam = camera([0.0, 0.0, 0.0], [0.0, 90.0, 90.0]);
        cam.walk(0.0, 2.0);
        assert_abs_diff_eq!(cam.position.x, 0.0, epsilon = EPS);
        assert_abs_diff_eq!(cam.position.y, 2.0, epsilon = EPS);
        assert_abs_diff_eq!(cam.position.z, 0.0, epsilon = EPS);
    }

    #[test]
    fn walk_direction_offset_wraps() {
        // Heading 270 plus a 180 degree offset comes back around to +Y.
        let mut cam = camera([0.0, 0.0, 5.0], [0.0, 90.0, 270.0]);
        cam.walk(180.0, 1.0);
        assert_abs_diff_eq!(cam.position.x, 0.0, epsilon = EPS);
        assert_abs_diff_eq!(cam.position.y, 1.0, epsilon = EPS);
        assert_abs_diff_eq!(cam.position.z, 5.0, epsilon = EPS);
    }

    #[test]
    fn look_wraps_heading_and_clamps_polar() {
        let mut cam = camera([0.0, 0.0, 0.0], [0.0, 170.0, 350.0]);
        cam.look(20.0, 30.0);
        assert_abs_diff_eq!(cam.eulers.z, 10.0, epsilon = EPS);
        assert_abs_diff_eq!(cam.eulers.y, 179.0, epsilon = EPS);

        cam.look(0.0, -500.0);
        assert_abs_diff_eq!(cam.eulers.y, 1.0, epsilon = EPS);
    }
}
