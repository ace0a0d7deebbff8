// src/rendering/scene.rs

use nalgebra::Vector3;
use rand::Rng;
use std::cmp::Ordering;
use std::f64::consts::{PI, TAU};

pub const BASE_SHELL_RADIUS: f64 = 50.0;
pub const SHELL_SPACING: f64 = 35.0;
pub const BASE_ORBIT_SPEED: f64 = 0.02;
pub const ORBIT_SPEED_FALLOFF: f64 = 0.002;

pub const ELECTRON_SIZE: f64 = 3.0;
pub const NUCLEUS_SIZE: f64 = 10.0;

const FOCAL_LENGTH: f64 = 500.0;
pub const DEFAULT_CAMERA_DISTANCE: f64 = 400.0;
const MIN_CAMERA_DISTANCE: f64 = 150.0;
const MAX_CAMERA_DISTANCE: f64 = 1200.0;

/// One orbiting electron. The tilt pair is assigned at creation and never
/// changes, giving each orbit a stable spatial plane.
#[derive(Debug, Clone)]
struct Particle {
    orbit_radius: f64,
    angle: f64,
    speed: f64,
    tilt_x: f64,
    tilt_y: f64,
    size: f64,
}

impl Particle {
    /// 3D position: flat circular orbit, rotated about X then Y by the tilt.
    fn position(&self) -> Vector3<f64> {
        let flat = Vector3::new(
            self.orbit_radius * self.angle.cos(),
            self.orbit_radius * self.angle.sin(),
            0.0,
        );
        rotate_about_y(rotate_about_x(flat, self.tilt_x), self.tilt_y)
    }
}

/// Viewer orientation, written by pointer events and read by the projection
/// step. Yaw and pitch stay in [-1, 1]; distance is the scroll zoom.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub yaw: f64,
    pub pitch: f64,
    pub distance: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: DEFAULT_CAMERA_DISTANCE,
        }
    }
}

impl Camera {
    /// Map a pointer position over a width x height surface to yaw/pitch.
    pub fn set_from_pointer(&mut self, px: f64, py: f64, width: f64, height: f64) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.yaw = ((px / width - 0.5) * 2.0).clamp(-1.0, 1.0);
        self.pitch = ((py / height - 0.5) * 2.0).clamp(-1.0, 1.0);
    }

    /// Scroll zoom: positive delta moves the camera away.
    pub fn zoom(&mut self, delta: f64) {
        let factor = if delta > 0.0 { 1.1 } else { 0.9 };
        self.distance = (self.distance * factor).clamp(MIN_CAMERA_DISTANCE, MAX_CAMERA_DISTANCE);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointKind {
    Nucleus,
    Electron,
}

/// One screen-space point of the current frame, ready to paint.
#[derive(Debug, Clone, Copy)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    /// Perspective factor; multiply base radii and glow extents by this.
    pub scale: f64,
    /// Camera-space depth. Larger is farther from the viewer.
    pub depth: f64,
    pub kind: PointKind,
    pub size: f64,
}

/// The animated shell model for one element: a nucleus plus one particle per
/// electron. Owned by a single detail view and dropped with it.
pub struct AtomScene {
    particles: Vec<Particle>,
    pub camera: Camera,
}

impl AtomScene {
    /// Build one particle per electron across all shells. Outer shells orbit
    /// strictly slower; each particle gets a random fixed tilt so the shells
    /// read as a cloud rather than flat rings.
    pub fn new<R: Rng>(shells: &[u32], rng: &mut R) -> Self {
        let mut particles = Vec::new();
        for (shell_index, &count) in shells.iter().enumerate() {
            let radius = BASE_SHELL_RADIUS + shell_index as f64 * SHELL_SPACING;
            let speed = BASE_ORBIT_SPEED - shell_index as f64 * ORBIT_SPEED_FALLOFF;
            for i in 0..count {
                particles.push(Particle {
                    orbit_radius: radius,
                    angle: i as f64 / count as f64 * TAU,
                    speed,
                    tilt_x: (rng.gen::<f64>() - 0.5) * PI,
                    tilt_y: (rng.gen::<f64>() - 0.5) * PI,
                    size: ELECTRON_SIZE,
                });
            }
        }
        Self {
            particles,
            camera: Camera::default(),
        }
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Advance every orbital angle by its fixed speed. Angles accumulate
    /// without wrapping; the trigonometry is periodic anyway.
    pub fn advance(&mut self) {
        for p in &mut self.particles {
            p.angle += p.speed;
        }
    }

    /// Project the nucleus and every particle to screen space and depth-sort
    /// farthest first. The ordering changes continuously, so this runs fresh
    /// every frame.
    pub fn project(&self, width: f64, height: f64) -> Vec<ProjectedPoint> {
        let mut points = Vec::with_capacity(self.particles.len() + 1);
        points.push(self.project_point(
            Vector3::zeros(),
            PointKind::Nucleus,
            NUCLEUS_SIZE,
            width,
            height,
        ));
        for p in &self.particles {
            points.push(self.project_point(p.position(), PointKind::Electron, p.size, width, height));
        }

        // Painter's algorithm: far to near.
        points.sort_by(|a, b| b.depth.partial_cmp(&a.depth).unwrap_or(Ordering::Equal));
        points
    }

    /// One animation step: advance, then project.
    pub fn frame(&mut self, width: f64, height: f64) -> Vec<ProjectedPoint> {
        self.advance();
        self.project(width, height)
    }

    fn project_point(
        &self,
        pos: Vector3<f64>,
        kind: PointKind,
        size: f64,
        width: f64,
        height: f64,
    ) -> ProjectedPoint {
        // Camera transform: yaw about Y, then pitch about X. The pointer
        // range [-1, 1] is used directly as radians.
        let rotated = rotate_about_x(rotate_about_y(pos, self.camera.yaw), self.camera.pitch);
        let depth = rotated.z;

        let denom = (FOCAL_LENGTH + depth + self.camera.distance).max(1.0);
        let scale = FOCAL_LENGTH / denom;

        ProjectedPoint {
            x: rotated.x * scale + width / 2.0,
            y: rotated.y * scale + height / 2.0,
            scale,
            depth,
            kind,
            size,
        }
    }

    #[cfg(test)]
    fn from_parts(particles: Vec<Particle>, camera: Camera) -> Self {
        Self { particles, camera }
    }
}

fn rotate_about_x(p: Vector3<f64>, angle: f64) -> Vector3<f64> {
    let (sin, cos) = angle.sin_cos();
    Vector3::new(p.x, p.y * cos - p.z * sin, p.z * cos + p.y * sin)
}

fn rotate_about_y(p: Vector3<f64>, angle: f64) -> Vector3<f64> {
    let (sin, cos) = angle.sin_cos();
    Vector3::new(p.x * cos - p.z * sin, p.y, p.z * cos + p.x * sin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sodium_scene() -> AtomScene {
        let mut rng = StdRng::seed_from_u64(42);
        AtomScene::new(&[2, 8, 1], &mut rng)
    }

    #[test]
    fn one_particle_per_electron() {
        assert_eq!(sodium_scene().particle_count(), 11);
    }

    #[test]
    fn outer_shells_strictly_slower() {
        let scene = sodium_scene();
        let mut radii: Vec<f64> = scene.particles.iter().map(|p| p.orbit_radius).collect();
        radii.sort_by(|a, b| a.partial_cmp(b).unwrap());
        radii.dedup();
        assert_eq!(radii.len(), 3);

        let speed_of = |radius: f64| {
            scene
                .particles
                .iter()
                .find(|p| p.orbit_radius == radius)
                .map(|p| p.speed)
                .unwrap()
        };
        let speeds: Vec<f64> = radii.iter().map(|&r| speed_of(r)).collect();
        for pair in speeds.windows(2) {
            assert!(pair[0] > pair[1], "speeds must strictly decrease outward");
        }
        assert!((speeds[0] - 0.02).abs() < 1e-12);
        assert!((speeds[2] - 0.016).abs() < 1e-12);
    }

    #[test]
    fn shell_radii_follow_spacing() {
        let scene = sodium_scene();
        let innermost = scene
            .particles
            .iter()
            .map(|p| p.orbit_radius)
            .fold(f64::MAX, f64::min);
        let outermost = scene
            .particles
            .iter()
            .map(|p| p.orbit_radius)
            .fold(f64::MIN, f64::max);
        assert!((innermost - 50.0).abs() < 1e-12);
        assert!((outermost - 120.0).abs() < 1e-12);
    }

    #[test]
    fn empty_shells_render_nucleus_only() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut scene = AtomScene::new(&[], &mut rng);
        assert_eq!(scene.particle_count(), 0);
        let points = scene.frame(300.0, 300.0);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].kind, PointKind::Nucleus);
        assert!((points[0].x - 150.0).abs() < 1e-9);
        assert!((points[0].y - 150.0).abs() < 1e-9);
    }

    #[test]
    fn every_frame_is_depth_sorted() {
        let mut scene = sodium_scene();
        scene.camera.yaw = 0.4;
        scene.camera.pitch = -0.7;
        for _ in 0..25 {
            let points = scene.frame(400.0, 400.0);
            assert_eq!(points.len(), 12);
            for pair in points.windows(2) {
                assert!(
                    pair[0].depth >= pair[1].depth,
                    "paint order must run far to near"
                );
            }
        }
    }

    #[test]
    fn paint_order_swaps_as_depths_cross() {
        // Two untilted electrons on the same ring, a quarter turn apart, seen
        // from a pitched camera: their camera depths are r*sin(angle)*sin(p)
        // and r*cos(angle)*sin(p), which cross when the leading angle passes
        // 45 degrees. The sizes tag which electron is which.
        let make = |angle: f64, size: f64| Particle {
            orbit_radius: 50.0,
            angle,
            speed: 0.1,
            tilt_x: 0.0,
            tilt_y: 0.0,
            size,
        };
        let camera = Camera {
            yaw: 0.0,
            pitch: 0.5,
            distance: DEFAULT_CAMERA_DISTANCE,
        };
        let mut scene = AtomScene::from_parts(vec![make(0.0, 3.0), make(PI / 2.0, 4.0)], camera);

        let electron_order = |points: &[ProjectedPoint]| -> Vec<u32> {
            points
                .iter()
                .filter(|p| p.kind == PointKind::Electron)
                .map(|p| p.size as u32)
                .collect()
        };

        // Frames 1..=7: the quarter-turn electron is still deeper.
        for _ in 0..7 {
            let points = scene.frame(400.0, 400.0);
            assert_eq!(electron_order(&points), vec![4, 3]);
        }
        // Frame 8: sin(0.8) > cos(0.8), the pair swaps.
        let points = scene.frame(400.0, 400.0);
        assert_eq!(electron_order(&points), vec![3, 4]);
    }

    #[test]
    fn perspective_shrinks_with_depth() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut scene = AtomScene::new(&[2, 8], &mut rng);
        scene.camera.pitch = 0.9;
        let points = scene.frame(400.0, 400.0);
        let far = points.first().unwrap();
        let near = points.last().unwrap();
        assert!(far.depth > near.depth);
        assert!(far.scale < near.scale, "farther points project smaller");
    }

    #[test]
    fn pointer_maps_to_bounded_camera_angles() {
        let mut camera = Camera::default();
        camera.set_from_pointer(0.0, 0.0, 200.0, 100.0);
        assert!((camera.yaw + 1.0).abs() < 1e-12);
        assert!((camera.pitch + 1.0).abs() < 1e-12);

        camera.set_from_pointer(200.0, 100.0, 200.0, 100.0);
        assert!((camera.yaw - 1.0).abs() < 1e-12);
        assert!((camera.pitch - 1.0).abs() < 1e-12);

        camera.set_from_pointer(100.0, 50.0, 200.0, 100.0);
        assert!(camera.yaw.abs() < 1e-12);
        assert!(camera.pitch.abs() < 1e-12);

        // Pointer outside the surface stays clamped.
        camera.set_from_pointer(500.0, -80.0, 200.0, 100.0);
        assert!((camera.yaw - 1.0).abs() < 1e-12);
        assert!((camera.pitch + 1.0).abs() < 1e-12);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut camera = Camera::default();
        for _ in 0..100 {
            camera.zoom(-1.0);
        }
        assert!((camera.distance - MIN_CAMERA_DISTANCE).abs() < 1e-9);
        for _ in 0..100 {
            camera.zoom(1.0);
        }
        assert!((camera.distance - MAX_CAMERA_DISTANCE).abs() < 1e-9);
    }
}
