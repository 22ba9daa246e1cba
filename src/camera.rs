use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::input::Key;
use crate::math::{look_at, ortho, perspective};
use crate::traits::CameraController;

/// Discrete navigation steps. Each accepted command triggers one redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavCommand {
    Advance,
    Retreat,
    StrafeLeft,
    StrafeRight,
    TurnLeft,
    TurnRight,
    Raise,
    Lower,
    WidenFov,
    NarrowFov,
    /// Orbit: towards the pole (θ decreases)
    TiltUp,
    TiltDown,
    /// Orbit: φ decreases
    SwingLeft,
    SwingRight,
}

/// Step sizes for the free-fly camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlyTuning {
    pub move_step: f32,
    pub turn_degrees: f32,
    pub vertical_step: f32,
    pub fov_step: f32,
    pub fov_min: f32,
    pub fov_max: f32,
}

impl Default for FlyTuning {
    fn default() -> Self {
        Self {
            move_step: 1.0,
            turn_degrees: 2.0,
            vertical_step: 0.25,
            fov_step: 6.0,
            fov_min: 15.0,
            fov_max: 45.0,
        }
    }
}

/// Step sizes for the orbit camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitTuning {
    pub angle_step_degrees: f32,
    pub min_polar_degrees: f32,
}

impl Default for OrbitTuning {
    fn default() -> Self {
        Self {
            angle_step_degrees: 2.0,
            min_polar_degrees: 5.0,
        }
    }
}

/// Eye and look-at point move together; the view tilts only through `at`.
#[derive(Debug, Clone, PartialEq)]
pub struct FlyCamera {
    pub eye: Vec3,
    pub at: Vec3,
    pub up: Vec3,
    pub fovy_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub tuning: FlyTuning,
    vertical_nudge: bool,
}

impl FlyCamera {
    /// The starting fovy is clamped into the tuning's range.
    pub fn new(eye: Vec3, at: Vec3, fovy_degrees: f32, near: f32, far: f32, tuning: FlyTuning) -> Self {
        Self {
            eye,
            at,
            up: Vec3::Z,
            fovy_degrees: fovy_degrees.clamp(tuning.fov_min, tuning.fov_max),
            near,
            far,
            tuning,
            vertical_nudge: false,
        }
    }

    /// Bind Z/X to raising and lowering the camera
    pub fn with_vertical_nudge(mut self) -> Self {
        self.vertical_nudge = true;
        self
    }

    fn forward(&self) -> Option<Vec3> {
        (self.at - self.eye).try_normalize()
    }

    fn translate(&mut self, delta: Vec3) {
        self.eye += delta;
        self.at += delta;
    }

    fn set_fov(&mut self, fovy: f32) -> bool {
        let clamped = fovy.clamp(self.tuning.fov_min, self.tuning.fov_max);
        let changed = clamped != self.fovy_degrees;
        self.fovy_degrees = clamped;
        changed
    }

    fn step(&mut self, command: NavCommand) -> bool {
        let Some(fwd) = self.forward() else {
            // eye == at leaves no direction to move along
            return false;
        };
        let Some(right) = fwd.cross(self.up).try_normalize() else {
            return false;
        };
        let t = self.tuning;
        match command {
            NavCommand::Advance => self.translate(fwd * t.move_step),
            NavCommand::Retreat => self.translate(-fwd * t.move_step),
            NavCommand::StrafeLeft => self.translate(-right * t.move_step),
            NavCommand::StrafeRight => self.translate(right * t.move_step),
            NavCommand::TurnLeft | NavCommand::TurnRight => {
                let length = (self.at - self.eye).length();
                let theta = t.turn_degrees.to_radians();
                let sign = if command == NavCommand::TurnLeft { -1.0 } else { 1.0 };
                self.at += length * (theta.cos() - 1.0) * fwd + sign * length * theta.sin() * right;
            }
            NavCommand::Raise => self.translate(self.up * t.vertical_step),
            NavCommand::Lower => self.translate(-self.up * t.vertical_step),
            _ => return false,
        }
        true
    }
}

impl CameraController for FlyCamera {
    fn view_matrix(&self) -> Mat4 {
        look_at(self.eye, self.at, self.up)
    }

    fn projection(&self, aspect: f32) -> Mat4 {
        perspective(self.fovy_degrees, aspect, self.near, self.far)
    }

    fn eye(&self) -> Vec3 {
        self.eye
    }

    fn command_for(&self, key: Key) -> Option<NavCommand> {
        match key {
            Key::W => Some(NavCommand::Advance),
            Key::S => Some(NavCommand::Retreat),
            Key::A => Some(NavCommand::StrafeLeft),
            Key::D => Some(NavCommand::StrafeRight),
            Key::Q => Some(NavCommand::TurnLeft),
            Key::E => Some(NavCommand::TurnRight),
            Key::Z if self.vertical_nudge => Some(NavCommand::Raise),
            Key::X if self.vertical_nudge => Some(NavCommand::Lower),
            Key::Plus => Some(NavCommand::WidenFov),
            Key::Minus => Some(NavCommand::NarrowFov),
            _ => None,
        }
    }

    fn apply(&mut self, command: NavCommand) -> bool {
        match command {
            NavCommand::WidenFov => self.set_fov(self.fovy_degrees + self.tuning.fov_step),
            NavCommand::NarrowFov => self.set_fov(self.fovy_degrees - self.tuning.fov_step),
            NavCommand::Raise | NavCommand::Lower if !self.vertical_nudge => false,
            other => self.step(other),
        }
    }
}

/// Which horizontal axis the azimuth is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AzimuthFrom {
    /// eye = (r sinθ cosφ, r sinθ sinφ, r cosθ)
    X,
    /// eye = (r sinθ sinφ, r sinθ cosφ, r cosθ)
    Y,
}

/// Orthographic viewing volume
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoBounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl OrthoBounds {
    /// Square volume `[-half, half]²` between `near` and `far`
    pub fn square(half: f32, near: f32, far: f32) -> Self {
        Self {
            left: -half,
            right: half,
            bottom: -half,
            top: half,
            near,
            far,
        }
    }
}

/// Eye on a sphere around a fixed target, angles in radians.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    pub polar: f32,
    pub azimuth: f32,
    pub azimuth_from: AzimuthFrom,
    pub bounds: OrthoBounds,
    pub tuning: OrbitTuning,
}

impl OrbitCamera {
    pub fn new(
        radius: f32,
        polar: f32,
        azimuth: f32,
        azimuth_from: AzimuthFrom,
        bounds: OrthoBounds,
        tuning: OrbitTuning,
    ) -> Self {
        let mut camera = Self {
            target: Vec3::ZERO,
            radius,
            polar,
            azimuth,
            azimuth_from,
            bounds,
            tuning,
        };
        camera.polar = camera.clamp_polar(polar);
        camera
    }

    fn clamp_polar(&self, polar: f32) -> f32 {
        let min = self.tuning.min_polar_degrees.to_radians();
        polar.clamp(min, std::f32::consts::PI - min)
    }

    fn tilt(&mut self, delta: f32) -> bool {
        let polar = self.clamp_polar(self.polar + delta);
        let changed = polar != self.polar;
        self.polar = polar;
        changed
    }
}

impl CameraController for OrbitCamera {
    fn view_matrix(&self) -> Mat4 {
        look_at(self.eye(), self.target, Vec3::Z)
    }

    fn projection(&self, _aspect: f32) -> Mat4 {
        let b = &self.bounds;
        ortho(b.left, b.right, b.bottom, b.top, b.near, b.far)
    }

    fn eye(&self) -> Vec3 {
        let (sin_t, cos_t) = self.polar.sin_cos();
        let (sin_p, cos_p) = self.azimuth.sin_cos();
        let r = self.radius;
        let offset = match self.azimuth_from {
            AzimuthFrom::X => Vec3::new(r * sin_t * cos_p, r * sin_t * sin_p, r * cos_t),
            AzimuthFrom::Y => Vec3::new(r * sin_t * sin_p, r * sin_t * cos_p, r * cos_t),
        };
        self.target + offset
    }

    fn command_for(&self, key: Key) -> Option<NavCommand> {
        match key {
            Key::W => Some(NavCommand::TiltUp),
            Key::S => Some(NavCommand::TiltDown),
            Key::A => Some(NavCommand::SwingLeft),
            Key::D => Some(NavCommand::SwingRight),
            _ => None,
        }
    }

    fn apply(&mut self, command: NavCommand) -> bool {
        let step = self.tuning.angle_step_degrees.to_radians();
        match command {
            NavCommand::TiltUp => self.tilt(-step),
            NavCommand::TiltDown => self.tilt(step),
            NavCommand::SwingLeft => {
                self.azimuth -= step;
                true
            }
            NavCommand::SwingRight => {
                self.azimuth += step;
                true
            }
            _ => false,
        }
    }
}

/// The camera a scene is viewed through.
#[derive(Debug, Clone, PartialEq)]
pub enum CameraRig {
    Fly(FlyCamera),
    Orbit(OrbitCamera),
}

impl CameraRig {
    /// Vertical field of view, for perspective cameras only
    pub fn fovy_degrees(&self) -> Option<f32> {
        match self {
            CameraRig::Fly(camera) => Some(camera.fovy_degrees),
            CameraRig::Orbit(_) => None,
        }
    }

    fn controller(&self) -> &dyn CameraController {
        match self {
            CameraRig::Fly(camera) => camera,
            CameraRig::Orbit(camera) => camera,
        }
    }

    fn controller_mut(&mut self) -> &mut dyn CameraController {
        match self {
            CameraRig::Fly(camera) => camera,
            CameraRig::Orbit(camera) => camera,
        }
    }
}

impl CameraController for CameraRig {
    fn view_matrix(&self) -> Mat4 {
        self.controller().view_matrix()
    }

    fn projection(&self, aspect: f32) -> Mat4 {
        self.controller().projection(aspect)
    }

    fn eye(&self) -> Vec3 {
        self.controller().eye()
    }

    fn command_for(&self, key: Key) -> Option<NavCommand> {
        self.controller().command_for(key)
    }

    fn apply(&mut self, command: NavCommand) -> bool {
        self.controller_mut().apply(command)
    }
}
