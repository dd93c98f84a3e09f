//! Fixed camera with a switchable projection.

use glam::{Mat4, Vec3};

use crate::asset::CameraDef;

/// Camera projection type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    Perspective {
        fov_y: f32,
        aspect: f32,
        near: f32,
        far: f32,
    },
    Orthographic {
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    },
}

impl Projection {
    pub fn perspective(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Projection::Perspective {
            fov_y: fov_y_degrees.to_radians(),
            aspect,
            near,
            far,
        }
    }

    /// A view box centered on the view axis.
    pub fn orthographic(half_width: f32, half_height: f32, near: f32, far: f32) -> Self {
        Projection::Orthographic {
            left: -half_width,
            right: half_width,
            bottom: -half_height,
            top: half_height,
            near,
            far,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        match *self {
            Projection::Perspective {
                fov_y,
                aspect,
                near,
                far,
            } => Mat4::perspective_rh_gl(fov_y, aspect, near, far),
            Projection::Orthographic {
                left,
                right,
                bottom,
                top,
                near,
                far,
            } => Mat4::orthographic_rh_gl(left, right, bottom, top, near, far),
        }
    }
}

/// A camera that never moves. The only mutable state is which of its two
/// fixed projections is active.
#[derive(Debug, Clone)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    perspective: Projection,
    orthographic: Projection,
    is_orthographic: bool,
}

impl Camera {
    pub fn new(def: &CameraDef) -> Self {
        let half_width = def.ortho_half_height * def.aspect;
        Self {
            eye: Vec3::from_array(def.eye),
            target: Vec3::from_array(def.target),
            up: Vec3::from_array(def.up),
            perspective: Projection::perspective(def.fov_y_degrees, def.aspect, def.near, def.far),
            orthographic: Projection::orthographic(
                half_width,
                def.ortho_half_height,
                def.near,
                def.far,
            ),
            is_orthographic: false,
        }
    }

    pub fn is_orthographic(&self) -> bool {
        self.is_orthographic
    }

    pub fn set_orthographic(&mut self, orthographic: bool) {
        if self.is_orthographic != orthographic {
            log::debug!(
                "switched to {} projection",
                if orthographic { "orthographic" } else { "perspective" }
            );
        }
        self.is_orthographic = orthographic;
    }

    pub fn projection(&self) -> Projection {
        if self.is_orthographic {
            self.orthographic
        } else {
            self.perspective
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection().matrix()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}
