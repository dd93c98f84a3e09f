//! The simplest scene: fill the window with one color.

use std::sync::Arc;

use super::Scene;
use crate::abs::Gpu;

pub struct ClearScene<G: Gpu> {
    gpu: Arc<G>,
    color: [f32; 4],
}

impl<G: Gpu> ClearScene<G> {
    pub fn new(gpu: &Arc<G>, color: [f32; 4]) -> Self {
        Self {
            gpu: Arc::clone(gpu),
            color,
        }
    }
}

impl<G: Gpu> Scene for ClearScene<G> {
    fn resize(&mut self, width: i32, height: i32) {
        self.gpu.viewport(0, 0, width, height);
    }

    fn render(&mut self) {
        let [r, g, b, a] = self.color;
        self.gpu.clear_color(r, g, b, a);
        self.gpu.clear(glow::COLOR_BUFFER_BIT);
    }
}
