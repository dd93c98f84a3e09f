//! Module providing the `Scene` trait, the render loop driving it, and both
//! scene implementations.

use crate::input::FrameInput;

pub mod clear;
pub mod models;

/// The Scene trait defines the common interface for everything the render
/// loop can draw.
pub trait Scene {
    /// Reacts to this frame's input before rendering.
    fn handle_input(&mut self, _input: &FrameInput) {}

    /// Called when the framebuffer changed size.
    fn resize(&mut self, _width: i32, _height: i32) {}

    /// Renders the scene.
    fn render(&mut self);
}

/// The window side of the loop: input in, finished frames out.
pub trait Platform {
    /// Drains pending window events and returns this frame's input.
    fn poll_input(&mut self) -> FrameInput;

    /// Presents the frame that was just rendered.
    fn present(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    /// A close signal was seen; the frame it arrived in is still finished.
    ClosePending,
    Terminated,
}

/// Drives a [`Scene`] one frame per iteration until a close signal arrives.
#[derive(Debug)]
pub struct RenderLoop {
    state: LoopState,
    frames: u64,
}

impl Default for RenderLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::Running,
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Number of frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Runs one iteration of the loop and returns the resulting state.
    pub fn step<P: Platform, S: Scene>(&mut self, platform: &mut P, scene: &mut S) -> LoopState {
        match self.state {
            LoopState::Running => {
                let input = platform.poll_input();
                if input.wants_close() {
                    log::info!("close requested");
                    self.state = LoopState::ClosePending;
                }
                if let Some((width, height)) = input.resized {
                    scene.resize(width, height);
                }
                scene.handle_input(&input);
                scene.render();
                platform.present();
                self.frames += 1;
            }
            LoopState::ClosePending => {
                log::info!("render loop finished after {} frames", self.frames);
                self.state = LoopState::Terminated;
            }
            LoopState::Terminated => {}
        }
        self.state
    }

    /// Steps until the loop terminates.
    pub fn run<P: Platform, S: Scene>(&mut self, platform: &mut P, scene: &mut S) {
        while self.step(platform, scene) != LoopState::Terminated {}
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;

    use super::Platform;
    use crate::input::FrameInput;

    /// Replays scripted input, then reports a close request once the script
    /// runs out.
    #[derive(Default)]
    pub struct ScriptedPlatform {
        pub inputs: VecDeque<FrameInput>,
        pub polls: usize,
        pub presented: usize,
    }

    impl ScriptedPlatform {
        pub fn new(inputs: impl IntoIterator<Item = FrameInput>) -> Self {
            Self {
                inputs: inputs.into_iter().collect(),
                ..Self::default()
            }
        }
    }

    impl Platform for ScriptedPlatform {
        fn poll_input(&mut self) -> FrameInput {
            self.polls += 1;
            self.inputs.pop_front().unwrap_or(FrameInput {
                close_requested: true,
                ..FrameInput::default()
            })
        }

        fn present(&mut self) {
            self.presented += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ScriptedPlatform;
    use super::*;
    use crate::input::Key;

    #[derive(Default)]
    struct CountingScene {
        renders: usize,
        sizes: Vec<(i32, i32)>,
    }

    impl Scene for CountingScene {
        fn resize(&mut self, width: i32, height: i32) {
            self.sizes.push((width, height));
        }

        fn render(&mut self) {
            self.renders += 1;
        }
    }

    #[test]
    fn test_escape_finishes_current_frame() {
        let mut platform = ScriptedPlatform::new([
            FrameInput::default(),
            FrameInput::with_keys(&[Key::Escape]),
            FrameInput::default(),
        ]);
        let mut scene = CountingScene::default();
        let mut render_loop = RenderLoop::new();

        assert_eq!(render_loop.step(&mut platform, &mut scene), LoopState::Running);
        assert_eq!(
            render_loop.step(&mut platform, &mut scene),
            LoopState::ClosePending
        );
        assert_eq!(scene.renders, 2);
        assert_eq!(platform.presented, 2);

        assert_eq!(
            render_loop.step(&mut platform, &mut scene),
            LoopState::Terminated
        );
        assert_eq!(
            render_loop.step(&mut platform, &mut scene),
            LoopState::Terminated
        );
        assert_eq!(scene.renders, 2);
        assert_eq!(platform.polls, 2);
        assert_eq!(render_loop.frames(), 2);
    }

    #[test]
    fn test_window_close_request_terminates() {
        let mut platform = ScriptedPlatform::default();
        let mut scene = CountingScene::default();
        let mut render_loop = RenderLoop::new();

        render_loop.run(&mut platform, &mut scene);

        assert_eq!(render_loop.state(), LoopState::Terminated);
        assert_eq!(scene.renders, 1);
    }

    #[test]
    fn test_resize_reaches_scene() {
        let mut platform = ScriptedPlatform::new([FrameInput {
            resized: Some((640, 480)),
            ..FrameInput::default()
        }]);
        let mut scene = CountingScene::default();

        RenderLoop::new().run(&mut platform, &mut scene);

        assert_eq!(scene.sizes, [(640, 480)]);
    }
}
