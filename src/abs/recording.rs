//! An in-memory [`Gpu`] that records every call, for tests.
//!
//! Object handles are plain integers from a single counter, so no two objects
//! of any kind ever share a handle. A shader fails to compile when its source
//! has no `main` entry point or contains `#error`.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use super::Gpu;

#[derive(Debug, Clone, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Vec3([f32; 3]),
    Mat4([f32; 16]),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    BufferData { target: u32, bytes: usize, usage: u32 },
    VertexAttrib { index: u32, size: i32, stride: i32, offset: i32 },
    UseProgram(Option<u32>),
    BindVertexArray(Option<u32>),
    Uniform { name: String, value: UniformValue },
    Enable(u32),
    Viewport { width: i32, height: i32 },
    ClearColor([f32; 4]),
    Clear(u32),
    DrawElements { mode: u32, count: i32, element_type: u32 },
}

#[derive(Default)]
pub struct RecordingGpu {
    next_handle: Cell<u32>,
    pub fail_link: Cell<bool>,
    /// How many more buffers may be created before allocation fails.
    /// `None` never fails.
    pub buffers_left: Cell<Option<usize>>,
    pub calls: RefCell<Vec<Call>>,
    pub live_buffers: RefCell<HashSet<u32>>,
    pub live_vertex_arrays: RefCell<HashSet<u32>>,
    pub live_shaders: RefCell<HashSet<u32>>,
    pub live_programs: RefCell<HashSet<u32>>,
    sources: RefCell<HashMap<u32, String>>,
    compiled: RefCell<HashMap<u32, bool>>,
    attached: RefCell<HashMap<u32, Vec<u32>>>,
    locations: RefCell<HashMap<u32, String>>,
    pub location_queries: RefCell<Vec<String>>,
}

impl RecordingGpu {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&self) -> u32 {
        let handle = self.next_handle.get() + 1;
        self.next_handle.set(handle);
        handle
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    pub fn draw_counts(&self) -> Vec<i32> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::DrawElements { count, .. } => Some(*count),
                _ => None,
            })
            .collect()
    }

    /// Every value uploaded to the uniform `name`, in call order.
    pub fn uniform_values(&self, name: &str) -> Vec<UniformValue> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::Uniform { name: n, value } if n == name => Some(value.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl Gpu for RecordingGpu {
    type Buffer = u32;
    type VertexArray = u32;
    type Shader = u32;
    type Program = u32;
    type UniformLocation = u32;

    fn create_buffer(&self) -> Result<u32, String> {
        if let Some(left) = self.buffers_left.get() {
            if left == 0 {
                return Err("out of memory".to_string());
            }
            self.buffers_left.set(Some(left - 1));
        }
        let handle = self.handle();
        self.live_buffers.borrow_mut().insert(handle);
        Ok(handle)
    }

    fn bind_buffer(&self, _target: u32, _buffer: Option<u32>) {}

    fn buffer_data(&self, target: u32, data: &[u8], usage: u32) {
        self.record(Call::BufferData {
            target,
            bytes: data.len(),
            usage,
        });
    }

    fn delete_buffer(&self, buffer: u32) {
        self.live_buffers.borrow_mut().remove(&buffer);
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        let handle = self.handle();
        self.live_vertex_arrays.borrow_mut().insert(handle);
        Ok(handle)
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        self.record(Call::BindVertexArray(vertex_array));
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        self.live_vertex_arrays.borrow_mut().remove(&vertex_array);
    }

    fn vertex_attrib_f32(&self, index: u32, size: i32, stride: i32, offset: i32) {
        self.record(Call::VertexAttrib {
            index,
            size,
            stride,
            offset,
        });
    }

    fn create_shader(&self, _shader_type: u32) -> Result<u32, String> {
        let handle = self.handle();
        self.live_shaders.borrow_mut().insert(handle);
        Ok(handle)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        self.sources.borrow_mut().insert(shader, source.to_owned());
    }

    fn compile_shader(&self, shader: u32) {
        let ok = self
            .sources
            .borrow()
            .get(&shader)
            .is_some_and(|source| source.contains("void main") && !source.contains("#error"));
        self.compiled.borrow_mut().insert(shader, ok);
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.compiled.borrow().get(&shader).copied().unwrap_or(false)
    }

    fn shader_info_log(&self, shader: u32) -> String {
        if self.shader_compile_status(shader) {
            String::new()
        } else {
            "0:1(1): error: syntax error, unexpected end of file".to_owned()
        }
    }

    fn delete_shader(&self, shader: u32) {
        self.live_shaders.borrow_mut().remove(&shader);
    }

    fn create_program(&self) -> Result<u32, String> {
        let handle = self.handle();
        self.live_programs.borrow_mut().insert(handle);
        Ok(handle)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.attached
            .borrow_mut()
            .entry(program)
            .or_default()
            .push(shader);
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        if let Some(shaders) = self.attached.borrow_mut().get_mut(&program) {
            shaders.retain(|s| *s != shader);
        }
    }

    fn link_program(&self, _program: u32) {}

    fn program_link_status(&self, program: u32) -> bool {
        !self.fail_link.get() && self.attached.borrow().get(&program).is_some_and(|s| s.len() == 2)
    }

    fn program_info_log(&self, program: u32) -> String {
        if self.program_link_status(program) {
            String::new()
        } else {
            "error: linking with uncompiled/unspecialized shader".to_owned()
        }
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(Call::UseProgram(program));
    }

    fn delete_program(&self, program: u32) {
        self.live_programs.borrow_mut().remove(&program);
    }

    fn uniform_location(&self, _program: u32, name: &str) -> Option<u32> {
        self.location_queries.borrow_mut().push(name.to_owned());
        if name.starts_with("u_missing") {
            return None;
        }
        let handle = self.handle();
        self.locations.borrow_mut().insert(handle, name.to_owned());
        Some(handle)
    }

    fn uniform_f32(&self, location: &u32, value: f32) {
        let name = self.locations.borrow()[location].clone();
        self.record(Call::Uniform {
            name,
            value: UniformValue::Float(value),
        });
    }

    fn uniform_vec3(&self, location: &u32, x: f32, y: f32, z: f32) {
        let name = self.locations.borrow()[location].clone();
        self.record(Call::Uniform {
            name,
            value: UniformValue::Vec3([x, y, z]),
        });
    }

    fn uniform_mat4(&self, location: &u32, columns: &[f32; 16]) {
        let name = self.locations.borrow()[location].clone();
        self.record(Call::Uniform {
            name,
            value: UniformValue::Mat4(*columns),
        });
    }

    fn enable(&self, capability: u32) {
        self.record(Call::Enable(capability));
    }

    fn viewport(&self, _x: i32, _y: i32, width: i32, height: i32) {
        self.record(Call::Viewport { width, height });
    }

    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.record(Call::ClearColor([red, green, blue, alpha]));
    }

    fn clear(&self, mask: u32) {
        self.record(Call::Clear(mask));
    }

    fn draw_elements(&self, mode: u32, count: i32, element_type: u32, _offset: i32) {
        self.record(Call::DrawElements {
            mode,
            count,
            element_type,
        });
    }
}
