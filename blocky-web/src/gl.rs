/// WebGL backend for the core `Renderer` trait.
///
/// One program, one dynamic vertex buffer; every triangle is uploaded and
/// drawn on its own, matching the immediate-mode draw calls the core issues.
use blocky_core::{Matrix4, Renderer, Rgba};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader,
    WebGlUniformLocation,
};

const RIG_VERTEX_SHADER: &str = r#"
attribute vec4 a_Position;
uniform float u_Size;
uniform mat4 u_ModelMatrix;
uniform mat4 u_GlobalRotateMatrix;
void main() {
    gl_Position = u_GlobalRotateMatrix * u_ModelMatrix * a_Position;
    gl_PointSize = u_Size;
}
"#;

const PAINT_VERTEX_SHADER: &str = r#"
attribute vec4 a_Position;
uniform float u_Size;
void main() {
    gl_Position = a_Position;
    gl_PointSize = u_Size;
}
"#;

const FRAGMENT_SHADER: &str = r#"
precision mediump float;
uniform vec4 u_FragColor;
void main() {
    gl_FragColor = u_FragColor;
}
"#;

/// Which shader pair to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Program {
    /// Global and model matrices, depth tested.
    Rig,
    /// Clip-space 2D shapes, drawn in order.
    Paint,
}

pub struct WebGlRenderer {
    gl: GL,
    buffer: WebGlBuffer,
    a_position: u32,
    u_frag_color: WebGlUniformLocation,
    u_size: WebGlUniformLocation,
    u_model_matrix: Option<WebGlUniformLocation>,
    u_global_matrix: Option<WebGlUniformLocation>,
}

impl WebGlRenderer {
    pub fn new(canvas: &HtmlCanvasElement, program: Program) -> Result<Self, JsValue> {
        let gl: GL = canvas
            .get_context("webgl2")?
            .ok_or("WebGL2 not supported")?
            .dyn_into()?;

        let vertex = match program {
            Program::Rig => RIG_VERTEX_SHADER,
            Program::Paint => PAINT_VERTEX_SHADER,
        };
        let prog = link_program(&gl, vertex, FRAGMENT_SHADER)?;
        gl.use_program(Some(&prog));

        let a_position = gl.get_attrib_location(&prog, "a_Position");
        if a_position < 0 {
            return Err("failed to get the storage location of a_Position".into());
        }
        let uniform = |name: &str| -> Result<WebGlUniformLocation, JsValue> {
            gl.get_uniform_location(&prog, name)
                .ok_or_else(|| JsValue::from_str(&format!("failed to get the storage location of {name}")))
        };
        let u_frag_color = uniform("u_FragColor")?;
        let u_size = uniform("u_Size")?;
        let (u_model_matrix, u_global_matrix) = match program {
            Program::Rig => (
                Some(uniform("u_ModelMatrix")?),
                Some(uniform("u_GlobalRotateMatrix")?),
            ),
            Program::Paint => (None, None),
        };

        let buffer = gl.create_buffer().ok_or("failed to create the buffer object")?;

        if program == Program::Rig {
            gl.enable(GL::DEPTH_TEST);
        }
        gl.clear_color(0.0, 0.0, 0.0, 1.0);
        gl.viewport(0, 0, canvas.width() as i32, canvas.height() as i32);

        let renderer = Self {
            gl,
            buffer,
            a_position: a_position as u32,
            u_frag_color,
            u_size,
            u_model_matrix,
            u_global_matrix,
        };
        renderer.set_identity();
        log::info!("WebGL ready ({:?} program)", program);
        Ok(renderer)
    }

    fn set_identity(&self) {
        let identity = Matrix4::identity().elements();
        for loc in [&self.u_model_matrix, &self.u_global_matrix].into_iter().flatten() {
            self.gl
                .uniform_matrix4fv_with_f32_array(Some(loc), false, &identity);
        }
    }

    fn upload_and_draw(&self, vertices: &[f32], size: i32, mode: u32, count: i32) {
        let gl = &self.gl;
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&self.buffer));
        // SAFETY: the view is consumed by buffer_data before any allocation
        unsafe {
            let view = js_sys::Float32Array::view(vertices);
            gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &view, GL::DYNAMIC_DRAW);
        }
        gl.vertex_attrib_pointer_with_i32(self.a_position, size, GL::FLOAT, false, 0, 0);
        gl.enable_vertex_attrib_array(self.a_position);
        gl.draw_arrays(mode, 0, count);
    }
}

impl Renderer for WebGlRenderer {
    fn clear(&mut self) {
        self.gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
    }

    fn set_global_matrix(&mut self, matrix: &Matrix4) {
        if let Some(loc) = &self.u_global_matrix {
            self.gl
                .uniform_matrix4fv_with_f32_array(Some(loc), false, &matrix.elements());
        }
    }

    fn set_model_matrix(&mut self, matrix: &Matrix4) {
        if let Some(loc) = &self.u_model_matrix {
            self.gl
                .uniform_matrix4fv_with_f32_array(Some(loc), false, &matrix.elements());
        }
    }

    fn set_frag_color(&mut self, color: Rgba) {
        let [r, g, b, a] = color.0;
        self.gl.uniform4f(Some(&self.u_frag_color), r, g, b, a);
    }

    fn set_point_size(&mut self, size: f32) {
        self.gl.uniform1f(Some(&self.u_size), size);
    }

    fn draw_triangle_3d(&mut self, vertices: &[f32; 9]) {
        self.upload_and_draw(vertices, 3, GL::TRIANGLES, 3);
    }

    fn draw_triangle_2d(&mut self, vertices: &[f32; 6]) {
        self.upload_and_draw(vertices, 2, GL::TRIANGLES, 3);
    }

    fn draw_point(&mut self, x: f32, y: f32) {
        // constant attribute instead of a buffer for a single vertex
        self.gl.disable_vertex_attrib_array(self.a_position);
        self.gl.vertex_attrib3f(self.a_position, x, y, 0.0);
        self.gl.draw_arrays(GL::POINTS, 0, 1);
    }
}

fn compile_shader(gl: &GL, src: &str, shader_type: u32) -> Result<WebGlShader, JsValue> {
    let shader = gl
        .create_shader(shader_type)
        .ok_or("could not create shader")?;
    gl.shader_source(&shader, src);
    gl.compile_shader(&shader);
    if !gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        let info = gl.get_shader_info_log(&shader).unwrap_or_default();
        log::error!("shader compile failed: {}", info);
        return Err(JsValue::from(info));
    }
    Ok(shader)
}

fn link_program(gl: &GL, vert_src: &str, frag_src: &str) -> Result<WebGlProgram, JsValue> {
    let vert = compile_shader(gl, vert_src, GL::VERTEX_SHADER)?;
    let frag = compile_shader(gl, frag_src, GL::FRAGMENT_SHADER)?;
    let prog = gl.create_program().ok_or("could not create program")?;
    gl.attach_shader(&prog, &vert);
    gl.attach_shader(&prog, &frag);
    gl.link_program(&prog);
    if !gl
        .get_program_parameter(&prog, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        let info = gl.get_program_info_log(&prog).unwrap_or_default();
        log::error!("program link failed: {}", info);
        return Err(JsValue::from(info));
    }
    Ok(prog)
}
