//! WebGL2 backend for the engine's `RenderFrame`.
//!
//! One shader program handles both material models: basic materials write
//! their flat color, standard materials get ambient plus point-light diffuse
//! and a Blinn-Phong highlight shaped by roughness and metalness.

use orrery_engine::geometry;
use orrery_engine::{DrawItem, Geometry, RenderFrame, Renderer, Shading};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader,
    WebGlUniformLocation, WebGlVertexArrayObject,
};

use crate::dom::js_error;

/// Point lights beyond this count are ignored by the shader.
pub const MAX_LIGHTS: usize = 4;

const VERTEX_SHADER: &str = r#"#version 300 es
layout(location = 0) in vec3 a_position;
layout(location = 1) in vec3 a_normal;

uniform mat4 u_view_proj;
uniform mat4 u_model;

out vec3 v_world;
out vec3 v_normal;

void main() {
    vec4 world = u_model * vec4(a_position, 1.0);
    v_world = world.xyz;
    v_normal = mat3(u_model) * a_normal;
    gl_Position = u_view_proj * world;
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 300 es
precision highp float;

const int MAX_LIGHTS = 4;

in vec3 v_world;
in vec3 v_normal;

uniform vec3 u_color;
uniform float u_opacity;
uniform int u_lit;
uniform vec3 u_emissive;
uniform float u_roughness;
uniform float u_metalness;

uniform vec3 u_eye;
uniform vec3 u_ambient;
uniform int u_light_count;
uniform vec3 u_light_pos[MAX_LIGHTS];
uniform vec3 u_light_radiance[MAX_LIGHTS];
uniform float u_light_range[MAX_LIGHTS];

out vec4 frag_color;

float range_falloff(float d, float range) {
    if (range <= 0.0) {
        return 1.0;
    }
    float r = d / range;
    float w = clamp(1.0 - r * r * r * r, 0.0, 1.0);
    return w * w;
}

void main() {
    if (u_lit == 0) {
        frag_color = vec4(u_color, u_opacity);
        return;
    }

    vec3 n = normalize(v_normal);
    if (!gl_FrontFacing) {
        n = -n;
    }
    vec3 v = normalize(u_eye - v_world);

    vec3 diffuse = u_color * (1.0 - u_metalness);
    vec3 f0 = mix(vec3(0.04), u_color, u_metalness);
    float shininess = mix(128.0, 2.0, u_roughness);

    vec3 light = u_ambient * diffuse;
    for (int i = 0; i < MAX_LIGHTS; i++) {
        if (i >= u_light_count) {
            break;
        }
        vec3 to_light = u_light_pos[i] - v_world;
        float d = length(to_light);
        vec3 l = to_light / max(d, 1e-4);
        float ndl = max(dot(n, l), 0.0);
        vec3 h = normalize(l + v);
        float spec = pow(max(dot(n, h), 0.0), shininess) * ndl;
        vec3 radiance = u_light_radiance[i] * range_falloff(d, u_light_range[i]);
        light += radiance * (diffuse * ndl + f0 * spec);
    }

    frag_color = vec4(light + u_emissive, u_opacity);
}
"#;

struct Uniforms {
    view_proj: Option<WebGlUniformLocation>,
    model: Option<WebGlUniformLocation>,
    color: Option<WebGlUniformLocation>,
    opacity: Option<WebGlUniformLocation>,
    lit: Option<WebGlUniformLocation>,
    emissive: Option<WebGlUniformLocation>,
    roughness: Option<WebGlUniformLocation>,
    metalness: Option<WebGlUniformLocation>,
    eye: Option<WebGlUniformLocation>,
    ambient: Option<WebGlUniformLocation>,
    light_count: Option<WebGlUniformLocation>,
    light_pos: Option<WebGlUniformLocation>,
    light_radiance: Option<WebGlUniformLocation>,
    light_range: Option<WebGlUniformLocation>,
}

impl Uniforms {
    fn locate(gl: &GL, program: &WebGlProgram) -> Self {
        let loc = |name: &str| gl.get_uniform_location(program, name);
        Self {
            view_proj: loc("u_view_proj"),
            model: loc("u_model"),
            color: loc("u_color"),
            opacity: loc("u_opacity"),
            lit: loc("u_lit"),
            emissive: loc("u_emissive"),
            roughness: loc("u_roughness"),
            metalness: loc("u_metalness"),
            eye: loc("u_eye"),
            ambient: loc("u_ambient"),
            light_count: loc("u_light_count"),
            light_pos: loc("u_light_pos"),
            light_radiance: loc("u_light_radiance"),
            light_range: loc("u_light_range"),
        }
    }
}

/// Uploaded geometry. Buffers are held so they outlive the VAO binding.
struct GpuMesh {
    vao: WebGlVertexArrayObject,
    _vertices: WebGlBuffer,
    _indices: WebGlBuffer,
    index_count: i32,
}

pub struct WebGlRenderer {
    gl: GL,
    canvas: HtmlCanvasElement,
    program: WebGlProgram,
    uniforms: Uniforms,
    /// One entry per distinct geometry seen so far.
    meshes: Vec<(Geometry, GpuMesh)>,
    width: u32,
    height: u32,
}

impl WebGlRenderer {
    pub fn new(canvas: HtmlCanvasElement, antialias: bool) -> Result<Self, JsValue> {
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"antialias".into(), &JsValue::from_bool(antialias))?;

        let gl = canvas
            .get_context_with_context_options("webgl2", &options)?
            .ok_or_else(|| js_error("WebGL2 is not available"))?
            .dyn_into::<GL>()
            .map_err(|_| js_error("context is not a WebGL2RenderingContext"))?;

        let vs = compile_shader(&gl, GL::VERTEX_SHADER, VERTEX_SHADER)?;
        let fs = compile_shader(&gl, GL::FRAGMENT_SHADER, FRAGMENT_SHADER)?;
        let program = link_program(&gl, &vs, &fs)?;
        let uniforms = Uniforms::locate(&gl, &program);

        gl.enable(GL::DEPTH_TEST);
        gl.depth_func(GL::LEQUAL);
        gl.cull_face(GL::BACK);

        let width = canvas.width();
        let height = canvas.height();
        log::info!("webgl2 renderer ready ({}x{}, antialias {})", width, height, antialias);

        Ok(Self {
            gl,
            canvas,
            program,
            uniforms,
            meshes: Vec::new(),
            width,
            height,
        })
    }

    fn mesh(&self, geometry: &Geometry) -> Option<&GpuMesh> {
        self.meshes.iter().find(|(g, _)| g == geometry).map(|(_, m)| m)
    }

    fn ensure_mesh(&mut self, geometry: &Geometry) -> Result<(), JsValue> {
        if self.mesh(geometry).is_some() {
            return Ok(());
        }
        let gpu = upload_mesh(&self.gl, geometry)?;
        self.meshes.push((*geometry, gpu));
        Ok(())
    }

    fn set_frame_uniforms(&self, frame: &RenderFrame) {
        let gl = &self.gl;
        let u = &self.uniforms;

        let view_proj: &[f32] = bytemuck::cast_slice(&frame.camera.view_proj);
        gl.uniform_matrix4fv_with_f32_array(u.view_proj.as_ref(), false, view_proj);
        gl.uniform3fv_with_f32_array(u.eye.as_ref(), &frame.camera.eye[..3]);
        gl.uniform3fv_with_f32_array(u.ambient.as_ref(), &frame.ambient.radiance().to_array());

        if frame.lights.len() > MAX_LIGHTS {
            log::warn!("{} point lights, only {} are drawn", frame.lights.len(), MAX_LIGHTS);
        }
        let mut pos = [0.0f32; MAX_LIGHTS * 3];
        let mut radiance = [0.0f32; MAX_LIGHTS * 3];
        let mut range = [0.0f32; MAX_LIGHTS];
        let count = frame.lights.len().min(MAX_LIGHTS);
        for (i, light) in frame.lights.iter().take(count).enumerate() {
            pos[i * 3..i * 3 + 3].copy_from_slice(&light.position.to_array());
            radiance[i * 3..i * 3 + 3]
                .copy_from_slice(&light.color.scaled(light.intensity).to_array());
            range[i] = light.distance;
        }
        gl.uniform1i(u.light_count.as_ref(), count as i32);
        gl.uniform3fv_with_f32_array(u.light_pos.as_ref(), &pos);
        gl.uniform3fv_with_f32_array(u.light_radiance.as_ref(), &radiance);
        gl.uniform1fv_with_f32_array(u.light_range.as_ref(), &range);
    }

    fn draw_item(&self, item: &DrawItem) {
        let Some(mesh) = self.mesh(&item.mesh.geometry) else {
            return;
        };
        let gl = &self.gl;
        let u = &self.uniforms;
        let material = &item.mesh.material;

        let model: &[f32] = bytemuck::cast_slice(&item.transform.model);
        gl.uniform_matrix4fv_with_f32_array(u.model.as_ref(), false, model);
        gl.uniform3fv_with_f32_array(u.color.as_ref(), &material.color.to_array());
        let opacity = if material.transparent { material.opacity } else { 1.0 };
        gl.uniform1f(u.opacity.as_ref(), opacity);

        match material.shading {
            Shading::Basic => gl.uniform1i(u.lit.as_ref(), 0),
            Shading::Standard { roughness, metalness } => {
                gl.uniform1i(u.lit.as_ref(), 1);
                gl.uniform1f(u.roughness.as_ref(), roughness);
                gl.uniform1f(u.metalness.as_ref(), metalness);
                gl.uniform3fv_with_f32_array(u.emissive.as_ref(), &material.emissive.to_array());
            }
        }

        if material.double_sided {
            gl.disable(GL::CULL_FACE);
        } else {
            gl.enable(GL::CULL_FACE);
        }

        gl.bind_vertex_array(Some(&mesh.vao));
        gl.draw_elements_with_i32(GL::TRIANGLES, mesh.index_count, GL::UNSIGNED_INT, 0);
    }
}

impl Renderer for WebGlRenderer {
    type Error = JsValue;

    fn backend(&self) -> &'static str {
        "webgl2"
    }

    fn draw(&mut self, frame: &RenderFrame) -> Result<(), JsValue> {
        if self.gl.is_context_lost() {
            return Err(js_error("WebGL2 context lost"));
        }
        for item in &frame.items {
            self.ensure_mesh(&item.mesh.geometry)?;
        }

        let gl = &self.gl;
        gl.viewport(0, 0, self.width as i32, self.height as i32);
        let c = frame.clear_color;
        gl.clear_color(c.r, c.g, c.b, 1.0);
        gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);

        gl.use_program(Some(&self.program));
        self.set_frame_uniforms(frame);

        gl.disable(GL::BLEND);
        gl.depth_mask(true);
        for item in frame.opaque() {
            self.draw_item(item);
        }

        gl.enable(GL::BLEND);
        gl.blend_func(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA);
        gl.depth_mask(false);
        for item in frame.transparent() {
            self.draw_item(item);
        }
        gl.depth_mask(true);

        gl.bind_vertex_array(None);
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.width = width;
        self.height = height;
    }
}

fn compile_shader(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader, JsValue> {
    let shader = gl
        .create_shader(kind)
        .ok_or_else(|| js_error("unable to create shader object"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let info = gl.get_shader_info_log(&shader).unwrap_or_default();
        Err(js_error(format!("shader compile failed: {}", info)))
    }
}

fn link_program(gl: &GL, vs: &WebGlShader, fs: &WebGlShader) -> Result<WebGlProgram, JsValue> {
    let program = gl
        .create_program()
        .ok_or_else(|| js_error("unable to create program object"))?;
    gl.attach_shader(&program, vs);
    gl.attach_shader(&program, fs);
    gl.link_program(&program);

    if gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        let info = gl.get_program_info_log(&program).unwrap_or_default();
        Err(js_error(format!("program link failed: {}", info)))
    }
}

fn upload_mesh(gl: &GL, geometry: &Geometry) -> Result<GpuMesh, JsValue> {
    let data = geometry::build(geometry);

    let vao = gl
        .create_vertex_array()
        .ok_or_else(|| js_error("unable to create vertex array"))?;
    gl.bind_vertex_array(Some(&vao));

    let vertices = gl.create_buffer().ok_or_else(|| js_error("unable to create buffer"))?;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&vertices));
    gl.buffer_data_with_u8_array(GL::ARRAY_BUFFER, data.vertex_bytes(), GL::STATIC_DRAW);

    let stride = geometry::Vertex::STRIDE_BYTES as i32;
    gl.enable_vertex_attrib_array(0);
    gl.vertex_attrib_pointer_with_i32(0, 3, GL::FLOAT, false, stride, 0);
    gl.enable_vertex_attrib_array(1);
    gl.vertex_attrib_pointer_with_i32(1, 3, GL::FLOAT, false, stride, 12);

    let indices = gl.create_buffer().ok_or_else(|| js_error("unable to create buffer"))?;
    gl.bind_buffer(GL::ELEMENT_ARRAY_BUFFER, Some(&indices));
    gl.buffer_data_with_u8_array(GL::ELEMENT_ARRAY_BUFFER, data.index_bytes(), GL::STATIC_DRAW);

    gl.bind_vertex_array(None);
    log::debug!(
        "uploaded {:?}: {} vertices, {} triangles",
        geometry,
        data.vertices.len(),
        data.triangle_count()
    );

    Ok(GpuMesh {
        vao,
        _vertices: vertices,
        _indices: indices,
        index_count: data.indices.len() as i32,
    })
}
