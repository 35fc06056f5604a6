//! WASM bindings for the geosolid engine.
//!
//! Every export takes and returns plain JS objects through
//! `serde-wasm-bindgen`, using the same wire shapes as the core crate's
//! serde derives.

use geosolid_core::path::DEFAULT_PADDING;
use geosolid_core::{
    calculate_view_box_3d, describe_face_path, edge_visibilities, generate_solid, measure,
    normalize_projection_config, project_vertices, render_solid, sort_faces_by_depth,
    validate_solid_dimensions, GeneratorOptions, GeometryError, Point3D, ProjectedPoint,
    ProjectionConfig, ProjectionOptions, RenderOptions, Solid, SolidDimensions, SolidGeometry,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// A mesh as handed back by `generateSolid`.
///
/// Extra keys (such as the `type` tag) are ignored, so a generated solid can
/// be passed straight back in.
#[derive(Debug, Clone, Deserialize)]
struct MeshInput {
    vertices: Vec<[f64; 3]>,
    faces: Vec<Vec<usize>>,
    edges: Vec<(usize, usize)>,
}

impl TryFrom<MeshInput> for SolidGeometry {
    type Error = GeometryError;

    fn try_from(input: MeshInput) -> Result<Self, Self::Error> {
        let vertices = input
            .vertices
            .into_iter()
            .map(|[x, y, z]| Point3D::new(x, y, z))
            .collect();
        SolidGeometry::new(vertices, input.faces, input.edges)
    }
}

/// Screen placement shared by the projection exports.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Placement {
    center_x: f64,
    center_y: f64,
    scale: f64,
}

impl Default for Placement {
    fn default() -> Self {
        let options = RenderOptions::default();
        Self {
            center_x: options.center_x,
            center_y: options.center_y,
            scale: options.scale,
        }
    }
}

fn from_js<T: for<'de> Deserialize<'de>>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Like [`from_js`], but `undefined` and `null` give the default.
fn from_js_or_default<T: for<'de> Deserialize<'de> + Default>(value: JsValue) -> Result<T, JsError> {
    if value.is_undefined() || value.is_null() {
        Ok(T::default())
    } else {
        from_js(value)
    }
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn mesh_from_js(value: JsValue) -> Result<SolidGeometry, JsError> {
    let input: MeshInput = from_js(value)?;
    Ok(SolidGeometry::try_from(input)?)
}

/// Accepts a projection name (`"cabinet"`) or a partial config object.
fn config_from_js(value: JsValue) -> Result<ProjectionConfig, JsError> {
    let options: ProjectionOptions = match value.as_string() {
        Some(name) => name.parse::<geosolid_core::ProjectionKind>()?.into(),
        None => from_js_or_default(value)?,
    };
    Ok(normalize_projection_config(options))
}

/// Build a solid from `{ tipo, ...dimensions }`.
#[wasm_bindgen(js_name = generateSolid)]
pub fn generate_solid_js(dimensions: JsValue, options: JsValue) -> Result<JsValue, JsError> {
    let dimensions: SolidDimensions = from_js(dimensions)?;
    let options: GeneratorOptions = from_js_or_default(options)?;
    to_js(&generate_solid(&dimensions, &options)?)
}

/// Returns `{ valid, error? }`; never throws for bad values, only for a
/// malformed object.
#[wasm_bindgen(js_name = validateSolidDimensions)]
pub fn validate_solid_dimensions_js(dimensions: JsValue) -> Result<JsValue, JsError> {
    let dimensions: SolidDimensions = from_js(dimensions)?;
    to_js(&validate_solid_dimensions(&dimensions))
}

#[wasm_bindgen(js_name = normalizeProjectionConfig)]
pub fn normalize_projection_config_js(options: JsValue) -> Result<JsValue, JsError> {
    to_js(&config_from_js(options)?)
}

/// Project a mesh's vertices. `placement` is `{ centerX, centerY, scale }`.
#[wasm_bindgen(js_name = projectVertices)]
pub fn project_vertices_js(mesh: JsValue, config: JsValue, placement: JsValue) -> Result<JsValue, JsError> {
    let mesh = mesh_from_js(mesh)?;
    let config = config_from_js(config)?;
    let placement: Placement = from_js_or_default(placement)?;
    let projected = project_vertices(
        mesh.vertices(),
        &config,
        placement.center_x,
        placement.center_y,
        placement.scale,
    );
    to_js(&projected)
}

#[wasm_bindgen(js_name = getAllEdgeVisibilities)]
pub fn get_all_edge_visibilities(mesh: JsValue, config: JsValue) -> Result<JsValue, JsError> {
    let mesh = mesh_from_js(mesh)?;
    to_js(&edge_visibilities(&mesh, &config_from_js(config)?))
}

/// Face indices, farthest first.
#[wasm_bindgen(js_name = sortFacesByDepth)]
pub fn sort_faces_by_depth_js(mesh: JsValue, config: JsValue) -> Result<JsValue, JsError> {
    let mesh = mesh_from_js(mesh)?;
    to_js(&sort_faces_by_depth(&mesh, &config_from_js(config)?))
}

/// SVG path data for one face over already projected vertices.
#[wasm_bindgen(js_name = describeFacePath)]
pub fn describe_face_path_js(projected: JsValue, face: Vec<u32>) -> Result<String, JsError> {
    let face: Vec<usize> = face.into_iter().map(|i| i as usize).collect();
    let projected: Vec<ProjectedPoint> = from_js(projected)?;
    Ok(describe_face_path(&projected, &face).to_svg_d())
}

#[wasm_bindgen(js_name = calculateViewBox3D)]
pub fn calculate_view_box_3d_js(projected: JsValue, padding: Option<f64>) -> Result<JsValue, JsError> {
    let projected: Vec<ProjectedPoint> = from_js(projected)?;
    to_js(&calculate_view_box_3d(&projected, padding.unwrap_or(DEFAULT_PADDING)))
}

/// Validate, generate and render in one call.
#[wasm_bindgen(js_name = renderSolid)]
pub fn render_solid_js(
    dimensions: JsValue,
    config: JsValue,
    generator: JsValue,
    options: JsValue,
) -> Result<JsValue, JsError> {
    let dimensions: SolidDimensions = from_js(dimensions)?;
    let config = config_from_js(config)?;
    let generator: GeneratorOptions = from_js_or_default(generator)?;
    let options: RenderOptions = from_js_or_default(options)?;

    let solid: Solid = generate_solid(&dimensions, &generator)?;
    to_js(&render_solid(&solid, &config, &options))
}

#[wasm_bindgen]
pub fn volume(dimensions: JsValue) -> Result<f64, JsError> {
    let dimensions: SolidDimensions = from_js(dimensions)?;
    Ok(measure::volume(&dimensions))
}

#[wasm_bindgen(js_name = surfaceArea)]
pub fn surface_area(dimensions: JsValue) -> Result<f64, JsError> {
    let dimensions: SolidDimensions = from_js(dimensions)?;
    Ok(measure::surface_area(&dimensions))
}
