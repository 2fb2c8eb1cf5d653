use faceit_core::{ConfigError, FaceConfig, render};
use faceit_svg::render_to_string;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct FaceOutput {
    svg: String,
    diagnostics: String,
    has_error: bool,
}

#[wasm_bindgen]
impl FaceOutput {
    #[wasm_bindgen(getter)]
    pub fn svg(&self) -> String {
        self.svg.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn diagnostics(&self) -> String {
        self.diagnostics.clone()
    }

    #[wasm_bindgen(getter, js_name = hasError)]
    pub fn has_error(&self) -> bool {
        self.has_error
    }
}

/// Render a face filling a `width` × `height` view. Called by the host on
/// every repaint.
#[wasm_bindgen(js_name = renderFace)]
pub fn render_face(
    width: f64,
    height: f64,
    scale: f64,
    eyes_open: bool,
    mouth_curvature: f64,
    line_width: f64,
    color: &str,
) -> FaceOutput {
    let config = FaceConfig {
        width: Some(width),
        height: Some(height),
        scale: Some(scale),
        eyes_open: Some(eyes_open),
        mouth_curvature: Some(mouth_curvature),
        line_width: Some(line_width),
        color: Some(color.to_owned()),
        ..FaceConfig::default()
    };
    render_config(&config)
}

/// Render a face from a JSON config (same keys as the CLI's `--config`).
#[wasm_bindgen(js_name = renderFaceJson)]
pub fn render_face_json(json: &str) -> FaceOutput {
    match FaceConfig::from_json(json) {
        Ok(config) => render_config(&config),
        Err(e) => failure(&e),
    }
}

fn render_config(config: &FaceConfig) -> FaceOutput {
    let params = match config.parameters() {
        Ok(p) => p,
        Err(e) => return failure(&e),
    };
    let bounds = config.bounds();
    let set = render(bounds, &params);

    FaceOutput {
        svg: render_to_string(&set, bounds),
        diagnostics: String::new(),
        has_error: false,
    }
}

fn failure(err: &ConfigError) -> FaceOutput {
    FaceOutput {
        svg: String::new(),
        diagnostics: format!("error {err}"),
        has_error: true,
    }
}
