//! Canvas 2D output for the frame driver

use game_core::{Color, Rect, ScoreDisplay, Surface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f32,
    height: f32,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            ctx,
            width: canvas.width() as f32,
            height: canvas.height() as f32,
        })
    }

    /// Look up a canvas by element id
    pub fn from_id(document: &Document, id: &str) -> Result<Self, JsValue> {
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("No element with id '{}'", id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str(&format!("Element '{}' is not a canvas", id)))?;
        Self::new(&canvas)
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&color.to_hex());
        self.ctx
            .fill_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_fill_style_str(&color.to_hex());
        self.ctx.fill_rect(
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }
}

/// Writes the score line into a DOM element
pub struct ElementScore {
    element: Element,
}

impl ElementScore {
    pub fn from_id(document: &Document, id: &str) -> Result<Self, JsValue> {
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("No element with id '{}'", id)))?;
        Ok(Self { element })
    }
}

impl ScoreDisplay for ElementScore {
    fn set_text(&mut self, text: &str) {
        self.element.set_text_content(Some(text));
    }
}
