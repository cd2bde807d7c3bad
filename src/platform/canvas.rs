//! Canvas element as a drawing stage

use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use crate::error::RenderError;
use crate::race::Viewport;
use crate::renderer::{Stage, Surface, TextAlign};

/// 2D context of the track canvas
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl Surface for CanvasSurface {
    fn set_fill_color(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_shadow(&mut self, color: &str, blur: f64) {
        self.ctx.set_shadow_color(color);
        self.ctx.set_shadow_blur(blur);
    }

    fn fill_rect(&mut self, origin: DVec2, size: DVec2) {
        self.ctx.fill_rect(origin.x, origin.y, size.x, size.y);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.ctx.set_text_align(align.as_str());
    }

    fn fill_text(&mut self, text: &str, at: DVec2) {
        if let Err(e) = self.ctx.fill_text(text, at.x, at.y) {
            log::debug!("fillText failed: {:?}", e);
        }
    }
}

/// The track canvas, sized by its containing element
pub struct CanvasStage {
    canvas: HtmlCanvasElement,
    surface: Option<CanvasSurface>,
}

impl CanvasStage {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self {
            canvas,
            surface: None,
        }
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Element whose box decides the canvas size: the parent, else `<body>`
    fn container(&self) -> Option<Element> {
        self.canvas.parent_element().or_else(|| {
            web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body())
                .map(Element::from)
        })
    }
}

impl Stage for CanvasStage {
    type Surface = CanvasSurface;

    fn fit_to_container(&mut self) -> Viewport {
        let (width, height) = match self.container() {
            Some(container) => {
                let rect = container.get_bounding_client_rect();
                (rect.width() as u32, rect.height() as u32)
            }
            None => (self.canvas.width(), self.canvas.height()),
        };

        // Assigning the size also clears the canvas.
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        Viewport::new(f64::from(width), f64::from(height))
    }

    fn surface(&mut self) -> Result<&mut CanvasSurface, RenderError> {
        let ctx = self
            .canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(RenderError::NoContext)?;
        Ok(self.surface.insert(CanvasSurface { ctx }))
    }
}
