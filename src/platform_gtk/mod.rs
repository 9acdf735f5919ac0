//! GTK4 host wiring: a `DrawingArea` acts as the mount element.
//!
//! Resize notifications drive `ChartEngine::mount`/`resize`, pointer motion
//! and leave events drive hit-testing, and the draw callback renders the
//! current frame into the widget's cairo context.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk::prelude::*;
use tracing::warn;

use crate::api::{ChartEngine, StaticSurfaceHost};
use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::CairoRenderer;

pub type SharedEngine = Rc<RefCell<ChartEngine<CairoRenderer>>>;

pub struct GtkChartAdapter {
    engine: SharedEngine,
    area: gtk::DrawingArea,
}

impl GtkChartAdapter {
    /// Wraps `engine` in a new drawing area and connects all handlers.
    #[must_use]
    pub fn new(engine: ChartEngine<CairoRenderer>) -> Self {
        let engine = Rc::new(RefCell::new(engine));
        let area = gtk::DrawingArea::new();
        area.set_hexpand(true);
        area.set_vexpand(true);

        connect_draw(&area, &engine);
        connect_resize(&area, &engine);
        connect_pointer(&area, &engine);

        Self { engine, area }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    #[must_use]
    pub fn engine(&self) -> SharedEngine {
        Rc::clone(&self.engine)
    }

    /// Replaces chart data and schedules a repaint.
    pub fn set_data(&self, points: Vec<crate::core::DataPoint>) -> ChartResult<()> {
        self.engine.borrow_mut().set_data(points)?;
        self.area.queue_draw();
        Ok(())
    }
}

fn connect_draw(area: &gtk::DrawingArea, engine: &SharedEngine) {
    let engine = Rc::clone(engine);
    area.set_draw_func(move |_area, context, _width, _height| {
        let mut engine = engine.borrow_mut();
        if !engine.is_mounted() || engine.scene().is_none() {
            return;
        }
        if let Err(err) = engine.render_on_cairo_context(context) {
            warn!(error = %err, "gtk draw callback failed");
        }
    });
}

fn connect_resize(area: &gtk::DrawingArea, engine: &SharedEngine) {
    let engine = Rc::clone(engine);
    area.connect_resize(move |area, width, height| {
        let viewport = Viewport::new(f64::from(width), f64::from(height));
        let mut engine = engine.borrow_mut();
        let result = if engine.is_mounted() {
            engine.resize(viewport)
        } else {
            let host =
                StaticSurfaceHost::new().with_mount(engine.config().mount_id.clone(), viewport);
            engine.mount(&host)
        };
        if let Err(err) = result {
            warn!(error = %err, width, height, "gtk resize redraw failed");
        }
        area.queue_draw();
    });
}

fn connect_pointer(area: &gtk::DrawingArea, engine: &SharedEngine) {
    let motion = gtk::EventControllerMotion::new();

    let move_engine = Rc::clone(engine);
    let move_area = area.downgrade();
    motion.connect_motion(move |_controller, x, y| {
        if let Err(err) = move_engine.borrow_mut().pointer_move_in_viewport(x, y) {
            warn!(error = %err, "pointer move failed");
        }
        if let Some(area) = move_area.upgrade() {
            area.queue_draw();
        }
    });

    let leave_engine = Rc::clone(engine);
    let leave_area = area.downgrade();
    motion.connect_leave(move |_controller| {
        if let Err(err) = leave_engine.borrow_mut().pointer_leave() {
            warn!(error = %err, "pointer leave failed");
        }
        if let Some(area) = leave_area.upgrade() {
            area.queue_draw();
        }
    });

    area.add_controller(motion);
}
