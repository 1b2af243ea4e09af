use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use flow_dyntex::{Canvas, CreateDrawable, DynamicTexture, PixelCanvas, Rgba, Sketch};

pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// What a counting texture observed while being drawn.
#[derive(Clone, Default)]
pub struct DrawLog {
    created: Rc<Cell<usize>>,
    drawn: Rc<Cell<usize>>,
    scales: Rc<RefCell<Vec<(f32, f32)>>>,
    failing: Rc<Cell<bool>>,
    panicking: Rc<Cell<bool>>,
}

impl DrawLog {
    pub fn created(&self) -> usize {
        self.created.get()
    }

    pub fn drawn(&self) -> usize {
        self.drawn.get()
    }

    /// Scale of the context at the start of every draw call.
    pub fn scales(&self) -> Vec<(f32, f32)> {
        self.scales.borrow().clone()
    }

    pub fn fail_draws(&self, failing: bool) {
        self.failing.set(failing);
    }

    pub fn panic_draws(&self, panicking: bool) {
        self.panicking.set(panicking);
    }
}

/// A texture filling the top-left quarter of its logical area with red.
pub fn counting_texture(
    width: f32,
    height: f32,
) -> (DynamicTexture<impl CreateDrawable<PixelCanvas>>, DrawLog) {
    let draws = DrawLog::default();
    let source = {
        let draws = draws.clone();
        move || {
            draws.created.set(draws.created.get() + 1);
            let draws = draws.clone();
            Sketch::new(width, height, move |ctx: &mut PixelCanvas| {
                let transform = ctx.transform();
                draws.scales.borrow_mut().push((transform.x.x, transform.y.y));
                if draws.failing.get() {
                    // bail out with a modified transform
                    ctx.translate(5.0, 5.0);
                    anyhow::bail!("draw failed");
                }
                if draws.panicking.get() {
                    ctx.translate(5.0, 5.0);
                    panic!("draw panicked");
                }
                ctx.set_fill_style(RED);
                ctx.fill_rect(0.0, 0.0, width / 2.0, height / 2.0);
                draws.drawn.set(draws.drawn.get() + 1);
                Ok(())
            })
        }
    };
    (DynamicTexture::new(source), draws)
}
