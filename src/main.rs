//! Side Runner entry point
//!
//! Browser build: Canvas 2D host driven by requestAnimationFrame.
//! Native build: headless autopilot run, handy for soak-testing the sim.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, MouseEvent};

    use side_runner::Tuning;
    use side_runner::platform::key_from_code;
    use side_runner::renderer::{DrawCmd, DrawList, PromptChoice};
    use side_runner::sim::{InputState, LoopControl, Session};

    const SPRITE_SHEET: &str = "player_spritesheet.png";

    /// Game instance holding all state
    struct Game {
        session: Session,
        input: InputState,
        draw_list: DrawList,
        ctx: CanvasRenderingContext2d,
        sprite: HtmlImageElement,
    }

    impl Game {
        /// Simulate one frame and paint it
        fn frame(&mut self) -> LoopControl {
            let control = self.session.frame(&mut self.input, &mut self.draw_list);
            self.paint();
            control
        }

        /// Replay the draw list onto the canvas
        fn paint(&self) {
            let tuning = self.session.tuning();
            for cmd in self.draw_list.iter() {
                match cmd {
                    DrawCmd::Clear => {
                        self.ctx.clear_rect(
                            0.0,
                            0.0,
                            tuning.viewport_width as f64,
                            tuning.viewport_height as f64,
                        );
                    }
                    DrawCmd::FillRect { rect, color } => {
                        self.ctx.set_fill_style_str(color.css());
                        self.ctx.fill_rect(
                            rect.x as f64,
                            rect.y as f64,
                            rect.w as f64,
                            rect.h as f64,
                        );
                    }
                    DrawCmd::Sprite { frame, dest } => {
                        // Skip until the atlas has loaded
                        if !self.sprite.complete() || self.sprite.natural_width() == 0 {
                            continue;
                        }
                        let (sx, sy, sw, sh) = frame.source_rect(
                            self.sprite.natural_width() as f32,
                            self.sprite.natural_height() as f32,
                        );
                        let _ = self
                            .ctx
                            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                                &self.sprite,
                                sx as f64,
                                sy as f64,
                                sw as f64,
                                sh as f64,
                                dest.x as f64,
                                dest.y as f64,
                                dest.w as f64,
                                dest.h as f64,
                            );
                    }
                    DrawCmd::Text {
                        text,
                        x,
                        y,
                        size,
                        color,
                    } => {
                        self.ctx.set_fill_style_str(color.css());
                        self.ctx.set_font(&format!("{}px Arial", size));
                        let _ = self.ctx.fill_text(text, *x as f64, *y as f64);
                    }
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Side Runner starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let tuning = Tuning::default();
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(tuning.viewport_width as u32);
        canvas.set_height(tuning.viewport_height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("get_context failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let sprite = HtmlImageElement::new().expect("Failed to create image");
        sprite.set_src(SPRITE_SHEET);

        let seed = js_sys::Date::now() as u64;
        let session = Session::new(tuning, seed).expect("default tuning is valid");

        let game = Rc::new(RefCell::new(Game {
            session,
            input: InputState::default(),
            draw_list: DrawList::new(),
            ctx,
            sprite,
        }));

        setup_input_handlers(&canvas, game.clone());

        request_animation_frame(game);

        log::info!("Side Runner running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(key) = key_from_code(&event.code()) {
                    event.prevent_default();
                    game.borrow_mut().input.press(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(key) = key_from_code(&event.code()) {
                    game.borrow_mut().input.release(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click - only the game over prompt listens
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let choice = {
                    let mut guard = game.borrow_mut();
                    let g = &mut *guard;
                    g.session
                        .click(event.offset_x() as f32, event.offset_y() as f32, &mut g.input)
                };

                match choice {
                    Some(PromptChoice::Restart) => request_animation_frame(game.clone()),
                    Some(PromptChoice::Exit) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.close();
                        }
                    }
                    None => {}
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let control = game.borrow_mut().frame();

        // Game over stops scheduling until a restart click re-arms it
        if control == LoopControl::Continue {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use side_runner::Tuning;
    use side_runner::renderer::DrawList;
    use side_runner::sim::{InputState, LoopControl, Session, autopilot};

    /// Give up after this many frames (~5 minutes at 60 Hz)
    const MAX_TICKS: u64 = 60 * 60 * 5;

    env_logger::init();
    log::info!("Side Runner (native) starting...");
    log::info!("Usage: side-runner [TUNING_JSON] [SEED]");

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => Tuning::load_or_default(std::path::Path::new(&path)),
        None => Tuning::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(0x5EED);

    let mut session = match Session::new(tuning, seed) {
        Ok(session) => session,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut input = InputState::default();
    let mut draw_list = DrawList::new();
    while session.ticks < MAX_TICKS {
        autopilot::drive(&session.world, &mut input);
        if session.frame(&mut input, &mut draw_list) == LoopControl::Stop {
            break;
        }
    }

    println!(
        "Headless run (seed {}): score {} after {} ticks, {:?}",
        seed,
        session.score().floor(),
        session.ticks,
        session.phase
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
