//! Atom Deflector entry point
//!
//! Browser builds run the atom in a full-window canvas; native builds run it
//! headless for a fixed span and print the scores.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod web_host {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, Window};

    use atom_deflector::consts::SIM_DT;
    use atom_deflector::platform::Viewport;
    use atom_deflector::platform::web::{WebCanvas, window_viewport};
    use atom_deflector::renderer::{Canvas, draw_scoreboard};
    use atom_deflector::sim::Steer;
    use atom_deflector::{Atom, AtomConfig, InputState};

    /// Everything the frame, resize and key closures share
    struct App {
        atom: Atom,
        canvas: WebCanvas,
        element: HtmlCanvasElement,
        viewport: Viewport,
        input: InputState,
        last_time: f64,
    }

    impl App {
        fn fit_to(&mut self, viewport: Viewport) {
            self.element.set_width(viewport.width as u32);
            self.element.set_height(viewport.height as u32);
            if self.atom.resize(viewport.width, viewport.height).is_ok() {
                self.viewport = viewport;
            }
        }

        fn steer(&mut self) {
            if self.input.is_down("ArrowLeft") {
                self.atom.steer(Steer::Left);
            }
            if self.input.is_down("ArrowRight") {
                self.atom.steer(Steer::Right);
            }
        }

        fn frame(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                (time - self.last_time) / 1000.0
            } else {
                SIM_DT
            };
            self.last_time = time;

            self.canvas
                .clear_rect(0.0, 0.0, self.viewport.width, self.viewport.height);
            draw_scoreboard(&mut self.canvas, self.atom.scores());
            let report = self.atom.frame(dt, &mut self.canvas);

            // Held arrows steer once per simulation step
            for _ in 0..report.steps {
                self.steer();
            }
        }
    }

    /// `?preset=rings&steer=0` picks a preset and a keyboard-steered deflector
    fn config_from_query(window: &Window) -> AtomConfig {
        let search = window.location().search().unwrap_or_default();
        let param = |key: &str| {
            search
                .trim_start_matches('?')
                .split('&')
                .find_map(|pair| pair.strip_prefix(key)?.strip_prefix('='))
                .map(str::to_string)
        };

        let mut config = param("preset")
            .and_then(|name| {
                let preset = AtomConfig::preset(&name);
                if preset.is_none() {
                    log::warn!("Unknown preset '{name}', using default");
                }
                preset
            })
            .unwrap_or_default();

        if let Some(index) = param("steer").and_then(|s| s.parse::<usize>().ok()) {
            if index < config.deflectors.len() {
                config.steerable_deflector = Some(index);
            } else {
                log::warn!("No deflector {index} to steer");
            }
        }
        config
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Atom Deflector starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let element: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;
        let ctx: CanvasRenderingContext2d = element
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let viewport = window_viewport(&window).unwrap_or_default();
        element.set_width(viewport.width as u32);
        element.set_height(viewport.height as u32);

        let config = config_from_query(&window);
        let atom = Atom::new(&config, viewport.width, viewport.height)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let app = Rc::new(RefCell::new(App {
            atom,
            canvas: WebCanvas::new(ctx),
            element,
            viewport,
            input: InputState::new(),
            last_time: 0.0,
        }));

        setup_listeners(&window, app.clone())?;
        request_animation_frame(app);

        log::info!("Atom Deflector running!");
        Ok(())
    }

    fn setup_listeners(window: &Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        // Resize
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let Some(window) = web_sys::window() else {
                    return;
                };
                if let Some(viewport) = window_viewport(&window) {
                    app.borrow_mut().fit_to(viewport);
                }
            });
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Keyboard
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().input.key_down(&event.code(), event.repeat());
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().input.key_up(&event.code());
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {e:?}");
        }
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().frame(time);
        request_animation_frame(app);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::Path;

    use atom_deflector::consts::SIM_DT;
    use atom_deflector::platform::Viewport;
    use atom_deflector::renderer::{Canvas, MeshCanvas, draw_scoreboard};
    use atom_deflector::{Atom, AtomConfig, SimError, SimResult};

    const DEFAULT_SECONDS: f64 = 10.0;

    /// `[CONFIG] [SECONDS]`, CONFIG is a JSON file or a preset name
    pub fn run(mut args: impl Iterator<Item = String>) -> SimResult<()> {
        let config = match args.next() {
            Some(arg) if Path::new(&arg).is_file() => AtomConfig::from_json_file(&arg)?,
            Some(arg) => AtomConfig::preset(&arg)
                .ok_or_else(|| SimError::InvalidConfig(format!("no file or preset named '{arg}'")))?,
            None => AtomConfig::default(),
        };
        let seconds = match args.next() {
            Some(arg) => arg
                .parse::<f64>()
                .ok()
                .filter(|s| s.is_finite() && *s >= 0.0)
                .ok_or_else(|| SimError::InvalidConfig(format!("invalid duration '{arg}'")))?,
            None => DEFAULT_SECONDS,
        };

        let viewport = Viewport::HEADLESS;
        let mut atom = Atom::new(&config, viewport.width, viewport.height)?;
        let mut canvas = MeshCanvas::new();

        let frames = (seconds / SIM_DT).round() as u64;
        let mut strikes = 0;
        let mut deflections = 0;
        for _ in 0..frames {
            canvas.clear_rect(0.0, 0.0, viewport.width, viewport.height);
            draw_scoreboard(&mut canvas, atom.scores());
            let report = atom.frame(SIM_DT, &mut canvas);
            strikes += report.nucleon_strikes;
            deflections += report.deflections.len();
        }

        log::info!(
            "Ran {} steps: {} strikes, {} deflections, {} triangles in last frame",
            atom.steps(),
            strikes,
            deflections,
            canvas.triangle_count()
        );
        println!(
            "{}/{} nucleons remaining after {:.1}s",
            atom.active_nucleons(),
            atom.nucleons().len(),
            seconds
        );
        for (color, points) in atom.scores().iter() {
            println!("{:>6} {}", color.as_str(), points);
        }
        if let Some((color, points)) = atom.scores().leader() {
            println!("leader: {} with {}", color.as_str(), points);
        }
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    web_host::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Atom Deflector (headless) starting...");

    if let Err(e) = headless::run(std::env::args().skip(1)) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main
}
