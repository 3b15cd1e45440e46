//! Breakout entry point
//!
//! The browser build runs the game on a WebGPU canvas. The native build has
//! no window; it plays a short scripted session headlessly and logs it.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use breakout::consts::{FRAME_DT, MAX_FRAME_DT};
    use breakout::platform::{Canvas, Input, Key, KeyboardState, Platform};
    use breakout::renderer::{RenderState, VertexCanvas};
    use breakout::sim::Flow;
    use breakout::{FrameDriver, GameConfig};

    /// Browser window, keyboard and GPU behind the `Platform` interface
    struct WebPlatform {
        element: HtmlCanvasElement,
        render_state: RenderState,
        canvas: VertexCanvas,
        keys: KeyboardState,
        /// rAF timestamp of the frame being run, in milliseconds
        now: f64,
        last_time: f64,
    }

    impl Platform for WebPlatform {
        fn close_requested(&self) -> bool {
            // Closing the tab simply stops the page
            false
        }

        fn begin_frame(&mut self) -> f32 {
            let dt = if self.last_time > 0.0 {
                ((self.now - self.last_time) / 1000.0) as f32
            } else {
                FRAME_DT
            };
            self.last_time = self.now;
            dt.clamp(0.0, MAX_FRAME_DT)
        }

        fn input(&self) -> &dyn Input {
            &self.keys
        }

        fn canvas(&mut self) -> &mut dyn Canvas {
            &mut self.canvas
        }

        fn end_frame(&mut self) {
            let rs = &mut self.render_state;
            match rs.render(self.canvas.vertices(), self.canvas.clear_color()) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    rs.resize(rs.size.0, rs.size.1);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
            self.keys.end_frame();
        }

        fn close(&mut self) {
            let _ = self.element.set_attribute("style", "display: none");
            log::info!("Game closed");
        }
    }

    /// Game instance holding all state
    struct Game {
        driver: FrameDriver,
        platform: WebPlatform,
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Breakout starting...");

        let config = GameConfig::load();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        document.set_title(&config.title);

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let element: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        // Backing store at device resolution, logical size from the config
        let dpr = window.device_pixel_ratio();
        let width = (config.width as f64 * dpr) as u32;
        let height = (config.height as f64 * dpr) as u32;
        element.set_width(width);
        element.set_height(height);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let render_state = init_gpu(&instance, &element, width, height, &config)
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let game = Rc::new(RefCell::new(Game {
            driver: FrameDriver::new(config),
            platform: WebPlatform {
                element,
                render_state,
                canvas: VertexCanvas::new(),
                keys: KeyboardState::new(),
                now: 0.0,
                last_time: 0.0,
            },
        }));

        setup_input_handlers(&window, game.clone());
        request_animation_frame(game);

        log::info!("Breakout running!");
        Ok(())
    }

    async fn init_gpu(
        instance: &wgpu::Instance,
        element: &HtmlCanvasElement,
        width: u32,
        height: u32,
        config: &GameConfig,
    ) -> Result<RenderState, breakout::renderer::RenderError> {
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(element.clone()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        RenderState::new(
            surface,
            &adapter,
            width,
            height,
            (config.width, config.height),
        )
        .await
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_dom_key(&event.key()) {
                    // Keep arrows and space from scrolling the page
                    event.prevent_default();
                    game.borrow_mut().platform.keys.press(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_dom_key(&event.key()) {
                    game.borrow_mut().platform.keys.release(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let flow = {
            let mut g = game.borrow_mut();
            let Game { driver, platform } = &mut *g;
            platform.now = time;
            let flow = driver.frame(platform);
            if flow == Flow::Quit {
                platform.close();
            }
            flow
        };

        if flow == Flow::Continue {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Breakout failed to start: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use breakout::consts::FRAME_DT;
    use breakout::platform::{Key, ScriptedPlatform};
    use breakout::sim::ActiveScene;
    use breakout::{FrameDriver, GameConfig};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Breakout (native) starting...");
    log::info!("No native window backend - build for wasm32 to play in a browser");

    // Menu -> Play, launch, then steer around for a few seconds
    let mut platform = ScriptedPlatform::new(FRAME_DT)
        .tap(Key::Confirm)
        .idle(30)
        .tap(Key::Confirm)
        .hold(Key::Right, 60)
        .idle(120)
        .hold(Key::Left, 90)
        .idle(240);

    let mut driver = FrameDriver::new(GameConfig::load());
    let flow = driver.run(&mut platform);

    match driver.machine().active() {
        ActiveScene::Playing(p) => log::info!(
            "Demo finished ({:?}): {} lives, {} of {} blocks standing",
            flow,
            p.lives,
            p.active_blocks(),
            p.blocks.len()
        ),
        other => log::info!("Demo finished ({:?}) in {:?}", flow, other.id()),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
