use instant::Instant;
use thiserror::Error;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod elevator;
pub mod game;
pub mod map;
pub mod player;
pub mod sink;

/// Number of times the demo walk steps the engine before rendering.
pub const DEMO_STEPS: u32 = 100;
/// Command token fed to the engine on every demo step.
pub const DEMO_COMMAND: &str = "r";

/// A running game the loader can step and render.
///
/// Commands are single-token strings so the same surface works for any
/// embedding host; unknown tokens must be ignored rather than fail.
pub trait Engine {
    fn apply(&mut self, command: &str);
    fn text_repr(&self) -> String;
}

/// Asynchronous factory for an [`Engine`].
///
/// Acquisition is the only fallible, only suspending part of a run.
#[allow(async_fn_in_trait)]
pub trait EngineProvider {
    type Engine: Engine;
    async fn acquire(self) -> anyhow::Result<Self::Engine>;
}

/// A display surface whose whole content can be replaced with a string.
pub trait OutputSink {
    fn set_text(&mut self, text: &str);
}

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("engine acquisition failed: {0:#}")]
    Acquisition(anyhow::Error),
}

/// Drives an engine through the scripted demo walk and renders the result.
pub struct Loader<S: OutputSink> {
    sink: S,
}

impl<S: OutputSink> Loader<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Acquires an engine, steps it [`DEMO_STEPS`] times with
    /// [`DEMO_COMMAND`], then writes its text rendering to the sink.
    ///
    /// On acquisition failure nothing is written to the sink; stepping and
    /// rendering themselves cannot fail.
    pub async fn run<P: EngineProvider>(&mut self, provider: P) -> Result<(), LoaderError> {
        let start = Instant::now();
        let mut engine = provider
            .acquire()
            .await
            .map_err(LoaderError::Acquisition)?;
        log::info!("engine ready after {} ms", start.elapsed().as_millis());

        for _ in 0..DEMO_STEPS {
            engine.apply(DEMO_COMMAND);
        }

        self.sink.set_text(&engine.text_repr());
        log::info!("demo walk rendered after {} ms", start.elapsed().as_millis());
        Ok(())
    }
}

/// Installs the platform logger (and, on wasm, the panic hook).
///
/// Call once from the entry point before running a loader.
pub fn init_platform() {
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            std::panic::set_hook(Box::new(console_error_panic_hook::hook));
            console_log::init_with_level(log::Level::Info).expect("Couldn't initialize logger");
        } else {
            env_logger::builder().filter_level(log::LevelFilter::Info).init();
        }
    }
}

// Browser entry point; the event loop awaits the returned future, so the
// whole run rides the page's microtask queue.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() {
    init_platform();

    let sink = sink::ElementSink::from_element_id(sink::OUTPUT_ELEMENT_ID)
        .expect("Couldn't find the output element");
    let mut loader = Loader::new(sink);
    if let Err(e) = loader.run(game::MineProvider).await {
        log::error!("{e}");
    }
}
