use lodestone::{game::MineProvider, sink::ConsoleSink, Loader};

fn main() {
    lodestone::init_platform();

    let mut loader = Loader::new(ConsoleSink);
    if let Err(e) = pollster::block_on(loader.run(MineProvider)) {
        log::error!("{e}");
    }
}
