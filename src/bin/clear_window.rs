use std::process::ExitCode;

use log::LevelFilter;
use phong_models::abs::App;
use phong_models::asset::ClearColor;
use phong_models::scenes::RenderLoop;
use phong_models::scenes::clear::ClearScene;

const SCREEN_WIDTH: u32 = 1200;
const SCREEN_HEIGHT: u32 = 800;

fn run() -> phong_models::Result<()> {
    let mut app = App::new("Clear Window", SCREEN_WIDTH, SCREEN_HEIGHT)?;
    let mut scene = ClearScene::new(&app.gl, ClearColor::default().0);

    RenderLoop::new().run(&mut app, &mut scene);
    Ok(())
}

fn main() -> ExitCode {
    if let Err(e) = phong_models::logging::init(LevelFilter::Info) {
        eprintln!("logger unavailable: {e}");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
