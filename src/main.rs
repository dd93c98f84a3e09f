use std::process::ExitCode;

use log::LevelFilter;
use phong_models::abs::App;
use phong_models::asset::SceneConfig;
use phong_models::scenes::RenderLoop;
use phong_models::scenes::models::ModelScene;

fn run() -> phong_models::Result<()> {
    let config = SceneConfig::builtin()?;
    let mut app = App::new(
        &config.window.title,
        config.window.width,
        config.window.height,
    )?;

    // Declared after `app` so its GPU objects are freed before the context.
    let mut scene = ModelScene::load(&app.gl, &config)?;
    log::info!("scene ready with {} models", scene.models().len());

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
