use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::time::Instant;

use mirrorball::config::SceneConfig;
use mirrorball::render::Renderer;
use mirrorball::scene::clamp_bounce_limit;

const USAGE: &str = "usage: mirrorball [scene.json] [output.png] [--bounces N]";

#[derive(Debug, Default, PartialEq)]
struct Args {
    scene: Option<PathBuf>,
    output: Option<PathBuf>,
    bounces: Option<i64>,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args, Box<dyn Error>> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--bounces" | "-b" => {
                let value = args.next().ok_or("--bounces needs a value")?;
                parsed.bounces = Some(value.parse::<i64>().map_err(|e| format!("invalid bounce limit '{}': {}", value, e))?);
            }
            "--help" | "-h" => return Err(USAGE.into()),
            flag if flag.starts_with('-') => return Err(format!("unknown option '{}'\n{}", flag, USAGE).into()),
            _ if parsed.scene.is_none() => parsed.scene = Some(PathBuf::from(&arg)),
            _ if parsed.output.is_none() => parsed.output = Some(PathBuf::from(&arg)),
            _ => return Err(format!("unexpected argument '{}'\n{}", arg, USAGE).into()),
        }
    }

    Ok(parsed)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = parse_args(env::args().skip(1))?;

    let config = match args.scene {
        Some(ref path) => SceneConfig::load(path)?,
        None => {
            log::info!("no scene given, rendering the built-in demo");
            SceneConfig::demo()?
        }
    };

    let mut scene = config.build()?;
    if let Some(bounces) = args.bounces {
        scene = scene.with_bounce_limit(clamp_bounce_limit(bounces));
    }

    let renderer = Renderer::new(config.width, config.height)?;
    let camera = config.camera.build(renderer.aspect())?;
    let output = args.output.unwrap_or_else(|| PathBuf::from("out.png"));

    log::info!(
        "rendering {}x{} with bounce limit {}",
        config.width,
        config.height,
        scene.bounce_limit()
    );
    let now = Instant::now();

    let image = renderer.render(&scene, &camera, &AtomicBool::new(false))?;

    log::info!("finished, elapsed: {:.3} ms", now.elapsed().as_secs_f64() * 1000.0);

    image.save(&output)?;
    println!("wrote {}", output.display());

    Ok(())
}
