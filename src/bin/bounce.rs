//! Headless bouncing-ball run. Logs the ball's position and energy as it goes.
//!
//! Usage: `bounce [ticks] [elasticity]`

use std::env;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

use polyphys::{
    forces::{create_drag, create_earth_gravity, create_physics_collision},
    make_rectangle, Body, BodyInfo, BodyKind, RgbColor, Scene, SceneConfig, Vec2,
};

/// Our crate is debug, everything else is warn.
const DEFAULT_FILTER: &str = "warn,polyphys=debug,bounce=info";

const WIDTH: f64 = 100.0;
const HEIGHT: f64 = 50.0;
const WALL: f64 = 2.0;
const GRAVITY: f64 = 9.8;
const DT: f64 = 1.0 / 120.0;

fn init_logging() -> Result<()> {
    let mut filter = DEFAULT_FILTER.to_owned();
    if let Ok(env_filter) = env::var(EnvFilter::DEFAULT_ENV) {
        filter.push(',');
        filter.push_str(&env_filter);
    }

    let format = fmt::format().compact().with_line_number(true);
    let subscriber = Registry::default()
        .with(EnvFilter::try_new(filter).context("invalid log filter")?)
        .with(fmt::layer().event_format(format));
    tracing::subscriber::set_global_default(subscriber)
        .context("unable to install log subscriber")?;
    Ok(())
}

fn add_wall(scene: &mut Scene, corner_one: Vec2, corner_two: Vec2) -> polyphys::BodyId {
    let mut wall = Body::with_info(
        make_rectangle(corner_one, corner_two),
        f64::INFINITY,
        RgbColor::BLACK,
        BodyKind::Wall.into(),
    );
    wall.set_removability(false);
    scene.add_body(wall)
}

fn main() -> Result<()> {
    init_logging()?;

    let mut args = env::args().skip(1);
    let ticks: u32 = match args.next() {
        Some(arg) => arg.parse().with_context(|| format!("bad tick count {:?}", arg))?,
        None => 1200,
    };
    let elasticity: f64 = match args.next() {
        Some(arg) => arg.parse().with_context(|| format!("bad elasticity {:?}", arg))?,
        None => 0.9,
    };
    if !(0.0..=1.0).contains(&elasticity) {
        bail!("elasticity must be within [0, 1], got {}", elasticity);
    }

    let config = SceneConfig::new().with_circle_dots_per_radius(6.0);
    let mut scene = Scene::try_with_config(config)?;

    let walls = [
        add_wall(&mut scene, Vec2::new(0.0, -WALL), Vec2::new(WIDTH, 0.0)),
        add_wall(&mut scene, Vec2::new(0.0, HEIGHT), Vec2::new(WIDTH, HEIGHT + WALL)),
        add_wall(&mut scene, Vec2::new(-WALL, 0.0), Vec2::new(0.0, HEIGHT)),
        add_wall(&mut scene, Vec2::new(WIDTH, 0.0), Vec2::new(WIDTH + WALL, HEIGHT)),
    ];

    let shape = scene.make_circle(3.0, Vec2::new(WIDTH / 4.0, HEIGHT * 0.75));
    let mut ball = Body::with_info(shape, 1.0, RgbColor::new(0.9, 0.2, 0.2), BodyInfo::new(BodyKind::Ball, 0.0));
    ball.set_velocity(Vec2::new(20.0, 0.0));
    ball.set_angular_velocity(0.5);
    let ball = scene.add_body(ball);

    create_earth_gravity(&mut scene, GRAVITY, ball);
    create_drag(&mut scene, 0.01, ball);
    for wall in walls {
        create_physics_collision(&mut scene, elasticity, ball, wall);
    }

    info!(ticks, elasticity, "starting bounce");
    for tick in 0..ticks {
        scene.tick(DT);

        let Some(body) = scene.body(ball) else {
            warn!(tick, "ball left the scene");
            break;
        };
        if tick % 120 == 0 {
            let centroid = body.centroid();
            let speed = body.velocity().magnitude();
            let energy = 0.5 * body.mass() * speed * speed + body.mass() * GRAVITY * centroid.y;
            info!(tick, x = centroid.x, y = centroid.y, speed, energy, "ball");
        }
    }

    Ok(())
}
