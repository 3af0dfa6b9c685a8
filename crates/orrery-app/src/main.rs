//! Headless orrery: runs the frame loop and logs body positions.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use orrery_app::{AppError, ConfigReloader, FrameLoop, FrameSnapshot, PlatformDirs, Session};
use orrery_clock::SystemWallClock;
use orrery_config::{CliArgs, Config};
use orrery_math::units::format_view_distance;
use orrery_scale::hud_label;
use tracing::{error, info};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let dirs = match args.config.as_deref() {
        Some(dir) => PlatformDirs::with_config_dir(dir),
        None => match PlatformDirs::resolve() {
            Ok(dirs) => dirs,
            Err(e) => {
                eprintln!("Failed to resolve platform directories: {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    let on_disk = Config::load_or_create(&dirs.config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    let mut config = on_disk.clone();
    config.apply_cli_overrides(&args);

    orrery_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));

    let reloader = ConfigReloader::new(&dirs.config_dir, on_disk, args);
    match run(config, reloader) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(mut config: Config, mut reloader: ConfigReloader) -> Result<(), AppError> {
    let mut session = Session::from_config(&config, SystemWallClock)?;

    for orbit in session.orbit_summaries() {
        info!(
            "{:<10} a = {:>12.6} AU  P = {:>10.4} yr  v = {:>7.3} km/s",
            orbit.name, orbit.semi_major_axis_au, orbit.period_years, orbit.mean_speed_km_s
        );
    }
    info!("{}", hud_label(session.scale(), config.host.camera_distance));

    let mut frames = FrameLoop::new();
    while config.host.frames == 0 || frames.frame_count() < config.host.frames {
        let frame_number = frames.frame_count();
        if config.host.reload_every > 0
            && frame_number > 0
            && frame_number % config.host.reload_every == 0
            && let Some(new) = reloader.poll()
        {
            session.apply_config(&new);
            config = new;
        }

        frames.tick(|dt| {
            let t = session.tick(dt);
            let snapshot = session.compute_frame(t);
            if config.host.report_every > 0 && frame_number % config.host.report_every == 0 {
                report(&snapshot);
            }
        });
        std::thread::sleep(Duration::from_millis(config.host.frame_interval_ms));
    }

    info!(
        "Ran {} frames over {:.2}s wall time, ending at {}",
        frames.frame_count(),
        frames.total_wall_time(),
        session.clock().current_time()
    );
    Ok(())
}

fn report(snapshot: &FrameSnapshot) {
    info!("Frame at {} ({} bodies)", snapshot.time, snapshot.bodies.len());
    for body in &snapshot.bodies {
        let p = body.position.vector;
        info!(
            "  {:<18} {:?} ({:>10.5}, {:>10.5}, {:>10.5}) AU  {:>12}  scene {:>9.1}",
            body.name,
            body.position.frame,
            p.x,
            p.y,
            p.z,
            format_view_distance(body.position.distance_au()),
            body.scene_position.length()
        );
    }
}
