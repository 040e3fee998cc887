//! Headless demo: sweeps the scroll track end to end and logs checkpoints.

use std::path::Path;
use std::time::Duration;

use scrollrig::options::Options;
use scrollrig::util::FrameClock;
use scrollrig::{RigError, ShowcaseRig};

/// Seconds the demo takes to sweep the scroll track end to end.
const SWEEP_SECS: f32 = 12.0;

fn run(options: &Options) -> Result<(), RigError> {
    let mut rig = ShowcaseRig::from_options(options)?;
    let mut clock = FrameClock::new();
    let mut next_report = 1.0_f32;

    loop {
        let dt = clock.tick();
        let t = clock.elapsed();
        if t >= SWEEP_SECS {
            break;
        }

        rig.set_scroll(t / SWEEP_SECS);
        rig.advance(dt);

        if t >= next_report {
            log::info!(
                "t={t:.1}s progress={:.3} page={:.2} records={} fps={:.0}",
                rig.progress(),
                rig.track().page(),
                rig.arena().len(),
                clock.fps(),
            );
            next_report += 1.0;
        }

        std::thread::sleep(Duration::from_millis(16));
    }

    rig.shutdown();
    log::info!("sweep complete");
    Ok(())
}

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(opts) => opts,
            Err(e) => {
                log::error!("failed to load options from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    if let Err(e) = run(&options) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
