use i8080emu::RunConfig;
use i8080emu_core::Cpu;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let image = args.next();
    let max_steps = args.next();

    let Some(image) = image else {
        // Nothing to run: show the reset state.
        eprintln!("usage: i8080emu <image> [max-steps]");
        match Cpu::new() {
            Ok(cpu) => println!("{cpu}"),
            Err(err) => {
                eprintln!("Failed to initialize CPU: {err}");
                std::process::exit(1);
            }
        }
        return;
    };

    let max_steps = match max_steps.map(|s| s.parse::<u64>()).transpose() {
        Ok(max_steps) => max_steps,
        Err(err) => {
            eprintln!("Invalid step limit: {err}");
            eprintln!("usage: i8080emu <image> [max-steps]");
            std::process::exit(1);
        }
    };

    let config = RunConfig::builder()
        .image(image.into())
        .max_steps(max_steps)
        .trace(log::log_enabled!(log::Level::Trace))
        .build();

    log::info!("Running image '{}'", config.image.display());
    match i8080emu::run(&config) {
        Ok(report) => {
            println!(
                "{} instructions, {} cycles{}",
                report.steps,
                report.cycles,
                if report.halted { ", halted" } else { "" }
            );
            println!("{}", report.cpu);
        }
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(1);
        }
    }
}
