use std::path::PathBuf;

use anyhow::{Context, Result};
use i8080emu_core::{Cpu, Detached, InterruptController, RESET_PC};
use typed_builder::TypedBuilder;

/// How to load and run a program image.
#[derive(TypedBuilder, Clone, Debug)]
pub struct RunConfig {
    /// Raw binary image, copied byte for byte into memory.
    pub image: PathBuf,
    /// Load address. Execution starts here too.
    #[builder(default = RESET_PC)]
    pub origin: u16,
    /// Stop after this many instructions. `None` runs until HLT.
    #[builder(default)]
    pub max_steps: Option<u64>,
    /// Stop as soon as HLT is executed.
    #[builder(default = true)]
    pub stop_on_halt: bool,
    /// Log every executed instruction at trace level.
    #[builder(default)]
    pub trace: bool,
}

/// Interrupt controller that remembers whether HLT was executed.
#[derive(Clone, Copy, Debug, Default)]
pub struct HaltLatch {
    halted: bool,
}

impl HaltLatch {
    pub fn halted(&self) -> bool {
        self.halted
    }
}

impl InterruptController for HaltLatch {
    fn halt(&mut self) {
        self.halted = true;
    }
}

pub type RunnerCpu = Cpu<Detached, HaltLatch>;

/// Outcome of [`run`].
#[derive(Debug)]
pub struct RunReport {
    pub steps: u64,
    pub cycles: u64,
    pub halted: bool,
    pub cpu: RunnerCpu,
}

/// Read the image named by `config` and run it.
pub fn run(config: &RunConfig) -> Result<RunReport> {
    let image = std::fs::read(&config.image)
        .with_context(|| format!("failed to read image '{}'", config.image.display()))?;
    run_image(config, &image)
}

/// Run an image that is already in memory. `config.image` is not used.
///
/// Without a step limit and with `stop_on_halt` off this never returns.
pub fn run_image(config: &RunConfig, image: &[u8]) -> Result<RunReport> {
    let mut cpu = Cpu::with_devices(Detached, HaltLatch::default())?;
    cpu.load(config.origin, image)
        .context("failed to place image in memory")?;
    cpu.set_pc(config.origin);
    log::info!(
        "Loaded {} bytes at 0x{:04x}",
        image.len(),
        config.origin
    );

    let mut steps = 0u64;
    let mut cycles = 0u64;
    loop {
        if config.max_steps.is_some_and(|max| steps >= max) {
            log::info!("Step limit of {steps} reached");
            break;
        }

        let pc = cpu.pc();
        let opcode = cpu.read(pc);
        let step_cycles = cpu.step();
        steps += 1;
        cycles += u64::from(step_cycles);

        if config.trace {
            log::trace!("0x{pc:04x}: {opcode:02x} ({step_cycles} cycles)");
        }

        if config.stop_on_halt && cpu.interrupts().halted() {
            log::info!("HLT at 0x{pc:04x}");
            break;
        }
    }

    Ok(RunReport {
        steps,
        cycles,
        halted: cpu.interrupts().halted(),
        cpu,
    })
}
