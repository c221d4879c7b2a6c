//! Simulator: owns the machine state and the run statistics side-by-side.

use crate::common::error::Fault;
use crate::config::Config;
use crate::core::{self, MachineState};
use crate::sim::trace;
use crate::stats::SimStats;

/// Top-level simulator: architectural state plus run statistics.
pub struct Simulator {
    /// Architectural state of the machine.
    pub state: MachineState,
    /// Counters accumulated over the run.
    pub stats: SimStats,
    /// Print the full state before every cycle.
    pub trace: bool,
    /// Optional cycle cap for programs that never halt.
    pub max_cycles: Option<u64>,
}

impl Simulator {
    /// Creates a simulator for a loaded machine-code image.
    pub fn new(image: &[i32], config: &Config) -> Self {
        Self {
            state: MachineState::new(image, config.memory.mem_words),
            stats: SimStats::default(),
            trace: config.general.trace_state,
            max_cycles: config.general.max_cycles,
        }
    }

    /// Advances the machine by one clock cycle.
    pub fn step(&mut self) -> Result<(), Fault> {
        self.state = core::step(&self.state, &mut self.stats)?;
        self.stats.cycles = self.state.cycles;
        Ok(())
    }

    /// Runs cycles until the machine halts, a fault occurs, or the cycle cap
    /// is reached.
    ///
    /// The halt condition is structural: the loop stops when the instruction
    /// in the Memory/Writeback latch is HALT, checked at the start of each
    /// cycle using the previous cycle's value. On success `self.state` holds
    /// the final reported state.
    pub fn run(&mut self) -> Result<(), Fault> {
        while !self.state.halted() {
            if let Some(limit) = self.max_cycles {
                if self.state.cycles >= limit {
                    return Err(Fault::CycleLimitExceeded(limit));
                }
            }
            if self.trace {
                trace::print_state(&self.state);
            }
            self.step()?;
        }
        Ok(())
    }
}
