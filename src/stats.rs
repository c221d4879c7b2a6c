//! Simulation statistics collection and reporting.
//!
//! Tracks cycle and retirement counts, the instruction mix, hazard stalls,
//! and branch resolution outcomes over a run.

use std::time::Instant;

/// Counters accumulated over a simulation run.
pub struct SimStats {
    start_time: Instant,
    pub cycles: u64,
    pub instructions_retired: u64,

    pub inst_alu: u64,
    pub inst_load: u64,
    pub inst_store: u64,
    pub inst_branch: u64,

    pub branches_taken: u64,
    pub branches_untaken: u64,

    pub stalls_data: u64,
    pub stalls_control: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            branches_taken: 0,
            branches_untaken: 0,
            stalls_data: 0,
            stalls_control: 0,
        }
    }
}

impl SimStats {
    /// Prints a formatted summary of the run.
    ///
    /// Displays cycle and retirement totals, IPC/CPI, the stall breakdown,
    /// the instruction mix, and branch resolution counts.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();

        let cyc = if self.cycles == 0 { 1 } else { self.cycles };
        let instr = if self.instructions_retired == 0 {
            1
        } else {
            self.instructions_retired
        };

        let ipc = self.instructions_retired as f64 / cyc as f64;
        let cpi = cyc as f64 / instr as f64;

        println!("\n==========================================================");
        println!("PIPELINE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {:.4} s", seconds);
        println!("sim_cycles               {}", self.cycles);
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_ipc                  {:.4}", ipc);
        println!("sim_cpi                  {:.4}", cpi);
        println!("----------------------------------------------------------");
        println!("CORE BREAKDOWN");
        println!(
            "  stalls.data            {} ({:.2}%)",
            self.stalls_data,
            (self.stalls_data as f64 / cyc as f64) * 100.0
        );
        println!(
            "  stalls.control         {} ({:.2}%)",
            self.stalls_control,
            (self.stalls_control as f64 / cyc as f64) * 100.0
        );
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        let total_inst = instr as f64;
        println!(
            "  op.alu                 {} ({:.2}%)",
            self.inst_alu,
            (self.inst_alu as f64 / total_inst) * 100.0
        );
        println!(
            "  op.load                {} ({:.2}%)",
            self.inst_load,
            (self.inst_load as f64 / total_inst) * 100.0
        );
        println!(
            "  op.store               {} ({:.2}%)",
            self.inst_store,
            (self.inst_store as f64 / total_inst) * 100.0
        );
        println!(
            "  op.branch              {} ({:.2}%)",
            self.inst_branch,
            (self.inst_branch as f64 / total_inst) * 100.0
        );
        println!("----------------------------------------------------------");
        println!("BRANCH RESOLUTION");
        println!("  branches.taken         {}", self.branches_taken);
        println!("  branches.untaken       {}", self.branches_untaken);
        println!("==========================================================");
    }
}
