use rvpipe_core::config::Config;
use rvpipe_core::core::TickControl;
use rvpipe_core::sim::Simulator;

pub struct TestContext {
    pub sim: Simulator,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
        let _ = env_logger::builder().is_test(true).try_init();

        Self {
            sim: Simulator::new(config).expect("default config is valid"),
        }
    }

    /// Loads a program at address 0.
    pub fn load_program(mut self, program: &[u32]) -> Self {
        self.sim.load_program(program);
        self
    }

    /// Preloads data memory starting at address 0.
    pub fn load_data(mut self, words: &[u32]) -> Self {
        self.sim.memory.load_data(words);
        self
    }

    pub fn tick(&mut self) {
        self.sim.step();
    }

    pub fn run(&mut self, cycles: usize) {
        for _ in 0..cycles {
            self.sim.tick(TickControl::Run);
        }
    }

    /// Runs to halt and returns the tick count.
    pub fn run_to_halt(&mut self) -> u64 {
        self.sim.run_until_halt().expect("program should halt")
    }

    pub fn reg(&self, idx: usize) -> u32 {
        self.sim.core.debug_read(idx)
    }
}
