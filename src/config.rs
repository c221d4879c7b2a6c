use serde::Deserialize;

use crate::common::constants::MEM_WORDS;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub memory: MemoryConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    #[serde(default)]
    pub trace_state: bool,

    #[serde(default)]
    pub max_cycles: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct MemoryConfig {
    #[serde(default = "default_mem_words")]
    pub mem_words: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            mem_words: MEM_WORDS,
        }
    }
}

fn default_mem_words() -> usize {
    MEM_WORDS
}
