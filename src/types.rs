use serde::{Deserialize, Serialize};

pub const NUM_DENDRITES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dendrite {
    Dend1,
    Dend2,
}

impl Dendrite {
    pub fn index(self) -> usize {
        match self {
            Dendrite::Dend1 => 0,
            Dendrite::Dend2 => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Compartment {
    Soma,
    Dend1,
    Dend2,
}
