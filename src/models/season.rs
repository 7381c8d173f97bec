use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
pub struct Season {
    pub number: u32,
    pub active: bool,
}

impl Season {
    pub fn new(number: u32) -> Self {
        Self { number, active: false }
    }

    /// `S` + season number zero-padded to two digits (`S03`, `S12`, `S104`)
    pub fn label(&self) -> String {
        format!("S{:02}", self.number)
    }
}
