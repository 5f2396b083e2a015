use strum::{Display, EnumIter};

// variants of the k-mer enumeration inside xpas_algs.
// the declaration order is the order in which they are benchmarked
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Algorithm {
    Bb,
    Dc,
    Dccw,
}

impl Algorithm {
    // xpas_algs takes the selection as three positional 0/1 arguments
    pub fn flags(&self) -> [u8; 3] {
        match self {
            Algorithm::Bb => [1, 0, 0],
            Algorithm::Dc => [0, 1, 0],
            Algorithm::Dccw => [0, 0, 1],
        }
    }
}
