pub use flag::Flag;

pub mod flag;
