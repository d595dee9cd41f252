/// Graph ownership and Turtle I/O
pub mod assembler;

pub use assembler::{read_turtle, GraphAssembler};
