pub mod circuits;
pub mod parser;
pub mod part1;
pub mod part2;
pub mod point;
pub mod queue;
pub mod registry;
pub mod report;
