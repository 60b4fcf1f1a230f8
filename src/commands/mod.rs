mod reel;

pub use reel::*;
