pub mod decode;
pub mod participants;
pub mod scan;
pub mod split;
pub mod utils;
