pub mod constants;
pub mod derive;
pub mod ixs;
pub mod tx;
pub mod typedefs;
