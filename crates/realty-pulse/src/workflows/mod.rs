pub mod leads;
pub mod market;
