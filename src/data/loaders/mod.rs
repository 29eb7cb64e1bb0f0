// mod.rs - Barcode library loaders

pub mod csv;
pub mod fasta;
