// fasta.rs - FASTA barcode loader

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use bio::io::fasta;
use crate::data::library::BarcodeLibrary;
use crate::error::Result;

impl BarcodeLibrary {
    pub fn from_fasta_file(file_path: &Path) -> Result<Self> {
        let file = File::open(file_path)?;
        Self::from_fasta_reader(BufReader::new(file))
    }

    /// One barcode per record; FASTA carries no read counts.
    pub fn from_fasta_reader<R: Read>(reader: R) -> Result<Self> {
        let reader = fasta::Reader::new(reader);
        let mut barcodes = Vec::new();

        for record in reader.records() {
            let record = record?;
            barcodes.push(String::from_utf8_lossy(record.seq()).into_owned());
        }

        Ok(Self {
            barcodes,
            reads: None,
        })
    }
}
