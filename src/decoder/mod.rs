//! PDF417 codeword extraction modules
//!
//! This module turns a rectified pixel grid into raw codewords:
//! - Row synchronization (scanline differencing)
//! - Row block decoding (majority vote per module column)
//! - Symbol classification (exact table lookup)
//! - Error-correction level recovery from row indicators

/// Working buffers and result trimming
pub mod assembler;
/// Exact pattern lookup and its inverse
pub mod classifier;
pub mod config;
/// Error-correction level recovery from row indicators
pub mod ec_level;
/// Splits one row into blocks and classifies them
pub mod row_decoder;
/// Groups scanlines into rows
pub mod synchronizer;
/// PDF417 symbol character tables
pub mod tables;
