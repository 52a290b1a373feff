//! Encodes payloads as QR Code Model 2 symbols, per JIS X 0510:2018 /
//! ISO/IEC 18004.
//!
//! This crate is the algorithmic core: charset classification, Annex J
//! mixed-mode segmentation, bit-packed data encoding, GF(2^8) Reed-Solomon
//! error correction, block interleaving, matrix construction, masking, and
//! format/version information embedding. It has no knowledge of how a
//! symbol is rendered or transmitted — that is left to a caller such as the
//! `qrce` command-line collaborator.
//!
//! # Example
//!
//! ```
//! use qrce_core::{encode, CodeEcc, EncodeOptions};
//!
//! let qr = encode(b"HELLO WORLD", CodeEcc::Quartile, EncodeOptions::default()).unwrap();
//! for y in 0..qr.size() {
//!     for x in 0..qr.size() {
//!         let _dark = qr.get_module(x, y);
//!     }
//! }
//! ```

mod bit_buffer;
mod charset;
mod code_ecc;
mod data_analysis;
mod data_encoding;
mod error;
mod final_message;
mod format_version;
mod gf256;
mod mask;
mod module;
mod module_placement;
mod qr_code;
mod rs_block;
mod segment;
mod segment_mode;
mod version;

pub use code_ecc::CodeEcc;
pub use error::QrError;
pub use module::Module;
pub use qr_code::{encode, EncodeOptions, QrCode};
pub use segment::Segment;
pub use segment_mode::Mode;
pub use version::{Version, VersionClass};
