pub mod swatch_upload;
