/// UI module
///
/// The rendering layer: it consumes application state as plain data and
/// emits messages. Gallery motion and ordering come from the carousel
/// engine; everything here is presentation.
pub mod admin;
pub mod gallery;
pub mod sections;
pub mod theme;
