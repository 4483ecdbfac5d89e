pub mod encoder;
pub mod error;
pub mod note;
pub mod parser;
pub mod song;

use crate::error::SheetError;
use crate::song::Song;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compile a sheet source string into a validated [`Song`].
///
/// Encoding is a separate step (see [`encoder`]) so that sheet errors and
/// sink I/O errors stay on distinct channels.
pub fn compile(source: &str) -> Result<Song, SheetError> {
    parser::parse_sheet(source)
}
