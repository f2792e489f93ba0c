//! Configuration section definitions.
//!
//! Each module corresponds to a section in `iconplate.toml`:
//!
//! | Module    | TOML Section | Purpose                              |
//! |-----------|--------------|--------------------------------------|
//! | `preview` | `[preview]`  | Rounded preview icon paths and ratios |
//! | `macos`   | `[macos]`    | macOS icon set output and plate shape |

mod macos;
mod preview;

pub use macos::MacosConfig;
pub use preview::PreviewConfig;
