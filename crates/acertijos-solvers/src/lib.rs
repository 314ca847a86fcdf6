//! acertijos-solvers — the transformation behind each acertijo.
//!
//! Every module here is pure: it takes the full input text (plus whatever
//! config section applies) and returns the text to write. File handling and
//! argument validation live in `acertijos-core`.
//!
//! | Module | Acertijo | Result |
//! |---|---|---|
//! | [`time_window`] | 1 | Capture hour for Pato, or nothing |
//! | [`cipher`] | 2 | Masked and possibly reversed lyric lines |
//! | [`aggregate`] | 3 | Yearly and historic infraction podiums |
//! | [`grid`] | 4, 6 | Papyrus message; decoded wall |
//! | [`keyword`] | 5 | Keyword count and factorial/Fibonacci value |

pub mod aggregate;
pub mod cipher;
pub mod grid;
pub mod keyword;
pub mod time_window;
