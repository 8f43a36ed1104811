//! Internal test modules.

mod format;
