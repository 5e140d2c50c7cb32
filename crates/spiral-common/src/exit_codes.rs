//! Process exit codes following sysexits.h.

pub const SUCCESS: i32 = 0;
/// EX_USAGE: bad arguments or input.
pub const USAGE: i32 = 64;
/// EX_DATAERR
pub const DATAERR: i32 = 65;
/// EX_SOFTWARE
pub const SOFTWARE: i32 = 70;
/// EX_IOERR: output could not be written.
pub const IOERR: i32 = 74;
