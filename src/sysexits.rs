//! legacy exit status codes for system programs.
//! reference: [SYSEXITS](https://man.freebsd.org/cgi/man.cgi?query=sysexits&apropos=0&sektion=0&manpath=FreeBSD+11.2-stable&arch=default&format=html)

/// value: 65 <br>
/// The input data was incorrect in some way. Used for malformed jobs and glob patterns.
pub const EX_DATAERR: i32 = 65;

/// value: 66 <br>
/// An input file did not exist or was not readable. Used for the job file.
pub const EX_NOINPUT: i32 = 66;

/// value: 74 <br>
/// An error occurred while doing I/O on some file.
pub const EX_IOERR: i32 = 74;

/// value: 78 <br>
/// Something was found in an unconfigured or misconfigured state.
pub const EX_CONFIG: i32 = 78;
