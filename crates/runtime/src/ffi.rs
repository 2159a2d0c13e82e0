//! C ABI exports for the runtime. This module centralizes all C-callable
//! symbols (extern "C" functions with unmangled names) so the public ABI is
//! easy to audit and maintain.
//!
//! Export names are the symbols Javalette compilers emit calls to, hence
//! the camelCase. Write errors on stdout are discarded: the runtime must
//! not take down a compiled program because its output pipe closed.

use std::ffi::CStr;
use std::io;

use libc::{c_char, c_int};

use crate::console;

/// Print an integer to stdout, followed by a newline.
#[unsafe(export_name = "printInt")]
pub extern "C" fn print_int(value: c_int) {
    let _ = console::write_int(&mut io::stdout(), value);
}

/// Print a double to stdout, followed by a newline.
#[unsafe(export_name = "printDouble")]
pub extern "C" fn print_double(value: f64) {
    let _ = console::write_double(&mut io::stdout(), value);
}

/// Print a string to stdout, followed by a newline.
///
/// # Safety
///
/// `value` must be a valid pointer to a NUL-terminated C string, or null.
/// If non-null, the string must remain valid for the duration of this call.
/// A null pointer is ignored.
#[unsafe(export_name = "printString")]
pub unsafe extern "C" fn print_string(value: *const c_char) {
    if value.is_null() {
        return;
    }
    let s = unsafe { CStr::from_ptr(value) }.to_string_lossy();
    let _ = console::write_str(&mut io::stdout(), &s);
}

/// Read one line from stdin and parse it as a base-10 integer.
///
/// On parse or I/O failure the diagnostic goes to stderr and -1 is
/// returned; the caller cannot tell that apart from a genuinely read -1.
#[unsafe(export_name = "readInt")]
pub extern "C" fn read_int() -> c_int {
    console::read_int_or_sentinel(&mut io::stdin().lock(), &mut io::stderr())
}

/// Read one line from stdin and parse it as a floating-point number,
/// returning -1.0 on any failure, with the same caveat as `read_int`.
#[unsafe(export_name = "readDouble")]
pub extern "C" fn read_double() -> f64 {
    console::read_double_or_sentinel(&mut io::stdin().lock(), &mut io::stderr())
}
