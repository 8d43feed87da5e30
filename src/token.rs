use std::ffi::c_void;
use std::fmt;

/// Opaque, address-sized identity for one live registry mapping.
///
/// The value is the heap address of a marker cell owned by the issuing
/// [`Registry`](crate::Registry); it contains no pointer to the mapped value
/// and is meaningful only when handed back to the registry that issued it.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Token(pub(crate) usize);

impl Token {
    /// Raw integer form, for boundaries that carry handles as integer bits.
    pub fn as_bits(self) -> usize {
        self.0
    }

    /// Rebuilds a token from bits previously produced by [`Token::as_bits`].
    pub fn from_bits(bits: usize) -> Self {
        Token(bits)
    }

    /// Pointer form for C-style `void *user_data` parameters.
    ///
    /// The pointer must never be dereferenced, offset, or otherwise
    /// interpreted on either side of the boundary.
    pub fn as_ffi(self) -> *mut c_void {
        self.0 as *mut c_void
    }

    /// Rebuilds a token from a pointer previously produced by
    /// [`Token::as_ffi`].
    ///
    /// Accepts any pointer: a value that did not originate from the registry
    /// it is presented to simply fails the unmapped-token check on lookup.
    pub fn from_ffi(ptr: *mut c_void) -> Self {
        Token(ptr as usize)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({:#x})", self.0)
    }
}
