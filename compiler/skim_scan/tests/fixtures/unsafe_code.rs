//! Raw pointer helpers.

use std::ptr;

my_macro!{ a => b, c => { d } }

pub unsafe fn read_raw(p: *const u8) -> u8 {
    *p
}

pub fn copy_first(src: &[u8], dst: &mut [u8]) {
    if src.is_empty() || dst.is_empty() {
        return;
    }
    unsafe {
        ptr::copy_nonoverlapping(src.as_ptr(), dst.as_mut_ptr(), 1);
    }
}

pub struct Buffer(*mut u8);

unsafe impl Send for Buffer {}

impl Buffer {
    pub fn first(&self) -> u8 {
        unsafe { *self.0 }
    }
}

static GREETING: &str = "unsafe { not a block }";

macro_rules! deref {
    ($p:expr) => {
        unsafe { *$p }
    };
}
