//! Linker-defined memory regions
//!
//! cortex-m-rt's `link.x` brackets the zero-initialized section with
//! `__sbss` and `__ebss`. Only the addresses of these symbols are taken;
//! they are never dereferenced here.

use core::ptr::addr_of;

use echoterm_hal::MemoryRegion;

extern "C" {
    static __sbss: u8;
    static __ebss: u8;
}

/// Bounds of `.bss`
pub fn bss_region() -> MemoryRegion {
    // SAFETY: taking the address of a linker symbol does not read it.
    let (start, end) = unsafe { (addr_of!(__sbss) as usize, addr_of!(__ebss) as usize) };
    MemoryRegion::new(start, end)
}
