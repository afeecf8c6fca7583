//! Memory-mapped register access
//!
//! Thin volatile read/write primitives over raw physical addresses. Every
//! access is emitted exactly once and in program order relative to every
//! other access made through this module; nothing is cached or elided.
//!
//! There is no validation. An address that does not name a readable (or
//! writable) location of the right width and alignment is undefined
//! behavior, which is why the free functions and [`Register::new`] are
//! `unsafe`. Keep callers of this module few and audited.

use core::marker::PhantomData;
use core::ptr;

mod sealed {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// Register access width: `u8`, `u16` or `u32`
pub trait RegisterWidth: sealed::Sealed + Copy {
    /// Volatile load of one value of this width
    ///
    /// # Safety
    ///
    /// `addr` must be valid for reads of `Self` and suitably aligned.
    unsafe fn load(addr: usize) -> Self;

    /// Volatile store of one value of this width
    ///
    /// # Safety
    ///
    /// `addr` must be valid for writes of `Self` and suitably aligned.
    unsafe fn store(addr: usize, value: Self);
}

macro_rules! impl_register_width {
    ($($ty:ty),*) => {
        $(
            impl RegisterWidth for $ty {
                #[inline(always)]
                unsafe fn load(addr: usize) -> Self {
                    ptr::read_volatile(addr as *const $ty)
                }

                #[inline(always)]
                unsafe fn store(addr: usize, value: Self) {
                    ptr::write_volatile(addr as *mut $ty, value)
                }
            }
        )*
    };
}

impl_register_width!(u8, u16, u32);

/// Read a register of width `W`
///
/// # Safety
///
/// `addr` must be valid for reads of `W` and suitably aligned.
#[inline(always)]
pub unsafe fn read<W: RegisterWidth>(addr: usize) -> W {
    W::load(addr)
}

/// Write a register of width `W`
///
/// # Safety
///
/// `addr` must be valid for writes of `W` and suitably aligned.
#[inline(always)]
pub unsafe fn write<W: RegisterWidth>(addr: usize, value: W) {
    W::store(addr, value)
}

/// Read an 8-bit register
///
/// # Safety
///
/// See [`read`].
#[inline(always)]
pub unsafe fn read8(addr: usize) -> u8 {
    read(addr)
}

/// Read a 16-bit register
///
/// # Safety
///
/// See [`read`].
#[inline(always)]
pub unsafe fn read16(addr: usize) -> u16 {
    read(addr)
}

/// Read a 32-bit register
///
/// # Safety
///
/// See [`read`].
#[inline(always)]
pub unsafe fn read32(addr: usize) -> u32 {
    read(addr)
}

/// Write an 8-bit register
///
/// # Safety
///
/// See [`write`].
#[inline(always)]
pub unsafe fn write8(addr: usize, value: u8) {
    write(addr, value)
}

/// Write a 16-bit register
///
/// # Safety
///
/// See [`write`].
#[inline(always)]
pub unsafe fn write16(addr: usize, value: u16) {
    write(addr, value)
}

/// Write a 32-bit register
///
/// # Safety
///
/// See [`write`].
#[inline(always)]
pub unsafe fn write32(addr: usize, value: u32) {
    write(addr, value)
}

/// Typed handle to a single register
///
/// The address is vouched for once, at construction. After that every
/// access is safe and keeps the same volatile ordering guarantees as the
/// free functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Register<W: RegisterWidth> {
    addr: usize,
    _width: PhantomData<W>,
}

impl<W: RegisterWidth> Register<W> {
    /// Create a handle for the register at `addr`
    ///
    /// # Safety
    ///
    /// For as long as the handle (or any copy of it) exists, `addr` must be
    /// valid for volatile reads and writes of `W` and suitably aligned.
    /// Concurrent users of the same address must be serialized externally.
    pub const unsafe fn new(addr: usize) -> Self {
        Self {
            addr,
            _width: PhantomData,
        }
    }

    /// Address this handle points at
    pub const fn addr(&self) -> usize {
        self.addr
    }

    /// Volatile read
    #[inline(always)]
    pub fn read(&self) -> W {
        // SAFETY: validity was asserted by the caller of `Register::new`.
        unsafe { W::load(self.addr) }
    }

    /// Volatile write
    #[inline(always)]
    pub fn write(&self, value: W) {
        // SAFETY: validity was asserted by the caller of `Register::new`.
        unsafe { W::store(self.addr, value) }
    }

    /// Read, transform, write back (two separate accesses)
    #[inline(always)]
    pub fn modify<F: FnOnce(W) -> W>(&self, f: F) {
        let value = self.read();
        self.write(f(value));
    }
}
