use std::alloc::{self, Layout};
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;
use std::slice;

use tracing::trace;

use crate::Value;
use crate::util::error::CapacityOverflow;

/// A heap allocated run of [`Value`] slots, sized at runtime and only ever grown.
///
/// Every slot is initialized: fresh memory is zeroed on allocation and on growth, which is a valid
/// bit pattern for [`Value`]. Which slots are meaningful is decided by the owner of the Buffer.
pub(crate) struct Buffer {
    ptr: NonNull<Value>,
    cap: usize,
}

impl Buffer {
    /// Allocates a new Buffer with `cap` zeroed slots.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the memory layout would exceed [`isize::MAX`] bytes.
    pub fn zeroed(cap: usize) -> Result<Buffer, CapacityOverflow> {
        let layout = Buffer::make_layout(cap)?;

        Ok(Buffer {
            ptr: Buffer::make_ptr(layout),
            cap,
        })
    }

    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Grows the Buffer to `new_cap` slots, keeping the contents of all existing slots and zeroing
    /// the new ones. Does nothing if `new_cap` isn't larger than the current capacity.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the memory layout would exceed [`isize::MAX`] bytes. The
    /// Buffer is left untouched in this case.
    pub fn grow_to(&mut self, new_cap: usize) -> Result<(), CapacityOverflow> {
        if new_cap <= self.cap {
            return Ok(());
        }

        let new_layout = Buffer::make_layout(new_cap)?;
        trace!(old_cap = self.cap, new_cap, "reallocating buffer");

        let new_ptr = if self.cap == 0 {
            // Nothing was allocated for the previous (dangling) pointer.
            Buffer::make_ptr(new_layout)
        } else {
            let old_layout = Buffer::make_layout(self.cap)?;

            // SAFETY: ptr was allocated by the global allocator with old_layout, which has a
            // non-zero size. new_layout.size() is non-zero and has already been checked against
            // isize::MAX by Layout::array.
            let raw_ptr: *mut Value = unsafe {
                alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()).cast()
            };

            let ptr = NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(new_layout));

            // SAFETY: The slots from cap to new_cap lie within the new allocation and realloc leaves
            // them uninitialized.
            unsafe { ptr.add(self.cap).write_bytes(0, new_cap - self.cap); }

            ptr
        };

        self.ptr = new_ptr;
        self.cap = new_cap;
        Ok(())
    }

    fn make_layout(cap: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<Value>(cap).map_err(|_| CapacityOverflow)
    }

    /// Creates a zeroed allocation for `layout`, or a dangling pointer for a zero-sized layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    fn make_ptr(layout: Layout) -> NonNull<Value> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc_zeroed(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        // Value has no drop glue, so only the allocation itself needs releasing.
        match Buffer::make_layout(self.cap) {
            Ok(layout) if layout.size() != 0 => {
                // SAFETY: ptr was allocated by the global allocator with this exact layout.
                // Zero-sized layouts are never allocated and are guarded against.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
            },
            _ => {},
        }
    }
}

impl Deref for Buffer {
    type Target = [Value];

    fn deref(&self) -> &Self::Target {
        // SAFETY: ptr is valid and properly aligned for cap initialized values (or dangling with cap
        // 0). The borrow checker prevents mutation for the lifetime of the slice.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.cap) }
    }
}

impl DerefMut for Buffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: ptr is valid and properly aligned for cap initialized values (or dangling with cap
        // 0). The unique borrow of self prevents any other access for the lifetime of the slice.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.cap) }
    }
}

// SAFETY: Buffer uniquely owns its allocation, so it can be sent between threads.
unsafe impl Send for Buffer {}
// SAFETY: Buffer's API obeys all rules of the borrow checker, so no interior mutability occurs.
unsafe impl Sync for Buffer {}
