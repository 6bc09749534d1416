//! Stack growth for recursive walks over pattern trees.
//!
//! Simplification and rendering recurse once per nesting level. A pattern
//! built programmatically (for example by folding a list of alternatives into
//! nested groups) can be arbitrarily deep, so every recursive entry point in
//! `regen_ir` and `regen_canon` goes through [`with_stack`].
//!
//! On native targets the `stacker` crate allocates a fresh segment when the
//! remaining stack drops below [`RED_ZONE`]. On `wasm32` the closure is simply
//! called.

/// Remaining stack below which a new segment is allocated (64KB).
pub const RED_ZONE: usize = 64 * 1024;

/// Size of each newly allocated stack segment (2MB).
pub const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if less than [`RED_ZONE`] remains.
///
/// ```text
/// fn render(&self, out: &mut String) {
///     with_stack(|| for child in &self.children { child.render_into(out) })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn with_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn with_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
