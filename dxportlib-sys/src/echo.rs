//! Stand-in native implementation that records every call.
//!
//! Each family's `echo()` table points at `extern "C"` functions that push a [`Call`] into a
//! thread-local log instead of reaching a real library. Output slots are filled from a queue of
//! values prepared with [`push_slot_values`], or left untouched when the queue is empty.

use std::{
    cell::RefCell,
    collections::VecDeque,
    ffi::CStr,
    os::raw::{c_char, c_double, c_float, c_int, c_longlong, c_void},
};

use crate::ValueKind;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(c_int),
    Float(c_float),
    Double(c_double),
    LongLong(c_longlong),
    /// Bytes of a text argument, without the terminating NUL.
    Text(Vec<u8>),
    NullText,
    Slot,
    Buffer,
}

impl Value {
    /// The parameter kind this value was recorded from.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Double(_) => ValueKind::Double,
            Self::LongLong(_) => ValueKind::LongLong,
            Self::Text(_) | Self::NullText => ValueKind::Text,
            Self::Slot => ValueKind::IntSlot,
            Self::Buffer => ValueKind::Buffer,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub name: &'static str,
    pub args: Vec<Value>,
}

thread_local! {
    static CALLS: RefCell<Vec<Call>> = const { RefCell::new(Vec::new()) };
    static SLOT_VALUES: RefCell<VecDeque<c_int>> = const { RefCell::new(VecDeque::new()) };
    static RETURNS: RefCell<VecDeque<c_longlong>> = const { RefCell::new(VecDeque::new()) };
}

pub trait Echo {
    /// # Safety
    /// Pointer arguments must be null or valid for the access their kind implies.
    unsafe fn echo(self) -> Value;
}

impl Echo for c_int {
    unsafe fn echo(self) -> Value {
        Value::Int(self)
    }
}

impl Echo for c_float {
    unsafe fn echo(self) -> Value {
        Value::Float(self)
    }
}

impl Echo for c_double {
    unsafe fn echo(self) -> Value {
        Value::Double(self)
    }
}

impl Echo for c_longlong {
    unsafe fn echo(self) -> Value {
        Value::LongLong(self)
    }
}

impl Echo for *const c_char {
    unsafe fn echo(self) -> Value {
        if self.is_null() {
            Value::NullText
        } else {
            Value::Text(unsafe { CStr::from_ptr(self) }.to_bytes().to_vec())
        }
    }
}

impl Echo for *mut c_int {
    unsafe fn echo(self) -> Value {
        if !self.is_null() {
            if let Some(value) = SLOT_VALUES.with_borrow_mut(VecDeque::pop_front) {
                unsafe { self.write(value) };
            }
        }
        Value::Slot
    }
}

impl Echo for *mut c_char {
    unsafe fn echo(self) -> Value {
        Value::Buffer
    }
}

impl Echo for *mut c_void {
    unsafe fn echo(self) -> Value {
        Value::Buffer
    }
}

/// Value handed back by a recorded call.
pub trait EchoReturn {
    fn echo_return() -> Self;
}

impl EchoReturn for c_int {
    fn echo_return() -> Self {
        next_return().try_into().unwrap_or(-1)
    }
}

impl EchoReturn for c_float {
    #[allow(clippy::cast_precision_loss)]
    fn echo_return() -> Self {
        next_return() as c_float
    }
}

impl EchoReturn for c_longlong {
    fn echo_return() -> Self {
        next_return()
    }
}

fn next_return() -> c_longlong {
    RETURNS.with_borrow_mut(VecDeque::pop_front).unwrap_or(0)
}

pub fn record(name: &'static str, args: Vec<Value>) {
    CALLS.with_borrow_mut(|calls| calls.push(Call { name, args }));
}

/// Drains the calls recorded on this thread.
#[must_use]
pub fn take_calls() -> Vec<Call> {
    CALLS.with_borrow_mut(std::mem::take)
}

#[must_use]
pub fn last_call() -> Option<Call> {
    CALLS.with_borrow(|calls| calls.last().cloned())
}

/// Queues values written into the next output slots, in parameter order.
pub fn push_slot_values(values: impl IntoIterator<Item = c_int>) {
    SLOT_VALUES.with_borrow_mut(|queue| queue.extend(values));
}

/// Queues the value returned by the next recorded call. Calls return `0` by default.
pub fn push_return(value: impl Into<c_longlong>) {
    RETURNS.with_borrow_mut(|queue| queue.push_back(value.into()));
}

pub fn reset() {
    CALLS.with_borrow_mut(Vec::clear);
    SLOT_VALUES.with_borrow_mut(VecDeque::clear);
    RETURNS.with_borrow_mut(VecDeque::clear);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_follow_the_queue() {
        reset();
        push_slot_values([7]);
        let mut first = -1;
        let mut second = -1;
        unsafe {
            assert_eq!(Echo::echo(&raw mut first), Value::Slot);
            assert_eq!(Echo::echo(&raw mut second), Value::Slot);
        }
        assert_eq!(first, 7);
        assert_eq!(second, -1);
    }

    #[test]
    fn returns_are_consumed_in_order() {
        reset();
        push_return(3);
        push_return(c_longlong::from(c_int::MAX) + 1);
        assert_eq!(<c_int as EchoReturn>::echo_return(), 3);
        assert_eq!(<c_int as EchoReturn>::echo_return(), -1);
        assert_eq!(<c_int as EchoReturn>::echo_return(), 0);
    }

    #[test]
    fn text_is_copied_without_nul() {
        let text = c"menu.png";
        let value = unsafe { Echo::echo(text.as_ptr()) };
        assert_eq!(value, Value::Text(b"menu.png".to_vec()));
        assert_eq!(
            unsafe { Echo::echo(std::ptr::null::<c_char>()) },
            Value::NullText
        );
        assert_eq!(Value::NullText.kind(), ValueKind::Text);
        assert_eq!(Value::Slot.kind(), ValueKind::IntSlot);
        assert_eq!(Value::LongLong(0).kind(), ValueKind::LongLong);
    }
}
